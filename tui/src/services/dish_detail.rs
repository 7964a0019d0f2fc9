//! Dish detail view: picks one of the display states per frame and lays out
//! breadcrumb, dish card, and comment section.

use bistro_shared::models::{Comment, Dish, DishDetail};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::AppState;
use crate::services::comments;

/// Render the detail view. Exactly one branch runs per frame; the precedence
/// between the display states is fixed by the [`DishDetail`] variant order.
pub fn render_dish_detail(f: &mut Frame, state: &AppState) {
    let area = f.area();
    match &state.detail {
        DishDetail::Loading => render_loading(f, area),
        DishDetail::Failed(message) => render_error(f, area, message),
        DishDetail::Ready { dish, comments } => {
            render_ready(f, area, dish, comments.as_deref(), state.comment_scroll);
        }
        DishDetail::Absent => {}
    }
}

/// Loading indicator, and nothing else.
fn render_loading(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Loading . . .",
            Style::default().fg(Color::Yellow),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

/// The error message, and nothing else.
fn render_error(f: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {message}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

/// Breadcrumb, dish card, and the comment section beside it.
fn render_ready(f: &mut Frame, area: Rect, dish: &Dish, comments: Option<&[Comment]>, scroll: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // breadcrumb
            Constraint::Length(1), // spacing
            Constraint::Min(3),    // content
            Constraint::Length(1), // key hints
        ])
        .split(area);

    render_breadcrumb(f, chunks[0], &dish.name);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    render_dish_card(f, columns[0], dish);
    comments::render_comment_section(f, columns[1], comments, scroll);

    render_key_hints(f, chunks[3]);
}

/// `Menu › {dish name}` navigation line.
fn render_breadcrumb(f: &mut Frame, area: Rect, dish_name: &str) {
    let breadcrumb = Line::from(vec![
        Span::styled(
            " Menu",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        ),
        Span::styled(" › ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            dish_name.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(breadcrumb), area);
}

/// The dish card: image reference, name, description.
fn render_dish_card(f: &mut Frame, area: Rect, dish: &Dish) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {} ", dish.name),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            dish.image.clone(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
    ];
    for wrapped in textwrap::wrap(&dish.description, inner.width.max(1) as usize) {
        lines.push(Line::from(Span::styled(
            wrapped.to_string(),
            Style::default().fg(Color::White),
        )));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

fn render_key_hints(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled(" c", Style::default().fg(Color::Cyan)),
        Span::styled(" comment · ", Style::default().fg(Color::DarkGray)),
        Span::styled("n/p", Style::default().fg(Color::Cyan)),
        Span::styled(" dish · ", Style::default().fg(Color::DarkGray)),
        Span::styled("↑/↓", Style::default().fg(Color::Cyan)),
        Span::styled(" scroll · ", Style::default().fg(Color::DarkGray)),
        Span::styled("q", Style::default().fg(Color::Cyan)),
        Span::styled(" quit", Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(hints), area);
}
