//! Comment list renderer: the thread shown beside the dish card, with the
//! Submit Comment affordance appended after the list.

use bistro_shared::models::Comment;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the comment section for the current dish.
///
/// `comments = None` renders an empty placeholder, with no heading and no
/// submission affordance. A deliberate short-circuit, not an error state:
/// an *empty* comment set still shows both.
pub fn render_comment_section(
    f: &mut Frame,
    area: Rect,
    comments: Option<&[Comment]>,
    scroll: usize,
) {
    let Some(comments) = comments else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // heading
            Constraint::Min(1),    // list
            Constraint::Length(1), // submit affordance
        ])
        .split(area);

    let heading = Paragraph::new(Line::from(Span::styled(
        "Comments",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    f.render_widget(heading, chunks[0]);

    render_comment_list(f, chunks[1], comments, scroll);

    let submit = Paragraph::new(Line::from(vec![
        Span::styled("[c]", Style::default().fg(Color::Cyan)),
        Span::styled(" Submit Comment", Style::default().fg(Color::Gray)),
    ]));
    f.render_widget(submit, chunks[2]);
}

fn render_comment_list(f: &mut Frame, area: Rect, comments: &[Comment], scroll: usize) {
    let mut lines: Vec<Line<'_>> = Vec::new();

    for comment in comments.iter().skip(scroll) {
        lines.push(Line::from(Span::styled(
            comment.comment.clone(),
            Style::default().fg(Color::White),
        )));
        lines.push(Line::from(Span::styled(
            comment.attribution(),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines);
    f.render_widget(paragraph, area);
}

/// Highest useful scroll offset for a comment set.
pub fn max_scroll(comments: Option<&[Comment]>) -> usize {
    comments.map_or(0, |c| c.len().saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn buffer_text(buffer: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn render(comments: Option<&[Comment]>, scroll: usize) -> String {
        let backend = TestBackend::new(50, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render_comment_section(f, f.area(), comments, scroll))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn sample_comment() -> Comment {
        Comment {
            id: 1,
            dish_id: 1,
            rating: 5,
            comment: "Good".to_string(),
            author: "Bob".to_string(),
            date: "2023-01-05".to_string(),
        }
    }

    #[test]
    fn absent_comment_set_renders_nothing() {
        let text = render(None, 0);
        assert!(!text.contains("Comments"));
        assert!(!text.contains("Submit Comment"));
    }

    #[test]
    fn empty_comment_set_still_shows_heading_and_form() {
        let text = render(Some(&[]), 0);
        assert!(text.contains("Comments"));
        assert!(text.contains("Submit Comment"));
    }

    #[test]
    fn renders_text_and_attribution_line() {
        let comments = [sample_comment()];
        let text = render(Some(&comments), 0);
        assert!(text.contains("Good"));
        assert!(text.contains("--Bob, Jan 05, 2023"));
    }

    #[test]
    fn invalid_date_renders_verbatim() {
        let mut comment = sample_comment();
        comment.date = "soonish".to_string();
        let comments = [comment];
        let text = render(Some(&comments), 0);
        assert!(text.contains("--Bob, soonish"));
    }

    #[test]
    fn scroll_skips_leading_comments() {
        let mut second = sample_comment();
        second.id = 2;
        second.comment = "Sends anyone to heaven".to_string();
        second.author = "Paul".to_string();
        let comments = [sample_comment(), second];

        let text = render(Some(&comments), 1);
        assert!(!text.contains("--Bob"));
        assert!(text.contains("Sends anyone to heaven"));
    }

    #[test]
    fn max_scroll_is_len_minus_one() {
        assert_eq!(max_scroll(None), 0);
        assert_eq!(max_scroll(Some(&[])), 0);
        let comments = [sample_comment()];
        assert_eq!(max_scroll(Some(&comments)), 0);
    }
}
