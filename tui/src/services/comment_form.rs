//! Comment submission form: a centered modal with rating, author, and
//! message fields.
//!
//! The modal is a two-state machine: `Closed` (initial) and `Open` with a
//! transient draft. Opening is triggered by the Submit Comment affordance,
//! closing by cancel/dismiss or by submit. Submit always closes the modal and
//! forwards the draft to the data layer; author validation is advisory only
//! and never blocks submission.

use bistro_shared::models::{CommentDraft, DishDetail, validate_author};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use tokio::sync::mpsc::Sender;

use crate::app::{AppState, OutputEvent};

/// Rating values offered by the select widget. The widget itself is the
/// constraint; there is no separate validation.
pub const RATING_CHOICES: [u8; 5] = [1, 2, 3, 4, 5];

/// Which form field currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Rating,
    Author,
    Message,
}

/// The comment modal. `Closed` ⇄ `Open`; the draft lives only while open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentModal {
    Closed,
    Open(FormState),
}

/// View state for the open modal: the shared draft plus focus tracking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    /// Dish the submitted comment will be attached to.
    pub dish_id: u32,
    pub draft: CommentDraft,
    pub focus: FormField,
    /// Whether the author field has received and lost focus at least once.
    /// Gates visibility of the validation message.
    pub author_touched: bool,
}

impl FormState {
    fn new(dish_id: u32) -> Self {
        FormState {
            dish_id,
            draft: CommentDraft::default(),
            focus: FormField::Rating,
            author_touched: false,
        }
    }
}

/// Whether the modal is currently open.
pub fn is_open(state: &AppState) -> bool {
    matches!(state.modal, CommentModal::Open(_))
}

/// `Closed → Open` transition, triggered by the Submit Comment affordance.
///
/// The affordance only exists when a dish is shown and a comment set was
/// supplied, so opening is a no-op otherwise.
pub fn open_comment_form(state: &mut AppState) {
    if is_open(state) {
        return;
    }
    let DishDetail::Ready {
        dish,
        comments: Some(_),
    } = &state.detail
    else {
        return;
    };
    state.modal = CommentModal::Open(FormState::new(dish.id));
}

/// `Open → Closed` transition for cancel/dismiss. The draft is discarded.
pub fn cancel_comment_form(state: &mut AppState) {
    state.modal = CommentModal::Closed;
}

/// Submit the form: close the modal, then forward the draft to the data
/// layer exactly once.
///
/// This happens unconditionally: an invalid author does not block the
/// submission, the validation message is advisory only.
pub fn submit_comment_form(state: &mut AppState, output_tx: &Sender<OutputEvent>) {
    let CommentModal::Open(form) = std::mem::replace(&mut state.modal, CommentModal::Closed)
    else {
        return;
    };
    let _ = output_tx.try_send(OutputEvent::PostComment {
        dish_id: form.dish_id,
        rating: form.draft.rating,
        author: form.draft.author,
        message: form.draft.message,
    });
}

/// Move focus to the next field. Leaving the author field marks it touched.
pub fn focus_next(state: &mut AppState) {
    let CommentModal::Open(form) = &mut state.modal else {
        return;
    };
    if form.focus == FormField::Author {
        form.author_touched = true;
    }
    form.focus = match form.focus {
        FormField::Rating => FormField::Author,
        FormField::Author => FormField::Message,
        FormField::Message => FormField::Rating,
    };
}

/// Move focus to the previous field. Leaving the author field marks it
/// touched.
pub fn focus_prev(state: &mut AppState) {
    let CommentModal::Open(form) = &mut state.modal else {
        return;
    };
    if form.focus == FormField::Author {
        form.author_touched = true;
    }
    form.focus = match form.focus {
        FormField::Rating => FormField::Message,
        FormField::Author => FormField::Rating,
        FormField::Message => FormField::Author,
    };
}

/// Step the rating select to the next value. Clamps at 5.
pub fn rating_next(state: &mut AppState) {
    let CommentModal::Open(form) = &mut state.modal else {
        return;
    };
    if form.focus == FormField::Rating && form.draft.rating < 5 {
        form.draft.rating += 1;
    }
}

/// Step the rating select to the previous value. Clamps at 1.
pub fn rating_prev(state: &mut AppState) {
    let CommentModal::Open(form) = &mut state.modal else {
        return;
    };
    if form.focus == FormField::Rating && form.draft.rating > 1 {
        form.draft.rating -= 1;
    }
}

/// Character input for the focused field.
///
/// On the rating field, digits 1-5 select that value directly; other
/// characters are ignored.
pub fn input_char(state: &mut AppState, c: char) {
    let CommentModal::Open(form) = &mut state.modal else {
        return;
    };
    match form.focus {
        FormField::Rating => {
            if let Some(value) = c.to_digit(10)
                && RATING_CHOICES.contains(&(value as u8))
            {
                form.draft.rating = value as u8;
            }
        }
        FormField::Author => form.draft.author.push(c),
        FormField::Message => form.draft.message.push(c),
    }
}

/// Backspace in the focused text field.
pub fn input_backspace(state: &mut AppState) {
    let CommentModal::Open(form) = &mut state.modal else {
        return;
    };
    match form.focus {
        FormField::Rating => {}
        FormField::Author => {
            form.draft.author.pop();
        }
        FormField::Message => {
            form.draft.message.pop();
        }
    }
}

/// Newline in the message field (Ctrl+J).
pub fn input_newline(state: &mut AppState) {
    let CommentModal::Open(form) = &mut state.modal else {
        return;
    };
    if form.focus == FormField::Message {
        form.draft.message.push('\n');
    }
}

/// The advisory validation message for the author field.
///
/// `None` until the field has been touched, and `None` while the value is
/// within bounds afterwards.
pub fn author_validation_message(form: &FormState) -> Option<String> {
    if !form.author_touched {
        return None;
    }
    validate_author(&form.draft.author).err()
}

// ─── Rendering ───────────────────────────────────────────────────────────────

/// Render the modal overlay on top of the detail view.
pub fn render_comment_modal(f: &mut Frame, state: &AppState, area: Rect) {
    let CommentModal::Open(form) = &state.modal else {
        return;
    };

    let modal_width = (area.width * 60 / 100).max(40).min(area.width.saturating_sub(4));
    let mut lines: Vec<Line<'_>> = Vec::new();

    // Rating select
    lines.push(field_label("Rating", form.focus == FormField::Rating));
    lines.push(rating_line(form));
    lines.push(Line::from(""));

    // Author input
    lines.push(field_label("Your Name", form.focus == FormField::Author));
    lines.push(text_input_line(
        &form.draft.author,
        "Your Name",
        form.focus == FormField::Author,
    ));
    if let Some(message) = author_validation_message(form) {
        lines.push(Line::from(Span::styled(
            message,
            Style::default().fg(Color::Red),
        )));
    }
    lines.push(Line::from(""));

    // Message input (multiline)
    lines.push(field_label("Comment", form.focus == FormField::Message));
    message_input_lines(
        &form.draft.message,
        form.focus == FormField::Message,
        &mut lines,
    );
    lines.push(Line::from(""));

    // Hints
    lines.push(Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled("=submit  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::styled("=next field  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Ctrl+J", Style::default().fg(Color::Cyan)),
        Span::styled("=newline  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Red)),
        Span::styled("=cancel", Style::default().fg(Color::DarkGray)),
    ]));

    let content_lines = lines.len() as u16;
    let modal_height = (content_lines + 2)
        .min(area.height.saturating_sub(2))
        .max(4);

    let x = area.x + area.width.saturating_sub(modal_width) / 2;
    let y = area.y + area.height.saturating_sub(modal_height) / 2;
    let modal_area = Rect::new(x, y, modal_width, modal_height);

    f.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            " Submit Comment ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));

    let inner = block.inner(modal_area);
    f.render_widget(block, modal_area);

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(paragraph, inner);
}

fn field_label(label: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(Span::styled(label.to_string(), style))
}

/// The rating select rendered as `‹ 3 ›` with the fixed choices dimmed
/// around the current value.
fn rating_line(form: &FormState) -> Line<'static> {
    let focused = form.focus == FormField::Rating;
    let mut spans = vec![Span::styled(
        if focused { "‹ " } else { "  " }.to_string(),
        Style::default().fg(Color::DarkGray),
    )];
    for value in RATING_CHOICES {
        let style = if value == form.draft.rating {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{value} "), style));
    }
    spans.push(Span::styled(
        if focused { "›" } else { " " }.to_string(),
        Style::default().fg(Color::DarkGray),
    ));
    Line::from(spans)
}

fn text_input_line(value: &str, placeholder: &str, focused: bool) -> Line<'static> {
    let mut spans = vec![Span::styled(
        "> ".to_string(),
        Style::default().fg(Color::DarkGray),
    )];
    if value.is_empty() {
        if focused {
            spans.push(Span::styled("█".to_string(), Style::default().fg(Color::Cyan)));
        }
        spans.push(Span::styled(
            format!(" {placeholder}"),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::styled(
            value.to_string(),
            Style::default().fg(Color::White),
        ));
        if focused {
            spans.push(Span::styled("█".to_string(), Style::default().fg(Color::Cyan)));
        }
    }
    Line::from(spans)
}

/// Append the multiline message input, cursor on the last line when focused.
fn message_input_lines(value: &str, focused: bool, lines: &mut Vec<Line<'static>>) {
    if value.is_empty() {
        lines.push(text_input_line("", "Type your comment...", focused));
        return;
    }

    let input_lines: Vec<&str> = value.lines().collect();
    let last_idx = input_lines.len().saturating_sub(1);
    let trailing_newline = value.ends_with('\n');

    for (i, input_line) in input_lines.iter().enumerate() {
        if i == last_idx && !trailing_newline && focused {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("> {input_line}"),
                    Style::default().fg(Color::White),
                ),
                Span::styled("█".to_string(), Style::default().fg(Color::Cyan)),
            ]));
        } else {
            lines.push(Line::from(Span::styled(
                format!("> {input_line}"),
                Style::default().fg(Color::White),
            )));
        }
    }
    if trailing_newline {
        let mut spans = vec![Span::styled(
            "> ".to_string(),
            Style::default().fg(Color::White),
        )];
        if focused {
            spans.push(Span::styled("█".to_string(), Style::default().fg(Color::Cyan)));
        }
        lines.push(Line::from(spans));
    }
}
