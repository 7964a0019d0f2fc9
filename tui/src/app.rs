//! Application state and the terminal event loop.
//!
//! All state mutation happens on the UI task: crossterm events and data-layer
//! updates are funneled through channels and handled one at a time, so no
//! locking is needed anywhere in the view.

use bistro_shared::models::DishDetail;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc::{Receiver, Sender, channel};

use crate::services::{comment_form, comments, dish_detail};
use crate::services::comment_form::CommentModal;

/// Events flowing from the data layer into the view (prop updates).
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Replace the detail display state.
    Detail(DishDetail),
}

/// Events flowing from the view back to the data layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputEvent {
    /// The comment form was submitted.
    PostComment {
        dish_id: u32,
        rating: u8,
        author: String,
        message: String,
    },
    NextDish,
    PrevDish,
}

/// View-local state. Everything the data layer owns arrives via
/// [`InputEvent`]; the only state this component mutates itself is the modal
/// and the comment scroll offset.
pub struct AppState {
    pub detail: DishDetail,
    pub modal: CommentModal,
    pub comment_scroll: usize,
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            detail: DishDetail::Absent,
            modal: CommentModal::Closed,
            comment_scroll: 0,
            should_quit: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply a data-layer update.
pub fn apply_input_event(state: &mut AppState, event: InputEvent) {
    match event {
        InputEvent::Detail(detail) => {
            // The modal can only outlive a Ready state when the dish
            // disappears under it; close it rather than submit into nothing.
            if !matches!(detail, DishDetail::Ready { .. }) {
                state.modal = CommentModal::Closed;
            }
            state.detail = detail;
            state.comment_scroll = 0;
        }
    }
}

/// Route a key event to the modal or the global bindings.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent, output_tx: &Sender<OutputEvent>) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.should_quit = true;
        return;
    }

    if comment_form::is_open(state) {
        handle_form_key(state, key, output_tx);
    } else {
        handle_global_key(state, key, output_tx);
    }
}

fn handle_form_key(state: &mut AppState, key: KeyEvent, output_tx: &Sender<OutputEvent>) {
    match key.code {
        KeyCode::Esc => comment_form::cancel_comment_form(state),
        KeyCode::Enter => comment_form::submit_comment_form(state, output_tx),
        KeyCode::Tab | KeyCode::Down => comment_form::focus_next(state),
        KeyCode::BackTab | KeyCode::Up => comment_form::focus_prev(state),
        KeyCode::Left => comment_form::rating_prev(state),
        KeyCode::Right => comment_form::rating_next(state),
        KeyCode::Backspace => comment_form::input_backspace(state),
        KeyCode::Char('j') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            comment_form::input_newline(state);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            comment_form::input_char(state, c);
        }
        _ => {}
    }
}

fn handle_global_key(state: &mut AppState, key: KeyEvent, output_tx: &Sender<OutputEvent>) {
    match key.code {
        KeyCode::Char('q') => state.should_quit = true,
        KeyCode::Char('c') => comment_form::open_comment_form(state),
        KeyCode::Char('n') => {
            let _ = output_tx.try_send(OutputEvent::NextDish);
        }
        KeyCode::Char('p') => {
            let _ = output_tx.try_send(OutputEvent::PrevDish);
        }
        KeyCode::Up => {
            state.comment_scroll = state.comment_scroll.saturating_sub(1);
        }
        KeyCode::Down => {
            let max = match &state.detail {
                DishDetail::Ready { comments, .. } => comments::max_scroll(comments.as_deref()),
                _ => 0,
            };
            if state.comment_scroll < max {
                state.comment_scroll += 1;
            }
        }
        _ => {}
    }
}

/// Draw one frame: the detail view plus the modal overlay.
pub fn render(f: &mut Frame, state: &AppState) {
    dish_detail::render_dish_detail(f, state);
    comment_form::render_comment_modal(f, state, f.area());
}

/// Run the view until the user quits or both channels close.
///
/// Takes over the terminal (raw mode + alternate screen) and restores it on
/// every exit path.
pub async fn run(
    mut input_rx: Receiver<InputEvent>,
    output_tx: Sender<OutputEvent>,
) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let result = run_loop(&mut terminal, &mut input_rx, &output_tx).await;
    ratatui::restore();
    result
}

async fn run_loop(
    terminal: &mut DefaultTerminal,
    input_rx: &mut Receiver<InputEvent>,
    output_tx: &Sender<OutputEvent>,
) -> std::io::Result<()> {
    let mut state = AppState::new();
    let mut term_rx = spawn_event_reader();

    loop {
        terminal.draw(|f| render(f, &state))?;

        tokio::select! {
            event = term_rx.recv() => {
                match event {
                    Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        handle_key_event(&mut state, key, output_tx);
                    }
                    Some(_) => {} // resize and friends just trigger a redraw
                    None => break,
                }
            }
            update = input_rx.recv() => {
                match update {
                    Some(update) => apply_input_event(&mut state, update),
                    None => break,
                }
            }
        }

        if state.should_quit {
            tracing::debug!("quit requested");
            break;
        }
    }

    Ok(())
}

/// Forward blocking crossterm reads into an async channel from a dedicated
/// thread. The thread ends when the receiver is dropped.
fn spawn_event_reader() -> Receiver<Event> {
    let (tx, rx) = channel(32);
    std::thread::spawn(move || {
        loop {
            match crossterm::event::read() {
                Ok(event) => {
                    if tx.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    tracing::warn!(%err, "terminal event read failed");
                    break;
                }
            }
        }
    });
    rx
}
