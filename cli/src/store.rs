//! The parent data layer: owns the menu, drives the view's display states,
//! and reacts to view events.
//!
//! The view never touches menu data directly: it receives [`DishDetail`]
//! snapshots and sends [`OutputEvent`]s back.

use std::time::Duration;

use bistro_shared::menu::{Menu, MenuError};
use bistro_shared::models::{Comment, DishDetail};
use bistro_tui::{InputEvent, OutputEvent};
use tokio::sync::mpsc::{Receiver, Sender};

pub struct MenuStore {
    menu: Menu,
    /// Sticky error from startup (menu load failure, unknown dish request).
    /// While set, every fetch resolves to `Failed`.
    load_error: Option<String>,
    selected: usize,
    fetch_delay: Duration,
    image_base_url: String,
}

impl MenuStore {
    pub fn new(
        menu: Result<Menu, MenuError>,
        fetch_delay: Duration,
        image_base_url: String,
        initial_dish: Option<u32>,
    ) -> Self {
        let (menu, mut load_error) = match menu {
            Ok(menu) => (menu, None),
            Err(err) => (Menu::default(), Some(err.to_string())),
        };

        let selected = match initial_dish {
            Some(id) => match menu.dishes.iter().position(|d| d.id == id) {
                Some(index) => index,
                None => {
                    if load_error.is_none() {
                        load_error = Some(format!("Error 404: dish {id} not found"));
                    }
                    0
                }
            },
            None => 0,
        };

        MenuStore {
            menu,
            load_error,
            selected,
            fetch_delay,
            image_base_url,
        }
    }

    /// Drive the store: emit the initial fetch cycle, then react to view
    /// events until the view goes away.
    pub async fn run(mut self, input_tx: Sender<InputEvent>, mut output_rx: Receiver<OutputEvent>) {
        self.fetch(&input_tx).await;

        while let Some(event) = output_rx.recv().await {
            match event {
                OutputEvent::NextDish => {
                    self.select_offset(1);
                    self.fetch(&input_tx).await;
                }
                OutputEvent::PrevDish => {
                    self.select_offset(-1);
                    self.fetch(&input_tx).await;
                }
                OutputEvent::PostComment {
                    dish_id,
                    rating,
                    author,
                    message,
                } => {
                    let detail = self.post_comment(dish_id, rating, author, message);
                    if input_tx.send(InputEvent::Detail(detail)).await.is_err() {
                        break;
                    }
                }
            }
        }
    }

    /// Simulated fetch cycle: loading, latency, then the resolved state.
    async fn fetch(&self, input_tx: &Sender<InputEvent>) {
        if input_tx
            .send(InputEvent::Detail(DishDetail::Loading))
            .await
            .is_err()
        {
            return;
        }
        if !self.fetch_delay.is_zero() {
            tokio::time::sleep(self.fetch_delay).await;
        }
        let _ = input_tx.send(InputEvent::Detail(self.current_detail())).await;
    }

    /// Append a submitted comment and return the refreshed detail state.
    ///
    /// Comments live in memory only; nothing is written back to disk.
    pub fn post_comment(
        &mut self,
        dish_id: u32,
        rating: u8,
        author: String,
        message: String,
    ) -> DishDetail {
        let comment = Comment {
            id: self.menu.next_comment_id(),
            dish_id,
            rating,
            comment: message,
            author,
            date: chrono::Utc::now().to_rfc3339(),
        };
        tracing::info!(dish_id, rating, id = comment.id, "comment submitted");
        self.menu.comments.push(comment);
        self.current_detail()
    }

    /// The display state for the current selection.
    pub fn current_detail(&self) -> DishDetail {
        if let Some(message) = &self.load_error {
            return DishDetail::Failed(message.clone());
        }
        match self.menu.dishes.get(self.selected) {
            Some(dish) => {
                let mut dish = dish.clone();
                if !self.image_base_url.is_empty() {
                    dish.image = format!("{}{}", self.image_base_url, dish.image);
                }
                let comments = self.menu.comments_for(dish.id);
                DishDetail::Ready {
                    dish,
                    comments: Some(comments),
                }
            }
            None => DishDetail::Absent,
        }
    }

    /// Move the selection forward or backward, wrapping around the menu.
    fn select_offset(&mut self, offset: i64) {
        let len = self.menu.dishes.len() as i64;
        if len == 0 {
            return;
        }
        self.selected = (self.selected as i64 + offset).rem_euclid(len) as usize;
    }
}
