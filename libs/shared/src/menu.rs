//! The on-disk menu data set backing the store.
//!
//! A single JSON document with `dishes` and `comments` arrays, the same
//! shape the upstream menu service exposes. Comments are kept flat and
//! selected per dish; the view never filters.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::{Comment, Dish};

/// Every dish plus the flat comment list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Menu {
    pub dishes: Vec<Dish>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    #[error("failed to read menu file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse menu file {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Menu {
    /// Load the menu document from disk.
    pub fn load(path: &Path) -> Result<Self, MenuError> {
        let raw = std::fs::read_to_string(path).map_err(|source| MenuError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| MenuError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// The dish with the given id, if present.
    pub fn dish(&self, dish_id: u32) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.id == dish_id)
    }

    /// Comments attached to a dish, in the order the data set supplies them.
    pub fn comments_for(&self, dish_id: u32) -> Vec<Comment> {
        self.comments
            .iter()
            .filter(|c| c.dish_id == dish_id)
            .cloned()
            .collect()
    }

    /// Next unused comment id.
    pub fn next_comment_id(&self) -> u32 {
        self.comments.iter().map(|c| c.id).max().map_or(0, |m| m + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "dishes": [
            {"id": 0, "name": "Uthappizza", "description": "A unique combination.", "image": "images/uthappizza.png"},
            {"id": 1, "name": "Zucchipakoda", "description": "Deep fried Zucchini.", "image": "images/zucchipakoda.png"}
        ],
        "comments": [
            {"id": 0, "dish_id": 0, "rating": 5, "comment": "Imagine all the eatables", "author": "John Lemon", "date": "2012-10-16"},
            {"id": 1, "dish_id": 0, "rating": 4, "comment": "Sends anyone to heaven", "author": "Paul McVites", "date": "2014-09-05"},
            {"id": 2, "dish_id": 1, "rating": 3, "comment": "Eat it, just eat it!", "author": "Michael Jaikishan", "date": "2015-02-13"}
        ]
    }"#;

    fn write_sample() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_dishes_and_comments() {
        let file = write_sample();
        let menu = Menu::load(file.path()).unwrap();
        assert_eq!(menu.dishes.len(), 2);
        assert_eq!(menu.comments.len(), 3);
    }

    #[test]
    fn selects_comments_per_dish_in_supplied_order() {
        let file = write_sample();
        let menu = Menu::load(file.path()).unwrap();
        let comments = menu.comments_for(0);
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].author, "John Lemon");
        assert_eq!(comments[1].author, "Paul McVites");
    }

    #[test]
    fn missing_dish_has_no_comments() {
        let file = write_sample();
        let menu = Menu::load(file.path()).unwrap();
        assert!(menu.comments_for(42).is_empty());
        assert!(menu.dish(42).is_none());
    }

    #[test]
    fn next_comment_id_follows_the_highest() {
        let file = write_sample();
        let menu = Menu::load(file.path()).unwrap();
        assert_eq!(menu.next_comment_id(), 3);
        assert_eq!(Menu::default().next_comment_id(), 0);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = Menu::load(Path::new("/nonexistent/menu.json")).unwrap_err();
        assert!(matches!(err, MenuError::Read { .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();
        let err = Menu::load(file.path()).unwrap_err();
        assert!(matches!(err, MenuError::Parse { .. }));
    }
}
