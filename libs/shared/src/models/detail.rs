use super::{Comment, Dish};

/// Display state for the dish detail view, owned by the data layer.
///
/// A closed variant instead of independent loading/error/dish fields, so
/// impossible combinations are unrepresentable. The precedence between the
/// legacy flags is fixed in [`DishDetail::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DishDetail {
    /// A fetch is in flight; render the loading indicator only.
    Loading,
    /// The fetch failed; render the message only.
    Failed(String),
    /// Dish data is available. `comments` is `None` when the comment set was
    /// never supplied, which also suppresses the submission form.
    Ready {
        dish: Dish,
        comments: Option<Vec<Comment>>,
    },
    /// Nothing to show.
    Absent,
}

impl DishDetail {
    /// Collapse the legacy flag set into a single state.
    ///
    /// Precedence is fixed: loading, then error, then dish, then nothing.
    /// An empty error message counts as no error.
    pub fn resolve(
        is_loading: bool,
        err_mess: Option<String>,
        dish: Option<Dish>,
        comments: Option<Vec<Comment>>,
    ) -> Self {
        if is_loading {
            return DishDetail::Loading;
        }
        if let Some(msg) = err_mess
            && !msg.is_empty()
        {
            return DishDetail::Failed(msg);
        }
        match dish {
            Some(dish) => DishDetail::Ready { dish, comments },
            None => DishDetail::Absent,
        }
    }

    /// The dish shown in this state, if any.
    pub fn dish(&self) -> Option<&Dish> {
        match self {
            DishDetail::Ready { dish, .. } => Some(dish),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dish() -> Dish {
        Dish {
            id: 1,
            name: "Uthappizza".to_string(),
            description: "A unique combination of Indian Uthappam and Italian pizza.".to_string(),
            image: "images/uthappizza.png".to_string(),
        }
    }

    #[test]
    fn loading_wins_over_everything() {
        let state = DishDetail::resolve(
            true,
            Some("Error 404".to_string()),
            Some(sample_dish()),
            Some(vec![]),
        );
        assert_eq!(state, DishDetail::Loading);
    }

    #[test]
    fn error_wins_over_dish() {
        let state = DishDetail::resolve(
            false,
            Some("Error 404: Not Found".to_string()),
            Some(sample_dish()),
            None,
        );
        assert_eq!(state, DishDetail::Failed("Error 404: Not Found".to_string()));
    }

    #[test]
    fn empty_error_message_is_no_error() {
        let state = DishDetail::resolve(false, Some(String::new()), Some(sample_dish()), None);
        assert!(matches!(state, DishDetail::Ready { .. }));
    }

    #[test]
    fn dish_without_comments_keeps_none() {
        let state = DishDetail::resolve(false, None, Some(sample_dish()), None);
        match state {
            DishDetail::Ready { dish, comments } => {
                assert_eq!(dish.name, "Uthappizza");
                assert!(comments.is_none());
            }
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[test]
    fn nothing_supplied_renders_nothing() {
        assert_eq!(DishDetail::resolve(false, None, None, None), DishDetail::Absent);
    }
}
