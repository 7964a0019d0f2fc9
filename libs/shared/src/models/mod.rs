mod comment;
mod detail;
mod dish;

pub use comment::{
    AUTHOR_MAX_CHARS, AUTHOR_MIN_CHARS, Comment, CommentDraft, format_comment_date,
    validate_author,
};
pub use detail::DishDetail;
pub use dish::Dish;
