pub mod comment_form;
pub mod comments;
pub mod dish_detail;
