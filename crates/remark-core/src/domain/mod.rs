//! Domain entities - the core business objects.

mod comment;
mod post;

pub use comment::{Comment, FieldError, FieldSource, NewComment};
pub use post::Post;
