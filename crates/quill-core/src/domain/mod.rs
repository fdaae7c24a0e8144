//! Domain entities - the core business objects.

mod category;
mod document;
mod draft;
mod identity;
mod post;

pub use category::Category;
pub use document::{Mark, MarkKind, Node, NodeKind};
pub use draft::{ContentStatus, Draft};
pub use identity::Identity;
pub use post::Post;
