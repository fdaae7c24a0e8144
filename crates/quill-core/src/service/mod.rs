//! Domain services - the operations behind the authenticated editor and
//! admin surfaces. Services depend only on ports and are wired with
//! concrete adapters at startup.

mod category;
mod publication;

pub use category::{CategoryInput, CategoryService};
pub use publication::{DraftUpdate, NewDraft, PublicationService, SyncReport};
