//! Blob store adapters.
//!
//! Cover images live under `{owner}/{container}/{filename}` keys; the
//! container switches from the draft id to the post id at publish time.

mod fs;
mod memory;

pub use fs::FsBlobStore;
pub use memory::InMemoryBlobStore;
