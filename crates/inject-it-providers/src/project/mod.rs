//! Project loading and persistence
//!
//! [`FileDiscovery`] picks the files to load, [`FileSystemProjectProvider`]
//! parses them into a [`Project`](inject_it_domain::Project) and commits edit
//! logs back to disk.

pub mod discovery;
pub mod filesystem;

pub use discovery::{DiscoveredFile, FileDiscovery};
pub use filesystem::FileSystemProjectProvider;
