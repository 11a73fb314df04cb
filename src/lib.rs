// Staffstore - employee roster manager backed by local key-value storage

pub mod auth;
pub mod filter;
pub mod models;
pub mod storage;
pub mod store;

// Re-export main types for convenience
pub use auth::Credentials;
pub use filter::{Filters, StatusFilter, Tally};
pub use models::{Employee, EmployeeDraft, Gender};
pub use storage::{FileBackend, MemoryBackend, StorageBackend};
pub use store::Store;
