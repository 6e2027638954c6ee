// Draft batches: generation, editing, triage and storage.
// Generation is pure and synchronous; only the store is async.

pub mod editing;
pub mod generator;
pub mod handlers;
pub mod store;
pub mod triage;
