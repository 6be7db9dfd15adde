//! Storage and repository state
//!
//! - `store`: the key/value [`Store`](store::Store) contract and its collections
//! - `memory_store` / `file_store`: volatile and durable backends
//! - `database`: version records and the per-project version index
//! - `refs`: branch records, branch heads and the per-project branch index
//! - `repository`: the facade every operation hangs off

pub(crate) mod database;
pub mod file_store;
pub mod memory_store;
pub(crate) mod refs;
pub mod repository;
pub mod store;
