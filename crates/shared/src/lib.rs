//! TV Guide Shared - process bootstrap helpers
//!
//! Environment loading, tracing setup and database pool construction used
//! by the bot binary.

pub mod bootstrap;

pub use bootstrap::{init_db, init_env, init_memory_db, init_tracing};
