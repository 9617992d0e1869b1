//! TV Guide Core - Domain logic and models
//!
//! This crate contains pure domain logic with no I/O operations.
//! Catalog configuration, schedule planning, row models, callback payloads
//! and error types are defined here.

pub mod calendar;
pub mod callback;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod timezone;

pub use callback::CallbackPayload;
pub use catalog::{Catalog, PlannedProgram, plan_schedule};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ConfigError, GuideError, GuideResult};
pub use timezone::{default_timezone, parse_timezone};
