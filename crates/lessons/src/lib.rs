//! A runnable walkthrough of first-class callables, closures, and decorators.
//!
//! Each lesson is built on [`veneer_core`] and writes its output through a
//! [`Sink`](veneer_core::Sink), so the same walkthrough prints to stdout from
//! the binary and is recorded line by line in tests.
//!
//! - [`basics`] — storing, passing, and returning callables
//! - [`reminder`] — attaching behavior after an action, with and without a wrapper
//! - [`division`] — short-circuiting a division whose divisor is zero
//! - [`run`] — every lesson in order

pub mod basics;
mod config;
pub mod division;
pub mod logging;
pub mod reminder;
mod walkthrough;

pub use config::{Config, ConfigError};
pub use walkthrough::run;
