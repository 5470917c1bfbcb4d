//! Composable callables and the wrappers that surround them.
//!
//! This crate defines a small vocabulary for treating behavior as a value:
//!
//! - [`Callable`] — a unit of behavior with a fixed input arity
//! - [`from_fn`] — turns a function or closure into a [`Callable`]
//! - [`Compose`] — wrapping methods on every callable:
//!   [`around`](Compose::around), [`guarded`](Compose::guarded),
//!   [`emit`](Compose::emit), [`decorate`](Compose::decorate)
//! - [`html_tag`] — a factory whose tag parameter is captured by the
//!   returned [`Tagged`] callable
//! - [`Sink`] — the line-oriented output that wrappers write to
//!
//! A wrapper owns the callable it encloses and never replaces it. It only
//! decides whether the callable runs and what happens around the call.
//!
//! # Example
//!
//! ```rust
//! use veneer_core::{
//!     Callable, Compose, InvalidDivisor, Recorder, Sink, decorate, from_fn, nonzero_divisor,
//! };
//!
//! let out = Recorder::new();
//!
//! let div = decorate(from_fn(|(a, b): (f64, f64)| a / b), |f| {
//!     f.guarded(nonzero_divisor, |err: InvalidDivisor| out.emit(&err.to_string()))
//! });
//!
//! assert_eq!(div.call((10.0, 2.0)), Some(5.0));
//! assert_eq!(div.call((10.0, 0.0)), None);
//! assert_eq!(out.lines(), ["Can't divide by 0"]);
//! ```

mod callable;
mod compose;
mod error;
mod sink;
mod tagged;

pub use callable::{Callable, FromFn, from_fn};
pub use compose::{Around, Compose, Emit, Guard, decorate, nonzero_divisor};
pub use error::InvalidDivisor;
pub use sink::{Recorder, Sink, Stdout};
pub use tagged::{Tagged, html_tag};
