//! Guarding division against a zero divisor.

use veneer_core::{Callable, Compose, InvalidDivisor, Sink, nonzero_divisor};

/// Divides `a` by `b`.
#[must_use]
pub fn div((a, b): (f64, f64)) -> f64 {
    a / b
}

/// Wraps a division so a zero divisor writes `diagnostic` instead of dividing.
///
/// The wrapped callable yields `None` for a zero divisor and `Some` of the
/// quotient otherwise.
pub fn check<C, A, B, S>(
    func: C,
    sink: S,
    diagnostic: impl Into<String>,
) -> impl Callable<Input = (A, B), Output = Option<C::Output>>
where
    C: Callable<Input = (A, B)>,
    B: PartialEq + Default,
    S: Sink,
{
    let diagnostic = diagnostic.into();
    func.guarded(nonzero_divisor, move |_: InvalidDivisor| {
        sink.emit(&diagnostic);
    })
}

/// Formats an optional result the way the walkthrough prints it.
#[must_use]
pub fn render<T: std::fmt::Debug>(result: Option<T>) -> String {
    match result {
        Some(value) => format!("{value:?}"),
        None => "None".to_owned(),
    }
}
