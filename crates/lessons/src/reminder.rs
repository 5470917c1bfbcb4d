//! Attaching a reminder to an action, with and without a wrapper.

use std::fmt::Display;

use veneer_core::{Callable, Compose, Sink, from_fn};

/// Returns an action that writes `I want to buy {item}` when called.
pub fn action<S>(sink: S, item: impl Display) -> impl Callable<Input = (), Output = ()>
where
    S: Sink,
{
    let line = format!("I want to buy {item}");
    from_fn(move |()| sink.emit(&line))
}

/// Runs `action` right away, then writes `text`.
///
/// The reminder is attached at the call site, so every caller has to remember
/// to go through this function.
pub fn remind<C, S>(action: C, sink: S, text: &str)
where
    C: Callable<Input = ()>,
    S: Sink,
{
    action.call(());
    sink.emit(text);
}

/// Wraps `action` so that `text` is written after every call.
///
/// The wrapped action's output is returned unchanged.
pub fn reminder<C, S>(
    action: C,
    sink: S,
    text: impl Into<String>,
) -> impl Callable<Input = C::Input, Output = C::Output>
where
    C: Callable,
    S: Sink,
{
    let text = text.into();
    action.around(|_| {}, move |_| sink.emit(&text))
}
