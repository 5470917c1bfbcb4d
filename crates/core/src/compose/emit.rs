use std::fmt::Display;

use crate::{Callable, Sink};

/// A wrapper that writes each output to a sink.
///
/// This struct is used by `.emit()`.
pub struct Emit<C, S> {
    callable: C,
    sink: S,
}

impl<C, S> Emit<C, S> {
    pub(crate) fn new(callable: C, sink: S) -> Self {
        Self { callable, sink }
    }
}

impl<C, S> Callable for Emit<C, S>
where
    C: Callable,
    C::Output: Display,
    S: Sink,
{
    type Input = C::Input;
    type Output = C::Output;

    fn call(&self, input: Self::Input) -> Self::Output {
        let output = self.callable.call(input);
        let line = output.to_string();
        tracing::trace!(%line, "emit: writing output");
        self.sink.emit(&line);
        output
    }
}
