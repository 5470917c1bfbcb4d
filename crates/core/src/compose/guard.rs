use std::{error::Error as StdError, marker::PhantomData};

use crate::{Callable, InvalidDivisor};

/// A wrapper that only calls through when its input passes a check.
///
/// This struct is used by `.guarded()`. A rejected input is handed to the
/// rejection handler and the call produces `None`; the wrapped callable is
/// never reached. Rejections are absorbed here and never returned as errors.
pub struct Guard<C, Check, Reject, E> {
    callable: C,
    check: Check,
    on_reject: Reject,
    _marker: PhantomData<fn() -> E>,
}

impl<C, Check, Reject, E> Guard<C, Check, Reject, E> {
    pub(crate) fn new(callable: C, check: Check, on_reject: Reject) -> Self {
        Self {
            callable,
            check,
            on_reject,
            _marker: PhantomData,
        }
    }
}

impl<C, Check, Reject, E> Callable for Guard<C, Check, Reject, E>
where
    C: Callable,
    Check: Fn(&C::Input) -> Result<(), E>,
    Reject: Fn(E),
    E: StdError,
{
    type Input = C::Input;
    type Output = Option<C::Output>;

    fn call(&self, input: Self::Input) -> Self::Output {
        match (self.check)(&input) {
            Ok(()) => {
                tracing::trace!("guard accepted call");
                Some(self.callable.call(input))
            }
            Err(err) => {
                tracing::debug!(error = %err, "guard rejected call");
                (self.on_reject)(err);
                None
            }
        }
    }
}

/// Rejects a `(dividend, divisor)` pair whose divisor is zero.
///
/// Zero is the divisor type's [`Default`] value, which covers the integer and
/// floating-point primitives (`-0.0` included, since it compares equal).
///
/// # Errors
///
/// Returns [`InvalidDivisor`] when the divisor equals zero.
pub fn nonzero_divisor<A, B>(input: &(A, B)) -> Result<(), InvalidDivisor>
where
    B: PartialEq + Default,
{
    if input.1 == B::default() {
        Err(InvalidDivisor)
    } else {
        Ok(())
    }
}
