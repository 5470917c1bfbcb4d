mod around;
mod emit;
mod guard;

use std::{error::Error as StdError, fmt::Display};

pub use around::Around;
pub use emit::Emit;
pub use guard::{Guard, nonzero_divisor};

use crate::{Callable, Sink};

/// Applies a decorator to a callable.
///
/// A decorator is any closure or function that takes ownership of a callable
/// and returns a new callable enclosing it. Rebinding a name to the result is
/// the whole of decoration; [`decorate`] and [`Compose::decorate`] add nothing
/// beyond calling the decorator once.
///
/// ```rust
/// use veneer_core::{Callable, Compose, decorate, from_fn, nonzero_divisor};
///
/// let div = from_fn(|(a, b): (f64, f64)| a / b);
/// let div = decorate(div, |f| f.guarded(nonzero_divisor, |_| {}));
///
/// assert_eq!(div.call((10.0, 0.0)), None);
/// assert_eq!(div.call((10.0, 2.0)), Some(5.0));
/// ```
pub fn decorate<C, D, W>(callable: C, decorator: D) -> W
where
    C: Callable,
    D: FnOnce(C) -> W,
    W: Callable,
{
    decorator(callable)
}

/// Wrapping methods available on every [`Callable`].
///
/// ## Surrounding a call
///
/// - [`Compose::around()`] – Run actions before and after every call.
/// - [`Compose::emit()`] – Write each output to a [`Sink`].
///
/// ## Short-circuiting a call
///
/// - [`Compose::guarded()`] – Skip the call when its input fails a check.
///
/// Every method consumes the callable and returns a new one; the original is
/// only ever reached through the wrapper. Pass `&callable` to keep using the
/// unwrapped version as well.
pub trait Compose: Callable + Sized {
    /// Runs `pre` before and `post` after every call.
    ///
    /// `pre` sees the input, `post` sees the output, and the output is then
    /// returned unchanged. Both actions run exactly once per call, in order.
    ///
    /// # Example
    ///
    /// ```
    /// use std::cell::RefCell;
    /// use veneer_core::{Callable, Compose, from_fn};
    ///
    /// let log = RefCell::new(Vec::new());
    /// let double = from_fn(|x: i32| {
    ///     log.borrow_mut().push(format!("doubling {x}"));
    ///     x * 2
    /// });
    ///
    /// let noisy = double.around(
    ///     |input| log.borrow_mut().push(format!("got {input}")),
    ///     |output| log.borrow_mut().push(format!("made {output}")),
    /// );
    ///
    /// assert_eq!(noisy.call(5), 10);
    /// assert_eq!(*log.borrow(), ["got 5", "doubling 5", "made 10"]);
    /// ```
    fn around<Pre, Post>(self, pre: Pre, post: Post) -> Around<Self, Pre, Post>
    where
        Pre: Fn(&Self::Input),
        Post: Fn(&Self::Output),
    {
        Around::new(self, pre, post)
    }

    /// Calls through only when `check` accepts the input.
    ///
    /// A rejected input is handed to `on_reject` and the call yields `None`
    /// without reaching the wrapped callable. An accepted input yields `Some`
    /// of the wrapped callable's output.
    ///
    /// # Example
    ///
    /// ```
    /// use veneer_core::{Callable, Compose, InvalidDivisor, from_fn, nonzero_divisor};
    ///
    /// let div = from_fn(|(a, b): (i32, i32)| a / b)
    ///     .guarded(nonzero_divisor, |err: InvalidDivisor| eprintln!("{err}"));
    ///
    /// assert_eq!(div.call((9, 3)), Some(3));
    /// assert_eq!(div.call((9, 0)), None);
    /// ```
    fn guarded<Check, Reject, E>(
        self,
        check: Check,
        on_reject: Reject,
    ) -> Guard<Self, Check, Reject, E>
    where
        Check: Fn(&Self::Input) -> Result<(), E>,
        Reject: Fn(E),
        E: StdError,
    {
        Guard::new(self, check, on_reject)
    }

    /// Writes every output to `sink` as one line and returns it.
    ///
    /// # Example
    ///
    /// ```
    /// use veneer_core::{Callable, Compose, Recorder, html_tag};
    ///
    /// let recorder = Recorder::new();
    /// let print_h1 = html_tag("h1").emit(recorder.clone());
    ///
    /// print_h1.call("Test Headline!");
    ///
    /// assert_eq!(recorder.lines(), ["<h1>Test Headline!</h1>"]);
    /// ```
    fn emit<S>(self, sink: S) -> Emit<Self, S>
    where
        S: Sink,
        Self::Output: Display,
    {
        Emit::new(self, sink)
    }

    /// Applies `decorator` to this callable.
    ///
    /// Equivalent to [`decorate(self, decorator)`](decorate).
    fn decorate<D, W>(self, decorator: D) -> W
    where
        D: FnOnce(Self) -> W,
        W: Callable,
    {
        decorator(self)
    }
}

impl<C: Callable> Compose for C {}
