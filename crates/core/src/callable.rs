use std::marker::PhantomData;

/// A unit of behavior with a fixed input arity.
///
/// A `Callable` is the building block every wrapper in this crate encloses.
/// Arity is carried by the `Input` type: `()` for a nullary callable, a plain
/// value for a unary one, and a tuple such as `(f64, f64)` for a binary one.
///
/// Callables are invoked through `&self`, so the same callable can be called
/// any number of times and shared by reference. A reference to a callable is
/// itself a callable.
///
/// # Example
///
/// ```rust
/// use veneer_core::Callable;
///
/// struct MultiplyBy {
///     factor: i32,
/// }
///
/// impl Callable for MultiplyBy {
///     type Input = i32;
///     type Output = i32;
///
///     fn call(&self, input: i32) -> i32 {
///         input * self.factor
///     }
/// }
///
/// let triple_it = MultiplyBy { factor: 3 };
/// let alias = &triple_it;
///
/// assert_eq!(triple_it.call(2), 6);
/// assert_eq!(alias.call(4), 12);
/// ```
pub trait Callable {
    type Input;
    type Output;

    fn call(&self, input: Self::Input) -> Self::Output;
}

impl<C: Callable + ?Sized> Callable for &C {
    type Input = C::Input;
    type Output = C::Output;

    fn call(&self, input: Self::Input) -> Self::Output {
        (**self).call(input)
    }
}

impl<C: Callable + ?Sized> Callable for Box<C> {
    type Input = C::Input;
    type Output = C::Output;

    fn call(&self, input: Self::Input) -> Self::Output {
        (**self).call(input)
    }
}

/// A callable backed by a function or closure.
///
/// Created with [`from_fn`].
pub struct FromFn<F, I, O> {
    f: F,
    _marker: PhantomData<fn(I) -> O>,
}

impl<F: Clone, I, O> Clone for FromFn<F, I, O> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F, I, O> Callable for FromFn<F, I, O>
where
    F: Fn(I) -> O,
{
    type Input = I;
    type Output = O;

    fn call(&self, input: I) -> O {
        (self.f)(input)
    }
}

/// Turns a function or closure into a [`Callable`].
///
/// Functions with more than one parameter take their arguments as a tuple.
///
/// # Example
///
/// ```rust
/// use veneer_core::{Callable, from_fn};
///
/// let square = from_fn(|x: i64| x * x);
/// let div = from_fn(|(a, b): (f64, f64)| a / b);
///
/// assert_eq!(square.call(5), 25);
/// assert_eq!(div.call((10.0, 4.0)), 2.5);
/// ```
pub fn from_fn<F, I, O>(f: F) -> FromFn<F, I, O>
where
    F: Fn(I) -> O,
{
    FromFn {
        f,
        _marker: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct Square;

    impl Callable for Square {
        type Input = i64;
        type Output = i64;

        fn call(&self, input: i64) -> i64 {
            input * input
        }
    }

    fn apply_twice<C: Callable<Input = i64, Output = i64>>(callable: C, input: i64) -> i64 {
        callable.call(callable.call(input))
    }

    #[test]
    fn callable_by_reference_and_box() {
        let boxed: Box<dyn Callable<Input = i64, Output = i64>> = Box::new(Square);

        assert_eq!(Square.call(5), 25);
        assert_eq!((&Square).call(3), 9);
        assert_eq!(boxed.call(4), 16);
        assert_eq!(apply_twice(&boxed, 2), 16);
    }

    #[test]
    fn from_fn_wraps_function_items() {
        fn square(x: i64) -> i64 {
            x * x
        }

        let f = from_fn(square);
        assert_eq!(f.call(5), 25);
        assert_eq!(apply_twice(f, 3), 81);
    }

    #[test]
    fn from_fn_nullary_closure_runs_only_when_called() {
        let calls = Cell::new(0);
        let hello = from_fn(|()| {
            calls.set(calls.get() + 1);
            "hello"
        });

        assert_eq!(calls.get(), 0);
        assert_eq!(hello.call(()), "hello");
        assert_eq!(hello.call(()), "hello");
        assert_eq!(calls.get(), 2);
    }
}
