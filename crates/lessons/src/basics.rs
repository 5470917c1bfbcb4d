//! First-class functions: stored, passed, and returned.

use veneer_core::{Callable, from_fn};

/// Returns `x * x`.
#[must_use]
pub fn square(x: i64) -> i64 {
    x * x
}

/// Calls `func` with `num` and adds one to the result.
///
/// ```rust
/// use veneer_core::from_fn;
/// use veneer_lessons::basics::{add_one, square};
///
/// assert_eq!(add_one(from_fn(square), 3), 10);
/// ```
pub fn add_one<C>(func: C, num: i64) -> i64
where
    C: Callable<Input = i64, Output = i64>,
{
    func.call(num) + 1
}

/// Returns a nullary callable that remembers `message`.
///
/// Nothing is produced until the returned callable is called.
pub fn display(message: impl Into<String>) -> impl Callable<Input = (), Output = String> {
    let message = message.into();
    from_fn(move |()| format!("Display: {message}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_stored_in_a_binding() {
        let f = from_fn(square);

        assert_eq!(f.call(5), 25);
        assert_eq!(square(-4), 16);
    }

    #[test]
    fn add_one_accepts_any_unary_callable() {
        assert_eq!(add_one(from_fn(square), 3), 10);
        assert_eq!(add_one(from_fn(|x: i64| x - 1), 3), 3);
        assert_eq!(add_one(&from_fn(square), 0), 1);
    }

    #[test]
    fn display_captures_its_message() {
        let hi = display("Hi");
        let bye = display(String::from("Bye"));

        assert_eq!(hi.call(()), "Display: Hi");
        assert_eq!(bye.call(()), "Display: Bye");
        assert_eq!(hi.call(()), "Display: Hi");
    }
}
