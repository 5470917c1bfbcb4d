use crate::Callable;

/// A wrapper that runs an action before and after each call.
///
/// This struct is used by `.around()`. The wrapped callable is invoked
/// exactly once per call and its output is returned unchanged.
pub struct Around<C, Pre, Post> {
    callable: C,
    pre: Pre,
    post: Post,
}

impl<C, Pre, Post> Around<C, Pre, Post> {
    pub(crate) fn new(callable: C, pre: Pre, post: Post) -> Self {
        Self {
            callable,
            pre,
            post,
        }
    }
}

impl<C, Pre, Post> Callable for Around<C, Pre, Post>
where
    C: Callable,
    Pre: Fn(&C::Input),
    Post: Fn(&C::Output),
{
    type Input = C::Input;
    type Output = C::Output;

    fn call(&self, input: Self::Input) -> Self::Output {
        tracing::trace!("around: calling wrapped callable");
        (self.pre)(&input);
        let output = self.callable.call(input);
        (self.post)(&output);
        output
    }
}
