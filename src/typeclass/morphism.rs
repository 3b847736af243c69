//! Built-in morphism families.
//!
//! - [`FunctionArrow`]: morphisms are [`Function<A, B>`] and invoking one
//!   yields a plain `B`.
//! - [`FallibleArrow<E>`]: morphisms are `Function<A, Result<B, E>>`.
//!   Composition stops at the first error.

use std::fmt;
use std::marker::PhantomData;

use super::arrow::Arrow;
use super::function::Function;
use super::semigroupoid::{Category, Semigroupoid};

// =============================================================================
// FunctionArrow
// =============================================================================

/// The family of plain functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FunctionArrow;

impl Semigroupoid for FunctionArrow {
    type Morphism<A, B> = Function<A, B>;
    type Output<B> = B;

    fn compose<A: 'static, B: 'static, C: 'static>(
        later: Function<B, C>,
        earlier: Function<A, B>,
    ) -> Function<A, C> {
        Function::new(move |input| later.call(earlier.call(input)))
    }

    #[inline]
    fn invoke<A, B>(morphism: &Function<A, B>, input: A) -> B {
        morphism.call(input)
    }
}

impl Category for FunctionArrow {
    fn identity<A: 'static>() -> Function<A, A> {
        Function::new(|input| input)
    }
}

impl Arrow for FunctionArrow {
    fn arrowize<A, B, F>(function: F) -> Function<A, B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        Function::new(function)
    }

    fn first<A: 'static, B: 'static, C: 'static>(
        morphism: Function<A, B>,
    ) -> Function<(A, C), (B, C)> {
        Function::new(move |(input, passed): (A, C)| (morphism.call(input), passed))
    }
}

// =============================================================================
// FallibleArrow
// =============================================================================

/// The family of functions that may fail with `E`.
///
/// # Examples
///
/// ```rust
/// use algebars::typeclass::{Arrow, FallibleArrow, Function, Semigroupoid};
///
/// type Parse = FallibleArrow<String>;
///
/// let parse = Parse::arrowize(|text: &'static str| text.len());
/// let positive = Function::new(|size: usize| {
///     if size > 0 { Ok(size) } else { Err(String::from("empty")) }
/// });
/// let checked = Parse::compose(positive, parse);
/// assert_eq!(Parse::invoke(&checked, "abc"), Ok(3));
/// assert_eq!(Parse::invoke(&checked, ""), Err(String::from("empty")));
/// ```
pub struct FallibleArrow<E>(PhantomData<fn() -> E>);

impl<E> fmt::Debug for FallibleArrow<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("FallibleArrow")
    }
}

impl<E: 'static> Semigroupoid for FallibleArrow<E> {
    type Morphism<A, B> = Function<A, Result<B, E>>;
    type Output<B> = Result<B, E>;

    fn compose<A: 'static, B: 'static, C: 'static>(
        later: Function<B, Result<C, E>>,
        earlier: Function<A, Result<B, E>>,
    ) -> Function<A, Result<C, E>> {
        Function::new(move |input| earlier.call(input).and_then(|middle| later.call(middle)))
    }

    #[inline]
    fn invoke<A, B>(morphism: &Function<A, Result<B, E>>, input: A) -> Result<B, E> {
        morphism.call(input)
    }
}

impl<E: 'static> Category for FallibleArrow<E> {
    fn identity<A: 'static>() -> Function<A, Result<A, E>> {
        Function::new(Ok)
    }
}

impl<E: 'static> Arrow for FallibleArrow<E> {
    fn arrowize<A, B, F>(function: F) -> Function<A, Result<B, E>>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        Function::new(move |input| Ok(function(input)))
    }

    fn first<A: 'static, B: 'static, C: 'static>(
        morphism: Function<A, Result<B, E>>,
    ) -> Function<(A, C), Result<(B, C), E>> {
        Function::new(move |(input, passed): (A, C)| {
            morphism.call(input).map(|output| (output, passed))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::arrow::{reassociate_left, swap};
    use rstest::rstest;

    type Checked = FallibleArrow<&'static str>;

    fn non_negative() -> Function<i32, Result<i32, &'static str>> {
        Function::new(|value: i32| if value >= 0 { Ok(value) } else { Err("negative") })
    }

    #[rstest]
    fn function_arrow_compose_runs_earlier_first() {
        let add_one = FunctionArrow::arrowize(|value: i32| value + 1);
        let to_text = FunctionArrow::arrowize(|value: i32| value.to_string());
        let composed = FunctionArrow::compose(to_text, add_one);
        assert_eq!(FunctionArrow::invoke(&composed, 9), "10");
    }

    #[rstest]
    fn function_arrow_pipe_compose_reads_left_to_right() {
        let add_one = FunctionArrow::arrowize(|value: i32| value + 1);
        let double = FunctionArrow::arrowize(|value: i32| value * 2);
        let piped = FunctionArrow::pipe_compose(add_one, double);
        assert_eq!(FunctionArrow::invoke(&piped, 3), 8);
    }

    #[rstest]
    fn function_arrow_first_and_second() {
        let double = FunctionArrow::arrowize(|value: i32| value * 2);
        let on_first = FunctionArrow::first::<i32, i32, char>(double.clone());
        let on_second = FunctionArrow::second::<i32, i32, char>(double);
        assert_eq!(FunctionArrow::invoke(&on_first, (4, 'x')), (8, 'x'));
        assert_eq!(FunctionArrow::invoke(&on_second, ('y', 4)), ('y', 8));
    }

    #[rstest]
    fn function_arrow_product_runs_each_side() {
        let length = FunctionArrow::arrowize(|text: String| text.len());
        let negate = FunctionArrow::arrowize(|value: i64| -value);
        let both = FunctionArrow::product(length, negate);
        assert_eq!(FunctionArrow::invoke(&both, (String::from("four"), 4)), (4, -4));
    }

    #[rstest]
    fn function_arrow_fanout() {
        let below = FunctionArrow::arrowize(|value: i32| value - 10);
        let shout = FunctionArrow::arrowize(|value: i32| format!("{value}!"));
        let both = FunctionArrow::fanout(below, shout);
        assert_eq!(FunctionArrow::invoke(&both, 42), (32, String::from("42!")));
    }

    #[rstest]
    fn function_arrow_pre_and_post_compose() {
        let double = FunctionArrow::arrowize(|value: usize| value * 2);
        let parsed = FunctionArrow::precompose(|text: &'static str| text.len(), double);
        let labelled = FunctionArrow::postcompose(parsed, |value: usize| format!("<{value}>"));
        assert_eq!(FunctionArrow::invoke(&labelled, "abc"), "<6>");
    }

    #[rstest]
    fn function_arrow_lifts_pair_functions() {
        let swapped = FunctionArrow::arrowize(swap::<i32, char>);
        let regrouped = FunctionArrow::arrowize(reassociate_left::<u8, u8, u8>);
        assert_eq!(FunctionArrow::invoke(&swapped, (1, 'a')), ('a', 1));
        assert_eq!(FunctionArrow::invoke(&regrouped, (1, (2, 3))), ((1, 2), 3));
    }

    #[rstest]
    fn function_arrow_compose_all_of_nothing_is_none() {
        let nothing: Vec<Function<i32, i32>> = Vec::new();
        assert!(FunctionArrow::compose_all(nothing).is_none());
    }

    #[rstest]
    fn fallible_compose_short_circuits() {
        let halve = Checked::arrowize(|value: i32| value / 2);
        let checked = Checked::compose(halve, non_negative());
        assert_eq!(Checked::invoke(&checked, 8), Ok(4));
        assert_eq!(Checked::invoke(&checked, -8), Err("negative"));
    }

    #[rstest]
    fn fallible_identity_never_fails() {
        let identity = Checked::identity::<String>();
        assert_eq!(Checked::invoke(&identity, String::from("ok")), Ok(String::from("ok")));
    }

    #[rstest]
    fn fallible_first_threads_the_error() {
        let on_first = Checked::first::<i32, i32, bool>(non_negative());
        assert_eq!(Checked::invoke(&on_first, (1, true)), Ok((1, true)));
        assert_eq!(Checked::invoke(&on_first, (-1, true)), Err("negative"));
    }

    #[rstest]
    fn fallible_product_runs_right_side_first() {
        let failing_left = Function::new(|_: i32| Err::<i32, &'static str>("left"));
        let failing_right = Function::new(|_: i32| Err::<i32, &'static str>("right"));
        let both = Checked::product(failing_left, failing_right);
        assert_eq!(Checked::invoke(&both, (0, 0)), Err("right"));
    }

    #[rstest]
    fn fallible_fanout() {
        let doubled = Checked::arrowize(|value: i32| value * 2);
        let both = Checked::fanout(non_negative(), doubled);
        assert_eq!(Checked::invoke(&both, 5), Ok((5, 10)));
        assert_eq!(Checked::invoke(&both, -5), Err("negative"));
    }
}
