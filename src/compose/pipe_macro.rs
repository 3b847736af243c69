//! The `pipe!` and `pipe_compose!` macros for left-to-right morphism chains.

/// Composes morphisms of one family from left to right.
///
/// `pipe_compose!(F; f, g, h)` is the morphism that runs `f`, then `g`, then
/// `h`. It is `compose!(F; h, g, f)` written in reading order.
///
/// # Examples
///
/// ```
/// use algebars::pipe_compose;
/// use algebars::typeclass::{Function, FunctionArrow, Semigroupoid};
///
/// let square = Function::new(|x: i32| x * x);
/// let double = Function::new(|x: i32| x * 2);
///
/// // double(square(3)) = 18
/// let pipeline = pipe_compose!(FunctionArrow; square, double);
/// assert_eq!(FunctionArrow::invoke(&pipeline, 3), 18);
/// ```
#[macro_export]
macro_rules! pipe_compose {
    ($family:ty; $morphism:expr $(,)?) => {
        $morphism
    };

    ($family:ty; $first:expr, $($rest:expr),+ $(,)?) => {
        <$family as $crate::typeclass::Semigroupoid>::pipe_compose(
            $first,
            $crate::pipe_compose!($family; $($rest),+),
        )
    };
}

/// Pipes a value through morphisms of one family from left to right.
///
/// `pipe!(F; x, f, g, h)` invokes `pipe_compose!(F; f, g, h)` on `x`, so the
/// result is the family's output type: a plain value for
/// [`FunctionArrow`](crate::typeclass::FunctionArrow), a `Result` for
/// [`FallibleArrow`](crate::typeclass::FallibleArrow).
///
/// # Relationship with compose!
///
/// `pipe!(F; x, f, g, h)` is `F::invoke(&compose!(F; h, g, f), x)`.
///
/// # Examples
///
/// ```
/// use algebars::pipe;
/// use algebars::typeclass::{Arrow, FunctionArrow};
///
/// let to_text = FunctionArrow::arrowize(|x: i32| x.to_string());
/// let length = FunctionArrow::arrowize(|text: String| text.len());
///
/// assert_eq!(pipe!(FunctionArrow; 12345, to_text, length), 5);
/// ```
///
/// ## Short-circuiting
///
/// ```
/// use algebars::pipe;
/// use algebars::typeclass::{Arrow, FallibleArrow, Function};
///
/// type Checked = FallibleArrow<&'static str>;
///
/// let positive = Function::new(|x: i32| if x > 0 { Ok(x) } else { Err("not positive") });
/// let halve = Checked::arrowize(|x: i32| x / 2);
///
/// assert_eq!(pipe!(Checked; 10, positive.clone(), halve.clone()), Ok(5));
/// assert_eq!(pipe!(Checked; -10, positive, halve), Err("not positive"));
/// ```
#[macro_export]
macro_rules! pipe {
    ($family:ty; $value:expr, $($morphism:expr),+ $(,)?) => {
        <$family as $crate::typeclass::Semigroupoid>::invoke(
            &$crate::pipe_compose!($family; $($morphism),+),
            $value,
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::compose;
    use crate::typeclass::{Arrow, FunctionArrow, Semigroupoid};

    #[test]
    fn pipe_single_morphism_invokes_it() {
        let double = FunctionArrow::arrowize(|x: i32| x * 2);
        assert_eq!(pipe!(FunctionArrow; 5, double), 10);
    }

    #[test]
    fn pipe_runs_left_to_right() {
        let square = FunctionArrow::arrowize(|x: i32| x * x);
        let double = FunctionArrow::arrowize(|x: i32| x * 2);
        let add_one = FunctionArrow::arrowize(|x: i32| x + 1);
        assert_eq!(pipe!(FunctionArrow; 3, square, double, add_one), 19);
    }

    #[test]
    fn pipe_matches_reversed_compose() {
        let f = FunctionArrow::arrowize(|x: i32| x + 1);
        let g = FunctionArrow::arrowize(|x: i32| x * 2);
        let h = FunctionArrow::arrowize(|x: i32| x - 3);

        let composed = compose!(FunctionArrow; h.clone(), g.clone(), f.clone());
        assert_eq!(pipe!(FunctionArrow; 10, f, g, h), FunctionArrow::invoke(&composed, 10));
    }
}
