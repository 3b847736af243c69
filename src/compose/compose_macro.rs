//! The `compose!` macro for morphism composition.
//!
//! This module provides the [`compose!`] macro which composes morphisms of
//! one [`Semigroupoid`](crate::typeclass::Semigroupoid) family from right to
//! left, following the mathematical notation for composition.

/// Composes morphisms of one family from right to left.
///
/// `compose!(F; f, g, h)` is the morphism that runs `h`, then `g`, then `f`.
/// The family `F` is written first, followed by a semicolon.
///
/// # Laws
///
/// - **Associativity**: `compose!(F; f, compose!(F; g, h)) == compose!(F; compose!(F; f, g), h)`
/// - **Left Identity**: `compose!(F; F::identity(), f) == f`
/// - **Right Identity**: `compose!(F; f, F::identity()) == f`
///
/// # Syntax
///
/// - `compose!(F; f)` - Returns `f` unchanged
/// - `compose!(F; f, g)` - Returns `F::compose(f, g)`
/// - `compose!(F; f, g, h, ...)` - Composes any number of morphisms
///
/// # Examples
///
/// ```
/// use algebars::compose;
/// use algebars::typeclass::{Function, FunctionArrow, Semigroupoid};
///
/// let add_one = Function::new(|x: i32| x + 1);
/// let double = Function::new(|x: i32| x * 2);
/// let square = Function::new(|x: i32| x * x);
///
/// // add_one(double(square(3))) = 19
/// let composed = compose!(FunctionArrow; add_one, double, square);
/// assert_eq!(FunctionArrow::invoke(&composed, 3), 19);
/// ```
///
/// ## Fallible morphisms
///
/// ```
/// use algebars::compose;
/// use algebars::typeclass::{Arrow, FallibleArrow, Function, Semigroupoid};
///
/// type Checked = FallibleArrow<String>;
///
/// let parse = Function::new(|text: &'static str| {
///     text.parse::<i32>().map_err(|error| error.to_string())
/// });
/// let double = Checked::arrowize(|x: i32| x * 2);
///
/// let composed = compose!(Checked; double, parse);
/// assert_eq!(Checked::invoke(&composed, "21"), Ok(42));
/// assert!(Checked::invoke(&composed, "twenty").is_err());
/// ```
#[macro_export]
macro_rules! compose {
    ($family:ty; $morphism:expr $(,)?) => {
        $morphism
    };

    ($family:ty; $later:expr, $($earlier:expr),+ $(,)?) => {
        <$family as $crate::typeclass::Semigroupoid>::compose(
            $later,
            $crate::compose!($family; $($earlier),+),
        )
    };
}
