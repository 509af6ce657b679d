/// Constructs a [`struct@Variant`] type from a list of alternative types.
///
/// # Examples
///
/// ```rust
/// use variant::Variant;
///
/// type Number = Variant![i32, u32, f64];
/// let n: Number = Variant::new(42u32);
/// assert_eq!(n.index(), 1);
/// ```
#[macro_export]
macro_rules! Variant {
    [$($t:ty),* $(,)?] => [$crate::Variant::<$crate::T![$($t,)*]>];
}

/// Spells out an alternative list as the nested tuple type behind
/// [`Variant!`].
///
/// Useful where the list itself is the parameter, as in `Variant<S>` bounds
/// or aliases shared by several variant types. [`t`] builds the matching
/// value lists.
///
/// # Examples
///
/// ```rust
/// use variant::{Variant, T};
///
/// type Literal = T![bool, i64, String];
///
/// let v: Variant<Literal> = Variant::new(true);
/// let same: Variant![bool, i64, String] = v;
/// assert_eq!(same.index(), 0);
/// ```
#[macro_export]
macro_rules! T {
    [] => [()];
    [$head:ty $(, $t:ty)* $(,)?] => [($head, $crate::T!($($t,)*))];
}

/// Builds a handler list for [`Variant::fold`](crate::Variant::fold), one
/// closure per alternative in declaration order.
///
/// The type of the resulting value is spelled with [`T`].
///
/// # Examples
///
/// ```rust
/// use variant::{t, Variant};
///
/// let v: Variant![bool, i64, String] = Variant::new(12i64);
/// let width = v.fold_ref(t![
///     |_: &bool| 1,
///     |n: &i64| n.to_string().len(),
///     |s: &String| s.len(),
/// ]);
/// assert_eq!(width, 2);
/// ```
#[macro_export]
macro_rules! t {
    [] => [()];
    [$head:expr $(, $t:expr)* $(,)?] => [($head, $crate::t!($($t,)*))];
}
