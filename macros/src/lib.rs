//! Proc macros for the [`variant`](https://docs.rs/variant) crate.
use proc_macro::TokenStream;

mod pat;

/// Exhaustive, pattern-style dispatch over the alternatives of a `Variant`.
///
/// Each arm names one alternative by its type, as in `binding: Type => body`,
/// and receives the payload by value. Arms are tried in order by peeling the
/// alternative off with `try_unwrap`; when the last arm has run out of
/// alternatives to peel, the leftover variant must be empty, so an
/// alternative without an arm is a compile error. A final `_ => body` arm
/// instead takes every alternative not named before it.
///
/// An arm may carry an `if` guard. When the guard is false the payload is put
/// back and the following arms are tried, so a guarded arm never covers its
/// alternative on its own.
///
/// Borrow the variant with `as_ref()` or `as_mut()` to match on references.
///
/// # Example
///
/// ```
/// use variant::{match_variant, Variant};
///
/// let v: Variant![i32, String, f64] = Variant::new(String::from("four"));
/// let len = match_variant!(v {
///     n: i32 => n as usize,
///     s: String => s.len(),
///     _: f64 => 0,
/// });
/// assert_eq!(len, 4);
/// ```
///
/// With guards:
///
/// ```
/// use variant::{match_variant, Variant};
///
/// let v: Variant![i32, String] = Variant::new(-3);
/// let sign = match_variant!(v {
///     n: i32 if n < 0 => "negative",
///     _: i32 => "non-negative",
///     _: String => "text",
/// });
/// assert_eq!(sign, "negative");
/// ```
///
/// Missing an alternative does not compile. The error names the list of
/// alternatives left without an arm, here
/// ``"`match_variant!` has no arm for the alternatives in `(String, ())`"``:
///
/// ```compile_fail,E0277
/// use variant::{match_variant, Variant};
///
/// let v: Variant![i32, String] = Variant::new(1);
/// let n = match_variant!(v {
///     n: i32 => n,
/// });
/// ```
///
/// Neither does an alternative covered only by guarded arms:
///
/// ```compile_fail,E0277
/// use variant::{match_variant, Variant};
///
/// let v: Variant![i32] = Variant::new(1);
/// let n = match_variant!(v {
///     n: i32 if n > 0 => n,
/// });
/// ```
///
/// Limitations:
/// - A type may be named by at most one arm, and if it occurs several times
///   in the variant the arm is ambiguous; use `Variant::fold` there.
/// - Patterns must be irrefutable, and the `_` arm cannot have a guard.
/// - The arm bodies run inside a labeled block, so an unlabeled `break` or
///   `continue` cannot reach a loop around the macro.
#[proc_macro]
pub fn match_variant(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as pat::VariantMatch);
    pat::expand_match(input).into()
}
