#![doc = include_str!("../README.md")]
#![no_std]
#![deny(future_incompatible)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
extern crate std;

use core::{
    any::{self, Any, TypeId},
    fmt,
    hash::{Hash, Hasher},
    mem::{self, ManuallyDrop},
    ops::{Deref, DerefMut},
};

#[macro_use]
mod macros;

pub mod derive;
pub mod error;
pub mod fold;
pub mod index;
pub mod repr;

pub use self::error::Error;
pub use self::fold::Fold;
#[cfg(feature = "macros")]
pub use variant_macros::match_variant;

use self::index::{Index, UTerm};

pub type Repr<S> = <S as repr::SumList>::Repr;

/// A tagged union holding exactly one value of one of the alternative types
/// in the type list `S`.
///
/// `S` is normally written with the [`Variant!`] macro: `Variant![i32, String]`
/// is `Variant<(i32, (String, ()))>`. Alternatives are numbered from `0` in
/// declaration order, both by the runtime [`index`](Variant::index) and by the
/// index types in [`index`](crate::index).
///
/// The variant owns its payload. It is [`Send`] and [`Sync`] exactly when all
/// alternatives are, and it does no locking: sharing one across threads for
/// mutation needs the usual external synchronization.
///
/// Alternatives are selected by type, with the position inferred:
///
/// ```rust
/// use variant::Variant;
///
/// let mut v: Variant![i32, String, f64] = Variant::new(42);
/// assert_eq!(v.index(), 0);
/// assert_eq!(v.get::<i32, _>(), Ok(&42));
/// assert_eq!(v.try_get::<String, _>(), None);
///
/// v.set(String::from("hello"));
/// assert_eq!(v.index(), 1);
/// assert!(v.get::<i32, _>().is_err());
/// ```
///
/// When a type occurs more than once, its position must be named:
///
/// ```rust
/// use variant::{index::U1, Variant};
///
/// let v: Variant![String, String] = Variant::new::<_, U1>(String::from("right"));
/// assert_eq!(v.index(), 1);
/// ```
///
/// Storing a value of a type that is not an alternative does not compile:
///
/// ```rust,compile_fail
/// use variant::Variant;
///
/// let v: Variant![i32, String] = Variant::new(0.5f64);
/// ```
pub struct Variant<S: repr::SumList> {
    tag: u8,
    data: ManuallyDrop<Repr<S>>,
}

impl<T> From<T> for Variant![T] {
    /// Construct a `Variant` of one type from a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use variant::Variant;
    ///
    /// let v: Variant![i32] = 42.into();
    /// assert_eq!(*v, 42);
    /// ```
    fn from(value: T) -> Self {
        Variant::new(value)
    }
}

impl<T> Deref for Variant![T] {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        unsafe { <(T, ()) as repr::Split<T, UTerm>>::get_unchecked(&self.data) }
    }
}

impl<T> DerefMut for Variant![T] {
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { <(T, ()) as repr::Split<T, UTerm>>::get_mut_unchecked(&mut self.data) }
    }
}

impl<T> Variant![T] {
    pub fn into_inner(self) -> T {
        let mut this = ManuallyDrop::new(self);
        unsafe {
            let data = ManuallyDrop::take(&mut this.data);
            <(T, ()) as repr::Split<T, UTerm>>::into_data_unchecked(data)
        }
    }
}

impl Variant![] {
    /// Eliminates a variant with no alternatives, which cannot exist.
    pub fn unreachable(self) -> ! {
        match self.data.0 {}
    }
}

impl<S: repr::SumList> Variant<S> {
    /// The number of alternatives.
    pub const COUNT: usize = <<S as repr::Count>::Count as Index>::TAG as usize;

    /// Creates a variant holding `value` as the alternative `T` at position
    /// `U`.
    ///
    /// `U` is inferred when `T` occurs once in the list.
    pub fn new<T, U>(value: T) -> Self
    where
        S: repr::Split<T, U>,
        U: Index,
    {
        Variant {
            tag: U::TAG,
            data: ManuallyDrop::new(S::from_data(value)),
        }
    }

    /// The position of the live alternative, starting from `0`.
    pub fn index(&self) -> usize {
        self.tag.into()
    }

    pub fn is_alternative(&self, index: usize) -> bool {
        self.index() == index
    }

    /// Whether the live alternative is `T` at position `U`.
    pub fn holds<T, U>(&self) -> bool
    where
        S: repr::Split<T, U>,
        U: Index,
    {
        self.tag == U::TAG
    }

    pub fn try_get<T, U>(&self) -> Option<&T>
    where
        S: repr::Split<T, U>,
        U: Index,
    {
        (self.tag == U::TAG).then(|| unsafe { S::get_unchecked(&self.data) })
    }

    pub fn try_get_mut<T, U>(&mut self) -> Option<&mut T>
    where
        S: repr::Split<T, U>,
        U: Index,
    {
        if self.tag != U::TAG {
            return None;
        }
        Some(unsafe { S::get_mut_unchecked(&mut self.data) })
    }

    /// Borrows the alternative `T`, failing with [`Error::Inactive`] if it is
    /// not live.
    pub fn get<T, U>(&self) -> Result<&T, Error>
    where
        S: repr::Split<T, U>,
        U: Index,
    {
        self.check_live(U::TAG)?;
        Ok(unsafe { S::get_unchecked(&self.data) })
    }

    /// Mutably borrows the alternative `T`, failing with [`Error::Inactive`]
    /// if it is not live.
    pub fn get_mut<T, U>(&mut self) -> Result<&mut T, Error>
    where
        S: repr::Split<T, U>,
        U: Index,
    {
        self.check_live(U::TAG)?;
        Ok(unsafe { S::get_mut_unchecked(&mut self.data) })
    }

    /// Replaces the payload with `value`, making `T` at `U` the live
    /// alternative. The previous payload is dropped.
    pub fn set<T, U>(&mut self, value: T)
    where
        S: repr::Split<T, U>,
        U: Index,
    {
        *self = Variant::new(value);
    }

    /// Like [`set`](Variant::set), but hands back the previous variant.
    pub fn replace<T, U>(&mut self, value: T) -> Self
    where
        S: repr::Split<T, U>,
        U: Index,
    {
        mem::replace(self, Variant::new(value))
    }

    pub fn inspect<T, U, F>(self, f: F) -> Self
    where
        S: repr::Split<T, U>,
        U: Index,
        F: FnOnce(&T),
    {
        if let Some(value) = self.try_get() {
            f(value);
        }
        self
    }

    pub fn inspect_mut<T, U, F>(mut self, f: F) -> Self
    where
        S: repr::Split<T, U>,
        U: Index,
        F: FnOnce(&mut T),
    {
        if let Some(value) = self.try_get_mut() {
            f(value);
        }
        self
    }

    fn check_live(&self, requested: u8) -> Result<(), Error> {
        if self.tag == requested {
            return Ok(());
        }
        tracing::debug!(requested, active = self.tag, "alternative is not live");
        Err(Error::Inactive {
            requested: requested.into(),
            active: self.index(),
        })
    }
}

pub type Rem<S, T, U> = <S as repr::Split<T, U>>::Remainder;
pub type Substitute<S, T, T2, U> = <S as repr::Split<T, U>>::Substitute<T2>;

impl<S: repr::SumList> Variant<S> {
    /// Moves out the alternative `T`, or returns the variant narrowed to the
    /// remaining alternatives.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use variant::Variant;
    ///
    /// let v: Variant![i32, String, f64] = Variant::new(0.5);
    /// let rest: Variant![String, f64] = v.try_unwrap::<i32, _>().unwrap_err();
    /// assert_eq!(rest.try_unwrap::<f64, _>().ok(), Some(0.5));
    /// ```
    pub fn try_unwrap<T, U>(self) -> Result<T, Variant<Rem<S, T, U>>>
    where
        S: repr::Split<T, U>,
        U: Index,
    {
        let mut this = ManuallyDrop::new(self);
        let tag = this.tag;
        let data = unsafe { ManuallyDrop::take(&mut this.data) };
        match unsafe { S::split(data, tag) } {
            Ok(value) => Ok(value),
            Err((data, tag)) => Err(Variant {
                tag,
                data: ManuallyDrop::new(data),
            }),
        }
    }

    /// Moves out the alternative `T` along with a constructor that puts a
    /// value back at the same position, or returns the variant unchanged if
    /// `T` is not live.
    ///
    /// Guarded arms of `match_variant!` use it to fall through without
    /// narrowing the variant.
    #[doc(hidden)]
    pub fn peel<T, U>(self) -> Result<(T, fn(T) -> Self), Self>
    where
        S: repr::Split<T, U>,
        U: Index,
    {
        if !self.holds::<T, U>() {
            return Err(self);
        }
        let mut this = ManuallyDrop::new(self);
        let data = unsafe { ManuallyDrop::take(&mut this.data) };
        let restore: fn(T) -> Self = Self::new::<T, U>;
        Ok((unsafe { S::into_data_unchecked(data) }, restore))
    }

    /// Eliminates what is left after every alternative has been peeled off.
    ///
    /// `match_variant!` ends with this call, so a missing arm is reported
    /// as an unsatisfied [`Exhausted`](repr::Exhausted) bound naming the
    /// alternatives left over.
    #[doc(hidden)]
    pub fn exhausted(self) -> !
    where
        S: repr::Exhausted,
    {
        let mut this = ManuallyDrop::new(self);
        S::absurd(unsafe { ManuallyDrop::take(&mut this.data) })
    }

    /// Replaces the alternative `T` with `T2`, converting the payload with
    /// `f` if `T` is live.
    pub fn map<T, T2, U>(self, f: impl FnOnce(T) -> T2) -> Variant<Substitute<S, T, T2, U>>
    where
        S: repr::Split<T, U>,
        U: Index,
    {
        let mut this = ManuallyDrop::new(self);
        let tag = this.tag;
        let data = unsafe { S::substitute(ManuallyDrop::take(&mut this.data), tag, f) };
        Variant {
            tag,
            data: ManuallyDrop::new(data),
        }
    }

    /// Consumes the variant with the handler of the live alternative.
    ///
    /// `handlers` is a [`t!`] list with one closure per alternative, in
    /// order. Exactly one of them runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use variant::{t, Variant};
    ///
    /// let v: Variant![i32, String] = Variant::new(String::from("four"));
    /// let len = v.fold(t![|n: i32| n as usize, |s: String| s.len()]);
    /// assert_eq!(len, 4);
    /// ```
    ///
    /// Leaving an alternative without a handler does not compile:
    ///
    /// ```rust,compile_fail
    /// use variant::{t, Variant};
    ///
    /// let v: Variant![i32, String] = Variant::new(3);
    /// let n = v.fold(t![|n: i32| n]);
    /// ```
    pub fn fold<R, H>(self, handlers: H) -> R
    where
        H: Fold<S, R>,
    {
        let mut this = ManuallyDrop::new(self);
        let tag = this.tag;
        let data = unsafe { ManuallyDrop::take(&mut this.data) };
        unsafe { Fold::<S, R>::fold(handlers, data, tag) }
    }

    /// Like [`fold`](Variant::fold), with handlers taking the payload by
    /// reference.
    pub fn fold_ref<'a, R, H>(&'a self, handlers: H) -> R
    where
        S: repr::SumRef + 'a,
        H: Fold<S::Ref<'a>, R>,
    {
        self.as_ref().fold(handlers)
    }

    /// Like [`fold`](Variant::fold), with handlers taking the payload by
    /// mutable reference.
    pub fn fold_mut<'a, R, H>(&'a mut self, handlers: H) -> R
    where
        S: repr::SumRef + 'a,
        H: Fold<S::Mut<'a>, R>,
    {
        self.as_mut().fold(handlers)
    }

    /// Borrows every alternative, turning `Variant![A, B]` into
    /// `Variant![&A, &B]` with the same live position.
    pub fn as_ref(&self) -> Variant<S::Ref<'_>>
    where
        S: repr::SumRef,
    {
        Variant {
            tag: self.tag,
            data: ManuallyDrop::new(unsafe { S::as_ref(&self.data, self.tag) }),
        }
    }

    /// Mutably borrows every alternative, turning `Variant![A, B]` into
    /// `Variant![&mut A, &mut B]` with the same live position.
    pub fn as_mut(&mut self) -> Variant<S::Mut<'_>>
    where
        S: repr::SumRef,
    {
        let tag = self.tag;
        Variant {
            tag,
            data: ManuallyDrop::new(unsafe { S::as_mut(&mut self.data, tag) }),
        }
    }
}

impl<S: derive::TypeMeta> Variant<S> {
    /// Creates a variant holding `value` at the runtime position `index`.
    ///
    /// Fails with [`Error::OutOfRange`] if there is no such position, and
    /// with [`Error::TypeMismatch`] if the alternative there is not `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use variant::{Error, Variant};
    ///
    /// type V = Variant![i32, String, f64];
    ///
    /// let v = V::try_new_at(2, 0.5f64).unwrap();
    /// assert_eq!(v.index(), 2);
    ///
    /// assert!(matches!(V::try_new_at(3, 0.5f64), Err(Error::OutOfRange { .. })));
    /// assert!(matches!(V::try_new_at(1, 0.5f64), Err(Error::TypeMismatch { .. })));
    /// ```
    pub fn try_new_at<T: 'static>(index: usize, value: T) -> Result<Self, Error> {
        let tag = Self::check_index(index)?;
        let mut slot = Some(value);
        match S::from_any(tag, &mut slot) {
            Some(data) => Ok(Variant {
                tag,
                data: ManuallyDrop::new(data),
            }),
            None => Err(Self::type_mismatch::<T>(tag)),
        }
    }

    /// Replaces the payload with `value` at the runtime position `index`.
    ///
    /// Fails like [`try_new_at`](Variant::try_new_at), in which case the
    /// variant is left unchanged.
    pub fn try_set_at<T: 'static>(&mut self, index: usize, value: T) -> Result<(), Error> {
        *self = Self::try_new_at(index, value)?;
        Ok(())
    }

    /// Borrows the alternative at the runtime position `index` as a `T`.
    ///
    /// The checks run in order: [`Error::OutOfRange`], [`Error::TypeMismatch`]
    /// against the declared type at `index`, then [`Error::Inactive`].
    pub fn get_at<T: 'static>(&self, index: usize) -> Result<&T, Error> {
        let tag = self.check_declared::<T>(index)?;
        self.check_live(tag)?;
        self.as_any()
            .downcast_ref()
            .ok_or_else(|| Self::type_mismatch::<T>(tag))
    }

    /// Mutably borrows the alternative at the runtime position `index` as a
    /// `T`, with the checks of [`get_at`](Variant::get_at).
    pub fn get_at_mut<T: 'static>(&mut self, index: usize) -> Result<&mut T, Error> {
        let tag = self.check_declared::<T>(index)?;
        self.check_live(tag)?;
        self.as_any_mut()
            .downcast_mut()
            .ok_or_else(|| Self::type_mismatch::<T>(tag))
    }

    pub fn type_id(&self) -> TypeId {
        S::type_id(self.tag)
    }

    pub fn type_name(&self) -> &'static str {
        S::type_name(self.tag)
    }

    pub fn as_any(&self) -> &dyn Any {
        unsafe { S::as_any(&self.data, self.tag) }
    }

    pub fn as_any_mut(&mut self) -> &mut dyn Any {
        unsafe { S::as_any_mut(&mut self.data, self.tag) }
    }

    fn check_index(index: usize) -> Result<u8, Error> {
        match u8::try_from(index) {
            Ok(tag) if index < Self::COUNT => Ok(tag),
            _ => {
                tracing::debug!(index, count = Self::COUNT, "alternative index out of range");
                Err(Error::OutOfRange {
                    index,
                    count: Self::COUNT,
                })
            }
        }
    }

    fn check_declared<T: 'static>(&self, index: usize) -> Result<u8, Error> {
        let tag = Self::check_index(index)?;
        if S::type_id(tag) != TypeId::of::<T>() {
            return Err(Self::type_mismatch::<T>(tag));
        }
        Ok(tag)
    }

    fn type_mismatch<T>(tag: u8) -> Error {
        let (expected, found) = (S::type_name(tag), any::type_name::<T>());
        tracing::debug!(index = tag, expected, found, "alternative type mismatch");
        Error::TypeMismatch {
            index: tag.into(),
            expected,
            found,
        }
    }
}

impl<S: derive::SumDebug> fmt::Debug for Variant<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(unsafe { S::debug(&self.data, self.tag) }, f)
    }
}

impl<S: derive::SumDisplay> fmt::Display for Variant<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(unsafe { S::display(&self.data, self.tag) }, f)
    }
}

impl<S: repr::SumList> Drop for Variant<S> {
    fn drop(&mut self) {
        unsafe { S::drop(&mut self.data, self.tag) }
    }
}

impl<S: derive::SumClone> Clone for Variant<S> {
    fn clone(&self) -> Self {
        Variant {
            tag: self.tag,
            data: ManuallyDrop::new(unsafe { S::clone(&self.data, self.tag) }),
        }
    }
}

impl<S: derive::SumPartialEq> PartialEq for Variant<S> {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && unsafe { S::eq(&self.data, &other.data, self.tag) }
    }
}

impl<S: derive::SumPartialEq + Eq> Eq for Variant<S> {}

impl<S: derive::SumPartialOrd> PartialOrd for Variant<S> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        match self.tag.cmp(&other.tag) {
            core::cmp::Ordering::Equal => unsafe {
                S::partial_cmp(&self.data, &other.data, self.tag)
            },
            other => Some(other),
        }
    }
}

impl<S: derive::SumOrd + Eq> Ord for Variant<S> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.tag
            .cmp(&other.tag)
            .then_with(|| unsafe { S::cmp(&self.data, &other.data, self.tag) })
    }
}

impl<S: derive::SumHash> Hash for Variant<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag.hash(state);
        unsafe { S::hash(&self.data, self.tag, state) }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::Cell,
        collections::HashSet,
        format,
        rc::Rc,
        string::{String, ToString},
        vec::Vec,
    };

    use super::*;
    use crate::index::*;

    type Scalar = Variant![i32, String, f64];

    #[test]
    fn basic() {
        let mut v: Scalar = Variant::new(42);
        assert_eq!(v.index(), 0);
        assert_eq!(v.get_at::<i32>(0), Ok(&42));
        assert_eq!(v.try_get::<String, _>(), None);

        v.set("hello".to_string());
        assert_eq!(v.index(), 1);
        assert_eq!(v.get_at::<String>(1).map(String::as_str), Ok("hello"));
        assert_eq!(
            v.get_at::<i32>(0),
            Err(Error::Inactive {
                requested: 0,
                active: 1
            })
        );
    }

    #[test]
    fn round_trip() {
        let v: Scalar = Variant::new::<_, U0>(-7);
        assert_eq!(v.get::<i32, _>(), Ok(&-7));
        let v: Scalar = Variant::new::<_, U1>("x".to_string());
        assert_eq!(v.get::<String, _>().map(String::as_str), Ok("x"));
        let v: Scalar = Variant::new::<_, U2>(1.5);
        assert_eq!(v.get::<f64, _>(), Ok(&1.5));
        assert_eq!(v.try_unwrap::<f64, _>().ok(), Some(1.5));
    }

    #[test]
    fn discriminant() {
        for index in 0..Scalar::COUNT {
            let v = match index {
                0 => Scalar::try_new_at(0, 1i32),
                1 => Scalar::try_new_at(1, String::new()),
                _ => Scalar::try_new_at(2, 1.0f64),
            }
            .unwrap();
            assert_eq!(v.index(), index);
            for other in 0..Scalar::COUNT {
                assert_eq!(v.is_alternative(other), other == index);
            }
        }
        let v: Scalar = Variant::new(1.0);
        assert!(v.holds::<f64, _>());
        assert!(!v.holds::<i32, _>());
    }

    #[test]
    fn checked_access() {
        let mut v: Scalar = Variant::new(3);
        assert_eq!(
            v.get::<f64, _>(),
            Err(Error::Inactive {
                requested: 2,
                active: 0
            })
        );
        assert_eq!(v.try_get::<f64, _>(), None);
        assert_eq!(v.try_get_mut::<String, _>(), None);

        *v.get_mut::<i32, _>().unwrap() += 1;
        *v.get_at_mut::<i32>(0).unwrap() += 1;
        assert_eq!(*v.try_get::<i32, _>().unwrap(), 5);
        assert_eq!(
            v.get_at::<String>(0),
            Err(Error::TypeMismatch {
                index: 0,
                expected: "i32",
                found: any::type_name::<String>(),
            })
        );
        assert_eq!(
            v.get_at::<i32>(5),
            Err(Error::OutOfRange { index: 5, count: 3 })
        );
    }

    #[test]
    fn overwrite() {
        let mut v: Scalar = Variant::new(1);
        v.try_set_at(1, "a".to_string()).unwrap();
        v.try_set_at(2, 2.5f64).unwrap();
        assert_eq!(v.index(), 2);
        assert!(!v.is_alternative(1));
        assert_eq!(v.get_at::<f64>(2), Ok(&2.5));

        assert_eq!(
            v.try_set_at(3, 1i32),
            Err(Error::OutOfRange { index: 3, count: 3 })
        );
        assert!(matches!(
            v.try_set_at(0, 1u8),
            Err(Error::TypeMismatch { index: 0, .. })
        ));
        assert_eq!(v.get_at::<f64>(2), Ok(&2.5));

        let old = v.replace(9);
        assert_eq!(old.get::<f64, _>(), Ok(&2.5));
        assert_eq!(v.get::<i32, _>(), Ok(&9));
    }

    #[test]
    fn out_of_range() {
        assert_eq!(
            Scalar::try_new_at(3, 1i32).err(),
            Some(Error::OutOfRange { index: 3, count: 3 })
        );
        assert_eq!(
            Scalar::try_new_at(usize::MAX, 1i32).err(),
            Some(Error::OutOfRange {
                index: usize::MAX,
                count: 3
            })
        );
        assert_eq!(<Variant![]>::COUNT, 0);
    }

    #[test]
    fn duplicates() {
        type Pair = Variant![String, String, i32];

        let mut v: Pair = Variant::new::<String, U1>("right".to_string());
        assert_eq!(v.index(), 1);
        assert_eq!(v.try_get::<String, U0>(), None);
        assert_eq!(v.get_at::<String>(1).map(String::as_str), Ok("right"));
        assert!(matches!(
            v.get_at::<String>(0),
            Err(Error::Inactive {
                requested: 0,
                active: 1
            })
        ));

        v.set::<String, U0>("left".to_string());
        assert_eq!(v.index(), 0);
        v.set(3);
        assert_eq!(v.index(), 2);

        let v = Pair::try_new_at(1, "again".to_string()).unwrap();
        let rest = v.try_unwrap::<String, U0>().unwrap_err();
        assert_eq!(rest.index(), 0);
        assert_eq!(rest.try_unwrap::<String, _>().ok().as_deref(), Some("again"));
    }

    #[test]
    fn fold() {
        let describe = |v: Scalar| {
            v.fold(t![
                |n: i32| format!("int {n}"),
                |s: String| format!("string {s}"),
                |d: f64| format!("double {d}"),
            ])
        };
        assert_eq!(describe(Variant::new(1)), "int 1");
        assert_eq!(describe(Variant::new("a".to_string())), "string a");
        assert_eq!(describe(Variant::new(0.5)), "double 0.5");

        let calls = Cell::new(0);
        let v: Scalar = Variant::new(2.0);
        let r = v.fold_ref(t![
            |_: &i32| {
                calls.set(calls.get() + 1);
                0
            },
            |_: &String| {
                calls.set(calls.get() + 1);
                1
            },
            |_: &f64| {
                calls.set(calls.get() + 1);
                2
            },
        ]);
        assert_eq!((r, calls.get()), (2, 1));

        let mut v: Scalar = Variant::new("ab".to_string());
        v.fold_mut(t![
            |n: &mut i32| *n += 1,
            |s: &mut String| s.push('c'),
            |d: &mut f64| *d += 1.0,
        ]);
        assert_eq!(v.get::<String, _>().map(String::as_str), Ok("abc"));
    }

    #[test]
    fn borrow() {
        let mut v: Scalar = Variant::new(1);
        if let Ok(n) = v.as_mut().try_unwrap::<&mut i32, _>() {
            *n = 10;
        }
        let view: Variant![&i32, &String, &f64] = v.as_ref();
        assert_eq!(view.index(), 0);
        assert_eq!(view.try_unwrap::<&i32, _>().ok(), Some(&10));

        let mut last: Scalar = Variant::new(0.5);
        if let Ok(d) = last.as_mut().try_unwrap::<&mut f64, _>() {
            *d *= 4.0;
        }
        assert_eq!(last.as_ref().index(), 2);
        assert_eq!(last.fold_ref(t![|_: &i32| 0.0, |_: &String| 0.0, |d: &f64| *d]), 2.0);

        let mut one: Variant![String] = "a".to_string().into();
        one.as_mut().push('b');
        assert_eq!(*one.as_ref().into_inner(), "ab");
    }

    #[test]
    fn peel() {
        let v: Scalar = Variant::new(7);
        let (n, restore) = v.peel::<i32, _>().ok().unwrap();
        assert_eq!(n, 7);
        let v = restore(n + 1);
        assert_eq!(v.get::<i32, _>(), Ok(&8));

        let v = v.peel::<String, _>().err().unwrap();
        assert_eq!(v.index(), 0);
        assert_eq!(v.try_get::<i32, _>(), Some(&8));
    }

    #[test]
    fn map() {
        let v: Scalar = Variant::new(21);
        let v: Variant![i64, String, f64] = v.map(|n: i32| i64::from(n) * 2);
        assert_eq!(v.get::<i64, _>(), Ok(&42));

        let v: Scalar = Variant::new(0.25);
        let v: Variant![i32, usize, f64] = v.map(|s: String| s.len());
        assert_eq!(v.get::<f64, _>(), Ok(&0.25));

        let v: Scalar = Variant::new(1);
        let v = v.inspect(|n: &i32| assert_eq!(*n, 1));
        let v = v.inspect_mut(|n: &mut i32| *n = 2);
        assert_eq!(v.get::<i32, _>(), Ok(&2));
    }

    #[test]
    fn single() {
        let mut v: Variant![String] = "one".to_string().into();
        v.push('!');
        assert_eq!(v.len(), 4);
        assert_eq!(v.into_inner(), "one!");
    }

    #[test]
    fn traits() {
        let a: Scalar = Variant::new(1);
        let b: Scalar = Variant::new(2);
        let s: Scalar = Variant::new("1".to_string());

        assert_eq!(a.clone(), a);
        assert_ne!(a, b);
        assert_ne!(a, s);
        assert!(a < b);
        assert!(b < s);

        assert_eq!(format!("{a}"), "1");
        assert_eq!(format!("{s}"), "1");
        assert_eq!(format!("{s:?}"), "\"1\"");
        assert_eq!(format!("{:>3}", a), "  1");

        type Key = Variant![u8, String];
        let keys: HashSet<Key> = [
            Key::new(1u8),
            Key::new(1u8),
            Key::new("1".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(keys.len(), 2);

        let mut sorted: Vec<Key> = [Key::new("b".to_string()), Key::new(9u8), Key::new(3u8)]
            .into_iter()
            .collect();
        sorted.sort();
        assert_eq!(sorted[0], Key::new(3u8));
        assert_eq!(sorted[2], Key::new("b".to_string()));
    }

    #[test]
    fn type_info() {
        let v: Scalar = Variant::new("s".to_string());
        assert_eq!(v.type_id(), TypeId::of::<String>());
        assert_eq!(v.type_name(), any::type_name::<String>());
        assert!(v.as_any().is::<String>());
    }

    struct Tracked(Rc<Cell<usize>>);

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    impl Clone for Tracked {
        fn clone(&self) -> Self {
            Tracked(self.0.clone())
        }
    }

    #[test]
    fn drops() {
        let drops = Rc::new(Cell::new(0));
        let tracked = || Tracked(drops.clone());

        let mut v: Variant![i32, Tracked] = Variant::new(tracked());
        v.set(1);
        assert_eq!(drops.get(), 1);
        v.set(tracked());
        let copy = v.clone();
        drop(v);
        assert_eq!(drops.get(), 2);

        let rest = copy.try_unwrap::<i32, _>().unwrap_err();
        assert_eq!(drops.get(), 2);
        let inner: Tracked = rest.into_inner();
        drop(inner);
        assert_eq!(drops.get(), 3);

        let v: Variant![Tracked, i32] = Variant::new(tracked());
        let v: Variant![i32, i32] = v.map(|_: Tracked| 0);
        assert_eq!(drops.get(), 4);
        assert_eq!(v.index(), 0);

        let v: Variant![Tracked, i32] = Variant::new(tracked());
        v.fold(t![|_: Tracked| (), |_: i32| ()]);
        assert_eq!(drops.get(), 5);

        let v: Variant![Tracked, i32] = Variant::new(tracked());
        let _ = v.fold_ref(t![|_: &Tracked| (), |_: &i32| ()]);
        assert_eq!(drops.get(), 5);
        drop(v);
        assert_eq!(drops.get(), 6);

        let mut v: Variant![i32, Tracked] = Variant::new(0);
        assert!(v.try_set_at(1, 0u8).is_err());
        v.try_set_at(1, tracked()).unwrap();
        assert!(v.try_set_at(0, tracked()).is_err());
        assert_eq!(drops.get(), 7);
        drop(v);
        assert_eq!(drops.get(), 8);
    }
}
