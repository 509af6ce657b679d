//! The module dealing with the underlying representation of the [`Variant`]
//! type.
//!
//! # Implementation details
//!
//! A variant is a hand-written tagged union. The alternative list
//! `Variant![T1, T2]` is the type-level list `(T1, (T2, ()))`, and its memory
//! layout resembles:
//!
//! ```rust,no_run
//! # use core::convert::Infallible;
//! # use core::mem::ManuallyDrop;
//!
//! struct Nil(Infallible);
//! union Cons<T, Next> {
//!     data: ManuallyDrop<T>,
//!     next: ManuallyDrop<Next>,
//! }
//!
//! // For example only. Not actually defined.
//! struct RawVariant2<T1, T2> {
//!     tag: u8,
//!     data: Cons<T1, Cons<T2, Nil>>,
//! }
//! ```
//!
//! Every operation walks the list recursively: a tag of `0` selects `data`,
//! any other tag is decremented and forwarded to `next`.
//!
//! [`Variant`]: crate::Variant

use core::{convert::Infallible, mem::ManuallyDrop};

use crate::index::{Index, UInt, UTerm};

/// The terminator type of the underlying union of the [`Variant`] type.
///
/// [`Variant`]: crate::Variant
pub struct Nil(pub(crate) Infallible);

/// The accumulator type of the underlying union of the [`Variant`] type.
///
/// [`Variant`]: crate::Variant
pub union Cons<T, U> {
    pub(crate) data: ManuallyDrop<T>,
    pub(crate) next: ManuallyDrop<U>,
}

/// The trait that type lists implement to support its corresponding tagged
/// union representation for the [`Variant`] type.
///
/// [`Variant`]: crate::Variant
pub trait SumList: Count {
    /// The underlying representation of the `Variant` type.
    type Repr;

    #[doc(hidden)]
    unsafe fn drop(this: &mut ManuallyDrop<Self::Repr>, tag: u8);
}

impl SumList for () {
    type Repr = Nil;

    unsafe fn drop(_: &mut ManuallyDrop<Nil>, _: u8) {}
}

impl<Head, Tail> SumList for (Head, Tail)
where
    Tail: SumList,
{
    type Repr = Cons<Head, Tail::Repr>;

    unsafe fn drop(this: &mut ManuallyDrop<Self::Repr>, tag: u8) {
        match tag.checked_sub(1) {
            None => unsafe { ManuallyDrop::drop(&mut this.data) },
            Some(tag) => unsafe { Tail::drop(&mut this.next, tag) },
        }
    }
}

/// The trait that type lists implement to support manipulating the
/// alternative `T` at position `U` in the [`Variant`] type.
///
/// [`Variant`]: crate::Variant
pub trait Split<T, U: Index>: SumList {
    /// The remainder type list from removing the alternative `T` at `U`.
    type Remainder: SumList;

    /// The type list calculated by replacing the alternative `T` at `U` with
    /// `T2`.
    type Substitute<T2>: Split<T2, U>;

    #[doc(hidden)]
    fn from_data(data: T) -> Self::Repr;

    #[doc(hidden)]
    unsafe fn into_data_unchecked(this: Self::Repr) -> T;

    #[doc(hidden)]
    unsafe fn get_unchecked(this: &Self::Repr) -> &T;

    #[doc(hidden)]
    unsafe fn get_mut_unchecked(this: &mut Self::Repr) -> &mut T;

    #[doc(hidden)]
    unsafe fn split(
        this: Self::Repr,
        tag: u8,
    ) -> Result<T, (<Self::Remainder as SumList>::Repr, u8)>;

    #[doc(hidden)]
    unsafe fn substitute<T2, F>(
        this: Self::Repr,
        tag: u8,
        f: F,
    ) -> <Self::Substitute<T2> as SumList>::Repr
    where
        F: FnOnce(T) -> T2;
}

impl<Head, Tail> Split<Head, UTerm> for (Head, Tail)
where
    Tail: SumList,
{
    type Remainder = Tail;
    type Substitute<T2> = (T2, Tail);

    fn from_data(data: Head) -> Self::Repr {
        Cons { data: ManuallyDrop::new(data) }
    }

    unsafe fn into_data_unchecked(this: Self::Repr) -> Head {
        unsafe { ManuallyDrop::into_inner(this.data) }
    }

    unsafe fn get_unchecked(this: &Self::Repr) -> &Head {
        unsafe { &this.data }
    }

    unsafe fn get_mut_unchecked(this: &mut Self::Repr) -> &mut Head {
        unsafe { &mut this.data }
    }

    unsafe fn split(
        this: Self::Repr,
        tag: u8,
    ) -> Result<Head, (<Self::Remainder as SumList>::Repr, u8)> {
        match tag.checked_sub(1) {
            None => Ok(unsafe { ManuallyDrop::into_inner(this.data) }),
            Some(tag) => Err((unsafe { ManuallyDrop::into_inner(this.next) }, tag)),
        }
    }

    unsafe fn substitute<T2, F>(
        this: Self::Repr,
        tag: u8,
        f: F,
    ) -> <Self::Substitute<T2> as SumList>::Repr
    where
        F: FnOnce(Head) -> T2,
    {
        match tag {
            0 => {
                let data = f(unsafe { ManuallyDrop::into_inner(this.data) });
                Cons { data: ManuallyDrop::new(data) }
            }
            _ => Cons { next: unsafe { this.next } },
        }
    }
}

impl<Head, Tail, T, U: Index> Split<T, UInt<U>> for (Head, Tail)
where
    Tail: Split<T, U>,
{
    type Remainder = (Head, <Tail as Split<T, U>>::Remainder);
    type Substitute<T2> = (Head, Tail::Substitute<T2>);

    fn from_data(data: T) -> Self::Repr {
        Cons {
            next: ManuallyDrop::new(Tail::from_data(data)),
        }
    }

    unsafe fn into_data_unchecked(this: Self::Repr) -> T {
        unsafe { Tail::into_data_unchecked(ManuallyDrop::into_inner(this.next)) }
    }

    unsafe fn get_unchecked(this: &Self::Repr) -> &T {
        unsafe { Tail::get_unchecked(&this.next) }
    }

    unsafe fn get_mut_unchecked(this: &mut Self::Repr) -> &mut T {
        unsafe { Tail::get_mut_unchecked(&mut this.next) }
    }

    unsafe fn split(
        this: Self::Repr,
        tag: u8,
    ) -> Result<T, (<Self::Remainder as SumList>::Repr, u8)> {
        let Some(tag) = tag.checked_sub(1) else {
            return Err((Cons { data: unsafe { this.data } }, 0));
        };
        match unsafe { Tail::split(ManuallyDrop::into_inner(this.next), tag) } {
            Ok(data) => Ok(data),
            Err((next, tag)) => Err((Cons { next: ManuallyDrop::new(next) }, tag + 1)),
        }
    }

    unsafe fn substitute<T2, F>(
        this: Self::Repr,
        tag: u8,
        f: F,
    ) -> <Self::Substitute<T2> as SumList>::Repr
    where
        F: FnOnce(T) -> T2,
    {
        match tag.checked_sub(1) {
            None => Cons { data: unsafe { this.data } },
            Some(tag) => {
                let next = unsafe { Tail::substitute(ManuallyDrop::into_inner(this.next), tag, f) };
                Cons { next: ManuallyDrop::new(next) }
            }
        }
    }
}

/// Implemented only by the empty list: a variant whose alternatives have all
/// been peeled off by `match_variant!` and can no longer hold a value.
#[diagnostic::on_unimplemented(
    message = "`match_variant!` has no arm for the alternatives in `{Self}`",
    label = "add an arm for each remaining alternative, or a trailing `_` arm"
)]
pub trait Exhausted: SumList {
    #[doc(hidden)]
    fn absurd(this: Self::Repr) -> !;
}

impl Exhausted for () {
    fn absurd(this: Nil) -> ! {
        match this.0 {}
    }
}

/// Counts the number of elements in a type list using index tags.
pub trait Count {
    /// The number of elements in the type list, measured by index tags.
    type Count: Index;
}

impl Count for () {
    type Count = UTerm;
}

impl<Head, Tail> Count for (Head, Tail)
where
    Tail: Count,
{
    type Count = UInt<Tail::Count>;
}

/// The trait that type lists implement to be borrowed alternative-wise, so
/// that `Variant![A, B]` can be viewed as `Variant![&A, &B]` or
/// `Variant![&mut A, &mut B]`.
pub trait SumRef: SumList {
    /// The list of shared references to each alternative.
    type Ref<'a>: SumList
    where
        Self: 'a;

    /// The list of mutable references to each alternative.
    type Mut<'a>: SumList
    where
        Self: 'a;

    #[doc(hidden)]
    unsafe fn as_ref<'a>(this: &'a Self::Repr, tag: u8) -> <Self::Ref<'a> as SumList>::Repr
    where
        Self: 'a;

    #[doc(hidden)]
    unsafe fn as_mut<'a>(this: &'a mut Self::Repr, tag: u8) -> <Self::Mut<'a> as SumList>::Repr
    where
        Self: 'a;
}

impl SumRef for () {
    type Ref<'a> = ();
    type Mut<'a> = ();

    unsafe fn as_ref<'a>(this: &'a Nil, _: u8) -> Nil
    where
        Self: 'a,
    {
        match this.0 {}
    }

    unsafe fn as_mut<'a>(this: &'a mut Nil, _: u8) -> Nil
    where
        Self: 'a,
    {
        match this.0 {}
    }
}

impl<Head, Tail> SumRef for (Head, Tail)
where
    Tail: SumRef,
{
    type Ref<'a>
        = (&'a Head, Tail::Ref<'a>)
    where
        Self: 'a;
    type Mut<'a>
        = (&'a mut Head, Tail::Mut<'a>)
    where
        Self: 'a;

    unsafe fn as_ref<'a>(this: &'a Self::Repr, tag: u8) -> <Self::Ref<'a> as SumList>::Repr
    where
        Self: 'a,
    {
        match tag.checked_sub(1) {
            None => Cons {
                data: ManuallyDrop::new(unsafe { &*this.data }),
            },
            Some(tag) => Cons {
                next: ManuallyDrop::new(unsafe { Tail::as_ref(&this.next, tag) }),
            },
        }
    }

    unsafe fn as_mut<'a>(this: &'a mut Self::Repr, tag: u8) -> <Self::Mut<'a> as SumList>::Repr
    where
        Self: 'a,
    {
        match tag.checked_sub(1) {
            None => Cons {
                data: ManuallyDrop::new(unsafe { &mut *this.data }),
            },
            Some(tag) => Cons {
                next: ManuallyDrop::new(unsafe { Tail::as_mut(&mut this.next, tag) }),
            },
        }
    }
}
