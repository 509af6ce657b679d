//! Forwarding of common traits from the alternatives to the [`Variant`].
//!
//! Each trait here is implemented for a type list when every alternative in
//! it implements the corresponding standard trait. The methods take the
//! discriminant and dispatch to the live field of the union.
//!
//! [`Variant`]: crate::Variant

use core::{
    any::{self, Any, TypeId},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    mem::ManuallyDrop,
};

use crate::repr::{Cons, Nil, SumList};

/// Runtime type information of the alternatives, available when all of them
/// are `'static`.
pub trait TypeMeta: SumList {
    #[doc(hidden)]
    fn type_id(tag: u8) -> TypeId;

    #[doc(hidden)]
    fn type_name(tag: u8) -> &'static str;

    #[doc(hidden)]
    unsafe fn as_any(this: &Self::Repr, tag: u8) -> &dyn Any;

    #[doc(hidden)]
    unsafe fn as_any_mut(this: &mut Self::Repr, tag: u8) -> &mut dyn Any;

    /// Moves the value out of `slot`, an `Option<T>`, into the alternative at
    /// `tag`. Returns `None` and leaves `slot` untouched if `T` is not the
    /// declared type there.
    #[doc(hidden)]
    fn from_any(tag: u8, slot: &mut dyn Any) -> Option<Self::Repr>;
}

impl TypeMeta for () {
    fn type_id(tag: u8) -> TypeId {
        unreachable!("alternative {tag} is out of range")
    }

    fn type_name(tag: u8) -> &'static str {
        unreachable!("alternative {tag} is out of range")
    }

    unsafe fn as_any(this: &Nil, _: u8) -> &dyn Any {
        match this.0 {}
    }

    unsafe fn as_any_mut(this: &mut Nil, _: u8) -> &mut dyn Any {
        match this.0 {}
    }

    fn from_any(_: u8, _: &mut dyn Any) -> Option<Nil> {
        None
    }
}

impl<Head: 'static, Tail: TypeMeta> TypeMeta for (Head, Tail) {
    fn type_id(tag: u8) -> TypeId {
        match tag.checked_sub(1) {
            None => TypeId::of::<Head>(),
            Some(tag) => Tail::type_id(tag),
        }
    }

    fn type_name(tag: u8) -> &'static str {
        match tag.checked_sub(1) {
            None => any::type_name::<Head>(),
            Some(tag) => Tail::type_name(tag),
        }
    }

    unsafe fn as_any(this: &Self::Repr, tag: u8) -> &dyn Any {
        match tag.checked_sub(1) {
            None => unsafe { &*this.data },
            Some(tag) => unsafe { Tail::as_any(&this.next, tag) },
        }
    }

    unsafe fn as_any_mut(this: &mut Self::Repr, tag: u8) -> &mut dyn Any {
        match tag.checked_sub(1) {
            None => unsafe { &mut *this.data },
            Some(tag) => unsafe { Tail::as_any_mut(&mut this.next, tag) },
        }
    }

    fn from_any(tag: u8, slot: &mut dyn Any) -> Option<Self::Repr> {
        match tag.checked_sub(1) {
            None => {
                let data = slot.downcast_mut::<Option<Head>>()?.take()?;
                Some(Cons { data: ManuallyDrop::new(data) })
            }
            Some(tag) => {
                let next = Tail::from_any(tag, slot)?;
                Some(Cons { next: ManuallyDrop::new(next) })
            }
        }
    }
}

pub trait SumDebug: SumList {
    #[doc(hidden)]
    unsafe fn debug(this: &Self::Repr, tag: u8) -> &dyn fmt::Debug;
}

impl SumDebug for () {
    unsafe fn debug(this: &Nil, _: u8) -> &dyn fmt::Debug {
        match this.0 {}
    }
}

impl<Head: fmt::Debug, Tail: SumDebug> SumDebug for (Head, Tail) {
    unsafe fn debug(this: &Self::Repr, tag: u8) -> &dyn fmt::Debug {
        match tag.checked_sub(1) {
            None => unsafe { &*this.data },
            Some(tag) => unsafe { Tail::debug(&this.next, tag) },
        }
    }
}

pub trait SumDisplay: SumList {
    #[doc(hidden)]
    unsafe fn display(this: &Self::Repr, tag: u8) -> &dyn fmt::Display;
}

impl SumDisplay for () {
    unsafe fn display(this: &Nil, _: u8) -> &dyn fmt::Display {
        match this.0 {}
    }
}

impl<Head: fmt::Display, Tail: SumDisplay> SumDisplay for (Head, Tail) {
    unsafe fn display(this: &Self::Repr, tag: u8) -> &dyn fmt::Display {
        match tag.checked_sub(1) {
            None => unsafe { &*this.data },
            Some(tag) => unsafe { Tail::display(&this.next, tag) },
        }
    }
}

pub trait SumClone: SumList {
    #[doc(hidden)]
    unsafe fn clone(this: &Self::Repr, tag: u8) -> Self::Repr;
}

impl SumClone for () {
    unsafe fn clone(this: &Nil, _: u8) -> Nil {
        match this.0 {}
    }
}

impl<Head: Clone, Tail: SumClone> SumClone for (Head, Tail) {
    unsafe fn clone(this: &Self::Repr, tag: u8) -> Self::Repr {
        match tag.checked_sub(1) {
            None => Cons {
                data: unsafe { this.data.clone() },
            },
            Some(tag) => Cons {
                next: ManuallyDrop::new(unsafe { Tail::clone(&this.next, tag) }),
            },
        }
    }
}

pub trait SumPartialEq: SumList {
    #[doc(hidden)]
    unsafe fn eq(this: &Self::Repr, other: &Self::Repr, tag: u8) -> bool;
}

impl SumPartialEq for () {
    unsafe fn eq(this: &Nil, _: &Nil, _: u8) -> bool {
        match this.0 {}
    }
}

impl<Head: PartialEq, Tail: SumPartialEq> SumPartialEq for (Head, Tail) {
    unsafe fn eq(this: &Self::Repr, other: &Self::Repr, tag: u8) -> bool {
        match tag.checked_sub(1) {
            None => unsafe { *this.data == *other.data },
            Some(tag) => unsafe { Tail::eq(&this.next, &other.next, tag) },
        }
    }
}

pub trait SumPartialOrd: SumPartialEq {
    #[doc(hidden)]
    unsafe fn partial_cmp(this: &Self::Repr, other: &Self::Repr, tag: u8) -> Option<Ordering>;
}

impl SumPartialOrd for () {
    unsafe fn partial_cmp(this: &Nil, _: &Nil, _: u8) -> Option<Ordering> {
        match this.0 {}
    }
}

impl<Head: PartialOrd, Tail: SumPartialOrd> SumPartialOrd for (Head, Tail) {
    unsafe fn partial_cmp(this: &Self::Repr, other: &Self::Repr, tag: u8) -> Option<Ordering> {
        match tag.checked_sub(1) {
            None => unsafe { (*this.data).partial_cmp(&*other.data) },
            Some(tag) => unsafe { Tail::partial_cmp(&this.next, &other.next, tag) },
        }
    }
}

pub trait SumOrd: SumPartialOrd {
    #[doc(hidden)]
    unsafe fn cmp(this: &Self::Repr, other: &Self::Repr, tag: u8) -> Ordering;
}

impl SumOrd for () {
    unsafe fn cmp(this: &Nil, _: &Nil, _: u8) -> Ordering {
        match this.0 {}
    }
}

impl<Head: Ord, Tail: SumOrd> SumOrd for (Head, Tail) {
    unsafe fn cmp(this: &Self::Repr, other: &Self::Repr, tag: u8) -> Ordering {
        match tag.checked_sub(1) {
            None => unsafe { (*this.data).cmp(&*other.data) },
            Some(tag) => unsafe { Tail::cmp(&this.next, &other.next, tag) },
        }
    }
}

pub trait SumHash: SumList {
    #[doc(hidden)]
    unsafe fn hash<H: Hasher>(this: &Self::Repr, tag: u8, state: &mut H);
}

impl SumHash for () {
    unsafe fn hash<H: Hasher>(this: &Nil, _: u8, _: &mut H) {
        match this.0 {}
    }
}

impl<Head: Hash, Tail: SumHash> SumHash for (Head, Tail) {
    unsafe fn hash<H: Hasher>(this: &Self::Repr, tag: u8, state: &mut H) {
        match tag.checked_sub(1) {
            None => unsafe { (*this.data).hash(state) },
            Some(tag) => unsafe { Tail::hash(&this.next, tag, state) },
        }
    }
}
