//! Exhaustive dispatch over the alternatives of a [`Variant`].
//!
//! A handler list is a tuple list (see [`t!`]) with one `FnOnce` per
//! alternative, in declaration order. Handing a list of the wrong length or
//! with a handler of the wrong argument type to [`Variant::fold`] is a
//! compile error, so adding an alternative forces every dispatch site to be
//! revisited.
//!
//! [`Variant`]: crate::Variant
//! [`Variant::fold`]: crate::Variant::fold
//! [`t!`]: crate::t

use core::mem::ManuallyDrop;

use crate::repr::{Nil, SumList};

/// A handler list covering every alternative of `S`, each returning `R`.
pub trait Fold<S: SumList, R> {
    #[doc(hidden)]
    unsafe fn fold(self, this: S::Repr, tag: u8) -> R;
}

impl<R> Fold<(), R> for () {
    unsafe fn fold(self, this: Nil, _: u8) -> R {
        match this.0 {}
    }
}

impl<Head, Tail, F, Rest, R> Fold<(Head, Tail), R> for (F, Rest)
where
    Tail: SumList,
    F: FnOnce(Head) -> R,
    Rest: Fold<Tail, R>,
{
    unsafe fn fold(self, this: <(Head, Tail) as SumList>::Repr, tag: u8) -> R {
        let (handler, rest) = self;
        match tag.checked_sub(1) {
            None => handler(unsafe { ManuallyDrop::into_inner(this.data) }),
            Some(tag) => unsafe {
                Fold::<Tail, R>::fold(rest, ManuallyDrop::into_inner(this.next), tag)
            },
        }
    }
}
