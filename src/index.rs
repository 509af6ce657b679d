//! Type-level positions of alternatives in a [`Variant`].
//!
//! Positions are Peano naturals: [`UTerm`] is the first alternative and
//! [`UInt<U>`] the one after `U`. They are usually inferred from the value
//! type, and only need to be spelled out when the same type occurs more than
//! once in the alternative list.
//!
//! [`Variant`]: crate::Variant

use core::marker::PhantomData;

/// Position zero.
pub struct UTerm;

/// The position right after `U`.
pub struct UInt<U>(PhantomData<U>);

/// A type-level position with its runtime discriminant.
pub trait Index {
    /// The discriminant stored in a [`Variant`](crate::Variant) whose live
    /// alternative sits at this position.
    const TAG: u8;
}

impl Index for UTerm {
    const TAG: u8 = 0;
}

impl<U: Index> Index for UInt<U> {
    const TAG: u8 = 1 + U::TAG;
}

pub type U0 = UTerm;
pub type U1 = UInt<U0>;
pub type U2 = UInt<U1>;
pub type U3 = UInt<U2>;
pub type U4 = UInt<U3>;
pub type U5 = UInt<U4>;
pub type U6 = UInt<U5>;
pub type U7 = UInt<U6>;
pub type U8 = UInt<U7>;
pub type U9 = UInt<U8>;

pub type U10 = UInt<U9>;
pub type U11 = UInt<U10>;
pub type U12 = UInt<U11>;
pub type U13 = UInt<U12>;
pub type U14 = UInt<U13>;
pub type U15 = UInt<U14>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags() {
        assert_eq!(U0::TAG, 0);
        assert_eq!(U1::TAG, 1);
        assert_eq!(U7::TAG, 7);
        assert_eq!(U15::TAG, 15);
    }
}
