//! Register word trait.

use num_traits::{PrimInt, Unsigned};

/// A typed view of a raw register word.
pub trait Register: Copy {
    type Regwidth: PrimInt + Unsigned;

    /// Reinterpret a raw word. Fields holding undefined encodings decode
    /// as errors rather than failing here.
    fn from_raw(val: Self::Regwidth) -> Self;

    fn to_raw(self) -> Self::Regwidth;
}

/// Place `value` at the lowest set bit of `mask`, discarding bits outside it.
#[inline(always)]
#[must_use]
pub const fn field(mask: u32, value: u32) -> u32 {
    (value << mask.trailing_zeros()) & mask
}

/// Extract the value stored under `mask`.
#[inline(always)]
#[must_use]
pub const fn field_value(mask: u32, word: u32) -> u32 {
    (word & mask) >> mask.trailing_zeros()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_uses_lowest_mask_bit() {
        assert_eq!(field(0x0000_F000, 1), 0x1000);
        assert_eq!(field(0xFFFF_0000, 1), 0x1_0000);
        assert_eq!(field(0x0000_0F00, 1), 0x100);
        assert_eq!(field(0x0000_00FF, 7), 7);
    }

    #[test]
    fn field_truncates_to_mask() {
        assert_eq!(field(0x0000_00FF, 0x1FF), 0xFF);
        assert_eq!(field_value(0x0000_0F00, 0xABCD), 0xB);
    }
}
