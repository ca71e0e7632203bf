//! Field Enum: combiner output operation

/// Scale/bias applied to a stage's outputs. Encoding 5 is reserved and
/// encoding 7 is undefined; neither is representable.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombinerOutOpE {
    /// y = x
    Identity = 0,
    /// y = x - 0.5
    Bias = 1,
    /// y = x * 2
    ShiftLeft1 = 2,
    /// y = (x - 0.5) * 2
    ShiftLeft1Bias = 3,
    /// y = x * 4
    ShiftLeft2 = 4,
    /// y = x / 2
    ShiftRight1 = 6,
}

impl CombinerOutOpE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0 => Ok(Self::Identity),
            1 => Ok(Self::Bias),
            2 => Ok(Self::ShiftLeft1),
            3 => Ok(Self::ShiftLeft1Bias),
            4 => Ok(Self::ShiftLeft2),
            6 => Ok(Self::ShiftRight1),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }
}
