//! Field Enum: combiner input mapping

/// Remap applied to an input value before it enters a stage.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombinerMappingE {
    /// max(0, x)
    UnsignedIdentity = 0,
    /// 1 - max(0, x)
    UnsignedInvert = 1,
    /// 2 * max(0, x) - 1
    ExpandNormal = 2,
    /// 1 - 2 * max(0, x)
    ExpandNegate = 3,
    /// max(0, x) - 1/2
    HalfbiasNormal = 4,
    /// 1/2 - max(0, x)
    HalfbiasNegate = 5,
    /// x
    SignedIdentity = 6,
    /// -x
    SignedNegate = 7,
}

impl CombinerMappingE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0 => Ok(Self::UnsignedIdentity),
            1 => Ok(Self::UnsignedInvert),
            2 => Ok(Self::ExpandNormal),
            3 => Ok(Self::ExpandNegate),
            4 => Ok(Self::HalfbiasNormal),
            5 => Ok(Self::HalfbiasNegate),
            6 => Ok(Self::SignedIdentity),
            7 => Ok(Self::SignedNegate),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }

    /// The final combiner only has an invert bit, so only the unsigned
    /// identity and invert mappings can be expressed there.
    #[must_use]
    pub const fn is_final_combiner_legal(&self) -> bool {
        matches!(self, Self::UnsignedIdentity | Self::UnsignedInvert)
    }
}
