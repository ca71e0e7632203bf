//! Field Enum: combiner output destination

/// Register a general combiner stage writes its AB, CD or sum result to.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombinerDestE {
    /// Result is discarded
    Discard = 0,
    /// Combiner constant C0
    C0 = 1,
    /// Combiner constant C1
    C1 = 2,
    /// Fog coordinate
    Fog = 3,
    /// Vertex diffuse color
    Diffuse = 4,
    /// Vertex specular color
    Specular = 5,
    /// Reserved
    Rsvd6 = 6,
    /// Reserved
    Rsvd7 = 7,
    /// Texture stage 0 register
    Tex0 = 8,
    /// Texture stage 1 register
    Tex1 = 9,
    /// Texture stage 2 register
    Tex2 = 10,
    /// Texture stage 3 register
    Tex3 = 11,
    /// Temporary register R0
    R0 = 12,
    /// Temporary register R1
    R1 = 13,
    /// Specular + R0 sum
    SpecR0Sum = 14,
    /// E * F product
    EfProd = 15,
}

impl CombinerDestE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0 => Ok(Self::Discard),
            1 => Ok(Self::C0),
            2 => Ok(Self::C1),
            3 => Ok(Self::Fog),
            4 => Ok(Self::Diffuse),
            5 => Ok(Self::Specular),
            6 => Ok(Self::Rsvd6),
            7 => Ok(Self::Rsvd7),
            8 => Ok(Self::Tex0),
            9 => Ok(Self::Tex1),
            10 => Ok(Self::Tex2),
            11 => Ok(Self::Tex3),
            12 => Ok(Self::R0),
            13 => Ok(Self::R1),
            14 => Ok(Self::SpecR0Sum),
            15 => Ok(Self::EfProd),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }
}
