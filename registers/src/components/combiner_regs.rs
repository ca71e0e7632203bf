//! Register combiner method word layouts.

/// Named types defined within this component's body
pub mod named_types {
    pub mod combiner_control_reg;
    pub mod combiner_factor_reg;
    pub mod combiner_icw_reg;
    pub mod combiner_ocw_reg;
    pub mod specular_fog_cw0_reg;
    pub mod specular_fog_cw1_reg;
}

pub use self::named_types::combiner_control_reg::CombinerControlReg;
pub use self::named_types::combiner_factor_reg::CombinerFactorReg;
pub use self::named_types::combiner_icw_reg::CombinerIcwReg;
pub use self::named_types::combiner_ocw_reg::CombinerOcwReg;
pub use self::named_types::specular_fog_cw0_reg::SpecularFogCw0Reg;
pub use self::named_types::specular_fog_cw1_reg::SpecularFogCw1Reg;

/// One byte lane of an input control word. General stages and final CW0 name
/// the lanes A-D; final CW1 uses A-C for its E-G inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lane {
    A,
    B,
    C,
    D,
}

impl Lane {
    pub const ALL: [Lane; 4] = [Lane::A, Lane::B, Lane::C, Lane::D];

    /// Bit offset of the lane, most significant byte first.
    #[inline(always)]
    #[must_use]
    pub const fn offset(self) -> usize {
        match self {
            Lane::A => 24,
            Lane::B => 16,
            Lane::C => 8,
            Lane::D => 0,
        }
    }
}

// Layout shared by every input channel byte.
pub(crate) const CHANNEL_MASK: u32 = 0xFF;
pub(crate) const CHANNEL_SOURCE_MASK: u8 = 0xF;
pub(crate) const CHANNEL_ALPHA_OFFSET: u8 = 4;

#[inline(always)]
pub(crate) const fn lane_bits(word: u32, lane: Lane) -> u8 {
    ((word >> lane.offset()) & CHANNEL_MASK) as u8
}

#[inline(always)]
pub(crate) const fn with_lane_bits(word: u32, lane: Lane, bits: u8) -> u32 {
    (word & !(CHANNEL_MASK << lane.offset())) | (((bits as u32) & CHANNEL_MASK) << lane.offset())
}

#[inline(always)]
pub(crate) fn channel_source(bits: u8) -> crate::CombinerSourceE {
    crate::CombinerSourceE::from_bits(bits & CHANNEL_SOURCE_MASK)
        .expect("All possible field values represented by enum")
}

#[inline(always)]
pub(crate) const fn channel_alpha(bits: u8) -> bool {
    (bits >> CHANNEL_ALPHA_OFFSET) & 1 != 0
}
