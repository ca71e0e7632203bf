//! Register: SET_COMBINER_SPECULAR_FOG_CW0

use crate::components::combiner_regs::{self as regs, Lane};
use crate::CombinerSourceE;

/// SET_COMBINER_SPECULAR_FOG_CW0
///
/// Final combiner inputs A-D. Same lane layout as a general input control
/// word, but bit 5 of each lane is a single invert flag instead of a
/// three-bit mapping.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Default)]
pub struct SpecularFogCw0Reg(u32);

impl crate::reg::Register for SpecularFogCw0Reg {
    type Regwidth = u32;

    fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl SpecularFogCw0Reg {
    pub const SOURCE_OFFSET: u8 = 0;
    pub const ALPHA_OFFSET: u8 = 4;
    pub const INVERT_OFFSET: u8 = 5;

    /// Pack one final-combiner channel byte.
    #[inline(always)]
    #[must_use]
    pub const fn channel_bits(source: CombinerSourceE, alpha: bool, invert: bool) -> u8 {
        (source.bits() << Self::SOURCE_OFFSET)
            | ((alpha as u8) << Self::ALPHA_OFFSET)
            | ((invert as u8) << Self::INVERT_OFFSET)
    }

    #[inline(always)]
    #[must_use]
    pub const fn channel(&self, lane: Lane) -> u8 {
        regs::lane_bits(self.0, lane)
    }

    #[inline(always)]
    pub fn set_input(&mut self, lane: Lane, source: CombinerSourceE, alpha: bool, invert: bool) {
        self.0 = regs::with_lane_bits(self.0, lane, Self::channel_bits(source, alpha, invert));
    }

    #[inline(always)]
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn source(&self, lane: Lane) -> CombinerSourceE {
        regs::channel_source(self.channel(lane))
    }

    #[inline(always)]
    #[must_use]
    pub const fn alpha(&self, lane: Lane) -> bool {
        regs::channel_alpha(self.channel(lane))
    }

    #[inline(always)]
    #[must_use]
    pub const fn invert(&self, lane: Lane) -> bool {
        (self.channel(lane) >> Self::INVERT_OFFSET) & 1 != 0
    }
}

impl core::fmt::Debug for SpecularFogCw0Reg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut s = f.debug_struct("SpecularFogCw0Reg");
        for (name, lane) in [("a", Lane::A), ("b", Lane::B), ("c", Lane::C), ("d", Lane::D)] {
            s.field(name, &(self.source(lane), self.alpha(lane), self.invert(lane)));
        }
        s.finish()
    }
}
