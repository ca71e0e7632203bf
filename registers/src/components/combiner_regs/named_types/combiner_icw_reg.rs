//! Register: SET_COMBINER_{COLOR,ALPHA}_ICW

use crate::components::combiner_regs::{self as regs, Lane};
use crate::{CombinerMappingE, CombinerSourceE};

/// SET_COMBINER_{COLOR,ALPHA}_ICW
///
/// Input control word of one general combiner stage. Four byte lanes, A in
/// the most significant byte, each holding `source | alpha << 4 | mapping << 5`.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Default)]
pub struct CombinerIcwReg(u32);

impl crate::reg::Register for CombinerIcwReg {
    type Regwidth = u32;

    fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl CombinerIcwReg {
    pub const SOURCE_OFFSET: u8 = 0;
    pub const SOURCE_WIDTH: u8 = 4;
    pub const ALPHA_OFFSET: u8 = 4;
    pub const ALPHA_WIDTH: u8 = 1;
    pub const MAPPING_OFFSET: u8 = 5;
    pub const MAPPING_WIDTH: u8 = 3;
    pub const MAPPING_MASK: u8 = 0x7;

    /// Pack one channel byte.
    #[inline(always)]
    #[must_use]
    pub const fn channel_bits(
        source: CombinerSourceE,
        alpha: bool,
        mapping: CombinerMappingE,
    ) -> u8 {
        (source.bits() << Self::SOURCE_OFFSET)
            | ((alpha as u8) << Self::ALPHA_OFFSET)
            | ((mapping.bits() & Self::MAPPING_MASK) << Self::MAPPING_OFFSET)
    }

    /// Raw channel byte of `lane`.
    #[inline(always)]
    #[must_use]
    pub const fn channel(&self, lane: Lane) -> u8 {
        regs::lane_bits(self.0, lane)
    }

    #[inline(always)]
    pub fn set_channel(&mut self, lane: Lane, bits: u8) {
        self.0 = regs::with_lane_bits(self.0, lane, bits);
    }

    #[inline(always)]
    pub fn set_input(
        &mut self,
        lane: Lane,
        source: CombinerSourceE,
        alpha: bool,
        mapping: CombinerMappingE,
    ) {
        self.set_channel(lane, Self::channel_bits(source, alpha, mapping));
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
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn mapping(&self, lane: Lane) -> CombinerMappingE {
        let bits = (self.channel(lane) >> Self::MAPPING_OFFSET) & Self::MAPPING_MASK;
        CombinerMappingE::from_bits(bits)
            .expect("All possible field values represented by enum")
    }
}

impl core::fmt::Debug for CombinerIcwReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut s = f.debug_struct("CombinerIcwReg");
        for (name, lane) in [("a", Lane::A), ("b", Lane::B), ("c", Lane::C), ("d", Lane::D)] {
            s.field(name, &(self.source(lane), self.alpha(lane), self.mapping(lane)));
        }
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::Register;

    #[test]
    fn test_default() {
        let reg = CombinerIcwReg::default();
        for lane in Lane::ALL {
            assert_eq!(reg.source(lane), CombinerSourceE::Zero);
            assert!(!reg.alpha(lane));
            assert_eq!(reg.mapping(lane), CombinerMappingE::UnsignedIdentity);
        }
    }

    #[test]
    fn lanes_are_most_significant_first() {
        let mut reg = CombinerIcwReg::default();
        reg.set_input(Lane::A, CombinerSourceE::Diffuse, false, CombinerMappingE::UnsignedIdentity);
        reg.set_input(Lane::D, CombinerSourceE::R1, true, CombinerMappingE::SignedNegate);
        assert_eq!(reg.to_raw(), 0x0400_00FD);
        assert_eq!(reg.source(Lane::D), CombinerSourceE::R1);
        assert!(reg.alpha(Lane::D));
        assert_eq!(reg.mapping(Lane::D), CombinerMappingE::SignedNegate);
    }
}
