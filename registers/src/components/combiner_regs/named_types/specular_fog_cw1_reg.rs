//! Register: SET_COMBINER_SPECULAR_FOG_CW1

use super::specular_fog_cw0_reg::SpecularFogCw0Reg;
use crate::components::combiner_regs::{self as regs, Lane};
use crate::methods;
use crate::CombinerSourceE;

/// SET_COMBINER_SPECULAR_FOG_CW1
///
/// Final combiner inputs E, F and G in the top three lanes. The low byte
/// carries the specular-add and clamp flags.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Default)]
pub struct SpecularFogCw1Reg(u32);

impl crate::reg::Register for SpecularFogCw1Reg {
    type Regwidth = u32;

    fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl SpecularFogCw1Reg {
    pub const E_LANE: Lane = Lane::A;
    pub const F_LANE: Lane = Lane::B;
    pub const G_LANE: Lane = Lane::C;

    #[inline(always)]
    pub fn set_input(
        &mut self,
        lane: Lane,
        source: CombinerSourceE,
        alpha: bool,
        invert: bool,
    ) {
        debug_assert!(lane != Lane::D, "CW1 low byte holds flags, not an input");
        let bits = SpecularFogCw0Reg::channel_bits(source, alpha, invert);
        self.0 = regs::with_lane_bits(self.0, lane, bits);
    }

    #[inline(always)]
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn source(&self, lane: Lane) -> CombinerSourceE {
        regs::channel_source(regs::lane_bits(self.0, lane))
    }

    #[inline(always)]
    #[must_use]
    pub const fn alpha(&self, lane: Lane) -> bool {
        regs::channel_alpha(regs::lane_bits(self.0, lane))
    }

    #[inline(always)]
    #[must_use]
    pub const fn invert(&self, lane: Lane) -> bool {
        (regs::lane_bits(self.0, lane) >> 5) & 1 != 0
    }

    #[inline(always)]
    fn set_flag(&mut self, bit: u32, val: bool) {
        if val {
            self.0 |= bit;
        } else {
            self.0 &= !bit;
        }
    }

    #[inline(always)]
    #[must_use]
    pub const fn specular_add_invert_r0(&self) -> bool {
        self.0 & methods::SPECULAR_FOG_CW1_SPECULAR_ADD_INVERT_R0 != 0
    }

    #[inline(always)]
    pub fn set_specular_add_invert_r0(&mut self, val: bool) {
        self.set_flag(methods::SPECULAR_FOG_CW1_SPECULAR_ADD_INVERT_R0, val);
    }

    #[inline(always)]
    #[must_use]
    pub const fn specular_add_invert_v1(&self) -> bool {
        self.0 & methods::SPECULAR_FOG_CW1_SPECULAR_ADD_INVERT_R5 != 0
    }

    #[inline(always)]
    pub fn set_specular_add_invert_v1(&mut self, val: bool) {
        self.set_flag(methods::SPECULAR_FOG_CW1_SPECULAR_ADD_INVERT_R5, val);
    }

    #[inline(always)]
    #[must_use]
    pub const fn specular_clamp(&self) -> bool {
        self.0 & methods::SPECULAR_FOG_CW1_SPECULAR_CLAMP != 0
    }

    #[inline(always)]
    pub fn set_specular_clamp(&mut self, val: bool) {
        self.set_flag(methods::SPECULAR_FOG_CW1_SPECULAR_CLAMP, val);
    }
}

impl core::fmt::Debug for SpecularFogCw1Reg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut s = f.debug_struct("SpecularFogCw1Reg");
        for (name, lane) in [("e", Self::E_LANE), ("f", Self::F_LANE), ("g", Self::G_LANE)] {
            s.field(name, &(self.source(lane), self.alpha(lane), self.invert(lane)));
        }
        s.field("specular_add_invert_r0", &self.specular_add_invert_r0())
            .field("specular_add_invert_v1", &self.specular_add_invert_v1())
            .field("specular_clamp", &self.specular_clamp())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::Register;

    #[test]
    fn flags_live_in_low_byte() {
        let mut reg = SpecularFogCw1Reg::default();
        reg.set_specular_add_invert_r0(true);
        reg.set_specular_add_invert_v1(true);
        reg.set_specular_clamp(true);
        assert_eq!(reg.to_raw(), 0xE0);
        assert_eq!(reg.to_raw() & methods::SPECULAR_FOG_CW1_SPECULAR_ADD_INVERT_R12, 0);
    }

    #[test]
    fn g_input_in_third_lane() {
        let mut reg = SpecularFogCw1Reg::default();
        reg.set_input(SpecularFogCw1Reg::G_LANE, CombinerSourceE::R0, true, false);
        assert_eq!(reg.to_raw(), 0x1C00);
        assert!(reg.alpha(SpecularFogCw1Reg::G_LANE));
    }
}
