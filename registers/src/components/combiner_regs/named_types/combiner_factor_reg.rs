//! Register: SET_COMBINER_FACTOR{0,1} / SET_SPECULAR_FOG_FACTOR

/// SET_COMBINER_FACTOR{0,1} / SET_SPECULAR_FOG_FACTOR
///
/// Constant color in BGRA8888 UNORM8: alpha in the most significant byte,
/// blue in the least.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Default)]
pub struct CombinerFactorReg(u32);

impl crate::reg::Register for CombinerFactorReg {
    type Regwidth = u32;

    fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl CombinerFactorReg {
    pub const B_OFFSET: usize = 0;
    pub const G_OFFSET: usize = 8;
    pub const R_OFFSET: usize = 16;
    pub const A_OFFSET: usize = 24;
    pub const CHANNEL_MASK: u32 = 0xFF;

    /// Pack four bytes.
    #[inline(always)]
    #[must_use]
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(
            ((a as u32) << Self::A_OFFSET)
                | ((r as u32) << Self::R_OFFSET)
                | ((g as u32) << Self::G_OFFSET)
                | ((b as u32) << Self::B_OFFSET),
        )
    }

    #[inline(always)]
    const fn channel(&self, offset: usize) -> u8 {
        ((self.0 >> offset) & Self::CHANNEL_MASK) as u8
    }

    #[inline(always)]
    #[must_use]
    pub const fn r(&self) -> u8 {
        self.channel(Self::R_OFFSET)
    }

    #[inline(always)]
    #[must_use]
    pub const fn g(&self) -> u8 {
        self.channel(Self::G_OFFSET)
    }

    #[inline(always)]
    #[must_use]
    pub const fn b(&self) -> u8 {
        self.channel(Self::B_OFFSET)
    }

    #[inline(always)]
    #[must_use]
    pub const fn a(&self) -> u8 {
        self.channel(Self::A_OFFSET)
    }
}

impl core::fmt::Debug for CombinerFactorReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CombinerFactorReg")
            .field("r", &self.r())
            .field("g", &self.g())
            .field("b", &self.b())
            .field("a", &self.a())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::Register;

    #[test]
    fn bgra_byte_order() {
        let reg = CombinerFactorReg::from_rgba(0x11, 0x22, 0x33, 0x44);
        assert_eq!(reg.to_raw(), 0x4411_2233);
        assert_eq!((reg.r(), reg.g(), reg.b(), reg.a()), (0x11, 0x22, 0x33, 0x44));
    }
}
