//! Register: SET_COMBINER_{COLOR,ALPHA}_OCW

use crate::{CombinerDestE, CombinerOutOpE, CombinerSumMuxE};

/// SET_COMBINER_{COLOR,ALPHA}_OCW
///
/// Output control word of one general combiner stage. The two blue-to-alpha
/// routing bits exist only in the color word; the alpha word leaves them 0.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Default)]
pub struct CombinerOcwReg(u32);

impl crate::reg::Register for CombinerOcwReg {
    type Regwidth = u32;

    fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl CombinerOcwReg {
    pub const CD_DST_OFFSET: usize = 0;
    pub const CD_DST_MASK: u32 = 0xF;
    pub const AB_DST_OFFSET: usize = 4;
    pub const AB_DST_MASK: u32 = 0xF;
    pub const SUM_DST_OFFSET: usize = 8;
    pub const SUM_DST_MASK: u32 = 0xF;
    pub const CD_DOT_PRODUCT_OFFSET: usize = 12;
    pub const AB_DOT_PRODUCT_OFFSET: usize = 13;
    pub const MUX_ENABLE_OFFSET: usize = 14;
    pub const OP_OFFSET: usize = 15;
    pub const OP_WIDTH: usize = 3;
    pub const OP_MASK: u32 = 0x7;
    pub const ALPHA_FROM_CD_BLUE_OFFSET: usize = 18;
    pub const ALPHA_FROM_AB_BLUE_OFFSET: usize = 19;

    /// Bits shared by the color and alpha output words.
    pub const COMMON_MASK: u32 = 0x3_FFFF;

    #[inline(always)]
    fn dest(&self, offset: usize, mask: u32) -> CombinerDestE {
        CombinerDestE::from_bits(((self.0 >> offset) & mask) as u8)
            .expect("All possible field values represented by enum")
    }

    #[inline(always)]
    fn set_bits(&mut self, offset: usize, mask: u32, val: u32) {
        self.0 = (self.0 & !(mask << offset)) | ((val & mask) << offset);
    }

    #[inline(always)]
    const fn flag(&self, offset: usize) -> bool {
        (self.0 >> offset) & 1 != 0
    }

    /// CD_DST
    #[inline(always)]
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn cd_dst(&self) -> CombinerDestE {
        self.dest(Self::CD_DST_OFFSET, Self::CD_DST_MASK)
    }

    #[inline(always)]
    pub fn set_cd_dst(&mut self, val: CombinerDestE) {
        self.set_bits(Self::CD_DST_OFFSET, Self::CD_DST_MASK, val.bits() as u32);
    }

    /// AB_DST
    #[inline(always)]
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn ab_dst(&self) -> CombinerDestE {
        self.dest(Self::AB_DST_OFFSET, Self::AB_DST_MASK)
    }

    #[inline(always)]
    pub fn set_ab_dst(&mut self, val: CombinerDestE) {
        self.set_bits(Self::AB_DST_OFFSET, Self::AB_DST_MASK, val.bits() as u32);
    }

    /// SUM_DST
    #[inline(always)]
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn sum_dst(&self) -> CombinerDestE {
        self.dest(Self::SUM_DST_OFFSET, Self::SUM_DST_MASK)
    }

    #[inline(always)]
    pub fn set_sum_dst(&mut self, val: CombinerDestE) {
        self.set_bits(Self::SUM_DST_OFFSET, Self::SUM_DST_MASK, val.bits() as u32);
    }

    #[inline(always)]
    #[must_use]
    pub const fn cd_dot_product(&self) -> bool {
        self.flag(Self::CD_DOT_PRODUCT_OFFSET)
    }

    #[inline(always)]
    pub fn set_cd_dot_product(&mut self, val: bool) {
        self.set_bits(Self::CD_DOT_PRODUCT_OFFSET, 1, val as u32);
    }

    #[inline(always)]
    #[must_use]
    pub const fn ab_dot_product(&self) -> bool {
        self.flag(Self::AB_DOT_PRODUCT_OFFSET)
    }

    #[inline(always)]
    pub fn set_ab_dot_product(&mut self, val: bool) {
        self.set_bits(Self::AB_DOT_PRODUCT_OFFSET, 1, val as u32);
    }

    #[inline(always)]
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn sum_or_mux(&self) -> CombinerSumMuxE {
        CombinerSumMuxE::from_bits(self.flag(Self::MUX_ENABLE_OFFSET) as u8)
            .expect("All possible field values represented by enum")
    }

    #[inline(always)]
    pub fn set_sum_or_mux(&mut self, val: CombinerSumMuxE) {
        self.set_bits(Self::MUX_ENABLE_OFFSET, 1, val.bits() as u32);
    }

    /// OP
    ///
    /// # Errors
    /// Returns an error if the field holds a reserved encoding.
    pub fn op(&self) -> Result<CombinerOutOpE, crate::encode::UnknownVariant<u8>> {
        CombinerOutOpE::from_bits(((self.0 >> Self::OP_OFFSET) & Self::OP_MASK) as u8)
    }

    #[inline(always)]
    pub fn set_op(&mut self, val: CombinerOutOpE) {
        self.set_bits(Self::OP_OFFSET, Self::OP_MASK, val.bits() as u32);
    }

    #[inline(always)]
    #[must_use]
    pub const fn alpha_from_cd_blue(&self) -> bool {
        self.flag(Self::ALPHA_FROM_CD_BLUE_OFFSET)
    }

    #[inline(always)]
    pub fn set_alpha_from_cd_blue(&mut self, val: bool) {
        self.set_bits(Self::ALPHA_FROM_CD_BLUE_OFFSET, 1, val as u32);
    }

    #[inline(always)]
    #[must_use]
    pub const fn alpha_from_ab_blue(&self) -> bool {
        self.flag(Self::ALPHA_FROM_AB_BLUE_OFFSET)
    }

    #[inline(always)]
    pub fn set_alpha_from_ab_blue(&mut self, val: bool) {
        self.set_bits(Self::ALPHA_FROM_AB_BLUE_OFFSET, 1, val as u32);
    }
}

impl core::fmt::Debug for CombinerOcwReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CombinerOcwReg")
            .field("ab_dst", &self.ab_dst())
            .field("cd_dst", &self.cd_dst())
            .field("sum_dst", &self.sum_dst())
            .field("ab_dot_product", &self.ab_dot_product())
            .field("cd_dot_product", &self.cd_dot_product())
            .field("sum_or_mux", &self.sum_or_mux())
            .field("op", &self.op())
            .field("alpha_from_ab_blue", &self.alpha_from_ab_blue())
            .field("alpha_from_cd_blue", &self.alpha_from_cd_blue())
            .finish()
    }
}
