//! Register: SET_COMBINER_CONTROL

use crate::methods::{
    COMBINER_CONTROL_FACTOR0, COMBINER_CONTROL_FACTOR0_EACH_STAGE, COMBINER_CONTROL_FACTOR1,
    COMBINER_CONTROL_FACTOR1_EACH_STAGE, COMBINER_CONTROL_ITERATION_COUNT,
    COMBINER_CONTROL_MUX_SELECT, COMBINER_CONTROL_MUX_SELECT_MSB,
};
use crate::reg::{field, field_value};

/// SET_COMBINER_CONTROL
///
/// Number of active general stages, whether C0/C1 are per stage or shared,
/// and which bit of R0.alpha drives MUX selection.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Default)]
pub struct CombinerControlReg(u32);

impl crate::reg::Register for CombinerControlReg {
    type Regwidth = u32;

    fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl CombinerControlReg {
    #[inline(always)]
    fn set_field(&mut self, mask: u32, val: u32) {
        self.0 = (self.0 & !mask) | field(mask, val);
    }

    #[inline(always)]
    #[must_use]
    pub const fn iteration_count(&self) -> u8 {
        field_value(COMBINER_CONTROL_ITERATION_COUNT, self.0) as u8
    }

    #[inline(always)]
    pub fn set_iteration_count(&mut self, val: u8) {
        self.set_field(COMBINER_CONTROL_ITERATION_COUNT, val as u32);
    }

    #[inline(always)]
    #[must_use]
    pub const fn mux_msb(&self) -> bool {
        field_value(COMBINER_CONTROL_MUX_SELECT, self.0) == COMBINER_CONTROL_MUX_SELECT_MSB
    }

    #[inline(always)]
    pub fn set_mux_msb(&mut self, val: bool) {
        self.set_field(COMBINER_CONTROL_MUX_SELECT, val as u32);
    }

    #[inline(always)]
    #[must_use]
    pub const fn factor0_each_stage(&self) -> bool {
        field_value(COMBINER_CONTROL_FACTOR0, self.0) == COMBINER_CONTROL_FACTOR0_EACH_STAGE
    }

    #[inline(always)]
    pub fn set_factor0_each_stage(&mut self, val: bool) {
        self.set_field(COMBINER_CONTROL_FACTOR0, val as u32);
    }

    #[inline(always)]
    #[must_use]
    pub const fn factor1_each_stage(&self) -> bool {
        field_value(COMBINER_CONTROL_FACTOR1, self.0) == COMBINER_CONTROL_FACTOR1_EACH_STAGE
    }

    #[inline(always)]
    pub fn set_factor1_each_stage(&mut self, val: bool) {
        self.set_field(COMBINER_CONTROL_FACTOR1, val as u32);
    }
}

impl core::fmt::Debug for CombinerControlReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CombinerControlReg")
            .field("iteration_count", &self.iteration_count())
            .field("mux_msb", &self.mux_msb())
            .field("factor0_each_stage", &self.factor0_each_stage())
            .field("factor1_each_stage", &self.factor1_each_stage())
            .finish()
    }
}
