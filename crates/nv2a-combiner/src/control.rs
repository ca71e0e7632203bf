//! Pipeline-wide combiner control.

/// SET_COMBINER_CONTROL request. No copy of the hardware state is kept; every
/// write replaces the whole register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CombinerControl {
    /// Active general stages, 1..=7.
    pub stage_count: usize,
    /// Every stage reads stage 0's C0.
    pub share_c0: bool,
    /// Every stage reads stage 0's C1.
    pub share_c1: bool,
    /// MUX selects on the MSB of R0.alpha instead of the LSB.
    pub mux_msb: bool,
}

impl CombinerControl {
    pub const fn new(stage_count: usize) -> Self {
        Self {
            stage_count,
            share_c0: false,
            share_c1: false,
            mux_msb: false,
        }
    }

    /// Both constants shared across stages.
    pub const fn shared_factors(self) -> Self {
        Self {
            share_c0: true,
            share_c1: true,
            ..self
        }
    }
}

impl Default for CombinerControl {
    fn default() -> Self {
        Self::new(1)
    }
}
