//! General combiner stage outputs.

use crate::{CombinerDest, CombinerOutOp, CombinerSumMux};

/// Routing and arithmetic options shared by a stage's color and alpha
/// output words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageOutput {
    pub ab_dst: CombinerDest,
    pub cd_dst: CombinerDest,
    pub sum_dst: CombinerDest,
    /// A·B is a 3-component dot product instead of a multiply.
    pub ab_dot_product: bool,
    /// C·D is a 3-component dot product instead of a multiply.
    pub cd_dot_product: bool,
    pub sum_or_mux: CombinerSumMux,
    pub op: CombinerOutOp,
}

impl StageOutput {
    pub const fn new(ab_dst: CombinerDest, cd_dst: CombinerDest, sum_dst: CombinerDest) -> Self {
        Self {
            ab_dst,
            cd_dst,
            sum_dst,
            ab_dot_product: false,
            cd_dot_product: false,
            sum_or_mux: CombinerSumMux::Sum,
            op: CombinerOutOp::Identity,
        }
    }

    /// Write only AB + CD, to `dst`.
    pub const fn sum_to(dst: CombinerDest) -> Self {
        Self::new(CombinerDest::Discard, CombinerDest::Discard, dst)
    }
}

impl Default for StageOutput {
    fn default() -> Self {
        Self::new(CombinerDest::Discard, CombinerDest::Discard, CombinerDest::Discard)
    }
}

/// Color output of a stage: the shared output options plus the two
/// color-only bits that route the blue channel of AB or CD into the stage's
/// alpha result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColorOutput {
    pub output: StageOutput,
    pub alpha_from_ab_blue: bool,
    pub alpha_from_cd_blue: bool,
}

impl From<StageOutput> for ColorOutput {
    fn from(output: StageOutput) -> Self {
        Self {
            output,
            ..Self::default()
        }
    }
}
