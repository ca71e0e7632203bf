//! Pass-through pipelines used when a render target is set up and when a
//! texture is bound or unbound.

use crate::driver::{pass_through_inputs, TextureSource};
use crate::final_combiner::{FinalCombiner0, FinalCombiner1, FinalInput};
use crate::output::StageOutput;
use heapless::Vec;

use crate::state::{PipelineState, StageConfig};
use crate::{CombinerDest, CombinerSource};

impl PipelineState {
    /// One stage, `source * 1` into R0; final color is R0.rgb and final
    /// alpha R0.a. Factors are shared so the control word is exactly 1.
    pub fn pass_through(source: TextureSource) -> Self {
        let (color_inputs, alpha_inputs) = pass_through_inputs(source.source());
        let stage = StageConfig {
            color_inputs,
            alpha_inputs,
            color_output: StageOutput::sum_to(CombinerDest::R0).into(),
            alpha_output: StageOutput::sum_to(CombinerDest::R0),
            ..StageConfig::default()
        };

        Self {
            stages: Vec::from_array([stage]),
            share_c0: true,
            share_c1: true,
            final0: FinalCombiner0::just(FinalInput::color(CombinerSource::R0)),
            final1: FinalCombiner1::just(FinalInput::alpha(CombinerSource::R0)),
            ..Self::default()
        }
    }

    /// Untextured: interpolated diffuse color.
    pub fn diffuse() -> Self {
        Self::pass_through(TextureSource::Diffuse)
    }

    /// Texture stage 0, unmodulated.
    pub fn texture0() -> Self {
        Self::pass_through(TextureSource::Texture0)
    }
}
