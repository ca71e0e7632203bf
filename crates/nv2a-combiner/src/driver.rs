//! Combiner driver, generic over PushBuffer.
//!
//! Each method encodes its arguments, then writes them inside a single
//! push-buffer bracket. Requests that cannot be encoded are refused before
//! the bracket is opened, so a refusal writes nothing.

use glam::Vec4;
use log::error;
use nv2a_hal::PushBuffer;
use nv2a_registers::methods;

use crate::control::CombinerControl;
use crate::encode;
use crate::error::{CombinerError, ConfigError};
use crate::factor::factor_word;
use crate::final_combiner::{FinalCombiner0, FinalCombiner1, FinalInput};
use crate::input::{CombinerInput, StageInputs};
use crate::output::{ColorOutput, StageOutput};
use crate::pushbuf::PushCursor;
use crate::{CombinerSource, STAGE_SLOTS};

/// What stage 0 reads when a texture is bound or unbound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureSource {
    /// Interpolated vertex diffuse color.
    Diffuse,
    /// Texture stage 0.
    Texture0,
}

impl TextureSource {
    pub(crate) fn source(self) -> CombinerSource {
        match self {
            TextureSource::Diffuse => CombinerSource::Diffuse,
            TextureSource::Texture0 => CombinerSource::Tex0,
        }
    }
}

/// Stage 0 inputs for the pass-through pipeline: `source * 1`.
pub(crate) fn pass_through_inputs(source: CombinerSource) -> (StageInputs, StageInputs) {
    (
        StageInputs::product(CombinerInput::color(source), CombinerInput::one()),
        StageInputs::product(CombinerInput::alpha(source), CombinerInput::one()),
    )
}

fn stage_method(base: u32, stage: u8) -> Result<u32, ConfigError> {
    if stage as usize >= STAGE_SLOTS {
        return Err(ConfigError::StageIndex(stage));
    }
    Ok(base + methods::COMBINER_STAGE_STRIDE * stage as u32)
}

/// Register-combiner driver. Owns the push buffer it writes to.
pub struct CombinerDriver<P: PushBuffer> {
    pb: P,
}

impl<P: PushBuffer> CombinerDriver<P> {
    pub fn new(pb: P) -> Self {
        Self { pb }
    }

    pub fn push_buffer(&self) -> &P {
        &self.pb
    }

    pub fn into_inner(self) -> P {
        self.pb
    }

    /// Write one word to `method` in its own bracket.
    fn write(&mut self, method: u32, value: u32) -> Result<(), CombinerError<P::Error>> {
        let mut cursor = PushCursor::begin(&mut self.pb).map_err(CombinerError::Transport)?;
        cursor.push1(method, value).map_err(CombinerError::Transport)
    }

    /// Write a run of words to consecutive methods in one bracket.
    fn write_n(&mut self, method: u32, values: &[u32]) -> Result<(), CombinerError<P::Error>> {
        let mut cursor = PushCursor::begin(&mut self.pb).map_err(CombinerError::Transport)?;
        cursor.push_n(method, values).map_err(CombinerError::Transport)
    }

    fn write_stage(
        &mut self,
        base: u32,
        stage: u8,
        value: u32,
    ) -> Result<(), CombinerError<P::Error>> {
        let method = stage_method(base, stage)?;
        self.write(method, value)
    }

    fn clear_stages(&mut self, base: u32) -> Result<(), CombinerError<P::Error>> {
        self.write_n(base, &[0; STAGE_SLOTS])
    }

    /// Set the active stage count and the factor/MUX options.
    pub fn set_combiner_control(
        &mut self,
        control: &CombinerControl,
    ) -> Result<(), CombinerError<P::Error>> {
        let word = encode::control_word(control)?;
        self.write(methods::SET_COMBINER_CONTROL, word)
    }

    // --- Input control words ---

    pub fn set_input_color_combiner(
        &mut self,
        stage: u8,
        inputs: &StageInputs,
    ) -> Result<(), CombinerError<P::Error>> {
        self.write_stage(methods::SET_COMBINER_COLOR_ICW, stage, encode::input_word(inputs))
    }

    pub fn set_input_alpha_combiner(
        &mut self,
        stage: u8,
        inputs: &StageInputs,
    ) -> Result<(), CombinerError<P::Error>> {
        self.write_stage(methods::SET_COMBINER_ALPHA_ICW, stage, encode::input_word(inputs))
    }

    pub fn clear_input_color_combiner(&mut self, stage: u8) -> Result<(), CombinerError<P::Error>> {
        self.write_stage(methods::SET_COMBINER_COLOR_ICW, stage, 0)
    }

    pub fn clear_input_alpha_combiner(&mut self, stage: u8) -> Result<(), CombinerError<P::Error>> {
        self.write_stage(methods::SET_COMBINER_ALPHA_ICW, stage, 0)
    }

    /// Zero all eight color input words in one write.
    pub fn clear_input_color_combiners(&mut self) -> Result<(), CombinerError<P::Error>> {
        self.clear_stages(methods::SET_COMBINER_COLOR_ICW)
    }

    /// Zero all eight alpha input words in one write.
    pub fn clear_input_alpha_combiners(&mut self) -> Result<(), CombinerError<P::Error>> {
        self.clear_stages(methods::SET_COMBINER_ALPHA_ICW)
    }

    // --- Output control words ---

    pub fn set_output_color_combiner(
        &mut self,
        stage: u8,
        output: &ColorOutput,
    ) -> Result<(), CombinerError<P::Error>> {
        self.write_stage(
            methods::SET_COMBINER_COLOR_OCW,
            stage,
            encode::color_output_word(output),
        )
    }

    pub fn set_output_alpha_combiner(
        &mut self,
        stage: u8,
        output: &StageOutput,
    ) -> Result<(), CombinerError<P::Error>> {
        self.write_stage(methods::SET_COMBINER_ALPHA_OCW, stage, encode::output_word(output))
    }

    pub fn clear_output_color_combiner(
        &mut self,
        stage: u8,
    ) -> Result<(), CombinerError<P::Error>> {
        self.write_stage(methods::SET_COMBINER_COLOR_OCW, stage, 0)
    }

    pub fn clear_output_alpha_combiner(
        &mut self,
        stage: u8,
    ) -> Result<(), CombinerError<P::Error>> {
        self.write_stage(methods::SET_COMBINER_ALPHA_OCW, stage, 0)
    }

    pub fn clear_output_color_combiners(&mut self) -> Result<(), CombinerError<P::Error>> {
        self.clear_stages(methods::SET_COMBINER_COLOR_OCW)
    }

    pub fn clear_output_alpha_combiners(&mut self) -> Result<(), CombinerError<P::Error>> {
        self.clear_stages(methods::SET_COMBINER_ALPHA_OCW)
    }

    /// Full reset: zero every stage's input and output words.
    pub fn clear_all_combiners(&mut self) -> Result<(), CombinerError<P::Error>> {
        self.clear_input_color_combiners()?;
        self.clear_input_alpha_combiners()?;
        self.clear_output_color_combiners()?;
        self.clear_output_alpha_combiners()
    }

    // --- Final combiner ---

    pub fn set_final_combiner0(
        &mut self,
        cw0: &FinalCombiner0,
    ) -> Result<(), CombinerError<P::Error>> {
        self.write(methods::SET_COMBINER_SPECULAR_FOG_CW0, encode::final_cw0_word(cw0))
    }

    /// Final color = `d`.
    pub fn set_final_combiner0_just(
        &mut self,
        d: FinalInput,
    ) -> Result<(), CombinerError<P::Error>> {
        self.set_final_combiner0(&FinalCombiner0::just(d))
    }

    /// Refuses, without writing, any E/F/G that reads the specular+R0 sum.
    pub fn set_final_combiner1(
        &mut self,
        cw1: &FinalCombiner1,
    ) -> Result<(), CombinerError<P::Error>> {
        let word = encode::final_cw1_word(cw1).map_err(|e| {
            if e.is_hardware_fatal() {
                error!("refusing final combiner CW1: {}", e);
            }
            e
        })?;
        self.write(methods::SET_COMBINER_SPECULAR_FOG_CW1, word)
    }

    /// Final alpha = `g`.
    pub fn set_final_combiner1_just(
        &mut self,
        g: FinalInput,
    ) -> Result<(), CombinerError<P::Error>> {
        self.set_final_combiner1(&FinalCombiner1::just(g))
    }

    // --- Constants ---

    pub fn set_combiner_factor_c0(
        &mut self,
        stage: u8,
        color: Vec4,
    ) -> Result<(), CombinerError<P::Error>> {
        self.set_combiner_factor_c0_raw(stage, factor_word(color))
    }

    /// Already-packed BGRA word, written as is.
    pub fn set_combiner_factor_c0_raw(
        &mut self,
        stage: u8,
        value: u32,
    ) -> Result<(), CombinerError<P::Error>> {
        self.write_stage(methods::SET_COMBINER_FACTOR0, stage, value)
    }

    pub fn set_combiner_factor_c1(
        &mut self,
        stage: u8,
        color: Vec4,
    ) -> Result<(), CombinerError<P::Error>> {
        self.set_combiner_factor_c1_raw(stage, factor_word(color))
    }

    pub fn set_combiner_factor_c1_raw(
        &mut self,
        stage: u8,
        value: u32,
    ) -> Result<(), CombinerError<P::Error>> {
        self.write_stage(methods::SET_COMBINER_FACTOR1, stage, value)
    }

    pub fn set_final_combiner_factor_c0(
        &mut self,
        color: Vec4,
    ) -> Result<(), CombinerError<P::Error>> {
        self.set_final_combiner_factor_c0_raw(factor_word(color))
    }

    pub fn set_final_combiner_factor_c0_raw(
        &mut self,
        value: u32,
    ) -> Result<(), CombinerError<P::Error>> {
        self.write(methods::SET_SPECULAR_FOG_FACTOR, value)
    }

    pub fn set_final_combiner_factor_c1(
        &mut self,
        color: Vec4,
    ) -> Result<(), CombinerError<P::Error>> {
        self.set_final_combiner_factor_c1_raw(factor_word(color))
    }

    pub fn set_final_combiner_factor_c1_raw(
        &mut self,
        value: u32,
    ) -> Result<(), CombinerError<P::Error>> {
        self.write(methods::SET_SPECULAR_FOG_FACTOR + 4, value)
    }

    // --- Blending ---

    /// Toggle the blend unit. Enabling always selects
    /// `src * SRC_ALPHA + dst * (1 - SRC_ALPHA)`.
    pub fn set_alpha_blend_enabled(&mut self, enable: bool) -> Result<(), CombinerError<P::Error>> {
        let mut cursor = PushCursor::begin(&mut self.pb).map_err(CombinerError::Transport)?;
        cursor
            .push1(methods::SET_BLEND_ENABLE, enable as u32)
            .map_err(CombinerError::Transport)?;
        if enable {
            for (method, value) in [
                (methods::SET_BLEND_EQUATION, methods::BLEND_EQUATION_V_FUNC_ADD),
                (methods::SET_BLEND_FUNC_SFACTOR, methods::BLEND_FUNC_SFACTOR_V_SRC_ALPHA),
                (
                    methods::SET_BLEND_FUNC_DFACTOR,
                    methods::BLEND_FUNC_DFACTOR_V_ONE_MINUS_SRC_ALPHA,
                ),
            ] {
                cursor.push1(method, value).map_err(CombinerError::Transport)?;
            }
        }
        Ok(())
    }

    /// Point stage 0 at the diffuse color or texture 0. Only stage 0's
    /// input words are rewritten; outputs and the final combiner stay as
    /// the pass-through presets left them.
    pub fn select_stage0_source(
        &mut self,
        source: TextureSource,
    ) -> Result<(), CombinerError<P::Error>> {
        let (color, alpha) = pass_through_inputs(source.source());
        self.set_input_color_combiner(0, &color)?;
        self.set_input_alpha_combiner(0, &alpha)
    }
}
