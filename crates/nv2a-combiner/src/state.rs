//! Whole-pipeline combiner configuration.
//!
//! A [`PipelineState`] is a plain value describing every register the
//! combiner path owns. `apply` is the only place it touches hardware and it
//! validates the whole state first, so an invalid state writes nothing.

use glam::Vec4;
use heapless::Vec;
use log::debug;
use nv2a_hal::PushBuffer;

use crate::control::CombinerControl;
use crate::driver::CombinerDriver;
use crate::encode;
use crate::error::{CombinerError, ConfigError};
use crate::final_combiner::{FinalCombiner0, FinalCombiner1};
use crate::input::StageInputs;
use crate::output::{ColorOutput, StageOutput};
use crate::MAX_ACTIVE_STAGES;

/// One general combiner stage.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StageConfig {
    pub color_inputs: StageInputs,
    pub alpha_inputs: StageInputs,
    pub color_output: ColorOutput,
    pub alpha_output: StageOutput,
    /// Per-stage C0. Left untouched when `None`.
    pub factor0: Option<Vec4>,
    /// Per-stage C1. Left untouched when `None`.
    pub factor1: Option<Vec4>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PipelineState {
    pub(crate) stages: Vec<StageConfig, MAX_ACTIVE_STAGES>,
    /// Every stage reads stage 0's C0.
    pub share_c0: bool,
    /// Every stage reads stage 0's C1.
    pub share_c1: bool,
    pub mux_msb: bool,
    pub final0: FinalCombiner0,
    pub final1: FinalCombiner1,
    pub final_factor0: Option<Vec4>,
    pub final_factor1: Option<Vec4>,
}

impl PipelineState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next general stage.
    pub fn push_stage(&mut self, stage: StageConfig) -> Result<(), ConfigError> {
        self.stages
            .push(stage)
            .map_err(|_| ConfigError::TooManyStages)
    }

    pub fn with_stage(mut self, stage: StageConfig) -> Result<Self, ConfigError> {
        self.push_stage(stage)?;
        Ok(self)
    }

    pub fn stages(&self) -> &[StageConfig] {
        &self.stages
    }

    pub fn stage_mut(&mut self, index: usize) -> Option<&mut StageConfig> {
        self.stages.get_mut(index)
    }

    pub fn control(&self) -> CombinerControl {
        CombinerControl {
            stage_count: self.stages.len(),
            share_c0: self.share_c0,
            share_c1: self.share_c1,
            mux_msb: self.mux_msb,
        }
    }

    /// Check every register this state would write.
    pub fn validate(&self) -> Result<(), ConfigError> {
        encode::control_word(&self.control())?;
        encode::final_cw1_word(&self.final1)?;
        Ok(())
    }

    /// Validate, then write control, the full reset, every stage, the final
    /// combiner, and finally the constants.
    pub fn apply<P: PushBuffer>(
        &self,
        driver: &mut CombinerDriver<P>,
    ) -> Result<(), CombinerError<P::Error>> {
        self.validate()?;
        debug!(
            "applying combiner pipeline: {} stage(s), share_c0={}, share_c1={}, mux_msb={}",
            self.stages.len(),
            self.share_c0,
            self.share_c1,
            self.mux_msb
        );

        driver.set_combiner_control(&self.control())?;
        driver.clear_all_combiners()?;

        for (index, stage) in self.stages.iter().enumerate() {
            let index = index as u8;
            driver.set_input_color_combiner(index, &stage.color_inputs)?;
            driver.set_input_alpha_combiner(index, &stage.alpha_inputs)?;
            driver.set_output_color_combiner(index, &stage.color_output)?;
            driver.set_output_alpha_combiner(index, &stage.alpha_output)?;
        }

        driver.set_final_combiner0(&self.final0)?;
        driver.set_final_combiner1(&self.final1)?;

        for (index, stage) in self.stages.iter().enumerate() {
            let index = index as u8;
            if let Some(color) = stage.factor0 {
                driver.set_combiner_factor_c0(index, color)?;
            }
            if let Some(color) = stage.factor1 {
                driver.set_combiner_factor_c1(index, color)?;
            }
        }
        if let Some(color) = self.final_factor0 {
            driver.set_final_combiner_factor_c0(color)?;
        }
        if let Some(color) = self.final_factor1 {
            driver.set_final_combiner_factor_c1(color)?;
        }
        Ok(())
    }
}
