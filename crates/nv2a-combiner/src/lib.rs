//! NV2A register combiner configuration.
//!
//! Turns typed combiner descriptions into Kelvin method writes: pure
//! encoders in [`encode`] and [`factor`], a push-buffer cursor in
//! [`pushbuf`], the per-method [`CombinerDriver`], and whole-pipeline
//! [`PipelineState`] values with ready-made presets.

pub mod control;
pub mod driver;
pub mod encode;
pub mod error;
pub mod factor;
pub mod final_combiner;
pub mod input;
pub mod output;
pub mod presets;
pub mod pushbuf;
pub mod state;

pub use nv2a_registers::{
    CombinerDestE as CombinerDest, CombinerMappingE as CombinerMapping,
    CombinerOutOpE as CombinerOutOp, CombinerSourceE as CombinerSource,
    CombinerSumMuxE as CombinerSumMux,
};

pub use control::CombinerControl;
pub use driver::{CombinerDriver, TextureSource};
pub use error::{CombinerError, ConfigError};
pub use final_combiner::{FinalCombiner0, FinalCombiner1, FinalInput, FinalSlot};
pub use input::{CombinerInput, StageInputs};
pub use output::{ColorOutput, StageOutput};
pub use pushbuf::{CommandBuffer, CommandBufferError, MethodWrite, PushCursor};
pub use state::{PipelineState, StageConfig};

/// Most general stages SET_COMBINER_CONTROL can enable.
pub const MAX_ACTIVE_STAGES: usize = nv2a_registers::methods::COMBINER_MAX_ACTIVE_STAGES as usize;

/// Slots in each per-stage register array.
pub const STAGE_SLOTS: usize = nv2a_registers::methods::COMBINER_STAGE_SLOTS;
