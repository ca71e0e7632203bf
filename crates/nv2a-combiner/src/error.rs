use crate::final_combiner::FinalSlot;

/// A combiner request that cannot be encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// SET_COMBINER_CONTROL only accepts 1..=7 active stages.
    #[error("combiner stage count {0} outside 1..=7")]
    StageCount(usize),

    /// Stage index past the end of the per-stage register arrays.
    #[error("combiner stage index {0} outside 0..8")]
    StageIndex(u8),

    /// CW1 inputs cannot read the specular+R0 sum; the final combiner locks
    /// up if asked to.
    #[error("final combiner input {0} cannot read the specular+R0 sum")]
    SpecularSumInCw1(FinalSlot),

    /// A pipeline was given more general stages than the hardware iterates.
    #[error("pipeline already holds 7 combiner stages")]
    TooManyStages,
}

impl ConfigError {
    /// True when writing the request would have hung the GPU rather than
    /// just producing a wrong picture.
    #[must_use]
    pub fn is_hardware_fatal(&self) -> bool {
        matches!(self, ConfigError::SpecularSumInCw1(_))
    }
}

/// Error type for combiner driver operations, generic over push-buffer errors.
#[derive(Debug, thiserror::Error)]
pub enum CombinerError<E: core::fmt::Debug> {
    /// The request was refused before anything was written.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Push buffer error.
    #[error("push buffer error: {0:?}")]
    Transport(E),
}
