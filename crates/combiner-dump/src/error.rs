use nv2a_combiner::{CombinerError, CommandBufferError};
use nv2a_registers::encode::UnknownVariant;

/// Errors that can occur while dumping or decoding combiner words.
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    /// A command-line word was neither decimal nor `0x` hex.
    #[error("Invalid register word {0:?}")]
    InvalidWord(String),

    /// A field holds an encoding the hardware does not define.
    #[error("Cannot decode {field}: no encoding {bits:#x}")]
    UnknownField { field: &'static str, bits: u8 },

    /// Applying a preset failed.
    #[error("Preset error: {0}")]
    Preset(#[from] CombinerError<CommandBufferError>),

    /// The recorded push buffer could not be decoded.
    #[error("Push buffer decode error: {0}")]
    Stream(#[from] CommandBufferError),
}

impl DumpError {
    pub(crate) fn unknown(field: &'static str, err: UnknownVariant<u8>) -> Self {
        DumpError::UnknownField {
            field,
            bits: err.bits(),
        }
    }
}
