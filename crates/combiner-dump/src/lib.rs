//! Combiner debugging helpers behind the `combiner-dump` binary.

/// Error types for dumping and decoding.
pub mod error;

/// Raw register word decoding.
pub mod decode;

/// Preset pipelines rendered as method writes.
pub mod preset;

pub use decode::{decode_word, parse_word, Field, WordKind};
pub use error::DumpError;
pub use preset::{dump_preset, format_write, Preset};
