//! General combiner stage inputs.

use crate::{CombinerMapping, CombinerSource};

/// One input slot of a general stage: where the value comes from, whether
/// the alpha channel is read, and how it is remapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CombinerInput {
    pub source: CombinerSource,
    pub alpha: bool,
    pub mapping: CombinerMapping,
}

impl CombinerInput {
    pub const fn new(source: CombinerSource, alpha: bool, mapping: CombinerMapping) -> Self {
        Self {
            source,
            alpha,
            mapping,
        }
    }

    /// RGB of `source`, unsigned identity.
    pub const fn color(source: CombinerSource) -> Self {
        Self::new(source, false, CombinerMapping::UnsignedIdentity)
    }

    /// Alpha of `source`, unsigned identity.
    pub const fn alpha(source: CombinerSource) -> Self {
        Self::new(source, true, CombinerMapping::UnsignedIdentity)
    }

    /// Same source and channel, different mapping.
    pub const fn mapped(self, mapping: CombinerMapping) -> Self {
        Self { mapping, ..self }
    }

    /// Constant 0.
    pub const fn zero() -> Self {
        Self::color(CombinerSource::Zero)
    }

    /// Constant 1: unsigned invert of a zero source.
    pub const fn one() -> Self {
        Self::new(CombinerSource::Zero, false, CombinerMapping::UnsignedInvert)
    }

    /// Constant -1: expand-normal of a zero source.
    pub const fn negative_one() -> Self {
        Self::new(CombinerSource::Zero, false, CombinerMapping::ExpandNormal)
    }

    /// Constant -0.5: halfbias-normal of a zero source.
    pub const fn negative_half() -> Self {
        Self::new(CombinerSource::Zero, false, CombinerMapping::HalfbiasNormal)
    }

    /// Constant 0.5: halfbias-negate of a zero source.
    pub const fn half() -> Self {
        Self::new(CombinerSource::Zero, false, CombinerMapping::HalfbiasNegate)
    }
}

impl Default for CombinerInput {
    fn default() -> Self {
        Self::zero()
    }
}

/// The A, B, C and D inputs of one general stage's color or alpha half.
/// Unset slots read zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StageInputs {
    pub a: CombinerInput,
    pub b: CombinerInput,
    pub c: CombinerInput,
    pub d: CombinerInput,
}

impl StageInputs {
    pub const fn new(a: CombinerInput) -> Self {
        Self {
            a,
            b: CombinerInput::zero(),
            c: CombinerInput::zero(),
            d: CombinerInput::zero(),
        }
    }

    /// A * B, with C and D zero.
    pub const fn product(a: CombinerInput, b: CombinerInput) -> Self {
        Self { b, ..Self::new(a) }
    }

    pub const fn with_b(self, b: CombinerInput) -> Self {
        Self { b, ..self }
    }

    pub const fn with_c(self, c: CombinerInput) -> Self {
        Self { c, ..self }
    }

    pub const fn with_d(self, d: CombinerInput) -> Self {
        Self { d, ..self }
    }
}
