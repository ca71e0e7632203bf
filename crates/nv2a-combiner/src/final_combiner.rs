//! Final combiner (specular/fog) inputs.
//!
//! The final combiner computes `A*B + (1-A)*C + D` for RGB and takes G as
//! alpha. E and F feed the `EfProd` source; CW1 also controls how specular
//! is added to R0 and whether the sum is clamped.

use crate::CombinerSource;

/// One final-combiner input. There is no mapping, only an invert bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FinalInput {
    pub source: CombinerSource,
    pub alpha: bool,
    pub invert: bool,
}

impl FinalInput {
    pub const fn new(source: CombinerSource, alpha: bool, invert: bool) -> Self {
        Self {
            source,
            alpha,
            invert,
        }
    }

    pub const fn color(source: CombinerSource) -> Self {
        Self::new(source, false, false)
    }

    pub const fn alpha(source: CombinerSource) -> Self {
        Self::new(source, true, false)
    }

    pub const fn zero() -> Self {
        Self::color(CombinerSource::Zero)
    }

    pub const fn inverted(self) -> Self {
        Self {
            invert: true,
            ..self
        }
    }
}

impl Default for FinalInput {
    fn default() -> Self {
        Self::zero()
    }
}

/// SET_COMBINER_SPECULAR_FOG_CW0 contents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FinalCombiner0 {
    pub a: FinalInput,
    pub b: FinalInput,
    pub c: FinalInput,
    pub d: FinalInput,
}

impl FinalCombiner0 {
    /// Only D set: the final color is D.
    pub const fn just(d: FinalInput) -> Self {
        Self {
            a: FinalInput::zero(),
            b: FinalInput::zero(),
            c: FinalInput::zero(),
            d,
        }
    }
}

/// SET_COMBINER_SPECULAR_FOG_CW1 contents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FinalCombiner1 {
    pub e: FinalInput,
    pub f: FinalInput,
    pub g: FinalInput,
    pub specular_add_invert_r0: bool,
    pub specular_add_invert_v1: bool,
    pub specular_clamp: bool,
}

impl FinalCombiner1 {
    /// Only G set: the final alpha is G.
    pub const fn just(g: FinalInput) -> Self {
        Self {
            e: FinalInput::zero(),
            f: FinalInput::zero(),
            g,
            specular_add_invert_r0: false,
            specular_add_invert_v1: false,
            specular_clamp: false,
        }
    }

    /// The first of E, F, G that reads the specular+R0 sum.
    pub fn specular_sum_slot(&self) -> Option<FinalSlot> {
        [(FinalSlot::E, self.e), (FinalSlot::F, self.f), (FinalSlot::G, self.g)]
            .into_iter()
            .find(|(_, input)| input.source == CombinerSource::SpecR0Sum)
            .map(|(slot, _)| slot)
    }
}

/// Names the CW1 inputs in errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FinalSlot {
    E,
    F,
    G,
}

impl core::fmt::Display for FinalSlot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            FinalSlot::E => "E",
            FinalSlot::F => "F",
            FinalSlot::G => "G",
        };
        f.write_str(name)
    }
}
