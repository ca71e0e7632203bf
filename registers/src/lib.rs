//! NV2A (Kelvin, class NV097) register combiner register map.
//!
//! Method addresses, field enums and typed views of the 32-bit words the
//! combiner methods take.
#![no_std]
#![allow(clippy::cast_lossless)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::identity_op)]
#![allow(clippy::inline_always)]
#![allow(clippy::unnecessary_cast)]

pub mod components;
pub mod encode;
pub mod methods;
pub mod reg;

pub use crate::components::combiner_dest_e::CombinerDestE;
pub use crate::components::combiner_mapping_e::CombinerMappingE;
pub use crate::components::combiner_out_op_e::CombinerOutOpE;
pub use crate::components::combiner_source_e::CombinerSourceE;
pub use crate::components::combiner_sum_mux_e::CombinerSumMuxE;
pub use crate::components::combiner_regs::{
    CombinerControlReg, CombinerFactorReg, CombinerIcwReg, CombinerOcwReg, Lane,
    SpecularFogCw0Reg, SpecularFogCw1Reg,
};
pub use crate::reg::Register;
