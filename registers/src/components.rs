//! Field enums and register word layouts.

pub mod combiner_dest_e;
pub mod combiner_mapping_e;
pub mod combiner_out_op_e;
pub mod combiner_regs;
pub mod combiner_source_e;
pub mod combiner_sum_mux_e;
