//! Pure encoders: combiner configuration in, 32-bit method word out.
//!
//! Nothing here validates enum ranges (the types make out-of-range values
//! unrepresentable) or mapping legality. The only refusals are the stage
//! count and the CW1 specular-sum lock-up.

use nv2a_registers::{
    CombinerControlReg, CombinerIcwReg, CombinerOcwReg, Lane, Register, SpecularFogCw0Reg,
    SpecularFogCw1Reg,
};

use crate::control::CombinerControl;
use crate::error::ConfigError;
use crate::final_combiner::{FinalCombiner0, FinalCombiner1};
use crate::input::{CombinerInput, StageInputs};
use crate::output::{ColorOutput, StageOutput};
use crate::MAX_ACTIVE_STAGES;

/// Channel byte of one general-stage input: `source | alpha << 4 | mapping << 5`.
pub fn input_channel(input: &CombinerInput) -> u8 {
    CombinerIcwReg::channel_bits(input.source, input.alpha, input.mapping)
}

/// SET_COMBINER_{COLOR,ALPHA}_ICW word. A occupies the most significant byte.
pub fn input_word(inputs: &StageInputs) -> u32 {
    let mut reg = CombinerIcwReg::default();
    for (lane, input) in [
        (Lane::A, &inputs.a),
        (Lane::B, &inputs.b),
        (Lane::C, &inputs.c),
        (Lane::D, &inputs.d),
    ] {
        reg.set_channel(lane, input_channel(input));
    }
    reg.to_raw()
}

fn output_reg(output: &StageOutput) -> CombinerOcwReg {
    let mut reg = CombinerOcwReg::default();
    reg.set_cd_dst(output.cd_dst);
    reg.set_ab_dst(output.ab_dst);
    reg.set_sum_dst(output.sum_dst);
    reg.set_cd_dot_product(output.cd_dot_product);
    reg.set_ab_dot_product(output.ab_dot_product);
    reg.set_sum_or_mux(output.sum_or_mux);
    reg.set_op(output.op);
    reg
}

/// SET_COMBINER_ALPHA_OCW word.
pub fn output_word(output: &StageOutput) -> u32 {
    output_reg(output).to_raw()
}

/// SET_COMBINER_COLOR_OCW word: the alpha layout plus bits 19 and 18.
pub fn color_output_word(output: &ColorOutput) -> u32 {
    let mut reg = output_reg(&output.output);
    reg.set_alpha_from_ab_blue(output.alpha_from_ab_blue);
    reg.set_alpha_from_cd_blue(output.alpha_from_cd_blue);
    reg.to_raw()
}

/// SET_COMBINER_SPECULAR_FOG_CW0 word.
pub fn final_cw0_word(cw0: &FinalCombiner0) -> u32 {
    let mut reg = SpecularFogCw0Reg::default();
    for (lane, input) in [
        (Lane::A, &cw0.a),
        (Lane::B, &cw0.b),
        (Lane::C, &cw0.c),
        (Lane::D, &cw0.d),
    ] {
        reg.set_input(lane, input.source, input.alpha, input.invert);
    }
    reg.to_raw()
}

/// SET_COMBINER_SPECULAR_FOG_CW1 word.
///
/// # Errors
/// [`ConfigError::SpecularSumInCw1`] if E, F or G reads the specular+R0 sum.
pub fn final_cw1_word(cw1: &FinalCombiner1) -> Result<u32, ConfigError> {
    if let Some(slot) = cw1.specular_sum_slot() {
        return Err(ConfigError::SpecularSumInCw1(slot));
    }

    let mut reg = SpecularFogCw1Reg::default();
    for (lane, input) in [
        (SpecularFogCw1Reg::E_LANE, &cw1.e),
        (SpecularFogCw1Reg::F_LANE, &cw1.f),
        (SpecularFogCw1Reg::G_LANE, &cw1.g),
    ] {
        reg.set_input(lane, input.source, input.alpha, input.invert);
    }
    // Emits bit 5, never the documented R12 encoding.
    reg.set_specular_add_invert_r0(cw1.specular_add_invert_r0);
    reg.set_specular_add_invert_v1(cw1.specular_add_invert_v1);
    reg.set_specular_clamp(cw1.specular_clamp);
    Ok(reg.to_raw())
}

/// SET_COMBINER_CONTROL word.
///
/// The per-stage factor flags are set when the corresponding constant is
/// *not* shared; the MUX select flag when MSB selection is requested.
///
/// # Errors
/// [`ConfigError::StageCount`] unless `1 <= stage_count <= 7`.
pub fn control_word(control: &CombinerControl) -> Result<u32, ConfigError> {
    if control.stage_count == 0 || control.stage_count > MAX_ACTIVE_STAGES {
        return Err(ConfigError::StageCount(control.stage_count));
    }

    let mut reg = CombinerControlReg::default();
    reg.set_iteration_count(control.stage_count as u8);
    reg.set_factor0_each_stage(!control.share_c0);
    reg.set_factor1_each_stage(!control.share_c1);
    reg.set_mux_msb(control.mux_msb);
    Ok(reg.to_raw())
}
