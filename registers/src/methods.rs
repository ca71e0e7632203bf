//! Kelvin (NV097) method addresses and bit-field constants used by the
//! register combiners and the blend unit.

// --- Push buffer framing ---

/// Subchannel the 3D object is bound to.
pub const SUBCH_3D: u8 = 0;
/// Method header: word count field.
pub const METHOD_COUNT_SHIFT: u32 = 18;
/// Method header: subchannel field.
pub const METHOD_SUBCHANNEL_SHIFT: u32 = 13;
/// Method header: method address bits.
pub const METHOD_ADDRESS_MASK: u32 = 0x1FFC;
/// Largest word count a single method header can carry.
pub const METHOD_MAX_COUNT: usize = 0x7FF;

/// Build a method header for `count` data words written to `method`.
#[inline(always)]
#[must_use]
pub const fn method_header(subchannel: u8, method: u32, count: u32) -> u32 {
    (count << METHOD_COUNT_SHIFT) | ((subchannel as u32) << METHOD_SUBCHANNEL_SHIFT) | method
}

// --- Per-stage arrays ---

/// Register slots per general-combiner array (ICW, OCW, FACTOR).
pub const COMBINER_STAGE_SLOTS: usize = 8;
/// Byte stride between consecutive stage slots.
pub const COMBINER_STAGE_STRIDE: u32 = 4;

/// Alpha input control words, one per stage.
pub const SET_COMBINER_ALPHA_ICW: u32 = 0x0000_0260;
/// Final combiner control word 0 (inputs A-D).
pub const SET_COMBINER_SPECULAR_FOG_CW0: u32 = 0x0000_0288;
/// Final combiner control word 1 (inputs E-G + flags).
pub const SET_COMBINER_SPECULAR_FOG_CW1: u32 = 0x0000_028C;
/// Per-stage constant C0.
pub const SET_COMBINER_FACTOR0: u32 = 0x0000_0A60;
/// Per-stage constant C1.
pub const SET_COMBINER_FACTOR1: u32 = 0x0000_0A80;
/// Alpha output control words, one per stage.
pub const SET_COMBINER_ALPHA_OCW: u32 = 0x0000_0AA0;
/// Color input control words, one per stage.
pub const SET_COMBINER_COLOR_ICW: u32 = 0x0000_0AC0;
/// Final combiner constants C0 (+0x00) and C1 (+0x04).
pub const SET_SPECULAR_FOG_FACTOR: u32 = 0x0000_1E20;
/// Color output control words, one per stage.
pub const SET_COMBINER_COLOR_OCW: u32 = 0x0000_1E40;
/// Pipeline-wide combiner control.
pub const SET_COMBINER_CONTROL: u32 = 0x0000_1E60;

// --- SET_COMBINER_CONTROL fields ---

pub const COMBINER_CONTROL_ITERATION_COUNT: u32 = 0x0000_00FF;
pub const COMBINER_CONTROL_MUX_SELECT: u32 = 0x0000_0F00;
pub const COMBINER_CONTROL_MUX_SELECT_LSB: u32 = 0;
pub const COMBINER_CONTROL_MUX_SELECT_MSB: u32 = 1;
pub const COMBINER_CONTROL_FACTOR0: u32 = 0x0000_F000;
pub const COMBINER_CONTROL_FACTOR0_SAME_FACTOR_ALL: u32 = 0;
pub const COMBINER_CONTROL_FACTOR0_EACH_STAGE: u32 = 1;
pub const COMBINER_CONTROL_FACTOR1: u32 = 0xFFFF_0000;
pub const COMBINER_CONTROL_FACTOR1_SAME_FACTOR_ALL: u32 = 0;
pub const COMBINER_CONTROL_FACTOR1_EACH_STAGE: u32 = 1;

/// Most general stages the iteration count may enable.
pub const COMBINER_MAX_ACTIVE_STAGES: u8 = 7;

// --- SET_COMBINER_SPECULAR_FOG_CW1 flags ---

pub const SPECULAR_FOG_CW1_SPECULAR_CLAMP: u32 = 1 << 7;
pub const SPECULAR_FOG_CW1_SPECULAR_ADD_INVERT_R5: u32 = 1 << 6;
/// Documented encoding of the "invert R0 in the specular add" flag. Writing
/// it locks up the final combiner; emit [`SPECULAR_FOG_CW1_SPECULAR_ADD_INVERT_R0`].
pub const SPECULAR_FOG_CW1_SPECULAR_ADD_INVERT_R12: u32 = 1 << 12;
/// Bit the hardware actually honours for "invert R0 in the specular add".
pub const SPECULAR_FOG_CW1_SPECULAR_ADD_INVERT_R0: u32 = 1 << 5;

// --- Blend unit ---

pub const SET_BLEND_ENABLE: u32 = 0x0000_0304;
pub const SET_BLEND_FUNC_SFACTOR: u32 = 0x0000_0344;
pub const SET_BLEND_FUNC_DFACTOR: u32 = 0x0000_0348;
pub const SET_BLEND_EQUATION: u32 = 0x0000_0350;

pub const BLEND_EQUATION_V_FUNC_ADD: u32 = 0x8006;
pub const BLEND_FUNC_SFACTOR_V_SRC_ALPHA: u32 = 0x0302;
pub const BLEND_FUNC_DFACTOR_V_ONE_MINUS_SRC_ALPHA: u32 = 0x0303;

/// Human-readable name and stage index for a combiner or blend method, for
/// debug dumps.
#[must_use]
pub fn method_name(method: u32) -> Option<(&'static str, Option<u8>)> {
    const ARRAYS: [(u32, &str); 6] = [
        (SET_COMBINER_COLOR_ICW, "SET_COMBINER_COLOR_ICW"),
        (SET_COMBINER_ALPHA_ICW, "SET_COMBINER_ALPHA_ICW"),
        (SET_COMBINER_COLOR_OCW, "SET_COMBINER_COLOR_OCW"),
        (SET_COMBINER_ALPHA_OCW, "SET_COMBINER_ALPHA_OCW"),
        (SET_COMBINER_FACTOR0, "SET_COMBINER_FACTOR0"),
        (SET_COMBINER_FACTOR1, "SET_COMBINER_FACTOR1"),
    ];
    let array_len = COMBINER_STAGE_SLOTS as u32 * COMBINER_STAGE_STRIDE;
    for (base, name) in ARRAYS {
        if (base..base + array_len).contains(&method) {
            return Some((name, Some(((method - base) / COMBINER_STAGE_STRIDE) as u8)));
        }
    }

    let name = match method {
        SET_COMBINER_SPECULAR_FOG_CW0 => "SET_COMBINER_SPECULAR_FOG_CW0",
        SET_COMBINER_SPECULAR_FOG_CW1 => "SET_COMBINER_SPECULAR_FOG_CW1",
        SET_SPECULAR_FOG_FACTOR => "SET_SPECULAR_FOG_FACTOR_C0",
        m if m == SET_SPECULAR_FOG_FACTOR + 4 => "SET_SPECULAR_FOG_FACTOR_C1",
        SET_COMBINER_CONTROL => "SET_COMBINER_CONTROL",
        SET_BLEND_ENABLE => "SET_BLEND_ENABLE",
        SET_BLEND_FUNC_SFACTOR => "SET_BLEND_FUNC_SFACTOR",
        SET_BLEND_FUNC_DFACTOR => "SET_BLEND_FUNC_DFACTOR",
        SET_BLEND_EQUATION => "SET_BLEND_EQUATION",
        _ => return None,
    };
    Some((name, None))
}
