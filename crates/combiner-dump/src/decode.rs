use nv2a_registers::{
    CombinerControlReg, CombinerFactorReg, CombinerIcwReg, CombinerOcwReg, Lane, Register,
    SpecularFogCw0Reg, SpecularFogCw1Reg,
};

use crate::error::DumpError;

/// Which register layout a raw word is decoded with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum WordKind {
    /// General stage input word (color or alpha)
    Icw,
    /// General stage color output word
    OcwColor,
    /// General stage alpha output word
    OcwAlpha,
    /// Final combiner word 0 (A-D)
    Cw0,
    /// Final combiner word 1 (E-G and flags)
    Cw1,
    /// Pipeline control word
    Control,
    /// BGRA8888 constant
    Factor,
}

/// One decoded field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: String,
}

impl Field {
    fn new(name: impl Into<String>, value: impl core::fmt::Debug) -> Self {
        Self {
            name: name.into(),
            value: format!("{:?}", value),
        }
    }
}

/// Parse a word given as decimal or `0x`-prefixed hex.
pub fn parse_word(text: &str) -> Result<u32, DumpError> {
    let digits = text.trim().replace('_', "");
    let parsed = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => digits.parse(),
    };
    parsed.map_err(|_| DumpError::InvalidWord(text.to_string()))
}

const LANE_NAMES: [(Lane, &str); 4] = [
    (Lane::A, "a"),
    (Lane::B, "b"),
    (Lane::C, "c"),
    (Lane::D, "d"),
];

/// Decode `word` as a `kind` register.
pub fn decode_word(kind: WordKind, word: u32) -> Result<Vec<Field>, DumpError> {
    let fields = match kind {
        WordKind::Icw => {
            let reg = CombinerIcwReg::from_raw(word);
            let mut fields = Vec::new();
            for (lane, name) in LANE_NAMES {
                fields.push(Field::new(format!("{}.source", name), reg.source(lane)));
                fields.push(Field::new(format!("{}.alpha", name), reg.alpha(lane)));
                fields.push(Field::new(format!("{}.mapping", name), reg.mapping(lane)));
            }
            fields
        }
        WordKind::OcwColor | WordKind::OcwAlpha => {
            let reg = CombinerOcwReg::from_raw(word);
            let op = reg.op().map_err(|e| DumpError::unknown("op", e))?;
            let mut fields = vec![
                Field::new("ab_dst", reg.ab_dst()),
                Field::new("cd_dst", reg.cd_dst()),
                Field::new("sum_dst", reg.sum_dst()),
                Field::new("ab_dot_product", reg.ab_dot_product()),
                Field::new("cd_dot_product", reg.cd_dot_product()),
                Field::new("sum_or_mux", reg.sum_or_mux()),
                Field::new("op", op),
            ];
            if kind == WordKind::OcwColor {
                fields.push(Field::new("alpha_from_ab_blue", reg.alpha_from_ab_blue()));
                fields.push(Field::new("alpha_from_cd_blue", reg.alpha_from_cd_blue()));
            } else if word & !CombinerOcwReg::COMMON_MASK != 0 {
                log::warn!(
                    "alpha output word sets bits outside {:#x}",
                    CombinerOcwReg::COMMON_MASK
                );
            }
            fields
        }
        WordKind::Cw0 => {
            let reg = SpecularFogCw0Reg::from_raw(word);
            let mut fields = Vec::new();
            for (lane, name) in LANE_NAMES {
                fields.push(Field::new(format!("{}.source", name), reg.source(lane)));
                fields.push(Field::new(format!("{}.alpha", name), reg.alpha(lane)));
                fields.push(Field::new(format!("{}.invert", name), reg.invert(lane)));
            }
            fields
        }
        WordKind::Cw1 => {
            let reg = SpecularFogCw1Reg::from_raw(word);
            let mut fields = Vec::new();
            for (lane, name) in [
                (SpecularFogCw1Reg::E_LANE, "e"),
                (SpecularFogCw1Reg::F_LANE, "f"),
                (SpecularFogCw1Reg::G_LANE, "g"),
            ] {
                fields.push(Field::new(format!("{}.source", name), reg.source(lane)));
                fields.push(Field::new(format!("{}.alpha", name), reg.alpha(lane)));
                fields.push(Field::new(format!("{}.invert", name), reg.invert(lane)));
            }
            fields.push(Field::new("specular_add_invert_r0", reg.specular_add_invert_r0()));
            fields.push(Field::new("specular_add_invert_v1", reg.specular_add_invert_v1()));
            fields.push(Field::new("specular_clamp", reg.specular_clamp()));
            fields
        }
        WordKind::Control => {
            let reg = CombinerControlReg::from_raw(word);
            vec![
                Field::new("iteration_count", reg.iteration_count()),
                Field::new("mux_msb", reg.mux_msb()),
                Field::new("factor0_each_stage", reg.factor0_each_stage()),
                Field::new("factor1_each_stage", reg.factor1_each_stage()),
            ]
        }
        WordKind::Factor => {
            let reg = CombinerFactorReg::from_raw(word);
            vec![
                Field::new("r", reg.r()),
                Field::new("g", reg.g()),
                Field::new("b", reg.b()),
                Field::new("a", reg.a()),
            ]
        }
    };
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of<'a>(fields: &'a [Field], name: &str) -> &'a str {
        &fields
            .iter()
            .find(|f| f.name == name)
            .unwrap_or_else(|| panic!("no field {name}"))
            .value
    }

    #[test]
    fn parse_hex_and_decimal() {
        assert_eq!(parse_word("0xC00").unwrap(), 0xC00);
        assert_eq!(parse_word("0x0420_0000").unwrap(), 0x0420_0000);
        assert_eq!(parse_word("3072").unwrap(), 3072);
        assert!(matches!(parse_word("r0"), Err(DumpError::InvalidWord(_))));
    }

    #[test]
    fn decode_diffuse_times_one() {
        let fields = decode_word(WordKind::Icw, 0x0420_0000).unwrap();
        assert_eq!(fields.len(), 12);
        assert_eq!(value_of(&fields, "a.source"), "Diffuse");
        assert_eq!(value_of(&fields, "b.mapping"), "UnsignedInvert");
        assert_eq!(value_of(&fields, "d.source"), "Zero");
    }

    #[test]
    fn decode_output_sum_to_r0() {
        let fields = decode_word(WordKind::OcwAlpha, 0xC00).unwrap();
        assert_eq!(value_of(&fields, "sum_dst"), "R0");
        assert_eq!(value_of(&fields, "op"), "Identity");
        assert!(fields.iter().all(|f| f.name != "alpha_from_ab_blue"));
    }

    #[test]
    fn decode_reserved_op() {
        let err = decode_word(WordKind::OcwColor, 5 << 15).unwrap_err();
        assert!(matches!(
            err,
            DumpError::UnknownField {
                field: "op",
                bits: 5
            }
        ));
    }

    #[test]
    fn decode_final_words() {
        let cw1 = decode_word(WordKind::Cw1, 0x1C00 | 1 << 5).unwrap();
        assert_eq!(value_of(&cw1, "g.source"), "R0");
        assert_eq!(value_of(&cw1, "g.alpha"), "true");
        assert_eq!(value_of(&cw1, "specular_add_invert_r0"), "true");
        assert_eq!(value_of(&cw1, "specular_clamp"), "false");

        let cw0 = decode_word(WordKind::Cw0, 12).unwrap();
        assert_eq!(value_of(&cw0, "d.source"), "R0");
    }

    #[test]
    fn decode_control_and_factor() {
        let control = decode_word(WordKind::Control, 2 | 0x1000 | 0x1_0000).unwrap();
        assert_eq!(value_of(&control, "iteration_count"), "2");
        assert_eq!(value_of(&control, "factor0_each_stage"), "true");
        assert_eq!(value_of(&control, "mux_msb"), "false");

        let factor = decode_word(WordKind::Factor, 0x4411_2233).unwrap();
        assert_eq!(value_of(&factor, "a"), "68");
        assert_eq!(value_of(&factor, "r"), "17");
        assert_eq!(value_of(&factor, "b"), "51");
    }
}
