//! Integration tests for CombinerDriver using a mock push buffer.
//!
//! The mock decodes each method header as it arrives and records
//! (method, data) pairs, plus begin/end counts so tests can check that
//! every call is bracketed exactly once.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec4;
use nv2a_combiner::{
    ColorOutput, CombinerControl, CombinerDest, CombinerDriver, CombinerError, CombinerInput,
    CombinerMapping, CombinerOutOp, CombinerSource, ConfigError, FinalCombiner1, FinalInput,
    FinalSlot, PipelineState, StageInputs, StageOutput, TextureSource,
};
use nv2a_registers::methods;
use nv2a_registers::{CombinerIcwReg, Lane, Register, SpecularFogCw0Reg};

/// Captured method write: (method, data).
type WriteRecord = (u32, u32);

#[derive(Default)]
struct MockState {
    writes: Vec<WriteRecord>,
    /// Number of data words still owed to the last header, and where.
    pending: Option<(u32, u32)>,
    begins: usize,
    ends: usize,
    headers: Vec<u32>,
}

/// Mock push buffer that records all method writes.
#[derive(Clone, Default)]
struct MockPushBuffer {
    state: Rc<RefCell<MockState>>,
}

impl MockPushBuffer {
    fn new() -> Self {
        Self::default()
    }

    fn get_writes(&self) -> Vec<WriteRecord> {
        self.state.borrow().writes.clone()
    }

    fn headers(&self) -> Vec<u32> {
        self.state.borrow().headers.clone()
    }

    /// Find the last write to a specific method.
    fn last_write_to(&self, method: u32) -> Option<u32> {
        self.state
            .borrow()
            .writes
            .iter()
            .rev()
            .find(|(m, _)| *m == method)
            .map(|(_, d)| *d)
    }

    fn brackets(&self) -> (usize, usize) {
        let state = self.state.borrow();
        (state.begins, state.ends)
    }

    fn clear(&self) {
        *self.state.borrow_mut() = MockState::default();
    }
}

#[derive(Debug)]
struct MockError;

impl nv2a_hal::PushBuffer for MockPushBuffer {
    type Error = MockError;

    fn begin(&mut self) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        assert_eq!(state.begins, state.ends, "nested begin");
        state.begins += 1;
        Ok(())
    }

    fn push(&mut self, words: &[u32]) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        assert!(state.begins > state.ends, "push outside a bracket");
        for &word in words {
            let pending = state.pending;
            match pending {
                Some((method, remaining)) => {
                    state.writes.push((method, word));
                    state.pending = (remaining > 1).then_some((method + 4, remaining - 1));
                }
                None => {
                    state.headers.push(word);
                    let count = (word >> 18) & 0x7FF;
                    let method = word & 0x1FFC;
                    state.pending = (count > 0).then_some((method, count));
                }
            }
        }
        Ok(())
    }

    fn end(&mut self) {
        let mut state = self.state.borrow_mut();
        assert!(state.pending.is_none(), "bracket closed mid-method");
        state.ends += 1;
    }
}

/// Push buffer whose `push` always fails, to check the bracket still closes.
#[derive(Clone, Default)]
struct FailingPushBuffer {
    state: Rc<RefCell<(usize, usize)>>,
}

impl nv2a_hal::PushBuffer for FailingPushBuffer {
    type Error = MockError;

    fn begin(&mut self) -> Result<(), Self::Error> {
        self.state.borrow_mut().0 += 1;
        Ok(())
    }

    fn push(&mut self, _words: &[u32]) -> Result<(), Self::Error> {
        Err(MockError)
    }

    fn end(&mut self) {
        self.state.borrow_mut().1 += 1;
    }
}

fn create_driver() -> (CombinerDriver<MockPushBuffer>, MockPushBuffer) {
    let mock = MockPushBuffer::new();
    (CombinerDriver::new(mock.clone()), mock)
}

// --- Input control words ---

#[test]
fn test_stage0_diffuse_times_one() {
    let (mut driver, mock) = create_driver();
    let inputs = StageInputs::product(
        CombinerInput::color(CombinerSource::Diffuse),
        CombinerInput::new(CombinerSource::Zero, false, CombinerMapping::UnsignedInvert),
    );
    driver.set_input_color_combiner(0, &inputs).unwrap();

    let word = mock.last_write_to(methods::SET_COMBINER_COLOR_ICW).unwrap();
    let reg = CombinerIcwReg::from_raw(word);

    assert_eq!(reg.source(Lane::A), CombinerSource::Diffuse);
    assert!(!reg.alpha(Lane::A));
    assert_eq!(reg.mapping(Lane::A), CombinerMapping::UnsignedIdentity);

    assert_eq!(reg.source(Lane::B), CombinerSource::Zero);
    assert!(!reg.alpha(Lane::B));
    assert_eq!(reg.mapping(Lane::B), CombinerMapping::UnsignedInvert);

    for lane in [Lane::C, Lane::D] {
        assert_eq!(reg.source(lane), CombinerSource::Zero);
        assert!(!reg.alpha(lane));
        assert_eq!(reg.mapping(lane), CombinerMapping::UnsignedIdentity);
    }
    assert_eq!(word, 0x0420_0000);
}

#[test]
fn test_stage_index_selects_slot() {
    let (mut driver, mock) = create_driver();
    let inputs = StageInputs::new(CombinerInput::alpha(CombinerSource::Tex1));
    driver.set_input_alpha_combiner(5, &inputs).unwrap();

    let writes = mock.get_writes();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].0, methods::SET_COMBINER_ALPHA_ICW + 5 * 4);
    assert_eq!(writes[0].1, (9 | 1 << 4) << 24);
}

#[test]
fn test_stage_index_out_of_range() {
    let (mut driver, mock) = create_driver();
    let result = driver.set_input_color_combiner(8, &StageInputs::default());
    assert!(matches!(
        result,
        Err(CombinerError::Config(ConfigError::StageIndex(8)))
    ));
    assert!(mock.get_writes().is_empty());
    assert_eq!(mock.brackets(), (0, 0));
}

#[test]
fn test_batch_clears_are_single_writes() {
    let (mut driver, mock) = create_driver();
    driver.clear_input_color_combiners().unwrap();
    driver.clear_output_alpha_combiners().unwrap();

    assert_eq!(
        mock.headers(),
        vec![
            (8 << 18) | methods::SET_COMBINER_COLOR_ICW,
            (8 << 18) | methods::SET_COMBINER_ALPHA_OCW,
        ]
    );
    let writes = mock.get_writes();
    assert_eq!(writes.len(), 16);
    for (i, (method, data)) in writes[..8].iter().enumerate() {
        assert_eq!(*method, methods::SET_COMBINER_COLOR_ICW + 4 * i as u32);
        assert_eq!(*data, 0);
    }
    assert_eq!(mock.brackets(), (2, 2));
}

#[test]
fn test_clear_all_combiners() {
    let (mut driver, mock) = create_driver();
    driver.clear_all_combiners().unwrap();

    let writes = mock.get_writes();
    assert_eq!(writes.len(), 32);
    assert!(writes.iter().all(|(_, d)| *d == 0));
    for base in [
        methods::SET_COMBINER_COLOR_ICW,
        methods::SET_COMBINER_ALPHA_ICW,
        methods::SET_COMBINER_COLOR_OCW,
        methods::SET_COMBINER_ALPHA_OCW,
    ] {
        assert_eq!(mock.last_write_to(base + 7 * 4), Some(0));
    }
}

#[test]
fn test_single_stage_clears() {
    let (mut driver, mock) = create_driver();
    driver.clear_input_alpha_combiner(3).unwrap();
    driver.clear_output_color_combiner(2).unwrap();

    assert_eq!(
        mock.get_writes(),
        vec![
            (methods::SET_COMBINER_ALPHA_ICW + 12, 0),
            (methods::SET_COMBINER_COLOR_OCW + 8, 0),
        ]
    );
}

// --- Output control words ---

#[test]
fn test_output_sum_to_r0() {
    let (mut driver, mock) = create_driver();
    driver
        .set_output_color_combiner(0, &StageOutput::sum_to(CombinerDest::R0).into())
        .unwrap();
    driver
        .set_output_alpha_combiner(0, &StageOutput::sum_to(CombinerDest::R0))
        .unwrap();

    assert_eq!(mock.last_write_to(methods::SET_COMBINER_COLOR_OCW), Some(0xC00));
    assert_eq!(mock.last_write_to(methods::SET_COMBINER_ALPHA_OCW), Some(0xC00));
}

#[test]
fn test_output_color_only_bits() {
    let (mut driver, mock) = create_driver();
    let output = StageOutput {
        ab_dot_product: true,
        op: CombinerOutOp::ShiftRight1,
        ..StageOutput::new(CombinerDest::Specular, CombinerDest::Discard, CombinerDest::Discard)
    };
    driver
        .set_output_color_combiner(
            1,
            &ColorOutput {
                output,
                alpha_from_ab_blue: true,
                alpha_from_cd_blue: false,
            },
        )
        .unwrap();
    driver.set_output_alpha_combiner(1, &output).unwrap();

    let color = mock.last_write_to(methods::SET_COMBINER_COLOR_OCW + 4).unwrap();
    let alpha = mock.last_write_to(methods::SET_COMBINER_ALPHA_OCW + 4).unwrap();
    assert_eq!(alpha, (5 << 4) | (1 << 13) | (6 << 15));
    assert_eq!(color, alpha | (1 << 19));
}

// --- Control ---

#[test]
fn test_combiner_control() {
    let (mut driver, mock) = create_driver();
    driver
        .set_combiner_control(&CombinerControl::new(3).shared_factors())
        .unwrap();
    assert_eq!(mock.last_write_to(methods::SET_COMBINER_CONTROL), Some(3));

    driver
        .set_combiner_control(&CombinerControl {
            stage_count: 2,
            share_c0: false,
            share_c1: true,
            mux_msb: true,
        })
        .unwrap();
    assert_eq!(
        mock.last_write_to(methods::SET_COMBINER_CONTROL),
        Some(2 | 0x100 | 0x1000)
    );
}

#[test]
fn test_combiner_control_range() {
    let (mut driver, mock) = create_driver();
    for count in [0, 8] {
        let result = driver.set_combiner_control(&CombinerControl::new(count));
        assert!(matches!(
            result,
            Err(CombinerError::Config(ConfigError::StageCount(c))) if c == count
        ));
    }
    assert!(mock.get_writes().is_empty());
}

// --- Final combiner ---

#[test]
fn test_final_combiner0_just_r0() {
    let (mut driver, mock) = create_driver();
    driver
        .set_final_combiner0_just(FinalInput::color(CombinerSource::R0))
        .unwrap();

    let word = mock
        .last_write_to(methods::SET_COMBINER_SPECULAR_FOG_CW0)
        .unwrap();
    assert_eq!(word, 12);
    let reg = SpecularFogCw0Reg::from_raw(word);
    assert_eq!(reg.source(Lane::D), CombinerSource::R0);
    assert!(!reg.invert(Lane::D));
}

#[test]
fn test_final_combiner1_just_r0_alpha() {
    let (mut driver, mock) = create_driver();
    driver
        .set_final_combiner1_just(FinalInput::alpha(CombinerSource::R0))
        .unwrap();
    assert_eq!(
        mock.last_write_to(methods::SET_COMBINER_SPECULAR_FOG_CW1),
        Some((12 | 1 << 4) << 8)
    );
}

#[test]
fn test_final_combiner1_flags() {
    let (mut driver, mock) = create_driver();
    driver
        .set_final_combiner1(&FinalCombiner1 {
            e: FinalInput::color(CombinerSource::Fog).inverted(),
            specular_add_invert_r0: true,
            specular_add_invert_v1: true,
            specular_clamp: true,
            ..FinalCombiner1::default()
        })
        .unwrap();

    let word = mock
        .last_write_to(methods::SET_COMBINER_SPECULAR_FOG_CW1)
        .unwrap();
    assert_eq!(word >> 24, 3 | 1 << 5);
    assert_eq!(word & 0xFF, (1 << 5) | (1 << 6) | (1 << 7));
    assert_eq!(word & methods::SPECULAR_FOG_CW1_SPECULAR_ADD_INVERT_R12, 0);
}

#[test]
fn test_final_combiner1_rejects_specular_sum() {
    for slot in [FinalSlot::E, FinalSlot::F, FinalSlot::G] {
        let (mut driver, mock) = create_driver();
        let sum = FinalInput::color(CombinerSource::SpecR0Sum);
        let mut cw1 = FinalCombiner1::default();
        match slot {
            FinalSlot::E => cw1.e = sum,
            FinalSlot::F => cw1.f = sum,
            FinalSlot::G => cw1.g = sum,
        }

        let result = driver.set_final_combiner1(&cw1);
        match result {
            Err(CombinerError::Config(err)) => {
                assert_eq!(err, ConfigError::SpecularSumInCw1(slot));
                assert!(err.is_hardware_fatal());
            }
            other => panic!("expected a refusal, got {:?}", other),
        }
        assert!(mock.get_writes().is_empty());
        assert_eq!(mock.brackets(), (0, 0));
    }
}

// --- Constants ---

#[test]
fn test_combiner_factors() {
    let (mut driver, mock) = create_driver();
    driver
        .set_combiner_factor_c0(2, Vec4::new(1.0, 0.0, 0.0, 1.0))
        .unwrap();
    driver.set_combiner_factor_c1_raw(7, 0x8040_2010).unwrap();

    assert_eq!(
        mock.get_writes(),
        vec![
            (methods::SET_COMBINER_FACTOR0 + 8, 0xFFFF_0000),
            (methods::SET_COMBINER_FACTOR1 + 28, 0x8040_2010),
        ]
    );
}

#[test]
fn test_final_combiner_factors() {
    let (mut driver, mock) = create_driver();
    driver
        .set_final_combiner_factor_c0(Vec4::new(0.0, 0.0, 1.0, 0.0))
        .unwrap();
    driver.set_final_combiner_factor_c1_raw(0x1234_5678).unwrap();

    assert_eq!(
        mock.get_writes(),
        vec![
            (methods::SET_SPECULAR_FOG_FACTOR, 0x0000_00FF),
            (methods::SET_SPECULAR_FOG_FACTOR + 4, 0x1234_5678),
        ]
    );
}

// --- Blending ---

#[test]
fn test_alpha_blend_enable() {
    let (mut driver, mock) = create_driver();
    driver.set_alpha_blend_enabled(true).unwrap();

    assert_eq!(
        mock.get_writes(),
        vec![
            (methods::SET_BLEND_ENABLE, 1),
            (methods::SET_BLEND_EQUATION, 0x8006),
            (methods::SET_BLEND_FUNC_SFACTOR, 0x0302),
            (methods::SET_BLEND_FUNC_DFACTOR, 0x0303),
        ]
    );
    assert_eq!(mock.brackets(), (1, 1));
}

#[test]
fn test_alpha_blend_disable() {
    let (mut driver, mock) = create_driver();
    driver.set_alpha_blend_enabled(false).unwrap();
    assert_eq!(mock.get_writes(), vec![(methods::SET_BLEND_ENABLE, 0)]);
}

// --- Bracketing ---

#[test]
fn test_every_call_is_one_bracket() {
    let (mut driver, mock) = create_driver();
    driver.set_combiner_control(&CombinerControl::new(1)).unwrap();
    driver
        .set_input_color_combiner(0, &StageInputs::default())
        .unwrap();
    driver.clear_output_color_combiners().unwrap();
    driver.set_final_combiner_factor_c0_raw(0).unwrap();
    assert_eq!(mock.brackets(), (4, 4));
}

#[test]
fn test_transport_error_still_closes_bracket() {
    let pb = FailingPushBuffer::default();
    let mut driver = CombinerDriver::new(pb.clone());
    let result = driver.set_alpha_blend_enabled(true);
    assert!(matches!(result, Err(CombinerError::Transport(MockError))));
    assert_eq!(*pb.state.borrow(), (1, 1));
}

// --- Presets ---

#[test]
fn test_diffuse_preset_apply() {
    let (mut driver, mock) = create_driver();
    PipelineState::diffuse().apply(&mut driver).unwrap();

    let writes = mock.get_writes();
    assert_eq!(writes[0], (methods::SET_COMBINER_CONTROL, 1));
    assert_eq!(
        mock.last_write_to(methods::SET_COMBINER_COLOR_ICW),
        Some(0x0420_0000)
    );
    assert_eq!(
        mock.last_write_to(methods::SET_COMBINER_ALPHA_ICW),
        Some(0x1420_0000)
    );
    assert_eq!(mock.last_write_to(methods::SET_COMBINER_COLOR_OCW), Some(0xC00));
    assert_eq!(mock.last_write_to(methods::SET_COMBINER_ALPHA_OCW), Some(0xC00));
    assert_eq!(
        mock.last_write_to(methods::SET_COMBINER_SPECULAR_FOG_CW0),
        Some(12)
    );
    assert_eq!(
        mock.last_write_to(methods::SET_COMBINER_SPECULAR_FOG_CW1),
        Some(0x1C00)
    );
    // control, four batch clears, four stage words, two final words
    assert_eq!(mock.brackets(), (11, 11));
}

#[test]
fn test_select_stage0_source() {
    let (mut driver, mock) = create_driver();
    driver.select_stage0_source(TextureSource::Texture0).unwrap();
    assert_eq!(
        mock.get_writes(),
        vec![
            (methods::SET_COMBINER_COLOR_ICW, 0x0820_0000),
            (methods::SET_COMBINER_ALPHA_ICW, 0x1820_0000),
        ]
    );

    mock.clear();
    driver.select_stage0_source(TextureSource::Diffuse).unwrap();
    assert_eq!(
        mock.get_writes(),
        vec![
            (methods::SET_COMBINER_COLOR_ICW, 0x0420_0000),
            (methods::SET_COMBINER_ALPHA_ICW, 0x1420_0000),
        ]
    );
}

#[test]
fn test_texture0_preset_matches_selected_source() {
    let (mut driver, mock) = create_driver();
    PipelineState::diffuse().apply(&mut driver).unwrap();
    driver.select_stage0_source(TextureSource::Texture0).unwrap();
    let rebound = mock.get_writes();

    let (mut fresh, fresh_mock) = create_driver();
    PipelineState::texture0().apply(&mut fresh).unwrap();

    for method in [
        methods::SET_COMBINER_COLOR_ICW,
        methods::SET_COMBINER_ALPHA_ICW,
        methods::SET_COMBINER_COLOR_OCW,
        methods::SET_COMBINER_SPECULAR_FOG_CW0,
        methods::SET_COMBINER_SPECULAR_FOG_CW1,
    ] {
        let last = rebound.iter().rev().find(|(m, _)| *m == method).map(|w| w.1);
        assert_eq!(last, fresh_mock.last_write_to(method), "method {:#x}", method);
    }
}
