use nv2a_combiner::{CombinerDriver, CommandBuffer, MethodWrite, PipelineState};
use nv2a_registers::methods::method_name;

use crate::error::DumpError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Preset {
    /// Vertex diffuse color straight through
    Diffuse,
    /// Texture stage 0 straight through
    Texture0,
}

impl Preset {
    pub fn state(self) -> PipelineState {
        match self {
            Preset::Diffuse => PipelineState::diffuse(),
            Preset::Texture0 => PipelineState::texture0(),
        }
    }
}

/// Apply `preset` to an in-memory push buffer and return every method write
/// it produced, in order.
pub fn dump_preset(preset: Preset) -> Result<Vec<MethodWrite>, DumpError> {
    let mut driver = CombinerDriver::new(CommandBuffer::new());
    preset.state().apply(&mut driver)?;
    let writes = driver.into_inner().writes()?;
    log::info!("{:?}: {} method writes", preset, writes.len());
    Ok(writes)
}

/// `0x1e60 SET_COMBINER_CONTROL = 0x00000001`, with `[n]` for stage arrays.
pub fn format_write(write: &MethodWrite) -> String {
    let name = match method_name(write.method) {
        Some((name, Some(stage))) => format!("{}[{}]", name, stage),
        Some((name, None)) => name.to_string(),
        None => "<unknown>".to_string(),
    };
    format!("{:#06x} {} = {:#010x}", write.method, name, write.value)
}
