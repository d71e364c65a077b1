//! Lowering: consumes a Julia `Block` and produces target module text.
//!
//! Each target implements `Lowering`. The compiler driver picks one by
//! name through `create_lowering`.

pub mod wasm;

use crate::ast::Block;
use crate::config::EmitConfig;
use crate::diagnostic::Diagnostic;

pub use wasm::WasmLowering;

/// Lowers a top-level block into a complete module.
pub trait Lowering: Send + Sync {
    /// The target name (e.g. "wasm").
    fn target_name(&self) -> &str;

    /// Translate the whole block. Any violation fails the whole unit.
    fn lower(&self, block: &Block) -> Result<String, Diagnostic>;
}

/// Target names accepted by `create_lowering`.
pub fn available_targets() -> &'static [&'static str] {
    &["wasm", "wast"]
}

/// Create a lowering backend for the configured target.
pub fn create_lowering(config: &EmitConfig) -> Option<Box<dyn Lowering>> {
    match config.target.as_str() {
        "wasm" | "wast" => Some(Box::new(WasmLowering::new(config.indent_width))),
        _ => None,
    }
}
