use thiserror::Error;

use crate::ast::Block;
use crate::config::EmitConfig;
use crate::diagnostic::Diagnostic;
use crate::lower::{available_targets, create_lowering, Lowering, WasmLowering};


/// Failure of a whole translation unit.
#[derive(Debug, Error)]
pub enum AssembleError {
    #[error("unknown target '{}' (available targets: {})", .0, available_targets().join(", "))]
    UnknownTarget(String),
    #[error("invalid syntax tree: {0}")]
    Tree(#[from] serde_json::Error),
    #[error("{0}")]
    Violation(#[from] Diagnostic),
}

impl AssembleError {
    /// The located violation, if the tree itself was at fault.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            AssembleError::Violation(d) => Some(d),
            _ => None,
        }
    }
}

/// Translate a top-level block to WebAssembly text with default options.
pub fn assemble(block: &Block) -> Result<String, Diagnostic> {
    WasmLowering::default().lower(block)
}

/// Translate a top-level block with the configured backend.
pub fn assemble_with_config(block: &Block, config: &EmitConfig) -> Result<String, AssembleError> {
    let lowering = create_lowering(config)
        .ok_or_else(|| AssembleError::UnknownTarget(config.target.clone()))?;
    Ok(lowering.lower(block)?)
}

/// Decode a syntax tree from its JSON exchange form.
pub fn parse_tree(json: &str) -> Result<Block, serde_json::Error> {
    serde_json::from_str(json)
}

/// Decode and translate a JSON syntax tree.
pub fn assemble_json(json: &str, config: &EmitConfig) -> Result<String, AssembleError> {
    let block = parse_tree(json)?;
    assemble_with_config(&block, config)
}
