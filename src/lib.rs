pub mod api;
pub mod ast;
pub mod config;
pub mod diagnostic;
pub mod lower;
pub mod span;
pub mod writer;

pub use api::{assemble, assemble_json, assemble_with_config, parse_tree, AssembleError};
pub use ast::Block;
pub use config::EmitConfig;
pub use diagnostic::{Diagnostic, Violation};
pub use lower::{available_targets, create_lowering, Lowering};
