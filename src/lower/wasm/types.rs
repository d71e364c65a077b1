//! Type lowering: every source scalar collapses to the 64-bit word.
//!
//! Width and signedness are erased. An `s8` and a `u64` both become `i64`,
//! and all arithmetic on them is unsigned 64-bit.

use crate::diagnostic::{Diagnostic, Violation};
use crate::span::Span;

/// The single value type this backend emits.
pub const WORD_TYPE: &str = "i64";

/// Source type tokens the backend accepts.
pub const SUPPORTED_TYPES: [&str; 7] = ["bool", "u8", "s8", "u32", "s32", "u64", "s64"];

/// Map a source type token to the target value type.
pub fn lower_type(token: &str, span: Span) -> Result<&'static str, Diagnostic> {
    if token.is_empty() {
        return Err(Diagnostic::new(Violation::EmptyType, span));
    }
    if !SUPPORTED_TYPES.contains(&token) {
        return Err(
            Diagnostic::new(Violation::UnsupportedType(token.to_string()), span)
                .with_note(format!("supported types: {}", SUPPORTED_TYPES.join(", "))),
        );
    }
    Ok(WORD_TYPE)
}
