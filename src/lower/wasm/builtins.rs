//! Builtin table: call names that lower straight to a target opcode.

use crate::ast::FunctionCall;
use crate::diagnostic::{Diagnostic, Violation};

/// An intrinsic operation recognized by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Builtin {
    pub name: &'static str,
    pub arity: usize,
    pub opcode: &'static str,
}

pub const BUILTINS: &[Builtin] = &[
    Builtin {
        name: "add64",
        arity: 2,
        opcode: "i64.add",
    },
    Builtin {
        name: "sub64",
        arity: 2,
        opcode: "i64.sub",
    },
    Builtin {
        name: "mul64",
        arity: 2,
        opcode: "i64.mul",
    },
    Builtin {
        name: "gt64",
        arity: 2,
        opcode: "i64.gt_u",
    },
];

pub fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|b| b.name == name)
}

/// Resolve a call against the table.
///
/// `Ok(None)` means the call is an ordinary function call. A builtin
/// name with the wrong number of arguments is a violation.
pub fn resolve(call: &FunctionCall) -> Result<Option<&'static Builtin>, Diagnostic> {
    let Some(builtin) = lookup(&call.function_name.name) else {
        return Ok(None);
    };
    if call.arguments.len() != builtin.arity {
        return Err(Diagnostic::new(
            Violation::BuiltinArity {
                name: builtin.name.to_string(),
                expected: builtin.arity,
                found: call.arguments.len(),
            },
            call.span,
        ));
    }
    Ok(Some(builtin))
}
