//! WebAssembly text lowering. Produces a `(module ...)` S-expression.
//!
//! ## Lowering Strategy
//!
//! 1. **Types**: every source type becomes `i64` (see `types`).
//! 2. **Locals**: identifiers read with `get_local`, declarations and
//!    assignments write with `set_local`.
//! 3. **Builtins**: `add64`, `sub64`, `mul64`, `gt64` become inline opcodes;
//!    any other call is a `call` by name.
//! 4. **Functions**: the return variable is a shadowing local that is
//!    returned explicitly after the body.
//! 5. **Switch**: only two-way dispatch. The value case becomes the `then`
//!    arm of an `i64.eq` test, the default case the `else` arm.

pub mod builtins;
pub mod types;


use tracing::{debug, info, trace};

use super::Lowering;
use crate::ast::{
    Assignment, Block, FunctionCall, FunctionDefinition, Literal, LiteralKind, Statement, Switch,
    VariableDeclaration,
};
use crate::diagnostic::{Diagnostic, Violation};
use crate::writer::IndentedWriter;

use types::lower_type;

/// WebAssembly text backend.
#[derive(Clone, Debug)]
pub struct WasmLowering {
    indent_width: usize,
}

impl Default for WasmLowering {
    fn default() -> Self {
        Self { indent_width: 2 }
    }
}

impl WasmLowering {
    pub fn new(indent_width: usize) -> Self {
        Self { indent_width }
    }
}

impl Lowering for WasmLowering {
    fn target_name(&self) -> &str {
        "wasm"
    }

    fn lower(&self, block: &Block) -> Result<String, Diagnostic> {
        let output = Generator::default().module(block)?;
        info!(lines = output.line_count(), "lowered module");
        Ok(output.format(self.indent_width))
    }
}

/// Tree walker for one translation. Owns the output until it is rendered.
#[derive(Default)]
struct Generator {
    output: IndentedWriter,
}

impl Generator {
    fn module(mut self, block: &Block) -> Result<IndentedWriter, Diagnostic> {
        let entry_depth = self.output.depth();
        self.output.add_line("(module");
        self.output.indent();
        self.visit_statements(block)?;
        self.output.unindent()?;
        self.output.add_line(")");

        let depth = self.output.depth();
        if depth != entry_depth {
            return Err(Diagnostic::new(
                Violation::UnbalancedIndentation(depth),
                block.span,
            ));
        }
        Ok(self.output)
    }

    fn visit_statements(&mut self, block: &Block) -> Result<(), Diagnostic> {
        for statement in &block.statements {
            self.output.new_line();
            self.visit(statement)?;
        }
        Ok(())
    }

    /// Every node leaves the indentation depth where it found it.
    fn visit(&mut self, statement: &Statement) -> Result<(), Diagnostic> {
        trace!(kind = statement.kind_name(), "visit");
        let depth = self.output.depth();
        self.dispatch(statement)?;
        debug_assert_eq!(
            self.output.depth(),
            depth,
            "{} changed the indentation depth",
            statement.kind_name()
        );
        Ok(())
    }

    fn dispatch(&mut self, statement: &Statement) -> Result<(), Diagnostic> {
        match statement {
            Statement::Block(block) => self.block(block),
            Statement::Literal(literal) => self.literal(literal),
            Statement::Identifier(identifier) => {
                self.output.add(&format!("(get_local ${})", identifier.name));
                Ok(())
            }
            Statement::VariableDeclaration(decl) => self.variable_declaration(decl),
            Statement::Assignment(assignment) => self.assignment(assignment),
            Statement::FunctionDefinition(def) => self.function_definition(def),
            Statement::FunctionCall(call) => self.function_call(call),
            Statement::Switch(switch) => self.switch(switch),
            Statement::Instruction(instr) => Err(Diagnostic::new(Violation::Instruction, instr.span)
                .with_note(format!("found `{}`", instr.instruction))),
            Statement::FunctionalInstruction(instr) => {
                Err(Diagnostic::new(Violation::FunctionalInstruction, instr.span)
                    .with_note(format!("found `{}`", instr.instruction)))
            }
            Statement::StackAssignment(assignment) => {
                Err(Diagnostic::new(Violation::StackAssignment, assignment.span)
                    .with_note(format!("target `{}`", assignment.variable_name.name)))
            }
            Statement::Label(label) => Err(Diagnostic::new(Violation::Label, label.span)
                .with_note(format!("label `{}`", label.name))),
        }
    }

    /// `(<head>` on the current line, operands one per line below it.
    fn open_form(&mut self, head: &str) {
        self.output.add(&format!("({}", head));
        self.output.indent();
    }

    fn close_form(&mut self) -> Result<(), Diagnostic> {
        self.output.unindent()?;
        self.output.add(")");
        Ok(())
    }

    fn operands(&mut self, operands: &[Statement]) -> Result<(), Diagnostic> {
        for operand in operands {
            self.output.new_line();
            self.visit(operand)?;
        }
        Ok(())
    }

    fn block(&mut self, block: &Block) -> Result<(), Diagnostic> {
        self.open_form("block");
        self.visit_statements(block)?;
        self.close_form()
    }

    fn literal(&mut self, literal: &Literal) -> Result<(), Diagnostic> {
        let value = match literal.kind {
            LiteralKind::Number => literal.value.as_str(),
            LiteralKind::Bool => match literal.value.as_str() {
                "true" => "1",
                "false" => "0",
                other => {
                    return Err(Diagnostic::new(
                        Violation::BooleanValue(other.to_string()),
                        literal.span,
                    ))
                }
            },
            LiteralKind::String => {
                return Err(Diagnostic::new(Violation::StringLiteral, literal.span)
                    .with_note(format!("found \"{}\"", literal.value)))
            }
        };
        let ty = lower_type(&literal.ty, literal.span)?;
        self.output.add(&format!("({}.const {})", ty, value));
        Ok(())
    }

    /// `(set_local $name` value `)` on lines of its own.
    fn set_local(&mut self, name: &str, value: &Statement) -> Result<(), Diagnostic> {
        self.output.add_line(&format!("(set_local ${}", name));
        self.output.indent();
        self.visit(value)?;
        self.close_form()?;
        self.output.new_line();
        Ok(())
    }

    fn variable_declaration(&mut self, decl: &VariableDeclaration) -> Result<(), Diagnostic> {
        let [variable] = decl.variables.as_slice() else {
            return Err(Diagnostic::new(
                Violation::TupleDeclaration(decl.variables.len()),
                decl.span,
            ));
        };
        let ty = lower_type(&variable.ty, variable.span)?;
        self.output.add_line(&format!("(local ${} {})", variable.name, ty));
        if let Some(value) = &decl.value {
            self.set_local(&variable.name, value)?;
        }
        Ok(())
    }

    fn assignment(&mut self, assignment: &Assignment) -> Result<(), Diagnostic> {
        self.set_local(&assignment.variable_name.name, &assignment.value)
    }

    fn function_definition(&mut self, def: &FunctionDefinition) -> Result<(), Diagnostic> {
        if def.returns.len() > 1 {
            return Err(Diagnostic::new(
                Violation::MultipleReturns {
                    name: def.name.clone(),
                    count: def.returns.len(),
                },
                def.span,
            ));
        }
        debug!(
            name = %def.name,
            params = def.arguments.len(),
            returns = def.returns.len(),
            "lowering function"
        );

        self.output.new_line();
        self.output.add_line(&format!("(func ${}", def.name));
        self.output.indent();
        for argument in &def.arguments {
            let ty = lower_type(&argument.ty, argument.span)?;
            self.output.add_line(&format!("(param ${} {})", argument.name, ty));
        }
        let result = def.returns.first();
        if let Some(ret) = result {
            let ty = lower_type(&ret.ty, ret.span)?;
            self.output.add_line(&format!("(result {})", ty));
            self.output.add_line(&format!("(local ${} {})", ret.name, ty));
        }

        self.visit_statements(&def.body)?;

        if let Some(ret) = result {
            self.output.add_line(&format!("(return (get_local ${}))", ret.name));
        }
        self.output.unindent()?;
        self.output.add_line(")");
        Ok(())
    }

    fn function_call(&mut self, call: &FunctionCall) -> Result<(), Diagnostic> {
        if let Some(builtin) = builtins::resolve(call)? {
            debug!(name = builtin.name, opcode = builtin.opcode, "inlined builtin");
            self.open_form(builtin.opcode);
        } else {
            self.open_form(&format!("call ${}", call.function_name.name));
        }
        self.operands(&call.arguments)?;
        self.close_form()
    }

    fn switch(&mut self, switch: &Switch) -> Result<(), Diagnostic> {
        match switch.cases.len() {
            0 => return Err(Diagnostic::new(Violation::EmptySwitch, switch.span)),
            1 | 2 => {}
            n => return Err(Diagnostic::new(Violation::TooManyCases(n), switch.span)),
        }
        let defaults = switch.cases.iter().filter(|c| c.is_default()).count();
        if defaults > 1 {
            return Err(Diagnostic::new(Violation::DuplicateDefaultCase, switch.span));
        }
        let (Some(default_case), value_case) = (
            switch.cases.iter().find(|c| c.is_default()),
            switch.cases.iter().find_map(|c| c.value.as_ref().map(|v| (v, c))),
        ) else {
            return Err(Diagnostic::new(Violation::MissingDefaultCase, switch.span));
        };

        // Arms are statements, so unlike `(if (result i64)` the form has no result type.
        self.output.add_line("(if");
        self.output.indent();

        self.open_form("i64.eq");
        self.output.new_line();
        self.visit(&switch.expression)?;
        self.output.new_line();
        match value_case {
            Some((value, _)) => self.literal(value)?,
            // Default-only switch: compare the expression with itself.
            None => self.visit(&switch.expression)?,
        }
        self.close_form()?;

        let then_body = value_case.map_or(&default_case.body, |(_, case)| &case.body);
        self.output.new_line();
        self.open_form("then");
        self.block(then_body)?;
        self.close_form()?;

        if value_case.is_some() {
            self.output.new_line();
            self.open_form("else");
            self.block(&default_case.body)?;
            self.close_form()?;
        }

        self.output.unindent()?;
        self.output.add_line(")");
        Ok(())
    }
}
