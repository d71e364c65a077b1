//! Syntax tree of the Julia assembly dialect, as handed over by the parser.
//!
//! The tree is read-only input to the generators. It is exchanged as JSON:
//! every statement is an object tagged with `"nodeType"`.

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// Source-level scalar type name (`bool`, `u8`, `s64`, ...).
pub type TypeToken = String;

/// Values are statements in this grammar; the alias marks expression positions.
pub type Expression = Statement;

/// A node of the syntax tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "nodeType")]
pub enum Statement {
    Block(Block),
    Literal(Literal),
    Identifier(Identifier),
    VariableDeclaration(VariableDeclaration),
    Assignment(Assignment),
    FunctionDefinition(FunctionDefinition),
    FunctionCall(FunctionCall),
    Switch(Switch),
    // Stack-dialect leftovers; the parser keeps them in one grammar.
    Instruction(Instruction),
    FunctionalInstruction(FunctionalInstruction),
    StackAssignment(StackAssignment),
    Label(Label),
}

impl Statement {
    pub fn span(&self) -> Span {
        match self {
            Statement::Block(n) => n.span,
            Statement::Literal(n) => n.span,
            Statement::Identifier(n) => n.span,
            Statement::VariableDeclaration(n) => n.span,
            Statement::Assignment(n) => n.span,
            Statement::FunctionDefinition(n) => n.span,
            Statement::FunctionCall(n) => n.span,
            Statement::Switch(n) => n.span,
            Statement::Instruction(n) => n.span,
            Statement::FunctionalInstruction(n) => n.span,
            Statement::StackAssignment(n) => n.span,
            Statement::Label(n) => n.span,
        }
    }

    /// Short variant name, used in trace output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Statement::Block(_) => "block",
            Statement::Literal(_) => "literal",
            Statement::Identifier(_) => "identifier",
            Statement::VariableDeclaration(_) => "variable declaration",
            Statement::Assignment(_) => "assignment",
            Statement::FunctionDefinition(_) => "function definition",
            Statement::FunctionCall(_) => "function call",
            Statement::Switch(_) => "switch",
            Statement::Instruction(_) => "instruction",
            Statement::FunctionalInstruction(_) => "functional instruction",
            Statement::StackAssignment(_) => "stack assignment",
            Statement::Label(_) => "label",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub statements: Vec<Statement>,
    #[serde(default)]
    pub span: Span,
}

impl Block {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self {
            statements,
            span: Span::dummy(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralKind {
    Number,
    #[serde(alias = "boolean")]
    Bool,
    String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Literal {
    pub kind: LiteralKind,
    pub value: String,
    #[serde(rename = "type", default)]
    pub ty: TypeToken,
    #[serde(default)]
    pub span: Span,
}

impl Literal {
    pub fn number(value: &str, ty: &str) -> Self {
        Self::new(LiteralKind::Number, value, ty)
    }

    pub fn boolean(value: bool) -> Self {
        Self::new(LiteralKind::Bool, if value { "true" } else { "false" }, "bool")
    }

    pub fn new(kind: LiteralKind, value: &str, ty: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
            ty: ty.to_string(),
            span: Span::dummy(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    #[serde(default)]
    pub span: Span,
}

impl Identifier {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            span: Span::dummy(),
        }
    }
}

/// A name with its declared type, as in `x:u64`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypedName {
    pub name: String,
    #[serde(rename = "type", default)]
    pub ty: TypeToken,
    #[serde(default)]
    pub span: Span,
}

impl TypedName {
    pub fn new(name: &str, ty: &str) -> Self {
        Self {
            name: name.to_string(),
            ty: ty.to_string(),
            span: Span::dummy(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub variables: Vec<TypedName>,
    /// `None` for `let x:u64` without an initializer.
    #[serde(default)]
    pub value: Option<Box<Expression>>,
    #[serde(default)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub variable_name: Identifier,
    pub value: Box<Expression>,
    #[serde(default)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<TypedName>,
    #[serde(default)]
    pub returns: Vec<TypedName>,
    pub body: Block,
    #[serde(default)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionCall {
    pub function_name: Identifier,
    #[serde(default)]
    pub arguments: Vec<Expression>,
    #[serde(default)]
    pub span: Span,
}

impl FunctionCall {
    pub fn new(name: &str, arguments: Vec<Expression>) -> Self {
        Self {
            function_name: Identifier::new(name),
            arguments,
            span: Span::dummy(),
        }
    }
}

/// One arm of a switch; `value == None` marks the default case.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Case {
    #[serde(default)]
    pub value: Option<Literal>,
    pub body: Block,
    #[serde(default)]
    pub span: Span,
}

impl Case {
    pub fn is_default(&self) -> bool {
        self.value.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Switch {
    pub expression: Box<Expression>,
    pub cases: Vec<Case>,
    #[serde(default)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub instruction: String,
    #[serde(default)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FunctionalInstruction {
    pub instruction: String,
    #[serde(default)]
    pub arguments: Vec<Expression>,
    #[serde(default)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackAssignment {
    pub variable_name: Identifier,
    #[serde(default)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    #[serde(default)]
    pub span: Span,
}
