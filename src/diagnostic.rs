use thiserror::Error;

use crate::span::Span;

/// Internal-invariant violations raised by the generators.
///
/// Every variant signals a defect upstream (parser, earlier lowering pass)
/// or a construct the generator does not cover yet. None is recoverable.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("Instructions are not supported in Julia.")]
    Instruction,
    #[error("Functional instructions are not supported in Julia.")]
    FunctionalInstruction,
    #[error("Assignment from stack is not supported in Julia.")]
    StackAssignment,
    #[error("Labels are not supported in Julia.")]
    Label,
    #[error("Non-number literals not supported.")]
    StringLiteral,
    #[error("Boolean literal must be `true` or `false`, found `{0}`.")]
    BooleanValue(String),
    #[error("Only Julia input is supported: missing type.")]
    EmptyType,
    #[error("Type ({0}) not supported yet.")]
    UnsupportedType(String),
    #[error("Tuples not supported yet: declaration binds {0} variables.")]
    TupleDeclaration(usize),
    #[error("Multiple return values not supported yet: function `{name}` returns {count} values.")]
    MultipleReturns { name: String, count: usize },
    #[error("Builtin `{name}` expects {expected} arguments, found {found}.")]
    BuiltinArity {
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("Switch has no cases.")]
    EmptySwitch,
    #[error("Switch has {0} cases; only two-way switches are supported.")]
    TooManyCases(usize),
    #[error("Switch has no default case.")]
    MissingDefaultCase,
    #[error("Switch has more than one default case.")]
    DuplicateDefaultCase,
    #[error("Indentation dropped below zero.")]
    IndentationUnderflow,
    #[error("Indentation is {0} after the module was closed.")]
    UnbalancedIndentation(usize),
}

/// A violation located at the node that triggered it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub violation: Violation,
    pub span: Span,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn new(violation: Violation, span: Span) -> Self {
        Self {
            violation,
            span,
            notes: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: String) -> Self {
        self.notes.push(note);
        self
    }

    pub fn message(&self) -> String {
        self.violation.to_string()
    }

    /// Render the diagnostic to stderr using ariadne, labelled in `source`.
    pub fn render(&self, filename: &str, source: &str) {
        let labelled = !self.span.is_dummy()
            && self.span.start <= self.span.end
            && self.span.end as usize <= source.len();
        self.eprint(filename, source, labelled);
    }

    /// Render without source text, for trees that came without their source.
    pub fn render_plain(&self, filename: &str) {
        self.eprint(filename, "", false);
    }

    fn eprint(&self, filename: &str, source: &str, with_label: bool) {
        use ariadne::{Color, Label, Report, ReportKind, Source};

        let message = self.message();
        let offset = if with_label { self.span.start as usize } else { 0 };
        let mut report = Report::build(ReportKind::Error, filename, offset)
            .with_message(&message);
        if with_label {
            report = report.with_label(
                Label::new((filename, self.span.range()))
                    .with_message(&message)
                    .with_color(Color::Red),
            );
        }
        for note in &self.notes {
            report = report.with_note(note);
        }
        if !with_label && !self.span.is_dummy() {
            report = report.with_note(format!("at bytes {}..{}", self.span.start, self.span.end));
        }
        report = report.with_help("internal invariant violated; the input must be fixed upstream");

        if let Err(e) = report
            .finish()
            .eprint((filename, Source::from(source)))
        {
            eprintln!("error: {} ({})", message, e);
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.span.is_dummy() {
            write!(f, "{}", self.violation)
        } else {
            write!(
                f,
                "{} (at {}..{})",
                self.violation, self.span.start, self.span.end
            )
        }
    }
}

impl std::error::Error for Diagnostic {}
