//! Types produced by the splitter and builder and consumed by wiring.

use serde::Serialize;

/// Control operator separating or relating consecutive commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// `|` — pipe output of the previous command into the next
    Pipe,
    /// `;` — run next unconditionally
    Semi,
    /// `&&` — run next only if previous succeeded
    And,
    /// `*` — glob/multiply marker
    Star,
}

impl Operator {
    /// The operator's shell syntax.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Pipe => "|",
            Operator::Semi => ";",
            Operator::And => "&&",
            Operator::Star => "*",
        }
    }

    /// Recognize a fragment that consists of exactly one operator.
    pub fn from_fragment(text: &str) -> Option<Self> {
        match text {
            "|" => Some(Operator::Pipe),
            ";" => Some(Operator::Semi),
            "&&" => Some(Operator::And),
            "*" => Some(Operator::Star),
            _ => None,
        }
    }
}

/// A maximal piece of compound input: either command text or one operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Trimmed command text. May be empty at operator boundaries.
    Command(String),
    Operator(Operator),
}

/// A single command descriptor.
///
/// Operators are represented as commands too, so a compound input becomes
/// one uniform ordered list. `output` is always `Some` once the list has
/// been through [`wire`](super::wire::wire).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    /// Opaque unique token, doubling as this command's stream identifier.
    pub id: String,
    /// First token of the fragment, or the operator text.
    pub name: String,
    /// Space-joined tokens between the name and the first redirection.
    pub args: String,
    /// Literal `<` target, or the id of the upstream command in a pipe.
    pub input: Option<String>,
    /// Literal `>` target, or this command's own id.
    pub output: Option<String>,
    /// Set for operator entities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<Operator>,
}

impl Command {
    /// True when this entity names a command: neither an operator nor an
    /// empty fragment.
    pub fn is_real(&self) -> bool {
        self.operator.is_none() && !self.name.is_empty()
    }

    /// True when this entity is the given operator.
    pub fn is_operator(&self, op: Operator) -> bool {
        self.operator == Some(op)
    }
}
