//! Statement classification by leading token code.

use crate::token::Token;

/// Statement kinds, decided by the code of the first token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    /// `let`, `const`, `var`
    Allocation,
    /// `routine`, `gate`
    Process,
    /// Gate-name keyword (`H` through `T`)
    Expression,
    /// Continuation fragment; anything led by a later keyword, a symbol or a dynamic token
    LinePart,
    /// No classification applies; fatal to the parse
    Unknown,
}

const ALLOCATION_END: i64 = 3;
const PROCESS_END: i64 = 5;
const EXPRESSION_END: i64 = 18;

impl StatementKind {
    /// Classify a leading token code
    ///
    /// Code 18 (`SDG`) falls between the expression and line part ranges and is Unknown.
    pub fn from_code(code: i64) -> Self {
        match code {
            c if (0..ALLOCATION_END).contains(&c) => StatementKind::Allocation,
            c if (ALLOCATION_END..PROCESS_END).contains(&c) => StatementKind::Process,
            c if (PROCESS_END..EXPRESSION_END).contains(&c) => StatementKind::Expression,
            c if c > EXPRESSION_END => StatementKind::LinePart,
            _ => StatementKind::Unknown,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StatementKind::Allocation => "Allocation",
            StatementKind::Process => "Process",
            StatementKind::Expression => "Expression",
            StatementKind::LinePart => "LinePart",
            StatementKind::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for StatementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a token sequence; an empty sequence is Unknown
pub fn classify(tokens: &[Token]) -> StatementKind {
    tokens
        .first()
        .map_or(StatementKind::Unknown, |token| StatementKind::from_code(token.code))
}

/// A resolved and classified statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// Position among the non-empty statements of the source
    pub index: usize,
    pub text: String,
    pub tokens: Vec<Token>,
    pub kind: StatementKind,
}

impl Statement {
    pub fn new(index: usize, text: impl Into<String>, tokens: Vec<Token>) -> Self {
        let kind = classify(&tokens);
        Self {
            index,
            text: text.into(),
            tokens,
            kind,
        }
    }

    /// Token codes in resolution order
    pub fn codes(&self) -> Vec<i64> {
        self.tokens.iter().map(|t| t.code).collect()
    }

    /// Text of the word at `position`
    pub fn word(&self, position: usize) -> Option<&str> {
        self.tokens.get(position).map(|t| t.text.as_str())
    }
}
