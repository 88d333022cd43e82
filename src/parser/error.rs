use crate::config::ConfigError;
use crate::lexer::LexError;
use crate::token::TokenCategory;

// Parse error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("Unclassified statement {index} (leading code {}): \"{text}\"", describe_code(.code))]
    UnclassifiedStatement {
        index: usize,
        text: String,
        code: Option<i64>,
    },

    #[error("Malformed token '{word}': {category} code range exhausted")]
    MalformedToken {
        word: String,
        category: TokenCategory,
    },

    #[error("Statement {index} has no operand after its keyword: \"{text}\"")]
    MissingOperand { index: usize, text: String },

    #[error("AST node limit exceeded (max: {max}). File is too complex.")]
    NodeLimit { max: usize },

    #[error(transparent)]
    Lex(#[from] LexError),
}

impl ParseError {
    pub(crate) fn unclassified(index: usize, text: &str, code: Option<i64>) -> Self {
        Self::UnclassifiedStatement {
            index,
            text: text.to_string(),
            code,
        }
    }
}

fn describe_code(code: &Option<i64>) -> String {
    code.map_or_else(|| "none".to_string(), |c| c.to_string())
}

/// Failure of a whole front end run, keeping I/O apart from parse errors
#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    #[error("Cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
