// Front end configuration module
//
// Holds the syntax options of the statement splitter and the resource limits
// that keep pathological input from exhausting memory:
// - source size, statement count and token count
// - word length
// - AST node count
//
// All values have defaults and can be overridden via project.toml

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::token::{CATEGORY_WIDTH, REFERENCE_SIGIL, is_word_char};

/// What the AST builder does with continuation (line part) statements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinePartPolicy {
    /// Append a leaf to the most recently built node
    #[default]
    Attach,
    /// Skip the statement
    Drop,
}

/// Front end configuration with permissive defaults
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    // Syntax options
    pub delimiter: char,
    pub strip_comments: bool,
    pub line_parts: LinePartPolicy,

    // Lexer limits
    pub max_input_size: usize,      // Maximum source size in bytes
    pub max_statement_count: usize, // Maximum statements per file
    pub max_token_count: usize,     // Maximum tokens per file
    pub max_word_length: usize,     // Maximum word length in bytes

    // AST limits
    pub max_ast_nodes: usize, // Maximum nodes plus leaves per file
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            delimiter: ';',
            strip_comments: true,
            line_parts: LinePartPolicy::Attach,
            max_input_size: 10_000_000, // 10 MB
            max_statement_count: 100_000,
            max_token_count: 1_000_000,
            max_word_length: 1_000,
            max_ast_nodes: 1_000_000,
        }
    }
}

impl FrontendConfig {
    /// Create with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from project.toml, falling back to defaults
    ///
    /// Returns error only if TOML is malformed or values are invalid, not if file is missing
    pub fn from_project_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;

        let config = Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::Malformed { message, .. } => ConfigError::Malformed {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })?;
        tracing::debug!(path = %path.display(), "loaded front end configuration");
        Ok(config)
    }

    /// Parse configuration from TOML text, merging over defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let project: ProjectConfig = toml::from_str(content).map_err(|e| ConfigError::Malformed {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })?;

        let mut config = Self::default();

        if let Some(syntax) = project.syntax {
            if let Some(delimiter) = syntax.delimiter {
                let mut chars = delimiter.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => config.delimiter = c,
                    _ => return Err(ConfigError::InvalidDelimiter(delimiter)),
                }
            }
            if let Some(v) = syntax.strip_comments {
                config.strip_comments = v;
            }
            if let Some(v) = syntax.line_parts {
                config.line_parts = v;
            }
        }

        if let Some(limits) = project.limits {
            if let Some(v) = limits.max_input_size {
                config.max_input_size = v;
            }
            if let Some(v) = limits.max_statement_count {
                config.max_statement_count = v;
            }
            if let Some(v) = limits.max_token_count {
                config.max_token_count = v;
            }
            if let Some(v) = limits.max_word_length {
                config.max_word_length = v;
            }
            if let Some(v) = limits.max_ast_nodes {
                config.max_ast_nodes = v;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate that all settings are usable (positive, not absurdly large)
    pub fn validate(&self) -> Result<(), ConfigError> {
        const MAX_REASONABLE: usize = 100_000_000; // 100 MB

        // A delimiter that can appear inside a word would cut words apart
        let delimiter = self.delimiter;
        if delimiter.is_whitespace()
            || matches!(delimiter, '{' | '}' | REFERENCE_SIGIL)
            || is_word_char(delimiter)
        {
            return Err(ConfigError::InvalidDelimiter(self.delimiter.to_string()));
        }

        if self.max_input_size == 0 || self.max_input_size > MAX_REASONABLE {
            return Err(ConfigError::invalid("max_input_size", self.max_input_size));
        }

        if self.max_statement_count == 0 {
            return Err(ConfigError::invalid(
                "max_statement_count",
                self.max_statement_count,
            ));
        }

        // Every category must fit its code range even if all tokens land in it
        if self.max_token_count == 0 || self.max_token_count as i64 > CATEGORY_WIDTH {
            return Err(ConfigError::invalid("max_token_count", self.max_token_count));
        }

        if self.max_word_length == 0 || self.max_word_length > 100_000 {
            return Err(ConfigError::invalid("max_word_length", self.max_word_length));
        }

        if self.max_ast_nodes == 0 || self.max_ast_nodes > 10_000_000 {
            return Err(ConfigError::invalid("max_ast_nodes", self.max_ast_nodes));
        }

        Ok(())
    }
}

/// TOML configuration structures for deserialization
#[derive(Debug, Deserialize)]
struct ProjectConfig {
    syntax: Option<SyntaxConfig>,
    limits: Option<LimitsConfig>,
}

#[derive(Debug, Deserialize)]
struct SyntaxConfig {
    delimiter: Option<String>,
    strip_comments: Option<bool>,
    line_parts: Option<LinePartPolicy>,
}

#[derive(Debug, Deserialize)]
struct LimitsConfig {
    max_input_size: Option<usize>,
    max_statement_count: Option<usize>,
    max_token_count: Option<usize>,
    max_word_length: Option<usize>,
    max_ast_nodes: Option<usize>,
}

/// Error type for configuration loading and validation
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Malformed { path: String, message: String },

    #[error("Invalid delimiter '{0}' (must be a single non-whitespace, non-brace character)")]
    InvalidDelimiter(String),

    #[error("Invalid limit '{name}': {value} (must be positive and reasonable)")]
    InvalidLimit { name: &'static str, value: usize },
}

impl ConfigError {
    fn invalid(name: &'static str, value: usize) -> Self {
        Self::InvalidLimit { name, value }
    }
}
