use crate::config::FrontendConfig;

// Lexer stage: comments, statements, words

/// One statement as cut from the source, before token resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceStatement {
    /// Statement text trimmed of surrounding whitespace; inner newlines are kept
    pub text: String,
    /// Non-empty space-separated words after newline normalization
    pub words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("Input too large: {size} bytes (max: {max} bytes)")]
    InputTooLarge { size: usize, max: usize },

    #[error("Statement limit exceeded: more than {max} statements")]
    TooManyStatements { max: usize },

    #[error("Token limit exceeded: more than {max} tokens")]
    TooManyTokens { max: usize },

    #[error("Word too long in statement {statement}: {length} bytes (max: {max})")]
    WordTooLong {
        statement: usize,
        length: usize,
        max: usize,
    },
}

/// Remove `//` line comments and `/* */` block comments
///
/// A line comment stops before its newline, so line structure survives.
/// An unterminated block comment swallows the rest of the input.
pub fn strip_comments(source: &str) -> String {
    let mut output = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, chars.peek().copied()) {
            ('/', Some('/')) => {
                while let Some(&next) = chars.peek() {
                    if next == '\n' {
                        break;
                    }
                    chars.next();
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
            }
            _ => output.push(c),
        }
    }

    output
}

/// Split source into statements on `delimiter`, ignoring delimiters nested in `{ }`
///
/// The final buffer is always emitted, so the result has one more entry than
/// there are top-level delimiters. Brace balance is not checked.
pub fn split_statements(source: &str, delimiter: char) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut depth: usize = 0;

    for c in source.chars() {
        if c == delimiter && depth == 0 {
            statements.push(std::mem::take(&mut current));
            continue;
        }
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            _ => {}
        }
        current.push(c);
    }
    statements.push(current);

    statements
}

/// Replace line breaks with spaces so words on adjacent lines stay apart
pub fn normalize_newlines(statement: &str) -> String {
    statement.replace(['\n', '\r'], " ")
}

/// Split a normalized statement on single spaces, dropping the empty words
/// produced by consecutive spaces
pub fn split_words(statement: &str) -> Vec<&str> {
    statement.split(' ').filter(|word| !word.is_empty()).collect()
}

/// Run the lexer stage over a whole source
///
/// Statements without any words (including the trailing empty statement) are dropped.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str, config: &FrontendConfig) -> Result<Vec<SourceStatement>, LexError> {
    if source.len() > config.max_input_size {
        return Err(LexError::InputTooLarge {
            size: source.len(),
            max: config.max_input_size,
        });
    }

    let source = source.strip_prefix('\u{FEFF}').unwrap_or(source);
    let source = if config.strip_comments {
        strip_comments(source)
    } else {
        source.to_string()
    };

    let mut statements = Vec::new();
    let mut token_count = 0usize;

    for raw in split_statements(&source, config.delimiter) {
        let normalized = normalize_newlines(&raw);
        let words = split_words(&normalized);
        if words.is_empty() {
            continue;
        }

        if statements.len() >= config.max_statement_count {
            return Err(LexError::TooManyStatements {
                max: config.max_statement_count,
            });
        }

        token_count += words.len();
        if token_count > config.max_token_count {
            return Err(LexError::TooManyTokens {
                max: config.max_token_count,
            });
        }

        if let Some(word) = words.iter().find(|w| w.len() > config.max_word_length) {
            return Err(LexError::WordTooLong {
                statement: statements.len(),
                length: word.len(),
                max: config.max_word_length,
            });
        }

        statements.push(SourceStatement {
            text: raw.trim().to_string(),
            words: words.into_iter().map(str::to_string).collect(),
        });
    }

    tracing::debug!(statements = statements.len(), tokens = token_count, "lexed source");
    Ok(statements)
}

// Tests
