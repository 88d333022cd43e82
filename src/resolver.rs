use crate::parser::ParseError;
use crate::string_storage::StringStorage;
use crate::token::{Token, TokenCategory, WordShape, lookup_static};

/// Assigns token codes for one parse run
///
/// Static words map to their table index. Every other word takes a code from
/// its category's range: numeric literals, references and identifiers get the
/// next counter value on each occurrence, while punctuation is ranked by first
/// appearance so a repeated symbol always gets the same code.
#[derive(Debug, Default)]
pub struct Resolver {
    numeric: i64,
    reference: i64,
    identifier: i64,
    punctuation: StringStorage,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a single word
    pub fn resolve(&mut self, word: &str) -> Result<Token, ParseError> {
        if let Some(code) = lookup_static(word) {
            return Ok(Token::new(word, code));
        }

        let category = WordShape::of(word).category();
        let offset = match category {
            TokenCategory::Numeric => next(&mut self.numeric),
            TokenCategory::Reference => next(&mut self.reference),
            TokenCategory::Identifier => next(&mut self.identifier),
            // Shapes never map to Static; that arm is only here for exhaustiveness
            TokenCategory::Static | TokenCategory::Punctuation => {
                let interned = self.punctuation.intern(word);
                if interned.fresh {
                    tracing::trace!(word, rank = interned.id.rank(), "new punctuation symbol");
                }
                interned.id.rank() as i64
            }
        };

        if offset >= category.capacity() {
            return Err(ParseError::MalformedToken {
                word: word.to_string(),
                category,
            });
        }

        let code = category.base() + offset;
        tracing::trace!(word, code, %category, "resolved dynamic token");
        Ok(Token::new(word, code))
    }

    /// Resolve the words of one statement, in order
    pub fn resolve_words<S: AsRef<str>>(&mut self, words: &[S]) -> Result<Vec<Token>, ParseError> {
        words.iter().map(|word| self.resolve(word.as_ref())).collect()
    }

    /// Number of distinct punctuation words seen so far
    pub fn punctuation_count(&self) -> usize {
        self.punctuation.len()
    }
}

fn next(counter: &mut i64) -> i64 {
    let value = *counter;
    *counter += 1;
    value
}
