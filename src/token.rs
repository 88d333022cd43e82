use bitflags::bitflags;

/// Reserved words and symbols; a word's index in this table is its token code
pub const STATIC_TOKENS: [&str; 26] = [
    // Declarations (0..3)
    "let", "const", "var",
    // Process keywords (3..5)
    "routine", "gate",
    // Gate names (5..20)
    "H", "PX", "PY", "PZ", "CNT", "CY", "ID", "TOF", "RX", "RY", "RZ", "S", "T", "SDG", "TDG",
    // Structural symbols (20..26)
    ":", "{", "}", ",", "=", ";",
];

/// Width of every dynamic code range
pub const CATEGORY_WIDTH: i64 = 1_000_000;

pub const NUMERIC_BASE: i64 = CATEGORY_WIDTH;
pub const REFERENCE_BASE: i64 = 2 * CATEGORY_WIDTH;
pub const IDENTIFIER_BASE: i64 = 3 * CATEGORY_WIDTH;
pub const PUNCTUATION_BASE: i64 = 4 * CATEGORY_WIDTH;

/// Sigil that marks a reference name (`$q`)
pub const REFERENCE_SIGIL: char = '$';

/// Exact lookup in the static table
pub fn lookup_static(word: &str) -> Option<i64> {
    STATIC_TOKENS
        .iter()
        .position(|reserved| *reserved == word)
        .map(|idx| idx as i64)
}

/// Code range a token belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Static,
    Numeric,
    Reference,
    Identifier,
    Punctuation,
}

impl TokenCategory {
    /// First code of the category's range
    pub fn base(self) -> i64 {
        match self {
            TokenCategory::Static => 0,
            TokenCategory::Numeric => NUMERIC_BASE,
            TokenCategory::Reference => REFERENCE_BASE,
            TokenCategory::Identifier => IDENTIFIER_BASE,
            TokenCategory::Punctuation => PUNCTUATION_BASE,
        }
    }

    /// Number of codes the category can hand out
    pub fn capacity(self) -> i64 {
        match self {
            TokenCategory::Static => STATIC_TOKENS.len() as i64,
            _ => CATEGORY_WIDTH,
        }
    }

    /// Category whose range contains `code`
    pub fn of_code(code: i64) -> Option<Self> {
        let category = match code {
            c if (0..STATIC_TOKENS.len() as i64).contains(&c) => TokenCategory::Static,
            c if (NUMERIC_BASE..REFERENCE_BASE).contains(&c) => TokenCategory::Numeric,
            c if (REFERENCE_BASE..IDENTIFIER_BASE).contains(&c) => TokenCategory::Reference,
            c if (IDENTIFIER_BASE..PUNCTUATION_BASE).contains(&c) => TokenCategory::Identifier,
            c if (PUNCTUATION_BASE..PUNCTUATION_BASE + CATEGORY_WIDTH).contains(&c) => {
                TokenCategory::Punctuation
            }
            _ => return None,
        };
        Some(category)
    }
}

impl std::fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            TokenCategory::Static => "static",
            TokenCategory::Numeric => "numeric literal",
            TokenCategory::Reference => "reference",
            TokenCategory::Identifier => "identifier",
            TokenCategory::Punctuation => "punctuation",
        };
        f.write_str(name)
    }
}

bitflags! {
    /// Patterns a dynamic word matches; several can hold at once (`42` is numeric and word-shaped)
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct WordShape: u8 {
        /// `digits` or `digits.digits`
        const NUMERIC = 1 << 0;
        /// `$` followed by word characters
        const REFERENCE = 1 << 1;
        /// word characters only
        const WORD = 1 << 2;
    }
}

impl WordShape {
    pub fn of(word: &str) -> Self {
        let mut shape = WordShape::empty();
        if is_numeric_literal(word) {
            shape |= WordShape::NUMERIC;
        }
        if word.strip_prefix(REFERENCE_SIGIL).is_some_and(is_word) {
            shape |= WordShape::REFERENCE;
        }
        if is_word(word) {
            shape |= WordShape::WORD;
        }
        shape
    }

    /// Dynamic category by priority: numeric, reference, identifier, punctuation
    pub fn category(self) -> TokenCategory {
        if self.contains(WordShape::NUMERIC) {
            TokenCategory::Numeric
        } else if self.contains(WordShape::REFERENCE) {
            TokenCategory::Reference
        } else if self.contains(WordShape::WORD) {
            TokenCategory::Identifier
        } else {
            TokenCategory::Punctuation
        }
    }
}

/// Characters that make up identifiers and reference names
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_word_char)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_numeric_literal(word: &str) -> bool {
    match word.split_once('.') {
        Some((int, frac)) => is_digits(int) && is_digits(frac),
        None => is_digits(word),
    }
}

/// A word paired with its resolved code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub code: i64,
}

impl Token {
    pub fn new(text: impl Into<String>, code: i64) -> Self {
        Self {
            text: text.into(),
            code,
        }
    }

    pub fn category(&self) -> Option<TokenCategory> {
        TokenCategory::of_code(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_lookup() {
        assert_eq!(lookup_static("let"), Some(0));
        assert_eq!(lookup_static("var"), Some(2));
        assert_eq!(lookup_static("gate"), Some(4));
        assert_eq!(lookup_static("H"), Some(5));
        assert_eq!(lookup_static("SDG"), Some(18));
        assert_eq!(lookup_static("TDG"), Some(19));
        assert_eq!(lookup_static(";"), Some(25));

        // Case-sensitive, exact match
        assert_eq!(lookup_static("Let"), None);
        assert_eq!(lookup_static("h"), None);
        assert_eq!(lookup_static("let;"), None);
    }

    #[test]
    fn test_word_shapes() {
        assert_eq!(WordShape::of("42"), WordShape::NUMERIC | WordShape::WORD);
        assert_eq!(WordShape::of("3.14"), WordShape::NUMERIC);
        assert_eq!(WordShape::of("$q"), WordShape::REFERENCE);
        assert_eq!(WordShape::of("qubit_2"), WordShape::WORD);
        assert_eq!(WordShape::of("("), WordShape::empty());

        // Incomplete fractions and bare sigils fall through
        assert_eq!(WordShape::of("3."), WordShape::empty());
        assert_eq!(WordShape::of(".5"), WordShape::empty());
        assert_eq!(WordShape::of("$"), WordShape::empty());
        assert_eq!(WordShape::of("$a.b"), WordShape::empty());
    }

    #[test]
    fn test_category_priority() {
        assert_eq!(WordShape::of("7").category(), TokenCategory::Numeric);
        assert_eq!(WordShape::of("$x").category(), TokenCategory::Reference);
        assert_eq!(WordShape::of("x7").category(), TokenCategory::Identifier);
        assert_eq!(WordShape::of("H;").category(), TokenCategory::Punctuation);
        assert_eq!(WordShape::of("").category(), TokenCategory::Punctuation);
    }

    #[test]
    fn test_ranges_are_disjoint() {
        assert!(STATIC_TOKENS.len() as i64 <= NUMERIC_BASE);
        assert_eq!(TokenCategory::of_code(25), Some(TokenCategory::Static));
        assert_eq!(TokenCategory::of_code(26), None);
        assert_eq!(TokenCategory::of_code(NUMERIC_BASE), Some(TokenCategory::Numeric));
        assert_eq!(
            TokenCategory::of_code(REFERENCE_BASE - 1),
            Some(TokenCategory::Numeric)
        );
        assert_eq!(
            TokenCategory::of_code(REFERENCE_BASE),
            Some(TokenCategory::Reference)
        );
        assert_eq!(
            TokenCategory::of_code(PUNCTUATION_BASE + CATEGORY_WIDTH - 1),
            Some(TokenCategory::Punctuation)
        );
        assert_eq!(TokenCategory::of_code(PUNCTUATION_BASE + CATEGORY_WIDTH), None);
        assert_eq!(TokenCategory::of_code(-1), None);
    }
}
