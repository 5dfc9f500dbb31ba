//! Lexical tokens as the token listing sees them.

/// A token with its human-readable kind name and the literal source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: String,
    pub literal: String,
}

impl Token {
    pub fn new(kind: impl Into<String>, literal: impl Into<String>) -> Self {
        Token {
            kind: kind.into(),
            literal: literal.into(),
        }
    }

    /// Raw literal for punctuation and keywords, `kind(literal)` otherwise.
    pub fn display(&self) -> String {
        if self.kind == self.literal {
            self.literal.clone()
        } else {
            format!("{}({})", self.kind, self.literal)
        }
    }
}
