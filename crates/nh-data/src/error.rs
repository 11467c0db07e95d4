//! Lookup errors for the static tables

use thiserror::Error;

/// A table index outside the valid range.
///
/// Raised before any table access, so an out-of-range index never reaches
/// the underlying array.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("monster index {index} out of range (0..{max})")]
    MonsterOutOfRange { index: i64, max: usize },

    #[error("monster class letter {mlet} out of range (1..{max})")]
    ClassOutOfRange { mlet: i64, max: usize },

    #[error("map symbol index {index} out of range (0..{max})")]
    SymbolOutOfRange { index: i64, max: usize },

    #[error("glyph {glyph} out of range (0..={max})")]
    GlyphOutOfRange { glyph: i64, max: i32 },

    #[error("invalid character string: {0:?}")]
    BadCharacter(String),
}
