use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::OcrCipherError;
use crate::geometry::BoundingRegion;

/// A single user-perceived character.
///
/// Construction enforces exactly one grapheme cluster, so multi-byte and
/// composed sequences count as one character while `"Hi"` is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character(String);

impl Character {
    pub fn new(text: impl Into<String>) -> crate::error::Result<Self> {
        let text = text.into();
        let graphemes = text.graphemes(true).count();
        if graphemes != 1 {
            return Err(OcrCipherError::validation(format!(
                "character must be exactly one grapheme, got {graphemes} in {text:?}"
            )));
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One recognized (or enciphered) character paired with its bounds.
///
/// Immutable after construction; the cipher stage produces a new value per
/// input, replacing only the character.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionalCharacter {
    character: Character,
    region: BoundingRegion,
}

impl PositionalCharacter {
    pub fn new(character: Character, region: BoundingRegion) -> Self {
        Self { character, region }
    }

    /// Convenience constructor validating the character text in one step.
    pub fn from_text(text: &str, region: BoundingRegion) -> crate::error::Result<Self> {
        Ok(Self::new(Character::new(text)?, region))
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn region(&self) -> &BoundingRegion {
        &self.region
    }

    /// Same region, different character. Used by cipher stages.
    pub fn with_character(&self, character: Character) -> Self {
        Self {
            character,
            region: self.region,
        }
    }
}

/// Ordered sequence of positional characters, in OCR emission order.
///
/// The order carries no meaning but is preserved end to end: later draws
/// overlap earlier ones when regions intersect.
pub type PositionalCharacterSet = Vec<PositionalCharacter>;
