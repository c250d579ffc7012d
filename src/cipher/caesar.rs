use crate::charset::{Character, PositionalCharacterSet};
use crate::cipher::Encipherer;

/// Rotates ASCII letters within their case by a fixed shift.
///
/// Non-letters (digits, punctuation — OCR emits those too) pass through
/// unchanged.
pub struct CaesarCipher {
    shift: i32,
}

impl CaesarCipher {
    pub fn new(shift: i32) -> Self {
        Self { shift }
    }

    fn rotate(&self, ch: char) -> char {
        let offset = if ch.is_ascii_uppercase() {
            b'A'
        } else if ch.is_ascii_lowercase() {
            b'a'
        } else {
            return ch;
        };

        let index = ch as u8 - offset;
        let rotated = (index as i32 + self.shift).rem_euclid(26) as u8;
        (offset + rotated) as char
    }
}

impl Encipherer for CaesarCipher {
    fn encipher(
        &self,
        input: &PositionalCharacterSet,
    ) -> crate::error::Result<PositionalCharacterSet> {
        input
            .iter()
            .map(|pc| {
                let rotated: String = pc
                    .character()
                    .as_str()
                    .chars()
                    .map(|ch| self.rotate(ch))
                    .collect();
                Ok(pc.with_character(Character::new(rotated)?))
            })
            .collect()
    }
}
