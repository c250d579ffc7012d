pub mod caesar;
pub mod identity;

pub use caesar::CaesarCipher;
pub use identity::IdentityCipher;

use crate::charset::PositionalCharacterSet;

/// Substitutes the character of every entry, preserving bounds and order.
pub trait Encipherer {
    fn encipher(
        &self,
        input: &PositionalCharacterSet,
    ) -> crate::error::Result<PositionalCharacterSet>;
}
