use crate::charset::PositionalCharacterSet;
use crate::cipher::Encipherer;

/// Cipher that leaves every character unchanged.
pub struct IdentityCipher;

impl Encipherer for IdentityCipher {
    fn encipher(
        &self,
        input: &PositionalCharacterSet,
    ) -> crate::error::Result<PositionalCharacterSet> {
        Ok(input.to_vec())
    }
}
