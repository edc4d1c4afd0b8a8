//! The block cipher seam. XTS only ever needs a raw single-block transform (no
//! chaining, no padding) under each of its two sub-keys, so that is all
//! [BlockCipher] asks for. [Aes] is the implementation shipped with the crate.

use std::fmt;

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};

use crate::xts::error::{Error, Result};

/// Cipher block width in bytes. Fixed at 128 bits by the GF(2^128) tweak arithmetic.
pub const BLOCK_SIZE: usize = 16;

/// A single cipher block (also the width of a tweak).
pub type Block = [u8; BLOCK_SIZE];

/// A 128-bit block cipher keyed with one XTS sub-key.
///
/// Implementations must be usable from several threads at once: sectors are
/// processed in parallel against a shared instance.
pub trait BlockCipher: Sized + Send + Sync {
    /// Builds the cipher from one sub-key. Returns
    /// [InvalidKeyLength](crate::Error::InvalidKeyLength) if the cipher does not accept
    /// keys of this length.
    fn new(key: &[u8]) -> Result<Self>;

    /// Encrypts exactly one block in place.
    fn encrypt_block(&self, block: &mut Block);

    /// Decrypts exactly one block in place.
    fn decrypt_block(&self, block: &mut Block);
}

/// AES with a 128, 192, or 256-bit key, chosen by the length of the sub-key.
#[derive(Clone)]
pub enum Aes {
    Aes128(aes::Aes128),
    Aes192(aes::Aes192),
    Aes256(aes::Aes256),
}

impl BlockCipher for Aes {
    fn new(key: &[u8]) -> Result<Self> {
        // GenericArray::from_slice is length-checked by the match
        Ok(match key.len() {
            16 => Self::Aes128(aes::Aes128::new(GenericArray::from_slice(key))),
            24 => Self::Aes192(aes::Aes192::new(GenericArray::from_slice(key))),
            32 => Self::Aes256(aes::Aes256::new(GenericArray::from_slice(key))),
            len => return Err(Error::InvalidKeyLength { len }),
        })
    }

    #[inline(always)]
    fn encrypt_block(&self, block: &mut Block) {
        let block = GenericArray::from_mut_slice(block);
        match self {
            Self::Aes128(c) => c.encrypt_block(block),
            Self::Aes192(c) => c.encrypt_block(block),
            Self::Aes256(c) => c.encrypt_block(block),
        }
    }

    #[inline(always)]
    fn decrypt_block(&self, block: &mut Block) {
        let block = GenericArray::from_mut_slice(block);
        match self {
            Self::Aes128(c) => c.decrypt_block(block),
            Self::Aes192(c) => c.decrypt_block(block),
            Self::Aes256(c) => c.decrypt_block(block),
        }
    }
}

// variant name only, no round keys
impl fmt::Debug for Aes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Aes128(_) => "Aes128",
            Self::Aes192(_) => "Aes192",
            Self::Aes256(_) => "Aes256",
        };
        f.write_str(name)
    }
}
