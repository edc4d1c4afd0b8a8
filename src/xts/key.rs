//! Defines the [`Key`] struct, which holds a valid XTS-AES key of 256, 384, or 512 bits.
//! An XTS key is two AES keys of equal size back to back: the data key (K1) followed by
//! the tweak key (K2). Keys can be randomly generated or constructed from an existing
//! byte slice.

use std::array;

use aes::cipher::KeyInit;
use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::xts::cipher::Aes;
use crate::xts::error::{Error, Result};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum KeyBytes {
    K256([u8; 32]),
    K384([u8; 48]),
    K512([u8; 64]),
}

/// Contains a valid XTS-AES key. Can be instantiated with a random key, or built from a
/// slice of bytes that is 32, 48, or 64 bytes long (XTS-AES-128, -192, and -256).
/// A `Key` is all that is needed to instantiate an [Xts](crate::Xts) over AES.
///
/// ## Examples
/// ```
/// # fn main() -> xtsp::Result<()> {
/// use xtsp::Key;
///
/// // Instantiate random keys:
/// let rk_256 = Key::rand_key_256()?;
/// let rk_512 = Key::rand_key_512()?;
/// assert_ne!(rk_256.as_bytes(), &rk_512.as_bytes()[..32]);
///
/// // Instantiate a key from a slice (K1 = 0x00..0x0f, K2 = 0x10..0x1f):
/// let key_bytes: Vec<u8> = (0u8..32).collect();
/// let key = Key::try_from_slice(&key_bytes)?;
///
/// let (data_key, tweak_key) = key.halves();
/// assert_eq!(data_key, &key_bytes[..16]);
/// assert_eq!(tweak_key, &key_bytes[16..]);
///
/// // Anything other than 32, 48, or 64 bytes returns an InvalidKeyLength error:
/// assert!(Key::try_from_slice(&key_bytes[..16]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Key {
    bytes: KeyBytes,
}

impl Key {
    /// Generate a random 256-bit key (XTS-AES-128). Returns Error if OsRng fails.
    pub fn rand_key_256() -> Result<Self> {
        let mut k = [0u8; 32];
        OsRng.try_fill_bytes(&mut k)?;
        Ok(Self {
            bytes: KeyBytes::K256(k),
        })
    }

    /// Generate a random 384-bit key (XTS-AES-192). Returns Error if OsRng fails.
    pub fn rand_key_384() -> Result<Self> {
        let mut k = [0u8; 48];
        OsRng.try_fill_bytes(&mut k)?;
        Ok(Self {
            bytes: KeyBytes::K384(k),
        })
    }

    /// Generate a random 512-bit key (XTS-AES-256). Returns Error if OsRng fails.
    pub fn rand_key_512() -> Result<Self> {
        let mut k = [0u8; 64];
        OsRng.try_fill_bytes(&mut k)?;
        Ok(Self {
            bytes: KeyBytes::K512(k),
        })
    }

    /// Attempts to build a key from a slice of bytes. Will return an InvalidKeyLength error
    /// if the input slice is anything other than 32, 48, or 64 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let invalid = |_| Error::InvalidKeyLength { len: bytes.len() };
        Ok(match bytes.len() {
            32 => Self {
                bytes: KeyBytes::K256(bytes.try_into().map_err(invalid)?),
            },
            48 => Self {
                bytes: KeyBytes::K384(bytes.try_into().map_err(invalid)?),
            },
            64 => Self {
                bytes: KeyBytes::K512(bytes.try_into().map_err(invalid)?),
            },
            len => return Err(Error::InvalidKeyLength { len }),
        })
    }

    /// Returns a reference to the internal key as an array of bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.bytes {
            KeyBytes::K256(k) => k,
            KeyBytes::K384(k) => k,
            KeyBytes::K512(k) => k,
        }
    }

    /// Splits the key into `(data key K1, tweak key K2)`.
    pub fn halves(&self) -> (&[u8], &[u8]) {
        let bytes = self.as_bytes();
        bytes.split_at(bytes.len() / 2)
    }

    /// Builds the `(data, tweak)` ciphers. Each variant splits into two fixed-size AES keys.
    pub(crate) fn aes_pair(&self) -> (Aes, Aes) {
        match &self.bytes {
            KeyBytes::K256(k) => {
                let (k1, k2) = split_halves::<16>(k);
                (
                    Aes::Aes128(aes::Aes128::new(&k1.into())),
                    Aes::Aes128(aes::Aes128::new(&k2.into())),
                )
            }
            KeyBytes::K384(k) => {
                let (k1, k2) = split_halves::<24>(k);
                (
                    Aes::Aes192(aes::Aes192::new(&k1.into())),
                    Aes::Aes192(aes::Aes192::new(&k2.into())),
                )
            }
            KeyBytes::K512(k) => {
                let (k1, k2) = split_halves::<32>(k);
                (
                    Aes::Aes256(aes::Aes256::new(&k1.into())),
                    Aes::Aes256(aes::Aes256::new(&k2.into())),
                )
            }
        }
    }
}

// bytes is exactly 2 * N long for every KeyBytes variant
fn split_halves<const N: usize>(bytes: &[u8]) -> ([u8; N], [u8; N]) {
    (array::from_fn(|i| bytes[i]), array::from_fn(|i| bytes[N + i]))
}
