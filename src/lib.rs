//! XTS (XEX-based tweaked-codebook mode with ciphertext stealing) for encrypting
//! fixed-size storage sectors, as standardised in IEEE 1619.
//!
//! Each sector is encrypted independently under a tweak derived from its sector index,
//! so identical plaintext in different sectors gives different ciphertext without any
//! stored IV. Output is always the same length as input. Sectors that are not a multiple
//! of the 16-byte block size are handled with ciphertext stealing.
//!
//! XTS is **not authenticated**: it hides data but does not detect tampering.
//!
//! ```
//! # fn main() -> xtsp::Result<()> {
//! use xtsp::{Aes, Xts, encrypt_xts_sector, decrypt_xts_sector};
//!
//! // raw double-length key: AES-128 data key || AES-128 tweak key
//! let key: Vec<u8> = (0u8..32).collect();
//! let mut sector = *b"ABCDEFGHIJKLMNOPQRST";
//!
//! encrypt_xts_sector::<Aes>(&mut sector, &key, 5)?;
//! decrypt_xts_sector::<Aes>(&mut sector, &key, 5)?;
//! assert_eq!(&sector, b"ABCDEFGHIJKLMNOPQRST");
//!
//! // or keep the expanded keys around
//! let xts = Xts::<Aes>::try_from_slice(&key)?;
//! let ciphertext = xts.encrypt(&[0u8; 1000], 0, 512)?;
//! assert_eq!(ciphertext.len(), 1000);
//! # Ok(())
//! # }
//! ```

mod xts;

pub use xts::{
    Aes, BLOCK_SIZE, Block, BlockCipher, Error, Key, Result, Xts, decrypt_xts, decrypt_xts_sector,
    encrypt_xts, encrypt_xts_sector,
};
