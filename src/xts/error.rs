use rand::rand_core;
use thiserror::Error;

/// XTS Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// XTS Error type.
///
/// Every variant except [Rng](Error::Rng) is an input validation failure. XTS is
/// deterministic, so retrying with the same input always gives the same error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Key was not two equal halves that are each a valid key for the block cipher.
    #[error("invalid key length: {len} bytes (expected two equal halves, each a valid block cipher key)")]
    InvalidKeyLength { len: usize },

    /// Requested sector size is smaller than one 16-byte cipher block.
    #[error("invalid sector size: {size} bytes (must be at least one 16-byte block)")]
    InvalidSectorSize { size: usize },

    /// A sector (usually the final, shortened one) holds less than one full block.
    /// XTS is undefined below one block.
    #[error("sector too short: {len} bytes (XTS requires at least one 16-byte block per sector)")]
    SectorTooShort { len: usize },

    /// Multi-sector call would run the sector index past 2^128 - 1.
    #[error("sector index overflow (start index plus sector count exceeds 2^128 - 1)")]
    SectorIndexOverflow,

    /// OS RNG failed during random key generation.
    #[error("OS RNG failed in random key generation")]
    Rng(#[from] rand_core::OsError),
}
