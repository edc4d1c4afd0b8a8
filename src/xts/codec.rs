use tracing::debug;

use crate::xts::cipher::{Aes, BlockCipher};
use crate::xts::core::{Direction, sector_tweak};
use crate::xts::error::{Error, Result};
use crate::xts::key::Key;
use crate::xts::sector::util::PARALLEL_THRESHOLD;
use crate::xts::sector::{process_sector, xts_core_parallel, xts_core_serial};

/// Provides XTS encryption and decryption of storage sectors, either [one sector at a
/// time](crate::Xts::encrypt_sector) or [a run of consecutive sectors](crate::Xts::encrypt_sectors).
///
/// Holds two instances of the block cipher: one keyed with the data key (K1), one with
/// the tweak key (K2). The sector index plays the role an IV plays in other modes, so no
/// random IV is generated and the output is exactly as long as the input.
///
/// **XTS provides confidentiality only.** Ciphertext is not authenticated, and
/// modifications go undetected.
///
/// ## Examples
/// ```
/// # fn main() -> xtsp::Result<()> {
/// use xtsp::{Key, Xts};
///
/// let key = Key::rand_key_256()?;
/// let xts = Xts::new(&key);
///
/// // 1 KiB buffer of 512-byte sectors starting at sector 40
/// let mut buffer = vec![0xA5u8; 1024];
/// xts.encrypt_sectors(&mut buffer, 40, 512)?;
/// assert_ne!(buffer, vec![0xA5u8; 1024]);
///
/// xts.decrypt_sectors(&mut buffer, 40, 512)?;
/// assert_eq!(buffer, vec![0xA5u8; 1024]);
/// # Ok(())
/// # }
/// ```
pub struct Xts<C: BlockCipher = Aes> {
    data_cipher: C,
    tweak_cipher: C,
}

impl Xts<Aes> {
    /// Builds XTS-AES from a validated [Key]. The AES variant follows the key size.
    pub fn new(key: &Key) -> Self {
        let (data_cipher, tweak_cipher) = key.aes_pair();
        Self {
            data_cipher,
            tweak_cipher,
        }
    }
}

impl<C: BlockCipher> Xts<C> {
    /// Builds XTS over any [BlockCipher] from a raw double-length key. The first half is
    /// the data key (K1), the second half the tweak key (K2).
    ///
    /// Returns [InvalidKeyLength](crate::Error::InvalidKeyLength) if the key is empty, has
    /// odd length, or its halves are not valid keys for `C`.
    pub fn try_from_slice(key: &[u8]) -> Result<Self> {
        let len = key.len();
        if len == 0 || len % 2 != 0 {
            return Err(Error::InvalidKeyLength { len });
        }

        let (k1, k2) = key.split_at(len / 2);
        let invalid = |_| Error::InvalidKeyLength { len };
        Ok(Self {
            data_cipher: C::new(k1).map_err(invalid)?,
            tweak_cipher: C::new(k2).map_err(invalid)?,
        })
    }

    /// Encrypts the whole buffer in place as a single sector with index `sector`.
    ///
    /// Returns [SectorTooShort](crate::Error::SectorTooShort) if the buffer is shorter
    /// than one 16-byte block. Lengths that are not a multiple of 16 are handled with
    /// ciphertext stealing, so the buffer never grows.
    pub fn encrypt_sector(&self, buffer: &mut [u8], sector: u128) -> Result<()> {
        self.sector(buffer, sector, Direction::Encrypt)
    }

    /// Decrypts the whole buffer in place as a single sector with index `sector`.
    pub fn decrypt_sector(&self, buffer: &mut [u8], sector: u128) -> Result<()> {
        self.sector(buffer, sector, Direction::Decrypt)
    }

    /// Encrypts a run of consecutive sectors in place.
    ///
    /// The buffer is split into `sector_size` chunks. The last chunk may be shorter but
    /// must still hold at least one block. The chunks are encrypted with sector
    /// indices `start, start + 1, ...`. Large buffers are processed in parallel, one
    /// sector per task. The output is identical either way.
    ///
    /// Returns:
    /// - [InvalidSectorSize](crate::Error::InvalidSectorSize) if `sector_size` is below 16 bytes.
    /// - [SectorIndexOverflow](crate::Error::SectorIndexOverflow) if the last index would exceed `u128::MAX`.
    /// - [SectorTooShort](crate::Error::SectorTooShort) if the buffer is empty or the final
    ///   sector is shorter than 16 bytes.
    ///
    /// **Not atomic.** A short final sector is only detected when it is reached. By then
    /// the other sectors may already be encrypted in place. Use [encrypt](Self::encrypt)
    /// to work on a copy instead.
    pub fn encrypt_sectors(&self, buffer: &mut [u8], start: u128, sector_size: usize) -> Result<()> {
        self.sectors(buffer, start, sector_size, Direction::Encrypt)
    }

    /// Decrypts a run of consecutive sectors in place. Same layout, errors, and partial
    /// mutation behaviour as [encrypt_sectors](Self::encrypt_sectors).
    pub fn decrypt_sectors(&self, buffer: &mut [u8], start: u128, sector_size: usize) -> Result<()> {
        self.sectors(buffer, start, sector_size, Direction::Decrypt)
    }

    /// Copying form of [encrypt_sectors](Self::encrypt_sectors). The input is left untouched.
    pub fn encrypt(&self, plaintext: &[u8], start: u128, sector_size: usize) -> Result<Vec<u8>> {
        let mut buffer = plaintext.to_vec();
        self.encrypt_sectors(&mut buffer, start, sector_size)?;
        Ok(buffer)
    }

    /// Copying form of [decrypt_sectors](Self::decrypt_sectors). The input is left untouched.
    pub fn decrypt(&self, ciphertext: &[u8], start: u128, sector_size: usize) -> Result<Vec<u8>> {
        let mut buffer = ciphertext.to_vec();
        self.decrypt_sectors(&mut buffer, start, sector_size)?;
        Ok(buffer)
    }

    /// Copying form of [encrypt_sector](Self::encrypt_sector). The input is left untouched.
    pub fn encrypt_sector_copy(&self, plaintext: &[u8], sector: u128) -> Result<Vec<u8>> {
        let mut buffer = plaintext.to_vec();
        self.encrypt_sector(&mut buffer, sector)?;
        Ok(buffer)
    }

    /// Copying form of [decrypt_sector](Self::decrypt_sector). The input is left untouched.
    pub fn decrypt_sector_copy(&self, ciphertext: &[u8], sector: u128) -> Result<Vec<u8>> {
        let mut buffer = ciphertext.to_vec();
        self.decrypt_sector(&mut buffer, sector)?;
        Ok(buffer)
    }

    fn sector(&self, buffer: &mut [u8], sector: u128, direction: Direction) -> Result<()> {
        let tweak = sector_tweak(&self.tweak_cipher, sector);
        process_sector(&self.data_cipher, buffer, tweak, direction)
    }

    fn sectors(
        &self,
        buffer: &mut [u8],
        start: u128,
        sector_size: usize,
        direction: Direction,
    ) -> Result<()> {
        if buffer.len() >= PARALLEL_THRESHOLD && buffer.len() > sector_size {
            debug!(len = buffer.len(), sector_size, ?direction, "xts: parallel core");
            xts_core_parallel(
                &self.data_cipher,
                &self.tweak_cipher,
                buffer,
                start,
                sector_size,
                direction,
            )
        } else {
            debug!(len = buffer.len(), sector_size, ?direction, "xts: serial core");
            xts_core_serial(
                &self.data_cipher,
                &self.tweak_cipher,
                buffer,
                start,
                sector_size,
                direction,
            )
        }
    }
}

/// Encrypts `buffer` in place as one sector, using cipher `C` and a raw double-length key.
pub fn encrypt_xts_sector<C: BlockCipher>(buffer: &mut [u8], key: &[u8], sector: u128) -> Result<()> {
    Xts::<C>::try_from_slice(key)?.encrypt_sector(buffer, sector)
}

/// Decrypts `buffer` in place as one sector, using cipher `C` and a raw double-length key.
pub fn decrypt_xts_sector<C: BlockCipher>(buffer: &mut [u8], key: &[u8], sector: u128) -> Result<()> {
    Xts::<C>::try_from_slice(key)?.decrypt_sector(buffer, sector)
}

/// Encrypts `buffer` in place as consecutive `sector_size` sectors starting at `start`.
/// See [Xts::encrypt_sectors] for errors and partial mutation.
pub fn encrypt_xts<C: BlockCipher>(
    buffer: &mut [u8],
    key: &[u8],
    start: u128,
    sector_size: usize,
) -> Result<()> {
    Xts::<C>::try_from_slice(key)?.encrypt_sectors(buffer, start, sector_size)
}

/// Decrypts `buffer` in place as consecutive `sector_size` sectors starting at `start`.
/// See [Xts::decrypt_sectors] for errors and partial mutation.
pub fn decrypt_xts<C: BlockCipher>(
    buffer: &mut [u8],
    key: &[u8],
    start: u128,
    sector_size: usize,
) -> Result<()> {
    Xts::<C>::try_from_slice(key)?.decrypt_sectors(buffer, start, sector_size)
}
