use rayon::prelude::*;
use tracing::trace;

use crate::xts::cipher::{BLOCK_SIZE, BlockCipher};
use crate::xts::core::{Direction, sector_tweak};
use crate::xts::error::{Error, Result};
use crate::xts::sector::process::process_sector;

/// Validates a multi-sector call and returns the number of sectors in the buffer.
///
/// Everything that can be checked without touching the buffer is checked here:
/// sector size, empty input, and the range of sector indices. A short final sector
/// is only found when that sector is reached.
pub(crate) fn sector_count(len: usize, start: u128, sector_size: usize) -> Result<usize> {
    if sector_size < BLOCK_SIZE {
        return Err(Error::InvalidSectorSize { size: sector_size });
    }
    if len == 0 {
        return Err(Error::SectorTooShort { len });
    }

    let num_sectors = len.div_ceil(sector_size);
    start
        .checked_add(num_sectors as u128 - 1)
        .ok_or(Error::SectorIndexOverflow)?;

    Ok(num_sectors)
}

/// Core multi-sector XTS, one rayon task per sector. Produces exactly the same
/// output as [xts_core_serial].
///
/// If the final sector is too short, any of the other sectors may already have been
/// transformed when the error is returned.
pub fn xts_core_parallel<C: BlockCipher>(
    data_cipher: &C,
    tweak_cipher: &C,
    buffer: &mut [u8],
    start: u128,
    sector_size: usize,
    direction: Direction,
) -> Result<()> {
    sector_count(buffer.len(), start, sector_size)?;

    buffer
        .par_chunks_mut(sector_size)
        .enumerate()
        .try_for_each(|(i, sector)| -> Result<()> {
            // range checked by sector_count
            let tweak = sector_tweak(tweak_cipher, start + i as u128);
            process_sector(data_cipher, sector, tweak, direction)
        })
}

/// Core multi-sector XTS (encryption and decryption share the walk, only the
/// direction differs). Sectors are `sector_size` bytes except the last, which takes
/// whatever is left. Sector `i` uses index `start + i`.
///
/// If the final sector is too short, every earlier sector has already been
/// transformed in place when the error is returned.
pub fn xts_core_serial<C: BlockCipher>(
    data_cipher: &C,
    tweak_cipher: &C,
    buffer: &mut [u8],
    start: u128,
    sector_size: usize,
    direction: Direction,
) -> Result<()> {
    sector_count(buffer.len(), start, sector_size)?;

    for (i, sector) in buffer.chunks_mut(sector_size).enumerate() {
        let index = start + i as u128;
        trace!(sector = %index, "sector start");

        let tweak = sector_tweak(tweak_cipher, index);
        process_sector(data_cipher, sector, tweak, direction)?;
    }

    Ok(())
}
