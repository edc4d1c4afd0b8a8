use tracing::trace;

use crate::xts::cipher::{BLOCK_SIZE, Block, BlockCipher};
use crate::xts::core::gf::{double, halve};
use crate::xts::core::{Direction, xex};
use crate::xts::error::{Error, Result};
use crate::xts::sector::stealing::steal_tail;

/// Encrypts or decrypts one sector in place, starting from the sector's initial tweak.
///
/// The tweak is taken by value: it belongs to this sector alone and is dropped when
/// the sector is done.
///
/// For block `j` the tweak is the initial tweak doubled `j` times. When the sector is not
/// block-aligned, the final full block and the short tail are finished with ciphertext
/// stealing. On decryption the last full block has to be undone with the *next* tweak
/// before the tail can be recovered with the current one, so the tweak is doubled for
/// that one block and halved straight back.
///
/// Returns [SectorTooShort](crate::Error::SectorTooShort) if the sector is shorter than
/// one block. Nothing is written in that case.
pub fn process_sector<C: BlockCipher>(
    cipher: &C,
    sector: &mut [u8],
    mut tweak: Block,
    direction: Direction,
) -> Result<()> {
    let len = sector.len();
    if len < BLOCK_SIZE {
        return Err(Error::SectorTooShort { len });
    }

    let full_blocks = len / BLOCK_SIZE;
    let remainder = len % BLOCK_SIZE;
    let last = (full_blocks - 1) * BLOCK_SIZE; // start of final full block

    trace!(len, full_blocks, remainder, ?direction, "processing sector");

    // every block but the last full one
    for block in sector[..last].chunks_exact_mut(BLOCK_SIZE) {
        xex(cipher, block, &tweak, direction);
        double(&mut tweak);
    }

    let final_block = &mut sector[last..last + BLOCK_SIZE];

    if remainder == 0 {
        xex(cipher, final_block, &tweak, direction);
        return Ok(());
    }

    match direction {
        Direction::Encrypt => {
            xex(cipher, final_block, &tweak, direction);
            double(&mut tweak); // stolen block uses the next tweak
        }
        Direction::Decrypt => {
            let carry = double(&mut tweak);
            xex(cipher, final_block, &tweak, direction);
            halve(&mut tweak, carry); // stolen block uses the current tweak
        }
    }

    steal_tail(cipher, &mut sector[last..], &tweak, direction);
    Ok(())
}
