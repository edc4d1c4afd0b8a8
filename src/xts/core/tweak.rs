use crate::xts::cipher::{Block, BlockCipher};

/// Initial tweak for a sector: the sector index, little-endian over the full block,
/// encrypted under the tweak sub-key (K2).
#[inline(always)]
pub fn sector_tweak<C: BlockCipher>(tweak_cipher: &C, sector: u128) -> Block {
    let mut tweak = sector.to_le_bytes();
    tweak_cipher.encrypt_block(&mut tweak);
    tweak
}
