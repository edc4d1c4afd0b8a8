use crate::xts::cipher::{BLOCK_SIZE, Block, BlockCipher};
use crate::xts::core::{Direction, xex};

/// Ciphertext stealing over the last `BLOCK_SIZE + r` bytes of a sector, where
/// `0 < r < BLOCK_SIZE`.
///
/// On entry the first block of `tail` has already been through XEX. Its first `r`
/// bytes become the final short output, and in exchange the block takes the short
/// input. The rebuilt block then gets one more XEX under `tweak`.
pub(crate) fn steal_tail<C: BlockCipher>(
    cipher: &C,
    tail: &mut [u8],
    tweak: &Block,
    direction: Direction,
) {
    debug_assert!(tail.len() > BLOCK_SIZE && tail.len() < 2 * BLOCK_SIZE);

    let (block, partial) = tail.split_at_mut(BLOCK_SIZE);
    block[..partial.len()].swap_with_slice(partial);
    xex(cipher, block, tweak, direction);
}
