use crate::xts::cipher::{BLOCK_SIZE, Block, BlockCipher};
use crate::xts::core::util::xor_in_place;

/// Direction of the whole XTS operation. Selects the cipher call inside XEX and the
/// tweak order used for ciphertext stealing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// XOR-Encrypt-XOR one block of `block` in place under the data cipher (K1).
/// `block` must be exactly [BLOCK_SIZE] bytes. The tweak is read, never advanced.
#[inline(always)]
pub fn xex<C: BlockCipher>(cipher: &C, block: &mut [u8], tweak: &Block, direction: Direction) {
    debug_assert_eq!(block.len(), BLOCK_SIZE);

    let mut state = *tweak;
    xor_in_place(&mut state, block);

    match direction {
        Direction::Encrypt => cipher.encrypt_block(&mut state),
        Direction::Decrypt => cipher.decrypt_block(&mut state),
    }

    xor_in_place(&mut state, tweak);
    block.copy_from_slice(&state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xts::cipher::Aes;
    use crate::xts::error::Result;

    #[test]
    fn xex_round_trip() -> Result<()> {
        let cipher = Aes::new(&[0x11u8; 16])?;
        let tweak: Block = [0x5au8; 16];
        let original: Block = *b"sixteen byte blk";

        let mut block = original;
        xex(&cipher, &mut block, &tweak, Direction::Encrypt);
        assert_ne!(block, original);

        xex(&cipher, &mut block, &tweak, Direction::Decrypt);
        assert_eq!(block, original, "XEX decrypt does not reverse XEX encrypt");
        Ok(())
    }

    #[test]
    fn xex_matches_definition() -> Result<()> {
        let cipher = Aes::new(&[0x11u8; 16])?;
        let tweak: Block = std::array::from_fn(|i| i as u8);
        let plaintext: Block = [0x44u8; 16];

        // C = E(K1, P ^ T) ^ T
        let mut expected = plaintext;
        for (e, t) in expected.iter_mut().zip(tweak) {
            *e ^= t;
        }
        cipher.encrypt_block(&mut expected);
        for (e, t) in expected.iter_mut().zip(tweak) {
            *e ^= t;
        }

        let mut block = plaintext;
        xex(&cipher, &mut block, &tweak, Direction::Encrypt);
        assert_eq!(block, expected);
        Ok(())
    }

    #[test]
    fn xex_touches_only_its_block() -> Result<()> {
        let cipher = Aes::new(&[0x11u8; 16])?;
        let tweak: Block = [0x01u8; 16];
        let mut buffer = [0xaau8; 48];

        xex(&cipher, &mut buffer[16..32], &tweak, Direction::Encrypt);
        assert_eq!(&buffer[..16], &[0xaau8; 16]);
        assert_eq!(&buffer[32..], &[0xaau8; 16]);
        assert_ne!(&buffer[16..32], &[0xaau8; 16]);
        Ok(())
    }
}
