mod cipher;
mod codec;
mod core;
mod error;
mod key;
mod sector;

pub use cipher::{Aes, BLOCK_SIZE, Block, BlockCipher};
pub use codec::{Xts, decrypt_xts, decrypt_xts_sector, encrypt_xts, encrypt_xts_sector};
pub use error::{Error, Result};
pub use key::Key;
