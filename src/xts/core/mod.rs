//! Block-level XTS primitives: GF(2^128) tweak arithmetic, per-sector tweak
//! derivation, and the XEX transform of a single block.

pub mod gf;
mod tweak;
mod util;
mod xex;

pub use tweak::sector_tweak;
pub use xex::{Direction, xex};
