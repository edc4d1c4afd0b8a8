//! Data-level XTS: one sector at a time, including ciphertext stealing, and the
//! serial and parallel drivers that walk a buffer sector by sector.

mod multi;
mod process;
mod stealing;
pub(crate) mod util;

pub use multi::{xts_core_parallel, xts_core_serial};
pub use process::process_sector;
