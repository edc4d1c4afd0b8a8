pub const PARALLEL_THRESHOLD: usize = 4 * 1024; // process sectors in parallel if input size ge 4 KiB
