/// Size of the block RAM the image is loaded into (16 KiB).
pub const MEMORY_SIZE: usize = 16 * 1024;

/// Address where the softcore starts fetching instructions.
pub const START_ADDRESS: u16 = 0x1000;

/// Fixed parameters of an assembly run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblerConfig {
    /// Number of bytes in the memory image
    pub capacity: usize,
    /// Initial value of the location counter
    pub start_address: u16,
}

impl AssemblerConfig {
    pub fn new(capacity: usize, start_address: u16) -> Self {
        Self {
            capacity,
            start_address,
        }
    }
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self::new(MEMORY_SIZE, START_ADDRESS)
    }
}
