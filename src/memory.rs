use crate::config::MEMORY_SIZE;

/// Fixed-size memory image the assembler writes machine code into.
///
/// The image is addressed absolutely, i.e. index 0x1000 is CPU address $1000. Writes outside of
/// the image are dropped and only counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryImage {
    data: Vec<u8>,
    dropped_writes: usize,
}

impl MemoryImage {
    #[tracing::instrument]
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity],
            dropped_writes: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Reads a byte from the image. Addresses outside of the image read as zero.
    pub fn read_byte(&self, address: usize) -> u8 {
        self.data.get(address).copied().unwrap_or(0)
    }

    /// Writes a byte to the image.
    pub fn write_byte(&mut self, address: usize, data: u8) {
        match self.data.get_mut(address) {
            Some(byte) => *byte = data,
            None => {
                tracing::trace!("Dropped write of {:#04x} to {:#06x}", data, address);
                self.dropped_writes += 1;
            }
        }
    }

    /// Get a slice reference, clipped to the image
    pub fn slice(&self, start_address: usize, end_address: usize) -> &[u8] {
        let end = end_address.min(self.data.len());
        let start = start_address.min(end);
        &self.data[start..end]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Number of writes that fell outside of the image.
    pub fn dropped_writes(&self) -> usize {
        self.dropped_writes
    }
}

impl Default for MemoryImage {
    fn default() -> Self {
        Self::new(MEMORY_SIZE)
    }
}
