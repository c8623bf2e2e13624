use std::{fmt, io};

/// A run of identical bytes, `start..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub start: usize,
    pub end: usize,
    pub value: u8,
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.end > self.start {
            write!(f, "[{:04X}..{:04X}] : {:02X};", self.start, self.end, self.value)
        } else {
            write!(f, "{:04X} : {:02X};", self.start, self.value)
        }
    }
}

/// Split memory into maximal runs of identical bytes.
///
/// The runs cover every address exactly once in ascending order.
pub fn runs(memory: &[u8]) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for (address, &value) in memory.iter().enumerate() {
        match runs.last_mut() {
            Some(run) if run.value == value => run.end = address,
            _ => runs.push(Run {
                start: address,
                end: address,
                value,
            }),
        }
    }

    runs
}

/// Memory Initialization File rendering of a memory image.
///
/// ```text
/// DEPTH = 16384;
/// WIDTH = 8;
/// ADDRESS_RADIX = HEX;
/// DATA_RADIX = HEX;
///
/// CONTENT BEGIN
///     [0000..0FFF] : 00;
///     1000 : A9;
///     ...
/// END;
/// ```
pub struct Mif<'a> {
    memory: &'a [u8],
    start_address: u16,
}

impl<'a> Mif<'a> {
    /// `start_address` is only used in the header comment.
    pub fn new(memory: &'a [u8], start_address: u16) -> Self {
        Self {
            memory,
            start_address,
        }
    }

    #[tracing::instrument(skip_all)]
    pub fn write_to<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{}", self)
    }
}

impl fmt::Display for Mif<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "-- Memory Initialization File (.mif)")?;
        writeln!(f, "-- Generated by {}", env!("CARGO_PKG_NAME"))?;
        writeln!(f, "-- Instructions start at address {:#06X}", self.start_address)?;
        writeln!(f)?;
        writeln!(f, "DEPTH = {};", self.memory.len())?;
        writeln!(f, "WIDTH = 8;")?;
        writeln!(f, "ADDRESS_RADIX = HEX;")?;
        writeln!(f, "DATA_RADIX = HEX;")?;
        writeln!(f)?;
        writeln!(f, "CONTENT BEGIN")?;
        for run in runs(self.memory) {
            writeln!(f, "    {}", run)?;
        }
        writeln!(f, "END;")
    }
}
