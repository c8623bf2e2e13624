use thiserror::Error;

use crate::{
    ast::{AddressingMode, Mnemonic},
    config::AssemblerConfig,
    memory::MemoryImage,
};

pub use self::symbols::{Label, LabelTable};

/// Splits source text into lines of label, operation and operand text.
///
/// Comments are stripped and the operation is upper-cased, e.g. `loop: lda #$10 ; init` is
/// turned into
///
/// ```text
/// SourceLine { number: 1, label: Some("loop"), operation: Some("LDA"), operand: "#$10" }
/// ```
pub mod lexer;

/// Turns the operation and operand text of a line into instructions and directives.
pub mod parser;

/// Label table, label discovery (pass 1) and label resolution.
pub mod symbols;

/// Generates machine code into the memory image (pass 2).
pub mod codegen;

/// Location counter shared by both passes.
mod location;

/// Reasons an assembly run can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("Unknown instruction: '{0}'")]
    UnknownInstruction(String),
    #[error("Invalid addressing mode {mode:?} for {mnemonic}")]
    InvalidAddressingMode {
        mnemonic: Mnemonic,
        mode: AddressingMode,
    },
    #[error("Unknown label: '{0}'")]
    UnknownLabel(String),
    #[error("Branch out of range ({0})")]
    BranchOutOfRange(i32),
    #[error("Malformed literal: '{0}'")]
    MalformedLiteral(String),
    #[error("Label '{label}' already defined on line {first_line}")]
    DuplicateLabel { label: String, first_line: usize },
    #[error("Address {} outside of the 16-bit address space", signed_hex(.0))]
    AddressOverflow(i64),
}

/// `0x10000` or `-0x1`, the sign is not folded into the digits.
fn signed_hex(value: &i64) -> String {
    if *value < 0 {
        format!("-{:#x}", value.unsigned_abs())
    } else {
        format!("{:#x}", value)
    }
}

/// An [`ErrorKind`] together with the line where it occurred.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Line {line}: {kind}")]
pub struct AssemblyError {
    /// Line number in the source, starting at 1
    pub line: usize,
    pub kind: ErrorKind,
}

impl AssemblyError {
    pub fn new(line: usize, kind: ErrorKind) -> Self {
        Self { line, kind }
    }
}

/// Result of a successful assembly run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    /// The memory image with all emitted bytes
    pub image: MemoryImage,
    /// Every label in order of definition
    pub labels: LabelTable,
    /// Value of the location counter after the last line
    pub location_counter: u32,
}

/// Two-pass assembler.
///
/// Pass 1 walks the source and records the address of every label. Pass 2 walks the same lines
/// again and writes the machine code into a fresh memory image, looking up labels in the table
/// from pass 1. Every call to [`Assembler::assemble`] is independent of earlier calls.
#[derive(Debug, Default, Clone)]
pub struct Assembler {
    config: AssemblerConfig,
}

impl Assembler {
    pub fn new(config: AssemblerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Assemble source text into a memory image.
    ///
    /// The first error aborts the run, no partial image is returned.
    #[tracing::instrument(skip_all)]
    pub fn assemble(&self, source: &str) -> Result<Assembly, AssemblyError> {
        let lines = lexer::tokenize(source);

        let labels = symbols::index_labels(&lines, self.config.start_address)?;
        tracing::debug!("Pass 1 found {} labels", labels.len());

        let (image, location_counter) = codegen::generate(&lines, &labels, &self.config)?;
        if image.dropped_writes() > 0 {
            tracing::warn!(
                "{} bytes were outside of the {} byte image and were dropped",
                image.dropped_writes(),
                image.capacity()
            );
        }

        Ok(Assembly {
            image,
            labels,
            location_counter,
        })
    }
}

/// Utility function for assembling with the default configuration, i.e. a 16 KiB image with
/// code starting at $1000.
pub fn assemble(source: &str) -> Result<Assembly, AssemblyError> {
    Assembler::default().assemble(source)
}
