use std::fmt;

mod directive;
mod instruction;

pub use directive::Directive;
pub use instruction::{AddressingMode, Instruction, Mnemonic, Operand};

/// A single line of source code split into its parts.
///
/// E.g. `loop: BNE loop ; wait` becomes the label `loop`, the operation `BNE` and the operand
/// text `loop`. The comment is dropped.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SourceLine<'a> {
    /// Line number in the source, starting at 1
    pub number: usize,
    /// Label defined on this line
    pub label: Option<&'a str>,
    /// Upper-cased mnemonic or directive name, e.g. `LDA` or `.BYTE`
    pub operation: Option<String>,
    /// Raw operand text, empty when there is none
    pub operand: &'a str,
}

/// A parsed statement, i.e. the operation of a single line in the source code.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Node {
    /// A CPU instruction
    Instruction(Instruction),
    /// An assembler directive
    Directive(Directive),
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Instruction(instruction) => write!(f, "{}", instruction),
            Node::Directive(directive) => write!(f, "{}", directive),
        }
    }
}
