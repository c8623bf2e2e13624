pub mod addressing_mode;
pub mod mnemonic;
pub mod operand;

use std::fmt;

pub use addressing_mode::AddressingMode;
pub use mnemonic::Mnemonic;
pub use operand::Operand;

/// A CPU instruction with an an optional operand and the addressing mode which tells the CPU how
/// to interpret the operand.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Instruction {
    pub mnemonic: Mnemonic,
    pub addr_mode: AddressingMode,
    pub operand: Operand,
}

impl Instruction {
    pub fn new(mnemonic: Mnemonic, addr_mode: AddressingMode, operand: Operand) -> Instruction {
        Instruction {
            mnemonic,
            addr_mode,
            operand,
        }
    }

    /// Size of instruction opcode + operand in bytes
    pub fn size(&self) -> usize {
        1 + self.addr_mode.operand_size()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operand = match &self.operand {
            Operand::Implied => return write!(f, "{}", self.mnemonic),
            Operand::Label(label) => label.clone(),
            Operand::Value(value) if self.addr_mode.operand_size() == 1 => {
                format!("${:02X}", value & 0xff)
            }
            Operand::Value(value) => format!("${:04X}", value & 0xffff),
        };

        match self.addr_mode {
            AddressingMode::Immediate => write!(f, "{} #{}", self.mnemonic, operand),
            AddressingMode::ZeroPageX | AddressingMode::AbsoluteX => {
                write!(f, "{} {},X", self.mnemonic, operand)
            }
            AddressingMode::ZeroPageY | AddressingMode::AbsoluteY => {
                write!(f, "{} {},Y", self.mnemonic, operand)
            }
            AddressingMode::Indirect => write!(f, "{} ({})", self.mnemonic, operand),
            AddressingMode::IndirectX => write!(f, "{} ({},X)", self.mnemonic, operand),
            AddressingMode::IndirectY => write!(f, "{} ({}),Y", self.mnemonic, operand),
            _ => write!(f, "{} {}", self.mnemonic, operand),
        }
    }
}
