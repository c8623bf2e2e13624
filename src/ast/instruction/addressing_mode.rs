/// Addressing mode of an instruction.
///
/// This represents the way the instruction uses the operand.
#[derive(Debug, Hash, Eq, PartialEq, Clone, Copy, strum_macros::EnumIter)]
pub enum AddressingMode {
    /// No operand, e.g. `INX`
    Implied,
    /// `A`, or no operand at all for the shift and rotate instructions
    Accumulator,
    /// `#v`
    Immediate,
    /// `zp`
    ZeroPage,
    /// `zp,x`
    ZeroPageX,
    /// `zp,y`
    ZeroPageY,
    /// `a`
    Absolute,
    /// `a,x`
    AbsoluteX,
    /// `a,y`
    AbsoluteY,
    /// `(a)`, only used by `JMP`
    Indirect,
    /// `(zp,x)`
    IndirectX,
    /// `(zp),y`
    IndirectY,
    /// `r` for branch instructions.
    /// The target address is encoded as an offset from the following instruction.
    Relative,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub fn operand_size(&self) -> usize {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY
            | AddressingMode::Relative => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}
