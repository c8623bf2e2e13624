use std::fmt;

/// Mnemonic of an instruction.
///
/// This represents the operation that is performed by the instruction. Only the documented NMOS
/// 6502 instructions are available.
#[derive(
    Debug, Hash, Eq, PartialEq, Clone, Copy, strum_macros::EnumString, strum_macros::EnumIter,
)]
pub enum Mnemonic {
    ADC,
    AND,
    ASL,
    BCC,
    BCS,
    BEQ,
    BIT,
    BMI,
    BNE,
    BPL,
    BRK,
    BVC,
    BVS,
    CLC,
    CLD,
    CLI,
    CLV,
    CMP,
    CPX,
    CPY,
    DEC,
    DEX,
    DEY,
    EOR,
    INC,
    INX,
    INY,
    JMP,
    JSR,
    LDA,
    LDX,
    LDY,
    LSR,
    NOP,
    ORA,
    PHA,
    PHP,
    PLA,
    PLP,
    ROL,
    ROR,
    RTI,
    RTS,
    SBC,
    SEC,
    SED,
    SEI,
    STA,
    STX,
    STY,
    TAX,
    TAY,
    TSX,
    TXA,
    TXS,
    TYA,
}

impl Mnemonic {
    /// Branch instructions always use relative addressing.
    pub fn is_branching_instruction(&self) -> bool {
        matches!(
            self,
            Mnemonic::BCC
                | Mnemonic::BCS
                | Mnemonic::BEQ
                | Mnemonic::BMI
                | Mnemonic::BNE
                | Mnemonic::BPL
                | Mnemonic::BVC
                | Mnemonic::BVS
        )
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_mnemonic() {
        assert_eq!(Mnemonic::from_str("LDA"), Ok(Mnemonic::LDA));
        assert_eq!(Mnemonic::from_str("TYA"), Ok(Mnemonic::TYA));
        assert!(Mnemonic::from_str("lda").is_err());
        assert!(Mnemonic::from_str("XYZ").is_err());
    }

    #[test]
    fn test_branching_instructions() {
        let branches: Vec<Mnemonic> = Mnemonic::iter()
            .filter(Mnemonic::is_branching_instruction)
            .collect();
        assert_eq!(
            branches,
            vec![
                Mnemonic::BCC,
                Mnemonic::BCS,
                Mnemonic::BEQ,
                Mnemonic::BMI,
                Mnemonic::BNE,
                Mnemonic::BPL,
                Mnemonic::BVC,
                Mnemonic::BVS,
            ]
        );
        assert_eq!(Mnemonic::iter().count(), 56);
    }
}
