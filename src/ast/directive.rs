use std::fmt;

use super::Operand;

/// Commands to the assembler that are not instructions.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Directive {
    /// Defines where in the memory code from now on should be placed.
    ///
    /// E.g. `.ORG $2000` in the assembly code. The location counter jumps straight to $2000,
    /// nothing is emitted for the gap.
    Origin(u16),
    /// Raw bytes, e.g. `.BYTE $01, 2, %11`
    Byte(Vec<i32>),
    /// Little-endian words, e.g. `.WORD $1234, reset`. Entries are values or labels.
    Word(Vec<Operand>),
}

impl Directive {
    /// Number of bytes the directive emits.
    pub fn size(&self) -> usize {
        match self {
            Directive::Origin(_) => 0,
            Directive::Byte(bytes) => bytes.len(),
            Directive::Word(words) => words.len() * 2,
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::Origin(address) => write!(f, ".ORG ${:04X}", address),
            Directive::Byte(bytes) => {
                let bytes: Vec<String> =
                    bytes.iter().map(|b| format!("${:02X}", b & 0xff)).collect();
                write!(f, ".BYTE {}", bytes.join(", "))
            }
            Directive::Word(words) => {
                let words: Vec<String> = words
                    .iter()
                    .map(|word| match word {
                        Operand::Value(value) => format!("${:04X}", value & 0xffff),
                        Operand::Label(label) => label.clone(),
                        Operand::Implied => String::new(),
                    })
                    .collect();
                write!(f, ".WORD {}", words.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_directive() {
        let tests = vec![
            (Directive::Origin(0x2000), ".ORG $2000", 0),
            (Directive::Byte(vec![1, 0x1ff, -1]), ".BYTE $01, $FF, $FF", 3),
            (
                Directive::Word(vec![Operand::Value(0x1234), Operand::Label("reset".into())]),
                ".WORD $1234, reset",
                4,
            ),
        ];

        for (directive, text, size) in tests {
            assert_eq!(directive.to_string(), text);
            assert_eq!(directive.size(), size);
        }
    }
}
