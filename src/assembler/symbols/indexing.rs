use super::LabelTable;
use crate::{
    assembler::{
        codegen::opcode::OPCODE_MAPPING, location::LocationCounter, parser, AssemblyError,
        ErrorKind,
    },
    ast::{Directive, Node, SourceLine},
};

/// Find and add labels in the source to the label table.
///
/// No bytes are emitted. The location counter is advanced by the size of every instruction and
/// directive so that each label gets the address it will have in the final image. Lines are
/// fully parsed here, so unknown instructions, invalid addressing modes and malformed literals
/// are already reported by this pass.
#[tracing::instrument(skip(lines))]
pub fn index_labels(
    lines: &[SourceLine],
    start_address: u16,
) -> Result<LabelTable, AssemblyError> {
    let mut labels = LabelTable::new();
    let mut location = LocationCounter::new(start_address);

    for line in lines {
        index_line(line, &mut labels, &mut location)
            .map_err(|kind| AssemblyError::new(line.number, kind))?;
    }

    Ok(labels)
}

fn index_line(
    line: &SourceLine,
    labels: &mut LabelTable,
    location: &mut LocationCounter,
) -> Result<(), ErrorKind> {
    if let Some(label) = line.label {
        labels.define(label, location.label_address()?, line.number)?;
    }

    match parser::parse_line(line)? {
        Some(Node::Instruction(ins)) => {
            let entry = OPCODE_MAPPING.opcode(ins.mnemonic, ins.addr_mode)?;
            location.advance(entry.length)
        }
        Some(Node::Directive(Directive::Origin(address))) => {
            location.set(address);
            Ok(())
        }
        Some(Node::Directive(directive)) => location.advance(directive.size()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::lexer::tokenize;

    use pretty_assertions::assert_eq;

    fn addresses(labels: &LabelTable) -> Vec<(&str, u16)> {
        labels
            .iter()
            .map(|label| (label.name.as_str(), label.address))
            .collect()
    }

    #[test]
    fn test_index_labels() -> Result<(), AssemblyError> {
        let source = "
start:  LDX #$08
loop:   LDA table,X
        STA $10
        DEX
        BNE loop
        JMP ($2003)
        .ORG $2000
table:  .BYTE 1, 2, 3
vector: .WORD start, loop
end:
";
        let lines = tokenize(source);
        let labels = index_labels(&lines, 0x1000)?;

        assert_eq!(
            addresses(&labels),
            vec![
                ("start", 0x1000),
                ("loop", 0x1002),
                ("table", 0x2000),
                ("vector", 0x2003),
                ("end", 0x2007),
            ]
        );

        Ok(())
    }

    #[test]
    fn test_forward_references_do_not_fail() -> Result<(), AssemblyError> {
        let lines = tokenize("JMP later\nBEQ later\nlater: RTS");
        let labels = index_labels(&lines, 0x0600)?;

        assert_eq!(addresses(&labels), vec![("later", 0x0605)]);

        Ok(())
    }

    #[test]
    fn test_index_errors() {
        let tests = vec![
            (
                "NOP\nSTX $1234,Y\n",
                AssemblyError::new(
                    2,
                    ErrorKind::InvalidAddressingMode {
                        mnemonic: crate::ast::Mnemonic::STX,
                        mode: crate::ast::AddressingMode::AbsoluteY,
                    },
                ),
            ),
            (
                "x: NOP\n\nx: NOP\n",
                AssemblyError::new(
                    3,
                    ErrorKind::DuplicateLabel {
                        label: "x".to_string(),
                        first_line: 1,
                    },
                ),
            ),
            (
                ".ORG $FFFF\nNOP\nJMP $1000\n",
                AssemblyError::new(3, ErrorKind::AddressOverflow(0x10003)),
            ),
            (
                ".ORG $FFFF\nNOP\nend:\n",
                AssemblyError::new(3, ErrorKind::AddressOverflow(0x10000)),
            ),
        ];

        for (source, expected) in tests {
            assert_eq!(index_labels(&tokenize(source), 0x1000), Err(expected));
        }
    }
}
