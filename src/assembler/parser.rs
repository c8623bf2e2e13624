use std::str::FromStr;

use self::number::{is_number, parse_number};
use super::{codegen::opcode::OPCODE_MAPPING, ErrorKind};
use crate::ast::{AddressingMode, Directive, Instruction, Mnemonic, Node, Operand, SourceLine};

/// Numeric literals.
pub mod number;

/// Parse the operation and operand of a source line.
///
/// Returns `None` for lines without an operation, i.e. blank lines, comments and lines with
/// only a label.
pub fn parse_line(line: &SourceLine) -> Result<Option<Node>, ErrorKind> {
    let Some(operation) = line.operation.as_deref() else {
        return Ok(None);
    };

    if let Some(directive) = operation.strip_prefix('.') {
        return parse_directive(directive, line.operand)
            .map(|directive| Some(Node::Directive(directive)));
    }

    let mnemonic = Mnemonic::from_str(operation)
        .map_err(|_| ErrorKind::UnknownInstruction(operation.to_string()))?;

    Ok(Some(Node::Instruction(classify(line.operand, mnemonic)?)))
}

fn parse_directive(name: &str, operand: &str) -> Result<Directive, ErrorKind> {
    match name {
        "ORG" => {
            let address = parse_number(operand)?;
            let address =
                u16::try_from(address).map_err(|_| ErrorKind::AddressOverflow(address as i64))?;
            Ok(Directive::Origin(address))
        }
        "BYTE" => Ok(Directive::Byte(
            operand
                .split(',')
                .map(parse_number)
                .collect::<Result<_, _>>()?,
        )),
        "WORD" => Ok(Directive::Word(
            operand
                .split(',')
                .map(parse_word)
                .collect::<Result<_, _>>()?,
        )),
        _ => Err(ErrorKind::UnknownInstruction(format!(".{}", name))),
    }
}

/// A `.WORD` entry is either a label or a numeric literal.
fn parse_word(entry: &str) -> Result<Operand, ErrorKind> {
    let entry = entry.trim();
    if entry.is_empty() || is_number(entry) {
        Ok(Operand::Value(parse_number(entry)?))
    } else {
        Ok(Operand::Label(entry.to_string()))
    }
}

/// Determine the addressing mode of an operand.
///
/// The operand shapes are tried in a fixed order and the first match wins. Several shapes are
/// prefixes of each other, e.g. `($10,X)` would also match `(a)` and `a,X`, so the order must
/// not change.
///
/// Labels are never looked up here. A label operand is kept as [`Operand::Label`] and its mode
/// is decided from the shape alone: `label,X`, `label,Y` and `label` are always absolute (or
/// relative for branches).
#[tracing::instrument]
pub fn classify(operand: &str, mnemonic: Mnemonic) -> Result<Instruction, ErrorKind> {
    let operand = operand.trim();

    let (addr_mode, operand) = if operand.is_empty() {
        if OPCODE_MAPPING.supports(mnemonic, AddressingMode::Accumulator) {
            (AddressingMode::Accumulator, Operand::Implied)
        } else {
            (AddressingMode::Implied, Operand::Implied)
        }
    } else if operand.eq_ignore_ascii_case("A") {
        (AddressingMode::Accumulator, Operand::Implied)
    } else if let Some(value) = operand.strip_prefix('#') {
        (AddressingMode::Immediate, Operand::Value(parse_number(value)?))
    } else if let Some(expr) = indirect_x(operand) {
        (AddressingMode::IndirectX, Operand::Value(parse_number(expr)?))
    } else if let Some(expr) = indirect_y(operand) {
        (AddressingMode::IndirectY, Operand::Value(parse_number(expr)?))
    } else if let Some(expr) = indirect(operand) {
        (AddressingMode::Indirect, Operand::Value(parse_number(expr)?))
    } else if let Some(expr) = indexed(operand, 'X') {
        indexed_mode(expr, AddressingMode::ZeroPageX, AddressingMode::AbsoluteX)?
    } else if let Some(expr) = indexed(operand, 'Y') {
        indexed_mode(expr, AddressingMode::ZeroPageY, AddressingMode::AbsoluteY)?
    } else if !is_number(operand) {
        let label = Operand::Label(operand.to_string());
        if mnemonic.is_branching_instruction() {
            (AddressingMode::Relative, label)
        } else {
            (AddressingMode::Absolute, label)
        }
    } else {
        let value = parse_number(operand)?;
        if mnemonic.is_branching_instruction() {
            (AddressingMode::Relative, Operand::Value(value))
        } else if value <= 0xff {
            (AddressingMode::ZeroPage, Operand::Value(value))
        } else {
            (AddressingMode::Absolute, Operand::Value(value))
        }
    };

    Ok(Instruction::new(mnemonic, addr_mode, operand))
}

/// `expr,X` or `expr,Y` with optional whitespace after the comma. Returns `expr`.
fn indexed(operand: &str, register: char) -> Option<&str> {
    let rest = operand
        .strip_suffix(register)
        .or_else(|| operand.strip_suffix(register.to_ascii_lowercase()))?;
    let expr = rest.trim_end().strip_suffix(',')?;
    (!expr.is_empty()).then_some(expr)
}

/// `(expr,X)`
fn indirect_x(operand: &str) -> Option<&str> {
    let inner = operand.strip_prefix('(')?.strip_suffix(')')?;
    indexed(inner, 'X')
}

/// `(expr),Y`
fn indirect_y(operand: &str) -> Option<&str> {
    let rest = operand.strip_prefix('(')?;
    let expr = indexed(rest, 'Y')?.strip_suffix(')')?;
    (!expr.is_empty()).then_some(expr)
}

/// `(expr)`
fn indirect(operand: &str) -> Option<&str> {
    let expr = operand.strip_prefix('(')?.strip_suffix(')')?;
    (!expr.is_empty()).then_some(expr)
}

/// Zero page when the value fits in a byte, absolute otherwise. Labels are always absolute.
fn indexed_mode(
    expr: &str,
    zero_page: AddressingMode,
    absolute: AddressingMode,
) -> Result<(AddressingMode, Operand), ErrorKind> {
    let expr = expr.trim();
    if !is_number(expr) {
        return Ok((absolute, Operand::Label(expr.to_string())));
    }

    let value = parse_number(expr)?;
    if value <= 0xff {
        Ok((zero_page, Operand::Value(value)))
    } else {
        Ok((absolute, Operand::Value(value)))
    }
}
