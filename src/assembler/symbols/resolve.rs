use super::LabelTable;
use crate::{assembler::ErrorKind, ast::Operand};

/// Resolve an operand to its numeric value by looking up labels in the label table.
///
/// Implied operands resolve to zero, they emit no operand bytes anyway.
pub fn resolve_operand(operand: &Operand, labels: &LabelTable) -> Result<i32, ErrorKind> {
    match operand {
        Operand::Implied => Ok(0),
        Operand::Value(value) => Ok(*value),
        Operand::Label(label) => labels
            .address(label)
            .map(i32::from)
            .ok_or_else(|| ErrorKind::UnknownLabel(label.clone())),
    }
}

/// Offset from the instruction following a branch to the branch target.
///
/// The CPU has already moved the program counter past the branch instruction when the offset is
/// added, so the offset is counted from `address + size`.
pub fn relative_offset(address: u32, size: usize, target: i32) -> Result<i8, ErrorKind> {
    let offset = target as i64 - (address as i64 + size as i64);
    i8::try_from(offset).map_err(|_| ErrorKind::BranchOutOfRange(offset as i32))
}
