/// An operand of an [`instruction`][super::Instruction].
///
/// This represents the data used by the instruction as far as it is known after classifying the
/// operand text.
#[derive(Debug, Hash, Eq, PartialEq, Clone)]
pub enum Operand {
    /// `Implied` covers both
    /// [`AddressingMode::Accumulator`][super::AddressingMode#variant.Accumulator] and
    /// [`AddressingMode::Implied`][super::AddressingMode#variant.Implied]
    Implied,
    /// A numeric literal. Only the low byte, or the two low bytes, end up in the output.
    Value(i32),
    /// A reference to a label, resolved to its address in the second pass.
    Label(String),
}
