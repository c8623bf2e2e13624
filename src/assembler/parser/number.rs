use crate::assembler::ErrorKind;

/// Whether `text` looks like a numeric literal rather than a label.
///
/// `0x` literals start with a digit and are covered by the digit check.
pub fn is_number(text: &str) -> bool {
    matches!(text.chars().next(), Some(c) if c == '$' || c == '%' || c.is_ascii_digit())
}

/// Parse a numeric literal.
///
/// - `$FF`, `0xFF`, `0XFF`: hexadecimal
/// - `%1010`: binary
/// - `255`, `-1`: decimal
pub fn parse_number(text: &str) -> Result<i32, ErrorKind> {
    let trimmed = text.trim();

    let parsed = if let Some(hex) = trimmed.strip_prefix('$') {
        i32::from_str_radix(hex, 16)
    } else if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        i32::from_str_radix(hex, 16)
    } else if let Some(bin) = trimmed.strip_prefix('%') {
        i32::from_str_radix(bin, 2)
    } else {
        trimmed.parse::<i32>()
    };

    parsed.map_err(|_| ErrorKind::MalformedLiteral(trimmed.to_string()))
}
