/// Number of bytes printed per row.
pub const STRIDE: usize = 16;

/// Hexdump `length` bytes of memory starting at `start`, e.g.
///
/// ```text
/// $1000: A9 05 8D 00 02 00 00 00 00 00 00 00 00 00 00 00
/// ```
///
/// The range is clipped to the memory, so dumping past the end prints fewer bytes.
pub fn dump(memory: &[u8], start: usize, length: usize) -> String {
    let end = start.saturating_add(length).min(memory.len());
    let start = start.min(end);

    let mut str = String::new();
    for (ix, row) in memory[start..end].chunks(STRIDE).enumerate() {
        if ix != 0 {
            str.push('\n');
        }
        str.push_str(format!("${:04X}:", start + ix * STRIDE).as_str());
        for byte in row {
            str.push_str(format!(" {:02X}", byte).as_str());
        }
    }

    str
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_dump() {
        let mut memory = vec![0u8; 0x40];
        let program = [
            0xA2, 0x00, 0xA0, 0x00, 0x8A, 0x99, 0x00, 0x02, 0x48, 0xE8, 0xC8, 0xC0, 0x10, 0xD0,
            0xF5, 0x68, 0x99, 0x00, 0x02, 0xC8, 0xC0, 0x20, 0xD0, 0xF7,
        ];
        memory[0x10..0x10 + program.len()].copy_from_slice(&program);

        assert_eq!(
            dump(&memory, 0x10, 32),
            "$0010: A2 00 A0 00 8A 99 00 02 48 E8 C8 C0 10 D0 F5 68
$0020: 99 00 02 C8 C0 20 D0 F7 00 00 00 00 00 00 00 00"
        );
    }

    #[test]
    fn test_dump_is_clipped() {
        let memory = vec![0xEAu8; 0x20];
        let tests = vec![
            (0x18, 64, "$0018: EA EA EA EA EA EA EA EA"),
            (0x00, 3, "$0000: EA EA EA"),
            (0x20, 16, ""),
            (0x80, 16, ""),
            (0x00, 0, ""),
        ];

        for (start, length, expected) in tests {
            assert_eq!(dump(&memory, start, length), expected);
        }
    }
}
