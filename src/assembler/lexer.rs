use crate::ast::SourceLine;

// Example code:
//
//         .ORG $1000
// start:  LDX #$08      ; counter
// loop:   DEX
//         BNE loop
//         JMP start
// table:  .BYTE $01, $02, %00000011
//
// ':' = label, e.g. `my_label:`
// ';' = comment, e.g. `; this is a comment`
// '.' = directive, e.g. `.WORD table`

/// Tokenize every line of the source. Blank lines are kept so that line numbers match the
/// source.
#[tracing::instrument(skip_all)]
pub fn tokenize(source: &str) -> Vec<SourceLine<'_>> {
    source
        .lines()
        .enumerate()
        .map(|(ix, text)| tokenize_line(ix + 1, text))
        .collect()
}

/// Split a single line into label, operation and operand.
pub fn tokenize_line(number: usize, text: &str) -> SourceLine<'_> {
    let code = match text.find(';') {
        Some(comment_start) => &text[..comment_start],
        None => text,
    }
    .trim();

    let (label, statement) = match code.split_once(':') {
        Some((label, statement)) => (Some(label.trim()), statement.trim()),
        None => (None, code),
    };

    let (operation, operand) = match statement.split_once(char::is_whitespace) {
        Some((operation, operand)) => (operation, operand.trim_start()),
        None => (statement, ""),
    };

    SourceLine {
        number,
        label: label.filter(|label| !label.is_empty()),
        operation: (!operation.is_empty()).then(|| operation.to_uppercase()),
        operand,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn line<'a>(
        number: usize,
        label: Option<&'a str>,
        operation: Option<&str>,
        operand: &'a str,
    ) -> SourceLine<'a> {
        SourceLine {
            number,
            label,
            operation: operation.map(str::to_string),
            operand,
        }
    }

    #[test]
    fn test_tokenize_line() {
        let tests = vec![
            ("  LDX #$00", line(1, None, Some("LDX"), "#$00")),
            ("loop: bne loop ; again", line(1, Some("loop"), Some("BNE"), "loop")),
            ("end:", line(1, Some("end"), None, "")),
            ("  ; only a comment", line(1, None, None, "")),
            ("", line(1, None, None, "")),
            ("\tsta   $0200 , y\r", line(1, None, Some("STA"), "$0200 , y")),
            ("table: .byte 1, 2,3", line(1, Some("table"), Some(".BYTE"), "1, 2,3")),
            ("MixedCase:rts", line(1, Some("MixedCase"), Some("RTS"), "")),
            (": NOP", line(1, None, Some("NOP"), "")),
        ];

        for (input, expected) in tests {
            assert_eq!(tokenize_line(1, input), expected);
        }
    }

    #[test]
    fn test_tokenize_keeps_line_numbers() {
        let lines = tokenize("NOP\n\n; comment\nfoo: INX\n");

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], line(4, Some("foo"), Some("INX"), ""));
        assert!(lines[1].operation.is_none());
    }
}
