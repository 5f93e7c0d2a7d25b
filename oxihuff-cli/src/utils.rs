//! Utility functions for the CLI.

use log::debug;
use oxihuff_codec::{CodeTable, FrequencyTable, HuffError, symbol_label};
use serde::Serialize;
use std::fmt::Write as _;
use std::io::{self, BufRead, IsTerminal, Write};

/// Get the input text: the argument if given, otherwise one line from stdin.
///
/// The trailing line terminator is stripped. Empty input is rejected here,
/// before the codec runs.
pub fn read_input(text: Option<&str>) -> Result<Vec<u8>, HuffError> {
    let mut line = match text {
        Some(text) => text.as_bytes().to_vec(),
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                eprint!("Enter text: ");
                io::stderr().flush()?;
            }
            let mut buf = Vec::new();
            stdin.lock().read_until(b'\n', &mut buf)?;
            buf
        }
    };

    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }

    if line.is_empty() {
        return Err(HuffError::EmptyInput);
    }
    debug!("read {} input bytes", line.len());
    Ok(line)
}

/// Hex dump of raw bytes: two uppercase digits per byte, space separated.
pub fn ascii_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Input bytes as text, with invalid UTF-8 replaced.
pub fn display_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// JSON form of one code table row.
#[derive(Debug, Serialize)]
pub struct CodeJson {
    pub symbol: u8,
    pub display: String,
    pub count: u64,
    pub code: String,
}

/// Rows of the code table in ascending symbol order.
pub fn code_rows(codes: &CodeTable, freq: &FrequencyTable) -> Vec<CodeJson> {
    codes
        .iter()
        .map(|(symbol, code)| CodeJson {
            symbol,
            display: symbol_label(symbol),
            count: freq.get(symbol),
            code: code.to_string(),
        })
        .collect()
}

/// Width of the Char column; fits the longest label, `Ctrl-255`.
const CHAR_WIDTH: usize = 8;

/// Render the code table as a boxed text table.
pub fn format_code_table(codes: &CodeTable, freq: &FrequencyTable) -> String {
    let code_width = codes.max_code_len().max(19);
    let rule = format!(
        "+-{}-+----------+-------+-{}-+",
        "-".repeat(CHAR_WIDTH),
        "-".repeat(code_width)
    );

    let mut out = String::new();
    let _ = writeln!(out, "Huffman Code Table:");
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(
        out,
        "| {:<cw$} | {:<8} | {:>5} | {:<width$} |",
        "Char",
        "ASCII",
        "Count",
        "Code",
        cw = CHAR_WIDTH,
        width = code_width
    );
    let _ = writeln!(out, "{}", rule);
    for row in code_rows(codes, freq) {
        let _ = writeln!(
            out,
            "| {:<cw$} | 0x{:02X}     | {:>5} | {:<width$} |",
            row.display,
            row.symbol,
            row.count,
            row.code,
            cw = CHAR_WIDTH,
            width = code_width
        );
    }
    let _ = writeln!(out, "{}", rule);
    out
}

/// Print the code table as a boxed text table.
pub fn print_code_table(codes: &CodeTable, freq: &FrequencyTable) {
    print!("{}", format_code_table(codes, freq));
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxihuff_codec::{build_tree, count_frequencies, generate_codes};

    #[test]
    fn test_read_input_strips_newline() {
        assert_eq!(read_input(Some("hello\n")).unwrap(), b"hello");
        assert_eq!(read_input(Some("hello\r\n")).unwrap(), b"hello");
        assert_eq!(read_input(Some("hello")).unwrap(), b"hello");
    }

    #[test]
    fn test_read_input_rejects_empty() {
        assert!(matches!(read_input(Some("")), Err(HuffError::EmptyInput)));
        assert!(matches!(
            read_input(Some("\n")),
            Err(HuffError::EmptyInput)
        ));
    }

    #[test]
    fn test_ascii_hex() {
        assert_eq!(ascii_hex(b"AB\n"), "41 42 0A");
        assert_eq!(ascii_hex(b""), "");
    }

    #[test]
    fn test_code_rows() {
        let freq = count_frequencies(b"aaaabbbcc");
        let codes = generate_codes(&build_tree(&freq).unwrap());
        let rows = code_rows(&codes, &freq);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].display, "'a'");
        assert_eq!(rows[0].count, 4);
        assert_eq!(rows[0].code, "0");
        assert_eq!(rows[2].symbol, b'c');
        assert_eq!(rows[2].code, "10");
    }

    #[test]
    fn test_code_table_columns_align() {
        let input = [0xFFu8, 0xFF, b'\n', b'a', b'a', b'a'];
        let freq = count_frequencies(&input);
        let codes = generate_codes(&build_tree(&freq).unwrap());
        let table = format_code_table(&codes, &freq);

        let lines: Vec<&str> = table.lines().skip(1).collect();
        assert_eq!(lines.len(), 3 + codes.len() + 1);
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
        assert!(table.contains("| Ctrl-255 | 0xFF     |"));
        assert!(table.contains("| Ctrl-10  | 0x0A     |"));
    }
}
