//! Table command implementation.

use crate::utils::{CodeJson, code_rows, print_code_table};
use oxihuff_codec::HuffmanCodec;
use serde::Serialize;

/// JSON output for the code table.
#[derive(Debug, Serialize)]
struct TableJson {
    symbols: usize,
    max_code_len: usize,
    codes: Vec<CodeJson>,
}

pub fn cmd_table(
    codec: &HuffmanCodec,
    input: &[u8],
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = codec.run(input)?;

    if json {
        let output = TableJson {
            symbols: report.codes.len(),
            max_code_len: report.codes.max_code_len(),
            codes: code_rows(&report.codes, &report.frequencies),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_code_table(&report.codes, &report.frequencies);
    Ok(())
}
