//! Wire format for quadruple files.
//!
//! One record per line, four comma-separated fields:
//! `<op_int>,<arg1>,<arg2>,<result>`. Empty fields stay empty between the
//! commas, every record ends with a newline, and argument text is written
//! verbatim (places never contain commas).

use crate::instruction::{OpCode, Quadruple};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("line {line}: expected 4 comma-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: `{text}` is not an opcode number")]
    BadOpInt { line: usize, text: String },

    #[error("line {line}: unknown opcode {value}")]
    UnknownOp { line: usize, value: u8 },
}

/// Serialize quadruples into the wire format.
pub fn write_quads(quads: &[Quadruple]) -> String {
    let mut out = String::new();
    for q in quads {
        out.push_str(&format!(
            "{},{},{},{}\n",
            q.op as u8, q.arg1, q.arg2, q.result
        ));
    }
    out
}

/// Parse a wire-format string back into quadruples.
///
/// Accepts a missing trailing newline on the last record; blank lines are
/// rejected via the field-count check.
pub fn read_quads(input: &str) -> Result<Vec<Quadruple>, FormatError> {
    let mut quads = Vec::new();
    for (i, line) in input.lines().enumerate() {
        let line_no = i + 1;
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 4 {
            return Err(FormatError::FieldCount {
                line: line_no,
                found: fields.len(),
            });
        }
        let value: u8 = fields[0].parse().map_err(|_| FormatError::BadOpInt {
            line: line_no,
            text: fields[0].to_string(),
        })?;
        let op = OpCode::from_u8(value).ok_or(FormatError::UnknownOp {
            line: line_no,
            value,
        })?;
        quads.push(Quadruple::new(op, fields[1], fields[2], fields[3]));
    }
    Ok(quads)
}
