//! Human-readable quadruple listing for debugging.

use std::fmt::Write as _;

use crate::instruction::Quadruple;

/// Width of an index column for `count` entries.
fn width_for_count(count: usize) -> usize {
    count.saturating_sub(1).max(1).to_string().len()
}

/// Render quadruples as an indexed, column-aligned listing:
///
/// ```text
/// 0  ASSIGN  3   _  v1
/// 1  ADD     v1  2  t1
/// ```
pub fn dump(quads: &[Quadruple]) -> String {
    let idx_width = width_for_count(quads.len());
    fn field(s: &str) -> &str {
        if s.is_empty() { "_" } else { s }
    }

    let op_width = quads
        .iter()
        .map(|q| q.op.mnemonic().len())
        .max()
        .unwrap_or(0);
    let arg1_width = quads
        .iter()
        .map(|q| field(&q.arg1).len())
        .max()
        .unwrap_or(0);
    let arg2_width = quads
        .iter()
        .map(|q| field(&q.arg2).len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (i, q) in quads.iter().enumerate() {
        let mut line = format!(
            "{i:>idx_width$}  {:<op_width$}  {:<arg1_width$}  {:<arg2_width$}  {}",
            q.op.mnemonic(),
            field(&q.arg1),
            field(&q.arg2),
            field(&q.result),
        );
        while line.ends_with(' ') {
            line.pop();
        }
        let _ = writeln!(out, "{line}");
    }
    out
}
