//! # IR Optimizer
//!
//! Optimization passes that transform IR programs to reduce redundancy.
//!
//! ## Optimization Passes
//!
//! 1. **Drop empty text**: `Text("")` emits nothing
//! 2. **Merge adjacent text**: Combine consecutive Text ops
//! 3. **Remove empty spans**: `<span></span>` with no content is dropped

use super::ops::{Op, Program, Tag};

impl Program {
    /// Apply all optimization passes.
    pub fn optimize(self) -> Self {
        let ops = self.ops;
        let ops = drop_empty_text(ops);
        let ops = merge_adjacent_text(ops);
        let ops = remove_empty_spans(ops);
        Program { ops }
    }
}

fn drop_empty_text(ops: Vec<Op>) -> Vec<Op> {
    ops.into_iter()
        .filter(|op| !matches!(op, Op::Text(s) if s.is_empty()))
        .collect()
}

/// Merge consecutive Text ops into a single op.
fn merge_adjacent_text(ops: Vec<Op>) -> Vec<Op> {
    let mut result: Vec<Op> = Vec::with_capacity(ops.len());

    for op in ops {
        if let (Op::Text(next), Some(Op::Text(prev))) = (&op, result.last_mut()) {
            prev.push_str(next);
            continue;
        }
        result.push(op);
    }

    result
}

/// Drop `Open(Span)` immediately followed by `Close(Span)`.
///
/// Only spans: empty table cells and divs still carry layout.
fn remove_empty_spans(ops: Vec<Op>) -> Vec<Op> {
    let mut result: Vec<Op> = Vec::with_capacity(ops.len());

    for op in ops {
        if matches!(op, Op::Close(Tag::Span))
            && matches!(result.last(), Some(Op::Open { tag: Tag::Span, .. }))
        {
            result.pop();
            continue;
        }
        result.push(op);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_adjacent_text() {
        let program: Program = vec![
            Op::Text("Hello".into()),
            Op::Text(", ".into()),
            Op::Text("World".into()),
        ]
        .into_iter()
        .collect();

        let optimized = program.optimize();
        assert_eq!(optimized.ops, vec![Op::Text("Hello, World".into())]);
    }

    #[test]
    fn test_text_separated_by_element_not_merged() {
        let program: Program = vec![
            Op::Text("a".into()),
            Op::open_plain(Tag::Div),
            Op::Close(Tag::Div),
            Op::Text("b".into()),
        ]
        .into_iter()
        .collect();

        assert_eq!(program.optimize().len(), 4);
    }

    #[test]
    fn test_remove_empty_spans() {
        let program: Program = vec![
            Op::open(Tag::Div, "row"),
            Op::open(Tag::Span, "value"),
            Op::Text(String::new()),
            Op::Close(Tag::Span),
            Op::Close(Tag::Div),
        ]
        .into_iter()
        .collect();

        let optimized = program.optimize();
        assert_eq!(
            optimized.ops,
            vec![Op::open(Tag::Div, "row"), Op::Close(Tag::Div)]
        );
    }

    #[test]
    fn test_empty_cells_kept() {
        let program: Program = vec![
            Op::open_plain(Tag::Td),
            Op::Close(Tag::Td),
        ]
        .into_iter()
        .collect();

        assert_eq!(program.optimize().len(), 2);
    }
}
