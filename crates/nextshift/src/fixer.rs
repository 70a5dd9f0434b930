//! Span-based text edits.
//!
//! The transform engine does not mutate the AST; it records `Fix` edits
//! keyed by source spans, and the emitter splices them back into the
//! original text. Untouched bytes are carried through verbatim, which keeps
//! formatting, comments, and line structure intact in every region no rule
//! touched.

use oxc_span::Span;
use thiserror::Error;

/// A single text edit: replace the bytes covered by `span` with `replacement`.
///
/// A zero-width span is an insertion; an empty replacement is a deletion.
#[derive(Debug, Clone)]
pub struct Fix {
    pub span: Span,
    pub replacement: String,
}

impl Fix {
    /// Replace the span with new text
    pub fn replace(span: Span, replacement: impl Into<String>) -> Self {
        Self {
            span,
            replacement: replacement.into(),
        }
    }

    /// Insert text at a byte offset
    pub fn insert(offset: u32, replacement: impl Into<String>) -> Self {
        Self::replace(Span::new(offset, offset), replacement)
    }

    /// Delete the span
    pub fn delete(span: Span) -> Self {
        Self::replace(span, "")
    }
}

/// Two fixes claimed overlapping byte ranges.
///
/// The shipped rule set cannot produce this (each rule edits disjoint
/// nodes), but the applier guards anyway: an overlap would silently corrupt
/// the output, and per the pipeline's failure semantics it must instead be
/// fatal for the file only.
#[derive(Debug, Error)]
#[error("overlapping edits at byte {offset}")]
pub struct OverlapError {
    pub offset: u32,
}

/// Apply `fixes` to `source`, producing the rewritten text.
///
/// Fixes are sorted by start offset before application, so callers may
/// record them in any order. Output is byte-identical across runs for the
/// same input and fix set.
pub fn apply_fixes(source: &str, mut fixes: Vec<Fix>) -> Result<String, OverlapError> {
    fixes.sort_by_key(|fix| (fix.span.start, fix.span.end));

    let mut output = String::with_capacity(source.len());
    let mut cursor = 0u32;
    for fix in &fixes {
        if fix.span.start < cursor {
            return Err(OverlapError {
                offset: fix.span.start,
            });
        }
        output.push_str(&source[cursor as usize..fix.span.start as usize]);
        output.push_str(&fix.replacement);
        cursor = fix.span.end;
    }
    output.push_str(&source[cursor as usize..]);

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_replacements_in_span_order() {
        let source = "aaa bbb ccc";
        let fixes = vec![
            Fix::replace(Span::new(8, 11), "C"),
            Fix::replace(Span::new(0, 3), "A"),
        ];
        assert_eq!(apply_fixes(source, fixes).unwrap(), "A bbb C");
    }

    #[test]
    fn insertion_and_deletion() {
        let source = "import x;\nimport y;\n";
        let fixes = vec![
            Fix::delete(Span::new(0, 10)),
            Fix::insert(19, " // kept"),
        ];
        assert_eq!(apply_fixes(source, fixes).unwrap(), "import y; // kept\n");
    }

    #[test]
    fn no_fixes_is_identity() {
        let source = "const a = 1;\n";
        assert_eq!(apply_fixes(source, Vec::new()).unwrap(), source);
    }

    #[test]
    fn overlap_is_rejected() {
        let source = "abcdef";
        let fixes = vec![
            Fix::replace(Span::new(0, 4), "x"),
            Fix::replace(Span::new(2, 6), "y"),
        ];
        assert!(apply_fixes(source, fixes).is_err());
    }

    #[test]
    fn adjacent_edits_are_fine() {
        let source = "abcdef";
        let fixes = vec![
            Fix::replace(Span::new(0, 3), "x"),
            Fix::replace(Span::new(3, 6), "y"),
        ];
        assert_eq!(apply_fixes(source, fixes).unwrap(), "xy");
    }
}
