//! Parser façade over OXC.
//!
//! Wraps `oxc_parser` with the policy the pipeline needs: any diagnostic is
//! a hard `ParseError` for that file (the caller skips the file, never the
//! run), and the source dialect is inferred from the file extension with a
//! TSX fallback so the parser always accepts the typed-JSX superset.

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::error::{MigrateError, Result};

/// Infer the source dialect from a file path, defaulting to TSX.
pub fn source_type_for(path: &Path) -> SourceType {
    SourceType::from_path(path).unwrap_or_else(|_| SourceType::tsx())
}

/// Parse `source` into an AST allocated in `allocator`.
///
/// The allocator must outlive the returned program. `path` is used for the
/// dialect and for diagnostics only; nothing is read from disk here.
pub fn parse<'a>(allocator: &'a Allocator, source: &'a str, path: &Path) -> Result<Program<'a>> {
    let ret = Parser::new(allocator, source, source_type_for(path)).parse();

    if ret.panicked || !ret.errors.is_empty() {
        let message = ret
            .errors
            .first()
            .map(|err| format!("{err:?}"))
            .unwrap_or_else(|| "parser panicked".to_string());
        return Err(MigrateError::parse(path, message));
    }

    Ok(ret.program)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_typed_jsx() {
        let allocator = Allocator::default();
        let source = "const x: number = 1;\nexport const App = () => <div id=\"a\">{x}</div>;\n";
        let program = parse(&allocator, source, Path::new("App.tsx")).unwrap();
        assert!(!program.body.is_empty());
    }

    #[test]
    fn malformed_input_is_a_parse_error() {
        let allocator = Allocator::default();
        let source = "const = <div;\n";
        let err = parse(&allocator, source, Path::new("broken.tsx")).unwrap_err();
        assert!(matches!(err, MigrateError::Parse { .. }));
    }

    #[test]
    fn unknown_extension_falls_back_to_tsx() {
        let ty = source_type_for(Path::new("weird.component"));
        assert!(ty.is_jsx());
    }
}
