//! The rule engine: one depth-first traversal, then a whole-file post-pass.
//!
//! Stage 1 walks the AST once, matching the tables in [`crate::rules`]
//! against import declarations, call expressions, and JSX elements, and
//! recording span edits plus change-log messages. Stage 2 runs after the
//! traversal completes and only inspects flags Stage 1 accumulated (the
//! `lazy()`-usage / missing-`Suspense` rule). The two stages never
//! interleave, which keeps the cross-cutting rule testable on its own.

use std::path::{Component, Path};

use oxc_ast::ast::{
    CallExpression, Expression, ImportDeclaration, ImportDeclarationSpecifier, JSXAttributeItem,
    JSXAttributeName, JSXElement, JSXElementName, ModuleExportName, Program,
};
use oxc_ast_visit::{Visit, walk};
use oxc_span::Span;

use crate::fixer::Fix;
use crate::rules::{self, ImportAction};

/// Edits and change log produced by transforming one file.
#[derive(Debug, Default)]
pub struct TransformOutcome {
    pub fixes: Vec<Fix>,
    /// Human-readable messages in rule-firing order (traversal order, with
    /// the post-pass message last).
    pub changes: Vec<String>,
}

/// Where an appended specifier could land in a `react` import.
#[derive(Debug, Clone, Copy)]
enum AppendPoint {
    /// Byte offset just after the last named specifier inside braces
    Named(u32),
    /// Byte offset just after the default specifier
    Default(u32),
}

/// What Stage 1 learned about one `import ... from "react"` statement.
#[derive(Debug, Clone, Copy)]
struct ReactImport {
    has_suspense: bool,
    append: Option<AppendPoint>,
}

struct RuleVisitor<'src> {
    source_text: &'src str,
    file_dir: &'src Path,
    source_root: &'src Path,
    fixes: Vec<Fix>,
    changes: Vec<String>,
    uses_lazy: bool,
    react_imports: Vec<ReactImport>,
}

/// Apply the full rule set to a parsed file.
///
/// `file_path` and `source_root` must both be absolute (the pipeline
/// guarantees this) so that alias rewrites resolve identically to the
/// original `@/` import under the bundler's module resolution.
pub fn transform(
    program: &Program<'_>,
    source_text: &str,
    file_path: &Path,
    source_root: &Path,
) -> TransformOutcome {
    let file_dir = file_path.parent().unwrap_or(Path::new(""));

    let mut visitor = RuleVisitor {
        source_text,
        file_dir,
        source_root,
        fixes: Vec::new(),
        changes: Vec::new(),
        uses_lazy: false,
        react_imports: Vec::new(),
    };
    walk::walk_program(&mut visitor, program);

    let mut outcome = TransformOutcome {
        fixes: visitor.fixes,
        changes: visitor.changes,
    };

    // Stage 2: lazy() needs Suspense in scope.
    let has_suspense = visitor.react_imports.iter().any(|imp| imp.has_suspense);
    if visitor.uses_lazy && !has_suspense {
        let append = visitor.react_imports.iter().find_map(|imp| imp.append);
        if let Some(point) = append {
            let fix = match point {
                AppendPoint::Named(offset) => Fix::insert(offset, ", Suspense"),
                AppendPoint::Default(offset) => Fix::insert(offset, ", { Suspense }"),
            };
            outcome.fixes.push(fix);
            outcome.changes.push(rules::SUSPENSE_MESSAGE.to_string());
        }
    }

    outcome
}

impl<'src> RuleVisitor<'src> {
    /// Extend a statement span over trailing horizontal whitespace and one
    /// line terminator, so deleting it does not leave a blank line.
    fn span_with_line_end(&self, span: Span) -> Span {
        let bytes = self.source_text.as_bytes();
        let mut end = span.end as usize;
        while end < bytes.len() && (bytes[end] == b' ' || bytes[end] == b'\t') {
            end += 1;
        }
        if end < bytes.len() && bytes[end] == b'\r' {
            end += 1;
        }
        if end < bytes.len() && bytes[end] == b'\n' {
            end += 1;
        }
        Span::new(span.start, end as u32)
    }

    fn inspect_react_import(&self, import: &ImportDeclaration<'_>) -> ReactImport {
        let mut has_suspense = false;
        let mut last_named_end = None;
        let mut default_end = None;

        if let Some(specifiers) = &import.specifiers {
            for specifier in specifiers {
                match specifier {
                    ImportDeclarationSpecifier::ImportSpecifier(named) => {
                        if let ModuleExportName::IdentifierName(imported) = &named.imported {
                            if imported.name.as_str() == rules::SUSPENSE_SPECIFIER {
                                has_suspense = true;
                            }
                        }
                        last_named_end = Some(named.span.end);
                    }
                    ImportDeclarationSpecifier::ImportDefaultSpecifier(default) => {
                        default_end = Some(default.span.end);
                    }
                    // `import * as React` cannot take an extra named specifier
                    ImportDeclarationSpecifier::ImportNamespaceSpecifier(_) => {}
                }
            }
        }

        let append = match (last_named_end, default_end) {
            (Some(end), _) => Some(AppendPoint::Named(end)),
            (None, Some(end)) => Some(AppendPoint::Default(end)),
            (None, None) => None,
        };

        ReactImport {
            has_suspense,
            append,
        }
    }

    fn rewrite_alias(&mut self, import: &ImportDeclaration<'_>, source: &str, rest: &str) {
        let rewritten = alias_to_relative(rest, self.file_dir, self.source_root);

        // Keep the file's own quote character.
        let raw = &self.source_text[import.source.span.start as usize..import.source.span.end as usize];
        let quote = raw.chars().next().unwrap_or('"');

        self.fixes.push(Fix::replace(
            import.source.span,
            format!("{quote}{rewritten}{quote}"),
        ));
        self.changes
            .push(format!("Alias import \"{source}\" \u{2192} \"{rewritten}\""));
    }
}

impl<'src, 'ast> Visit<'ast> for RuleVisitor<'src> {
    fn visit_import_declaration(&mut self, import: &ImportDeclaration<'ast>) {
        let source = import.source.value.as_str();

        if let Some(rule) = rules::import_rule_for(source) {
            match rule.action {
                ImportAction::Replace {
                    statement,
                    adds_suspense,
                } => {
                    self.fixes.push(Fix::replace(import.span, statement));
                    if adds_suspense {
                        self.react_imports.push(ReactImport {
                            has_suspense: true,
                            append: None,
                        });
                    }
                }
                ImportAction::Remove => {
                    self.fixes
                        .push(Fix::delete(self.span_with_line_end(import.span)));
                }
            }
            self.changes.push(rule.message.to_string());
            return;
        }

        if source == rules::REACT_SOURCE {
            let react_import = self.inspect_react_import(import);
            self.react_imports.push(react_import);
        }

        if let Some(rest) = source.strip_prefix(rules::ALIAS_PREFIX) {
            self.rewrite_alias(import, source, rest);
        }
    }

    fn visit_call_expression(&mut self, call: &CallExpression<'ast>) {
        if let Expression::Identifier(ident) = &call.callee {
            if ident.name.as_str() == rules::LAZY_CALLEE {
                self.uses_lazy = true;
            }
        }
        walk::walk_call_expression(self, call);
    }

    fn visit_jsx_element(&mut self, element: &JSXElement<'ast>) {
        if let Some((name, name_span)) = element_name(&element.opening_element.name) {
            for rename in rules::ELEMENT_RENAMES {
                if name == rename.from {
                    self.fixes.push(Fix::replace(name_span, rename.to));
                    if let Some(closing) = &element.closing_element {
                        if let Some((_, closing_span)) = element_name(&closing.name) {
                            self.fixes.push(Fix::replace(closing_span, rename.to));
                        }
                    }
                    self.changes.push(rename.message.to_string());
                }
            }

            for rename in rules::ATTRIBUTE_RENAMES {
                if name != rename.element {
                    continue;
                }
                for item in &element.opening_element.attributes {
                    let JSXAttributeItem::Attribute(attribute) = item else {
                        continue;
                    };
                    let JSXAttributeName::Identifier(attr_name) = &attribute.name else {
                        continue;
                    };
                    if attr_name.name.as_str() == rename.from {
                        self.fixes.push(Fix::replace(attr_name.span, rename.to));
                        self.changes.push(rename.message.to_string());
                    }
                }
            }
        }

        walk::walk_jsx_element(self, element);
    }
}

/// Name and span of a plain-identifier JSX tag; namespaced and member
/// expressions (`<a.b/>`, `<svg:rect/>`) never match a rule.
fn element_name<'a, 'ast>(name: &'a JSXElementName<'ast>) -> Option<(&'a str, Span)> {
    match name {
        JSXElementName::Identifier(ident) => Some((ident.name.as_str(), ident.span)),
        JSXElementName::IdentifierReference(ident) => Some((ident.name.as_str(), ident.span)),
        _ => None,
    }
}

/// Rewrite the remainder of an `@/` alias import to a relative path from
/// `file_dir` to `<source_root>/<rest>`, forward-slash normalized and
/// prefixed with `./` when it does not already start with a dot.
pub fn alias_to_relative(rest: &str, file_dir: &Path, source_root: &Path) -> String {
    let target = source_root.join(rest);
    let mut relative = relative_path(file_dir, &target);
    if !relative.starts_with('.') {
        relative = format!("./{relative}");
    }
    relative
}

/// Lexical relative path between two (absolute) paths, `/`-joined.
fn relative_path(from: &Path, to: &Path) -> String {
    let from: Vec<Component<'_>> = from.components().collect();
    let to: Vec<Component<'_>> = to.components().collect();

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = vec!["..".to_string(); from.len() - common];
    parts.extend(
        to[common..]
            .iter()
            .map(|component| component.as_os_str().to_string_lossy().into_owned()),
    );
    parts.join("/")
}
