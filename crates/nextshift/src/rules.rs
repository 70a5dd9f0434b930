//! The rewrite rule tables.
//!
//! Rules are plain data consumed by the transform engine, so adding a new
//! import rewrite or JSX rename means adding a table row, not touching the
//! traversal. Messages are the human-readable strings that end up in the
//! per-file change log of the run report.

/// What to do with a matched import declaration.
#[derive(Debug, Clone, Copy)]
pub enum ImportAction {
    /// Replace the whole import statement with canonical replacement text.
    Replace {
        /// Full replacement statement, e.g. `import { Link } from "react-router-dom";`
        statement: &'static str,
        /// Whether the replacement itself brings `Suspense` into scope
        /// (feeds the lazy-usage post-pass).
        adds_suspense: bool,
    },
    /// Delete the import statement and the line it occupies.
    Remove,
}

/// A source-module-keyed import rewrite.
#[derive(Debug, Clone, Copy)]
pub struct ImportRule {
    /// Import source string to match exactly
    pub source: &'static str,
    pub action: ImportAction,
    /// Change-log message recorded when the rule fires
    pub message: &'static str,
}

/// Next.js import rewrites, in match precedence order.
pub const IMPORT_RULES: &[ImportRule] = &[
    ImportRule {
        source: "next/dynamic",
        action: ImportAction::Replace {
            statement: "import { lazy, Suspense } from \"react\";",
            adds_suspense: true,
        },
        message: "Replaced next/dynamic with React.lazy",
    },
    ImportRule {
        source: "next/link",
        action: ImportAction::Replace {
            statement: "import { Link } from \"react-router-dom\";",
            adds_suspense: false,
        },
        message: "Replaced next/link with react-router-dom Link",
    },
    ImportRule {
        source: "next/image",
        action: ImportAction::Remove,
        message: "Removed next/image import",
    },
    ImportRule {
        source: "next/navigation",
        action: ImportAction::Replace {
            statement: "import { useNavigate } from \"react-router-dom\";",
            adds_suspense: false,
        },
        message: "Replaced next/navigation with react-router-dom useNavigate",
    },
    ImportRule {
        source: "next/head",
        action: ImportAction::Remove,
        message: "Removed next/head import",
    },
];

/// Look up the import rule for a module source string, if any.
pub fn import_rule_for(source: &str) -> Option<&'static ImportRule> {
    IMPORT_RULES.iter().find(|rule| rule.source == source)
}

/// A JSX element rename, applied to both the opening and closing tag.
#[derive(Debug, Clone, Copy)]
pub struct ElementRename {
    pub from: &'static str,
    pub to: &'static str,
    pub message: &'static str,
}

pub const ELEMENT_RENAMES: &[ElementRename] = &[ElementRename {
    from: "Image",
    to: "img",
    message: "Converted <Image> to <img>",
}];

/// A JSX attribute rename, scoped to a particular element name.
#[derive(Debug, Clone, Copy)]
pub struct AttributeRename {
    pub element: &'static str,
    pub from: &'static str,
    pub to: &'static str,
    pub message: &'static str,
}

pub const ATTRIBUTE_RENAMES: &[AttributeRename] = &[AttributeRename {
    element: "Link",
    from: "href",
    to: "to",
    message: "Converted <Link href=\"...\"> to <Link to=\"...\">",
}];

/// Bundler alias prefix rewritten to a relative path.
pub const ALIAS_PREFIX: &str = "@/";

/// Callee name that marks a file as using lazy loading.
pub const LAZY_CALLEE: &str = "lazy";

/// Module whose import statement receives the appended `Suspense` specifier.
pub const REACT_SOURCE: &str = "react";

/// Named import required alongside any `lazy()` usage.
pub const SUSPENSE_SPECIFIER: &str = "Suspense";

/// Change-log message for the lazy-usage post-pass.
pub const SUSPENSE_MESSAGE: &str = "Added Suspense to react import for lazy()";
