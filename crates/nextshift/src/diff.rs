//! Line diffs and the HTML report page.
//!
//! The diff between original and rewritten text is computed line-by-line,
//! flattened into a unified `+`/`-`/` ` stream, and rendered as one escaped
//! `<pre>` section per modified file. The page carries its own styling plus
//! the diff2html stylesheet the original report linked, and no file-list
//! chrome (the surrounding headings already provide context).

use similar::{ChangeTag, TextDiff};

use crate::report::RunReport;

/// Unified-diff-style text stream for one file.
pub fn unified_diff(original: &str, modified: &str) -> String {
    let diff = TextDiff::from_lines(original, modified);
    let mut out = String::new();
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => '-',
            ChangeTag::Insert => '+',
            ChangeTag::Equal => ' ',
        };
        out.push(sign);
        out.push_str(change.value());
        if !change.value().ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// One `<h2>` + diff section for a modified file.
pub fn render_file_section(file: &str, original: &str, modified: &str) -> String {
    let mut html = format!("<h2>{}</h2>\n<pre class=\"diff\">", escape_html(file));
    for line in unified_diff(original, modified).lines() {
        let class = match line.as_bytes().first().copied() {
            Some(b'+') => "diff-add",
            Some(b'-') => "diff-del",
            _ => "diff-ctx",
        };
        html.push_str(&format!(
            "<span class=\"{class}\">{}</span>\n",
            escape_html(line)
        ));
    }
    html.push_str("</pre>");
    html
}

/// The standalone HTML report document.
pub fn render_report_page(report: &RunReport, sections: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<title>nextshift migration report</title>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/diff2html/bundles/css/diff2html.min.css" />
<style>
body {{ font-family: system-ui, -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif; padding: 20px; background: #05060a; color: #e5e7eb; }}
h1, h2 {{ color: #facc15; }}
a {{ color: #38bdf8; }}
pre.diff {{ background: #0b0d13; padding: 12px; border-radius: 6px; overflow-x: auto; }}
.diff-add {{ color: #4ade80; }}
.diff-del {{ color: #f87171; }}
.diff-ctx {{ color: #9ca3af; }}
</style>
</head>
<body>
<h1>nextshift migration report</h1>
<p>Root: {root}</p>
<p>Processed files: {processed}</p>
<p>Modified files: {modified}</p>
{sections}
</body>
</html>"#,
        root = escape_html(&report.root),
        processed = report.processed_files,
        modified = report.modified_files,
        sections = sections.join("\n"),
    )
}
