//! Substitution-based Markdown renderer
//!
//! Turns Markdown source into an HTML fragment by running an ordered chain of
//! regex replacements over the whole buffer. Each rule sees the output of the
//! previous one. Nothing is escaped, so inline HTML passes through untouched.
//!
//! # Known behavior
//! - All `- item` lines in the buffer end up inside one `<ul>`, even when
//!   separated by other content.
//! - `![alt](url)` is consumed by the link rule first and renders as
//!   `!<a href="url">alt</a>`.
//! - Runs of three or more asterisks produce whatever the bold-then-italic
//!   order yields.

use regex::Regex;
use std::sync::OnceLock;

// ─────────────────────────────────────────────────────────────────────────────
// Rules
// ─────────────────────────────────────────────────────────────────────────────

/// One pattern and its replacement template.
struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

/// Rule table in application order.
const RULE_SOURCES: &[(&str, &str)] = &[
    (r"(?m)^# (.*)$", "<h1>${1}</h1>"),
    (r"(?m)^## (.*)$", "<h2>${1}</h2>"),
    (r"(?m)^### (.*)$", "<h3>${1}</h3>"),
    (r"\*\*(.*)\*\*", "<b>${1}</b>"),
    (r"\*(.*)\*", "<i>${1}</i>"),
    (r"(?m)^- (.*)$", "<li>${1}</li>"),
    (r"(?s)(<li>.*</li>)", "<ul>${1}</ul>"),
    (r"\[([^\]]+)\]\(([^)]+)\)", r#"<a href="${2}">${1}</a>"#),
    (r"(?m)^> (.*)$", "<blockquote>${1}</blockquote>"),
    (r"(?s)```(.*?)```", "<pre><code>${1}</code></pre>"),
    (r"!\[([^\]]+)\]\(([^)]+)\)", r#"<img src="${2}" alt="${1}">"#),
    (r"(?m)^\n", "<br>"),
];

fn rules() -> &'static [Rule] {
    static RULES: OnceLock<Vec<Rule>> = OnceLock::new();
    RULES.get_or_init(|| {
        RULE_SOURCES
            .iter()
            .map(|(pattern, replacement)| Rule {
                pattern: Regex::new(pattern).expect("markdown rule patterns are valid"),
                replacement,
            })
            .collect()
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────────────────────────

/// Render Markdown source to an HTML fragment.
///
/// Deterministic and total: every input produces some output.
pub fn render(text: &str) -> String {
    let mut html = text.to_string();
    for rule in rules() {
        html = rule
            .pattern
            .replace_all(&html, rule.replacement)
            .into_owned();
    }
    html
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(render("Hello world"), "Hello world");
        assert_eq!(render("line one\nline two"), "line one\nline two");
        assert_eq!(render(""), "");
    }

    #[test]
    fn test_blank_line_becomes_break() {
        assert_eq!(render("a\n\nb"), "a\n<br>b");
        assert_eq!(render("\nstart"), "<br>start");
    }

    #[test]
    fn test_headings() {
        assert_eq!(render("# Title"), "<h1>Title</h1>");
        assert_eq!(render("## Sub"), "<h2>Sub</h2>");
        assert_eq!(render("### Minor"), "<h3>Minor</h3>");
        assert_eq!(render("#NoSpace"), "#NoSpace");
    }

    #[test]
    fn test_heading_per_line() {
        assert_eq!(
            render("# Hello, Markdown!\nThis is a test."),
            "<h1>Hello, Markdown!</h1>\nThis is a test."
        );
    }

    #[test]
    fn test_bold_and_italic() {
        assert_eq!(render("**bold**"), "<b>bold</b>");
        assert_eq!(render("*it*"), "<i>it</i>");
        assert_eq!(render("**a** and **b**"), "<b>a<i>* and *</i>b</b>");
    }

    #[test]
    fn test_emphasis_does_not_cross_lines() {
        assert_eq!(render("*a\nb*"), "*a\nb*");
    }

    #[test]
    fn test_consecutive_items_form_one_list() {
        assert_eq!(render("- a\n- b"), "<ul><li>a</li>\n<li>b</li></ul>");
    }

    #[test]
    fn test_separated_lists_merge() {
        let html = render("- a\n\ntext\n- b");
        assert_eq!(html.matches("<ul>").count(), 1);
        assert!(html.starts_with("<ul><li>a</li>"));
        assert!(html.ends_with("<li>b</li></ul>"));
    }

    #[test]
    fn test_link() {
        assert_eq!(
            render("[site](https://example.com)"),
            r#"<a href="https://example.com">site</a>"#
        );
    }

    #[test]
    fn test_image_is_consumed_by_link_rule() {
        assert_eq!(
            render("![logo](a.png)"),
            r#"!<a href="a.png">logo</a>"#
        );
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(render("> quoted"), "<blockquote>quoted</blockquote>");
    }

    #[test]
    fn test_code_fence_spans_lines() {
        assert_eq!(
            render("```\nlet x = 1;\n```"),
            "<pre><code>\nlet x = 1;\n</code></pre>"
        );
    }

    #[test]
    fn test_code_fence_is_non_greedy() {
        let html = render("```a``` mid ```b```");
        assert_eq!(html, "<pre><code>a</code></pre> mid <pre><code>b</code></pre>");
    }

    #[test]
    fn test_html_passes_through() {
        assert_eq!(render("<span>x</span>"), "<span>x</span>");
    }

    #[test]
    fn test_render_is_deterministic() {
        let src = "# T\n- a\n**b** *c*\n\n> q";
        assert_eq!(render(src), render(src));
    }
}
