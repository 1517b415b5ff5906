//! Markdown snippet insertion
//!
//! Backs the Markdown toolbar: each action wraps the current selection (or a
//! placeholder word when nothing is selected) in Markdown syntax and replaces
//! the selection with the result.
//!
//! # Usage
//! ```ignore
//! use crate::markdown::formatting::{apply_snippet, SnippetAction};
//!
//! let result = apply_snippet("Hello world", (0, 5), SnippetAction::Bold, "Text");
//! assert_eq!(result.text, "**Hello** world");
//! ```

use crate::document::replace_char_range;

// ─────────────────────────────────────────────────────────────────────────────
// Snippet Action Enum
// ─────────────────────────────────────────────────────────────────────────────

/// Markdown toolbar actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetAction {
    /// `# text`
    Heading1,
    /// `## text`
    Heading2,
    /// `**text**`
    Bold,
    /// `*text*`
    Italic,
    /// `- ` before every line
    List,
    /// `[text](https://)`
    Link,
    /// Fenced code block
    Code,
    /// `> text`
    Quote,
    /// `![text](https://)`
    Image,
}

impl SnippetAction {
    /// All actions in toolbar order.
    pub const ALL: [SnippetAction; 9] = [
        SnippetAction::Heading1,
        SnippetAction::Heading2,
        SnippetAction::Bold,
        SnippetAction::Italic,
        SnippetAction::List,
        SnippetAction::Link,
        SnippetAction::Code,
        SnippetAction::Quote,
        SnippetAction::Image,
    ];

    /// Get the icon for this action (for toolbar).
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Heading1 => "H1",
            Self::Heading2 => "H2",
            Self::Bold => "𝐁",
            Self::Italic => "𝐼",
            Self::List => "\u{2022}", // bullet •
            Self::Link => "🔗",
            Self::Code => "</>",
            Self::Quote => "\u{275D}", // heavy double turned comma quotation mark ❝
            Self::Image => "🖼",
        }
    }

    /// Wrap `content` in this action's Markdown syntax.
    pub fn wrap(&self, content: &str) -> String {
        match self {
            Self::Heading1 => format!("# {}", content),
            Self::Heading2 => format!("## {}", content),
            Self::Bold => format!("**{}**", content),
            Self::Italic => format!("*{}*", content),
            Self::List => content
                .split('\n')
                .map(|line| format!("- {}", line))
                .collect::<Vec<_>>()
                .join("\n"),
            Self::Link => format!("[{}](https://)", content),
            Self::Code => format!("```\n{}\n```", content),
            Self::Quote => format!("> {}", content),
            Self::Image => format!("![{}](https://)", content),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Snippet Result
// ─────────────────────────────────────────────────────────────────────────────

/// Result of applying a snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetResult {
    /// The new text after insertion
    pub text: String,
    /// Cursor position just past the inserted snippet (character index)
    pub cursor: usize,
}

/// Replace `selection` (character offsets, clamped to the text) with the
/// snippet for `action`. An empty selection uses `placeholder` as content.
pub fn apply_snippet(
    text: &str,
    selection: (usize, usize),
    action: SnippetAction,
    placeholder: &str,
) -> SnippetResult {
    let len = text.chars().count();
    let (a, b) = selection;
    let (start, end) = if a <= b { (a, b) } else { (b, a) };
    let start = start.min(len);
    let end = end.min(len);

    let selected: String = text.chars().skip(start).take(end - start).collect();
    let content = if selected.is_empty() {
        placeholder
    } else {
        selected.as_str()
    };
    let snippet = action.wrap(content);

    let mut new_text = text.to_string();
    let cursor = replace_char_range(&mut new_text, start, end, &snippet);
    SnippetResult {
        text: new_text,
        cursor,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_with_selection() {
        let result = apply_snippet("Hello world", (0, 5), SnippetAction::Bold, "Text");
        assert_eq!(result.text, "**Hello** world");
        assert_eq!(result.cursor, 9);
    }

    #[test]
    fn test_empty_selection_uses_placeholder() {
        let result = apply_snippet("ab", (1, 1), SnippetAction::Italic, "Текст");
        assert_eq!(result.text, "a*Текст*b");
        assert_eq!(result.cursor, 8);
    }

    #[test]
    fn test_headings() {
        assert_eq!(
            apply_snippet("", (0, 0), SnippetAction::Heading1, "Text").text,
            "# Text"
        );
        assert_eq!(
            apply_snippet("title", (0, 5), SnippetAction::Heading2, "Text").text,
            "## title"
        );
    }

    #[test]
    fn test_list_prefixes_every_line() {
        let result = apply_snippet("a\nb\nc", (0, 5), SnippetAction::List, "Text");
        assert_eq!(result.text, "- a\n- b\n- c");
    }

    #[test]
    fn test_link_and_image() {
        assert_eq!(
            apply_snippet("site", (0, 4), SnippetAction::Link, "Text").text,
            "[site](https://)"
        );
        assert_eq!(
            apply_snippet("", (0, 0), SnippetAction::Image, "Text").text,
            "![Text](https://)"
        );
    }

    #[test]
    fn test_code_and_quote() {
        assert_eq!(
            apply_snippet("x", (0, 1), SnippetAction::Code, "Text").text,
            "```\nx\n```"
        );
        assert_eq!(
            apply_snippet("x", (0, 1), SnippetAction::Quote, "Text").text,
            "> x"
        );
    }

    #[test]
    fn test_reversed_and_out_of_range_selection() {
        let result = apply_snippet("abc", (3, 1), SnippetAction::Bold, "Text");
        assert_eq!(result.text, "a**bc**");

        let result = apply_snippet("abc", (10, 20), SnippetAction::Bold, "Text");
        assert_eq!(result.text, "abc**Text**");
        assert_eq!(result.cursor, 11);
    }

    #[test]
    fn test_multibyte_selection() {
        let result = apply_snippet("привіт світ", (7, 11), SnippetAction::Bold, "Text");
        assert_eq!(result.text, "привіт **світ**");
    }

    #[test]
    fn test_icons() {
        for action in SnippetAction::ALL {
            assert!(!action.icon().is_empty());
        }
    }
}
