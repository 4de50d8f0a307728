use std::sync::LazyLock;
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::{SyntaxReference, SyntaxSet};

// Initialize syntax highlighting resources once
static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

pub const DEFAULT_THEME: &str = "base16-ocean.dark";

/// Narrow seam over the external highlighter. Takes source code and an
/// optional language hint from the code fence, returns an HTML fragment.
pub trait SyntaxHighlighter {
    fn highlight(&self, code: &str, lang: Option<&str>) -> String;
}

/// syntect-backed highlighter. A declared fence language is resolved by
/// token; without one (or when the token is unknown) the first line of the
/// snippet is used for auto-detection.
pub struct SyntectHighlighter {
    theme: String,
}

impl Default for SyntectHighlighter {
    fn default() -> Self {
        Self::new(DEFAULT_THEME)
    }
}

impl SyntectHighlighter {
    pub fn new<S: Into<String>>(theme: S) -> Self {
        Self {
            theme: theme.into(),
        }
    }

    fn find_syntax(&self, code: &str, lang: Option<&str>) -> Option<&'static SyntaxReference> {
        if let Some(token) = lang
            && let Some(syntax) = SYNTAX_SET.find_syntax_by_token(token)
        {
            return Some(syntax);
        }

        let first_line = code.lines().next().unwrap_or_default();
        SYNTAX_SET.find_syntax_by_first_line(first_line)
    }

    fn plain_block(code: &str) -> String {
        format!("<pre><code>{}</code></pre>", html_escape::encode_text(code))
    }
}

impl SyntaxHighlighter for SyntectHighlighter {
    fn highlight(&self, code: &str, lang: Option<&str>) -> String {
        let Some(syntax) = self.find_syntax(code, lang) else {
            return Self::plain_block(code);
        };

        let theme = THEME_SET
            .themes
            .get(&self.theme)
            .unwrap_or(&THEME_SET.themes[DEFAULT_THEME]);

        highlighted_html_for_string(code, &SYNTAX_SET, syntax, theme)
            .unwrap_or_else(|_| Self::plain_block(code))
    }
}
