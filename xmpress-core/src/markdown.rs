use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd, html};

use crate::highlight::{SyntaxHighlighter, SyntectHighlighter};

/// Narrow seam over the external Markdown renderer: markup string in,
/// HTML string out, synchronously.
pub trait MarkdownRenderer {
    fn render(&self, markdown: &str) -> String;
}

/// GitHub-flavored extensions on top of core cmark: strikethrough,
/// task lists, footnotes, tables.
fn gfm_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
}

/// pulldown-cmark renderer that hands every fenced code block to the
/// injected highlighter.
pub struct CmarkRenderer {
    highlighter: Box<dyn SyntaxHighlighter + Send + Sync>,
}

impl Default for CmarkRenderer {
    fn default() -> Self {
        Self::new(Box::new(SyntectHighlighter::default()))
    }
}

impl CmarkRenderer {
    pub fn new(highlighter: Box<dyn SyntaxHighlighter + Send + Sync>) -> Self {
        Self { highlighter }
    }
}

impl MarkdownRenderer for CmarkRenderer {
    fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, gfm_options());

        let events: Vec<Event> = parser.collect();
        let mut processed_events = Vec::new();
        let mut i = 0;

        while i < events.len() {
            match &events[i] {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                        _ => None,
                    };

                    // Collect all text events until the end of the code block
                    let mut code = String::new();
                    i += 1;

                    while i < events.len() {
                        match &events[i] {
                            Event::End(TagEnd::CodeBlock) => break,
                            Event::Text(text) => code.push_str(text),
                            _ => {}
                        }
                        i += 1;
                    }

                    let highlighted = self.highlighter.highlight(&code, lang.as_deref());
                    processed_events.push(Event::Html(highlighted.into()));
                }
                _ => {
                    processed_events.push(events[i].clone());
                }
            }
            i += 1;
        }

        let mut out = String::new();
        html::push_html(&mut out, processed_events.into_iter());

        out
    }
}
