use std::fmt;
use std::path::Path;

#[derive(Debug)]
pub enum SourceError {
    Io(std::io::Error),
    MissingLiteralBlock,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Io(e) => write!(f, "IO error: {}", e),
            SourceError::MissingLiteralBlock => {
                write!(f, "source page has no <xmp> literal block")
            }
        }
    }
}

impl std::error::Error for SourceError {}

impl From<std::io::Error> for SourceError {
    fn from(value: std::io::Error) -> Self {
        SourceError::Io(value)
    }
}

/// One source page: an HTML shell whose markdown lives inside a single
/// `<xmp>` literal-text block.
#[derive(Debug, Clone)]
pub struct SourcePage {
    text: String,
}

impl SourcePage {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }

    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        Ok(Self::new(std::fs::read_to_string(path)?))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Detaches the first `<xmp>` block from the page and returns its raw
    /// content. Tag matching is case-insensitive and allows attributes.
    /// A block that is never closed runs to the end of the page, matching
    /// browser behavior for literal-text elements.
    pub fn take_literal_block(&mut self) -> Result<String, SourceError> {
        let lower = self.text.to_ascii_lowercase();
        let (tag_start, content_start) =
            find_open_tag(&lower).ok_or(SourceError::MissingLiteralBlock)?;

        let (content_end, block_end) = match lower[content_start..].find("</xmp") {
            Some(rel) => {
                let close_start = content_start + rel;
                let block_end = lower[close_start..]
                    .find('>')
                    .map(|g| close_start + g + 1)
                    .unwrap_or(self.text.len());
                (close_start, block_end)
            }
            None => (self.text.len(), self.text.len()),
        };

        let content = self.text[content_start..content_end].to_string();
        self.text.replace_range(tag_start..block_end, "");

        // The newline right after the opening tag is not part of the content
        let content = content
            .strip_prefix("\r\n")
            .or_else(|| content.strip_prefix('\n'))
            .unwrap_or(&content)
            .to_string();

        Ok(content)
    }
}

/// Returns (tag start, content start) of the first opening `<xmp>` tag.
fn find_open_tag(lower: &str) -> Option<(usize, usize)> {
    let mut from = 0;
    while let Some(pos) = lower[from..].find("<xmp") {
        let tag_start = from + pos;
        let after_name = tag_start + "<xmp".len();
        let rest = &lower[after_name..];

        let is_tag = match rest.bytes().next() {
            Some(b'>') => true,
            Some(c) => c.is_ascii_whitespace(),
            None => false,
        };

        if is_tag {
            // Open tag with no closing '>' is not a block at all
            let gt = rest.find('>')?;
            return Some((tag_start, after_name + gt + 1));
        }

        from = after_name;
    }

    None
}
