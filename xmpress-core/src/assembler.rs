use crate::config::SiteConfig;
use crate::document::{Block, Document};
use crate::markdown::MarkdownRenderer;
use crate::source::{SourceError, SourcePage};
use crate::templates::{self, TemplateError};

pub const NAVBAR_CLASS: &str = "navbar navbar-default navbar-static-top";
pub const ARTICLE_CLASS: &str = "container article";
pub const FOOTER_CLASS: &str = "footer";

#[derive(Debug)]
pub enum AssembleError {
    Source(SourceError),
    Template(TemplateError),
}

impl From<SourceError> for AssembleError {
    fn from(err: SourceError) -> Self {
        AssembleError::Source(err)
    }
}

impl From<TemplateError> for AssembleError {
    fn from(err: TemplateError) -> Self {
        AssembleError::Template(err)
    }
}

impl std::fmt::Display for AssembleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssembleError::Source(e) => write!(f, "Source error: {}", e),
            AssembleError::Template(e) => write!(f, "Template error: {}", e),
        }
    }
}

impl std::error::Error for AssembleError {}

/// Runs the four assembly steps against a document, in order: title,
/// navbar, article, footer. The Markdown renderer is injected so any
/// compliant implementation can stand in.
pub struct PageAssembler<'a> {
    site: &'a SiteConfig,
    renderer: &'a dyn MarkdownRenderer,
}

impl<'a> PageAssembler<'a> {
    pub fn new(site: &'a SiteConfig, renderer: &'a dyn MarkdownRenderer) -> Self {
        Self { site, renderer }
    }

    /// One synchronous pass over the document. Steps run strictly in
    /// sequence; a failure aborts the remaining steps and already-applied
    /// mutations stay in place. Calling this twice appends a second navbar,
    /// article and footer.
    pub fn assemble(
        &self,
        doc: &mut Document,
        source: &mut SourcePage,
    ) -> Result<(), AssembleError> {
        self.set_title(doc);
        self.build_navbar(doc)?;
        self.build_article(doc, source)?;
        self.build_footer(doc)?;

        Ok(())
    }

    fn set_title(&self, doc: &mut Document) {
        doc.set_title(&self.site.title);
    }

    fn build_navbar(&self, doc: &mut Document) -> Result<(), AssembleError> {
        let inner = templates::render_navbar(self.site)?;
        doc.append(Block::new("nav", NAVBAR_CLASS, inner));

        Ok(())
    }

    fn build_article(
        &self,
        doc: &mut Document,
        source: &mut SourcePage,
    ) -> Result<(), AssembleError> {
        let markdown = source.take_literal_block()?;
        let html = self.renderer.render(&markdown);
        doc.append(Block::new("div", ARTICLE_CLASS, html));

        Ok(())
    }

    fn build_footer(&self, doc: &mut Document) -> Result<(), AssembleError> {
        let inner = templates::render_footer(self.site)?;
        doc.append(Block::new("footer", FOOTER_CLASS, inner));

        Ok(())
    }
}
