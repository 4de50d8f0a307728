pub mod assembler;
pub mod assets;
pub mod config;
pub mod document;
pub mod highlight;
pub mod markdown;
pub mod scanner;
pub mod source;
pub mod templates;

// Re-export main types
pub use assembler::{AssembleError, PageAssembler};
pub use assets::AssetManifest;
pub use config::{Config, Link, SiteConfig};
pub use document::{Block, Document};
pub use highlight::{SyntaxHighlighter, SyntectHighlighter};
pub use markdown::{CmarkRenderer, MarkdownRenderer};
pub use scanner::PageScanner;
pub use source::SourcePage;
