use crate::assets::AssetManifest;

/// One body-level element of the assembled page.
#[derive(Debug, Clone)]
pub struct Block {
    pub tag: String,
    pub class: String,
    pub inner_html: String,
}

impl Block {
    pub fn new<T, C, H>(tag: T, class: C, inner_html: H) -> Self
    where
        T: Into<String>,
        C: Into<String>,
        H: Into<String>,
    {
        Self {
            tag: tag.into(),
            class: class.into(),
            inner_html: inner_html.into(),
        }
    }
}

/// The page under construction. Blocks are kept in append order and become
/// the body children of the serialized page; nothing is deduplicated.
#[derive(Debug, Clone, Default)]
pub struct Document {
    title: String,
    blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditionally overwrites the document title.
    pub fn set_title<S: Into<String>>(&mut self, title: S) {
        self.title = title.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Appends a block as the last body child.
    pub fn append(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Serializes the finished page: head with title and asset tags, body
    /// with every appended block in order.
    pub fn to_html(&self, assets: &AssetManifest) -> String {
        let mut html = String::new();

        html.push_str("<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(&format!(
            "<title>{}</title>\n",
            html_escape::encode_text(&self.title)
        ));
        html.push_str(&assets.head_tags());
        html.push_str("</head>\n<body>\n");

        for block in &self.blocks {
            html.push_str(&format!(
                "<{0} class=\"{1}\">{2}</{0}>\n",
                block.tag,
                html_escape::encode_quoted_attribute(&block.class),
                block.inner_html
            ));
        }

        html.push_str("</body>\n</html>\n");
        html
    }
}
