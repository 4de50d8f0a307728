use serde::{Deserialize, Serialize};

/// The fixed list of page assets. Stylesheets and scripts are referenced
/// from the assembled page head and copied into the output tree by the CLI
/// before any page is assembled.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct AssetManifest {
    pub stylesheets: Vec<String>,
    pub scripts: Vec<String>,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            stylesheets: vec![
                "../css/tomorrow.css".to_string(),
                "../css/bootstrap.css".to_string(),
                "../css/site.css".to_string(),
            ],
            scripts: Vec::new(),
        }
    }
}

impl AssetManifest {
    /// Head tag lines for every declared asset, stylesheets first.
    pub fn head_tags(&self) -> String {
        let mut tags = String::new();

        for href in &self.stylesheets {
            tags.push_str(&format!(
                "<link rel=\"stylesheet\" href=\"{}\">\n",
                html_escape::encode_quoted_attribute(href)
            ));
        }
        for src in &self.scripts {
            tags.push_str(&format!(
                "<script src=\"{}\"></script>\n",
                html_escape::encode_quoted_attribute(src)
            ));
        }

        tags
    }

    /// Every asset path in declaration order, stylesheets first.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.stylesheets
            .iter()
            .chain(self.scripts.iter())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_tags_render_links_then_scripts() {
        let manifest = AssetManifest {
            stylesheets: vec!["css/a.css".to_string()],
            scripts: vec!["js/b.js".to_string()],
        };

        let tags = manifest.head_tags();
        assert!(tags.contains("<link rel=\"stylesheet\" href=\"css/a.css\">"));
        assert!(tags.contains("<script src=\"js/b.js\"></script>"));
        assert!(tags.find("link").unwrap() < tags.find("script").unwrap());
    }

    #[test]
    fn paths_cover_both_kinds() {
        let manifest = AssetManifest::default();
        assert_eq!(manifest.paths().count(), manifest.stylesheets.len());
    }
}
