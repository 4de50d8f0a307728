use std::sync::LazyLock;

use tera::{Context, Tera};

use crate::config::SiteConfig;

#[derive(Debug)]
pub enum TemplateError {
    TeraError(tera::Error),
}

impl From<tera::Error> for TemplateError {
    fn from(err: tera::Error) -> Self {
        TemplateError::TeraError(err)
    }
}

impl std::fmt::Display for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateError::TeraError(e) => write!(f, "Template error: {}", e),
        }
    }
}

impl std::error::Error for TemplateError {}

const NAVBAR_TEMPLATE: &str = r#"<div class="container">
    <div class="navbar-header">
        <a class="navbar-brand" href="{{ brand.link | safe }}">{{ brand.text }}</a>
    </div>
    <div id="navbar" class="navbar-collapse collapse">
        <ul class="nav navbar-nav">
        {%- for item in nav %}
            <li><a href="{{ item.link | safe }}">{{ item.text }}</a></li>
        {%- endfor %}
        </ul>
        <ul class="nav navbar-nav pull-right">
        {%- for item in external %}
            <li><a target="_blank" href="{{ item.link | safe }}">{{ item.text }}</a></li>
        {%- endfor %}
        </ul>
    </div>
</div>"#;

const FOOTER_TEMPLATE: &str = r#"<div class="container">
    <p class="text-muted">{{ copyright | safe }}</p>
</div>"#;

// Templates are fixed strings compiled into the binary; a parse failure
// is an authoring error, not a runtime condition.
static TEMPLATES: LazyLock<Tera> = LazyLock::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_template("navbar.html", NAVBAR_TEMPLATE)
        .expect("navbar template");
    tera.add_raw_template("footer.html", FOOTER_TEMPLATE)
        .expect("footer template");
    tera
});

/// Inner markup of the navbar block: brand link, internal nav links, and
/// external links opening in a new browsing context.
pub fn render_navbar(site: &SiteConfig) -> Result<String, TemplateError> {
    let mut context = Context::new();
    context.insert("brand", &site.brand);
    context.insert("nav", &site.nav);
    context.insert("external", &site.external);

    Ok(TEMPLATES.render("navbar.html", &context)?)
}

/// Inner markup of the footer block: the copyright notice.
pub fn render_footer(site: &SiteConfig) -> Result<String, TemplateError> {
    let mut context = Context::new();
    context.insert("copyright", &site.copyright);

    Ok(TEMPLATES.render("footer.html", &context)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Link;

    fn site() -> SiteConfig {
        SiteConfig {
            title: "Three Fine Days".to_string(),
            brand: Link {
                text: "Three Fine Days".to_string(),
                link: "../index.html".to_string(),
            },
            nav: vec![
                Link {
                    text: "Blog".to_string(),
                    link: "../blog.html".to_string(),
                },
                Link {
                    text: "Music".to_string(),
                    link: "../music.html".to_string(),
                },
                Link {
                    text: "Graphics".to_string(),
                    link: "../graphics.html".to_string(),
                },
                Link {
                    text: "About".to_string(),
                    link: "../about.html".to_string(),
                },
            ],
            external: vec![
                Link {
                    text: "Weibo".to_string(),
                    link: "http://weibo.com/example".to_string(),
                },
                Link {
                    text: "Github".to_string(),
                    link: "https://github.com/example".to_string(),
                },
            ],
            copyright: "&copy; 2015 Three Fine Days. All rights reserved".to_string(),
        }
    }

    #[test]
    fn navbar_has_brand_and_all_links() {
        let html = render_navbar(&site()).unwrap();
        assert!(html.contains("navbar-brand"));
        assert!(html.contains(">Three Fine Days</a>"));
        assert_eq!(html.matches("<li>").count(), 6);
        assert!(html.contains("href=\"../music.html\""));
    }

    #[test]
    fn external_links_open_in_new_context() {
        let html = render_navbar(&site()).unwrap();
        assert_eq!(html.matches("target=\"_blank\"").count(), 2);
        assert!(html.contains("target=\"_blank\" href=\"https://github.com/example\""));
    }

    #[test]
    fn footer_carries_copyright_notice() {
        let html = render_footer(&site()).unwrap();
        assert!(html.contains("text-muted"));
        assert!(html.contains("&copy; 2015 Three Fine Days"));
    }
}
