use serde::{Deserialize, Serialize};

const BUNDLED: &str = include_str!("../content/site.json");

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueStatement {
    pub heading: String,
    pub text: String,
    pub image_ref: Option<String>,
}

impl ValueStatement {
    pub fn is_renderable(&self) -> bool {
        !self.heading.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleQuote {
    pub company: String,
    /// Raw markdown body of the quote.
    pub quote: String,
    pub article_slug: String,
    pub large_icon_url: String,
    pub small_icon_url: String,
}

impl ArticleQuote {
    pub fn is_renderable(&self) -> bool {
        !self.quote.trim().is_empty()
    }

    pub fn article_href(&self) -> String {
        format!("/articles{}", self.article_slug)
    }

    pub fn blockquote(&self) -> String {
        format!("\u{201c}{}\u{201d}", self.quote.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeAssets {
    pub with_shadow: String,
    pub without_shadow: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub quotes: Vec<ArticleQuote>,
    pub values: Vec<ValueStatement>,
    pub shapes: ShapeAssets,
}

impl SiteContent {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Copy compiled into the binary. Empty if it somehow fails to parse.
    pub fn bundled() -> Self {
        Self::from_json(BUNDLED).unwrap_or_else(|err| {
            log::error!("bundled site content is invalid: {}", err);
            SiteContent::default()
        })
    }

    pub fn featured_quote(&self) -> Option<&ArticleQuote> {
        self.quotes.first().filter(|quote| quote.is_renderable())
    }

    pub fn renderable_values(&self) -> impl Iterator<Item = &ValueStatement> {
        self.values.iter().filter(|value| value.is_renderable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_parses() {
        let content = SiteContent::from_json(BUNDLED).unwrap();
        assert_eq!(content.renderable_values().count(), 4);
        assert_eq!(content.featured_quote().unwrap().company, "Hopper");
    }

    #[test]
    fn missing_fields_render_empty() {
        let content = SiteContent::from_json(r#"{"values":[{"heading":"Be kind"}]}"#).unwrap();
        let value = &content.values[0];
        assert_eq!(value.text, "");
        assert_eq!(value.image_ref, None);
        assert!(content.quotes.is_empty());
        assert_eq!(content.shapes, ShapeAssets::default());
    }

    #[test]
    fn no_quotes_means_no_testimonial() {
        assert!(SiteContent::default().featured_quote().is_none());
        let blank = SiteContent::from_json(r#"{"quotes":[{"company":"Acme"}]}"#).unwrap();
        assert!(blank.featured_quote().is_none());
    }

    #[test]
    fn values_without_heading_are_skipped() {
        let content =
            SiteContent::from_json(r#"{"values":[{"text":"orphan"},{"heading":"Be yourself"}]}"#)
                .unwrap();
        let headings: Vec<_> = content.renderable_values().map(|v| v.heading.as_str()).collect();
        assert_eq!(headings, vec!["Be yourself"]);
    }

    #[test]
    fn quote_links_and_typography() {
        let quote = ArticleQuote {
            quote: " calm and confident \n".into(),
            article_slug: "/hopper".into(),
            ..ArticleQuote::default()
        };
        assert_eq!(quote.article_href(), "/articles/hopper");
        assert_eq!(quote.blockquote(), "\u{201c}calm and confident\u{201d}");
    }
}
