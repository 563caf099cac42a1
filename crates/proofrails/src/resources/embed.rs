//! Embeddable receipt widgets
//!
//! Pure URL and markup construction; nothing here touches the network.

use super::Resource;
use proofrails_transport::HttpTransport;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Widget colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background
    #[default]
    Light,
    /// Dark background
    Dark,
}

impl Theme {
    /// Query-string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Widget presentation options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedOptions {
    /// Colour scheme
    pub theme: Theme,
    /// CSS width of the iframe
    pub width: String,
    /// CSS height of the iframe
    pub height: String,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            width: "100%".to_string(),
            height: "400px".to_string(),
        }
    }
}

/// A ready-to-paste receipt widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    /// `<iframe>` markup
    pub iframe_html: String,
    /// URL the iframe loads
    pub embed_url: String,
}

/// Embed resource.
#[derive(Clone)]
pub struct Embed {
    transport: HttpTransport,
}

impl Embed {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Build an embeddable widget for a receipt.
    pub fn widget(&self, receipt_id: &str, options: &EmbedOptions) -> Widget {
        let embed_url = format!(
            "{}/embed/receipt?rid={}&theme={}",
            self.transport.base_url(),
            receipt_id,
            options.theme
        );
        let iframe_html = format!(
            r#"<iframe src="{}" width="{}" height="{}" frameborder="0" style="border: none;"></iframe>"#,
            embed_url, options.width, options.height
        );

        Widget {
            iframe_html,
            embed_url,
        }
    }

    /// Public page showing a receipt.
    pub fn full_page(&self, receipt_id: &str) -> String {
        format!("{}/receipt/{}", self.transport.base_url(), receipt_id)
    }
}

impl Resource for Embed {
    fn transport(&self) -> &HttpTransport {
        &self.transport
    }
}
