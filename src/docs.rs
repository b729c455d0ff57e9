//! External reference links for a feature name.

use anyhow::{Result, bail};
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocSite {
    #[default]
    Mdn,
    Webdev,
    Caniuse,
}

impl DocSite {
    pub const ALL: [DocSite; 3] = [DocSite::Mdn, DocSite::Webdev, DocSite::Caniuse];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocSite::Mdn => "mdn",
            DocSite::Webdev => "webdev",
            DocSite::Caniuse => "caniuse",
        }
    }

    fn search_prefix(&self) -> &'static str {
        match self {
            DocSite::Mdn => "https://developer.mozilla.org/en-US/search?q=",
            DocSite::Webdev => "https://web.dev/search/?q=",
            DocSite::Caniuse => "https://caniuse.com/?search=",
        }
    }
}

impl TryFrom<&str> for DocSite {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self> {
        match value {
            "mdn" => Ok(DocSite::Mdn),
            "webdev" => Ok(DocSite::Webdev),
            "caniuse" => Ok(DocSite::Caniuse),
            other => bail!("unknown documentation site: {other}"),
        }
    }
}

/// Search URL for `name` on `site`, with the name percent-encoded.
pub fn documentation_url(name: &str, site: DocSite) -> String {
    format!("{}{}", site.search_prefix(), urlencoding::encode(name))
}
