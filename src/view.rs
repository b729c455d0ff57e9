//! Renderer-facing views of lookup results.
//!
//! Views carry data only: a record, its computed support level and the text a
//! front end needs to draw a card. They serialize to JSON for machine
//! consumers and have a plain-text rendering for the terminal.

use crate::catalog::{Browser, Feature, FeatureCategory, FeatureId, SupportEntry};
use crate::classify::{SupportLevel, classify};
use crate::docs::{DocSite, documentation_url};
use crate::error::{LookupError, Severity};
use crate::search::{CategoryBatch, SearchResult};
use serde::Serialize;
use std::fmt::Write as _;

const NOT_SUPPORTED: &str = "Not supported";

#[derive(Clone, Debug, Serialize)]
pub struct LevelView {
    pub slug: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

impl From<SupportLevel> for LevelView {
    fn from(level: SupportLevel) -> Self {
        Self {
            slug: level.as_str(),
            label: level.label(),
            icon: level.icon(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct BrowserLine {
    pub browser: Browser,
    pub name: &'static str,
    pub version: String,
    pub supported: bool,
}

impl BrowserLine {
    fn new(browser: Browser, entry: &SupportEntry) -> Self {
        Self {
            browser,
            name: browser.display_name(),
            version: entry
                .version
                .clone()
                .unwrap_or_else(|| NOT_SUPPORTED.to_string()),
            supported: entry.is_widely_available(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct FeatureCard {
    pub id: FeatureId,
    pub name: String,
    pub description: String,
    pub category: FeatureCategory,
    pub level: LevelView,
    pub browsers: Vec<BrowserLine>,
    pub docs_url: String,
}

impl FeatureCard {
    pub fn new(feature: &Feature) -> Self {
        Self::with_level(feature, classify(feature))
    }

    pub fn with_level(feature: &Feature, level: SupportLevel) -> Self {
        Self {
            id: feature.id,
            name: feature.name.clone(),
            description: feature.description.clone(),
            category: feature.category.clone(),
            level: level.into(),
            browsers: feature
                .support_status
                .iter()
                .map(|(browser, entry)| BrowserLine::new(browser, entry))
                .collect(),
            docs_url: documentation_url(&feature.name, DocSite::Mdn),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct BrowserDetail {
    #[serde(flatten)]
    pub line: BrowserLine,
    pub notes: String,
}

/// Everything the detail view shows for one feature.
#[derive(Clone, Debug, Serialize)]
pub struct FeatureDetail {
    pub card: FeatureCard,
    pub category_label: String,
    pub browsers: Vec<BrowserDetail>,
}

impl FeatureDetail {
    pub fn new(feature: &Feature) -> Self {
        Self {
            card: FeatureCard::new(feature),
            category_label: feature.category.as_str().to_uppercase(),
            browsers: feature
                .support_status
                .iter()
                .map(|(browser, entry)| BrowserDetail {
                    line: BrowserLine::new(browser, entry),
                    notes: entry.notes.clone(),
                })
                .collect(),
        }
    }

    pub fn render_text(&self) -> String {
        let card = &self.card;
        let mut out = String::new();
        let _ = writeln!(out, "{} [#{}]", card.name, card.id);
        let _ = writeln!(out, "{} {}", card.level.icon, card.level.label);
        let _ = writeln!(out, "Category: {}", self.category_label);
        let _ = writeln!(out, "Description: {}", card.description);
        let _ = writeln!(out, "Browser support:");
        for detail in &self.browsers {
            let _ = write!(out, "  {:<8} {:<14}", detail.line.name, detail.line.version);
            if detail.notes.is_empty() {
                let _ = writeln!(out);
            } else {
                let _ = writeln!(out, " {}", detail.notes);
            }
        }
        let _ = writeln!(out, "Docs: {}", card.docs_url);
        out
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    Category,
    Feature,
}

/// A full result page: title plus cards laid out in rows.
#[derive(Clone, Debug, Serialize)]
pub struct ResultView {
    pub kind: ResultKind,
    pub title: String,
    pub rows: Vec<Vec<FeatureCard>>,
    pub scroll_to_results: bool,
}

impl ResultView {
    pub fn from_result(result: &SearchResult<'_>) -> Self {
        match result {
            SearchResult::Category(batch) => Self::category(batch),
            SearchResult::Single(best) => Self {
                kind: ResultKind::Feature,
                title: format!("Feature: \"{}\"", best.query.as_str()),
                rows: vec![vec![FeatureCard::new(best.feature)]],
                scroll_to_results: false,
            },
        }
    }

    fn category(batch: &CategoryBatch<'_>) -> Self {
        Self {
            kind: ResultKind::Category,
            title: format!("{} Features", batch.category.as_str().to_uppercase()),
            rows: batch
                .rows()
                .map(|row| row.iter().map(|feature| FeatureCard::new(feature)).collect())
                .collect(),
            scroll_to_results: false,
        }
    }

    pub fn with_scroll(mut self, scroll: bool) -> Self {
        self.scroll_to_results = scroll;
        self
    }

    pub fn card_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);
        let _ = writeln!(out, "{}", "=".repeat(self.title.chars().count()));
        for (row_idx, row) in self.rows.iter().enumerate() {
            if self.rows.len() > 1 {
                let _ = writeln!(out, "-- row {} --", row_idx + 1);
            }
            for card in row {
                render_card(&mut out, card);
            }
        }
        out
    }
}

fn render_card(out: &mut String, card: &FeatureCard) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{} {} [#{}]", card.level.icon, card.name, card.id);
    let _ = writeln!(out, "   {} ({})", card.level.label, card.category);
    if !card.description.is_empty() {
        let _ = writeln!(out, "   {}", card.description);
    }
    let browsers = card
        .browsers
        .iter()
        .map(|line| {
            let marker = if line.supported { "" } else { " (!)" };
            format!("{} {}{}", line.name, line.version, marker)
        })
        .collect::<Vec<_>>()
        .join(" | ");
    let _ = writeln!(out, "   {browsers}");
    let _ = writeln!(out, "   {}", card.docs_url);
}

/// User-facing message for a failed or empty lookup.
#[derive(Clone, Debug, Serialize)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl From<&LookupError> for Notice {
    fn from(err: &LookupError) -> Self {
        Self {
            severity: err.severity(),
            message: err.to_string(),
        }
    }
}
