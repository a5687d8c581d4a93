//! Strategy requests, documents and the local template synthesizer.
//!
//! A [`StrategyRequest`] is built from the four intake fields. The
//! [`synthesizer`] turns it into text without any I/O; [`insights`] holds the
//! constant lookup tables behind the posting and viral-potential sections.

pub mod insights;
pub mod synthesizer;
mod tables;

use std::fmt;

use thiserror::Error;

pub use synthesizer::{Synthesizer, TimeOfDay};

/// Content category. Unknown values are carried verbatim and resolved to the
/// generic templates rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    Gaming,
    Fitness,
    Lifestyle,
    Business,
    Product,
    Other(String),
}

impl Category {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "gaming" => Category::Gaming,
            "fitness" => Category::Fitness,
            "lifestyle" => Category::Lifestyle,
            "business" => Category::Business,
            "product" => Category::Product,
            _ => Category::Other(raw.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Gaming => "gaming",
            Category::Fitness => "fitness",
            Category::Lifestyle => "lifestyle",
            Category::Business => "business",
            Category::Product => "product",
            Category::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target audience. Unknown values fall back to the general tactics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Audience {
    Gamers,
    Fitness,
    Entrepreneurs,
    Students,
    General,
    Other(String),
}

impl Audience {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "gamers" => Audience::Gamers,
            "fitness" => Audience::Fitness,
            "entrepreneurs" => Audience::Entrepreneurs,
            "students" => Audience::Students,
            "general" => Audience::General,
            _ => Audience::Other(raw.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Audience::Gamers => "gamers",
            Audience::Fitness => "fitness",
            Audience::Entrepreneurs => "entrepreneurs",
            Audience::Students => "students",
            Audience::General => "general",
            Audience::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntakeError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// The four-field content brief for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyRequest {
    pub intent: String,
    pub category: Category,
    pub industry: String,
    pub audience: Audience,
}

impl StrategyRequest {
    pub fn new(intent: &str, category: &str, industry: &str, audience: &str) -> Self {
        Self {
            intent: intent.to_string(),
            category: Category::parse(category),
            industry: industry.to_string(),
            audience: Audience::parse(audience),
        }
    }

    /// Build a request from raw intake fields. Only presence is checked;
    /// empty strings are accepted.
    pub fn from_fields(
        intent: Option<String>,
        category: Option<String>,
        industry: Option<String>,
        audience: Option<String>,
    ) -> Result<Self, IntakeError> {
        let intent = intent.ok_or(IntakeError::MissingField("intent"))?;
        let category = category.ok_or(IntakeError::MissingField("category"))?;
        let audience = audience.ok_or(IntakeError::MissingField("audience"))?;

        Ok(Self {
            intent,
            category: Category::parse(&category),
            industry: industry.unwrap_or_default(),
            audience: Audience::parse(&audience),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSource {
    External,
    Template,
}

impl DocumentSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentSource::External => "external",
            DocumentSource::Template => "template",
        }
    }
}

/// Generated strategy text plus where it came from. Never parsed back.
#[derive(Debug, Clone)]
pub struct StrategyDocument {
    pub text: String,
    pub source: DocumentSource,
    pub session: u32,
}
