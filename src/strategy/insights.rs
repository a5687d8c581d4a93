//! Posting windows and viral-potential scoring.
//!
//! Both are pure lookups over constant tables; nothing here learns from
//! past requests.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Audience, Category};

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z0-9']+").expect("valid regex"));

/// Trigger keywords and the points each one adds.
const TRIGGER_WEIGHTS: &[(&str, u8)] = &[
    ("secret", 12),
    ("hack", 12),
    ("tips", 8),
    ("ranked", 8),
    ("pro", 8),
    ("free", 10),
    ("fast", 6),
    ("best", 6),
    ("new", 6),
    ("challenge", 10),
    ("energy", 8),
    ("focus", 8),
    ("win", 8),
    ("mistakes", 10),
    ("review", 6),
];

fn category_base(category: &Category) -> u8 {
    match category {
        Category::Gaming => 55,
        Category::Fitness => 50,
        Category::Lifestyle => 45,
        Category::Product => 45,
        Category::Business => 40,
        Category::Other(_) => 35,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViralScore {
    pub score: u8,
    pub matched: Vec<&'static str>,
}

impl ViralScore {
    pub fn label(&self) -> &'static str {
        match self.score {
            85..=u8::MAX => "Very High",
            70..=84 => "High",
            55..=69 => "Moderate",
            _ => "Building",
        }
    }
}

/// Score `text` for the given category: a category base plus the weight of
/// every distinct trigger keyword present, capped at 100.
pub fn viral_score(text: &str, category: &Category) -> ViralScore {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = WORD_RE.find_iter(&lowered).map(|m| m.as_str()).collect();

    let mut score = u32::from(category_base(category));
    let mut matched = Vec::new();
    for (keyword, weight) in TRIGGER_WEIGHTS {
        if words.contains(keyword) {
            score += u32::from(*weight);
            matched.push(*keyword);
        }
    }

    ViralScore {
        score: score.min(100) as u8,
        matched,
    }
}

/// Best local posting times for an audience.
pub fn posting_windows(audience: &Audience) -> &'static [&'static str] {
    match audience {
        Audience::Gamers => &["3-5 PM (after school)", "8-11 PM (prime gaming hours)"],
        Audience::Fitness => &["6-8 AM (pre-workout)", "5-7 PM (post-work gym rush)"],
        Audience::Entrepreneurs => &["7-9 AM (morning planning)", "12-1 PM (lunch break)"],
        Audience::Students => &["3-5 PM (after class)", "9-11 PM (study breaks)"],
        Audience::General | Audience::Other(_) => &["11 AM-1 PM", "7-9 PM"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viral_score_base_without_keywords() {
        let score = viral_score("just a regular video", &Category::Gaming);
        assert_eq!(score.score, 55);
        assert!(score.matched.is_empty());
    }

    #[test]
    fn test_viral_score_counts_distinct_keywords() {
        let score = viral_score("Apex Legends ranked tips, more ranked TIPS", &Category::Gaming);
        assert_eq!(score.matched, vec!["tips", "ranked"]);
        assert_eq!(score.score, 55 + 8 + 8);
    }

    #[test]
    fn test_viral_score_matches_whole_words_only() {
        // "protein" must not count as "pro"
        let score = viral_score("protein shake", &Category::Fitness);
        assert!(score.matched.is_empty());
    }

    #[test]
    fn test_viral_score_caps_at_100() {
        let text = "secret hack tips ranked pro free fast best new challenge energy focus win";
        let score = viral_score(text, &Category::Gaming);
        assert_eq!(score.score, 100);
        assert_eq!(score.label(), "Very High");
    }

    #[test]
    fn test_unknown_category_uses_lowest_base() {
        let score = viral_score("", &Category::Other("knitting".to_string()));
        assert_eq!(score.score, 35);
        assert_eq!(score.label(), "Building");
    }

    #[test]
    fn test_posting_windows_for_every_audience() {
        for audience in [
            Audience::Gamers,
            Audience::Fitness,
            Audience::Entrepreneurs,
            Audience::Students,
            Audience::General,
            Audience::Other("x".to_string()),
        ] {
            assert_eq!(posting_windows(&audience).len(), 2);
        }
    }
}
