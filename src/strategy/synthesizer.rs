use rand::seq::IndexedRandom;
use rand::Rng;

use super::insights::{posting_windows, viral_score};
use super::tables;
use super::{Category, DocumentSource, StrategyDocument, StrategyRequest};
use crate::config::BrandConfig;

/// Upper bound on hashtags per document.
pub const MAX_HASHTAGS: usize = 15;

/// Number of hook options offered per document.
pub const HOOK_COUNT: usize = 3;

/// Wall-clock bucket that picks the energy framing of the call-to-action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    /// [0,12) morning, [12,17) afternoon, everything later evening.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            _ => TimeOfDay::Evening,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
        }
    }

    pub fn phrase(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning focus boost",
            TimeOfDay::Afternoon => "afternoon energy reset",
            TimeOfDay::Evening => "late-night session fuel",
        }
    }
}

/// Fill the `{intent}`, `{category}`, `{industry}` and `{audience}`
/// placeholders in one left-to-right pass. Substituted values are copied
/// as-is and never rescanned, so user text containing braces survives.
/// Unknown `{...}` tokens are kept literally.
fn render(template: &str, request: &StrategyRequest) -> String {
    let mut out = String::with_capacity(template.len() + request.intent.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let filled = tail
            .find('}')
            .and_then(|end| placeholder(&tail[1..end], request).map(|value| (value, end)));
        match filled {
            Some((value, end)) => {
                out.push_str(value);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn placeholder<'r>(name: &str, request: &'r StrategyRequest) -> Option<&'r str> {
    match name {
        "intent" => Some(&request.intent),
        "category" => Some(request.category.as_str()),
        "industry" => Some(&request.industry),
        "audience" => Some(request.audience.as_str()),
        _ => None,
    }
}

/// Template-based strategy generator. Performs no I/O and cannot fail.
pub struct Synthesizer<'a> {
    brand: &'a BrandConfig,
}

impl<'a> Synthesizer<'a> {
    pub fn new(brand: &'a BrandConfig) -> Self {
        Self { brand }
    }

    /// Three hooks sampled with replacement from the category's templates.
    pub fn select_hooks<R: Rng + ?Sized>(
        &self,
        request: &StrategyRequest,
        rng: &mut R,
    ) -> Vec<String> {
        let templates = tables::hook_templates(&request.category);
        let mut hooks = Vec::with_capacity(HOOK_COUNT);
        for _ in 0..HOOK_COUNT {
            if let Some(template) = templates.choose(rng) {
                hooks.push(render(template, request));
            }
        }
        hooks
    }

    /// Trending, category and branded tags, in that order, without repeats.
    pub fn hashtag_pool(&self, category: &Category) -> Vec<String> {
        let mut pool: Vec<String> = Vec::new();
        let candidates = tables::TRENDING_HASHTAGS
            .iter()
            .chain(tables::category_hashtags(category))
            .copied()
            .chain(self.brand.hashtags.iter().map(String::as_str));
        for tag in candidates {
            if !pool.iter().any(|existing| existing == tag) {
                pool.push(tag.to_string());
            }
        }
        pool
    }

    /// Up to [`MAX_HASHTAGS`] distinct tags drawn from the pool.
    pub fn select_hashtags<R: Rng + ?Sized>(&self, category: &Category, rng: &mut R) -> Vec<String> {
        let pool = self.hashtag_pool(category);
        let amount = MAX_HASHTAGS.min(pool.len());
        pool.choose_multiple(rng, amount).cloned().collect()
    }

    /// The five timestamped script segments, opening with `hook`.
    pub fn script(&self, request: &StrategyRequest, hook: &str, time: TimeOfDay) -> String {
        let brand = self.brand;
        let segments = [
            format!("0-3s: {}", hook),
            render(
                "3-15s: Set up the problem. Most {audience} struggle with {intent}; show that frustration on screen before the payoff.",
                request,
            ),
            render(
                "15-45s: Deliver the value in three quick steps for {intent}.\n   Step 1: Show the mistake everyone makes.\n   Step 2: Show the fix, one clear on-screen example.\n   Step 3: Show the result with a before/after.",
                request,
            ),
            if request.industry.is_empty() {
                format!(
                    "45-50s: Fuel the grind with {}. Natural product shot for the {}.",
                    brand.product,
                    time.phrase()
                )
            } else {
                format!(
                    "45-50s: Fuel the {} grind with {}. Natural product shot for the {}.",
                    request.industry,
                    brand.product,
                    time.phrase()
                )
            },
            format!(
                "50-60s: Follow {} for more {} strategies and grab {} for your {}. Comment \"PART 2\" for the follow-up!",
                brand.company,
                request.category,
                brand.product,
                time.phrase()
            ),
        ];
        segments.join("\n")
    }

    /// Produce a complete strategy document for `request` at local `hour`.
    pub fn synthesize<R: Rng + ?Sized>(
        &self,
        request: &StrategyRequest,
        hour: u32,
        rng: &mut R,
    ) -> StrategyDocument {
        let brand = self.brand;
        let time = TimeOfDay::from_hour(hour);
        let session: u32 = rng.random_range(1000..10000);

        let hooks = self.select_hooks(request, rng);
        let hashtags = self.select_hashtags(&request.category, rng);
        let opening = hooks.first().map(String::as_str).unwrap_or_default();

        let mut sections = Vec::new();

        sections.push(format!(
            "🎯 CUSTOM {} STRATEGY FOR: {}\nSession #{} | Category: {} | Industry: {} | Audience: {}",
            brand.assistant.to_uppercase(),
            request.intent,
            session,
            request.category,
            request.industry,
            request.audience
        ));

        let labels = ["A", "B", "C"];
        let hook_lines: Vec<String> = hooks
            .iter()
            .zip(labels)
            .map(|(hook, label)| format!("Option {}: {}", label, hook))
            .collect();
        sections.push(format!("🔥 VIRAL HOOKS\n{}", hook_lines.join("\n")));

        sections.push(format!(
            "🎬 60-SECOND SCRIPT\n{}",
            self.script(request, opening, time)
        ));

        let visuals: Vec<String> = tables::visual_strategy(&request.category)
            .iter()
            .map(|line| format!("- {}", line))
            .collect();
        sections.push(format!("🎥 VISUAL STRATEGY\n{}", visuals.join("\n")));

        sections.push(format!(
            "#️⃣ HASHTAGS ({})\n{}",
            hashtags.len(),
            hashtags.join(" ")
        ));

        sections.push(format!(
            "⏰ POSTING OPTIMIZATION\nBest times for {}: {}\nPosting now ({}): lead the caption with the {} angle.\nCaption: one line restating the hook, then a question to seed comments.",
            request.audience,
            posting_windows(&request.audience).join(", "),
            time.as_str(),
            time.phrase()
        ));

        let tactics: Vec<String> = tables::engagement_tactics(&request.audience)
            .iter()
            .map(|line| format!("- {}", line))
            .collect();
        sections.push(format!("💬 ENGAGEMENT TACTICS\n{}", tactics.join("\n")));

        sections.push(format!(
            "⚡ {} INTEGRATION\n- Mention {} naturally as your {}, never as an ad read\n- Energy and focus angle: stay sharp through every {} session\n- Tag {} and use the branded hashtags above",
            brand.product.to_uppercase(),
            brand.product,
            time.phrase(),
            request.category,
            brand.company
        ));

        let score = viral_score(
            &format!("{} {}", request.intent, request.industry),
            &request.category,
        );
        let triggers = if score.matched.is_empty() {
            "none yet, add a curiosity word to the hook".to_string()
        } else {
            score.matched.join(", ")
        };
        sections.push(format!(
            "📊 VIRAL POTENTIAL\nScore: {}/100 ({})\nTriggers: {}",
            score.score,
            score.label(),
            triggers
        ));

        StrategyDocument {
            text: sections.join("\n\n"),
            source: DocumentSource::Template,
            session,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn brand() -> BrandConfig {
        BrandConfig::default()
    }

    #[test]
    fn test_time_of_day_buckets() {
        for hour in 0..12 {
            assert_eq!(TimeOfDay::from_hour(hour), TimeOfDay::Morning);
        }
        for hour in 12..17 {
            assert_eq!(TimeOfDay::from_hour(hour), TimeOfDay::Afternoon);
        }
        for hour in 17..24 {
            assert_eq!(TimeOfDay::from_hour(hour), TimeOfDay::Evening);
        }
        assert_eq!(TimeOfDay::from_hour(u32::MAX), TimeOfDay::Evening);
    }

    #[test]
    fn test_render_placeholders() {
        let request = StrategyRequest::new("ranked tips", "gaming", "Apex Legends", "gamers");
        assert_eq!(
            render("{intent}/{category}/{industry}/{audience}", &request),
            "ranked tips/gaming/Apex Legends/gamers"
        );
        let request = StrategyRequest::new("x", "fitness", "", "students");
        assert_eq!(render("[{industry}]", &request), "[]");
    }

    #[test]
    fn test_render_keeps_braces_in_user_text() {
        let request =
            StrategyRequest::new("{audience} tips", "gaming", "{category} league", "gamers");
        assert_eq!(
            render("[{intent}] [{industry}]", &request),
            "[{audience} tips] [{category} league]"
        );

        let request = StrategyRequest::new("{intent}", "{industry}", "{audience}", "gamers");
        assert_eq!(
            render("{intent}|{category}|{industry}|{audience}", &request),
            "{intent}|{industry}|{audience}|gamers"
        );
    }

    #[test]
    fn test_render_leaves_unknown_tokens() {
        let request = StrategyRequest::new("tips", "gaming", "", "gamers");
        assert_eq!(render("{nope} {intent} {", &request), "{nope} tips {");
        assert_eq!(render("{{intent}}", &request), "{tips}");
    }

    #[test]
    fn test_script_empty_industry_has_no_gap() {
        let brand = brand();
        let synth = Synthesizer::new(&brand);
        let request = StrategyRequest::new("focus supplements", "fitness", "", "students");
        let script = synth.script(&request, "HOOK", TimeOfDay::Morning);
        assert!(script.contains("45-50s: Fuel the grind with Metafyzical Smart Energy"));
        assert!(!script.contains("  grind"));
    }

    #[test]
    fn test_select_hooks_returns_three() {
        let brand = brand();
        let synth = Synthesizer::new(&brand);
        let mut rng = StdRng::seed_from_u64(7);
        let request = StrategyRequest::new("ranked tips", "gaming", "Apex Legends", "gamers");
        let hooks = synth.select_hooks(&request, &mut rng);
        assert_eq!(hooks.len(), HOOK_COUNT);
        for hook in &hooks {
            assert!(!hook.contains('{'), "unrendered placeholder in {hook}");
        }
    }

    #[test]
    fn test_hashtag_pool_deduplicates() {
        let brand = BrandConfig {
            hashtags: vec!["#fyp".to_string(), "#LVXLabs".to_string()],
            ..BrandConfig::default()
        };
        let synth = Synthesizer::new(&brand);
        let pool = synth.hashtag_pool(&Category::Gaming);
        let fyp = pool.iter().filter(|t| t.as_str() == "#fyp").count();
        assert_eq!(fyp, 1);
        assert!(pool.contains(&"#LVXLabs".to_string()));
        assert_eq!(pool[0], "#fyp");
    }

    #[test]
    fn test_select_hashtags_caps_at_pool_size() {
        let brand = BrandConfig {
            hashtags: Vec::new(),
            ..BrandConfig::default()
        };
        let synth = Synthesizer::new(&brand);
        let category = Category::Other("knitting".to_string());
        let pool_len = synth.hashtag_pool(&category).len();
        assert!(pool_len < MAX_HASHTAGS);

        let mut rng = StdRng::seed_from_u64(1);
        let tags = synth.select_hashtags(&category, &mut rng);
        assert_eq!(tags.len(), pool_len);
    }

    #[test]
    fn test_script_has_five_segments() {
        let brand = brand();
        let synth = Synthesizer::new(&brand);
        let request = StrategyRequest::new("ranked tips", "gaming", "Apex Legends", "gamers");
        let script = synth.script(&request, "HOOK", TimeOfDay::Evening);
        for marker in ["0-3s: HOOK", "3-15s:", "15-45s:", "45-50s:", "50-60s:"] {
            assert!(script.contains(marker), "missing {marker}");
        }
        assert!(script.contains("Fuel the Apex Legends grind"));
        assert!(script.contains("late-night session fuel"));
        assert!(script.contains("LVX Labs"));
        assert!(script.contains("Metafyzical Smart Energy"));
    }

    #[test]
    fn test_synthesize_same_seed_same_text() {
        let brand = brand();
        let synth = Synthesizer::new(&brand);
        let request = StrategyRequest::new("ranked tips", "gaming", "Apex Legends", "gamers");
        let a = synth.synthesize(&request, 9, &mut StdRng::seed_from_u64(42));
        let b = synth.synthesize(&request, 9, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.text, b.text);
        assert_eq!(a.session, b.session);
        assert_eq!(a.source, DocumentSource::Template);
        assert!((1000..10000).contains(&a.session));
    }
}
