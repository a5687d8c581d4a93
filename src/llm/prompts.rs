use crate::config::BrandConfig;
use crate::strategy::StrategyRequest;

/// System message sent ahead of every strategy prompt.
pub fn system_prompt(brand: &BrandConfig) -> String {
    format!(
        "You are {}, an expert TikTok strategist for {}. Create detailed, unique strategies every time.",
        brand.assistant, brand.company
    )
}

/// User prompt embedding the four intake fields and the brand facts.
pub fn strategy_prompt(request: &StrategyRequest, brand: &BrandConfig) -> String {
    format!(
        r#"You are {assistant}, the premier TikTok strategy expert for {company} and {product}.

USER REQUEST: {intent}
CATEGORY: {category}
GAME/INDUSTRY: {industry}
TARGET AUDIENCE: {audience}

Create a UNIQUE, detailed TikTok strategy that includes:

1. VIRAL HOOK (3 different options):
- Option A: Question-based hook
- Option B: Shock/surprise hook
- Option C: Story-based hook

2. DETAILED 60-SECOND SCRIPT:
- 0-3s: Hook
- 3-15s: Problem setup
- 15-45s: Solution/value
- 45-60s: CTA + {company} mention

3. VISUAL STRATEGY:
- Camera angles
- Transitions
- Text overlays
- Background/setting

4. HASHTAG RESEARCH (15 hashtags):
- 5 trending hashtags
- 5 niche hashtags for {category}
- 5 {company} branded hashtags

5. POSTING OPTIMIZATION:
- Best time for {audience}
- Caption strategy
- Comment seeding ideas

6. ENGAGEMENT TACTICS:
- How to respond to comments
- Cross-platform promotion
- Community building tips

7. {product_upper} INTEGRATION:
- Natural product mentions
- Energy/focus angle
- Performance benefits for {audience}

Make this strategy SPECIFIC to the request and completely unique each time."#,
        assistant = brand.assistant,
        company = brand.company,
        product = brand.product,
        product_upper = brand.product.to_uppercase(),
        intent = request.intent,
        category = request.category,
        industry = request.industry,
        audience = request.audience,
    )
}
