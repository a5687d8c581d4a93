//! HTML pages for the intake form and the generated strategy.

use crate::config::BrandConfig;
use crate::strategy::{StrategyDocument, StrategyRequest};
use crate::util::html_escape;

const STYLE: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif; margin: 0; padding: 20px; background: linear-gradient(135deg, #0f0c29, #302b63, #24243e); color: #fff; min-height: 100vh; }
.container { max-width: 800px; margin: 0 auto; background: rgba(255,255,255,0.08); border-radius: 16px; padding: 30px; }
h1 { text-align: center; color: #00ffcc; }
.subtitle { text-align: center; color: #ccc; margin-bottom: 24px; }
label { display: block; margin: 14px 0 6px; font-weight: 600; }
input, select { width: 100%; padding: 12px; border-radius: 8px; border: none; font-size: 16px; box-sizing: border-box; }
button, .button { display: inline-block; margin-top: 20px; width: 100%; padding: 14px; border: none; border-radius: 8px; background: #00ffcc; color: #0f0c29; font-size: 18px; font-weight: 700; cursor: pointer; text-align: center; text-decoration: none; box-sizing: border-box; }
pre { white-space: pre-wrap; word-wrap: break-word; background: rgba(0,0,0,0.35); padding: 20px; border-radius: 12px; line-height: 1.5; }
.meta { color: #aaa; font-size: 14px; }
"#;

fn head(title: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="theme-color" content="#0f0c29">
<link rel="manifest" href="/manifest.json">
<title>{}</title>
<style>{}</style>
</head>"##,
        html_escape(title),
        STYLE
    )
}

const SW_REGISTER: &str = r#"<script>
if ('serviceWorker' in navigator) {
  navigator.serviceWorker.register('/sw.js');
}
</script>"#;

const CATEGORIES: &[(&str, &str)] = &[
    ("gaming", "Gaming"),
    ("fitness", "Fitness"),
    ("lifestyle", "Lifestyle"),
    ("business", "Business"),
    ("product", "Product"),
];

const AUDIENCES: &[(&str, &str)] = &[
    ("gamers", "Gamers"),
    ("fitness", "Fitness Enthusiasts"),
    ("entrepreneurs", "Entrepreneurs"),
    ("students", "Students"),
    ("general", "General Audience"),
];

fn options(choices: &[(&str, &str)]) -> String {
    choices
        .iter()
        .map(|(value, label)| format!(r#"<option value="{}">{}</option>"#, value, label))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The intake form posted to `/generate`.
pub fn form_page(brand: &BrandConfig) -> String {
    let assistant = html_escape(&brand.assistant);
    format!(
        r#"{head}
<body>
<div class="container">
<h1>🚀 {assistant}</h1>
<p class="subtitle">TikTok strategy generator by {company}</p>
<form action="/generate" method="post">
<label for="intent">What content do you want to create?</label>
<input type="text" id="intent" name="intent" placeholder="e.g. Apex Legends ranked tips" required>
<label for="category">Category</label>
<select id="category" name="category" required>
{categories}
</select>
<label for="game_industry">Game / Industry (optional)</label>
<input type="text" id="game_industry" name="game_industry" placeholder="e.g. Apex Legends">
<label for="audience">Target audience</label>
<select id="audience" name="audience" required>
{audiences}
</select>
<button type="submit">Generate Strategy</button>
</form>
</div>
{sw}
</body>
</html>"#,
        head = head(&brand.assistant),
        assistant = assistant,
        company = html_escape(&brand.company),
        categories = options(CATEGORIES),
        audiences = options(AUDIENCES),
        sw = SW_REGISTER,
    )
}

/// The generated document, escaped and shown verbatim.
pub fn result_page(
    brand: &BrandConfig,
    request: &StrategyRequest,
    document: &StrategyDocument,
) -> String {
    format!(
        r#"{head}
<body>
<div class="container">
<h1>🎯 Your Strategy</h1>
<p class="meta">Session #{session} · {category} · {audience} · source: {source}</p>
<pre>{text}</pre>
<a class="button" href="/">Create another strategy</a>
</div>
{sw}
</body>
</html>"#,
        head = head(&format!("{} strategy", brand.assistant)),
        session = document.session,
        category = html_escape(request.category.as_str()),
        audience = html_escape(request.audience.as_str()),
        source = document.source.as_str(),
        text = html_escape(&document.text),
        sw = SW_REGISTER,
    )
}
