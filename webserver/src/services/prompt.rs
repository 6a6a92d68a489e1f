//! Instruction text for the analysis request

use serde_json::Value;

/// System message sent with every analysis request
pub const SYSTEM_PROMPT: &str = "You are an AI that analyzes Google PageSpeed API JSON data. \
You are expected to produce structured analysis in **markdown table** and a markdown summary.";

/// Status glyphs the tables must use, best to worst
pub const STATUS_GLYPHS: [(&str, &str); 3] = [("🟢", "green"), ("🟠", "orange"), ("🔴", "red")];

/// What each performance key measures
pub const PERFORMANCE_EXPLANATIONS: [(&str, &str); 5] = [
    ("cumulative-layout-shift", "Measures visual stability."),
    ("largest-contentful-paint", "Time taken to render the largest content element."),
    ("speed-index", "How quickly content is visually displayed."),
    ("total-blocking-time", "Total time the main thread was blocked."),
    ("first-contentful-paint", "Time taken to render the first piece of DOM content."),
];

/// What each SEO key checks
pub const SEO_EXPLANATIONS: [(&str, &str); 13] = [
    ("is-crawlable", "Checks if the page is crawlable by search engines."),
    ("robots-txt", "Validates the presence and correctness of the robots.txt file."),
    ("font-size", "Ensures font sizes are legible on all devices."),
    ("tap-targets", "Checks if tap targets are appropriately sized."),
    ("hreflang", "Validates hreflang attributes for multilingual sites."),
    ("canonical", "Checks for the presence of canonical tags."),
    ("structured-data", "Validates the presence and correctness of structured data."),
    ("crawlable-anchors", "Ensures anchor links are crawlable."),
    ("document-title", "Checks for the presence and relevance of the document title."),
    ("meta-description", "Validates the presence and relevance of meta descriptions."),
    ("http-status-code", "Checks for valid HTTP status codes."),
    ("image-alt", "Ensures images have appropriate alt text."),
    ("link-text", "Validates the presence and relevance of link text."),
];

fn explanation_list(entries: &[(&str, &str)]) -> String {
    entries
        .iter()
        .map(|(key, text)| format!("- \"{key}\": {text}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the user prompt embedding the serialized metrics
pub fn build_analysis_prompt(data: &Value) -> String {
    let glyphs = STATUS_GLYPHS
        .iter()
        .map(|(glyph, name)| format!("{glyph} {name}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"Analyze the following Google PageSpeed API JSON data and produce a markdown table and a summary:

Requirements:
1. create performance and seo tables with columns:
| Metric | Score | Status | Notes/Suggestions |
2. Use emojis for Status ({glyphs})
3. Notes/Suggestions should be concise and actionable.
4. Finally, provide a concise summary of the overall performance and SEO status in markdown format.

JSON Data:
{data}

JSON Data explanation:
"performance" object contains key performance metrics such as:
{performance}
"seo" object contains key SEO metrics such as:
{seo}

Output format:
Respond with a single JSON object and nothing else, with exactly these string fields:
{{
  "performance": "markdown table as string for performance metrics",
  "seo": "markdown table as string for seo metrics",
  "summary": "concise markdown summary"
}}"#,
        glyphs = glyphs,
        data = data,
        performance = explanation_list(&PERFORMANCE_EXPLANATIONS),
        seo = explanation_list(&SEO_EXPLANATIONS),
    )
}
