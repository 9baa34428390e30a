//! Prompt templates for the enrichment stage

use crate::report::{ImageCandidate, Paragraph};
use crate::stress::ResponseTone;

/// Search themes offered to the model as examples of safe imagery
const SAFE_THEMES: &[&str] = &[
    "comforting hug",
    "someone listening quietly",
    "motivational quote with soft background",
    "soothing gesture",
    "gentle nod or smile",
    "nature calmness",
    "affirmation text",
];

/// Templates for the enrichment stage
pub struct EnrichPromptTemplate;

impl EnrichPromptTemplate {
    /// System prompt for the visual enrichment assistant
    pub fn system() -> String {
        let themes = SAFE_THEMES
            .iter()
            .map(|t| format!("- {}", t))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"You are a visual enrichment assistant for a mental wellness application. Your task is to take a supportive paragraph and its emotional tone, generate a relevant, emotionally safe GIF search query, and then choose the most appropriate GIF to complement the paragraph.

This application helps users experiencing anxiety, sadness, or emotional distress. Your output must reflect compassion and sensitivity.

Only use search themes that yield emotionally appropriate, consoling GIFs. Examples include:
{themes}

Avoid: memes, jokes, sarcasm, celebrities, dramatic reactions, or pop-culture humor."#
        )
    }

    /// First turn: ask for a short search query
    pub fn query(paragraph: &Paragraph, tone: ResponseTone) -> String {
        format!(
            r#"Paragraph: {paragraph}
Tone: {tone}

Carefully read the support paragraph and identify its emotional tone or core supportive message.
Create a short GIF search query (under 10 words) that emphasizes calm, support, or care.
Return ONLY the search query on a single line. No quotes, commentary, or tags."#,
            paragraph = paragraph.text(),
            tone = tone.label(),
        )
    }

    /// Second turn: ask the model to pick one of the search results
    pub fn selection(candidates: &[ImageCandidate]) -> String {
        let listing = candidates
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let title = if c.title.trim().is_empty() {
                    "(untitled)"
                } else {
                    c.title.trim()
                };
                format!("{}. {}\n   {}", i + 1, title, c.url)
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"Search results:
{listing}

Choose the most relevant and emotionally safe result that matches the paragraph's supportive intent.
Return ONLY the direct URL of the selected GIF. No extra text, commentary, or tags."#
        )
    }
}
