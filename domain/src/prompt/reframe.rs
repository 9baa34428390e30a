//! Prompt templates for the reframing stage

use crate::report::MAX_PARAGRAPHS;
use crate::stress::{ResponseTone, StressCategory, StressInput};

/// Templates for the reframing stage
pub struct ReframePromptTemplate;

impl ReframePromptTemplate {
    /// System prompt: role, constraints and output shape
    pub fn system(category: StressCategory, tone: ResponseTone) -> String {
        format!(
            r#"You are a stress relief assistant. Your role is to help users mentally reframe stressful experiences using CBT principles and affirming language.

Your task is to take a user's journal-style entry about a stressful experience and break it into {count} separate, cognitively reframed response paragraphs. These should:
- Reflect empathy and understanding of the user's situation (specifically related to "{category}")
- Use gentle, positive, and supportive phrasing
- Offer emotional reframing, new perspectives, or affirmations
- Write in a tone that feels {tone}

Just return {count} distinct, supportive paragraphs in markdown format.

## Instructions

1. Break your response into exactly {count} paragraphs, separated by a blank line.
2. Each paragraph should address one emotional concern or theme from the user's entry.
3. Maintain a consistent tone that is {tone} throughout the response.
4. Adapt your support and reframing to match the stress type: '{category}'. {focus}
5. {style}
6. Avoid generic advice. Tailor your wording to reflect the user's emotional context.
7. Do not add headings, numbering, or closing remarks outside the paragraphs."#,
            count = MAX_PARAGRAPHS,
            category = category.label(),
            tone = tone.label(),
            focus = Self::category_focus(category),
            style = Self::tone_style(tone),
        )
    }

    /// User prompt carrying the entry and both selections
    pub fn user(input: &StressInput) -> String {
        format!(
            r#"User Input:
{entry}

Stress Category: {category}
Response Tone: {tone}

Break this into cognitively supportive and emotionally helpful paragraphs."#,
            entry = input.free_text(),
            category = input.category().label(),
            tone = input.tone().label(),
        )
    }

    fn category_focus(category: StressCategory) -> &'static str {
        match category {
            StressCategory::Work => {
                "Acknowledge effort over outcome and separate self-worth from performance."
            }
            StressCategory::Relationship => {
                "Validate the feelings on both sides without assigning blame."
            }
            StressCategory::Health => {
                "Do not give medical advice; focus on what is within the user's control."
            }
            StressCategory::DecisionFatigue => {
                "Make the next step feel small and permission to rest feel legitimate."
            }
            StressCategory::Loneliness => {
                "Emphasize connection and that reaching out is a sign of strength."
            }
            StressCategory::Unspecified => "Follow the themes the user raises themselves.",
        }
    }

    fn tone_style(tone: ResponseTone) -> &'static str {
        match tone {
            ResponseTone::Gentle => "Use soft, reassuring language and short sentences.",
            ResponseTone::Encouraging => {
                "Highlight strengths and possibilities, with warm energy."
            }
            ResponseTone::Soothing => "Keep the pace slow and calming; invite a deep breath.",
            ResponseTone::Grounding => {
                "Stay matter-of-fact and present-focused, without exaggerated emotion."
            }
        }
    }
}
