//! Report entities and value objects

use serde::{Deserialize, Serialize};

/// One supportive paragraph from the reframing stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Paragraph(String);

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Paragraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The image link attached to a paragraph.
///
/// Only the syntax of the URL is checked (see
/// [`extract_image_url`](crate::parsing::extract_image_url)); reachability
/// and content are not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageReference(String);

impl ImageReference {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn url(&self) -> &str {
        &self.0
    }

    /// Markdown image syntax for this link
    pub fn to_markdown(&self) -> String {
        format!("![gif]({})", self.0)
    }
}

/// A single image-search hit offered to the model for selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageCandidate {
    pub id: String,
    pub title: String,
    pub url: String,
}

impl ImageCandidate {
    pub fn new(id: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
        }
    }
}

/// A paragraph paired with its image link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportBlock {
    pub paragraph: Paragraph,
    pub image: ImageReference,
}

impl ReportBlock {
    pub fn new(paragraph: Paragraph, image: ImageReference) -> Self {
        Self { paragraph, image }
    }

    /// `"{paragraph}\n\n![gif]({url})"`
    pub fn to_markdown(&self) -> String {
        format!("{}\n\n{}", self.paragraph.text(), self.image.to_markdown())
    }
}

/// The final markdown document.
///
/// The markdown string is rendered once at construction, so whatever is
/// displayed and whatever is saved are the same bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    blocks: Vec<ReportBlock>,
    markdown: String,
}

impl Report {
    /// Assemble a report, keeping block order as given.
    pub fn from_blocks(blocks: Vec<ReportBlock>) -> Self {
        let markdown = blocks
            .iter()
            .map(ReportBlock::to_markdown)
            .collect::<Vec<_>>()
            .join("\n\n");
        Self { blocks, markdown }
    }

    pub fn blocks(&self) -> &[ReportBlock] {
        &self.blocks
    }

    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
