//! Stress input: what the user submits for one report.
//!
//! - [`StressCategory`]: six fixed kinds of stress
//! - [`ResponseTone`]: four fixed tones for the supportive response
//! - [`StressInput`]: free text plus one category and one tone

pub mod category;
pub mod input;
pub mod tone;

pub use category::StressCategory;
pub use input::StressInput;
pub use tone::ResponseTone;
