//! Story segment generation for storyreel.
//!
//! [`SegmentGenerator`] turns a [`StoryContext`](storyreel_core::StoryContext)
//! into a validated [`StorySegment`](storyreel_core::StorySegment):
//!
//! 1. validate and screen the user inputs
//! 2. draw cosmetic variation and build the prompt
//! 3. ask the text model (or use the canned segments when none is wired)
//! 4. pull the JSON object out of the answer and repair it
//!
//! The repair step guarantees four choices and a video prompt that names the
//! setting, whatever the model produced.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod extraction;
mod generator;
mod hardcoded;
mod prompts;
mod repair;
mod variation;
mod visuals;

pub use config::{StoryConfig, StoryConfigBuilder};
pub use extraction::{extract_json, parse_json};
pub use generator::SegmentGenerator;
pub use hardcoded::hardcoded_segment;
pub use prompts::{continuation_prompt, opening_prompt};
pub use repair::{CHOICES_PER_SEGMENT, default_choices, repair_segment, setting_keywords, video_instruction};
pub use variation::Variation;
pub use visuals::explicit_video_base;
