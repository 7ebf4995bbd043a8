//! Episode orchestration for storyreel.
//!
//! [`EpisodeOrchestrator`] strings segments into an episode. A coordinator
//! text model plans the arc, checks continuity, polishes video prompts,
//! paces the episode and writes the summary. Every coordinator step has a
//! fallback, so a silent or confused coordinator never aborts an episode.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod coordinator;
mod orchestrator;
mod prompts;

pub use config::{OrchestratorConfig, OrchestratorConfigBuilder};
pub use coordinator::{CoherenceCheck, PacingDecision, truncate_prompt};
pub use orchestrator::EpisodeOrchestrator;
pub use prompts::{arc_prompt, coherence_prompt, enhance_prompt, pacing_prompt, summary_prompt};
