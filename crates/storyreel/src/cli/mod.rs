//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the storyreel binary.

mod commands;
mod episode;
mod segment;

pub use commands::{Cli, Commands, EpisodeArgs, SegmentArgs};
pub use episode::run_episode;
pub use segment::run_segment;
