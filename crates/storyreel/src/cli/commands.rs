//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use storyreel::{Character, EpisodeRequest, StoryContext};

/// storyreel - interactive AI story episodes with generated video
#[derive(Parser, Debug)]
#[command(name = "storyreel")]
#[command(about = "Interactive AI story episodes with generated video", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Use hardcoded segments and placeholder clips, no API calls
    #[arg(long, global = true)]
    pub offline: bool,

    /// Configuration file layered over the bundled defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a complete episode and print it as JSON
    Episode(EpisodeArgs),

    /// Generate a single story segment and print it as JSON
    Segment(SegmentArgs),
}

/// Setting, protagonist and themes shared by both commands.
#[derive(Args, Debug, Clone)]
pub struct CharacterArgs {
    /// Where the story takes place
    #[arg(long)]
    pub setting: String,

    /// Protagonist name
    #[arg(long)]
    pub name: String,

    /// Protagonist gender
    #[arg(long)]
    pub gender: String,

    /// Short description of the protagonist
    #[arg(long)]
    pub description: String,

    /// Story theme, repeat for several (order matters)
    #[arg(long = "theme")]
    pub themes: Vec<String>,
}

impl CharacterArgs {
    fn character(&self) -> Character {
        Character::new(&self.name, &self.gender, &self.description)
    }

    /// Episode request for these arguments.
    pub fn episode_request(&self) -> EpisodeRequest {
        EpisodeRequest {
            character: self.character(),
            setting: self.setting.clone(),
            themes: self.themes.clone(),
        }
    }

    /// Story context for these arguments.
    pub fn story_context(&self) -> StoryContext {
        StoryContext::new(&self.setting, self.character(), self.themes.clone())
    }
}

/// Arguments of the `episode` command.
#[derive(Args, Debug, Clone)]
pub struct EpisodeArgs {
    /// Story inputs
    #[command(flatten)]
    pub story: CharacterArgs,

    /// Override the maximum number of segments
    #[arg(long)]
    pub max_segments: Option<usize>,

    /// Override the minimum number of segments
    #[arg(long)]
    pub min_segments: Option<usize>,
}

/// Arguments of the `segment` command.
#[derive(Args, Debug, Clone)]
pub struct SegmentArgs {
    /// Story inputs
    #[command(flatten)]
    pub story: CharacterArgs,

    /// Text of the choice that led here; omit for an opening segment
    #[arg(long)]
    pub previous_choice: Option<String>,

    /// Genre of the previous choice
    #[arg(long, default_value = "random", requires = "previous_choice")]
    pub previous_genre: String,

    /// Pin the cosmetic variation draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also generate the video clip
    #[arg(long)]
    pub video: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_episode_command() {
        let cli = Cli::try_parse_from([
            "storyreel",
            "--offline",
            "episode",
            "--setting",
            "Gas station",
            "--name",
            "Morgan",
            "--gender",
            "male",
            "--description",
            "night shift worker",
            "--theme",
            "Mystery",
            "--theme",
            "Horror",
            "--max-segments",
            "4",
        ])
        .unwrap();

        assert!(cli.offline);
        let Commands::Episode(args) = cli.command else {
            panic!("expected episode command");
        };
        assert_eq!(args.max_segments, Some(4));
        let request = args.story.episode_request();
        assert_eq!(request.themes, vec!["Mystery", "Horror"]);
        assert_eq!(request.character.name, "Morgan");
    }

    #[test]
    fn parses_segment_command_with_global_flags_after() {
        let cli = Cli::try_parse_from([
            "storyreel",
            "segment",
            "--setting",
            "Lighthouse",
            "--name",
            "Ada",
            "--gender",
            "female",
            "--description",
            "keeper",
            "--previous-choice",
            "Climb the stairs",
            "--seed",
            "7",
            "--verbose",
        ])
        .unwrap();

        assert!(cli.verbose);
        let Commands::Segment(args) = cli.command else {
            panic!("expected segment command");
        };
        assert_eq!(args.previous_choice.as_deref(), Some("Climb the stairs"));
        assert_eq!(args.previous_genre, "random");
        assert_eq!(args.seed, Some(7));
        assert!(!args.video);
    }

    #[test]
    fn missing_setting_is_rejected() {
        let result = Cli::try_parse_from([
            "storyreel",
            "segment",
            "--name",
            "Ada",
            "--gender",
            "female",
            "--description",
            "keeper",
        ]);
        assert!(result.is_err());
    }
}
