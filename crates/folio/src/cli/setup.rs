use clap::{Args, Parser, Subcommand, ValueEnum};
use folioapp::config::BackendKind;
use folioapp::form::{BlogPostField, SkillField};
use folioapp::model::RecordId;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Local,
    Remote,
}

impl From<BackendArg> for BackendKind {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Local => BackendKind::Local,
            BackendArg::Remote => BackendKind::Remote,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    bin_name = "folio",
    version = get_version(),
    disable_help_subcommand = true
)]
#[command(about = "Manage portfolio skills and blog posts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Content store to use, overriding the configuration
    #[arg(long, value_enum, global = true, help_heading = "Options")]
    pub backend: Option<BackendArg>,

    /// Data directory of the local store, overriding the configuration
    #[arg(long, global = true, help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Config file to load instead of the default folio.toml
    #[arg(long, global = true, help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage skills
    #[command(display_order = 1)]
    Skills {
        #[command(subcommand)]
        action: SkillCommands,
    },

    /// Manage blog posts
    #[command(display_order = 2)]
    Posts {
        #[command(subcommand)]
        action: PostCommands,
    },

    /// Add the sample portfolio to empty collections
    #[command(display_order = 3)]
    Seed,

    /// Show the effective configuration
    #[command(display_order = 4)]
    Config {
        /// Print a commented folio.toml template instead
        #[arg(long)]
        template: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum SkillCommands {
    /// List skills
    #[command(alias = "ls")]
    List {
        /// Only show skills in this category
        #[arg(long, short)]
        category: Option<String>,
    },

    /// List skill categories with counts
    Categories,

    /// Add a skill
    Add(SkillArgs),

    /// Edit a skill; fields not given keep their values
    Edit {
        id: RecordId,

        #[command(flatten)]
        fields: SkillArgs,
    },

    /// Delete a skill
    #[command(alias = "rm")]
    Delete {
        id: RecordId,

        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct SkillArgs {
    #[arg(long)]
    pub name: Option<String>,

    /// Proficiency from 0 to 100 (new skills default to 50)
    #[arg(long, allow_hyphen_values = true)]
    pub level: Option<String>,

    #[arg(long)]
    pub category: Option<String>,
}

impl SkillArgs {
    /// Form edits for the fields that were given, in form order.
    pub fn fields(&self) -> Vec<(SkillField, String)> {
        [
            (SkillField::Name, &self.name),
            (SkillField::Level, &self.level),
            (SkillField::Category, &self.category),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.clone().map(|v| (field, v)))
        .collect()
    }
}

#[derive(Subcommand, Debug)]
pub enum PostCommands {
    /// List blog posts, newest first
    #[command(alias = "ls")]
    List {
        /// Only show posts in this category
        #[arg(long, short)]
        category: Option<String>,
    },

    /// Show a post in full
    #[command(alias = "view")]
    Show { id: RecordId },

    /// List post categories with counts
    Categories,

    /// Add a blog post
    Add(PostArgs),

    /// Edit a blog post; fields not given keep their values
    Edit {
        id: RecordId,

        #[command(flatten)]
        fields: PostArgs,
    },

    /// Delete a blog post
    #[command(alias = "rm")]
    Delete {
        id: RecordId,

        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct PostArgs {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub excerpt: Option<String>,

    /// Full post body
    #[arg(long)]
    pub content: Option<String>,

    /// Display date, e.g. "May 15, 2023" (defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// Reading time label (defaults to "5 min read")
    #[arg(long)]
    pub read_time: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    /// Cover image URL
    #[arg(long)]
    pub image: Option<String>,
}

impl PostArgs {
    pub fn fields(&self) -> Vec<(BlogPostField, String)> {
        [
            (BlogPostField::Title, &self.title),
            (BlogPostField::Excerpt, &self.excerpt),
            (BlogPostField::Content, &self.content),
            (BlogPostField::Date, &self.date),
            (BlogPostField::ReadTime, &self.read_time),
            (BlogPostField::Category, &self.category),
            (BlogPostField::Image, &self.image),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.clone().map(|v| (field, v)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("folio").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn parses_skill_add() {
        let cli = parse(&["skills", "add", "--name", "Go", "--level", "70", "--category", "Backend"]);
        let Commands::Skills {
            action: SkillCommands::Add(args),
        } = cli.command
        else {
            panic!("expected skills add");
        };
        assert_eq!(
            args.fields(),
            vec![
                (SkillField::Name, "Go".to_string()),
                (SkillField::Level, "70".to_string()),
                (SkillField::Category, "Backend".to_string()),
            ]
        );
    }

    #[test]
    fn edit_only_carries_given_fields() {
        let cli = parse(&["posts", "edit", "3", "--read-time", "9 min read"]);
        let Commands::Posts {
            action: PostCommands::Edit { id, fields },
        } = cli.command
        else {
            panic!("expected posts edit");
        };
        assert_eq!(id, 3);
        assert_eq!(
            fields.fields(),
            vec![(BlogPostField::ReadTime, "9 min read".to_string())]
        );
    }

    #[test]
    fn global_options_work_after_subcommand() {
        let cli = parse(&["skills", "list", "--backend", "remote", "--json", "-c", "Frontend"]);
        assert_eq!(cli.backend, Some(BackendArg::Remote));
        assert!(cli.json);
        assert!(matches!(
            cli.command,
            Commands::Skills {
                action: SkillCommands::List { category: Some(ref c) }
            } if c == "Frontend"
        ));
    }

    #[test]
    fn negative_level_reaches_validation() {
        let cli = parse(&["skills", "add", "--level", "-5"]);
        assert!(matches!(
            cli.command,
            Commands::Skills {
                action: SkillCommands::Add(SkillArgs { level: Some(ref l), .. })
            } if l == "-5"
        ));
    }

    #[test]
    fn delete_defaults_to_asking() {
        let cli = parse(&["posts", "rm", "2"]);
        assert!(matches!(
            cli.command,
            Commands::Posts {
                action: PostCommands::Delete { id: 2, yes: false }
            }
        ));
    }
}
