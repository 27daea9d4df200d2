//! Command-line tooling for the portfolio site.
//!
//! - `check` validates the content file and summarizes it
//! - `typewriter` prints the frame timeline the hero typewriter would render
//! - `carousel` replays filter/navigation operations against projects or posts

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use folio_core::{CarouselFilter, Categorized, SiteContent, TypeMode, TypewriterCycler};

/// Content file used when `--content` is not given.
pub const DEFAULT_CONTENT_PATH: &str = "assets/content.toml";

// ============================================================================
// Arguments
// ============================================================================

#[derive(Debug, Parser)]
#[command(name = "folio-cli", version, about = "Inspect and validate portfolio site content")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate the content file and print a summary.
    Check {
        #[arg(long, default_value = DEFAULT_CONTENT_PATH)]
        content: PathBuf,
        /// Print the summary as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the typewriter timeline.
    Typewriter {
        /// Number of transitions to print.
        #[arg(long, default_value_t = 40)]
        steps: usize,
        #[arg(long, default_value = DEFAULT_CONTENT_PATH)]
        content: PathBuf,
        /// Phrases to cycle; defaults to the hero phrases from the content file.
        phrases: Vec<String>,
    },
    /// Replay carousel operations: `next`, `prev`, an index, or `@category`.
    Carousel {
        #[arg(long, default_value = DEFAULT_CONTENT_PATH)]
        content: PathBuf,
        #[arg(long, value_enum, default_value_t = Section::Projects)]
        section: Section,
        /// Initial filter.
        #[arg(long)]
        filter: Option<String>,
        ops: Vec<Op>,
    },
}

/// Which content collection the carousel runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Projects,
    Blog,
}

/// A single carousel operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Next,
    Previous,
    Select(usize),
    Filter(String),
}

impl FromStr for Op {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "next" | "n" => Ok(Self::Next),
            "prev" | "previous" | "p" => Ok(Self::Previous),
            _ => {
                if let Some(category) = s.strip_prefix('@') {
                    return Ok(Self::Filter(category.to_string()));
                }
                s.parse()
                    .map(Self::Select)
                    .map_err(|_| format!("expected next, prev, an index, or @category, got '{s}'"))
            }
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Next => f.write_str("next"),
            Self::Previous => f.write_str("prev"),
            Self::Select(i) => write!(f, "select {i}"),
            Self::Filter(c) => write!(f, "@{c}"),
        }
    }
}

// ============================================================================
// Commands
// ============================================================================

/// Runs a parsed command and returns what should be printed.
pub fn run(command: Command) -> Result<String> {
    match command {
        Command::Check { content, json } => {
            let report = CheckReport::new(&load_content(&content)?);
            if json {
                serde_json::to_string_pretty(&report).context("failed to encode report")
            } else {
                Ok(report.to_string())
            }
        }
        Command::Typewriter {
            steps,
            content,
            phrases,
        } => {
            let phrases = if phrases.is_empty() {
                load_content(&content)?.hero.phrases
            } else {
                phrases
            };
            let cycler = TypewriterCycler::new(phrases).context("invalid phrases")?;
            Ok(typewriter_trace(cycler, steps))
        }
        Command::Carousel {
            content,
            section,
            filter,
            ops,
        } => {
            let site = load_content(&content)?;
            let ops = filter.map(Op::Filter).into_iter().chain(ops);
            let output = match section {
                Section::Projects => {
                    let carousel =
                        CarouselFilter::new(site.projects, site.project_categories);
                    replay(carousel, ops, |p| p.title.as_str())
                }
                Section::Blog => {
                    replay(CarouselFilter::from_items(site.recent_posts()), ops, |p| {
                        p.title.as_str()
                    })
                }
            };
            Ok(output)
        }
    }
}

/// Reads and validates a content file.
pub fn load_content(path: &Path) -> Result<SiteContent> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let content = SiteContent::from_toml(&source)
        .with_context(|| format!("invalid content in {}", path.display()))?;
    log::debug!("loaded content from {}", path.display());
    Ok(content)
}

/// Per-category item count.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Summary printed by `check`.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub owner: String,
    pub phrases: usize,
    pub projects: usize,
    pub project_categories: Vec<CategoryCount>,
    pub posts: usize,
    pub post_categories: Vec<CategoryCount>,
    pub testimonials: usize,
    pub skill_groups: usize,
}

impl CheckReport {
    pub fn new(content: &SiteContent) -> Self {
        let blog = CarouselFilter::from_items(content.posts.iter().collect());

        Self {
            owner: content.profile.name.clone(),
            phrases: content.hero.phrases.len(),
            projects: content.projects.len(),
            project_categories: count_by(&content.project_categories, &content.projects),
            posts: content.posts.len(),
            post_categories: count_by(blog.categories(), &content.posts),
            testimonials: content.testimonials.len(),
            skill_groups: content.skills.len(),
        }
    }
}

fn count_by<T: Categorized>(categories: &[String], items: &[T]) -> Vec<CategoryCount> {
    categories
        .iter()
        .map(|name| CategoryCount {
            name: name.clone(),
            count: items.iter().filter(|i| i.category() == name.as_str()).count(),
        })
        .collect()
}

impl std::fmt::Display for CheckReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "content OK for {}", self.owner)?;
        writeln!(f, "  hero phrases: {}", self.phrases)?;
        writeln!(f, "  projects:     {}", self.projects)?;
        for c in &self.project_categories {
            writeln!(f, "    {:<12} {}", c.name, c.count)?;
        }
        writeln!(f, "  posts:        {}", self.posts)?;
        for c in &self.post_categories {
            writeln!(f, "    {:<12} {}", c.name, c.count)?;
        }
        writeln!(f, "  testimonials: {}", self.testimonials)?;
        write!(f, "  skill groups: {}", self.skill_groups)
    }
}

fn mode_label(mode: TypeMode) -> &'static str {
    match mode {
        TypeMode::Typing => "typing",
        TypeMode::HoldingFull => "holding",
        TypeMode::Deleting => "deleting",
    }
}

/// Renders `steps` transitions as `elapsed mode "text"` lines.
///
/// Elapsed time is when the frame would appear on screen.
pub fn typewriter_trace(mut cycler: TypewriterCycler, steps: usize) -> String {
    let mut out = String::new();
    let mut elapsed = cycler.initial_delay();

    for _ in 0..steps {
        let frame = cycler.advance();
        let (text, delay) = (frame.text.to_string(), frame.delay);
        let _ = writeln!(
            out,
            "{:>7}ms  {:<8}  {:?}",
            elapsed.as_millis(),
            mode_label(cycler.mode()),
            text
        );
        elapsed += delay;
    }
    out
}

/// Applies `ops` in order and prints the carousel position after each one.
///
/// Rejected operations are reported inline and leave the carousel unchanged.
pub fn replay<T, F>(mut carousel: CarouselFilter<T>, ops: impl IntoIterator<Item = Op>, label: F) -> String
where
    T: Categorized,
    F: Fn(&T) -> &str,
{
    let mut out = String::new();
    let _ = writeln!(out, "{:<14} {}", "start", position(&carousel, &label));

    for op in ops {
        let result = match &op {
            Op::Next => {
                carousel.next();
                Ok(())
            }
            Op::Previous => {
                carousel.previous();
                Ok(())
            }
            Op::Select(i) => carousel.select_index(*i),
            Op::Filter(c) => carousel.set_filter(c),
        };
        let line = match result {
            Ok(()) => position(&carousel, &label),
            Err(e) => format!("error: {e}"),
        };
        let _ = writeln!(out, "{:<14} {}", op.to_string(), line);
    }
    out
}

fn position<T: Categorized>(carousel: &CarouselFilter<T>, label: &impl Fn(&T) -> &str) -> String {
    match (carousel.current_index(), carousel.current()) {
        (Some(i), Some(item)) => format!(
            "[{}] {}/{} {}",
            carousel.active_filter(),
            i + 1,
            carousel.len(),
            label(item)
        ),
        _ => format!("[{}] (no items)", carousel.active_filter()),
    }
}

/// Default log filter for a `-v` count.
pub fn log_level(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Card {
        name: &'static str,
        cat: &'static str,
    }

    impl Categorized for Card {
        fn category(&self) -> &str {
            self.cat
        }
    }

    fn cards() -> CarouselFilter<Card> {
        CarouselFilter::new(
            vec![
                Card { name: "one", cat: "a" },
                Card { name: "two", cat: "b" },
                Card { name: "three", cat: "a" },
            ],
            ["a", "b"],
        )
    }

    #[test]
    fn test_parse_ops() {
        assert_eq!("next".parse::<Op>(), Ok(Op::Next));
        assert_eq!("p".parse::<Op>(), Ok(Op::Previous));
        assert_eq!("3".parse::<Op>(), Ok(Op::Select(3)));
        assert_eq!("@web".parse::<Op>(), Ok(Op::Filter("web".into())));
        assert!("sideways".parse::<Op>().is_err());
        assert!("-1".parse::<Op>().is_err());
    }

    #[test]
    fn test_replay_walkthrough() {
        let ops = vec![Op::Filter("a".into()), Op::Next, Op::Next, Op::Select(5)];
        let out = replay(cards(), ops, |c| c.name);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].ends_with("[all] 1/3 one"));
        assert!(lines[1].ends_with("[a] 1/2 one"));
        assert!(lines[2].ends_with("[a] 2/2 three"));
        assert!(lines[3].ends_with("[a] 1/2 one"));
        assert!(lines[4].ends_with("error: index 5 out of range for 2 visible items"));
    }

    #[test]
    fn test_replay_unknown_filter() {
        let out = replay(cards(), vec![Op::Filter("zzz".into())], |c| c.name);
        assert!(out.lines().last().unwrap().ends_with("error: unknown category: zzz"));
    }

    #[test]
    fn test_typewriter_trace_timeline() {
        let cycler = TypewriterCycler::new(["ab"]).unwrap();
        let out = typewriter_trace(cycler, 5);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].trim_start().starts_with("80ms  typing"));
        assert!(lines[0].ends_with("\"a\""));
        assert!(lines[1].trim_start().starts_with("160ms  typing"));
        assert!(lines[2].trim_start().starts_with("240ms  holding"));
        assert!(lines[3].trim_start().starts_with("1740ms  deleting"));
        assert!(lines[4].trim_start().starts_with("1740ms  deleting"));
        assert!(lines[4].ends_with("\"a\""));
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0), log::LevelFilter::Warn);
        assert_eq!(log_level(1), log::LevelFilter::Debug);
        assert_eq!(log_level(7), log::LevelFilter::Trace);
    }

    #[test]
    fn test_cli_parses_carousel_ops() {
        let cli = Cli::try_parse_from([
            "folio-cli", "carousel", "--section", "blog", "--filter", "trading", "next", "0",
        ])
        .unwrap();
        match cli.command {
            Command::Carousel {
                section,
                filter,
                ops,
                ..
            } => {
                assert_eq!(section, Section::Blog);
                assert_eq!(filter.as_deref(), Some("trading"));
                assert_eq!(ops, vec![Op::Next, Op::Select(0)]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
