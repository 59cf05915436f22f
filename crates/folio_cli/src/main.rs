//! Terminal front end for the Folio catalog.
//!
//! # Responsibility
//! - Render filtered project/post listings without a browser.
//! - Expose shareable project filter links.

use clap::{Parser, Subcommand, ValueEnum};
use folio_core::{
    core_version, decode_filter_query, default_log_level, encode_filter_query,
    format_display_date, init_logging, BlogPost, Catalog, CatalogService, FilterLocation,
    FilterState, Project, SortMode, TagSelection, PROJECTS_PATH,
};
use log::info;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Browse portfolio projects and blog posts")]
struct Cli {
    /// Catalog JSON file (defaults to the bundled sample)
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List projects carrying every given tag
    Projects {
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
        /// Query string to restore tags from, e.g. `filter=React&filter=Vite`
        #[arg(long)]
        query: Option<String>,
    },
    /// List blog posts
    Posts {
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
        #[arg(long, default_value = "")]
        search: String,
        /// Sort mode: newest|oldest|title
        #[arg(long, default_value_t = SortMode::Newest)]
        sort: SortMode,
    },
    /// List the tag vocabulary of one listing
    Tags {
        #[arg(value_enum)]
        listing: Listing,
    },
    /// Print the shareable project listing link for a tag selection
    Href {
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },
    /// Print the core version
    Version,
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::Projects { .. } => "projects",
            Self::Posts { .. } => "posts",
            Self::Tags { .. } => "tags",
            Self::Href { .. } => "href",
            Self::Version => "version",
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Listing {
    Projects,
    Posts,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }
    info!(
        "event=cli_run module=cli status=start command={}",
        cli.command.name()
    );

    if let Command::Version = cli.command {
        println!("folio_core version={}", core_version());
        return Ok(());
    }

    let catalog = match cli.catalog.as_ref() {
        Some(path) => Catalog::load(path)?,
        None => Catalog::sample()?,
    };
    let service = CatalogService::new(catalog);

    match cli.command {
        Command::Projects { tags, query } => {
            let mut selection = query
                .as_deref()
                .map(decode_filter_query)
                .unwrap_or_default();
            selection.extend(tags);
            let projects = service.projects(&selection);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&projects)?);
            } else {
                print_projects(&projects);
            }
        }
        Command::Posts { tags, search, sort } => {
            let state = FilterState {
                tags: tags.into_iter().collect(),
                search,
                sort,
            };
            let posts = service.posts(&state);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&posts)?);
            } else {
                print_posts(&posts);
            }
        }
        Command::Tags { listing } => {
            let tags = match listing {
                Listing::Projects => service.project_tags(),
                Listing::Posts => service.post_tags(),
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&tags)?);
            } else {
                for tag in tags {
                    println!("{tag}");
                }
            }
        }
        Command::Href { tags } => {
            let selection: TagSelection = tags.into_iter().collect();
            let location = FilterLocation::new(PROJECTS_PATH, encode_filter_query(&selection));
            println!("{}", location.to_href());
        }
        Command::Version => {}
    }

    Ok(())
}

fn print_projects(projects: &[&Project]) {
    if projects.is_empty() {
        println!("No projects match the selected tags.");
        return;
    }
    for project in projects {
        println!("{}", project.title);
        println!("  {}", project.description);
        println!("  tech: {}", project.tech.join(", "));
        for (kind, url) in project.links.iter() {
            println!("  {}: {url}", kind.label());
        }
    }
}

fn print_posts(posts: &[&BlogPost]) {
    if posts.is_empty() {
        println!("No posts match the current filters.");
        return;
    }
    for post in posts {
        let date = format_display_date(post.date.as_deref());
        let read_time = post.read_time.as_deref().unwrap_or("");
        println!("{}", post.title);
        println!("  {date}  {read_time}");
        if !post.tag_slice().is_empty() {
            println!("  tags: {}", post.tag_slice().join(", "));
        }
        println!("  {}", post.link);
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;
    use folio_core::SortMode;

    #[test]
    fn parses_repeated_tags_and_sort() {
        let cli = Cli::try_parse_from([
            "folio", "posts", "--tag", "Rust", "--tag", "Async", "--sort", "title",
        ])
        .unwrap();
        match cli.command {
            Command::Posts { tags, search, sort } => {
                assert_eq!(tags, vec!["Rust", "Async"]);
                assert!(search.is_empty());
                assert_eq!(sort, SortMode::Title);
            }
            _ => panic!("expected posts command"),
        }
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from(["folio", "tags", "projects", "--json"]).unwrap();
        assert!(cli.json);
        assert!(cli.catalog.is_none());
    }

    #[test]
    fn sort_defaults_to_newest_and_parses_any_case() {
        let cli = Cli::try_parse_from(["folio", "posts"]).unwrap();
        assert!(matches!(cli.command, Command::Posts { sort: SortMode::Newest, .. }));

        let cli = Cli::try_parse_from(["folio", "posts", "--sort", "Oldest"]).unwrap();
        assert!(matches!(cli.command, Command::Posts { sort: SortMode::Oldest, .. }));
    }

    #[test]
    fn rejects_unknown_sort_mode_with_parse_error() {
        let err = match Cli::try_parse_from(["folio", "posts", "--sort", "popular"]) {
            Ok(_) => panic!("expected sort mode error"),
            Err(err) => err,
        };
        let message = err.to_string();
        assert!(message.contains("unsupported sort mode `popular`"));
        assert!(message.contains("newest|oldest|title"));
    }
}
