mod render;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use data_loader::Year;
use pipeline::{ActiveSelection, FacetValue, SortKey};
use render::{Sections, TerminalPresenter};
use session::{BrowseSession, Intent};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Film Browser - filter, sort and summarize a film dataset
#[derive(Parser)]
#[command(name = "film-browser")]
#[command(about = "Browse a JSON film dataset with facets, search and sorting", long_about = None)]
struct Cli {
    /// Path to the JSON film dataset
    #[arg(short, long, default_value = "films_data.json")]
    data: PathBuf,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the films matching the filters, followed by statistics
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Maximum number of cards to print
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Print every facet value with its film count
    Facets,

    /// Print statistics for the films matching the filters
    Stats {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Interactive session reading commands from stdin
    Browse {
        /// Maximum number of cards to print per render
        #[arg(long, default_value = "20")]
        limit: usize,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Case-insensitive text matched against titles and directors
    #[arg(short, long)]
    query: Option<String>,

    /// Release year to include (repeatable)
    #[arg(long)]
    year: Vec<Year>,

    /// Country to include (repeatable)
    #[arg(long)]
    country: Vec<String>,

    /// Exact directors string to include (repeatable)
    #[arg(long)]
    director: Vec<String>,

    /// boxOfficeDesc, boxOfficeAsc, yearDesc, yearAsc or title
    #[arg(short, long, default_value = "boxOfficeDesc")]
    sort: String,
}

impl FilterArgs {
    /// The flags as a selection; repeating a value selects it once
    fn selection(&self) -> ActiveSelection {
        let years = self.year.iter().map(|y| FacetValue::Year(*y));
        let countries = self.country.iter().cloned().map(FacetValue::Country);
        let directors = self.director.iter().cloned().map(FacetValue::Director);

        years
            .chain(countries)
            .chain(directors)
            .fold(
                ActiveSelection::new()
                    .with_query(self.query.clone().unwrap_or_default())
                    .with_sort(SortKey::parse(&self.sort)),
                ActiveSelection::with_facet,
            )
    }
}

const BROWSE_HELP: &str = "\
Commands:
  search <text>                 set the search text (empty clears it)
  sort <key>                    boxOfficeDesc | boxOfficeAsc | yearDesc | yearAsc | title
  toggle year <n>               select/unselect a year
  toggle country <name>         select/unselect a country
  toggle director <name>        select/unselect a directors string
  reset                         clear all filters and restore the default sort
  help                          show this message
  quit                          leave";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stdout belongs to the rendered output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List { filters, limit } => {
            let mut presenter = TerminalPresenter::new(Sections {
                list: true,
                facets: false,
                stats: true,
            })
            .with_limit(limit);
            handle_one_shot(&cli.data, &filters, &mut presenter).await?
        }
        Commands::Facets => handle_facets(&cli.data).await?,
        Commands::Stats { filters } => {
            let mut presenter = TerminalPresenter::new(Sections {
                list: false,
                facets: false,
                stats: true,
            });
            handle_one_shot(&cli.data, &filters, &mut presenter).await?
        }
        Commands::Browse { limit } => handle_browse(&cli.data, limit).await?,
    }

    Ok(())
}

/// Handle the 'list' and 'stats' commands
async fn handle_one_shot(
    data: &Path,
    filters: &FilterArgs,
    presenter: &mut TerminalPresenter,
) -> Result<()> {
    let mut session = open_session(data, presenter).await?;
    session.select(filters.selection());
    session.render(presenter);
    Ok(())
}

async fn open_session(data: &Path, presenter: &mut TerminalPresenter) -> Result<BrowseSession> {
    BrowseSession::open(data, presenter)
        .await
        .with_context(|| format!("Failed to load film dataset from {}", data.display()))
}

/// Handle the 'facets' command
async fn handle_facets(data: &Path) -> Result<()> {
    let mut presenter = TerminalPresenter::new(Sections {
        list: false,
        facets: true,
        stats: false,
    });
    let session = open_session(data, &mut presenter).await?;
    session.render(&mut presenter);
    Ok(())
}

/// Handle the 'browse' command
async fn handle_browse(data: &Path, limit: usize) -> Result<()> {
    let mut presenter = TerminalPresenter::new(Sections::ALL).with_limit(Some(limit));
    let mut session = BrowseSession::launch(data, &mut presenter)
        .await
        .with_context(|| format!("Failed to load film dataset from {}", data.display()))?;

    println!("{}", "Type 'help' for commands, 'quit' to leave.".dimmed());

    let stdin = io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        let trimmed = line.trim();

        match trimmed {
            "" => {}
            "quit" | "exit" => break,
            "help" => println!("{}", BROWSE_HELP),
            _ => match trimmed.parse::<Intent>() {
                Ok(intent) => {
                    debug!("Read intent from stdin: {:?}", intent);
                    session.dispatch(intent, &mut presenter);
                }
                Err(err) => {
                    warn!("Ignoring command {:?}: {}", trimmed, err);
                    println!("{} {}", "Unrecognized command:".yellow(), err);
                    println!("Type 'help' for the list of commands.");
                }
            },
        }
        prompt()?;
    }

    Ok(())
}

fn prompt() -> Result<()> {
    print!("{} ", ">".bold());
    io::stdout().flush().context("Failed to flush stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{Dataset, Film};

    fn filters(args: &[&str]) -> FilterArgs {
        let argv = ["film-browser", "list"].into_iter().chain(args.iter().copied());
        match Cli::parse_from(argv).command {
            Commands::List { filters, .. } => filters,
            _ => unreachable!("parsed a list command"),
        }
    }

    fn film(title: &str, year: Year) -> Film {
        Film {
            title: title.to_string(),
            release_year: year,
            country: Some("US".to_string()),
            directors: Some("Jane Doe".to_string()),
            box_office: "$1,000".to_string(),
            image_url: None,
            film_url: format!("https://example.org/{}", title),
        }
    }

    #[test]
    fn test_repeated_flags_select_once() {
        let selection = filters(&[
            "--year", "2000", "--year", "2000", "--country", "US", "--country", "US",
            "--director", "Jane Doe", "--director", "Jane Doe",
        ])
        .selection();

        assert!(selection.is_selected(&FacetValue::Year(2000)));
        assert!(selection.is_selected(&FacetValue::Country("US".to_string())));
        assert!(selection.is_selected(&FacetValue::Director("Jane Doe".to_string())));
        assert_eq!(selection.selected_years.len(), 1);
    }

    #[test]
    fn test_repeated_year_still_filters() {
        let mut session =
            BrowseSession::new(Dataset::from_films(vec![film("A", 2000), film("B", 2010)]));

        session.select(filters(&["--year", "2000", "--year", "2000"]).selection());

        let titles: Vec<&str> = session.visible().iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["A"]);
    }

    #[test]
    fn test_default_flags() {
        let selection = filters(&[]).selection();
        assert_eq!(selection, ActiveSelection::default());

        let selection = filters(&["-q", "lang", "-s", "yearAsc", "--year", "1927"]).selection();
        assert_eq!(selection.query, "lang");
        assert_eq!(selection.sort_key, SortKey::YearAsc);
        assert_eq!(selection.selected_years.len(), 1);
    }
}
