//! Terminal presenter: film cards, facet panel and stats line.

use colored::Colorize;
use data_loader::{Film, LoadError};
use pipeline::{ActiveSelection, FacetEntry, FacetValue, Facets, Stats};
use session::Presenter;

/// Which parts of a render cycle reach the terminal
#[derive(Debug, Clone, Copy)]
pub struct Sections {
    pub list: bool,
    pub facets: bool,
    pub stats: bool,
}

impl Sections {
    pub const ALL: Sections = Sections {
        list: true,
        facets: true,
        stats: true,
    };
}

/// Prints everything the session renders to stdout
pub struct TerminalPresenter {
    sections: Sections,
    limit: Option<usize>,
}

impl TerminalPresenter {
    pub fn new(sections: Sections) -> Self {
        Self {
            sections,
            limit: None,
        }
    }

    /// Show at most `limit` cards per render
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }
}

impl Presenter for TerminalPresenter {
    fn render_list(&mut self, films: &[&Film]) {
        if !self.sections.list {
            return;
        }

        if films.is_empty() {
            println!("{}", "No films match the current filters.".yellow());
            return;
        }

        let shown = self.limit.unwrap_or(films.len()).min(films.len());
        for (rank, film) in films.iter().take(shown).enumerate() {
            print_card(rank + 1, film);
        }
        if shown < films.len() {
            println!("{}", format!("... and {} more", films.len() - shown).dimmed());
        }
    }

    fn render_facets(&mut self, facets: &Facets, selection: &ActiveSelection) {
        if !self.sections.facets {
            return;
        }

        print_facet_group("Years", &facets.years, |year| FacetValue::Year(*year), selection);
        print_facet_group(
            "Countries",
            &facets.countries,
            |country| FacetValue::Country(country.clone()),
            selection,
        );
        print_facet_group(
            "Directors",
            &facets.directors,
            |director| FacetValue::Director(director.clone()),
            selection,
        );
    }

    fn render_stats(&mut self, stats: &Stats) {
        if !self.sections.stats {
            return;
        }

        println!(
            "{} {}   {} {}   {} {}",
            "Total films:".bold(),
            stats.count.to_string().green(),
            "Avg box office:".bold(),
            stats.average_display().green(),
            "Years:".bold(),
            stats.year_range_display().green(),
        );
    }

    fn render_error(&mut self, _error: &LoadError) {
        // the cause goes to stderr through the returned error
        println!(
            "{}",
            "Error loading films data. Please try again later.".red().bold()
        );
    }
}

fn print_card(rank: usize, film: &Film) {
    println!("{}. {}", rank.to_string().green(), film.title.bold());
    println!(
        "   {} {}   {} {}",
        "Year:".cyan(),
        film.release_year,
        "Box office:".cyan(),
        film.box_office
    );
    if let Some(directors) = film.directors() {
        println!("   {} {}", "Directed by:".cyan(), directors);
    }
    if let Some(country) = film.country() {
        println!("   {} {}", "Country:".cyan(), country);
    }
    match film.image_url() {
        Some(url) => println!("   {} {}", "Image:".cyan(), url),
        None => println!("   {} {}", "Image:".cyan(), "(none)".dimmed()),
    }
    println!("   {} {}", "Link:".cyan(), film.film_url.underline());
}

fn print_facet_group<T: std::fmt::Display>(
    heading: &str,
    entries: &[FacetEntry<T>],
    to_value: impl Fn(&T) -> FacetValue,
    selection: &ActiveSelection,
) {
    println!("{}", heading.bold().blue());
    if entries.is_empty() {
        println!("  {}", "(none)".dimmed());
        return;
    }
    for entry in entries {
        let label = format!("{} ({})", entry.value, entry.count);
        if selection.is_selected(&to_value(&entry.value)) {
            println!("  {} {}", "[x]".green(), label.green());
        } else {
            println!("  [ ] {}", label);
        }
    }
}
