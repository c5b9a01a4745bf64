//! End-to-end session tests: load a dataset file, drive it with text
//! intents, and check what reaches the presenter.

use data_loader::{Film, LoadError};
use pipeline::{ActiveSelection, Facets, Stats};
use session::{BrowseSession, Intent, Presenter};
use std::io::Write;

#[derive(Default)]
struct Screen {
    list: Vec<String>,
    marked: Vec<String>,
    stats: Option<Stats>,
    error: Option<String>,
    renders: usize,
}

impl Presenter for Screen {
    fn render_list(&mut self, films: &[&Film]) {
        self.renders += 1;
        self.list = films.iter().map(|f| f.title.clone()).collect();
    }

    fn render_facets(&mut self, facets: &Facets, selection: &ActiveSelection) {
        self.marked = facets
            .entries()
            .filter(|(value, _)| selection.is_selected(value))
            .map(|(value, count)| format!("{} ({})", value, count))
            .collect();
    }

    fn render_stats(&mut self, stats: &Stats) {
        self.stats = Some(*stats);
    }

    fn render_error(&mut self, error: &LoadError) {
        self.error = Some(error.to_string());
    }
}

const FILMS: &str = r#"[
    {"title": "Metropolis", "release_year": 1927, "country": "Germany", "directors": "Fritz Lang",
     "box_office": "$1,236,166", "image_url": "https://example.org/m.jpg", "film_url": "https://example.org/metropolis"},
    {"title": "M", "release_year": 1931, "country": "Germany", "directors": "Fritz Lang",
     "box_office": "$35,566", "film_url": "https://example.org/m"},
    {"title": "Fargo", "release_year": 1996, "country": "US", "directors": "Joel Coen, Ethan Coen",
     "box_office": "$60,611,975", "film_url": "https://example.org/fargo"},
    {"title": "alphaville", "release_year": 1965, "country": "France", "directors": "Jean-Luc Godard",
     "box_office": "unknown", "film_url": "https://example.org/alphaville"}
]"#;

fn dataset_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FILMS.as_bytes()).unwrap();
    file
}

fn run(session: &mut BrowseSession, screen: &mut Screen, line: &str) {
    let intent: Intent = line.parse().unwrap();
    session.dispatch(intent, screen);
}

#[tokio::test]
async fn test_launch_renders_default_view() {
    let file = dataset_file();
    let mut screen = Screen::default();

    let session = BrowseSession::launch(file.path(), &mut screen).await.unwrap();

    assert_eq!(screen.renders, 1);
    assert_eq!(screen.list, vec!["Fargo", "Metropolis", "M", "alphaville"]);
    assert!(screen.marked.is_empty());

    let stats = screen.stats.unwrap();
    assert_eq!(stats.count, 4);
    assert_eq!(stats.year_range_display(), "1927 - 1996");
    // (1,236,166 + 35,566 + 60,611,975 + 0) / 4
    assert_eq!(stats.average_display(), "$15,470,927");
    assert_eq!(session.facets().countries.len(), 3);
}

#[tokio::test]
async fn test_intent_sequence() {
    let file = dataset_file();
    let mut screen = Screen::default();
    let mut session = BrowseSession::launch(file.path(), &mut screen).await.unwrap();

    run(&mut session, &mut screen, "toggle country Germany");
    assert_eq!(screen.list, vec!["Metropolis", "M"]);
    assert_eq!(screen.marked, vec!["Germany (2)"]);

    run(&mut session, &mut screen, "sort yearAsc");
    assert_eq!(screen.list, vec!["Metropolis", "M"]);

    run(&mut session, &mut screen, "toggle country France");
    assert_eq!(screen.list, vec!["Metropolis", "M", "alphaville"]);

    run(&mut session, &mut screen, "search ALPHA");
    assert_eq!(screen.list, vec!["alphaville"]);
    assert_eq!(screen.stats.unwrap().average_display(), "$0");

    run(&mut session, &mut screen, "sort title");
    run(&mut session, &mut screen, "search");
    assert_eq!(screen.list, vec!["alphaville", "M", "Metropolis"]);

    run(&mut session, &mut screen, "reset");
    assert_eq!(screen.list, vec!["Fargo", "Metropolis", "M", "alphaville"]);
    assert!(screen.marked.is_empty());
    assert_eq!(session.selection(), &ActiveSelection::default());
    assert_eq!(screen.renders, 8);
}

#[tokio::test]
async fn test_launch_with_malformed_dataset() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"[{"title": "Half"#).unwrap();
    let mut screen = Screen::default();

    let result = BrowseSession::launch(file.path(), &mut screen).await;

    assert!(matches!(result, Err(LoadError::Malformed { .. })));
    assert!(screen.error.unwrap().starts_with("Malformed dataset"));
    assert_eq!(screen.renders, 0);
}
