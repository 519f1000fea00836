use anyhow::{bail, Result};
use browser::CatalogBrowser;
use catalog::{FilmRecord, HttpSource, JsonFileSource, RecordSource};
use clap::{Parser, Subcommand};
use colored::Colorize;
use query::{QuerySpec, SortKey};
use std::path::PathBuf;

/// film-search - search and browse a film catalog
#[derive(Parser)]
#[command(name = "film-search")]
#[command(about = "Search a film catalog by title, director and year range", long_about = None)]
struct Cli {
    /// Path to a JSON catalog file (an array of film records)
    #[arg(short, long, default_value = "data/movies.json")]
    data: PathBuf,

    /// Fetch the catalog from an HTTP record source instead of a file
    #[arg(long)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog and show one page of matches
    Search {
        /// Korean-title substring (case-insensitive)
        #[arg(long, default_value = "")]
        title: String,

        /// Director-name substring (case-insensitive, trimmed)
        #[arg(long, default_value = "")]
        director: String,

        /// Inclusive lower bound on the production year
        #[arg(long)]
        start_year: Option<i32>,

        /// Inclusive upper bound on the production year
        #[arg(long)]
        end_year: Option<i32>,

        /// Sort order: latest-update, production-year, title or release-date
        #[arg(long, default_value = "latest-update", value_parser = parse_sort_key)]
        sort: SortKey,

        /// Zero-based page to show
        #[arg(long, default_value = "0")]
        page: usize,

        /// Records per page
        #[arg(long, default_value = "10")]
        page_size: usize,
    },

    /// Show the full catalog, one page at a time
    List {
        /// Zero-based page to show
        #[arg(long, default_value = "0")]
        page: usize,

        /// Records per page
        #[arg(long, default_value = "10")]
        page_size: usize,
    },
}

fn parse_sort_key(raw: &str) -> Result<SortKey, String> {
    raw.parse()
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let source: Box<dyn RecordSource> = match &cli.url {
        Some(url) => Box::new(HttpSource::new(url.clone())),
        None => Box::new(JsonFileSource::new(cli.data.clone())),
    };

    match cli.command {
        Commands::Search {
            title,
            director,
            start_year,
            end_year,
            sort,
            page,
            page_size,
        } => {
            let spec = QuerySpec {
                title,
                director,
                start_year,
                end_year,
                sort,
            };
            handle_search(source, spec, page, page_size).await?
        }
        Commands::List { page, page_size } => handle_list(source, page, page_size).await?,
    }

    Ok(())
}

/// Handle the 'search' command
async fn handle_search(
    source: Box<dyn RecordSource>,
    spec: QuerySpec,
    page: usize,
    page_size: usize,
) -> Result<()> {
    let mut browser = CatalogBrowser::new(source, page_size);
    browser.search(spec).await?;

    if page > 0 {
        if page >= browser.page_count().max(1) {
            bail!(
                "page {} is out of range (catalog has {} pages)",
                page,
                browser.page_count()
            );
        }
        browser.page(page);
    }

    print_page(&browser);
    Ok(())
}

/// Handle the 'list' command
async fn handle_list(source: Box<dyn RecordSource>, page: usize, page_size: usize) -> Result<()> {
    let mut browser = CatalogBrowser::new(source, page_size);
    browser.reset().await?;

    if page > 0 {
        if page >= browser.page_count().max(1) {
            bail!(
                "page {} is out of range (catalog has {} pages)",
                page,
                browser.page_count()
            );
        }
        browser.page(page);
    }

    print_page(&browser);
    Ok(())
}

/// Print the current window plus a page footer
fn print_page<S: RecordSource>(browser: &CatalogBrowser<S>) {
    let window = browser.window();

    if window.is_empty() {
        println!("{}", "No matching films.".yellow());
        return;
    }

    let offset = browser.page_index() * browser.page_size();
    for (i, record) in window.iter().enumerate() {
        print_record(offset + i + 1, record);
    }

    println!(
        "{}",
        format!(
            "page {} of {} ({} matches)",
            browser.page_index() + 1,
            browser.page_count(),
            browser.results().len()
        )
        .bold()
        .blue()
    );
}

/// One record, absent fields rendered as empty
fn print_record(rank: usize, record: &FilmRecord) {
    let title = record.title_korean.as_deref().unwrap_or("");
    let english = record
        .title_english
        .as_deref()
        .map(|t| format!(" ({t})"))
        .unwrap_or_default();
    let year = record.production_year.as_deref().unwrap_or("");

    println!(
        "{}. {}{} [{}]",
        rank.to_string().green(),
        title.bold(),
        english,
        year
    );

    let details: Vec<String> = [
        ("directors", record.directors_display()),
        ("genre", record.genre.clone().unwrap_or_default()),
        ("status", record.production_status.clone().unwrap_or_default()),
        ("country", record.production_country.clone().unwrap_or_default()),
        ("type", record.kind.clone().unwrap_or_default()),
        ("company", record.production_company.clone().unwrap_or_default()),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(label, value)| format!("{label}: {value}"))
    .collect();

    if !details.is_empty() {
        println!("   {}", details.join("  "));
    }
}
