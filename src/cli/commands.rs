use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::clipboard::copy_to_clipboard;
use crate::config::Settings;
use crate::filters::{FilterOptions, HighlightStyle, ItemRow, apply_filter, compile, visible_rows};
use crate::history::HistoryStore;
use crate::models::read_items;
use crate::utils::config_dir;

#[derive(Parser)]
#[command(name = "clipfind")]
#[command(version = "0.1.0")]
#[command(about = "Filter and search clipboard history items", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter saved items and print the matching ones in order
    Filter {
        /// Filter text: whitespace-separated words, or a regular expression
        /// with --regex
        query: String,
        /// Items file (JSON array, newest first)
        #[arg(long)]
        items: PathBuf,
        /// Treat the query as a regular expression
        #[arg(long)]
        regex: bool,
        /// Match case-insensitively
        #[arg(long)]
        ignore_case: bool,
        /// Persist the effective --regex / --ignore-case toggles back to the
        /// settings store
        #[arg(long)]
        save: bool,
        /// Print only the number of matching items
        #[arg(long)]
        count: bool,
    },
    /// Copy an item's text back to the system clipboard
    Copy {
        /// Items file (JSON array, newest first)
        #[arg(long)]
        items: PathBuf,
        /// Row to copy, 0 = newest
        #[arg(default_value_t = 0)]
        row: usize,
    },
    /// Show or clear the saved filter history
    History {
        /// Forget all saved filter strings
        #[arg(long)]
        clear: bool,
    },
    /// Show statistics about the saved items
    Stats {
        /// Items file (JSON array, newest first)
        #[arg(long)]
        items: PathBuf,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Filter { query, items, regex, ignore_case, save, count }) => {
            run_filter(&query, &items, regex, ignore_case, save, count)
        }
        Some(Commands::Copy { items, row }) => run_copy(&items, row),
        Some(Commands::History { clear }) => run_history(clear),
        Some(Commands::Stats { items }) => run_stats(&items),
        None => {
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn run_filter(
    query: &str,
    items_path: &PathBuf,
    regex: bool,
    ignore_case: bool,
    save: bool,
    count: bool,
) -> Result<()> {
    let dir = config_dir()?;
    let mut settings = Settings::load(&dir)?;

    // CLI switches extend the persisted toggles for this invocation.
    let options = FilterOptions::new(
        regex || settings.options.filter_regular_expression,
        ignore_case || settings.options.filter_case_insensitive,
    );

    // Persist the toggles before filtering, so the new values stick even if
    // the search itself turns up nothing.
    if save {
        settings.options.filter_regular_expression = options.use_regex;
        settings.options.filter_case_insensitive = options.case_insensitive;
        settings.save()?;
    }

    let filter = compile(query, options);
    let mut rows: Vec<ItemRow> = read_items(items_path)?.into_iter().map(ItemRow::new).collect();
    apply_filter(&mut rows, &filter, HighlightStyle::Match);

    let visible = visible_rows(&rows);
    if count {
        println!("{}", visible.len());
    } else {
        for row in &visible {
            println!("{}", row.item.display_text());
        }
    }

    // History is best-effort: an accepted filter is worth remembering, but
    // failing to persist it must not fail the search itself.
    if settings.options.save_filter_history
        && !filter.matches_all()
        && let Err(err) = HistoryStore::open(&dir).record(filter.search_string())
    {
        eprintln!("Warning: failed to save filter history: {err:#}");
    }

    Ok(())
}

fn run_copy(items_path: &PathBuf, row: usize) -> Result<()> {
    let items = read_items(items_path)?;
    let item = items.get(row).with_context(|| {
        format!("No item at row {row} (history holds {} items)", items.len())
    })?;
    copy_to_clipboard(item.display_text())?;
    println!("Copied row {row} to clipboard");
    Ok(())
}

fn run_history(clear: bool) -> Result<()> {
    let dir = config_dir()?;
    let store = HistoryStore::open(&dir);

    let mut settings = Settings::load(&dir)?;
    store.migrate_legacy(&mut settings)?;

    if clear {
        store.clear()?;
        return Ok(());
    }

    for entry in store.load()? {
        println!("{entry}");
    }
    Ok(())
}

fn run_stats(items_path: &PathBuf) -> Result<()> {
    let items = read_items(items_path)?;

    println!("Clipboard History Statistics");
    println!("============================");
    println!("Total items: {}", items.len());

    let format_count: std::collections::BTreeSet<&str> =
        items.iter().flat_map(|item| item.formats().keys()).map(String::as_str).collect();
    println!("Distinct formats: {}", format_count.len());

    if let Some(newest) = items.first() {
        println!("Newest item: {}", newest.timestamp.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(oldest) = items.last() {
        println!("Oldest item: {}", oldest.timestamp.format("%Y-%m-%d %H:%M:%S"));
    }

    Ok(())
}
