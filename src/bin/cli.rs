// shelf-core - Query helpers over an author and book catalog
// Copyright (C) 2025 shelf-core contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use shelf_core::catalog::{BookId, Catalog, CatalogSource};
use shelf_core::ShelfError;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shelf-cli")]
#[command(about = "shelf-cli - Query an author and book catalog", long_about = None)]
struct Cli {
    /// Directory containing authors.json and books.json
    /// (falls back to $SHELF_DATA_DIR, then the bundled sample)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the book with this id
    Book { id: BookId },
    /// Show the author with this name (case-insensitive)
    Author { name: String },
    /// Number of books per author
    Counts,
    /// Titles grouped by color
    Colors,
    /// Titles credited to an author
    Titles { name: String },
    /// Author with the most books
    Prolific,
    /// Titles sharing an author with this book
    Related { id: BookId },
    /// Author with the most co-authorship incidents
    Collaborative,
    /// Run every query against the catalog
    Demo,
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose >= 2)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let source = match cli.data_dir {
        Some(dir) => CatalogSource::directory(dir)?,
        None => CatalogSource::from_env()?,
    };
    debug!(?source, "loading catalog");

    let catalog = match Catalog::load(&source) {
        Ok(catalog) => catalog,
        Err(e) => {
            let message = e.user_message();
            return Err(anyhow::Error::from(e).context(message));
        }
    };

    match cli.command {
        Commands::Book { id } => {
            let book = catalog
                .find_book_by_id(id)
                .ok_or_else(|| ShelfError::not_found(format!("book {}", id)))?;
            print_json(book)?;
        }
        Commands::Author { name } => {
            let author = catalog
                .find_author_by_name(&name)
                .ok_or_else(|| ShelfError::not_found(format!("author '{}'", name)))?;
            print_json(author)?;
        }
        Commands::Counts => print_json(&catalog.book_counts_per_author())?,
        Commands::Colors => print_json(&catalog.group_books_by_color())?,
        Commands::Titles { name } => print_json(&catalog.titles_by_author(&name))?,
        Commands::Prolific => print_json(catalog.most_prolific_author()?)?,
        Commands::Related { id } => print_json(&catalog.related_books_by_book(id))?,
        Commands::Collaborative => print_json(catalog.most_collaborative_author()?)?,
        Commands::Demo => demo(&catalog)?,
    }

    Ok(())
}

fn demo(catalog: &Catalog) -> Result<()> {
    println!("== Book 12 ==");
    match catalog.find_book_by_id(12) {
        Some(book) => print_json(book)?,
        None => println!("No matching book found"),
    }

    println!("\n== Author \"J.K. Rowling\" ==");
    match catalog.find_author_by_name("J.K. Rowling") {
        Some(author) => print_json(author)?,
        None => println!("No matching author found"),
    }

    println!("\n== Book counts by author ==");
    print_json(&catalog.book_counts_per_author())?;

    println!("\n== Books by color ==");
    print_json(&catalog.group_books_by_color())?;

    println!("\n== Titles by \"George R.R. Martin\" ==");
    print_json(&catalog.titles_by_author("George R.R. Martin"))?;

    println!("\n== Most prolific author ==");
    println!("{}", catalog.most_prolific_author()?);

    println!("\n== Books related to book 46 ==");
    print_json(&catalog.related_books_by_book(46))?;

    println!("\n== Most collaborative author ==");
    println!("{}", catalog.most_collaborative_author()?);

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
