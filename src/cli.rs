//! Command-line surface and dispatch
//!
//! Every command is single-shot: load the store, perform one operation,
//! save if it mutated anything. The resolved path for `to` goes to stdout
//! with no trailing newline so the wrapping shell function can `cd` to it.

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use directories::BaseDirs;

use crate::core::resolver;
use crate::core::store::BookmarkStore;

/// Name of the bookmarks file in the user's home directory
const BOOKMARKS_FILENAME: &str = ".jumprc";

#[derive(Debug, Parser)]
#[command(name = "jump", version, about = "Directory bookmarking for the shell")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the directory pointed to by a bookmark (or bookmark/sub/path)
    To {
        /// Bookmark name, bookmark name plus subpath, or absolute path
        token: String,
    },
    /// Save the current directory under the given name
    Add {
        /// Bookmark name
        name: String,
    },
    /// Delete a bookmark
    Del {
        /// Bookmark name
        name: String,
    },
    /// Print the list of all saved bookmarks
    List,
}

/// Execute one command against the bookmarks file
pub fn run(cli: Cli) -> Result<()> {
    let rcfile = bookmarks_filepath()?;

    match cli.command {
        Command::To { token } => {
            let store = BookmarkStore::load(&rcfile)?;
            let path = resolver::expand(&store, &token)?;
            print!("{path}");
            io::stdout().flush()?;
        }
        Command::Add { name } => {
            let mut store = BookmarkStore::load(&rcfile)?;
            let cwd = env::current_dir().context("can't determine the current directory")?;
            store.upsert(&name, &cwd.to_string_lossy());
            store
                .save(&rcfile)
                .context("can't save configuration file")?;
        }
        Command::Del { name } => {
            let mut store = BookmarkStore::load(&rcfile)?;
            store.delete(&name)?;
            store
                .save(&rcfile)
                .context("can't save configuration file")?;
        }
        Command::List => {
            let store = BookmarkStore::load(&rcfile)?;
            print_listing(&store);
        }
    }

    Ok(())
}

/// Path of the bookmarks file in the user's home directory
fn bookmarks_filepath() -> Result<PathBuf> {
    let dirs = BaseDirs::new().context("can't determine the home directory")?;
    Ok(dirs.home_dir().join(BOOKMARKS_FILENAME))
}

fn print_listing(store: &BookmarkStore) {
    if store.is_empty() {
        println!("No bookmarks saved.");
        return;
    }

    println!("{:<20} {}", "Bookmark", "Path");
    println!("{}", "-".repeat(75));
    for bookmark in store.iter() {
        println!("{:<20} {}", bookmark.name, bookmark.path);
    }
}
