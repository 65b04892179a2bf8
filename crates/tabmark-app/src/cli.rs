use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tabmark: bookmark and tab-session store for a lightweight browser shell.
#[derive(Parser, Debug)]
#[command(name = "tabmark", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding bookmarks.json and session.json.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log filter directive (e.g. debug, tabmark=trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage bookmarks.
    #[command(subcommand)]
    Bookmarks(BookmarksCommand),

    /// Print the normalized form of an address-bar entry.
    Normalize { text: String },

    /// Show whether a request to URL would be blocked.
    CheckUrl { url: String },

    /// Inspect or extend the saved tab session.
    #[command(subcommand)]
    Session(SessionCommand),

    /// Config file helpers.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug)]
pub enum BookmarksCommand {
    /// List bookmarks in order.
    List {
        /// Print the raw JSON mapping.
        #[arg(long)]
        json: bool,
    },

    /// Bookmark a URL.
    Add {
        url: String,
        /// Title to save it under (defaults to the URL).
        #[arg(short, long, default_value = "")]
        title: String,
    },

    /// Remove the bookmark with this title.
    Remove { title: String },

    /// Retitle a bookmark.
    Rename { old: String, new: String },

    /// Delete every bookmark.
    Clear {
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },

    /// Write bookmarks as a Netscape bookmark file.
    Export {
        /// Output file (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Add links from a Netscape bookmark file.
    Import { file: PathBuf },
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Print the saved tabs.
    Show,

    /// Open URLs as new tabs in the saved session.
    Open {
        #[arg(required = true)]
        urls: Vec<String>,
        /// Open as private tabs (never saved).
        #[arg(long)]
        private: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the config file location.
    Path,

    /// Write the commented default config file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },

    /// Print the effective config, defaults filled in.
    Show {
        /// Print JSON instead of TOML.
        #[arg(long)]
        json: bool,
    },

    /// Change the page new windows start on. Rewrites the config file
    /// without its comments.
    SetHomepage { url: String },
}

pub fn parse() -> Args {
    Args::parse()
}
