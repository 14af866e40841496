use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{CONTACTS_FILE_ENV, Config};
use crate::storage::stores::JSON_STORAGE_PATH;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Simple Contact Book")]
pub struct Cli {
    /// Path of the JSON file holding the contacts
    #[arg(long, global = true, env = CONTACTS_FILE_ENV, default_value = JSON_STORAGE_PATH)]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config::new(&self.file)
    }
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Company name (stored as N/A when left out)
        #[arg(long, default_value = "")]
        company: String,

        /// Client name
        #[arg(long, default_value = "")]
        client: String,

        /// Client phone number
        #[arg(long, default_value = "")]
        phone: String,

        /// Client email address (stored as N/A when left out)
        #[arg(long, default_value = "")]
        email: String,
    },
    /// List contacts in storage order
    List,
    /// Show the contact at a listed position
    Show {
        /// Position as shown by `list` or `search`
        position: usize,
    },
    /// Update the contact at a listed position
    /// Only the fields given are changed
    Update {
        /// Position as shown by `list` or `search`
        position: usize,

        /// New company name
        #[arg(long)]
        company: Option<String>,

        /// New client name
        #[arg(long)]
        client: Option<String>,

        /// New phone number
        #[arg(long)]
        phone: Option<String>,

        /// New email address
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete the contact at a listed position
    Delete {
        /// Position as shown by `list` or `search`
        position: usize,
    },
    /// Search contacts by company and/or client name
    Search {
        /// Part of the company name, any case
        #[arg(long)]
        company: Option<String>,

        /// Part of the client name, any case
        #[arg(long)]
        client: Option<String>,
    },
    /// List the distinct company names on record
    Companies,

    /// Import contacts from .csv file
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: Option<String>,
    },

    /// Export contacts to a .csv file
    Export {
        /// File path to the destination location for export file
        #[arg(short, long)]
        des: Option<String>,
    },
}
