//! CLI module - Command-line interface for Marquee
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// Marquee - Movie catalog frontend
/// Browse and add movies served by a catalog backend
#[derive(Parser)]
#[command(name = "marquee")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Backend base URL, overrides the config file
    #[arg(long, global = true)]
    pub backend: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web frontend
    #[command(alias = "web")]
    Serve {
        /// Port to listen on, overrides the config file
        #[arg(long, short)]
        port: Option<u16>,
    },

    /// List all movies in the catalog
    #[command(alias = "ls", alias = "l")]
    List,

    /// Add a movie to the catalog
    #[command(alias = "a")]
    Add {
        #[arg(long, default_value = "")]
        title: String,

        #[arg(long, default_value = "")]
        year: String,

        #[arg(long, default_value = "")]
        genre: String,

        #[arg(long, default_value = "")]
        director: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Rating from 0 to 10 (default: 5)
        #[arg(long, default_value = "")]
        rating: String,
    },

    /// Check whether the backend is reachable
    #[command(alias = "s")]
    Status,

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

pub use commands::*;
