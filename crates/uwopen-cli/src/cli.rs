//! CLI argument definitions for uwopen.
//!
//! The binary is a thin host over `uwopen-core`: it builds a client from a
//! key supplied by the invoker and runs one catalogue operation.
//!
//! # Examples
//!
//! ```bash
//! # Current weather station readings
//! uwopen --key YOUR_KEY call weather.current
//!
//! # Course info, pretty-printed (key from the environment)
//! UWATERLOO_API_KEY=YOUR_KEY uwopen call courses.info_by_catalog_number PHYS 234 --pretty
//!
//! # Everything the client can call
//! uwopen list
//! ```

use clap::{Parser, Subcommand};

/// University of Waterloo Open Data API client
#[derive(Debug, Parser)]
#[command(
    name = "uwopen",
    author,
    version,
    about = "University of Waterloo Open Data API client"
)]
pub struct Cli {
    /// API key. Falls back to the UWATERLOO_API_KEY environment variable.
    #[arg(long, global = true)]
    pub key: Option<String>,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Request timeout in milliseconds. Unset leaves the transport default.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Invoke one endpoint by qualified name, e.g. `foodservices.menu`
    Call {
        /// Endpoint id in `group.name` form (see `list`)
        operation: String,

        /// Values for the endpoint's path parameters, in order
        params: Vec<String>,
    },

    /// List every supported endpoint with its path template
    List,
}
