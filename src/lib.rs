//! Spotify proxy library
//!
//! This library provides the HTTP handlers behind `playdeck`: a thin proxy that
//! lets a browser client authorize with Spotify, search for tracks and control
//! playback without holding the application's client secret itself.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the auth, search, playback and health endpoints
//! - `config` - Configuration management and environment variables
//! - `server` - Router assembly and the HTTP server entry point
//! - `spotify` - Request-scoped Spotify Web API client
//! - `types` - Data structures and type definitions
//! - `utils` - Device selection, query rewriting and other pure helpers
//!
//! # Example
//!
//! ```
//! use playdeck::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> playdeck::Res<()> {
//!     config::load_env();
//!     let config = config::Config::from_env()?;
//!     server::start_api_server(config, "127.0.0.1:8888").await
//! }
//! ```

pub mod api;
pub mod config;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used at the edges of the application (startup, server lifecycle) where
/// the concrete error type does not matter to the caller. Handlers use the
/// typed [`api::ApiError`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for startup failures the server cannot recover from. Request
/// failures are reported with [`warning!`] and turned into error responses.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for every failure caught at a handler boundary before it is turned
/// into an error response.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
