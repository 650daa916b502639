//! cmsconf CLI Library
//!
//! Serves the Decap CMS admin configuration for the site and exposes the
//! pieces the binary is built from.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (serve, render)
//! - [`schema`] - The site's collections and fields
//! - [`server`] - HTTP router serving `/admin/config.yml`
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use cmsconf::cmd;
//!
//! // Print the admin configuration to stdout
//! cmd::render::run(Path::new("cmsconf.toml"), None).unwrap();
//! ```

pub mod cmd;
pub mod schema;
pub mod server;

// Re-export core types for convenience
pub use cmsconf_core::{CmsConfig, Settings};

/// Initialize tracing for the CLI and the HTTP server.
///
/// `verbose` sets the level for the cmsconf crates and request traces
/// (0 = warn, 1 = info, 2 = debug, 3+ = trace); other crates stay at warn.
/// A `RUST_LOG` filter replaces this default entirely.
///
/// ```no_run
/// cmsconf::init_tracing(1);
/// ```
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(verbose > 1))
        .with(filter)
        .init();
}

/// Filter directives used when `RUST_LOG` is unset.
fn default_filter(verbose: u8) -> String {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("warn,cmsconf={level},cmsconf_core={level},tower_http={level}")
}
