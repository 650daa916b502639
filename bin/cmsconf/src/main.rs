//! cmsconf CLI
//!
//! Serves the Decap CMS admin configuration document.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for cmsconf.
#[derive(Parser)]
#[command(
    name = "cmsconf",
    version,
    about = "Serves the Decap CMS admin configuration"
)]
struct Cli {
    /// Path to settings file (optional; defaults apply when missing)
    #[arg(short, long, default_value = "cmsconf.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Serve the admin configuration over HTTP
    Serve {
        /// Interface to bind (overrides settings)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (overrides settings)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print the admin configuration, or write it to a file
    Render {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    cmsconf::init_tracing(cli.verbose);

    match cli.command {
        Commands::Serve { host, port } => {
            cmsconf::cmd::serve::run(&cli.config, host.as_deref(), port).await?;
        }
        Commands::Render { output } => {
            cmsconf::cmd::render::run(&cli.config, output.as_deref())?;
        }
    }

    Ok(())
}
