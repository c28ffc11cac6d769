//! Datacleaner CLI
//!
//! ```bash
//! datacleaner                        # Clean the four exports into dataCleaned.json
//! datacleaner serve                  # Serve dataCleaned.json (port 3000)
//! datacleaner inspect Produits.csv   # Show the raw rows a reader produces
//! ```

use clap::{Parser, Subcommand};
use datacleaner::config::{DEFAULT_PORT, OUTPUT_FILE};
use datacleaner::logs::log_error;
use datacleaner::{clean_data, Config, Source, SourceFormat};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "datacleaner")]
#[command(about = "Clean client, product and service exports into dataCleaned.json", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean the exports of the current directory (default)
    Clean,

    /// Serve a cleaned document over HTTP
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Cleaned document to serve
        #[arg(short, long, default_value = OUTPUT_FILE)]
        data: PathBuf,
    },

    /// Print the raw rows read from one source file as JSON
    Inspect {
        /// Input file
        input: PathBuf,

        /// Reader to use (guessed from the extension if not specified)
        #[arg(short, long, value_enum)]
        format: Option<SourceFormat>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Clean) {
        Commands::Clean => cmd_clean().await,

        Commands::Serve { port, data } => cmd_serve(port, &data).await,

        Commands::Inspect { input, format } => cmd_inspect(&input, format).await,
    };

    if let Err(e) = result {
        log_error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

async fn cmd_clean() -> Result<(), Box<dyn std::error::Error>> {
    clean_data(&Config::default()).await?;
    Ok(())
}

async fn cmd_serve(port: u16, data: &Path) -> Result<(), Box<dyn std::error::Error>> {
    datacleaner::server::start_server(port, data).await?;
    Ok(())
}

async fn cmd_inspect(
    input: &Path,
    format: Option<SourceFormat>,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = format.unwrap_or_else(|| SourceFormat::from_extension(input));
    let source = Source {
        path: input.to_path_buf(),
        format,
    };

    let rows = source.read().await?;
    eprintln!("📄 {} rows read from {}", rows.len(), input.display());
    println!("{}", serde_json::to_string_pretty(&rows)?);

    Ok(())
}
