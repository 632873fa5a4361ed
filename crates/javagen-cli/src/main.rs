//! javagen CLI - Java source generators for builds
//!
//! Commands:
//! - `javagen generate-codes` - Generate constants classes from message catalogs
//! - `javagen generate-media-type` - Generate the MediaType enum from mime.types files
//! - `javagen check` - Validate configuration and catalogs without writing anything
//! - `javagen lookup` - Resolve a URI, extension, or type against the merged media types

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

mod check;
mod generate;
mod logging;
mod lookup;
mod settings;

use settings::Overrides;

#[derive(Parser)]
#[command(name = "javagen")]
#[command(author, version, about = "Generate Java sources from catalogs", long_about = None)]
struct Cli {
    /// Project directory that relative paths resolve against (default: current directory)
    #[arg(short, long, global = true)]
    project_dir: Option<PathBuf>,

    /// Path to javagen.toml (default: <project-dir>/javagen.toml, if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate constants classes from XML message catalogs
    GenerateCodes {
        /// Message catalog to process (repeatable; default: discover *_messages.xml)
        #[arg(short, long = "message-file")]
        message_files: Vec<PathBuf>,

        /// Generated-sources root
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Don't warn about message catalogs that don't exist
        #[arg(long)]
        ignore_missing: bool,

        /// Also write each catalog as a .properties file
        #[arg(long)]
        create_properties_file: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate the MediaType enum from mime.types files
    GenerateMediaType {
        /// Package of the generated enum
        #[arg(long)]
        package: Option<String>,

        /// Generated-sources root
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Replacement for the bundled default mime.types
        #[arg(long)]
        default_media_types: Option<PathBuf>,

        /// Skip /etc/mime.types and ~/.mime.types
        #[arg(long)]
        no_system_media_types: bool,

        /// Extra mime.types file to merge (repeatable)
        #[arg(long = "media-type-file")]
        media_type_files: Vec<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate configuration and catalogs without writing anything
    Check,

    /// Resolve a URI, path, extension, or media type string
    Lookup {
        /// Value to resolve, e.g. `http://example.com/a.svg`, `jpg`, or `image/png`
        value: String,

        /// Prefer media types starting with this prefix, e.g. `image`
        #[arg(long)]
        hint: Option<String>,

        /// Skip /etc/mime.types and ~/.mime.types
        #[arg(long)]
        no_system_media_types: bool,

        /// Print the match as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);

    let project_dir = settings::project_dir(cli.project_dir)?;
    let config_path = cli.config;

    match cli.command {
        Commands::GenerateCodes {
            message_files,
            output,
            ignore_missing,
            create_properties_file,
            json,
        } => {
            let overrides = Overrides {
                message_files,
                generated_sources_directory: output,
                ignore_missing,
                create_properties_file,
                ..Overrides::default()
            };
            let config = settings::load(&project_dir, config_path.as_deref(), overrides)?;
            generate::codes(&config, json)?;
        }
        Commands::GenerateMediaType {
            package,
            output,
            default_media_types,
            no_system_media_types,
            media_type_files,
            json,
        } => {
            let overrides = Overrides {
                generated_sources_directory: output,
                media_type_package: package,
                default_media_types,
                no_system_media_types,
                media_type_files,
                ..Overrides::default()
            };
            let config = settings::load(&project_dir, config_path.as_deref(), overrides)?;
            generate::media_types(&config, json)?;
        }
        Commands::Check => {
            let config = settings::load(&project_dir, config_path.as_deref(), Overrides::default())?;
            check::run(&config)?;
        }
        Commands::Lookup {
            value,
            hint,
            no_system_media_types,
            json,
        } => {
            let overrides = Overrides {
                no_system_media_types,
                ..Overrides::default()
            };
            let config = settings::load(&project_dir, config_path.as_deref(), overrides)?;
            lookup::run(&config, &value, hint.as_deref(), json)?;
        }
    }

    Ok(())
}
