//! `swatch` - color conversion, theme tokens and responsive token cascades

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use swatch_cli::commands::{self, ThemeSource};
use swatch_cli::CatalogKind;
use swatch_color::ColorFormat;
use swatch_theme::ThemePreset;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "swatch")]
#[command(about = "Color conversion, theme tokens and responsive token cascades")]
#[command(version)]
struct Cli {
    /// More logging (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the format of a color string (hex, rgb, hsl, oklch or unknown)
    Detect {
        color: String,
    },

    /// Convert a color string to another format
    Convert {
        color: String,

        /// Target format: hex, rgb, hsl or oklch
        #[arg(long)]
        to: ColorFormat,

        /// Write OKLCH as a bare `L C H` triple
        #[arg(long)]
        bare: bool,
    },

    /// Build a complete light/dark theme
    Theme(ThemeArgs),

    /// Print a responsive token cascade
    Cascade {
        /// Path to swatch.toml (or a directory containing it)
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = CatalogKind::Radius)]
        catalog: CatalogKind,

        /// Print `:root` and `@media` CSS instead of the value table
        #[arg(long)]
        css: bool,
    },
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false, id = "source")]
struct ThemeSourceArgs {
    /// Built-in preset id (neutral, slate, zinc, amber)
    #[arg(long)]
    preset: Option<ThemePreset>,

    /// Theme record JSON with lightModeConfig/darkModeConfig
    #[arg(long)]
    input: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ThemeArgs {
    #[command(flatten)]
    source: ThemeSourceArgs,

    /// Print CSS variables instead of the theme record
    #[arg(long)]
    css: bool,

    /// Write OKLCH as bare `L C H` triples
    #[arg(long)]
    bare: bool,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = match cli.command {
        Commands::Detect { color } => commands::detect(&color),
        Commands::Convert { color, to, bare } => commands::convert(&color, to, bare),
        Commands::Theme(args) => {
            let source = match (args.source.preset, args.source.input.as_deref()) {
                (Some(preset), _) => ThemeSource::Preset(preset),
                (None, Some(path)) => ThemeSource::Record(path),
                (None, None) => anyhow::bail!("either --preset or --input is required"),
            };
            commands::theme(source, args.css, args.bare)?
        }
        Commands::Cascade {
            config,
            catalog,
            css,
        } => {
            let config = commands::load_config(config.as_deref())?;
            commands::cascade(&config, catalog, css)?
        }
    };

    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
