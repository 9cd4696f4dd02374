use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use gradientmap::utils::{batch, export, status};
use gradientmap::{Config, GradientMap, OutputFormat, Source, SvgFilter};
use std::io;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "gradientmap")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Build gradient-map lookup tables and apply them to images", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GradientArgs {
    /// Gradient declaration, e.g. "red, blue 25%, green"
    #[arg(required_unless_present = "preset", conflicts_with = "preset")]
    declaration: Option<String>,

    /// Use a built-in palette instead of a declaration
    #[arg(short, long)]
    preset: Option<String>,

    /// Number of colours sampled from a preset
    #[arg(long, default_value_t = 11)]
    samples: usize,
}

impl GradientArgs {
    fn source(&self) -> Source {
        match (&self.preset, &self.declaration) {
            (Some(name), _) => Source::Preset(name.clone()),
            (None, Some(text)) => Source::Declaration(text.clone()),
            (None, None) => Source::Declaration(String::new()),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved stops and lookup table
    Table {
        #[command(flatten)]
        gradient: GradientArgs,

        /// Output format (summary, json, csv, svg)
        #[arg(short, long, default_value = "summary")]
        format: OutputFormat,

        /// Element id of the generated SVG filter
        #[arg(long, default_value = "gradient-map")]
        filter_id: String,
    },

    /// Apply a gradient map to an image or a directory of images
    Apply {
        /// Use a built-in palette instead of a declaration
        #[arg(short, long)]
        preset: Option<String>,

        /// Number of colours sampled from a preset
        #[arg(long, default_value_t = 11)]
        samples: usize,

        /// [DECLARATION] INPUT OUTPUT, where INPUT is an image or a directory
        #[arg(num_args = 2..=3, required = true, value_name = "ARGS")]
        args: Vec<String>,
    },

    /// List the built-in palettes
    Presets {
        /// Colours shown per palette
        #[arg(long, default_value_t = 24)]
        samples: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Table {
            gradient,
            format,
            filter_id,
        } => {
            let config = Config {
                filter_id,
                preset_samples: gradient.samples,
                output_format: format,
                ..Config::default()
            };
            cmd_table(&gradient.source(), &config)
        }
        Commands::Apply {
            preset,
            samples,
            args,
        } => {
            let config = Config {
                preset_samples: samples,
                ..Config::default()
            };
            let (source, paths) = match (preset, args.as_slice()) {
                (Some(name), [input, output]) => (Source::Preset(name), [input, output]),
                (None, [declaration, input, output]) => {
                    (Source::Declaration(declaration.clone()), [input, output])
                }
                (Some(_), _) => bail!("Expected INPUT OUTPUT after --preset"),
                (None, _) => bail!("Expected DECLARATION INPUT OUTPUT"),
            };
            cmd_apply(
                &source,
                Path::new(paths[0]),
                Path::new(paths[1]),
                &config,
            )
        }
        Commands::Presets { samples } => {
            status::print_palette_list(samples);
            Ok(())
        }
    }
}

fn load_map(source: &Source, config: &Config) -> Result<Option<GradientMap>> {
    let declaration = source
        .declaration(config)
        .context("Failed to read gradient source")?;
    let map = GradientMap::parse(&declaration);
    if map.is_none() {
        warn!("no colour stops could be read from {:?}", declaration);
        eprintln!("⚠️ No colour stops found, nothing to do");
    }
    Ok(map)
}

fn cmd_table(source: &Source, config: &Config) -> Result<()> {
    let Some(map) = load_map(source, config)? else {
        return Ok(());
    };

    match config.output_format {
        OutputFormat::Summary => status::print_gradient_summary(&map),
        OutputFormat::Json => println!("{}", export::to_json(&map)?),
        OutputFormat::Csv => export::write_csv(&map, io::stdout().lock())?,
        OutputFormat::Svg => {
            let mut filter = SvgFilter::new(config.filter_id.clone());
            println!("{}", map.apply_to(&mut filter)?);
        }
    }
    Ok(())
}

fn cmd_apply(source: &Source, input: &Path, output: &Path, config: &Config) -> Result<()> {
    let Some(map) = load_map(source, config)? else {
        return Ok(());
    };

    if input.is_dir() {
        let report = batch::apply_to_dir(&map, input, output, config);
        info!(
            processed = report.processed.len(),
            failed = report.failed.len(),
            bytes = report.total_bytes,
            "batch finished"
        );
        println!(
            "Mapped {} image(s) into {}",
            report.processed.len(),
            output.display()
        );
        if !report.failed.is_empty() {
            println!("\nWarnings:");
            for (path, err) in &report.failed {
                println!("  ⚠️ {}: {}", path.display(), err);
            }
        }
        Ok(())
    } else if input.is_file() {
        batch::apply_to_file(&map, input, output)
            .with_context(|| format!("Failed to map {}", input.display()))?;
        println!("Mapped {} -> {}", input.display(), output.display());
        Ok(())
    } else {
        bail!("Input path does not exist: {}", input.display())
    }
}
