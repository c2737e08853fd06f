//! Avatar CLI Tool
//!
//! Command-line interface for generating avatars from layered part images.

use anyhow::{Context, Result};
use avatar_core::Catalog;
use avatar_generator::GeneratorConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Generate avatars from background, skin, eyes and mouth images.
///
/// Asset files are classified by their first letter: B (background),
/// S (skin), E (eyes) and M (mouth), e.g. BG01.png, SK01.png, EY01.png, MO01.png.
#[derive(Parser)]
#[command(name = "avatar")]
#[command(version, about, long_about)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Directory holding the asset images
    #[arg(long, global = true, default_value_os_t = GeneratorConfig::default().assets_dir)]
    assets: PathBuf,

    /// Output directory for `all`
    #[arg(long, global = true, default_value_os_t = GeneratorConfig::default().all_dir)]
    all_dir: PathBuf,

    /// Output directory for `random`
    #[arg(long, global = true, default_value_os_t = GeneratorConfig::default().random_dir)]
    random_dir: PathBuf,

    /// Edge length of the generated avatars in pixels
    #[arg(long, global = true, default_value_t = GeneratorConfig::default().size)]
    size: u32,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate all possible combinations
    All,

    /// Generate a random avatar named after its SHA-1 hash
    Random,
}

impl Cli {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            assets_dir: self.assets.clone(),
            all_dir: self.all_dir.clone(),
            random_dir: self.random_dir.clone(),
            size: self.size,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to install logger")?;

    let config = cli.config();
    let catalog = Catalog::load(&config.assets_dir)
        .with_context(|| format!("Failed to load assets from {}", config.assets_dir.display()))?;

    match cli.command {
        Commands::All => generate_all(&catalog, &config)?,
        Commands::Random => generate_random(&catalog, &config)?,
    }

    Ok(())
}

fn generate_all(catalog: &Catalog, config: &GeneratorConfig) -> Result<()> {
    println!("Generating all possible combinations...");

    let summary = avatar_generator::generate_all(catalog, config.size, &config.all_dir)
        .context("Failed to generate avatar combinations")?;

    println!(
        "Successfully generated {} avatars in {}",
        summary.written,
        summary.output_dir.display()
    );

    Ok(())
}

fn generate_random(catalog: &Catalog, config: &GeneratorConfig) -> Result<()> {
    println!("Generating random avatar...");

    let avatar = avatar_generator::generate_random(catalog, config.size, &config.random_dir, &mut rand::rng())
        .context("Failed to generate random avatar")?;

    println!("Random avatar created with SHA-1: {}", avatar.hash);
    println!("Saved to {}", avatar.path.display());

    Ok(())
}
