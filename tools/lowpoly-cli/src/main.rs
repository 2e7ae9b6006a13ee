//! lowpoly - procedural low-poly model generator
//!
//! # Commands
//!
//! - `lowpoly generate` - Generate one model and write its ZIP package
//! - `lowpoly quick` - Generate a random model with default formats
//! - `lowpoly inspect` - Print mesh statistics without exporting
//! - `lowpoly build` - Run every model listed in a lowpoly.toml manifest
//!
//! # Usage
//!
//! ```bash
//! # Rock with a fixed seed, exported as GLB + STL into ./out
//! lowpoly generate --model rock --detail 0.7 --seed 42 -f glb -f stl -o out
//!
//! # Surprise me
//! lowpoly quick
//!
//! # Batch job
//! lowpoly build lowpoly.toml
//! ```
//!
//! # Manifest (lowpoly.toml)
//!
//! ```toml
//! [output]
//! dir = "packages"
//! formats = ["glb", "obj"]
//! strict = true
//!
//! # Optional: tessellation overrides
//! [tessellation]
//! rock_subdivisions = 2
//!
//! [[model]]
//! model = "tree"
//! name = "pine"
//!
//! [[model]]
//! model = "rock"
//! detail = 0.8
//! seed = 7
//! formats = ["stl"]
//! ```
//!
//! Set `RUST_LOG=debug` for per-part construction logs.

mod build;
mod generate;
mod inspect;
mod job;
mod manifest;
mod quick;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Procedural low-poly model generator
#[derive(Parser)]
#[command(name = "lowpoly")]
#[command(about = "Generate low-poly 3D models and package them for download")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one model and write `{name}_package.zip`
    Generate(generate::GenerateArgs),

    /// Generate a random model with the default formats
    Quick(quick::QuickArgs),

    /// Print polygon and vertex counts and bounds without exporting
    Inspect(inspect::InspectArgs),

    /// Run every model in a lowpoly.toml manifest
    Build(build::BuildArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => generate::execute(args),
        Commands::Quick(args) => quick::execute(args),
        Commands::Inspect(args) => inspect::execute(args),
        Commands::Build(args) => build::execute(args),
    }
}
