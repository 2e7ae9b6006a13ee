//! Quick command - random model in the quick-generate ranges

use anyhow::Result;
use clap::Args;
use lowpoly_core::{default_model_name, GenerationRequest, GeneratorConfig, Strictness};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use std::path::PathBuf;
use tracing::info;

use crate::job::{self, Job};
use crate::manifest::default_formats;

/// Arguments for the quick command
#[derive(Args, Debug)]
pub struct QuickArgs {
    /// Seed picking model, parameters and name (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

/// Pick the model, parameters and package name for `seed`
pub fn plan(seed: u64) -> Job {
    let mut rng = Pcg64::seed_from_u64(seed);
    let request = GenerationRequest::random(&mut rng);
    Job {
        request,
        name: default_model_name(&mut rng),
        formats: default_formats(),
    }
}

/// Execute the quick command
pub fn execute(args: QuickArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let job = plan(seed);
    info!(
        seed,
        model = %job.request.model,
        size = job.request.size,
        detail = job.request.detail,
        "quick generate"
    );

    let path = job::run(&job, Strictness::Strict, &GeneratorConfig::default(), &args.output)?;
    println!("{}", path.display());
    Ok(())
}
