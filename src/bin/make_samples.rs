use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use strum::IntoEnumIterator;

use exovision::config::{FIXTURES, SAMPLES, sample_filename};
use exovision::data::{SampleKind, generate_sample, write_light_curve};

/// Writes every synthetic sample curve as a time,flux file.
#[derive(Parser, Debug)]
#[command(about)]
struct Args {
    /// Output directory
    #[arg(long, default_value = FIXTURES.directory)]
    out: PathBuf,

    #[arg(long, default_value_t = SAMPLES.default_seed)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("Writing {} sample curves to {}", SampleKind::iter().count(), args.out.display());

    for kind in SampleKind::iter() {
        let series = generate_sample(kind, args.seed);
        let path = args.out.join(sample_filename(kind, args.seed));
        write_light_curve(&path, &series)?;
        log::info!("   {} ({} samples)", path.display(), series.len());
    }

    Ok(())
}
