mod args;
mod generator;
mod stream;

use std::{
    fs::File,
    io::{self, BufWriter},
};

use anyhow::Context;
use args::CliArgs;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use stream::write_log_stream;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    anyhow::ensure!(
        (0.0..=1.0).contains(args.spider_rate()),
        "--spider-rate must be between 0 and 1, got {}",
        args.spider_rate()
    );

    let mut rng = match args.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };

    match args.output() {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("could not create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            write_log_stream(&mut out, &mut rng, *args.lines(), *args.start(), *args.spider_rate())?;
            eprintln!("Wrote {} log lines to {}", args.lines(), path.display());
        }
        None => {
            let mut out = BufWriter::new(io::stdout().lock());
            write_log_stream(&mut out, &mut rng, *args.lines(), *args.start(), *args.spider_rate())?;
        }
    }
    Ok(())
}
