mod config;
mod input;

use anyhow::Context;
use serde::Serialize;
use std::io::{Read, Write};
use std::time::Instant;
use tracing::{debug, info};

use config::Config;

#[derive(Debug, Serialize)]
struct Stats {
    program: &'static str,
    n: i64,
    result: i64,
    compute_secs: f32,
}

fn run(mut stdin: impl Read, mut stdout: impl Write, config: &Config) -> anyhow::Result<Stats> {
    let mut buf = String::new();
    stdin
        .read_to_string(&mut buf)
        .context("failed to read stdin")?;

    let n = input::parse_n(&buf, config.default_n)?;
    debug!(n, default = config.default_n, "parsed input");

    let it = Instant::now();
    let result = triangular::sum_to_n(n)?;
    let compute_secs = it.elapsed().as_secs_f32();
    info!(n, result, "sum(1..={n}) = {result}");

    writeln!(stdout, "{result}").context("failed to write result")?;
    stdout.flush().context("failed to write result")?;

    Ok(Stats {
        program: "sum-to-n",
        n,
        result,
        compute_secs,
    })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    debug!(?config, "loaded config");

    let stats = run(std::io::stdin().lock(), std::io::stdout().lock(), &config)?;
    if config.stats {
        eprintln!("{}", serde_json::to_string(&stats)?);
    }
    Ok(())
}
