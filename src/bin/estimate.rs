use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

use causal_ate::core::Sample;
use causal_ate::estimators::Method;
use causal_ate::streams::CsvObservationStream;
use causal_ate::ui::cli::drivers::InquireDriver;
use causal_ate::ui::cli::wizard::prompt_method;
use causal_ate::utils::csv_output::format_result_line;

#[derive(Parser, Debug)]
#[clap(
    name = "estimate",
    version,
    about = "Estimate the average treatment effect of z on y from an x,y,z CSV sample."
)]
struct Args {
    /// naive | regression | propensity | doubly_robust | propensity_wrong | doubly_robust_wrong.
    /// Prompts for one when omitted.
    #[clap(long)]
    method: Option<String>,

    /// CSV file with one header line followed by x,y,z records. Defaults to stdin.
    #[clap(long)]
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let method = match args.method.as_deref() {
        Some(token) => Method::parse(token)?,
        None => prompt_method(&InquireDriver)?,
    };

    let mut stream = match &args.input {
        Some(path) => CsvObservationStream::from_path(path)
            .with_context(|| format!("cannot open {}", path.display()))?,
        None => CsvObservationStream::from_reader(io::stdin()),
    };
    let sample = Sample::from_stream(&mut stream).context("failed to read the sample")?;
    log::info!("loaded {} observations", sample.len());

    let result = method
        .build()
        .estimate(&sample)
        .with_context(|| format!("{method} estimation failed"))?;
    log::info!("{method}: {result}");

    println!("{}", format_result_line(method, &result));
    Ok(())
}
