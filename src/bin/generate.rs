use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

use causal_ate::streams::SyntheticGenerator;
use causal_ate::ui::cli::drivers::InquireDriver;
use causal_ate::ui::cli::wizard::prompt_parameters;
use causal_ate::ui::types::choices::{GeneratorParameters, schema_for};
use causal_ate::utils::csv_output::write_sample;

#[derive(Parser, Debug)]
#[clap(
    name = "generate",
    version,
    about = "Write an x,y,z CSV sample drawn from a known treatment-effect process.",
    allow_negative_numbers = true
)]
struct Args {
    /// JSON file with generator parameters. Flags override its values.
    #[clap(long)]
    config: Option<PathBuf>,

    /// Ask for every parameter interactively instead of reading --config.
    #[clap(long)]
    interactive: bool,

    /// Print the JSON schema of the parameter file and exit.
    #[clap(long)]
    print_schema: bool,

    #[clap(long)]
    x_mu: Option<f64>,
    #[clap(long)]
    x_sigma: Option<f64>,
    #[clap(long)]
    theta: Option<f64>,
    #[clap(long)]
    alpha_zero: Option<f64>,
    #[clap(long)]
    beta_zero: Option<f64>,
    #[clap(long)]
    epsilon_zero: Option<f64>,
    #[clap(long)]
    alpha_one: Option<f64>,
    #[clap(long)]
    beta_one: Option<f64>,
    #[clap(long)]
    epsilon_one: Option<f64>,
    #[clap(long)]
    data_num: Option<u64>,
    #[clap(long)]
    seed: Option<u64>,
}

impl Args {
    fn apply_overrides(&self, p: &mut GeneratorParameters) {
        let floats = [
            (self.x_mu, &mut p.x_mu),
            (self.x_sigma, &mut p.x_sigma),
            (self.theta, &mut p.theta),
            (self.alpha_zero, &mut p.alpha_zero),
            (self.beta_zero, &mut p.beta_zero),
            (self.epsilon_zero, &mut p.epsilon_zero),
            (self.alpha_one, &mut p.alpha_one),
            (self.beta_one, &mut p.beta_one),
            (self.epsilon_one, &mut p.epsilon_one),
        ];
        for (flag, field) in floats {
            if let Some(v) = flag {
                *field = v;
            }
        }
        if let Some(n) = self.data_num {
            p.data_num = n;
        }
        if let Some(seed) = self.seed {
            p.seed = seed;
        }
    }

    fn parameters(&self) -> Result<GeneratorParameters> {
        let mut parameters = if self.interactive {
            prompt_parameters::<GeneratorParameters, _>(&InquireDriver)?
        } else if let Some(path) = &self.config {
            GeneratorParameters::from_json_file(path)
                .with_context(|| format!("cannot load {}", path.display()))?
        } else {
            GeneratorParameters::default()
        };
        self.apply_overrides(&mut parameters);
        Ok(parameters)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.print_schema {
        let schema = schema_for::<GeneratorParameters>();
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    let parameters = args.parameters()?;
    log::info!("{}", serde_json::to_string(&parameters)?);
    log::info!("true effect at x_mu: {}", parameters.true_effect());

    let mut generator = SyntheticGenerator::try_from(parameters)?;
    let stdout = io::stdout();
    let written = write_sample(BufWriter::new(stdout.lock()), &mut generator)?;
    log::debug!("wrote {written} observations");
    Ok(())
}
