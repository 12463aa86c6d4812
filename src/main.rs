use anyhow::{bail, Context, Result};
use neonatal_risk::recommendations::RecommendationGenerator;
use neonatal_risk::scoring::{RandomSource, RiskScorer, SystemRandom};
use neonatal_risk::utils::{
    log_error_banner, log_init, log_scoring, print_disclaimer, print_result,
};
use neonatal_risk::{assess, intake};
use std::io::Read;
use std::{env, fs, process};
use tracing::subscriber::set_global_default;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn print_usage() {
    eprintln!("Usage: neonatal-risk [<path>|-] [--json] [--seed <n>]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <path>       Intake record as JSON (reads stdin when omitted or '-')");
    eprintln!("  --json       Print the result as JSON instead of the report");
    eprintln!("  --seed <n>   Seed the random terms for a reproducible result");
}

struct Args {
    path: Option<String>,
    json: bool,
    seed: Option<u64>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        path: None,
        json: false,
        seed: None,
    };

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => args.json = true,
            "--seed" => {
                let value = iter.next().context("--seed needs a value")?;
                args.seed = Some(
                    value
                        .parse()
                        .with_context(|| format!("invalid seed {value:?}"))?,
                );
            }
            "-h" | "--help" => {
                print_usage();
                process::exit(0);
            }
            "-" => args.path = None,
            other if other.starts_with("--") => bail!("unknown option {other}"),
            other => args.path = Some(other.to_string()),
        }
    }

    Ok(args)
}

fn read_intake(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).with_context(|| format!("reading {path}")),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading intake from stdin")?;
            Ok(text)
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let inputs = intake::collect(&read_intake(args.path.as_deref())?)?;

    let scorer = RiskScorer::default();
    let generator = RecommendationGenerator::from_env();
    let mut rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(SystemRandom::seeded(seed)),
        None => Box::new(SystemRandom::new()),
    };

    if !args.json {
        log_init(generator.model());
        log_scoring();
    }

    let result = assess(&inputs, &scorer, &generator, &mut rng).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
        print_disclaimer();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("neonatal_risk=warn".parse()?))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        );
    set_global_default(subscriber)?;

    let outcome = match parse_args() {
        Ok(args) => run(args).await,
        Err(e) => {
            print_usage();
            Err(e)
        }
    };

    if let Err(e) = outcome {
        log_error_banner(&format!("{e:#}"));
        process::exit(1);
    }

    Ok(())
}
