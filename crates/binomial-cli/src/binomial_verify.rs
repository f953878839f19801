//! Strategy verification CLI
//!
//! Usage: binomial_verify [n_max] [options]
//!
//! Options:
//!   --skip-recursive  Leave out the exponential-time recursive strategy
//!   --help, -h        Show help
//!
//! Example: binomial_verify 34 --skip-recursive

use binomial_table::StrategyKind;
use binomial_table::app::verify::verify_strategies;
use binomial_table::constants::MAX_N;
use std::env;
use std::time::Instant;

/// Disagreements printed before the list is cut short
const MAX_REPORTED: usize = 20;

struct Args {
    n_max: u32,
    skip_recursive: bool,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [n_max] [options]", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [n_max]           Largest n to check (default: {})", MAX_N);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --skip-recursive  Leave out the exponential-time recursive strategy");
    eprintln!("  --help, -h        Show this help message");
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();

    let mut n_max: Option<u32> = None;
    let mut skip_recursive = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--skip-recursive" => skip_recursive = true,
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                if n_max.is_some() {
                    return Err(format!("Unexpected argument: {}", arg));
                }
                n_max = Some(
                    arg.parse()
                        .map_err(|_| format!("Invalid n_max value: {}", arg))?,
                );
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    Ok(Args {
        n_max: n_max.unwrap_or(MAX_N),
        skip_recursive,
    })
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&env::args().next().unwrap_or_default());
            std::process::exit(1);
        }
    };

    let kinds: Vec<StrategyKind> = StrategyKind::ALL
        .into_iter()
        .filter(|kind| !(args.skip_recursive && *kind == StrategyKind::Recursive))
        .collect();

    let names: Vec<&str> = kinds.iter().map(|kind| kind.name()).collect();
    println!("Verifying {:?} up to n = {}...", names, args.n_max);

    let start = Instant::now();
    let report = match verify_strategies(args.n_max, &kinds) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    println!(
        "Checked {} evaluations in {:.2} seconds",
        report.checked,
        elapsed.as_secs_f64()
    );

    if report.is_ok() {
        println!("All strategies agree with Pascal's triangle.");
        return;
    }

    eprintln!("Found {} disagreements:", report.disagreements.len());
    for d in report.disagreements.iter().take(MAX_REPORTED) {
        eprintln!(
            "  {}: C({}, {}) = {}, expected {}",
            d.strategy, d.n, d.k, d.found, d.expected
        );
    }
    if report.disagreements.len() > MAX_REPORTED {
        eprintln!("  ... {} more", report.disagreements.len() - MAX_REPORTED);
    }
    std::process::exit(1);
}
