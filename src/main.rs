use clap::{Parser, Subcommand};
use log::debug;
use std::process;
use tallyfrac::config::Config;
use tallyfrac::math::equation::Equation;
use tallyfrac::math::value::Value;
use tallyfrac::{compute_e, compute_pi, Bag, Rational};

#[derive(Parser)]
#[command(version, about = "Exact fractions and counted bags")]
pub struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate `value`, or `value <op> value` with one of + - * / ** == != < <= > >=
    Eval {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        expression: Vec<String>,
        /// Fractional digits shown for a rational result
        #[arg(short, long)]
        digits: Option<usize>,
    },
    /// Approximate e with a truncated Taylor series
    E {
        #[arg(short, long)]
        terms: Option<u32>,
        #[arg(short, long)]
        digits: Option<usize>,
    },
    /// Approximate pi with Newton's arcsine series
    Pi {
        #[arg(short, long)]
        terms: Option<u32>,
        #[arg(short, long)]
        digits: Option<usize>,
    },
    /// Count the given values
    Bag { values: Vec<String> },
}

fn print_rational(r: &Rational, digits: usize) {
    println!("{r}");
    println!("{r:?}");
    println!("{}", r.decimal(digits));
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let config = Config::load();
    debug!("config: {config:?}");

    match args.command {
        Command::Eval { expression, digits } => {
            let text = expression.join(" ");
            let result = Equation::parse(&text).and_then(|eq| {
                debug!("eval: {}", eq.display());
                eq.eval()
            });
            match result {
                Ok(Value::Rational(r)) => print_rational(&r, digits.unwrap_or(config.max_fractional_places)),
                Ok(Value::Bag(b)) => {
                    println!("{b}");
                    println!("{b:?}");
                }
                Ok(value) => println!("{value}"),
                Err(e) => {
                    eprintln!("error: {e}");
                    process::exit(1);
                }
            }
        }
        Command::E { terms, digits } => {
            let r = compute_e(terms.unwrap_or(config.series_terms));
            print_rational(&r, digits.unwrap_or(config.max_fractional_places));
        }
        Command::Pi { terms, digits } => {
            let r = compute_pi(terms.unwrap_or(config.series_terms));
            print_rational(&r, digits.unwrap_or(config.max_fractional_places));
        }
        Command::Bag { values } => {
            let bag: Bag<String> = values.into_iter().collect();
            println!("{bag:?}");
            println!("{bag}");
            println!("size: {}", bag.len());
            println!("unique: {}", bag.unique());
        }
    }
}
