use anyhow::{ensure, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use crate::expression::{ln, pow, Bindings, Expression};
use crate::random::{RandomVariable, Uniform};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Symdiff - Build, evaluate, and differentiate symbolic expressions
#[derive(Parser, Debug)]
#[command(name = "symdiff")]
#[command(about = "Demonstrate symbolic expression evaluation and differentiation")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Differentiate the showcase expression x^2 + ln(x) and evaluate
    /// both it and its derivative at a point
    Diff {
        /// Point at which to evaluate
        #[arg(short, long, default_value_t = 2.0)]
        at: f64,
    },
    /// Sample a uniform random variable over [a, b]
    Uniform {
        /// Lower bound of the interval
        a: f64,

        /// Upper bound of the interval
        b: f64,

        /// Number of samples to draw
        #[arg(short, long, default_value_t = 5)]
        samples: usize,
    },
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(&args.log_level)?;

    match args.command {
        Command::Diff { at } => run_diff(at),
        Command::Uniform { a, b, samples } => run_uniform(a, b, samples),
    }
}

fn run_diff(at: f64) -> Result<()> {
    let f = pow(Expression::variable("x"), 2.0) + ln(Expression::variable("x"));

    info!("differentiating {} with respect to x", f);
    let derivative = f.diff("x")?;

    let mut bindings = Bindings::new();
    bindings.insert("x".to_string(), at);
    let value = f.eval(&bindings)?;
    let slope = derivative.eval(&bindings)?;

    println!("f(x)   = {}", f);
    println!("f'(x)  = {}", derivative);
    println!("f({})   = {}", at, value);
    println!("f'({})  = {}", at, slope);
    Ok(())
}

fn run_uniform(a: f64, b: f64, samples: usize) -> Result<()> {
    ensure!(a < b, "lower bound must be less than upper bound");

    let x = Uniform::new("x", a, b);

    info!("sampling uniform variable over [{}, {}]", a, b);

    println!("density     = {}", x.density());
    println!("expectation = {}", x.expect());
    for _ in 0..samples {
        println!("sample      = {}", x.sample());
    }
    Ok(())
}
