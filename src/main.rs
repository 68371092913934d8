use std::io::{IsTerminal, Write};

use clap::Parser;
use env_logger::{Builder, Env, Target};
use log::{error, info, LevelFilter};

mod battery;
mod equality;
mod reporter;

#[cfg(test)]
mod tests;

use reporter::Reporter;

#[derive(Parser, Debug)]
#[command(name = "realtype")]
#[command(about = "Runs the type classifier assertion battery", long_about = None)]
struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbosity: u8,

    /// Only report failures
    #[arg(short, long, conflicts_with = "verbosity")]
    quiet: bool,

    /// Disable colors in diagnostics
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbosity {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn init_logging(level: LevelFilter) {
    Builder::from_env(Env::default().default_filter_or(level.to_string()))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .target(Target::Stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.level());

    let color = !cli.no_color && std::io::stderr().is_terminal();
    let mut reporter = Reporter::new(color);
    battery::run(&mut reporter);

    let summary = reporter.finish();
    if summary.all_passed() {
        info!("{} checks passed", summary.passed);
    } else {
        error!("{} of {} checks failed:", summary.failed, summary.total());
        for failure in &summary.failures {
            error!("  {}", failure);
        }
    }
}
