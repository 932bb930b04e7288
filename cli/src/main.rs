use std::io::Write;

use anyhow::Error;

use clap::{ArgAction, Parser, Subcommand};

mod compute;
use compute::Compute;

mod subseq;
use subseq::Subseq;

const NAME: &str = env!("CARGO_BIN_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");
const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");

/// Compute numeric descriptors of protein sequences.
#[derive(Debug, Parser)]
#[clap(name = NAME, author = AUTHOR, version = VERSION, about)]
#[clap(subcommand_required = true)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Suppress warnings.
    ///
    /// By default, only warnings are printed, e.g. about skipped sequences. By setting this flag,
    /// warnings will be disabled.
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbosity.
    ///
    /// Flag can be set multiply times to increase verbosity, or left unset for quiet mode.
    #[clap(short = 'v', long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Print CLI arguments for debugging.
    #[clap(long, hide = true, global = true)]
    debug: bool,
}

impl Cli {
    pub fn run(self) -> Result<(), Error> {
        if self.debug {
            eprintln!("{self:#?}");
        }

        init_logger(self.log_level());

        self.command.run()
    }

    fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Off;
        }

        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

fn init_logger(level: log::LevelFilter) {
    let result = env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            let level = record.level().as_str().to_lowercase();
            let args = record.args();
            writeln!(buf, "[{NAME} {level:>5}] {args}")
        })
        .try_init();

    if let Err(e) = result {
        eprintln!("failed to setup logger: {e}");
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Compute(Compute),
    Subseq(Subseq),
}

impl Command {
    fn run(self) -> Result<(), Error> {
        match self {
            Command::Compute(compute) => compute.run(),
            Command::Subseq(subseq) => subseq.run(),
        }
    }
}

impl TryFrom<Command> for Compute {
    type Error = Command;

    fn try_from(command: Command) -> Result<Self, Self::Error> {
        match command {
            Command::Compute(compute) => Ok(compute),
            command => Err(command),
        }
    }
}

impl TryFrom<Command> for Subseq {
    type Error = Command;

    fn try_from(command: Command) -> Result<Self, Self::Error> {
        match command {
            Command::Subseq(subseq) => Ok(subseq),
            command => Err(command),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.run() {
        Ok(()) => (),
        Err(e) => {
            eprintln!("{e:#}");
            std::process::exit(1);
        }
    }
}
