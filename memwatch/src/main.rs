use std::{io, process};

use clap::{ArgAction, Parser};

use memwatch::{config::PollOptions, logging, poll};

#[derive(Parser, Debug)]
#[command(
    name = "memwatch",
    version,
    about = "Poll /proc/meminfo periodically for data",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Human readable format
    #[arg(short = 'h', long = "human", action = ArgAction::SetTrue)]
    human: bool,

    /// Seconds between polls
    #[arg(short = 'i', long = "interval", value_name = "SECONDS", default_value_t = 5)]
    interval: u64,

    /// Times to poll
    #[arg(short = 'p', long = "polls", value_name = "NPOLLS", default_value_t = 5)]
    polls: u64,

    /// Poll swap information as well
    #[arg(short = 's', long = "swap", action = ArgAction::SetTrue)]
    swap: bool,

    /// Print usage message
    #[arg(short = 'u', long = "usage", action = ArgAction::Help)]
    usage: Option<bool>,

    /// Print version and exit
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // usage and version requests exit 0; bad flags and non-numeric
        // values print the diagnostic plus usage and exit 1
        Err(err) => {
            let _ = err.print();
            process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };
    logging::init_tracing();

    let opts = PollOptions {
        polls: cli.polls,
        interval_secs: cli.interval,
        human: cli.human,
        include_swap: cli.swap,
    };
    let stdout = io::stdout();
    if let Err(err) = poll::run(&opts, &mut stdout.lock()) {
        eprintln!("{err}");
        process::exit(1);
    }
}
