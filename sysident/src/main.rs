use std::{io, process};

use sysident::{collectors, logging};

fn main() {
    logging::init_tracing();
    let stdout = io::stdout();
    if let Err(err) = collectors::run_report(&mut stdout.lock()) {
        eprintln!("{err}");
        process::exit(err.exit_code());
    }
}
