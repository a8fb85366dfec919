use std::env;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use passform::{cli, exits, terminal, tui};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();
    init_tracing();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => {
            if let Err(e) = tui::run() {
                terminal::reset_terminal();
                eprintln!("{}{}{}", terminal::RED, e, terminal::RESET);
                std::process::exit(e.exit_code());
            }
        }
        _ => cli::run(args),
    }
}
