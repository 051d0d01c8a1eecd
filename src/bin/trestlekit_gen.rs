use clap::Parser;
use trestlekit::cli::{run, Cli};
use trestlekit::logging::{init_logging, LogConfig};

fn main() {
    let cli = Cli::parse();

    let mut log_config = LogConfig::from_env();
    if cli.verbose {
        log_config = log_config.verbose();
    }
    if let Err(err) = init_logging(&log_config) {
        eprintln!("warning: {err:#}");
    }

    if let Err(err) = run(&cli, &mut std::io::stdout().lock()) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
