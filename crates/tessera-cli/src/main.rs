use std::process;

use tessera_cli::args::{parse_args, Command, USAGE};
use tessera_cli::config::{load_config, MapConfig};
use tessera_cli::report;
use tessera_cli::run::run;
use tessera_cli::CliError;

fn execute(args: &[String]) -> Result<(), CliError> {
    let args = match parse_args(args)? {
        Command::Help => {
            eprintln!("{USAGE}");
            return Ok(());
        }
        Command::Generate(args) => args,
    };

    let base = match args.config {
        Some(ref path) => load_config(path)?,
        None => MapConfig::default(),
    };
    let config = args.apply(base);

    let result = run(&config)?;
    println!("{}", report::format_summary(&result));

    if let Some(ref path) = args.report {
        report::save_report(path, &result)?;
        log::info!("Saved report to {}", path.display());
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = execute(&args) {
        log::error!("{e}");
        if matches!(e, CliError::Usage(_)) {
            eprintln!("{USAGE}");
        }
        process::exit(1);
    }
}
