use mpesa_client::install::{InstallArgs, InstallOutcome, publish_env_template};
use mpesa_client::utils::setup_logger;
use std::io::{self, BufRead, Write};
use tracing::{error, info};

fn ask(question: &str) -> bool {
    print!("{question} [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}

fn main() {
    setup_logger();

    let args = match InstallArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            error!("{}", e);
            error!("usage: mpesa-install [path] [--force]");
            std::process::exit(1);
        }
    };

    info!("Installing M-Pesa client configuration");
    match publish_env_template(&args.target, args.force, ask) {
        Ok(InstallOutcome::Created) | Ok(InstallOutcome::Overwritten) => {
            info!("Installed M-Pesa configuration at {}", args.target.display())
        }
        Ok(InstallOutcome::Skipped) => info!("Exiting. Configuration was not overwritten"),
        Err(e) => {
            error!("Failed to install configuration: {}", e);
            std::process::exit(1);
        }
    }
}
