use std::process::ExitCode;

use pos_bootstrap::{bootstrap::run_bootstrap_db, config::Config, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init();
    let result = match Config::from_env() {
        Ok(config) => run_bootstrap_db(&config).await,
        Err(e) => Err(e),
    };
    match result {
        Ok(report) => {
            if !report.created.is_empty() {
                println!("Created tables: {}", report.created.join(", "));
            }
            if !report.existing.is_empty() {
                println!("Tables already present: {}", report.existing.join(", "));
            }
            println!("Schema is up to date");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error [{}]: {}", e.code(), e);
            ExitCode::FAILURE
        }
    }
}
