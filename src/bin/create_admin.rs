use std::process::ExitCode;

use pos_bootstrap::{
    auth::admin::SeedOutcome, bootstrap::run_create_admin, config::Config, errors::AppError,
    logging,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => return report_error(e),
    };
    match run_create_admin(&config).await {
        Ok((_, SeedOutcome::Created(_))) => {
            println!("Admin user created: {}", config.admin.email);
            ExitCode::SUCCESS
        }
        Ok((_, SeedOutcome::AlreadyExists)) => {
            println!("Admin already exists: {}", config.admin.email);
            ExitCode::SUCCESS
        }
        Err(e) => report_error(e),
    }
}

fn report_error(e: AppError) -> ExitCode {
    eprintln!("error [{}]: {}", e.code(), e);
    ExitCode::FAILURE
}
