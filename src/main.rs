use dist_server::{config::Config, error::StartupError, shutdown::Shutdown, startup::Startup};
use std::process::ExitCode;

fn main() -> ExitCode {
    let shutdown = Shutdown::on_ctrl_c().unwrap_or_else(|error| {
        println!("{error:#}");
        Shutdown::new()
    });

    if let Err(error) = Startup::new(Config::get()).run(&shutdown) {
        // The missing directory has already been explained to the operator.
        if !matches!(
            error.downcast_ref::<StartupError>(),
            Some(StartupError::MissingRootDirectory(_))
        ) {
            println!("Error: {error:#}");
        }

        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
