use regression_runner::cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Parse command line arguments and run the selected command
    match cli::run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            // `{:#}` keeps the whole context chain on one line, so a plan
            // error still shows which test element it came from.
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
