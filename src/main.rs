use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match prepdrill::cli::run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(prepdrill::errors::get_exit_code(&e))
        }
    }
}
