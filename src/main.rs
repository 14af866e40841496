use contact_book::prelude::run_app;
use std::process::ExitCode;

// Rejected input exits with 1, a file that cannot be read or written with 3.
// Exit code 2 stays with clap's usage errors.
fn main() -> ExitCode {
    match run_app() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_storage() => {
            eprintln!("Error: {e}");
            ExitCode::from(3)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
