//! rVolunteer main entrypoint.

use rvolunteer::run;

fn main() {
    if let Err(e) = run() {
        if !e.is_client_error() {
            tracing::error!(error = %e, "command failed");
        }
        eprintln!("Error: {}", e.user_message());
        std::process::exit(1);
    }
}
