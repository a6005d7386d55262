use tracing::{info, warn};

/// Plain comparison against the configured admin password.
pub fn verify_admin(expected: &str, password: &str) -> bool {
    let valid = !password.is_empty() && password == expected;

    if valid {
        info!("admin login accepted");
    } else {
        warn!("admin login rejected");
    }

    valid
}
