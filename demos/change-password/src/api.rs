//! Simulated password backend
//!
//! Stands in for a real credential service: a fixed stored passphrase and
//! some artificial latency, so the submitting state is visible in the UI.

use std::time::Duration;

use tui_form::{FieldValues, SubmitError, SubmitResult};

use crate::schema::CURRENT;

/// The passphrase the fake backend accepts as the current one.
pub const STORED_PASSPHRASE: &str = "hunter2";

/// Round-trip latency of the fake backend.
const LATENCY: Duration = Duration::from_millis(800);

/// Verify the current passphrase and "store" the new one.
pub async fn change_password(values: FieldValues) -> SubmitResult {
    tokio::time::sleep(LATENCY).await;

    let current = values.get(CURRENT).map(String::as_str).unwrap_or("");
    if current != STORED_PASSPHRASE {
        return Err(SubmitError::new("Current password is incorrect"));
    }
    Ok(())
}
