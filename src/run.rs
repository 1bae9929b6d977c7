//! Application execution logic.
//!
//! Sends the validated message once, or prints it in dry-run mode.

use http::StatusCode;
use thiserror::Error;

use webhook_builder::Message;
use webhook_builder::config::ValidatedConfig;
use webhook_builder::webhook::{HttpError, HttpWebhook, ReqwestClient, SendError, WebhookSender};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The HTTP client could not be created.
    #[error("Failed to create HTTP client: {0}")]
    ClientCreation(#[source] HttpError),

    /// No webhook URL was configured.
    #[error("No webhook URL configured")]
    MissingUrl,

    /// The message could not be serialized or delivered.
    #[error("Failed to send webhook: {0}")]
    Send(#[from] SendError),

    /// The endpoint answered with a non-success status.
    #[error("Webhook endpoint responded with {0}")]
    Rejected(StatusCode),
}

/// Executes the application.
///
/// In dry-run mode the serialized document is printed to stdout. Otherwise
/// the message is posted once to the configured URL.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be created
/// - The request fails at the network level
/// - The endpoint answers with a non-success status
///
/// # Coverage Note
///
/// This function is excluded from coverage because it performs real
/// network I/O.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    if config.dry_run {
        tracing::info!("Dry-run mode enabled - the message will be printed, not sent");
        println!("{}", render(&config.message)?);
        return Ok(());
    }

    let webhook = create_webhook(&config)?;
    tracing::info!(host = webhook.url().host_str().unwrap_or(""), "Sending webhook message");

    deliver(&webhook, &config.message).await?;
    Ok(())
}

/// Serializes the message for dry-run output.
fn render(message: &Message) -> Result<String, RunError> {
    message
        .serialize()
        .map_err(|e| RunError::Send(SendError::Validation(e)))
}

/// Creates the HTTP webhook sender from configuration.
fn create_webhook(config: &ValidatedConfig) -> Result<HttpWebhook<ReqwestClient>, RunError> {
    let url = config.url.clone().ok_or(RunError::MissingUrl)?;

    let client = match config.timeout {
        Some(timeout) => ReqwestClient::with_timeout(timeout).map_err(RunError::ClientCreation)?,
        None => ReqwestClient::new(),
    };

    Ok(HttpWebhook::new(client, url)
        .with_user_agent(config.user_agent.clone())
        .with_headers(config.headers.clone()))
}

/// Sends `message` once and maps a non-success status to an error.
async fn deliver<W: WebhookSender>(webhook: &W, message: &Message) -> Result<StatusCode, RunError> {
    let status = webhook.send(message).await?;

    if status.is_success() {
        Ok(status)
    } else {
        Err(RunError::Rejected(status))
    }
}
