//! The order mailer collaborator.
//!
//! Submitting an order dispatches a best-effort notification email to the
//! back office. The production implementation posts to the EmailJS REST
//! API; tests substitute their own [`OrderMailer`].

use crate::order::OrderNotification;
use serde::Serialize;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Back-office mailbox every order notification goes to.
pub const ORDER_RECIPIENT: &str = "order@yoload.asia";

/// EmailJS send endpoint.
pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Errors from dispatching an order notification.
///
/// These never fail an order; the workflow converts them into
/// [`EmailStatus::Error`](crate::order::EmailStatus::Error).
#[derive(Error, Debug)]
pub enum MailerError {
    /// The HTTP request itself failed (connect, timeout, TLS)
    #[error("email request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The email service rejected the request
    #[error("email service returned status {0}")]
    Rejected(reqwest::StatusCode),
}

/// Dispatches order notifications.
///
/// Returns a boxed future so the trait stays dyn-compatible and the
/// reducer environment can hold any implementation behind an `Arc`.
pub trait OrderMailer: Send + Sync {
    /// Send the notification to the given mailbox.
    fn send<'a>(
        &'a self,
        recipient: &'a str,
        notification: &'a OrderNotification,
    ) -> Pin<Box<dyn Future<Output = Result<(), MailerError>> + Send + 'a>>;
}

/// Errors loading the EmailJS credentials.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is unset or empty
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
}

/// EmailJS credentials.
#[derive(Debug, Clone)]
pub struct EmailJsConfig {
    /// EmailJS service id
    pub service_id: String,
    /// EmailJS template id
    pub template_id: String,
    /// EmailJS public key (their "user id")
    pub public_key: String,
}

impl EmailJsConfig {
    /// Load credentials from `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID`,
    /// and `EMAILJS_PUBLIC_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] when any variable is unset or
    /// empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            service_id: required_var("EMAILJS_SERVICE_ID")?,
            template_id: required_var("EMAILJS_TEMPLATE_ID")?,
            public_key: required_var("EMAILJS_PUBLIC_KEY")?,
        })
    }
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

#[derive(Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    to_email: &'a str,
    #[serde(flatten)]
    notification: &'a OrderNotification,
}

/// Production mailer: POSTs the notification to the EmailJS REST API.
#[derive(Debug, Clone)]
pub struct EmailJsMailer {
    client: reqwest::Client,
    config: EmailJsConfig,
}

impl EmailJsMailer {
    /// Build a mailer from loaded credentials.
    #[must_use]
    pub fn new(config: EmailJsConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Build a mailer from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when credentials are missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(EmailJsConfig::from_env()?))
    }
}

impl OrderMailer for EmailJsMailer {
    fn send<'a>(
        &'a self,
        recipient: &'a str,
        notification: &'a OrderNotification,
    ) -> Pin<Box<dyn Future<Output = Result<(), MailerError>> + Send + 'a>> {
        Box::pin(async move {
            let request = EmailJsRequest {
                service_id: &self.config.service_id,
                template_id: &self.config.template_id,
                user_id: &self.config.public_key,
                template_params: TemplateParams {
                    to_email: recipient,
                    notification,
                },
            };

            tracing::debug!(recipient, "Dispatching order notification");

            let response = self
                .client
                .post(EMAILJS_ENDPOINT)
                .json(&request)
                .send()
                .await?;

            let status = response.status();
            if status.is_success() {
                tracing::info!(recipient, "Order notification accepted");
                Ok(())
            } else {
                tracing::warn!(recipient, %status, "Order notification rejected");
                Err(MailerError::Rejected(status))
            }
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can use unwrap
mod tests {
    use super::*;

    #[test]
    fn template_params_flatten_the_notification() {
        let notification = OrderNotification {
            from_name: "Wei Ling Tan".into(),
            from_email: "wei.ling@example.sg".into(),
            customer_phone: "+65 9123 4567".into(),
            customer_address: "71 Duxton Road, Singapore, 089530, Singapore".into(),
            order_notes: String::new(),
            order_items: "TEQUILA AÑEJO x1 - S$150.00".into(),
            subtotal: "S$150.00".into(),
            shipping: "S$20.00".into(),
            total_amount: "S$170.00".into(),
            payment_method: "PayNow".into(),
            order_date: "2026-01-01 00:00:00 UTC".into(),
        };

        let params = TemplateParams {
            to_email: ORDER_RECIPIENT,
            notification: &notification,
        };
        let value = serde_json::to_value(&params).unwrap();

        assert_eq!(value["to_email"], "order@yoload.asia");
        assert_eq!(value["from_name"], "Wei Ling Tan");
        assert_eq!(value["total_amount"], "S$170.00");
    }

    #[test]
    fn from_env_reports_the_missing_variable() {
        // Run single-threaded against the process environment on purpose:
        // the three vars are not set in the test environment.
        if std::env::var("EMAILJS_SERVICE_ID").is_err() {
            let err = EmailJsConfig::from_env().unwrap_err();
            assert!(matches!(err, ConfigError::MissingVar("EMAILJS_SERVICE_ID")));
        }
    }
}
