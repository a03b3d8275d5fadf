//! Order submission status machine and notification rendering.
//!
//! The notification carries everything the back office needs as flat
//! display strings, matching the template the order mailbox expects:
//! concatenated address, one line-item row per cart line, and S$
//! formatted amounts.

use crate::cart::CartState;
use crate::catalog::Language;
use crate::checkout::{CheckoutForm, PaymentMethod};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// UEN shown with the PayNow QR code.
pub const PAYNOW_UEN: &str = "201605046D";

/// Where the submission workflow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SubmissionStatus {
    /// Nothing in flight
    #[default]
    Idle,
    /// Checking required fields
    Validating,
    /// Order notification dispatched to the mailer
    Submitting,
    /// Waiting on the simulated payment processor
    AwaitingPayment,
    /// Order done, cart cleared
    Completed,
}

impl SubmissionStatus {
    /// True while a submission is between acceptance and completion.
    ///
    /// New submissions and resets are ignored in this window.
    #[must_use]
    pub const fn in_flight(self) -> bool {
        matches!(self, Self::Submitting | Self::AwaitingPayment)
    }
}

/// Outcome of the best-effort order email, tracked independently of the
/// submission status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EmailStatus {
    /// No email attempted yet
    #[default]
    None,
    /// Dispatch in progress
    Sending,
    /// Accepted by the email service
    Sent,
    /// Dispatch failed; the order itself is unaffected
    Error,
}

/// What the buyer is told once payment is confirmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentInstructions {
    /// Which method these instructions are for
    pub method: PaymentMethod,
    /// Display text for the buyer
    pub message: String,
}

impl PaymentInstructions {
    /// Build the instructions for the chosen method.
    ///
    /// PayNow gets the scan-the-QR text with the UEN and exact total.
    /// PayPal gets the simulated redirect text with an item summary.
    #[must_use]
    pub fn build(method: PaymentMethod, cart: &CartState, language: Language) -> Self {
        let total = cart.grand_total();
        let message = match method {
            PaymentMethod::PayNow => format!(
                "PayNow Payment\nAmount: {total}\nUEN: {PAYNOW_UEN}\n\nPlease scan the QR code \
                 with your banking app to complete payment."
            ),
            PaymentMethod::PayPal => {
                let items = cart
                    .lines
                    .iter()
                    .map(|l| format!("{} x{}", l.localized_name(language), l.quantity))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(
                    "PayPal Payment\nAmount: {total}\nItems: {items}\n\nRedirecting to PayPal \
                     for secure payment..."
                )
            },
        };
        Self { method, message }
    }
}

/// The flattened order email, one field per template parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderNotification {
    /// Buyer's full name
    pub from_name: String,
    /// Buyer's email
    pub from_email: String,
    /// Buyer's phone
    pub customer_phone: String,
    /// "address, city, postal code, country"
    pub customer_address: String,
    /// Free-form delivery notes
    pub order_notes: String,
    /// One "Name xQty - S$total" line per cart line
    pub order_items: String,
    /// Formatted subtotal
    pub subtotal: String,
    /// Formatted shipping cost
    pub shipping: String,
    /// Formatted grand total
    pub total_amount: String,
    /// "PayNow" or "PayPal"
    pub payment_method: String,
    /// When the order was placed
    pub order_date: String,
}

impl OrderNotification {
    /// Render the notification from the form and cart as they stand.
    ///
    /// Line items use the buyer's display language.
    #[must_use]
    pub fn build(
        form: &CheckoutForm,
        cart: &CartState,
        language: Language,
        placed_at: DateTime<Utc>,
    ) -> Self {
        let order_items = cart
            .lines
            .iter()
            .map(|l| format!("{} x{} - {}", l.localized_name(language), l.quantity, l.total()))
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            from_name: form.full_name(),
            from_email: form.email.clone(),
            customer_phone: form.phone.clone(),
            customer_address: form.full_address(),
            order_notes: form.notes.clone(),
            order_items,
            subtotal: cart.subtotal().to_string(),
            shipping: cart.shipping_cost().to_string(),
            total_amount: cart.grand_total().to_string(),
            payment_method: form.payment_method.label().to_owned(),
            order_date: placed_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{CartAction, CartReducer};
    use crate::catalog::ProductId;
    use crate::checkout::{CheckoutField, filled_form};
    use cava_storefront_core::environment::Clock;
    use cava_storefront_core::reducer::Reducer;
    use cava_storefront_testing::test_clock;

    fn sample_cart() -> CartState {
        let reducer = CartReducer;
        let mut cart = CartState::default();
        for action in [
            CartAction::AddItem(ProductId::Anejo),
            CartAction::AddItem(ProductId::Anejo),
            CartAction::AddItem(ProductId::MiniCollection),
        ] {
            let _ = reducer.reduce(&mut cart, action, &());
        }
        cart
    }

    #[test]
    fn notification_renders_all_template_fields() {
        let mut form = filled_form();
        form.set_field(CheckoutField::Notes, "Leave with the concierge".into());

        let note = OrderNotification::build(
            &form,
            &sample_cart(),
            Language::English,
            test_clock().now(),
        );

        assert_eq!(note.from_name, "Wei Ling Tan");
        assert_eq!(
            note.customer_address,
            "71 Duxton Road, Singapore, 089530, Singapore"
        );
        assert_eq!(
            note.order_items,
            "TEQUILA AÑEJO x2 - S$300.00\nMINI BOTTLE COLLECTION x1 - S$210.00"
        );
        assert_eq!(note.subtotal, "S$510.00");
        assert_eq!(note.shipping, "S$20.00");
        assert_eq!(note.total_amount, "S$530.00");
        assert_eq!(note.payment_method, "PayNow");
        assert_eq!(note.order_date, "2026-01-01 00:00:00 UTC");
    }

    #[test]
    fn notification_localizes_line_items() {
        let note = OrderNotification::build(
            &filled_form(),
            &sample_cart(),
            Language::Chinese,
            test_clock().now(),
        );
        assert!(note.order_items.starts_with("陈酿龙舌兰酒 x2"));
    }

    #[test]
    fn paynow_instructions_carry_uen_and_total() {
        let instructions =
            PaymentInstructions::build(PaymentMethod::PayNow, &sample_cart(), Language::English);
        assert!(instructions.message.contains("UEN: 201605046D"));
        assert!(instructions.message.contains("Amount: S$530.00"));
    }

    #[test]
    fn paypal_instructions_summarize_items() {
        let instructions =
            PaymentInstructions::build(PaymentMethod::PayPal, &sample_cart(), Language::English);
        assert!(
            instructions
                .message
                .contains("Items: TEQUILA AÑEJO x2, MINI BOTTLE COLLECTION x1")
        );
    }

    #[test]
    fn in_flight_window_covers_submitting_and_awaiting() {
        assert!(SubmissionStatus::Submitting.in_flight());
        assert!(SubmissionStatus::AwaitingPayment.in_flight());
        assert!(!SubmissionStatus::Idle.in_flight());
        assert!(!SubmissionStatus::Completed.in_flight());
    }
}
