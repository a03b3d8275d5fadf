//! End-to-end checkout flows against a real store.
//!
//! Each test drives a `Store` running the root storefront reducer with a
//! fixed clock, a zero payment delay, and a mock mailer that records what
//! it was asked to send (and can be told to fail).

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use cava_storefront::{
    CartAction, CartNoticeKind, CheckoutField, EmailStatus, MailerError, OrderMailer,
    OrderNotification, PaymentMethod, ProductId, StorefrontAction, StorefrontEnvironment,
    StorefrontReducer, StorefrontState, SubmissionStatus,
};
use cava_storefront_runtime::Store;
use cava_storefront_testing::{FixedClock, test_clock};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mailer that records every notification and optionally fails.
#[derive(Default)]
struct MockMailer {
    fail: bool,
    sent: Mutex<Vec<(String, OrderNotification)>>,
}

impl MockMailer {
    fn failing() -> Self {
        Self {
            fail: true,
            sent: Mutex::new(Vec::new()),
        }
    }

    fn sent(&self) -> Vec<(String, OrderNotification)> {
        self.sent.lock().unwrap().clone()
    }
}

impl OrderMailer for MockMailer {
    fn send<'a>(
        &'a self,
        recipient: &'a str,
        notification: &'a OrderNotification,
    ) -> Pin<Box<dyn Future<Output = Result<(), MailerError>> + Send + 'a>> {
        Box::pin(async move {
            if self.fail {
                return Err(MailerError::Rejected(
                    reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                ));
            }
            self.sent
                .lock()
                .unwrap()
                .push((recipient.to_owned(), notification.clone()));
            Ok(())
        })
    }
}

type TestStore = Store<
    StorefrontState,
    StorefrontAction,
    StorefrontEnvironment<FixedClock, MockMailer>,
    StorefrontReducer<FixedClock, MockMailer>,
>;

fn store_with(mailer: MockMailer) -> (TestStore, Arc<MockMailer>) {
    let mailer = Arc::new(mailer);
    let env = StorefrontEnvironment {
        clock: test_clock(),
        mailer: Arc::clone(&mailer),
        payment_delay: Duration::from_millis(0),
    };
    (
        Store::new(StorefrontState::default(), StorefrontReducer::default(), env),
        mailer,
    )
}

async fn fill_form(store: &TestStore) {
    let fields = [
        (CheckoutField::FirstName, "Wei Ling"),
        (CheckoutField::LastName, "Tan"),
        (CheckoutField::Email, "wei.ling@example.sg"),
        (CheckoutField::Phone, "+65 9123 4567"),
        (CheckoutField::Address, "71 Duxton Road"),
        (CheckoutField::City, "Singapore"),
        (CheckoutField::PostalCode, "089530"),
        (CheckoutField::Country, "Singapore"),
    ];
    for (field, value) in fields {
        store
            .send(StorefrontAction::SetField {
                field,
                value: value.to_owned(),
            })
            .await
            .unwrap();
    }
}

async fn submit_and_wait(store: &TestStore) {
    store
        .send_and_wait_for(
            StorefrontAction::CompleteOrder,
            |a| matches!(a, StorefrontAction::OrderCompleted),
            Duration::from_secs(5),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn adding_the_same_product_twice_accumulates_one_line() {
    let (store, _) = store_with(MockMailer::default());

    let mut handle = store
        .send(StorefrontAction::Cart(CartAction::AddItem(ProductId::Anejo)))
        .await
        .unwrap();
    handle
        .wait_with_timeout(Duration::from_secs(1))
        .await
        .unwrap();
    store
        .send(StorefrontAction::Cart(CartAction::AddItem(ProductId::Anejo)))
        .await
        .unwrap();

    store
        .state(|s| {
            assert_eq!(s.cart.lines.len(), 1);
            assert_eq!(s.cart.lines[0].quantity, 2);
            assert_eq!(s.cart.subtotal().to_string(), "S$300.00");
            assert_eq!(s.cart.shipping_cost().to_string(), "S$20.00");
            assert_eq!(s.cart.grand_total().to_string(), "S$320.00");
        })
        .await;
}

#[tokio::test]
async fn empty_cart_has_no_shipping() {
    let (store, _) = store_with(MockMailer::default());

    store
        .state(|s| {
            assert!(s.cart.is_empty());
            assert_eq!(s.cart.shipping_cost().to_string(), "S$0.00");
            assert_eq!(s.cart.grand_total().to_string(), "S$0.00");
        })
        .await;
}

#[tokio::test]
async fn add_notices_distinguish_first_add_from_repeat() {
    let (store, _) = store_with(MockMailer::default());
    let mut rx = store.subscribe_actions();

    store
        .send(StorefrontAction::Cart(CartAction::AddItem(
            ProductId::Cristalino,
        )))
        .await
        .unwrap();

    let first = tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .unwrap()
        .unwrap();
    match first {
        StorefrontAction::Cart(CartAction::NoticePosted(notice)) => {
            assert_eq!(notice.kind, CartNoticeKind::Added);
            assert_eq!(notice.product, ProductId::Cristalino);
            assert_eq!(notice.duration, Duration::from_millis(2000));
        },
        other => panic!("expected a cart notice, got {other:?}"),
    }

    store
        .send(StorefrontAction::Cart(CartAction::AddItem(
            ProductId::Cristalino,
        )))
        .await
        .unwrap();

    let second = tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .unwrap()
        .unwrap();
    match second {
        StorefrontAction::Cart(CartAction::NoticePosted(notice)) => {
            assert_eq!(notice.kind, CartNoticeKind::QuantityIncreased);
        },
        other => panic!("expected a cart notice, got {other:?}"),
    }
}

#[tokio::test]
async fn successful_order_sends_email_and_completes() {
    let (store, mailer) = store_with(MockMailer::default());

    store
        .send(StorefrontAction::Cart(CartAction::AddItem(ProductId::Anejo)))
        .await
        .unwrap();
    fill_form(&store).await;
    submit_and_wait(&store).await;

    store
        .state(|s| {
            assert_eq!(s.submission.status, SubmissionStatus::Completed);
            assert!(s.submission.order_complete);
            assert_eq!(s.submission.email_status, EmailStatus::Sent);
            assert!(s.cart.is_empty());

            let instructions = s.submission.instructions.as_ref().unwrap();
            assert_eq!(instructions.method, PaymentMethod::PayNow);
            assert!(instructions.message.contains("Amount: S$170.00"));
        })
        .await;

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    let (recipient, notification) = &sent[0];
    assert_eq!(recipient, "order@yoload.asia");
    assert_eq!(notification.from_name, "Wei Ling Tan");
    assert_eq!(notification.order_items, "TEQUILA AÑEJO x1 - S$150.00");
    assert_eq!(notification.total_amount, "S$170.00");
    assert_eq!(notification.payment_method, "PayNow");
}

#[tokio::test]
async fn email_failure_does_not_block_the_order() {
    let (store, _) = store_with(MockMailer::failing());

    store
        .send(StorefrontAction::Cart(CartAction::AddItem(
            ProductId::ExtraAnejo,
        )))
        .await
        .unwrap();
    fill_form(&store).await;
    submit_and_wait(&store).await;

    store
        .state(|s| {
            assert_eq!(s.submission.status, SubmissionStatus::Completed);
            assert!(s.submission.order_complete);
            assert_eq!(s.submission.email_status, EmailStatus::Error);
            assert!(s.cart.is_empty());
        })
        .await;
}

#[tokio::test]
async fn missing_required_field_leaves_everything_untouched() {
    let (store, mailer) = store_with(MockMailer::default());

    store
        .send(StorefrontAction::Cart(CartAction::AddItem(ProductId::Anejo)))
        .await
        .unwrap();
    fill_form(&store).await;
    // Blank out one required field again
    store
        .send(StorefrontAction::SetField {
            field: CheckoutField::Email,
            value: String::new(),
        })
        .await
        .unwrap();

    let mut handle = store.send(StorefrontAction::CompleteOrder).await.unwrap();
    handle
        .wait_with_timeout(Duration::from_secs(1))
        .await
        .unwrap();

    store
        .state(|s| {
            assert_eq!(s.submission.status, SubmissionStatus::Idle);
            assert!(!s.submission.order_complete);
            assert_eq!(s.cart.item_count(), 1);
            assert!(s.submission.validation_error.is_some());
        })
        .await;
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn paypal_order_completes_with_redirect_instructions() {
    let (store, _) = store_with(MockMailer::default());

    store
        .send(StorefrontAction::Cart(CartAction::AddItem(
            ProductId::MiniCollection,
        )))
        .await
        .unwrap();
    fill_form(&store).await;
    store
        .send(StorefrontAction::SelectPaymentMethod(PaymentMethod::PayPal))
        .await
        .unwrap();
    submit_and_wait(&store).await;

    store
        .state(|s| {
            let instructions = s.submission.instructions.as_ref().unwrap();
            assert_eq!(instructions.method, PaymentMethod::PayPal);
            assert!(instructions.message.contains("Redirecting to PayPal"));
            assert!(
                instructions
                    .message
                    .contains("Items: MINI BOTTLE COLLECTION x1")
            );
        })
        .await;
}

#[tokio::test]
async fn reset_after_completion_allows_a_second_order() {
    let (store, mailer) = store_with(MockMailer::default());

    store
        .send(StorefrontAction::Cart(CartAction::AddItem(ProductId::Anejo)))
        .await
        .unwrap();
    fill_form(&store).await;
    submit_and_wait(&store).await;

    store.send(StorefrontAction::ResetCheckout).await.unwrap();
    store
        .state(|s| {
            assert_eq!(s.submission.status, SubmissionStatus::Idle);
            assert_eq!(s.submission.email_status, EmailStatus::None);
            assert!(s.form.first_name.is_empty());
        })
        .await;

    // A second order round-trips cleanly
    store
        .send(StorefrontAction::Cart(CartAction::AddItem(
            ProductId::BlackEdition,
        )))
        .await
        .unwrap();
    fill_form(&store).await;
    submit_and_wait(&store).await;

    store
        .state(|s| {
            assert_eq!(s.submission.status, SubmissionStatus::Completed);
        })
        .await;
    assert_eq!(mailer.sent().len(), 2);
}
