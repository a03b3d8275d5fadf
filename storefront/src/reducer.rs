//! The root storefront reducer.
//!
//! One `StorefrontState` per browser session. Cart actions are delegated
//! to [`CartReducer`]; the order submission workflow runs at the root
//! because it reads both the cart and the checkout form.
//!
//! Submission is a two-step async workflow: `CompleteOrder` dispatches the
//! notification email, the mailer settling moves the order into a fixed
//! payment delay, and the delay elapsing confirms payment, clears the cart,
//! and emits the terminal `OrderCompleted` feedback event. Email failure is
//! recorded but never blocks the order.

use crate::cart::{CartAction, CartReducer, CartState};
use crate::catalog::Language;
use crate::checkout::{CheckoutField, CheckoutForm, PaymentMethod};
use crate::mailer::{ORDER_RECIPIENT, OrderMailer};
use crate::order::{EmailStatus, OrderNotification, PaymentInstructions, SubmissionStatus};
use cava_storefront_core::{Effects, effect::Effect, environment::Clock, reducer::Reducer, smallvec};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Message recorded when `CompleteOrder` fails validation.
pub const REQUIRED_FIELD_MESSAGE: &str = "This field is required";

/// Default simulated payment processor latency.
pub const DEFAULT_PAYMENT_DELAY: Duration = Duration::from_secs(1);

/// Order submission bookkeeping, alongside the cart and form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionState {
    /// Where the workflow currently is
    pub status: SubmissionStatus,
    /// Outcome of the best-effort order email
    pub email_status: EmailStatus,
    /// Set once a submission reaches `Completed`
    pub order_complete: bool,
    /// Validation message from the last rejected `CompleteOrder`
    pub validation_error: Option<String>,
    /// Instructions shown to the buyer after payment confirmation
    pub instructions: Option<PaymentInstructions>,
}

/// Everything one storefront session holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontState {
    /// The shopping cart
    pub cart: CartState,
    /// The checkout form
    pub form: CheckoutForm,
    /// The buyer's display language
    pub language: Language,
    /// Order submission bookkeeping
    pub submission: SubmissionState,
}

/// All actions the storefront reduces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StorefrontAction {
    /// Cart operations
    Cart(CartAction),
    /// Overwrite one checkout form field
    SetField {
        /// Which field
        field: CheckoutField,
        /// New raw value
        value: String,
    },
    /// Choose how to pay
    SelectPaymentMethod(PaymentMethod),
    /// Switch the display language
    SetLanguage(Language),
    /// Submit the order from the checkout form
    CompleteOrder,
    /// Feedback: the order email settled
    EmailSettled {
        /// Whether the email service accepted the notification
        delivered: bool,
    },
    /// Feedback: the simulated payment delay elapsed
    ConfirmPayment,
    /// Feedback: terminal marker, the order is done
    OrderCompleted,
    /// Clear the form and submission bookkeeping for a new order
    ResetCheckout,
}

/// Injected dependencies for the storefront reducer.
pub struct StorefrontEnvironment<C, M>
where
    C: Clock,
    M: OrderMailer + ?Sized,
{
    /// Clock for order timestamps
    pub clock: C,
    /// Order notification mailer
    pub mailer: Arc<M>,
    /// Simulated payment processor latency
    pub payment_delay: Duration,
}

impl<C, M> StorefrontEnvironment<C, M>
where
    C: Clock,
    M: OrderMailer + ?Sized,
{
    /// Build an environment with the default payment delay.
    #[must_use]
    pub fn new(clock: C, mailer: Arc<M>) -> Self {
        Self {
            clock,
            mailer,
            payment_delay: DEFAULT_PAYMENT_DELAY,
        }
    }
}

impl<C, M> Clone for StorefrontEnvironment<C, M>
where
    C: Clock + Clone,
    M: OrderMailer + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            clock: self.clock.clone(),
            mailer: Arc::clone(&self.mailer),
            payment_delay: self.payment_delay,
        }
    }
}

/// The root reducer.
pub struct StorefrontReducer<C, M>
where
    C: Clock,
    M: OrderMailer + ?Sized,
{
    cart: CartReducer,
    _phantom: std::marker::PhantomData<fn() -> (C, Arc<M>)>,
}

impl<C, M> Default for StorefrontReducer<C, M>
where
    C: Clock,
    M: OrderMailer + ?Sized,
{
    fn default() -> Self {
        Self {
            cart: CartReducer,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<C, M> Clone for StorefrontReducer<C, M>
where
    C: Clock,
    M: OrderMailer + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            cart: self.cart,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<C, M> Reducer for StorefrontReducer<C, M>
where
    C: Clock,
    M: OrderMailer + ?Sized + 'static,
{
    type State = StorefrontState;
    type Action = StorefrontAction;
    type Environment = StorefrontEnvironment<C, M>;

    #[allow(clippy::too_many_lines)] // The workflow transitions read best in one match
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Effects<Self::Action> {
        match action {
            StorefrontAction::Cart(cart_action) => self
                .cart
                .reduce(&mut state.cart, cart_action, &())
                .into_iter()
                .map(|e| e.map(StorefrontAction::Cart))
                .collect(),

            StorefrontAction::SetField { field, value } => {
                state.form.set_field(field, value);
                smallvec![]
            },

            StorefrontAction::SelectPaymentMethod(method) => {
                state.form.payment_method = method;
                smallvec![]
            },

            StorefrontAction::SetLanguage(language) => {
                state.language = language;
                smallvec![]
            },

            StorefrontAction::CompleteOrder => {
                // A finished submission stays terminal until ResetCheckout.
                if state.submission.status.in_flight()
                    || state.submission.status == SubmissionStatus::Completed
                {
                    tracing::warn!(
                        status = ?state.submission.status,
                        "Ignoring CompleteOrder: submission already in flight or finished"
                    );
                    return smallvec![];
                }

                state.submission.status = SubmissionStatus::Validating;

                if !state.form.validate() {
                    tracing::debug!("Checkout rejected: required fields missing");
                    state.submission.status = SubmissionStatus::Idle;
                    state.submission.validation_error =
                        Some(REQUIRED_FIELD_MESSAGE.to_owned());
                    return smallvec![];
                }

                let notification = OrderNotification::build(
                    &state.form,
                    &state.cart,
                    state.language,
                    env.clock.now(),
                );

                state.submission.status = SubmissionStatus::Submitting;
                state.submission.email_status = EmailStatus::Sending;
                state.submission.validation_error = None;

                tracing::info!(
                    total = %state.cart.grand_total(),
                    method = state.form.payment_method.label(),
                    "Order accepted, dispatching notification"
                );

                let mailer = Arc::clone(&env.mailer);
                smallvec![Effect::future(async move {
                    let delivered = match mailer.send(ORDER_RECIPIENT, &notification).await {
                        Ok(()) => true,
                        Err(err) => {
                            tracing::warn!(error = %err, "Order email failed, order continues");
                            false
                        },
                    };
                    Some(StorefrontAction::EmailSettled { delivered })
                })]
            },

            StorefrontAction::EmailSettled { delivered } => {
                if state.submission.status != SubmissionStatus::Submitting {
                    return smallvec![];
                }

                state.submission.email_status = if delivered {
                    EmailStatus::Sent
                } else {
                    EmailStatus::Error
                };
                state.submission.status = SubmissionStatus::AwaitingPayment;

                smallvec![Effect::delay(
                    env.payment_delay,
                    StorefrontAction::ConfirmPayment
                )]
            },

            StorefrontAction::ConfirmPayment => {
                if state.submission.status != SubmissionStatus::AwaitingPayment {
                    return smallvec![];
                }

                // Instructions need the totals, so build them before clearing
                state.submission.instructions = Some(PaymentInstructions::build(
                    state.form.payment_method,
                    &state.cart,
                    state.language,
                ));
                state.submission.status = SubmissionStatus::Completed;
                state.submission.order_complete = true;
                state.cart.clear();

                tracing::info!("Order completed");

                smallvec![Effect::future(async {
                    Some(StorefrontAction::OrderCompleted)
                })]
            },

            // Terminal marker for observers; the state was already updated
            StorefrontAction::OrderCompleted => smallvec![],

            StorefrontAction::ResetCheckout => {
                if state.submission.status.in_flight() {
                    tracing::warn!("Ignoring ResetCheckout: submission in flight");
                    return smallvec![];
                }

                state.form.reset();
                state.submission = SubmissionState::default();
                smallvec![]
            },
        }
    }
}
