//! # Cava Storefront
//!
//! Cart and checkout state machine for the Cava de Oro Singapore
//! storefront: a fixed five-product tequila catalog, an SGD cart with
//! flat shipping, a presence-validated checkout form, and a two-step
//! asynchronous order submission workflow with a best-effort notification
//! email and a simulated payment processor.
//!
//! State lives in a [`StorefrontState`] reduced by [`StorefrontReducer`];
//! run it in a `cava_storefront_runtime::Store` and observe feedback
//! actions (cart notices, order completion) on the store's action
//! broadcast.
//!
//! ## Example
//!
//! ```ignore
//! use cava_storefront::{
//!     CartAction, ProductId, StorefrontAction, StorefrontEnvironment, StorefrontReducer,
//!     StorefrontState, EmailJsMailer,
//! };
//! use cava_storefront_core::environment::SystemClock;
//! use cava_storefront_runtime::Store;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let env = StorefrontEnvironment::new(SystemClock, Arc::new(EmailJsMailer::from_env()?));
//! let store = Store::new(StorefrontState::default(), StorefrontReducer::default(), env);
//!
//! store
//!     .send(StorefrontAction::Cart(CartAction::AddItem(ProductId::Anejo)))
//!     .await?;
//! store.send(StorefrontAction::CompleteOrder).await?;
//! # Ok(())
//! # }
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod mailer;
pub mod money;
pub mod order;
pub mod reducer;

pub use cart::{CartAction, CartLine, CartNotice, CartNoticeKind, CartReducer, CartState};
pub use catalog::{Language, Product, ProductId};
pub use checkout::{CheckoutField, CheckoutForm, PaymentMethod};
pub use mailer::{
    EmailJsConfig, EmailJsMailer, MailerError, ORDER_RECIPIENT, OrderMailer,
};
pub use money::Money;
pub use order::{EmailStatus, OrderNotification, PaymentInstructions, SubmissionStatus};
pub use reducer::{
    StorefrontAction, StorefrontEnvironment, StorefrontReducer, StorefrontState, SubmissionState,
};
