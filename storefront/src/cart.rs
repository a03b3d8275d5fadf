//! Shopping cart state and reducer.
//!
//! The cart is an insertion-ordered list of lines, at most one per product.
//! Adding an existing product bumps its quantity and the reducer reports
//! which of the two happened through a transient [`CartNotice`] feedback
//! action; the presentation layer owns dismissal after the requested
//! display duration.

use crate::catalog::{self, Language, ProductId};
use crate::money::Money;
use cava_storefront_core::{Effects, effect::Effect, reducer::Reducer, smallvec};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Flat shipping fee charged on any non-empty cart.
pub const SHIPPING_FEE: Money = Money::new(dec!(20));

/// How long the storefront shows a cart notice before dismissing it.
pub const NOTICE_DURATION: Duration = Duration::from_millis(2000);

/// One cart line. Display fields and the unit price are snapshotted from
/// the catalog at add time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Which product this line is for
    pub product: ProductId,
    /// English name at add time
    pub name: String,
    /// Chinese name at add time
    pub name_zh: String,
    /// Product photo URL at add time
    pub image: String,
    /// Unit price at add time
    pub unit_price: Money,
    /// Number of bottles, always at least 1
    pub quantity: u32,
}

impl CartLine {
    /// Line total, unit price times quantity.
    #[must_use]
    pub fn total(&self) -> Money {
        self.unit_price * self.quantity
    }

    /// Display name in the given language.
    #[must_use]
    pub fn localized_name(&self, language: Language) -> &str {
        match language {
            Language::English => &self.name,
            Language::Chinese => &self.name_zh,
        }
    }
}

/// The cart: insertion-ordered lines, one per product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    /// Cart lines in the order products were first added
    pub lines: Vec<CartLine>,
}

impl CartState {
    /// The line for a product, if present.
    #[must_use]
    pub fn line(&self, product: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product == product)
    }

    /// Sum of unit price times quantity over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::total).sum()
    }

    /// Flat S$20 whenever the cart is non-empty, S$0 otherwise.
    #[must_use]
    pub fn shipping_cost(&self) -> Money {
        if self.lines.is_empty() {
            Money::ZERO
        } else {
            SHIPPING_FEE
        }
    }

    /// Subtotal plus shipping, rounded to cents.
    #[must_use]
    pub fn grand_total(&self) -> Money {
        (self.subtotal() + self.shipping_cost()).rounded()
    }

    /// Total number of bottles across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// True when the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

/// What an add did, so the notice can word itself accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartNoticeKind {
    /// A new line was appended
    Added,
    /// An existing line's quantity was bumped
    QuantityIncreased,
}

/// Transient confirmation shown after an add.
///
/// Emitted as a feedback action so observers on the store's action
/// broadcast see it; the state itself never stores notices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartNotice {
    /// What happened
    pub kind: CartNoticeKind,
    /// The product the notice is about
    pub product: ProductId,
    /// How long the presentation should display the notice
    #[serde(skip, default = "default_notice_duration")]
    pub duration: Duration,
}

fn default_notice_duration() -> Duration {
    NOTICE_DURATION
}

/// Cart actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CartAction {
    /// Add one unit of a product, bumping quantity if already present
    AddItem(ProductId),
    /// Remove a line entirely; no-op when absent
    RemoveItem(ProductId),
    /// Overwrite a line's quantity; zero or negative removes the line
    SetQuantity {
        /// Which line to change
        product: ProductId,
        /// New quantity; values at or below zero remove the line
        quantity: i32,
    },
    /// Empty the cart
    Clear,
    /// Feedback: a notice was posted for the presentation to display
    NoticePosted(CartNotice),
}

/// Reducer for the cart.
#[derive(Debug, Clone, Copy, Default)]
pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;
    type Action = CartAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> Effects<Self::Action> {
        match action {
            CartAction::AddItem(product) => {
                let kind = if let Some(line) =
                    state.lines.iter_mut().find(|l| l.product == product)
                {
                    line.quantity += 1;
                    CartNoticeKind::QuantityIncreased
                } else {
                    let entry = catalog::product(product);
                    state.lines.push(CartLine {
                        product,
                        name: entry.name.to_owned(),
                        name_zh: entry.name_zh.to_owned(),
                        image: entry.image.to_owned(),
                        unit_price: entry.price,
                        quantity: 1,
                    });
                    CartNoticeKind::Added
                };

                tracing::debug!(product = product.slug(), ?kind, "Item added to cart");

                let notice = CartNotice {
                    kind,
                    product,
                    duration: NOTICE_DURATION,
                };
                smallvec![Effect::future(async move {
                    Some(CartAction::NoticePosted(notice))
                })]
            },
            CartAction::RemoveItem(product) => {
                state.lines.retain(|l| l.product != product);
                smallvec![]
            },
            CartAction::SetQuantity { product, quantity } => {
                if quantity <= 0 {
                    state.lines.retain(|l| l.product != product);
                } else if let Some(line) = state.lines.iter_mut().find(|l| l.product == product) {
                    #[allow(clippy::cast_sign_loss)]
                    {
                        line.quantity = quantity as u32;
                    }
                }
                smallvec![]
            },
            CartAction::Clear => {
                state.clear();
                smallvec![]
            },
            // Notices only exist for observers; the state ignores them
            CartAction::NoticePosted(_) => smallvec![],
        }
    }
}
