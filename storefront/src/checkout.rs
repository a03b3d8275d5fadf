//! Checkout form and payment method selection.
//!
//! Validation is presence-only: every field except the notes must be
//! non-empty after trimming. Format checks (email shape, phone digits)
//! are left to the payment and mail collaborators downstream.

use serde::{Deserialize, Serialize};

/// How the buyer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Singapore PayNow QR transfer
    #[default]
    PayNow,
    /// PayPal redirect
    PayPal,
}

impl PaymentMethod {
    /// Label used in order notifications and payment instructions.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PayNow => "PayNow",
            Self::PayPal => "PayPal",
        }
    }
}

/// Form fields addressable by [`CheckoutForm::set_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckoutField {
    /// Buyer's given name (required)
    FirstName,
    /// Buyer's family name (required)
    LastName,
    /// Contact email (required)
    Email,
    /// Contact phone (required)
    Phone,
    /// Street address (required)
    Address,
    /// City (required)
    City,
    /// Postal code (required)
    PostalCode,
    /// Country (required)
    Country,
    /// Free-form delivery notes (optional)
    Notes,
}

/// The checkout form. All fields default to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutForm {
    /// Buyer's given name
    pub first_name: String,
    /// Buyer's family name
    pub last_name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// Street address
    pub address: String,
    /// City
    pub city: String,
    /// Postal code
    pub postal_code: String,
    /// Country
    pub country: String,
    /// Free-form delivery notes
    pub notes: String,
    /// Selected payment method
    pub payment_method: PaymentMethod,
}

impl CheckoutForm {
    /// Overwrite a single field. No per-field validation happens here.
    pub fn set_field(&mut self, field: CheckoutField, value: String) {
        match field {
            CheckoutField::FirstName => self.first_name = value,
            CheckoutField::LastName => self.last_name = value,
            CheckoutField::Email => self.email = value,
            CheckoutField::Phone => self.phone = value,
            CheckoutField::Address => self.address = value,
            CheckoutField::City => self.city = value,
            CheckoutField::PostalCode => self.postal_code = value,
            CheckoutField::Country => self.country = value,
            CheckoutField::Notes => self.notes = value,
        }
    }

    /// True iff every required field is non-empty after trimming.
    ///
    /// Notes are optional; the payment method always has a value.
    #[must_use]
    pub fn validate(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone,
            &self.address,
            &self.city,
            &self.postal_code,
            &self.country,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }

    /// Clear every field and restore the default payment method.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Buyer's full name for the order notification.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Single-line delivery address for the order notification.
    #[must_use]
    pub fn full_address(&self) -> String {
        format!(
            "{}, {}, {}, {}",
            self.address, self.city, self.postal_code, self.country
        )
    }
}

/// A completely filled form for unit tests across the crate.
#[cfg(test)]
pub(crate) fn filled_form() -> CheckoutForm {
    let mut form = CheckoutForm::default();
    form.set_field(CheckoutField::FirstName, "Wei Ling".into());
    form.set_field(CheckoutField::LastName, "Tan".into());
    form.set_field(CheckoutField::Email, "wei.ling@example.sg".into());
    form.set_field(CheckoutField::Phone, "+65 9123 4567".into());
    form.set_field(CheckoutField::Address, "71 Duxton Road".into());
    form.set_field(CheckoutField::City, "Singapore".into());
    form.set_field(CheckoutField::PostalCode, "089530".into());
    form.set_field(CheckoutField::Country, "Singapore".into());
    form
}
