//! Checkout: form validation and the order submission workflow

pub mod validator;
pub mod workflow;

pub use validator::{
    checkout_rules, login_rules, signup_rules, validate, ErrorSet, FieldRule, FormValues, Rule,
};
pub use workflow::{CheckoutWorkflow, SubmitOutcome, SubmitState, REDIRECT_DELAY};

use shared::models::PaymentMethod;

/// Raw checkout form input, alive only for the duration of a submission
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub zipcode: String,
    pub notes: String,
    /// Payment method as selected in the form ("cash" | "upi")
    pub payment: String,
    pub terms: bool,
}

impl CheckoutForm {
    /// Flatten into the value bag the rule engine consumes
    pub fn values(&self) -> FormValues {
        FormValues::new()
            .text("name", &self.name)
            .text("email", &self.email)
            .text("phone", &self.phone)
            .text("address", &self.address)
            .text("city", &self.city)
            .text("zipcode", &self.zipcode)
            .text("payment", &self.payment)
            .flag("terms", self.terms)
    }

    /// The selected payment method, if it is one of the supported set
    pub fn payment_method(&self) -> Option<PaymentMethod> {
        PaymentMethod::parse(&self.payment)
    }

    /// Compose the single delivery-address string the order carries
    pub fn composed_address(&self) -> String {
        format!("{}, {} - {}", self.address.trim(), self.city.trim(), self.zipcode.trim())
    }
}
