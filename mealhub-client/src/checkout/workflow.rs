//! Order submission workflow
//!
//! Sequential state machine around the single `POST /orders` call:
//! `Idle -> Validating -> (Invalid | PaymentPending | Submitting) ->
//! (Succeeded | Failed)`. An explicit in-flight flag rejects re-entrant
//! submissions; a failure leaves the cart and payment state intact so the
//! user can retry without re-selecting meals.

use std::time::Duration;

use crate::api::OrderApi;
use crate::cart::CartStore;
use crate::checkout::validator::{checkout_rules, validate};
use crate::checkout::CheckoutForm;
use crate::error::{ClientError, ClientResult};
use shared::models::{Order, OrderLine, OrderPlaced, PaymentMethod, PaymentStatus};

/// Delay before the post-success redirect
pub const REDIRECT_DELAY: Duration = Duration::from_secs(3);

/// Workflow state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Validating,
    Invalid,
    PaymentPending,
    Submitting,
    Succeeded,
    Failed,
}

/// Successful submission outcome
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    /// Server confirmation, message included
    pub confirmation: OrderPlaced,
    /// How long to show the success view before redirecting
    pub redirect_after: Duration,
}

/// One checkout session's submission workflow
///
/// Created per checkout session (page load); the UPI confirmation flag lives
/// here and is never reset automatically within the session.
#[derive(Debug, Default)]
pub struct CheckoutWorkflow {
    state: SubmitState,
    upi_confirmed: bool,
    in_flight: bool,
}

impl CheckoutWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// The payer asserts the UPI payment was made (false -> true only)
    pub fn confirm_upi_payment(&mut self) {
        self.upi_confirmed = true;
        tracing::info!("UPI payment asserted by payer");
    }

    pub fn payment_confirmed(&self) -> bool {
        self.upi_confirmed
    }

    /// A user edit after a validation failure re-arms the workflow
    pub fn edited(&mut self) {
        if self.state == SubmitState::Invalid {
            self.state = SubmitState::Idle;
        }
    }

    /// Validate, gate on payment, and place the order.
    ///
    /// Exactly one order-creation call is issued per successful pass; every
    /// early exit happens before the network layer is touched.
    pub async fn submit(
        &mut self,
        api: &dyn OrderApi,
        cart: &mut CartStore,
        form: &CheckoutForm,
    ) -> ClientResult<SubmitOutcome> {
        if self.in_flight {
            tracing::warn!("Rejected re-entrant order submission");
            return Err(ClientError::SubmissionInFlight);
        }

        if cart.is_empty() {
            self.state = SubmitState::Idle;
            return Err(ClientError::EmptyCart);
        }

        self.state = SubmitState::Validating;
        let errors = validate(checkout_rules(), &form.values());
        if !errors.is_empty() {
            self.state = SubmitState::Invalid;
            return Err(ClientError::Validation(errors));
        }

        // the payment field already passed the closed-set rule
        let Some(method) = form.payment_method() else {
            self.state = SubmitState::Invalid;
            let mut errors = crate::checkout::ErrorSet::new();
            errors.insert("payment", "Please select a valid payment method");
            return Err(ClientError::Validation(errors));
        };

        if method == PaymentMethod::Upi && !self.upi_confirmed {
            self.state = SubmitState::PaymentPending;
            return Err(ClientError::PaymentUnconfirmed);
        }

        let order = build_order(cart, form, method, self.upi_confirmed);

        self.state = SubmitState::Submitting;
        self.in_flight = true;
        let result = api.create_order(&order).await;
        self.in_flight = false;

        match result {
            Ok(confirmation) => {
                if let Some(server_total) = confirmation.total_price {
                    if (server_total - order.total_price).abs() > 0.005 {
                        // the server is the authority on totals; ours is advisory
                        tracing::warn!(
                            client_total = order.total_price,
                            server_total,
                            "Server recomputed a different order total"
                        );
                    }
                }
                cart.clear();
                self.state = SubmitState::Succeeded;
                tracing::info!(total = order.total_price, "Order placed");
                Ok(SubmitOutcome {
                    confirmation,
                    redirect_after: REDIRECT_DELAY,
                })
            }
            Err(e) => {
                // cart and payment state stay intact for a user-initiated retry
                self.state = SubmitState::Failed;
                tracing::warn!(error = %e, "Order submission failed");
                Err(e)
            }
        }
    }
}

/// Construct the outbound order from the cart and validated form
fn build_order(
    cart: &CartStore,
    form: &CheckoutForm,
    method: PaymentMethod,
    upi_confirmed: bool,
) -> Order {
    let totals = cart.totals();
    let payment_status = match method {
        PaymentMethod::Upi if upi_confirmed => PaymentStatus::Paid,
        _ => PaymentStatus::Pending,
    };

    Order {
        customer_name: form.name.trim().to_string(),
        phone: form.phone.clone(),
        address: form.composed_address(),
        meals: cart
            .items()
            .iter()
            .map(|item| OrderLine {
                name: item.name.clone(),
                price: item.price,
            })
            .collect(),
        total_price: totals.total,
        payment_method: method,
        payment_status,
    }
}
