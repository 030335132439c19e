//! Checkout Application Service
//!
//! Runs the location → order → payment workflow through the processor port.
//! Contains NO infrastructure logic - pure orchestration and error mapping.

use checkout_types::{
    AppError, CheckoutRequest, ClientSettings, CreateOrderRequest, CreatePaymentRequest,
    Currency, Location, Money, Order, OrderLineItem, Payment, PaymentProcessor, PaymentResult,
    ProcessorError, TokenRequest, TopUpOutcome, TopUpRequest, new_idempotency_key,
};

/// Fixed charges made by the checkout and token-payment endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeSettings {
    /// Line item name of the fixed checkout order
    pub item_name: String,
    /// Price of the fixed checkout item, in minor units
    pub item_amount: i64,
    /// Currency of the fixed checkout item; the location currency is ignored
    pub item_currency: Currency,
    /// Amount charged by a token payment, in the location's currency
    pub token_amount: i64,
}

impl Default for ChargeSettings {
    fn default() -> Self {
        Self {
            item_name: "Cookie".to_string(),
            item_amount: 100,
            item_currency: Currency::IDR,
            token_amount: 100,
        }
    }
}

/// Application service for checkout operations.
///
/// Generic over `P: PaymentProcessor` - the adapter is injected at compile time,
/// so tests drive the workflow with a scripted processor.
pub struct CheckoutService<P: PaymentProcessor> {
    processor: P,
    client: ClientSettings,
    charges: ChargeSettings,
}

impl<P: PaymentProcessor> CheckoutService<P> {
    /// Creates a new checkout service.
    ///
    /// `client.location_id` is the location every workflow looks up first.
    pub fn new(processor: P, client: ClientSettings, charges: ChargeSettings) -> Self {
        Self {
            processor,
            client,
            charges,
        }
    }

    /// Returns a reference to the underlying processor.
    pub fn processor(&self) -> &P {
        &self.processor
    }

    /// Values the client-side payment form needs.
    pub fn client_settings(&self) -> &ClientSettings {
        &self.client
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Locations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Looks up the configured location.
    pub async fn location_information(&self) -> Result<Location, ProcessorError> {
        self.processor
            .retrieve_location(&self.client.location_id)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    location_id = %self.client.location_id,
                    error = %e,
                    "Failed to retrieve location"
                )
            })
    }

    /// Lists all locations of the merchant.
    pub async fn list_locations(&self) -> Result<Vec<Location>, ProcessorError> {
        self.processor
            .list_locations()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to list locations"))
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Payment workflows
    // ─────────────────────────────────────────────────────────────────────────────

    /// Tops up a wallet: one order line of the requested amount, paid in full.
    ///
    /// The charge is always in the location's currency; `req.currency` is
    /// only compared against it for logging.
    pub async fn top_up(&self, req: TopUpRequest) -> Result<TopUpOutcome, AppError> {
        require_token(&req.nonce, "nonce")?;
        if req.amount <= 0 {
            return Err(AppError::BadRequest("Amount must be positive".into()));
        }
        if req.name.trim().is_empty() {
            return Err(AppError::BadRequest("Item name cannot be empty".into()));
        }

        let outcome: Result<Payment, ProcessorError> = async {
            let location = self.location_information().await?;
            if !req.currency.eq_ignore_ascii_case(location.currency.as_str()) {
                tracing::warn!(
                    requested = %req.currency,
                    charged = %location.currency,
                    "Top-up currency differs from location currency; charging in location currency"
                );
            }

            let price = Money::new(req.amount, location.currency)
                .map_err(|e| ProcessorError::Decode(e.to_string()))?;
            let order = Order::single_item(&location.id, OrderLineItem::single(&req.name, price));

            self.order_and_pay(order, price, req.nonce.clone()).await
        }
        .await;

        Ok(match outcome {
            Ok(payment) => TopUpOutcome::Completed(payment),
            Err(e) => TopUpOutcome::Failed(failure("wallet top-up", &e)),
        })
    }

    /// Charges the fixed checkout item against `req.nonce`.
    pub async fn charge_for_checkout(
        &self,
        req: CheckoutRequest,
    ) -> Result<PaymentResult, AppError> {
        require_token(&req.nonce, "nonce")?;
        let price = Money::new(self.charges.item_amount, self.charges.item_currency)?;

        let outcome: Result<Payment, ProcessorError> = async {
            // Only the id is used; the fixed item keeps its own currency.
            let location = self.location_information().await?;
            let order = Order::single_item(
                &location.id,
                OrderLineItem::single(&self.charges.item_name, price),
            );

            self.order_and_pay(order, price, req.nonce.clone()).await
        }
        .await;

        Ok(match outcome {
            Ok(_) => PaymentResult::success(),
            Err(e) => failure("checkout", &e),
        })
    }

    /// Charges the fixed token amount, in the location's currency, without an order.
    pub async fn process_payment(&self, req: TokenRequest) -> Result<PaymentResult, AppError> {
        require_token(&req.token, "token")?;

        let outcome: Result<Payment, ProcessorError> = async {
            let location = self.location_information().await?;
            let amount_money = Money::new(self.charges.token_amount, location.currency)
                .map_err(|e| ProcessorError::Decode(e.to_string()))?;

            self.processor
                .create_payment(CreatePaymentRequest {
                    source_id: req.token.clone(),
                    idempotency_key: new_idempotency_key(),
                    amount_money,
                    order_id: None,
                    autocomplete: None,
                    location_id: None,
                })
                .await
        }
        .await;

        Ok(match outcome {
            Ok(payment) => {
                tracing::info!(payment_id = %payment.id, status = %payment.status, "Payment created");
                PaymentResult::success()
            }
            Err(e) => failure("token payment", &e),
        })
    }

    /// Creates `order`, then a captured payment for its total.
    ///
    /// The payment starts only after the order exists. `fallback_total` is
    /// charged if the processor does not report an order total.
    async fn order_and_pay(
        &self,
        order: Order,
        fallback_total: Money,
        source_id: String,
    ) -> Result<Payment, ProcessorError> {
        tracing::info!(location_id = %order.location_id, "Creating order");
        let created = self
            .processor
            .create_order(CreateOrderRequest {
                order,
                idempotency_key: new_idempotency_key(),
            })
            .await?;

        let order_id = created
            .id
            .ok_or_else(|| ProcessorError::Decode("created order has no id".into()))?;
        let amount_money = created.total_money.unwrap_or(fallback_total);
        tracing::info!(%order_id, total = %amount_money, "Order created");

        let payment = self
            .processor
            .create_payment(CreatePaymentRequest {
                source_id,
                idempotency_key: new_idempotency_key(),
                amount_money,
                order_id: Some(order_id),
                autocomplete: Some(true),
                location_id: None,
            })
            .await?;

        tracing::info!(payment_id = %payment.id, status = %payment.status, "Payment created");
        Ok(payment)
    }
}

fn require_token(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} cannot be empty", field)));
    }
    Ok(())
}

/// Logs a failed workflow and turns it into a client-facing result.
fn failure(workflow: &str, err: &ProcessorError) -> PaymentResult {
    let errors = err.errors();
    tracing::error!(
        workflow,
        error = %err,
        errors = ?errors,
        status_code = ?err.status_code(),
        "Failed to make the request"
    );
    PaymentResult::failure(errors)
}
