//! Drives the SDK against the real router served on a local port.

use async_trait::async_trait;

use checkout_client::{CheckoutClient, ClientError};
use checkout_hex::{ChargeSettings, CheckoutService, inbound::HttpServer};
use checkout_types::{
    ClientSettings, CreateOrderRequest, CreatePaymentRequest, Currency, ErrorDetail, Location,
    Order, Payment, PaymentProcessor, PaymentStatus, ProcessorError, TopUpOutcome,
};

/// Accepts every token except `tok_invalid`.
struct DemoProcessor;

#[async_trait]
impl PaymentProcessor for DemoProcessor {
    async fn retrieve_location(&self, location_id: &str) -> Result<Location, ProcessorError> {
        Ok(Location::new(location_id, Currency::IDR))
    }

    async fn list_locations(&self) -> Result<Vec<Location>, ProcessorError> {
        Ok(vec![Location::new("LOC_1", Currency::IDR)])
    }

    async fn create_order(&self, req: CreateOrderRequest) -> Result<Order, ProcessorError> {
        let mut order = req.order;
        order.id = Some("order_1".into());
        order.total_money = Some(order.line_items[0].base_price_money);
        Ok(order)
    }

    async fn create_payment(&self, req: CreatePaymentRequest) -> Result<Payment, ProcessorError> {
        if req.source_id == "tok_invalid" {
            return Err(ProcessorError::Api {
                status: 402,
                message: "Card declined".into(),
                errors: vec![ErrorDetail::new("PAYMENT_METHOD_ERROR", "CARD_DECLINED")],
            });
        }
        Ok(Payment {
            id: "pay_1".into(),
            status: "COMPLETED".into(),
            amount_money: req.amount_money,
            total_money: None,
            order_id: req.order_id,
            location_id: None,
            source_type: None,
            receipt_number: None,
            receipt_url: None,
            created_at: None,
            card_details: None,
        })
    }
}

async fn start_server() -> CheckoutClient {
    let client = ClientSettings {
        application_id: "sandbox-sq0idb-test".into(),
        location_id: "LOC_1".into(),
        environment: "sandbox".into(),
    };
    let service = CheckoutService::new(DemoProcessor, client, ChargeSettings::default());
    let router = HttpServer::new(service).router();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    CheckoutClient::new(format!("http://{}", addr))
}

#[tokio::test]
async fn test_health_and_config() {
    let client = start_server().await;

    assert!(client.health().await.unwrap());
    let settings = client.config().await.unwrap();
    assert_eq!(settings.location_id, "LOC_1");
}

#[tokio::test]
async fn test_top_up_decodes_payment() {
    let client = start_server().await;

    let outcome = client
        .top_up("cnon:card-nonce-ok", 1000, "IDR", "Wallet top up")
        .await
        .unwrap();

    match outcome {
        TopUpOutcome::Completed(payment) => {
            assert_eq!(payment.id, "pay_1");
            assert_eq!(payment.amount_money.amount(), 1000);
        }
        TopUpOutcome::Failed(result) => panic!("unexpected failure: {:?}", result),
    }
}

#[tokio::test]
async fn test_top_up_decodes_failure() {
    let client = start_server().await;

    let outcome = client
        .top_up("tok_invalid", 1000, "IDR", "Wallet top up")
        .await
        .unwrap();

    assert!(matches!(outcome, TopUpOutcome::Failed(r) if r.status == PaymentStatus::Failure));
}

#[tokio::test]
async fn test_payment_results() {
    let client = start_server().await;

    assert!(client.process_payment("tok_valid").await.unwrap().is_success());
    assert!(client.charge_for_cookie("tok_valid").await.unwrap().is_success());

    let declined = client.process_payment("tok_invalid").await.unwrap();
    assert_eq!(declined.errors.unwrap()[0].code, "CARD_DECLINED");
}

#[tokio::test]
async fn test_bad_request_surfaces_message() {
    let client = start_server().await;

    let err = client.top_up("", 1000, "IDR", "Wallet top up").await.unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("nonce"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}
