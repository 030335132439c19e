//! # Checkout Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment (refuses to start if incomplete)
//! - Initialize the Square processor adapter
//! - Create the checkout service
//! - Start the HTTP server

mod config;

use opentelemetry::global;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use checkout_hex::{CheckoutService, inbound::HttpServer};
use checkout_types::ClientSettings;
use square_processor::SquareClient;

fn init_tracer() -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // Endpoint is read from OTEL_EXPORTER_OTLP_ENDPOINT
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("checkout-gateway"), provider))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // OpenTelemetry export only when a collector is configured
    let otel = match std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT") {
        Ok(_) => Some(init_tracer()?),
        Err(_) => None,
    };
    let telemetry = otel
        .as_ref()
        .map(|(tracer, _)| tracing_opentelemetry::layer().with_tracer(tracer.clone()));

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,checkout_app=debug,checkout_hex=debug,square_processor=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(telemetry)
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting checkout server on port {}", config.port);
    tracing::info!(
        "Using Square {} environment, location {}",
        config.environment,
        config.location_id
    );

    let processor = match &config.base_url {
        Some(url) => {
            tracing::info!("Overriding Square base URL with {}", url);
            SquareClient::with_base_url(url, &config.access_token)?
        }
        None => SquareClient::new(config.environment, &config.access_token)?,
    };

    let client = ClientSettings {
        application_id: config.application_id.clone(),
        location_id: config.location_id.clone(),
        environment: config.environment.to_string(),
    };
    let service = CheckoutService::new(processor, client, config.charges.clone());

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Ensure traces are flushed before exit
    if let Some((_, provider)) = otel {
        let _ = provider.shutdown();
    }
    Ok(())
}
