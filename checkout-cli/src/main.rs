//! Checkout CLI
//!
//! Command-line interface for the checkout gateway API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use checkout_client::CheckoutClient;
use checkout_types::{PaymentResult, TopUpOutcome};

#[derive(Parser)]
#[command(name = "checkout")]
#[command(author, version, about = "Checkout gateway CLI client", long_about = None)]
struct Cli {
    /// Base URL of the checkout gateway
    #[arg(
        long,
        env = "CHECKOUT_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Top up a wallet
    TopUp {
        /// Payment-method token from the payment form
        #[arg(long)]
        nonce: String,
        /// Amount in minor units
        #[arg(long)]
        amount: i64,
        /// Requested currency (the location currency is charged)
        #[arg(long, default_value = "IDR")]
        currency: String,
        /// Line item label
        #[arg(long, default_value = "Wallet top up")]
        name: String,
    },
    /// Buy the fixed checkout item
    Cookie {
        #[arg(long)]
        nonce: String,
    },
    /// Charge the fixed amount against a token
    Pay {
        #[arg(long)]
        token: String,
    },
    /// Show the configured location
    Location,
    /// List all merchant locations
    Locations,
    /// Show payment-form settings
    Config,
    /// Check API health
    Health,
}

fn print_result(result: &PaymentResult) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    if !result.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = CheckoutClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::TopUp {
            nonce,
            amount,
            currency,
            name,
        } => match client.top_up(&nonce, amount, &currency, &name).await? {
            TopUpOutcome::Completed(payment) => {
                println!("{}", serde_json::to_string_pretty(&payment)?);
            }
            TopUpOutcome::Failed(result) => print_result(&result)?,
        },

        Commands::Cookie { nonce } => {
            let result = client.charge_for_cookie(&nonce).await?;
            print_result(&result)?;
        }

        Commands::Pay { token } => {
            let result = client.process_payment(&token).await?;
            print_result(&result)?;
        }

        Commands::Location => {
            let location = client.location().await?;
            println!("{}", serde_json::to_string_pretty(&location)?);
        }

        Commands::Locations => {
            let locations = client.locations().await?;
            println!("{}", serde_json::to_string_pretty(&locations)?);
        }

        Commands::Config => {
            let settings = client.config().await?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }

    Ok(())
}
