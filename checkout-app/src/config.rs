//! Configuration loading from environment.

use std::env;

use checkout_hex::ChargeSettings;
use checkout_types::Currency;
use square_processor::SquareEnvironment;

const ACCESS_TOKEN: &str = "SQUARE_ACCESS_TOKEN";
const APPLICATION_ID: &str = "SQUARE_APPLICATION_ID";
const LOCATION_ID: &str = "SQUARE_LOCATION_ID";
const ENVIRONMENT: &str = "ENVIRONMENT";

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub access_token: String,
    pub application_id: String,
    pub location_id: String,
    pub environment: SquareEnvironment,
    /// Overrides the environment's Connect URL
    pub base_url: Option<String>,
    pub charges: ChargeSettings,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Loads configuration from any name → value lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let environment = required(&lookup, ENVIRONMENT)?;
        let environment: SquareEnvironment = environment
            .parse()
            .map_err(|e| anyhow::anyhow!("{} is invalid: {}", ENVIRONMENT, e))?;
        let application_id = required(&lookup, APPLICATION_ID)?;
        let location_id = required(&lookup, LOCATION_ID)?;
        let access_token = required(&lookup, ACCESS_TOKEN)?;

        let port = optional(&lookup, "PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()?;
        let base_url = optional(&lookup, "SQUARE_BASE_URL");

        let defaults = ChargeSettings::default();
        let charges = ChargeSettings {
            item_name: optional(&lookup, "CHECKOUT_ITEM_NAME").unwrap_or(defaults.item_name),
            item_amount: amount(&lookup, "CHECKOUT_AMOUNT", defaults.item_amount)?,
            item_currency: match optional(&lookup, "CHECKOUT_CURRENCY") {
                Some(code) => code
                    .parse::<Currency>()
                    .map_err(|e| anyhow::anyhow!("CHECKOUT_CURRENCY is invalid: {}", e))?,
                None => defaults.item_currency,
            },
            token_amount: amount(&lookup, "PROCESS_PAYMENT_AMOUNT", defaults.token_amount)?,
        };

        Ok(Self {
            port,
            access_token,
            application_id,
            location_id,
            environment,
            base_url,
            charges,
        })
    }
}

fn optional(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name).filter(|v| !v.trim().is_empty())
}

fn required(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> anyhow::Result<String> {
    optional(lookup, name)
        .ok_or_else(|| anyhow::anyhow!("The {} environment variable must be set", name))
}

fn amount(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: i64,
) -> anyhow::Result<i64> {
    let Some(raw) = optional(lookup, name) else {
        return Ok(default);
    };
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("{} must be a whole number of minor units", name))?;
    if value <= 0 {
        anyhow::bail!("{} must be positive", name);
    }
    Ok(value)
}
