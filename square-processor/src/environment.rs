//! Square environment selection.

use std::fmt;
use std::str::FromStr;

/// Which Square deployment the gateway talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareEnvironment {
    Sandbox,
    Production,
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown Square environment {0:?}: expected \"sandbox\" or \"production\"")]
pub struct UnknownEnvironment(pub String);

impl SquareEnvironment {
    /// Base URL of the Connect API for this environment.
    pub fn base_url(&self) -> &'static str {
        match self {
            SquareEnvironment::Sandbox => "https://connect.squareupsandbox.com",
            SquareEnvironment::Production => "https://connect.squareup.com",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SquareEnvironment::Sandbox => "sandbox",
            SquareEnvironment::Production => "production",
        }
    }
}

impl FromStr for SquareEnvironment {
    type Err = UnknownEnvironment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandbox" => Ok(SquareEnvironment::Sandbox),
            "production" => Ok(SquareEnvironment::Production),
            _ => Err(UnknownEnvironment(s.to_string())),
        }
    }
}

impl fmt::Display for SquareEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
