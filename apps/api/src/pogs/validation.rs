//! Required-field checks for create/update bodies.
//!
//! A field counts as missing when it is absent or falsy: `null`, `false`,
//! `0`, `NaN` and `""`. A price of zero is therefore rejected.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::models::pog::PogFields;

/// Raw create/update body. Absent keys deserialize to `Value::Null`.
#[derive(Debug, Default, Deserialize)]
pub struct PogPayload {
    #[serde(default)]
    pub pogs_name: Value,
    #[serde(default)]
    pub ticker_symbol: Value,
    #[serde(default)]
    pub price: Value,
    #[serde(default)]
    pub color: Value,
}

/// `Missing` is a client error. `Invalid` is a present value the `pogs`
/// columns cannot hold, which fails the way the write statement would.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("missing required field '{0}'")]
    Missing(&'static str),
    #[error("field '{0}' has an unusable value")]
    Invalid(&'static str),
}

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl PogPayload {
    /// Checks all four fields are present, then coerces them into bindable columns.
    pub fn into_fields(self) -> Result<PogFields, FieldError> {
        let named = [
            ("pogs_name", &self.pogs_name),
            ("ticker_symbol", &self.ticker_symbol),
            ("price", &self.price),
            ("color", &self.color),
        ];
        for (name, value) in named {
            if !is_truthy(value) {
                return Err(FieldError::Missing(name));
            }
        }

        Ok(PogFields {
            pogs_name: as_text("pogs_name", self.pogs_name)?,
            ticker_symbol: as_text("ticker_symbol", self.ticker_symbol)?,
            price: as_price(self.price)?,
            color: as_text("color", self.color)?,
        })
    }
}

fn as_text(name: &'static str, value: Value) -> Result<String, FieldError> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(FieldError::Invalid(name)),
    }
}

fn as_price(value: Value) -> Result<f64, FieldError> {
    let price = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    price
        .filter(|p| p.is_finite())
        .ok_or(FieldError::Invalid("price"))
}
