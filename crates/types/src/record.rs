//! Wire shapes of the incoming print records, as sent by the sales front end.
//! Lenient scalar decoding lives here; structural shapes are strict.

use crate::Amount;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Any scalar rendered as text; `null` reads as absent.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LooseText(pub String);

impl<'de> Deserialize<'de> for LooseText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(LooseText(s)),
            Value::Number(n) => Ok(LooseText(n.to_string())),
            Value::Bool(b) => Ok(LooseText(b.to_string())),
            other => Err(D::Error::custom(format!("expected text, found {other}"))),
        }
    }
}

pub(crate) fn text_or(value: Option<LooseText>, fallback: &str) -> String {
    value.map(|t| t.0).unwrap_or_else(|| fallback.to_string())
}

/// Truthiness of a flag such as `estCredit`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Truthy(pub bool);

impl<'de> Deserialize<'de> for Truthy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let flag = match Value::deserialize(deserializer)? {
            Value::Null => false,
            Value::Bool(b) => b,
            Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(a) => !a.is_empty(),
            Value::Object(o) => !o.is_empty(),
        };
        Ok(Truthy(flag))
    }
}

/// Item quantity; fractional input truncates toward zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Quantity(pub u64);

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = match Value::deserialize(deserializer)? {
            Value::Null => return Ok(Quantity(0)),
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        match raw {
            Some(v) if v.is_finite() && v >= 0.0 => Ok(Quantity(v.trunc() as u64)),
            Some(v) => Err(D::Error::custom(format!(
                "quantity must be a non-negative number, found {v}"
            ))),
            None => Err(D::Error::custom("quantity must be numeric")),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReceiptRecord {
    pub company_name: Option<LooseText>,
    pub company_info: Option<Vec<LooseText>>,
    pub numero_recu: Option<LooseText>,
    pub transaction_timestamp: Option<LooseText>,
    pub date: Option<LooseText>,
    pub nom_client: Option<LooseText>,
    #[serde(default)]
    pub est_credit: Truthy,
    #[serde(default)]
    pub articles_vendus: Option<Vec<ReceiptArticle>>,
    #[serde(default)]
    pub sous_total: Amount,
    #[serde(default)]
    pub remise_vente: Amount,
    #[serde(default)]
    pub frais_livraison: Amount,
    #[serde(default)]
    pub frais_travail: Amount,
    #[serde(default)]
    pub total: Amount,
    #[serde(default)]
    pub montant_paye: Amount,
    #[serde(default)]
    pub reste_a_payer: Amount,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReceiptArticle {
    pub nom_produit: Option<LooseText>,
    #[serde(default)]
    pub quantite: Quantity,
    #[serde(default)]
    pub prix_unitaire: Amount,
    #[serde(default)]
    pub total: Amount,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DebtRecord {
    pub company_name: Option<LooseText>,
    pub company_info: Option<Vec<LooseText>>,
    pub client_name: Option<LooseText>,
    pub print_date: Option<LooseText>,
    #[serde(default)]
    pub invoices: Option<Vec<InvoiceRecord>>,
    #[serde(default)]
    pub total_remaining: Amount,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InvoiceRecord {
    pub sale_id: Option<LooseText>,
    pub date: Option<LooseText>,
    #[serde(default)]
    pub items: Option<Vec<InvoiceItemRecord>>,
    #[serde(default)]
    pub delivery_price: Amount,
    #[serde(default)]
    pub labor_cost: Amount,
    #[serde(default)]
    pub total: Amount,
    #[serde(default)]
    pub remaining: Amount,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InvoiceItemRecord {
    pub product_name: Option<LooseText>,
    #[serde(default)]
    pub quantity: Quantity,
    #[serde(default)]
    pub unit_price: Amount,
    #[serde(default)]
    pub total_price: Amount,
}
