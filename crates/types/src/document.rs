//! The validated, read-only document model.
//!
//! A [`Document`] is built once per print request from the loosely-typed
//! incoming record. Every optional field is resolved to its default here, so
//! the layout and render passes only ever read fully-populated values.

use crate::record::{self, DebtRecord, InvoiceRecord, ReceiptRecord, text_or};
use crate::{Amount, ModelError};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

const NOT_AVAILABLE: &str = "N/A";

const RECEIPT_COMPANY_NAME: &str = "مؤسسة بوطويل لبيع مواد البناء";
const RECEIPT_COMPANY_LINES: [&str; 2] = [
    "العنوان: جيجل، الشقفة، مزوارة",
    "الهاتف: 0660091466",
];
const STATEMENT_COMPANY_NAME: &str = "مؤسسة بوطويل";

/// The `type` discriminator of an incoming record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Receipt,
    DebtSummary,
    DebtInvoices,
}

impl DocumentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::Receipt => "receipt",
            DocumentKind::DebtSummary => "debt_summary",
            DocumentKind::DebtInvoices => "debt_invoices",
        }
    }
}

impl FromStr for DocumentKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "receipt" => Ok(DocumentKind::Receipt),
            "debt_summary" => Ok(DocumentKind::DebtSummary),
            "debt_invoices" => Ok(DocumentKind::DebtInvoices),
            other => Err(ModelError::UnsupportedDocumentType(other.to_string())),
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name and ordered address/contact lines printed at the top of every document.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyIdentity {
    pub name: String,
    pub lines: Vec<String>,
}

impl CompanyIdentity {
    fn resolve(
        name: Option<record::LooseText>,
        lines: Option<Vec<record::LooseText>>,
        default_name: &str,
        default_lines: &[&str],
    ) -> Self {
        Self {
            name: text_or(name, default_name),
            lines: match lines {
                Some(lines) => lines.into_iter().map(|l| l.0).collect(),
                None => default_lines.iter().map(|l| l.to_string()).collect(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub product_name: String,
    pub quantity: u64,
    pub unit_price: Amount,
    pub line_total: Amount,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: String,
    pub date: String,
    /// Only printed by the detailed statement.
    pub items: Vec<LineItem>,
    pub delivery_cost: Amount,
    pub labor_cost: Amount,
    pub total: Amount,
    pub remaining: Amount,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaleReceipt {
    pub company: CompanyIdentity,
    pub receipt_number: String,
    pub timestamp: String,
    pub client_name: String,
    pub is_credit: bool,
    pub items: Vec<LineItem>,
    pub subtotal: Amount,
    pub discount: Amount,
    pub delivery_cost: Amount,
    pub labor_cost: Amount,
    pub total: Amount,
    pub paid: Amount,
    pub remaining: Amount,
}

/// A customer's outstanding invoices; printed either as a summary or in detail.
#[derive(Debug, Clone, PartialEq)]
pub struct DebtStatement {
    pub company: CompanyIdentity,
    pub client_name: String,
    pub print_date: String,
    pub invoices: Vec<Invoice>,
    pub total_remaining: Amount,
}

impl DebtStatement {
    pub fn invoices_total(&self) -> Amount {
        Amount::sum(self.invoices.iter().map(|inv| &inv.total))
    }

    pub fn labor_total(&self) -> Amount {
        Amount::sum(self.invoices.iter().map(|inv| &inv.labor_cost))
    }

    pub fn delivery_total(&self) -> Amount {
        Amount::sum(self.invoices.iter().map(|inv| &inv.delivery_cost))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    SaleReceipt(SaleReceipt),
    DebtSummary(DebtStatement),
    DebtDetail(DebtStatement),
}

impl Document {
    /// Validates an incoming record. A missing `type` means a sale receipt.
    pub fn from_value(value: &Value) -> Result<Self, ModelError> {
        let object = value.as_object().ok_or_else(|| {
            ModelError::MalformedInput("print record must be a JSON object".to_string())
        })?;

        let kind = match object.get("type") {
            None | Some(Value::Null) => DocumentKind::Receipt,
            Some(Value::String(s)) => s.parse()?,
            Some(other) => {
                return Err(ModelError::MalformedInput(format!(
                    "'type' must be a string, found {other}"
                )));
            }
        };

        Self::from_value_as(kind, value)
    }

    /// Validates a record whose kind has already been decided.
    pub fn from_value_as(kind: DocumentKind, value: &Value) -> Result<Self, ModelError> {
        match kind {
            DocumentKind::Receipt => {
                let record: ReceiptRecord = serde_json::from_value(value.clone())?;
                Ok(Document::SaleReceipt(record.into()))
            }
            DocumentKind::DebtSummary => {
                let record: DebtRecord = serde_json::from_value(value.clone())?;
                Ok(Document::DebtSummary(record.into()))
            }
            DocumentKind::DebtInvoices => {
                let record: DebtRecord = serde_json::from_value(value.clone())?;
                Ok(Document::DebtDetail(record.into()))
            }
        }
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::SaleReceipt(_) => DocumentKind::Receipt,
            Document::DebtSummary(_) => DocumentKind::DebtSummary,
            Document::DebtDetail(_) => DocumentKind::DebtInvoices,
        }
    }

    pub fn company(&self) -> &CompanyIdentity {
        match self {
            Document::SaleReceipt(r) => &r.company,
            Document::DebtSummary(s) | Document::DebtDetail(s) => &s.company,
        }
    }
}

impl From<ReceiptRecord> for SaleReceipt {
    fn from(r: ReceiptRecord) -> Self {
        let timestamp = r.transaction_timestamp.or(r.date);
        Self {
            company: CompanyIdentity::resolve(
                r.company_name,
                r.company_info,
                RECEIPT_COMPANY_NAME,
                &RECEIPT_COMPANY_LINES,
            ),
            receipt_number: text_or(r.numero_recu, NOT_AVAILABLE),
            timestamp: text_or(timestamp, NOT_AVAILABLE),
            client_name: text_or(r.nom_client, NOT_AVAILABLE),
            is_credit: r.est_credit.0,
            items: r
                .articles_vendus
                .unwrap_or_default()
                .into_iter()
                .map(|a| LineItem {
                    product_name: text_or(a.nom_produit, ""),
                    quantity: a.quantite.0,
                    unit_price: a.prix_unitaire,
                    line_total: a.total,
                })
                .collect(),
            subtotal: r.sous_total,
            discount: r.remise_vente,
            delivery_cost: r.frais_livraison,
            labor_cost: r.frais_travail,
            total: r.total,
            paid: r.montant_paye,
            remaining: r.reste_a_payer,
        }
    }
}

impl From<DebtRecord> for DebtStatement {
    fn from(r: DebtRecord) -> Self {
        Self {
            company: CompanyIdentity::resolve(
                r.company_name,
                r.company_info,
                STATEMENT_COMPANY_NAME,
                &[],
            ),
            client_name: text_or(r.client_name, NOT_AVAILABLE),
            print_date: text_or(r.print_date, NOT_AVAILABLE),
            invoices: r
                .invoices
                .unwrap_or_default()
                .into_iter()
                .map(Invoice::from)
                .collect(),
            total_remaining: r.total_remaining,
        }
    }
}

impl From<InvoiceRecord> for Invoice {
    fn from(r: InvoiceRecord) -> Self {
        Self {
            id: text_or(r.sale_id, NOT_AVAILABLE),
            date: text_or(r.date, NOT_AVAILABLE),
            items: r
                .items
                .unwrap_or_default()
                .into_iter()
                .map(|i| LineItem {
                    product_name: text_or(i.product_name, ""),
                    quantity: i.quantity.0,
                    unit_price: i.unit_price,
                    line_total: i.total_price,
                })
                .collect(),
            delivery_cost: r.delivery_price,
            labor_cost: r.labor_cost,
            total: r.total,
            remaining: r.remaining,
        }
    }
}
