//! Foundation types for the roll printer: the validated document model,
//! lenient monetary amounts, and the fixed-locale number formatter.

pub mod amount;
pub mod document;
pub mod error;
pub mod number;
mod record;

pub use amount::Amount;
pub use document::{
    CompanyIdentity, DebtStatement, Document, DocumentKind, Invoice, LineItem, SaleReceipt,
};
pub use error::ModelError;
pub use number::{format_number, format_quantity};
