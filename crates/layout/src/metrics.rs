//! Vertical advances, in device pixels, of every block the templates emit.
//!
//! These are the only height constants in the system. Blocks record the
//! advance they were built with and both passes read it from the block.

pub const DOCUMENT_TITLE: u32 = 40;
pub const COMPANY_LINE: u32 = 30;
pub const LEAD_FIELD: u32 = 45;
pub const FIELD: u32 = 35;
pub const TABLE_ROW: u32 = 35;
pub const CURRENCY_NOTE: u32 = 30;
pub const GRAND_TOTAL: u32 = 45;
pub const SECTION_TITLE: u32 = 45;
pub const INVOICE_BANNER: u32 = 40;
pub const SUMMARY_REMAINING: u32 = 40;
pub const THANKS: u32 = 60;

pub const RULE: u32 = 25;
pub const RULE_UNDER_HEADING: u32 = 20;
pub const RULE_INVOICE_OPEN: u32 = 15;
pub const RULE_INVOICE_CLOSE: u32 = 30;

pub const GAP_BEFORE_TABLE: u32 = 10;
pub const GAP_AFTER_INVOICE: u32 = 20;
pub const GAP_FOOTER_TOP: u32 = 10;
pub const GAP_BEFORE_GRAND_TOTAL: u32 = 15;
