//! Block templates for the three document variants.
//!
//! Inclusion rules (the optional cost lines, the credit-only remaining line,
//! the footer shares) are evaluated here and nowhere else.

use crate::block::{Block, RowCells, RowKind};
use crate::config::{ColumnOffsets, Labels, LayoutConfig};
use crate::fonts::FontRole;
use crate::metrics;
use rollprint_types::{
    Amount, CompanyIdentity, DebtStatement, Document, DocumentKind, Invoice, LineItem,
    SaleReceipt, format_number, format_quantity,
};

/// The ordered blocks of one concrete document.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    kind: DocumentKind,
    blocks: Vec<Block>,
}

impl Template {
    pub fn for_document(document: &Document, config: &LayoutConfig) -> Self {
        let mut builder = TemplateBuilder::new(&config.labels);
        match document {
            Document::SaleReceipt(receipt) => builder.sale_receipt(receipt, config.receipt_columns),
            Document::DebtSummary(statement) => builder.debt_summary(statement),
            Document::DebtDetail(statement) => {
                builder.debt_detail(statement, config.invoice_columns)
            }
        }
        log::debug!(
            "Built {} template with {} blocks.",
            document.kind(),
            builder.blocks.len()
        );
        Self {
            kind: document.kind(),
            blocks: builder.blocks,
        }
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn item_rows(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_item_row()).count()
    }
}

impl<'a> IntoIterator for &'a Template {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

struct TemplateBuilder<'a> {
    labels: &'a Labels,
    blocks: Vec<Block>,
}

impl<'a> TemplateBuilder<'a> {
    fn new(labels: &'a Labels) -> Self {
        Self {
            labels,
            blocks: Vec::new(),
        }
    }

    fn sale_receipt(&mut self, receipt: &SaleReceipt, columns: ColumnOffsets) {
        let labels = self.labels;
        self.company_header(&receipt.company);
        self.rule(metrics::RULE);
        self.field(
            &labels.receipt_number,
            &receipt.receipt_number,
            FontRole::Normal,
            metrics::LEAD_FIELD,
        );
        self.field(&labels.date, &receipt.timestamp, FontRole::Normal, metrics::FIELD);
        self.field(&labels.client, &receipt.client_name, FontRole::Normal, metrics::FIELD);
        let sale_kind = if receipt.is_credit { &labels.credit_sale } else { &labels.cash_sale };
        self.field(&labels.sale_kind, sale_kind, FontRole::Normal, metrics::FIELD);
        self.gap(metrics::GAP_BEFORE_TABLE);
        self.rule(metrics::RULE);

        self.item_table(&receipt.items, columns);
        self.rule(metrics::RULE);

        self.centered(&labels.currency_note, FontRole::Small, metrics::CURRENCY_NOTE);
        self.amount(&labels.subtotal, &receipt.subtotal, FontRole::Normal, metrics::FIELD);
        self.optional_cost(&labels.discount, &receipt.discount);
        self.optional_cost(&labels.delivery_cost, &receipt.delivery_cost);
        self.optional_cost(&labels.labor_cost, &receipt.labor_cost);
        self.amount(&labels.total, &receipt.total, FontRole::Title, metrics::GRAND_TOTAL);
        self.amount(&labels.paid, &receipt.paid, FontRole::Normal, metrics::FIELD);
        if receipt.is_credit {
            self.amount(&labels.remaining, &receipt.remaining, FontRole::Normal, metrics::FIELD);
        }
        self.rule(metrics::RULE);
        self.centered(&labels.thanks, FontRole::Small, metrics::THANKS);
    }

    fn debt_summary(&mut self, statement: &DebtStatement) {
        let labels = self.labels;
        self.statement_header(statement, &labels.summary_title);
        for invoice in &statement.invoices {
            self.field(&labels.invoice_number, &invoice.id, FontRole::NormalBold, metrics::FIELD);
            self.field(&labels.date, &invoice.date, FontRole::Normal, metrics::FIELD);
            self.optional_cost(&labels.delivery_cost, &invoice.delivery_cost);
            self.optional_cost(&labels.labor_cost, &invoice.labor_cost);
            self.amount(&labels.invoice_total, &invoice.total, FontRole::Normal, metrics::FIELD);
            self.amount(
                &labels.remaining,
                &invoice.remaining,
                FontRole::NormalBold,
                metrics::SUMMARY_REMAINING,
            );
            self.rule(metrics::RULE);
        }
        self.statement_footer(statement);
    }

    fn debt_detail(&mut self, statement: &DebtStatement, columns: ColumnOffsets) {
        let labels = self.labels;
        self.statement_header(statement, &labels.detail_title);
        for invoice in &statement.invoices {
            self.invoice_detail(invoice, columns);
        }
        self.statement_footer(statement);
    }

    fn invoice_detail(&mut self, invoice: &Invoice, columns: ColumnOffsets) {
        let labels = self.labels;
        self.centered(
            &labels.invoice_banner(&invoice.id),
            FontRole::NormalBold,
            metrics::INVOICE_BANNER,
        );
        self.field(&labels.date, &invoice.date, FontRole::Normal, metrics::FIELD);
        self.rule(metrics::RULE_INVOICE_OPEN);
        self.item_table(&invoice.items, columns);
        self.rule(metrics::RULE);
        self.optional_cost(&labels.delivery_cost, &invoice.delivery_cost);
        self.optional_cost(&labels.labor_cost, &invoice.labor_cost);
        self.amount(&labels.invoice_total, &invoice.total, FontRole::NormalBold, metrics::FIELD);
        self.amount(
            &labels.invoice_remaining,
            &invoice.remaining,
            FontRole::NormalBold,
            metrics::FIELD,
        );
        self.gap(metrics::GAP_AFTER_INVOICE);
        self.rule(metrics::RULE_INVOICE_CLOSE);
    }

    fn statement_header(&mut self, statement: &DebtStatement, title: &str) {
        let labels = self.labels;
        self.company_header(&statement.company);
        self.rule(metrics::RULE);
        self.field(
            &labels.client,
            &statement.client_name,
            FontRole::NormalBold,
            metrics::LEAD_FIELD,
        );
        self.field(&labels.print_date, &statement.print_date, FontRole::Normal, metrics::FIELD);
        self.rule(metrics::RULE);
        self.centered(title, FontRole::Title, metrics::SECTION_TITLE);
        self.centered(&labels.currency_note, FontRole::Small, metrics::CURRENCY_NOTE);
    }

    fn statement_footer(&mut self, statement: &DebtStatement) {
        let labels = self.labels;
        self.rule(metrics::RULE);
        self.gap(metrics::GAP_FOOTER_TOP);
        self.amount(
            &labels.invoices_total,
            &statement.invoices_total(),
            FontRole::NormalBold,
            metrics::FIELD,
        );
        let labor = statement.labor_total();
        if labor.is_positive() {
            self.amount(&labels.labor_share, &labor, FontRole::Normal, metrics::FIELD);
        }
        let delivery = statement.delivery_total();
        if delivery.is_positive() {
            self.amount(&labels.delivery_share, &delivery, FontRole::Normal, metrics::FIELD);
        }
        self.gap(metrics::GAP_BEFORE_GRAND_TOTAL);
        self.amount(
            &labels.remaining_total,
            &statement.total_remaining,
            FontRole::Title,
            metrics::GRAND_TOTAL,
        );
        self.centered(&labels.thanks, FontRole::Small, metrics::THANKS);
    }

    fn company_header(&mut self, company: &CompanyIdentity) {
        self.centered(&company.name, FontRole::Title, metrics::DOCUMENT_TITLE);
        for line in &company.lines {
            self.centered(line, FontRole::Small, metrics::COMPANY_LINE);
        }
    }

    fn item_table(&mut self, items: &[LineItem], columns: ColumnOffsets) {
        let labels = self.labels;
        self.blocks.push(Block::Row {
            kind: RowKind::Heading,
            cells: RowCells {
                name: labels.column_product.clone(),
                quantity: labels.column_quantity.clone(),
                price: labels.column_price.clone(),
                total: labels.column_total.clone(),
            },
            font: FontRole::NormalBold,
            columns,
            advance: metrics::TABLE_ROW,
        });
        self.rule(metrics::RULE_UNDER_HEADING);
        for item in items {
            self.blocks.push(Block::Row {
                kind: RowKind::Item,
                cells: RowCells {
                    name: item.product_name.clone(),
                    quantity: format_quantity(item.quantity),
                    price: format_number(&item.unit_price),
                    total: format_number(&item.line_total),
                },
                font: FontRole::Normal,
                columns,
                advance: metrics::TABLE_ROW,
            });
        }
    }

    /// A cost line that only appears when the amount is positive.
    fn optional_cost(&mut self, label: &str, amount: &Amount) {
        if amount.is_positive() {
            self.amount(label, amount, FontRole::Normal, metrics::FIELD);
        }
    }

    fn amount(&mut self, label: &str, amount: &Amount, font: FontRole, advance: u32) {
        self.field(label, &format_number(amount), font, advance);
    }

    fn field(&mut self, label: &str, value: &str, font: FontRole, advance: u32) {
        self.blocks.push(Block::LabelValue {
            label: label.to_string(),
            value: value.to_string(),
            font,
            advance,
        });
    }

    fn centered(&mut self, text: &str, font: FontRole, advance: u32) {
        self.blocks.push(Block::Centered {
            text: text.to_string(),
            font,
            advance,
        });
    }

    fn rule(&mut self, advance: u32) {
        self.blocks.push(Block::Rule { advance });
    }

    fn gap(&mut self, advance: u32) {
        self.blocks.push(Block::Gap { advance });
    }
}
