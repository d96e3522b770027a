use crate::error::LayoutError;
use crate::fonts::FontTable;
use serde::{Deserialize, Serialize};

/// Horizontal anchors of the quantity and unit-price columns, measured from
/// the left margin. The product name is always right-aligned at the right
/// margin and the line total left-aligned at the left margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnOffsets {
    pub quantity: u32,
    pub price: u32,
}

impl Default for ColumnOffsets {
    fn default() -> Self {
        Self {
            quantity: 260,
            price: 160,
        }
    }
}

/// Page geometry, fonts, column sets and printed wording for one printer
/// profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Printable roll width in device pixels.
    pub page_width: u32,
    /// Left, right, top and bottom margin in device pixels.
    pub margin: u32,
    pub fonts: FontTable,
    pub labels: Labels,
    pub receipt_columns: ColumnOffsets,
    pub invoice_columns: ColumnOffsets,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_width: 576,
            margin: 20,
            fonts: FontTable::default(),
            labels: Labels::default(),
            receipt_columns: ColumnOffsets::default(),
            invoice_columns: ColumnOffsets::default(),
        }
    }
}

impl LayoutConfig {
    pub fn left(&self) -> u32 {
        self.margin
    }

    pub fn right(&self) -> u32 {
        self.page_width.saturating_sub(self.margin)
    }

    pub fn center(&self) -> u32 {
        self.page_width / 2
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.page_width <= self.margin.saturating_mul(2) {
            return Err(LayoutError::NoPrintableArea {
                width: self.page_width,
                margin: self.margin,
            });
        }
        let printable = self.right() - self.left();
        for (column, offset) in [
            ("receipt quantity", self.receipt_columns.quantity),
            ("receipt price", self.receipt_columns.price),
            ("invoice quantity", self.invoice_columns.quantity),
            ("invoice price", self.invoice_columns.price),
        ] {
            if offset > printable {
                return Err(LayoutError::ColumnOutOfBounds {
                    column,
                    offset,
                    printable,
                });
            }
        }
        for (role, font) in self.fonts.iter() {
            if font.height == 0 {
                return Err(LayoutError::ZeroFontHeight(role.name()));
            }
        }
        Ok(())
    }
}

/// Every fixed piece of wording printed on the documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub receipt_number: String,
    pub date: String,
    pub client: String,
    pub sale_kind: String,
    pub credit_sale: String,
    pub cash_sale: String,
    pub column_product: String,
    pub column_quantity: String,
    pub column_price: String,
    pub column_total: String,
    pub currency_note: String,
    pub subtotal: String,
    pub discount: String,
    pub delivery_cost: String,
    pub labor_cost: String,
    pub total: String,
    pub paid: String,
    pub remaining: String,
    pub thanks: String,
    pub print_date: String,
    pub summary_title: String,
    pub detail_title: String,
    pub invoice_number: String,
    pub invoice_total: String,
    pub invoice_remaining: String,
    /// `{id}` is replaced by the invoice id.
    pub invoice_banner: String,
    pub invoices_total: String,
    pub labor_share: String,
    pub delivery_share: String,
    pub remaining_total: String,
}

impl Labels {
    pub fn invoice_banner(&self, id: &str) -> String {
        self.invoice_banner.replace("{id}", id)
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            receipt_number: "رقم الإيصال".into(),
            date: "التاريخ".into(),
            client: "العميل".into(),
            sale_kind: "نوع البيع".into(),
            credit_sale: "كريدي".into(),
            cash_sale: "نقدي".into(),
            column_product: "المنتج".into(),
            column_quantity: "الكمية".into(),
            column_price: "السعر".into(),
            column_total: "الإجمالي".into(),
            currency_note: "(المبالغ بالدينار الجزائري)".into(),
            subtotal: "المجموع الفرعي".into(),
            discount: "الخصم".into(),
            delivery_cost: "تكلفة التوصيل".into(),
            labor_cost: "تكلفة العمال".into(),
            total: "الإجمالي".into(),
            paid: "المدفوع".into(),
            remaining: "المتبقي".into(),
            thanks: "شكراً لتعاملكم معنا".into(),
            print_date: "تاريخ الطباعة".into(),
            summary_title: "كشف الديون الشامل".into(),
            detail_title: "تفاصيل فواتير الديون".into(),
            invoice_number: "رقم الفاتورة".into(),
            invoice_total: "إجمالي الفاتورة".into(),
            invoice_remaining: "المتبقي من الفاتورة".into(),
            invoice_banner: "--- فاتورة رقم #{id} ---".into(),
            invoices_total: "إجمالي مبلغ الفواتير".into(),
            labor_share: "منها إجمالي العمالة".into(),
            delivery_share: "منها إجمالي النقل".into(),
            remaining_total: "الإجمالي المتبقي الكلي".into(),
        }
    }
}
