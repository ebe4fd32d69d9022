//! Tour instructions renderer
//!
//! Lays the assembled page model out onto US Letter PDF pages: one detail
//! page with the workflow group listings, then the barcode grid pages.

use chrono::Utc;

use crate::document::{DocPage, TourDocument};
use crate::error::DocResult;
use crate::pdf::{Font, PAGE_HEIGHT, PAGE_WIDTH, PdfBuilder};
use crate::workflow::WorkflowGroup;

const MARGIN: f32 = 40.0;
const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;
/// Listing content never descends past this baseline; the page model is
/// fixed at one detail page, so overflow is truncated.
const BOTTOM_GUARD: f32 = 70.0;

const GRID_COLUMNS: usize = 3;
const CELL_WIDTH: f32 = CONTENT_WIDTH / GRID_COLUMNS as f32;
const CELL_HEIGHT: f32 = 126.0;

/// Tour instructions renderer
pub struct InstructionsRenderer;

impl InstructionsRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render a tour document to PDF bytes
    ///
    /// Any failure here fails the whole build; no partial document is
    /// emitted.
    pub fn render(&self, doc: &TourDocument) -> DocResult<Vec<u8>> {
        let mut b = PdfBuilder::new();

        for page in doc.paginate() {
            match page {
                DocPage::Detail => self.render_detail_page(&mut b, doc),
                DocPage::Barcodes { index, total, items } => {
                    self.render_barcode_page(&mut b, index, total, items)?
                }
            }
        }

        let bytes = b.build();
        tracing::debug!(
            tour = doc.meta.tour_numeric_id,
            bytes = bytes.len(),
            "Tour instructions rendered"
        );
        Ok(bytes)
    }

    /// Render the detail page: header, summary block, workflow groups
    fn render_detail_page(&self, b: &mut PdfBuilder, doc: &TourDocument) {
        b.start_page();
        let mut y = PAGE_HEIGHT - 60.0;

        // Header
        b.text(
            Font::HelveticaBold,
            20.0,
            MARGIN,
            y,
            &format!("TOUR INSTRUCTIONS #{}", doc.meta.tour_numeric_id),
        );
        y -= 22.0;
        let time = doc.meta.time.as_deref().unwrap_or("N/A");
        b.text(
            Font::Helvetica,
            12.0,
            MARGIN,
            y,
            &format!("Date: {} at {}", doc.meta.formatted_date(), time),
        );
        y -= 16.0;
        let warehouse = match &doc.meta.warehouse_code {
            Some(code) => format!("Warehouse: {} ({})", doc.meta.warehouse_name, code),
            None => format!("Warehouse: {}", doc.meta.warehouse_name),
        };
        b.text(Font::Helvetica, 12.0, MARGIN, y, &warehouse);
        y -= 16.0;
        b.text(
            Font::Helvetica,
            12.0,
            MARGIN,
            y,
            &format!("Host: {}", doc.meta.host_name),
        );
        y -= 10.0;
        b.fill_rect(MARGIN, y, CONTENT_WIDTH, 1.5, 0.0);
        y -= 20.0;

        y = self.render_summary_block(b, doc, y);

        for group in &doc.groups {
            if y < BOTTOM_GUARD {
                break;
            }
            y = self.render_group(b, group, y);
        }

        self.render_footer(
            b,
            &format!(
                "Generated on {} | ShipBots Tour Management System",
                Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
            ),
        );
    }

    /// Render the order totals block, returns the new cursor position
    fn render_summary_block(&self, b: &mut PdfBuilder, doc: &TourDocument, top: f32) -> f32 {
        let mut lines = vec![format!("Total Participants: {}", doc.meta.participant_count)];
        if let Some(total) = doc.counters.total_orders {
            lines.push(format!("Total Orders: {total}"));
        }
        if let Some(success) = doc.counters.success_count {
            lines.push(format!("Successful: {success}"));
        }
        // Failure line omitted when zero
        if let Some(failed) = doc.counters.failed_count
            && failed > 0
        {
            lines.push(format!("Failed: {failed}"));
        }

        let block_height = lines.len() as f32 * 13.0 + 10.0;
        b.fill_rect(MARGIN, top - block_height, CONTENT_WIDTH, block_height, 0.97);

        let mut y = top - 14.0;
        for line in &lines {
            b.text(Font::Helvetica, 9.0, MARGIN + 10.0, y, line);
            y -= 13.0;
        }
        top - block_height - 15.0
    }

    /// Render one workflow group section, returns the new cursor position
    fn render_group(&self, b: &mut PdfBuilder, group: &WorkflowGroup, top: f32) -> f32 {
        let mut y = top;

        b.fill_rect(MARGIN, y - 4.0, CONTENT_WIDTH, 16.0, 0.94);
        b.text(Font::HelveticaBold, 11.0, MARGIN + 6.0, y, &group.name.to_uppercase());
        y -= 20.0;

        for order in &group.orders {
            if y < BOTTOM_GUARD {
                break;
            }
            b.text(
                Font::HelveticaBold,
                10.0,
                MARGIN + 10.0,
                y,
                &format!("Order #{}", order.order_number),
            );
            y -= 12.0;
            b.text(Font::Helvetica, 9.0, MARGIN + 24.0, y, &order.recipient);
            y -= 11.0;
            let skus = if order.skus.is_empty() {
                "SKUs: None".to_string()
            } else {
                format!("SKUs: {}", order.skus.join(", "))
            };
            b.text(Font::Courier, 9.0, MARGIN + 24.0, y, &skus);
            y -= 16.0;
        }

        y - 6.0
    }

    /// Render one barcode grid page
    fn render_barcode_page(
        &self,
        b: &mut PdfBuilder,
        index: usize,
        total: usize,
        items: &[crate::barcode::Barcode],
    ) -> DocResult<()> {
        b.start_page();
        let mut y = PAGE_HEIGHT - 60.0;

        // Page suffix only when the barcodes span more than one page
        let title = if total > 1 {
            format!("SKU BARCODES - SCAN REFERENCE (Page {index} of {total})")
        } else {
            "SKU BARCODES - SCAN REFERENCE".to_string()
        };
        b.text(Font::HelveticaBold, 16.0, MARGIN, y, &title);
        y -= 18.0;
        b.text(
            Font::Helvetica,
            10.0,
            MARGIN,
            y,
            "Use these barcodes to demonstrate scanning in ShipHero",
        );
        y -= 10.0;
        b.fill_rect(MARGIN, y, CONTENT_WIDTH, 1.5, 0.0);

        let grid_top = y - 16.0;
        for (i, barcode) in items.iter().enumerate() {
            let col = i % GRID_COLUMNS;
            let row = i / GRID_COLUMNS;
            let x = MARGIN + col as f32 * CELL_WIDTH;
            let top = grid_top - row as f32 * CELL_HEIGHT;
            self.render_cell(b, barcode, x, top)?;
        }

        self.render_footer(b, "Barcode Format: CODE128 | Optimized for scanning");
        Ok(())
    }

    /// Render one barcode cell: image (when present), SKU label, usage line
    fn render_cell(
        &self,
        b: &mut PdfBuilder,
        barcode: &crate::barcode::Barcode,
        x: f32,
        top: f32,
    ) -> DocResult<()> {
        cell_border(b, x + 4.0, top - CELL_HEIGHT + 8.0, CELL_WIDTH - 8.0, CELL_HEIGHT - 8.0);

        if let Some(png) = &barcode.image {
            let raster = image::load_from_memory(png)?.to_luma8();
            let (width, height) = raster.dimensions();
            let handle = b.add_gray_image(width, height, raster.into_raw());
            b.draw_image(handle, x + 14.0, top - 72.0, CELL_WIDTH - 28.0, 58.0);
        }

        let center_x = x + CELL_WIDTH / 2.0;
        b.text_centered(Font::Courier, 10.0, center_x, top - 88.0, &barcode.sku);

        let plural = if barcode.usage_count == 1 { "order" } else { "orders" };
        b.text_centered(
            Font::Helvetica,
            7.0,
            center_x,
            top - 100.0,
            &format!("Used in {} {}", barcode.usage_count, plural),
        );
        Ok(())
    }

    /// Centered page footer above the bottom margin
    fn render_footer(&self, b: &mut PdfBuilder, text: &str) {
        b.fill_rect(MARGIN, 56.0, CONTENT_WIDTH, 0.75, 0.85);
        b.text_centered(Font::Helvetica, 8.0, PAGE_WIDTH / 2.0, 44.0, text);
    }
}

/// Light outline around one barcode cell
fn cell_border(b: &mut PdfBuilder, x: f32, y: f32, w: f32, h: f32) {
    const THICKNESS: f32 = 0.75;
    const GRAY: f32 = 0.87;
    b.fill_rect(x, y + h - THICKNESS, w, THICKNESS, GRAY);
    b.fill_rect(x, y, w, THICKNESS, GRAY);
    b.fill_rect(x, y, THICKNESS, h, GRAY);
    b.fill_rect(x + w - THICKNESS, y, THICKNESS, h, GRAY);
}

impl Default for InstructionsRenderer {
    fn default() -> Self {
        Self::new()
    }
}
