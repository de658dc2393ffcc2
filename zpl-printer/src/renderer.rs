//! Label renderer
//!
//! Renders label requests into a ZPL command stream via [`ZplBuilder`].

use crate::label::{
    BarcodeElement, LabelRequest, QrCodeElement, SimpleLabelRequest, TextElement,
};
use crate::zpl::ZplBuilder;

// Simple-label auto-layout: fixed left margin, vertical stacking from the
// top. No collision detection; content past the label height runs off the
// printable area.
const SIMPLE_X: u32 = 50;
const SIMPLE_START_Y: u32 = 30;
const TITLE_FONT_SIZE: u32 = 60;
const TITLE_ADVANCE: u32 = 50;
const SUBTITLE_FONT_SIZE: u32 = 45;
const SUBTITLE_ADVANCE: u32 = 40;
const SIMPLE_BARCODE_HEIGHT: u32 = 60;
const SIMPLE_BARCODE_WIDTH: u32 = 2;
const BARCODE_ADVANCE: u32 = 90;
const SIMPLE_QR_SIZE: u32 = 4;

/// Label renderer
///
/// Stateless: every call starts a fresh command buffer, so rendering is
/// deterministic and safe to run concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelRenderer;

impl LabelRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render a full label request
    ///
    /// Elements render in fixed category order: texts, barcodes, QR codes,
    /// lines. Within a category, caller order is kept.
    pub fn render(&self, request: &LabelRequest) -> String {
        let mut b = ZplBuilder::new(request.label_width_mm, request.label_height_mm);

        for text in &request.texts {
            b.text(text);
        }
        for barcode in &request.barcodes {
            b.barcode(barcode);
        }
        for qr in &request.qr_codes {
            b.qr_code(qr);
        }
        for line in &request.lines {
            b.line(line);
        }

        b.finish(request.copies)
    }

    /// Render a simplified label request
    ///
    /// Stacks title, optional subtitle, optional barcode and optional QR
    /// code top to bottom at a fixed left margin.
    pub fn render_simple(&self, request: &SimpleLabelRequest) -> String {
        let (width_mm, height_mm) = match request.label_size.dimensions_mm() {
            Some(dims) => dims,
            None => (
                request.custom_width_mm.unwrap_or(60),
                request.custom_height_mm.unwrap_or(40),
            ),
        };

        let mut b = ZplBuilder::new(width_mm, height_mm);
        let mut current_y = SIMPLE_START_Y;

        b.text(&TextElement {
            x: SIMPLE_X,
            y: current_y,
            text: request.title.clone(),
            font_size: TITLE_FONT_SIZE,
            bold: true,
            alignment: Default::default(),
        });
        current_y += TITLE_ADVANCE;

        if let Some(subtitle) = &request.subtitle {
            b.text(&TextElement {
                x: SIMPLE_X,
                y: current_y,
                text: subtitle.clone(),
                font_size: SUBTITLE_FONT_SIZE,
                bold: false,
                alignment: Default::default(),
            });
            current_y += SUBTITLE_ADVANCE;
        }

        if let Some(barcode_data) = &request.barcode_data {
            b.barcode(&BarcodeElement {
                x: SIMPLE_X,
                y: current_y,
                data: barcode_data.clone(),
                barcode_type: request.barcode_type,
                height: SIMPLE_BARCODE_HEIGHT,
                width: SIMPLE_BARCODE_WIDTH,
                show_text: true,
            });
            current_y += BARCODE_ADVANCE;
        }

        if let Some(qr_data) = &request.qr_data {
            b.qr_code(&QrCodeElement {
                x: SIMPLE_X,
                y: current_y,
                data: qr_data.clone(),
                size: SIMPLE_QR_SIZE,
            });
        }

        b.finish(request.copies)
    }
}
