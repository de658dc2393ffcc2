//! ZPL command builder
//!
//! Provides a fluent API for building ZPL label formats as a plain-text
//! command stream.

use crate::encoding::{hex_escape, needs_hex_escape};
use crate::label::{BarcodeElement, BarcodeType, LineElement, QrCodeElement, TextElement};

/// Dots per millimeter on a 203 dpi print head
pub const DOTS_PER_MM: u32 = 8;

/// Convert millimeters to printer dots
pub fn mm_to_dots(mm: u32) -> u32 {
    mm * DOTS_PER_MM
}

/// ZPL command builder
///
/// Accumulates one label format as an ordered command list. Single use:
/// build one format, [`finish`](ZplBuilder::finish) it, start fresh for the
/// next one.
pub struct ZplBuilder {
    commands: Vec<String>,
}

impl ZplBuilder {
    /// Start a new label format
    ///
    /// Emits the fixed header block. Firmware is sensitive to the order:
    /// format start, text encoding, media tracking, print width, label
    /// length, home position.
    pub fn new(width_mm: u32, height_mm: u32) -> Self {
        let width_dots = mm_to_dots(width_mm);
        let height_dots = mm_to_dots(height_mm);

        let commands = vec![
            // ^XA - Format start
            "^XA".to_string(),
            // ^CI28 - UTF-8 encoding (accents, ñ, CJK)
            "^CI28".to_string(),
            // ^MNW - Web sensing, gap detection for die-cut label stock
            "^MNW".to_string(),
            format!("^PW{}", width_dots),
            format!("^LL{}", height_dots),
            "^LH0,0".to_string(),
        ];
        Self { commands }
    }

    /// Emit a field origin (^FO) at the element position
    fn field_origin(&mut self, x: u32, y: u32) {
        self.commands.push(format!("^FO{},{}", x, y));
    }

    // === Elements ===

    /// Add a text field
    ///
    /// Uses the scalable font ^A0 in normal orientation. Bold is simulated
    /// by widening the glyphs to 1.2x the height; there is no separate bold
    /// face on these printers.
    ///
    /// The text is emitted literally, not hex-escaped: a `^` inside it will
    /// corrupt the format. Matches the upstream contract where only QR
    /// payloads are escaped.
    pub fn text(&mut self, element: &TextElement) -> &mut Self {
        self.field_origin(element.x, element.y);

        let font_width = if element.bold {
            (element.font_size as f64 * 1.2).round() as u32
        } else {
            element.font_size
        };
        self.commands
            .push(format!("^A0N,{},{}", element.font_size, font_width));
        self.commands.push(format!("^FD{}^FS", element.text));
        self
    }

    /// Add a barcode
    ///
    /// Each symbology keeps its own directive and parameter layout; they are
    /// not interchangeable.
    pub fn barcode(&mut self, element: &BarcodeElement) -> &mut Self {
        self.field_origin(element.x, element.y);

        // ^BY - module (narrow bar) width in dots
        self.commands.push(format!("^BY{}", element.width));

        let interpretation = if element.show_text { "Y" } else { "N" };
        let directive = match element.barcode_type {
            // ^BC - Code 128: orientation,height,line,line-above,check-digit
            BarcodeType::Code128 => {
                format!("^BCN,{},{},N,N", element.height, interpretation)
            }
            // ^B3 - Code 39: orientation,mod-43,height,line,line-above
            BarcodeType::Code39 => {
                format!("^B3N,N,{},{},N", element.height, interpretation)
            }
            // ^BE - EAN-13: orientation,height,line,line-above
            BarcodeType::Ean13 => {
                format!("^BEN,{},{},N", element.height, interpretation)
            }
            // ^B8 - EAN-8: orientation,height,line,line-above
            BarcodeType::Ean8 => {
                format!("^B8N,{},{},N", element.height, interpretation)
            }
            // ^BU - UPC-A: orientation,height,line,line-above,check-digit
            BarcodeType::UpcA => {
                format!("^BUN,{},{},N,N", element.height, interpretation)
            }
        };
        self.commands.push(directive);
        self.commands.push(format!("^FD{}^FS", element.data));
        self
    }

    /// Add a QR code
    ///
    /// Data is prefixed with the `QA` mode tag (automatic mode, high error
    /// correction). Payloads with line breaks or ZPL metacharacters go
    /// through ^FH hex-escape mode so scanners see the original text.
    pub fn qr_code(&mut self, element: &QrCodeElement) -> &mut Self {
        self.field_origin(element.x, element.y);

        // ^BQ - QR model 2 with magnification factor
        self.commands.push(format!("^BQN,2,{}", element.size));

        if needs_hex_escape(&element.data) {
            self.commands
                .push(format!("^FH_^FDQA,{}^FS", hex_escape(&element.data)));
        } else {
            self.commands.push(format!("^FDQA,{}^FS", element.data));
        }
        self
    }

    /// Add a line or rectangle
    pub fn line(&mut self, element: &LineElement) -> &mut Self {
        self.field_origin(element.x, element.y);
        self.commands.push(format!(
            "^GB{},{},{}^FS",
            element.width, element.height, element.thickness
        ));
        self
    }

    // === Build ===

    /// Close the format and return the command stream
    ///
    /// Emits the print quantity and the format end marker, then joins all
    /// commands with newlines.
    pub fn finish(mut self, copies: u32) -> String {
        self.commands.push(format!("^PQ{}", copies));
        self.commands.push("^XZ".to_string());
        self.commands.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::TextAlignment;

    fn text_at(y: u32, size: u32, bold: bool) -> TextElement {
        TextElement {
            x: 50,
            y,
            text: "sample".into(),
            font_size: size,
            bold,
            alignment: TextAlignment::Left,
        }
    }

    #[test]
    fn test_mm_to_dots() {
        assert_eq!(mm_to_dots(0), 0);
        assert_eq!(mm_to_dots(1), 8);
        assert_eq!(mm_to_dots(60), 480);
        assert_eq!(mm_to_dots(200), 1600);
    }

    #[test]
    fn test_header_order() {
        let zpl = ZplBuilder::new(60, 40).finish(1);
        let lines: Vec<&str> = zpl.lines().collect();
        assert_eq!(
            lines,
            vec!["^XA", "^CI28", "^MNW", "^PW480", "^LL320", "^LH0,0", "^PQ1", "^XZ"]
        );
    }

    #[test]
    fn test_text_regular_and_bold() {
        let mut b = ZplBuilder::new(60, 40);
        b.text(&text_at(30, 40, false));
        b.text(&text_at(80, 40, true));
        let zpl = b.finish(1);

        // Regular: width equals height
        assert!(zpl.contains("^A0N,40,40"));
        // Bold: width widened to 1.2x
        assert!(zpl.contains("^A0N,40,48"));
    }

    #[test]
    fn test_bold_width_rounds() {
        let mut b = ZplBuilder::new(60, 40);
        b.text(&text_at(30, 45, true));
        let zpl = b.finish(1);
        // 45 * 1.2 = 54
        assert!(zpl.contains("^A0N,45,54"));
    }

    #[test]
    fn test_symbology_directives_differ() {
        let mut element = BarcodeElement {
            x: 50,
            y: 120,
            data: "1234567890".into(),
            barcode_type: BarcodeType::Code128,
            height: 60,
            width: 2,
            show_text: true,
        };

        let mut b = ZplBuilder::new(60, 40);
        b.barcode(&element);
        let code128 = b.finish(1);
        assert!(code128.contains("^BY2\n^BCN,60,Y,N,N\n^FD1234567890^FS"));

        element.barcode_type = BarcodeType::Code39;
        let mut b = ZplBuilder::new(60, 40);
        b.barcode(&element);
        assert!(b.finish(1).contains("^B3N,N,60,Y,N"));

        element.barcode_type = BarcodeType::Ean13;
        let mut b = ZplBuilder::new(60, 40);
        b.barcode(&element);
        assert!(b.finish(1).contains("^BEN,60,Y,N"));

        element.barcode_type = BarcodeType::Ean8;
        let mut b = ZplBuilder::new(60, 40);
        b.barcode(&element);
        assert!(b.finish(1).contains("^B8N,60,Y,N"));

        element.barcode_type = BarcodeType::UpcA;
        let mut b = ZplBuilder::new(60, 40);
        b.barcode(&element);
        assert!(b.finish(1).contains("^BUN,60,Y,N,N"));
    }

    #[test]
    fn test_barcode_hides_interpretation_line() {
        let element = BarcodeElement {
            x: 0,
            y: 0,
            data: "99".into(),
            barcode_type: BarcodeType::Code128,
            height: 50,
            width: 2,
            show_text: false,
        };
        let mut b = ZplBuilder::new(60, 40);
        b.barcode(&element);
        assert!(b.finish(1).contains("^BCN,50,N,N,N"));
    }

    #[test]
    fn test_qr_plain_data() {
        let qr = QrCodeElement {
            x: 50,
            y: 200,
            data: "https://example.com/p/1".into(),
            size: 20,
        };
        let mut b = ZplBuilder::new(60, 40);
        b.qr_code(&qr);
        let zpl = b.finish(1);

        assert!(zpl.contains("^BQN,2,20"));
        assert!(zpl.contains("^FDQA,https://example.com/p/1^FS"));
        assert!(!zpl.contains("^FH"));
    }

    #[test]
    fn test_qr_with_line_breaks_uses_hex_mode() {
        let qr = QrCodeElement {
            x: 50,
            y: 200,
            data: "line one\nline two".into(),
            size: 20,
        };
        let mut b = ZplBuilder::new(60, 40);
        b.qr_code(&qr);
        let zpl = b.finish(1);

        assert!(zpl.contains("^FH_^FDQA,line one_0D_0Aline two^FS"));
    }

    #[test]
    fn test_line_box() {
        let line = LineElement {
            x: 10,
            y: 20,
            width: 400,
            height: 2,
            thickness: 2,
        };
        let mut b = ZplBuilder::new(60, 40);
        b.line(&line);
        assert!(b.finish(1).contains("^FO10,20\n^GB400,2,2^FS"));
    }

    #[test]
    fn test_footer_copies() {
        let zpl = ZplBuilder::new(50, 25).finish(3);
        assert!(zpl.ends_with("^PQ3\n^XZ"));
    }
}
