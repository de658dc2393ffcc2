//! # zpl-printer
//!
//! ZPL thermal label printer library - low-level label printing only.
//!
//! ## Scope
//!
//! This crate handles HOW to print labels:
//! - ZPL command building (text, barcodes, QR codes, lines)
//! - `^FH` hex escaping for QR payloads with line breaks
//! - Network printing (TCP port 9100)
//!
//! Business logic (WHAT to print) stays in application code: request
//! routing, authentication and response shaping belong to the calling
//! service, which validates a request, renders it and dispatches the
//! result - or returns the ZPL string as a preview without dispatching.
//!
//! ## Example
//!
//! ```ignore
//! use zpl_printer::{LabelRenderer, NetworkPrinter, Printer, SimpleLabelRequest};
//!
//! // Validate and render a label request
//! let request: SimpleLabelRequest = serde_json::from_str(body)?;
//! request.validate()?;
//! let zpl = LabelRenderer::new().render_simple(&request);
//!
//! // Send to the printer
//! let printer = NetworkPrinter::new("192.168.100.5", 9100)?;
//! printer.print(&zpl).await?;
//! ```

mod config;
mod encoding;
mod error;
mod label;
mod printer;
mod renderer;
mod zpl;

// Re-exports
pub use config::PrinterConfig;
pub use encoding::{hex_escape, needs_hex_escape};
pub use error::{PrintError, PrintResult};
pub use label::{
    BarcodeElement, BarcodeType, LabelError, LabelRequest, LabelResult, LabelSize, LineElement,
    QrCodeElement, SimpleLabelRequest, TextAlignment, TextElement,
};
pub use printer::{NetworkPrinter, Printer};
pub use renderer::LabelRenderer;
pub use zpl::{DOTS_PER_MM, ZplBuilder, mm_to_dots};
