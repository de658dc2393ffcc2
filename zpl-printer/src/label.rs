//! Label data model
//!
//! Value objects describing a label to print. These mirror the JSON wire
//! contract of the calling layer, so every field carries serde defaults.
//!
//! The renderer assumes a pre-validated request: call
//! [`LabelRequest::validate`] / [`SimpleLabelRequest::validate`] before
//! compiling, rendering an out-of-range request is undefined (the builder
//! itself never re-checks bounds).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation error for label requests
#[derive(Debug, Error)]
pub enum LabelError {
    #[error("{field} out of range: {value} (allowed {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("{field} must be at least 1")]
    NotPositive { field: &'static str },
}

/// Result type for label validation
pub type LabelResult<T> = Result<T, LabelError>;

fn check_range(field: &'static str, value: u32, min: u32, max: u32) -> LabelResult<()> {
    if value < min || value > max {
        return Err(LabelError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

fn check_positive(field: &'static str, value: u32) -> LabelResult<()> {
    if value == 0 {
        return Err(LabelError::NotPositive { field });
    }
    Ok(())
}

/// Barcode symbology
///
/// QR is a separate element type ([`QrCodeElement`]), not a symbology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarcodeType {
    Code128,
    Code39,
    Ean13,
    Ean8,
    UpcA,
}

/// Named label size preset (width x height in mm)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelSize {
    /// 50x25mm
    Small,
    /// 60x40mm
    Medium,
    /// 100x50mm
    Large,
    Custom,
}

impl LabelSize {
    /// Preset dimensions in mm, `None` for [`LabelSize::Custom`]
    pub fn dimensions_mm(&self) -> Option<(u32, u32)> {
        match self {
            LabelSize::Small => Some((50, 25)),
            LabelSize::Medium => Some((60, 40)),
            LabelSize::Large => Some((100, 50)),
            LabelSize::Custom => None,
        }
    }
}

/// Horizontal text alignment
///
/// Accepted on the wire but not yet applied by the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

fn default_font_size() -> u32 {
    30
}

fn default_true() -> bool {
    true
}

fn default_barcode_type() -> BarcodeType {
    BarcodeType::Code128
}

fn default_barcode_height() -> u32 {
    50
}

fn default_bar_width() -> u32 {
    2
}

fn default_qr_size() -> u32 {
    5
}

fn default_thickness() -> u32 {
    2
}

fn default_label_width_mm() -> u32 {
    60
}

fn default_label_height_mm() -> u32 {
    40
}

fn default_copies() -> u32 {
    1
}

fn default_label_size() -> LabelSize {
    LabelSize::Medium
}

/// Text element
///
/// Position is in dots (203 dpi = 8 dots/mm), origin top-left.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextElement {
    pub x: u32,
    pub y: u32,
    pub text: String,
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub alignment: TextAlignment,
}

impl TextElement {
    pub fn validate(&self) -> LabelResult<()> {
        check_range("font_size", self.font_size, 10, 200)
    }
}

/// Barcode element
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarcodeElement {
    pub x: u32,
    pub y: u32,
    pub data: String,
    #[serde(default = "default_barcode_type")]
    pub barcode_type: BarcodeType,
    #[serde(default = "default_barcode_height")]
    pub height: u32,
    /// Module (bar) width in dots
    #[serde(default = "default_bar_width")]
    pub width: u32,
    /// Print the human-readable interpretation line
    #[serde(default = "default_true")]
    pub show_text: bool,
}

impl BarcodeElement {
    pub fn validate(&self) -> LabelResult<()> {
        check_range("height", self.height, 20, 200)?;
        check_range("width", self.width, 1, 10)
    }
}

/// QR code element
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrCodeElement {
    pub x: u32,
    pub y: u32,
    /// May contain arbitrary text including line breaks, escaped on render
    pub data: String,
    /// Magnification factor
    #[serde(default = "default_qr_size")]
    pub size: u32,
}

impl QrCodeElement {
    pub fn validate(&self) -> LabelResult<()> {
        check_range("size", self.size, 15, 300)
    }
}

/// Line/rectangle element
///
/// Renders as a filled bar when thickness reaches min(width, height),
/// otherwise as a rectangle outline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineElement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_thickness")]
    pub thickness: u32,
}

impl LineElement {
    pub fn validate(&self) -> LabelResult<()> {
        check_positive("width", self.width)?;
        check_positive("height", self.height)?;
        check_range("thickness", self.thickness, 1, 10)
    }
}

/// Full label request: explicit element lists
///
/// Elements render in fixed category order (texts, barcodes, qr_codes,
/// lines) regardless of how the caller interleaves them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelRequest {
    #[serde(default = "default_label_width_mm")]
    pub label_width_mm: u32,
    #[serde(default = "default_label_height_mm")]
    pub label_height_mm: u32,
    #[serde(default = "default_copies")]
    pub copies: u32,

    #[serde(default)]
    pub texts: Vec<TextElement>,
    #[serde(default)]
    pub barcodes: Vec<BarcodeElement>,
    #[serde(default)]
    pub qr_codes: Vec<QrCodeElement>,
    #[serde(default)]
    pub lines: Vec<LineElement>,
}

impl LabelRequest {
    /// Check every bound before compiling
    pub fn validate(&self) -> LabelResult<()> {
        check_range("label_width_mm", self.label_width_mm, 20, 200)?;
        check_range("label_height_mm", self.label_height_mm, 10, 200)?;
        check_range("copies", self.copies, 1, 100)?;

        for text in &self.texts {
            text.validate()?;
        }
        for barcode in &self.barcodes {
            barcode.validate()?;
        }
        for qr in &self.qr_codes {
            qr.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        Ok(())
    }
}

/// Simplified label request: title/subtitle/barcode/QR template
///
/// Compiled through a fixed vertical auto-layout, see
/// [`LabelRenderer::render_simple`](crate::LabelRenderer::render_simple).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleLabelRequest {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub barcode_data: Option<String>,
    #[serde(default = "default_barcode_type")]
    pub barcode_type: BarcodeType,
    #[serde(default)]
    pub qr_data: Option<String>,
    #[serde(default = "default_copies")]
    pub copies: u32,
    #[serde(default = "default_label_size")]
    pub label_size: LabelSize,

    /// Only consulted when `label_size` is `custom`
    #[serde(default)]
    pub custom_width_mm: Option<u32>,
    #[serde(default)]
    pub custom_height_mm: Option<u32>,
}

impl SimpleLabelRequest {
    pub fn validate(&self) -> LabelResult<()> {
        check_range("copies", self.copies, 1, 100)?;
        if let Some(w) = self.custom_width_mm {
            check_range("custom_width_mm", w, 20, 200)?;
        }
        if let Some(h) = self.custom_height_mm {
            check_range("custom_height_mm", h, 10, 200)?;
        }
        Ok(())
    }
}
