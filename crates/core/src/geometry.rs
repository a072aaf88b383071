//! Highlight geometry: capture-time normalization and re-projection.
//!
//! A selection made on a rendered PDF page is stored as a bounding box
//! relative to the page element's top-left corner, together with the
//! page's rendered size at capture time. Re-projection onto a resized
//! or zoomed page is then an independent per-axis rescale. The page's
//! aspect ratio is assumed preserved between capture and display; if it
//! is not, highlights render stretched (accepted limitation).

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A rectangle in viewport pixels, as read from the platform's layout
/// engine (e.g. `getBoundingClientRect`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PageRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    fn is_finite(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }
}

/// The persisted geometry record inside an annotation's `coordinates`
/// field.
///
/// `x`, `y`, `width`, `height` are device pixels relative to the page
/// element's top-left at capture time; `pageX`/`pageY` are the page
/// element's rendered width/height at capture time. The wire format is
/// a JSON object with exactly those six fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GeometryRecord {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub page_x: f64,
    pub page_y: f64,
}

/// A geometry record projected onto a concrete page rendering size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectedBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl GeometryRecord {
    /// Capture a selection bounding rectangle relative to its enclosing
    /// page element.
    ///
    /// Both rectangles are in the same (viewport) coordinate space. The
    /// page rectangle must have positive dimensions, otherwise later
    /// re-projection would divide by zero.
    pub fn capture(selection: &PageRect, page: &PageRect) -> Result<Self, CoreError> {
        if !selection.is_finite() || !page.is_finite() {
            return Err(CoreError::Validation(
                "selection and page rectangles must be finite".to_string(),
            ));
        }
        if page.width <= 0.0 || page.height <= 0.0 {
            return Err(CoreError::Validation(format!(
                "page dimensions must be positive, got {}x{}",
                page.width, page.height
            )));
        }
        if selection.width < 0.0 || selection.height < 0.0 {
            return Err(CoreError::Validation(format!(
                "selection dimensions must be non-negative, got {}x{}",
                selection.width, selection.height
            )));
        }

        Ok(Self {
            x: selection.left - page.left,
            y: selection.top - page.top,
            width: selection.width,
            height: selection.height,
            page_x: page.width,
            page_y: page.height,
        })
    }

    /// Project this record onto the current page rendering size.
    ///
    /// Each axis is rescaled independently by `current / capture`.
    /// Projecting onto the capture-time size is the identity.
    pub fn project(&self, page_width: f64, page_height: f64) -> Result<ProjectedBox, CoreError> {
        if !page_width.is_finite() || !page_height.is_finite() || page_width <= 0.0 || page_height <= 0.0
        {
            return Err(CoreError::Validation(format!(
                "target page dimensions must be positive, got {page_width}x{page_height}"
            )));
        }

        let scale_x = page_width / self.page_x;
        let scale_y = page_height / self.page_y;

        Ok(ProjectedBox {
            left: self.x * scale_x,
            top: self.y * scale_y,
            width: self.width * scale_x,
            height: self.height * scale_y,
        })
    }

    /// Parse a stored geometry string, enforcing the record invariants.
    ///
    /// Any failure here means the stored record is corrupt; callers on
    /// the render path must skip the record rather than propagate.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let record: Self = serde_json::from_str(raw)
            .map_err(|e| CoreError::CorruptGeometry(e.to_string()))?;
        record.validate().map_err(|e| match e {
            CoreError::Validation(msg) => CoreError::CorruptGeometry(msg),
            other => other,
        })?;
        Ok(record)
    }

    /// Parse an incoming geometry value at the API boundary.
    ///
    /// Same schema as [`parse`](Self::parse) but failures are
    /// validation errors: the client sent a malformed record, nothing
    /// stored is corrupt.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, CoreError> {
        let record: Self = serde_json::from_value(value.clone()).map_err(|e| {
            CoreError::Validation(format!("invalid coordinates: {e}"))
        })?;
        record.validate()?;
        Ok(record)
    }

    /// Serialize to the canonical stored form.
    pub fn to_json(&self) -> String {
        // Serialization of a plain struct with finite floats cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Check the record invariants: finite values, positive page
    /// dimensions, non-negative selection size.
    pub fn validate(&self) -> Result<(), CoreError> {
        let fields = [
            self.x,
            self.y,
            self.width,
            self.height,
            self.page_x,
            self.page_y,
        ];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err(CoreError::Validation(
                "geometry fields must be finite numbers".to_string(),
            ));
        }
        if self.page_x <= 0.0 || self.page_y <= 0.0 {
            return Err(CoreError::Validation(format!(
                "pageX and pageY must be positive, got {}x{}",
                self.page_x, self.page_y
            )));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(CoreError::Validation(format!(
                "width and height must be non-negative, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}
