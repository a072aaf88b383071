//! Highlight overlay layout.
//!
//! Turns the annotations loaded for a paper into drawable boxes for the
//! page currently on screen. Corrupt geometry is isolated per record:
//! a row that fails to parse is skipped with a warning and the rest of
//! the page still renders.

use serde::Serialize;

use crate::geometry::GeometryRecord;
use crate::types::DbId;

/// The slice of an annotation the overlay needs.
#[derive(Debug, Clone)]
pub struct OverlaySource<'a> {
    pub annotation_id: DbId,
    pub page_number: i32,
    pub coordinates: &'a str,
    pub highlighted_text: &'a str,
}

/// A screen-space highlight box for the displayed page.
#[derive(Debug, Clone, Serialize)]
pub struct HighlightBox {
    pub annotation_id: DbId,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Tooltip shown on hover: the highlighted text, quoted.
    pub tooltip: String,
}

/// Lay out the highlight boxes for one page at its current rendered
/// size.
///
/// Filters to annotations on `page_number`, preserving the input order
/// (the caller controls sorting). Annotations whose stored coordinates
/// fail to parse are skipped, never fatal. Zero matches yields an empty
/// vec.
pub fn layout_page<'a, I>(
    annotations: I,
    page_number: i32,
    page_width: f64,
    page_height: f64,
) -> Vec<HighlightBox>
where
    I: IntoIterator<Item = OverlaySource<'a>>,
{
    annotations
        .into_iter()
        .filter(|a| a.page_number == page_number)
        .filter_map(|a| {
            let record = match GeometryRecord::parse(a.coordinates) {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!(
                        annotation_id = a.annotation_id,
                        error = %e,
                        "Skipping annotation with corrupt coordinates",
                    );
                    return None;
                }
            };
            let boxed = match record.project(page_width, page_height) {
                Ok(boxed) => boxed,
                Err(e) => {
                    tracing::warn!(
                        annotation_id = a.annotation_id,
                        error = %e,
                        "Skipping annotation that failed projection",
                    );
                    return None;
                }
            };
            Some(HighlightBox {
                annotation_id: a.annotation_id,
                left: boxed.left,
                top: boxed.top,
                width: boxed.width,
                height: boxed.height,
                tooltip: format!("\"{}\"", a.highlighted_text),
            })
        })
        .collect()
}
