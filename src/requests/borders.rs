use super::{BatchRequest, Border, GridRange, UpdateBordersRequest};
use crate::color::Color;
use crate::model::{BorderEdgeSpec, BorderSpec};
use crate::range::RangeReference;

fn border_from_edge(edge: &BorderEdgeSpec) -> Border {
    Border {
        style: edge.style,
        // An edge requested without a color gets opaque black.
        color: edge.color.unwrap_or(Color::BLACK),
    }
}

/// Build the border-update request for the edges present in `spec`.
///
/// Absent edges are omitted, not cleared: this request can add or restyle a
/// border but never remove one already on the sheet.
pub fn request_from_borders(range: &RangeReference, spec: &BorderSpec) -> BatchRequest {
    BatchRequest::UpdateBorders(UpdateBordersRequest {
        range: GridRange::from(range),
        top: spec.top.as_ref().map(border_from_edge),
        bottom: spec.bottom.as_ref().map(border_from_edge),
        left: spec.left.as_ref().map(border_from_edge),
        right: spec.right.as_ref().map(border_from_edge),
    })
}
