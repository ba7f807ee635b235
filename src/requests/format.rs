use super::{BatchRequest, CellData, CellFormat, GridRange, NumberFormat, RepeatCellRequest, TextFormat};
use crate::model::CellFormatSpec;
use crate::range::RangeReference;

/// Field-mask entries for exactly the fields present in `spec`.
///
/// The order is fixed so emitted requests are reproducible and diff cleanly;
/// the consumer itself treats masks as order-independent.
pub fn field_mask_from_format(spec: &CellFormatSpec) -> Vec<&'static str> {
    let mut fields = Vec::new();
    if spec.background_color.is_some() {
        fields.push("backgroundColor");
    }
    if spec.bold.is_some() {
        fields.push("textFormat.bold");
    }
    if spec.italic.is_some() {
        fields.push("textFormat.italic");
    }
    if spec.underline.is_some() {
        fields.push("textFormat.underline");
    }
    if spec.strikethrough.is_some() {
        fields.push("textFormat.strikethrough");
    }
    if spec.font_size.is_some() {
        fields.push("textFormat.fontSize");
    }
    if spec.font_family.is_some() {
        fields.push("textFormat.fontFamily");
    }
    if spec.foreground_color.is_some() {
        fields.push("textFormat.foregroundColor");
    }
    if spec.horizontal_alignment.is_some() {
        fields.push("horizontalAlignment");
    }
    if spec.vertical_alignment.is_some() {
        fields.push("verticalAlignment");
    }
    if spec.wrap_strategy.is_some() {
        fields.push("wrapStrategy");
    }
    if spec.number_format.is_some() {
        fields.push("numberFormat");
    }
    fields
}

fn cell_format_from_spec(spec: &CellFormatSpec) -> CellFormat {
    let text = TextFormat {
        bold: spec.bold,
        italic: spec.italic,
        underline: spec.underline,
        strikethrough: spec.strikethrough,
        font_size: spec.font_size,
        font_family: spec.font_family.clone(),
        foreground_color: spec.foreground_color,
    };

    CellFormat {
        background_color: spec.background_color,
        text_format: if text.is_empty() { None } else { Some(text) },
        horizontal_alignment: spec.horizontal_alignment,
        vertical_alignment: spec.vertical_alignment,
        wrap_strategy: spec.wrap_strategy,
        number_format: spec.number_format.as_ref().map(|format| NumberFormat {
            kind: format.kind,
            pattern: format.pattern.clone(),
        }),
    }
}

/// Build the repeat-cell request applying `spec` across `range`.
///
/// An empty spec still yields a valid request (empty payload, bare
/// `userEnteredFormat` mask); callers may choose not to issue it.
pub fn request_from_format(range: &RangeReference, spec: &CellFormatSpec) -> BatchRequest {
    let mask = field_mask_from_format(spec);
    let fields = if mask.is_empty() {
        "userEnteredFormat".to_string()
    } else {
        format!("userEnteredFormat({})", mask.join(","))
    };

    BatchRequest::RepeatCell(RepeatCellRequest {
        range: GridRange::from(range),
        cell: CellData {
            user_entered_format: cell_format_from_spec(spec),
        },
        fields,
    })
}
