pub mod borders;
pub mod format;

pub use borders::request_from_borders;
pub use format::{field_mask_from_format, request_from_format};

use crate::color::Color;
use crate::model::{BorderStyle, HorizontalAlign, NumberFormatType, VerticalAlign, WrapStrategy};
use crate::range::RangeReference;
use serde::Serialize;

/// Zero-based, end-exclusive rectangle in grid coordinates, the selection
/// shape the batch-update endpoint consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRange {
    pub sheet_id: i64,
    pub start_row_index: u32,
    pub end_row_index: u32,
    pub start_column_index: u32,
    pub end_column_index: u32,
}

impl From<&RangeReference> for GridRange {
    fn from(reference: &RangeReference) -> Self {
        Self {
            sheet_id: reference.sheet_id,
            start_row_index: reference.start_row,
            end_row_index: reference.end_row_exclusive,
            start_column_index: reference.start_column,
            end_column_index: reference.end_column_exclusive,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFormat {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground_color: Option<Color>,
}

impl TextFormat {
    fn is_empty(&self) -> bool {
        self.bold.is_none()
            && self.italic.is_none()
            && self.underline.is_none()
            && self.strikethrough.is_none()
            && self.font_size.is_none()
            && self.font_family.is_none()
            && self.foreground_color.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumberFormat {
    #[serde(rename = "type")]
    pub kind: NumberFormatType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// Cell-format payload mirroring only the fields the caller actually set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellFormat {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_format: Option<TextFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_alignment: Option<HorizontalAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_alignment: Option<VerticalAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap_strategy: Option<WrapStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_format: Option<NumberFormat>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellData {
    pub user_entered_format: CellFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatCellRequest {
    pub range: GridRange,
    pub cell: CellData,
    /// Field mask scoped under `userEnteredFormat`, naming exactly the fields
    /// the payload carries.
    pub fields: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Border {
    pub style: BorderStyle,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBordersRequest {
    pub range: GridRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<Border>,
}

/// One entry of a batch-update `requests` array; externally tagged so it
/// serializes as `{"repeatCell": {..}}` or `{"updateBorders": {..}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BatchRequest {
    RepeatCell(RepeatCellRequest),
    UpdateBorders(UpdateBordersRequest),
}
