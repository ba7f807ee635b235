//! Range resolution and batch-request primitives for agent-facing spreadsheet
//! surfaces.
//!
//! The crate turns the inputs an agent or script supplies (A1 range strings,
//! color tokens, sparse format and border descriptions) into the typed
//! request bodies a grid batch-update endpoint consumes. It is pure
//! translation: no network, no workbook state, no retries. The one seam is
//! [`range::SheetLookup`], through which callers resolve sheet titles against
//! metadata they have already fetched.

pub mod color;
pub mod errors;
pub mod model;
pub mod range;
pub mod requests;

pub use color::{Color, parse_color};
pub use errors::{ColorError, RangeError};
pub use model::{
    BorderEdgeSpec, BorderSpec, BorderStyle, CellFormatSpec, HorizontalAlign, NumberFormatSpec,
    NumberFormatType, VerticalAlign, WrapStrategy,
};
pub use range::{CellAddress, RangeReference, SheetLookup, resolve_range};
pub use requests::{
    BatchRequest, GridRange, field_mask_from_format, request_from_borders, request_from_format,
};
