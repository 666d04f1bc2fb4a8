//! Report document model and the table-population primitives used by the
//! category rules.

mod model;
pub(crate) mod placeholders;
pub(crate) mod writer;

pub use model::{
    CellAlignment, DocCell, DocParagraph, DocRow, DocTable, DocumentError, ReportDocument,
};
pub use placeholders::PlaceholderMap;
