mod table;
mod writer;

pub use table::render_snapshot;
pub use writer::{write_reports, ReportError};
