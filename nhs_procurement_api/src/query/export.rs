use serde::Serialize;

use crate::types::ExportFormat;

/// Request body of `/api/export`: the records to export and the target format.
#[derive(Serialize, Debug)]
pub struct ExportRequest<'a, T> {
    pub items: &'a [T],
    pub format: ExportFormat,
}

impl<'a, T: Serialize> ExportRequest<'a, T> {
    pub fn new(items: &'a [T], format: ExportFormat) -> Self {
        Self { items, format }
    }
}
