//! Client for the sheet-archive scan endpoint.

use crate::error::ApiError;
use crate::scan::SheetScanSummary;

/// Triggers a scan of the sheet archive and returns its summary.
///
/// The endpoint takes no parameters; the server decides what to scan.
/// Any transport error, non-success status, or malformed body surfaces as
/// an [`ApiError`] for the caller to log and fold into view state.
pub async fn fetch_sheet_scan() -> Result<SheetScanSummary, ApiError> {
    super::get_json("/api/sheet-search").await
}
