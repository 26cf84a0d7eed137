//! Sheet-archive scan: wire types and the view-state machine.
//!
//! The scan flow is one user action wide: press the button, await one GET,
//! render the summary or an error. The interesting part is keeping the view
//! state honest while requests are in flight, so the state lives in a single
//! tagged enum ([`ScanState`]) rather than independent busy/result/error
//! flags, and every invocation carries a token so a slow stale response can
//! never clobber a fresher one.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::ApiError;

/// The one user-facing failure message. The underlying [`ApiError`] goes to
/// the diagnostic log only.
pub const SCAN_FAILED_MESSAGE: &str = "Failed to fetch sheet data. Please try again.";

/// Summary returned by `GET /api/sheet-search`.
///
/// `files` keeps the server's order and may be shorter than `total_sheets`
/// (the server is authoritative and may truncate the listing).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SheetScanSummary {
    pub total_sheets: u64,
    pub oldest_created: Option<DateTime<Utc>>,
    pub newest_modified: Option<DateTime<Utc>>,
    pub files: Vec<SheetFile>,
}

/// One archived sheet file. `created` is absent for files the archive has
/// no creation date for.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SheetFile {
    pub name: String,
    pub created: Option<DateTime<Utc>>,
}

/// View state for the scan flow.
///
/// `Failed` keeps the previous successful summary so it can still render
/// beneath the error line; `Pending` deliberately carries nothing, stale
/// results are suppressed while a scan is in flight.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScanState {
    #[default]
    Idle,
    Pending,
    Success(SheetScanSummary),
    Failed {
        message: String,
        stale: Option<SheetScanSummary>,
    },
}

/// Owns the scan state plus the invocation bookkeeping.
///
/// `begin` hands out a monotonically increasing token; `settle` applies an
/// outcome only when its token belongs to the most recently begun
/// invocation. Overlapping invocations therefore resolve to the newest
/// one's outcome regardless of arrival order.
#[derive(Debug, Default)]
pub struct ScanFlow {
    state: ScanState,
    last_started: u64,
    last_summary: Option<SheetScanSummary>,
}

impl ScanFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, ScanState::Pending)
    }

    /// Starts an invocation: moves to `Pending` and returns its token.
    pub fn begin(&mut self) -> u64 {
        self.last_started += 1;
        self.state = ScanState::Pending;
        self.last_started
    }

    /// Applies an invocation's outcome.
    ///
    /// Returns `false` without touching state when `token` is not the most
    /// recently begun invocation - the caller should log and drop the
    /// outcome.
    pub fn settle(
        &mut self,
        token: u64,
        outcome: Result<SheetScanSummary, ApiError>,
    ) -> bool {
        if token != self.last_started {
            return false;
        }

        match outcome {
            Ok(summary) => {
                self.last_summary = Some(summary.clone());
                self.state = ScanState::Success(summary);
            }
            Err(_) => {
                self.state = ScanState::Failed {
                    message: SCAN_FAILED_MESSAGE.to_string(),
                    stale: self.last_summary.clone(),
                };
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary_fixture() -> SheetScanSummary {
        serde_json::from_str(
            r#"{
                "total_sheets": 3,
                "oldest_created": "2024-01-05T00:00:00Z",
                "newest_modified": "2024-06-10T00:00:00Z",
                "files": [
                    {"name": "survey_q1.xlsx", "created": "2024-01-05T00:00:00Z"},
                    {"name": "survey_q2.xlsx", "created": null}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_summary_parses_wire_shape() {
        let summary = summary_fixture();
        assert_eq!(summary.total_sheets, 3);
        assert_eq!(summary.files.len(), 2);
        assert_eq!(summary.files[0].name, "survey_q1.xlsx");
        assert!(summary.files[1].created.is_none());
        assert!(summary.oldest_created.is_some());
    }

    #[test]
    fn test_file_count_may_differ_from_total() {
        // The server may truncate the listing; parsing must not reject that.
        let summary = summary_fixture();
        assert_ne!(summary.files.len() as u64, summary.total_sheets);
    }

    #[test]
    fn test_null_dates_parse_as_absent() {
        let summary: SheetScanSummary = serde_json::from_str(
            r#"{"total_sheets": 0, "oldest_created": null, "newest_modified": null, "files": []}"#,
        )
        .unwrap();
        assert!(summary.oldest_created.is_none());
        assert!(summary.newest_modified.is_none());
        assert!(summary.files.is_empty());
    }

    #[test]
    fn test_empty_listing_with_nonzero_total_parses() {
        // The file table is omitted for an empty listing even when the
        // archive reports matches, so this shape must be representable.
        let summary: SheetScanSummary = serde_json::from_str(
            r#"{
                "total_sheets": 7,
                "oldest_created": "2022-03-01T00:00:00Z",
                "newest_modified": "2024-06-10T00:00:00Z",
                "files": []
            }"#,
        )
        .unwrap();
        assert_eq!(summary.total_sheets, 7);
        assert!(summary.files.is_empty());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        // Shape mismatches must surface as decode failures, not defaults.
        let result: Result<SheetScanSummary, _> =
            serde_json::from_str(r#"{"total_sheets": 2, "files": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_begin_moves_to_pending() {
        let mut flow = ScanFlow::new();
        assert_eq!(*flow.state(), ScanState::Idle);

        flow.begin();
        assert!(flow.is_pending());
    }

    #[test]
    fn test_success_outcome_is_applied() {
        let mut flow = ScanFlow::new();
        let token = flow.begin();

        assert!(flow.settle(token, Ok(summary_fixture())));
        assert!(!flow.is_pending());
        assert_eq!(*flow.state(), ScanState::Success(summary_fixture()));
    }

    #[test]
    fn test_failure_carries_fixed_message_and_no_stale_summary() {
        let mut flow = ScanFlow::new();
        let token = flow.begin();

        assert!(flow.settle(token, Err(ApiError::Status(500))));
        assert_eq!(
            *flow.state(),
            ScanState::Failed {
                message: SCAN_FAILED_MESSAGE.to_string(),
                stale: None,
            }
        );
    }

    #[test]
    fn test_failure_preserves_previous_summary() {
        let mut flow = ScanFlow::new();
        let first = flow.begin();
        flow.settle(first, Ok(summary_fixture()));

        let second = flow.begin();
        flow.settle(second, Err(ApiError::Transport("connect refused".into())));

        assert_eq!(
            *flow.state(),
            ScanState::Failed {
                message: SCAN_FAILED_MESSAGE.to_string(),
                stale: Some(summary_fixture()),
            }
        );
    }

    #[test]
    fn test_pending_suppresses_previous_summary() {
        let mut flow = ScanFlow::new();
        let first = flow.begin();
        flow.settle(first, Ok(summary_fixture()));

        flow.begin();
        assert_eq!(*flow.state(), ScanState::Pending);
    }

    #[test]
    fn test_stale_invocation_cannot_clobber_newer_outcome() {
        let mut flow = ScanFlow::new();
        let first = flow.begin();
        let second = flow.begin();

        let newer = summary_fixture();
        assert!(flow.settle(second, Ok(newer.clone())));

        // The earlier invocation resolves late; its outcome must be dropped.
        let stale = SheetScanSummary {
            total_sheets: 99,
            oldest_created: None,
            newest_modified: None,
            files: vec![],
        };
        assert!(!flow.settle(first, Ok(stale)));
        assert_eq!(*flow.state(), ScanState::Success(newer));
    }

    #[test]
    fn test_stale_failure_is_dropped_while_newer_is_pending() {
        let mut flow = ScanFlow::new();
        let first = flow.begin();
        let _second = flow.begin();

        assert!(!flow.settle(first, Err(ApiError::Status(502))));
        assert!(flow.is_pending());
    }
}
