// SPDX-License-Identifier: MPL-2.0
//! The upload workflow state machine.
//!
//! One cycle per selected image: `Idle → Loading → Success | Error`. A new
//! selection restarts the cycle at any point and supersedes the previous
//! outcome. Every upload carries a monotonically increasing [`RequestId`];
//! completions for superseded requests are discarded, so a slow response can
//! never overwrite the outcome of a newer upload.

use crate::error::UploadError;
use crate::extraction::record::MetadataRecord;

/// Identifier tying an upload completion back to the request that issued it.
pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Default)]
pub struct Workflow {
    phase: Phase,
    records: Vec<MetadataRecord>,
    error: Option<UploadError>,
    last_issued: RequestId,
}

impl Workflow {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Records shown by the display component. At most one today: the
    /// extraction endpoint returns exactly one record per request, wrapped
    /// into a sequence for the table.
    pub fn records(&self) -> &[MetadataRecord] {
        &self.records
    }

    pub fn error(&self) -> Option<&UploadError> {
        self.error.as_ref()
    }

    /// Starts a new upload cycle: clears the previous outcome, enters
    /// `Loading`, and returns the identifier the completion must echo.
    pub fn begin(&mut self) -> RequestId {
        self.last_issued += 1;
        self.records.clear();
        self.error = None;
        self.phase = Phase::Loading;
        self.last_issued
    }

    /// Applies an upload completion. Returns `false` (and changes nothing)
    /// when the completion belongs to a superseded request.
    pub fn finish(
        &mut self,
        request: RequestId,
        outcome: Result<MetadataRecord, UploadError>,
    ) -> bool {
        if request != self.last_issued {
            return false;
        }

        match outcome {
            Ok(record) => {
                self.records = vec![record];
                self.phase = Phase::Success;
            }
            Err(error) => {
                self.error = Some(error);
                self.phase = Phase::Error;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> MetadataRecord {
        serde_json::from_str(r#"{"prompt":"a cat","width":512,"height":512}"#)
            .expect("record should deserialize")
    }

    fn server_error() -> UploadError {
        UploadError::Status {
            code: 500,
            message: Some("Internal server error".to_string()),
        }
    }

    #[test]
    fn starts_idle_and_empty() {
        let workflow = Workflow::default();
        assert_eq!(workflow.phase(), Phase::Idle);
        assert!(workflow.records().is_empty());
        assert!(workflow.error().is_none());
    }

    #[test]
    fn begin_enters_loading_and_clears_previous_outcome() {
        let mut workflow = Workflow::default();
        let first = workflow.begin();
        assert!(workflow.finish(first, Err(server_error())));
        assert_eq!(workflow.phase(), Phase::Error);

        workflow.begin();
        assert_eq!(workflow.phase(), Phase::Loading);
        assert!(workflow.error().is_none(), "error cleared on restart");
        assert!(workflow.records().is_empty(), "records cleared on restart");
    }

    #[test]
    fn success_wraps_single_record_into_sequence() {
        let mut workflow = Workflow::default();
        let request = workflow.begin();
        assert!(workflow.finish(request, Ok(record())));
        assert_eq!(workflow.phase(), Phase::Success);
        assert_eq!(workflow.records().len(), 1);
        assert_eq!(workflow.records()[0].prompt, "a cat");
        assert!(!workflow.is_loading());
    }

    #[test]
    fn failure_enters_error_with_message() {
        let mut workflow = Workflow::default();
        let request = workflow.begin();
        assert!(workflow.finish(request, Err(server_error())));
        assert_eq!(workflow.phase(), Phase::Error);
        assert!(workflow.records().is_empty());
        assert_eq!(
            workflow.error().and_then(UploadError::server_message),
            Some("Internal server error")
        );
        assert!(!workflow.is_loading());
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut workflow = Workflow::default();
        let first = workflow.begin();
        let second = workflow.begin();

        // The first upload resolves after being superseded
        assert!(!workflow.finish(first, Ok(record())));
        assert_eq!(workflow.phase(), Phase::Loading);
        assert!(workflow.records().is_empty());

        assert!(workflow.finish(second, Err(server_error())));
        assert_eq!(workflow.phase(), Phase::Error);
    }

    #[test]
    fn new_selection_supersedes_finished_outcome() {
        let mut workflow = Workflow::default();
        let first = workflow.begin();
        assert!(workflow.finish(first, Ok(record())));
        assert_eq!(workflow.phase(), Phase::Success);

        let second = workflow.begin();
        assert!(workflow.is_loading());
        assert!(workflow.finish(second, Ok(record())));
        assert_eq!(workflow.phase(), Phase::Success);
    }

    #[test]
    fn request_ids_increase_monotonically() {
        let mut workflow = Workflow::default();
        let a = workflow.begin();
        let b = workflow.begin();
        let c = workflow.begin();
        assert!(a < b && b < c);
    }
}
