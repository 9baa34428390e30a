//! Progress notification port
//!
//! Defines the interface for reporting progress while a report is built.

use relief_domain::Stage;

/// Callback for progress updates during report generation
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, ...).
pub trait ProgressNotifier: Send + Sync {
    /// Called when a stage starts with the number of tasks it will run
    fn on_stage_start(&self, stage: &Stage, total_tasks: usize);

    /// Called when one task of a stage finishes. `index` is 0-based.
    fn on_task_complete(&self, stage: &Stage, index: usize, success: bool);

    /// Called when a stage completes
    fn on_stage_complete(&self, stage: &Stage);

    /// Called when the search phrase for a paragraph is known.
    fn on_search_query(&self, _index: usize, _query: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: &Stage, _total_tasks: usize) {}
    fn on_task_complete(&self, _stage: &Stage, _index: usize, _success: bool) {}
    fn on_stage_complete(&self, _stage: &Stage) {}
}
