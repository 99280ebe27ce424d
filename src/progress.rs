// src/progress.rs
/// Progress reporting for long-running network batches (validation, build).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of jobs.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One job finished with a usable result.
    fn item_done(&mut self, _label: &str) {}

    /// One job was dropped (fetch/parse failure, nothing found).
    fn item_failed(&mut self, _label: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

