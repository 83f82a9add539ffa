// src/progress.rs
/// Status reporting for a scrape run. Frontends implement this; all hooks are optional.
pub trait Progress {
    /// Number of entry blocks found on the page.
    fn begin(&mut self, _entries: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Entry at `index` became a record.
    fn item_done(&mut self, _index: usize, _title: &str) {}

    /// Entry at `index` was dropped (skip policy only).
    fn item_failed(&mut self, _index: usize, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Lend an optional sink to a callee while keeping it for later calls.
pub fn reborrow<'a>(progress: &'a mut Option<&mut dyn Progress>) -> Option<&'a mut dyn Progress> {
    match progress {
        Some(p) => Some(&mut **p as &mut dyn Progress),
        None => None,
    }
}
