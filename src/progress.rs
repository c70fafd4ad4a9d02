// src/progress.rs

/// Progress reporting for a scrape run.
/// Frontends implement this to surface status; the library only calls it.
pub trait Progress {
    /// Called once discovery knows how many events will be visited.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one event has been scraped (index in discovery order).
    fn item_done(&mut self, _index: usize, _name: &str) {}

    /// Called after the last event, before the CSV is written.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints status lines to stdout as the run goes.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        println!("Found {total} events");
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
}

/// Collects every status line; handy in tests.
#[derive(Default, Debug)]
pub struct RecordingProgress {
    pub total: Option<usize>,
    pub lines: Vec<String>,
    pub done: Vec<String>,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) { self.total = Some(total); }
    fn log(&mut self, msg: &str) { self.lines.push(s!(msg)); }
    fn item_done(&mut self, _index: usize, name: &str) { self.done.push(s!(name)); }
    fn finish(&mut self) { self.finished = true; }
}
