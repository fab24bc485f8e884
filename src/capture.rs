use std::cell::RefCell;

use log::{Level, LevelFilter, Log, Metadata, Record};

struct Capture;

static LOGGER: Capture = Capture;

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

impl Log for Capture {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

/// Runs `f` and returns its result with the error records it logged on the
/// current thread.
pub(crate) fn errors<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
    // another test may have installed it already
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Trace);
    RECORDS.with(|records| records.borrow_mut().clear());
    let result = f();
    let errors = RECORDS.with(|records| {
        records
            .borrow_mut()
            .drain(..)
            .filter(|(level, _)| *level == Level::Error)
            .map(|(_, message)| message)
            .collect()
    });
    (result, errors)
}
