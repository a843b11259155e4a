/// Single-record fetching worker.
pub mod details;
/// Record-set (list/search page) fetching worker.
pub mod records;
