//! Internal unit tests, grouped by module.

mod buffer;
mod scan;
