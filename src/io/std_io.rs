//! Process-wide standard stream bindings.

use std::io::{self, Stdin, StdoutLock};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use super::PushbackReader;

/// The shared stdin scanner.
///
/// Every default-stream scan goes through this one reader, so a byte pushed
/// back at the end of one call is seen by the next.
pub type StdinScanner = PushbackReader<Stdin>;

static STDIN: OnceLock<Mutex<StdinScanner>> = OnceLock::new();

/// Lock the process-wide stdin scanner for the duration of one scan.
pub fn stdin_scanner() -> MutexGuard<'static, StdinScanner> {
    STDIN
        .get_or_init(|| Mutex::new(PushbackReader::new(io::stdin())))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Lock stdout for the duration of one format call.
pub fn stdout() -> StdoutLock<'static> {
    io::stdout().lock()
}
