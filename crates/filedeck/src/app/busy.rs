use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Holds a busy flag raised for as long as the guard lives.
///
/// Dropping the guard lowers the flag, so every exit path of the guarded
/// operation clears it.
#[derive(Debug)]
pub(crate) struct BusyGuard {
    flag: Arc<AtomicBool>,
}

impl BusyGuard {
    /// Raises `flag`, or returns `None` when it is already raised.
    pub(crate) fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self {
                flag: Arc::clone(flag),
            })
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
