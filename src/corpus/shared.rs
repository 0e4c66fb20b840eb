use parking_lot::Mutex;

use super::mean::CorpusMean;

/// Single-writer wrapper around a [`CorpusMean`].
///
/// [`SharedCorpus::update`] holds the lock across the whole read-score-commit
/// cycle, so concurrent submissions are folded in one at a time and none is
/// lost.
#[derive(Debug, Default)]
pub struct SharedCorpus {
    inner: Mutex<CorpusMean>,
}

impl SharedCorpus {
    pub fn new(initial: CorpusMean) -> Self {
        Self {
            inner: Mutex::new(initial),
        }
    }

    /// Copy of the current mean (for persistence or inspection).
    pub fn snapshot(&self) -> CorpusMean {
        self.inner.lock().clone()
    }

    pub fn count(&self) -> u64 {
        self.inner.lock().count
    }

    /// Runs `f` against the current mean and commits the mean it returns.
    ///
    /// If `f` fails the stored mean is left untouched.
    pub fn update<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&CorpusMean) -> Result<(T, CorpusMean), E>,
    {
        let mut guard = self.inner.lock();
        let (value, updated) = f(&guard)?;
        *guard = updated;
        Ok(value)
    }

    /// Replaces the stored mean, returning the previous one.
    pub fn replace(&self, mean: CorpusMean) -> CorpusMean {
        std::mem::replace(&mut *self.inner.lock(), mean)
    }
}
