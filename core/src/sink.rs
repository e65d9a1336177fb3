use crate::diff::{DiffError, Difference};

/// Trait for streaming differences to a consumer.
pub trait DiffSink {
    /// Called once before any differences are emitted.
    ///
    /// Default is a no-op so sinks that don't need setup can ignore it.
    fn begin(&mut self) -> Result<(), DiffError> {
        Ok(())
    }

    fn emit(&mut self, diff: Difference) -> Result<(), DiffError>;

    fn finish(&mut self) -> Result<(), DiffError> {
        Ok(())
    }
}

/// A sink that collects differences into a Vec.
pub struct VecSink {
    differences: Vec<Difference>,
}

impl VecSink {
    pub fn new() -> Self {
        Self {
            differences: Vec::new(),
        }
    }

    pub fn into_differences(self) -> Vec<Difference> {
        self.differences
    }
}

impl Default for VecSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffSink for VecSink {
    fn emit(&mut self, diff: Difference) -> Result<(), DiffError> {
        self.differences.push(diff);
        Ok(())
    }
}

/// A sink that forwards differences to a callback.
pub struct CallbackSink<F: FnMut(Difference)> {
    f: F,
}

impl<F: FnMut(Difference)> CallbackSink<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F: FnMut(Difference)> DiffSink for CallbackSink<F> {
    fn emit(&mut self, diff: Difference) -> Result<(), DiffError> {
        (self.f)(diff);
        Ok(())
    }
}
