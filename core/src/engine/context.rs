use crate::diff::{DiffError, Difference};
use crate::sink::DiffSink;

/// Mutable state shared by one comparison run.
#[derive(Debug, Default)]
pub(super) struct DiffContext {
    pub(super) warnings: Vec<String>,
}

pub(super) fn emit<S: DiffSink>(
    sink: &mut S,
    count: &mut usize,
    diff: Difference,
) -> Result<(), DiffError> {
    sink.emit(diff)?;
    *count = count.saturating_add(1);
    Ok(())
}
