use crate::diff::{DiffError, Difference};
use crate::sink::DiffSink;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonLinesHeader<'a> {
    kind: &'static str,
    file1_name: &'a str,
    file2_name: &'a str,
}

/// A sink that writes one JSON object per line: a header naming the two
/// workbooks, then each difference as it is emitted.
pub struct JsonLinesSink<W: Write> {
    w: W,
    file1_name: String,
    file2_name: String,
    wrote_header: bool,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(w: W, file1_name: impl Into<String>, file2_name: impl Into<String>) -> Self {
        Self {
            w,
            file1_name: file1_name.into(),
            file2_name: file2_name.into(),
            wrote_header: false,
        }
    }
}

impl<W: Write> DiffSink for JsonLinesSink<W> {
    fn begin(&mut self) -> Result<(), DiffError> {
        if self.wrote_header {
            return Ok(());
        }

        let header = JsonLinesHeader {
            kind: "Header",
            file1_name: &self.file1_name,
            file2_name: &self.file2_name,
        };

        serde_json::to_writer(&mut self.w, &header)
            .map_err(|e| DiffError::SinkError { message: e.to_string() })?;
        self.w
            .write_all(b"\n")
            .map_err(|e| DiffError::SinkError { message: e.to_string() })?;

        self.wrote_header = true;
        Ok(())
    }

    fn emit(&mut self, diff: Difference) -> Result<(), DiffError> {
        serde_json::to_writer(&mut self.w, &diff)
            .map_err(|e| DiffError::SinkError { message: e.to_string() })?;
        self.w
            .write_all(b"\n")
            .map_err(|e| DiffError::SinkError { message: e.to_string() })?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), DiffError> {
        self.w
            .flush()
            .map_err(|e| DiffError::SinkError { message: e.to_string() })
    }
}
