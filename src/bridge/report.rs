//! Aggregated results of a conversion run.

use crate::mapper::ModernRecord;
use crate::utils::error::BridgeError;

/// Outcome counts and retained failures from a conversion run
///
/// **Public** - returned from `ConversionReport::collect`
#[derive(Debug, Default)]
pub struct ConversionReport {
    /// Successfully converted records, input order preserved
    pub records: Vec<ModernRecord>,

    /// Error description per failed line, with its input position
    pub failures: Vec<(usize, String)>,
}

impl ConversionReport {
    /// Drain a conversion iterator into a report
    ///
    /// Successes and failures are aggregated separately; a failed line
    /// never stops the drain.
    pub fn collect<I>(results: I) -> Self
    where
        I: IntoIterator<Item = Result<ModernRecord, BridgeError>>,
    {
        let mut report = Self::default();
        for (index, result) in results.into_iter().enumerate() {
            match result {
                Ok(record) => report.records.push(record),
                Err(e) => report.failures.push((index, e.to_string())),
            }
        }
        report
    }

    /// Number of successfully converted records
    pub fn converted(&self) -> usize {
        self.records.len()
    }

    /// Number of failed lines
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// One-line summary for logs
    pub fn summary(&self) -> String {
        format!(
            "{} converted, {} failed of {} lines",
            self.converted(),
            self.failed(),
            self.converted() + self.failed()
        )
    }
}
