//! Anomaly Reporting.
//!
//! Unknown opcodes, function codes, and syscall codes are not fatal by default: the
//! instruction is skipped (the program counter has already advanced), a warning is
//! logged, and the anomaly is counted. In strict mode the same event stops the run.

use super::{Cpu, StepOutcome};
use crate::common::Trap;
use crate::common::error::Anomaly;

impl Cpu {
    /// Applies the strictness policy to a decode anomaly.
    pub(super) fn report_anomaly(&mut self, anomaly: Anomaly) -> Result<StepOutcome, Trap> {
        if self.strict {
            return Err(Trap::Anomaly(anomaly));
        }
        self.stats.anomalies += 1;
        tracing::warn!("{:#06x}: {anomaly}, skipping", self.current_pc);
        Ok(StepOutcome::Anomaly(anomaly))
    }
}
