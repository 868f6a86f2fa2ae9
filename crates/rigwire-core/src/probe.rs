//! Hardware auto-detection contract.
//!
//! A model that has optional modules ships a [`HardwareProbe`] in its
//! capability descriptor. The session runs it once after opening, handing it
//! a [`ProbeIo`] that performs raw transactions through the same engine
//! (and the same mutex) as every other operation.
//!
//! Probes that have to change device state to learn something use
//! [`PerturbRestore`], which guarantees a restore attempt on every path.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error, warn};

use crate::error::{Error, Result};
use crate::hardware::DetectedHardware;

/// Settle time before the single restore retry.
pub const RESTORE_RETRY_SETTLE: Duration = Duration::from_millis(100);

/// Raw transaction access for a running probe.
#[async_trait]
pub trait ProbeIo: Send {
    /// Send a query and return the complete response, terminator included.
    async fn query(&mut self, request: &[u8]) -> Result<Vec<u8>>;

    /// Send a set command, confirmed the way the model confirms sets.
    async fn command(&mut self, request: &[u8]) -> Result<()>;

    /// Pause to let the device settle.
    async fn settle(&mut self, delay: Duration);
}

/// A model-specific detection sequence.
///
/// Probes never fail: anything inconclusive is reported as unknown.
#[async_trait]
pub trait HardwareProbe: Send + Sync + fmt::Debug {
    /// Run the probe and report what was found.
    async fn probe(&self, io: &mut dyn ProbeIo) -> DetectedHardware;
}

/// Result of a [`PerturbRestore`] run.
#[derive(Debug)]
pub struct PerturbOutcome<T> {
    /// What the read-back after the perturbation showed.
    pub readback: Result<T>,
    /// Whether the original value was written back successfully.
    pub restored: bool,
}

/// Read a value, change it, read it back, and put the original back.
#[derive(Debug, Clone)]
pub struct PerturbRestore<'a> {
    /// Query that returns the current value.
    pub read: &'a [u8],
    /// Set command that perturbs the value.
    pub perturb: &'a [u8],
}

impl<'a> PerturbRestore<'a> {
    /// Create a perturb/restore step.
    pub fn new(read: &'a [u8], perturb: &'a [u8]) -> Self {
        PerturbRestore { read, perturb }
    }

    /// Run the step.
    ///
    /// `restore_from` turns the original response into the set command that
    /// restores it; when it returns `None` nothing is perturbed and the run
    /// fails with [`Error::Garbled`]. `accept` interprets the read-back.
    ///
    /// Once the perturbation has been sent, the restore is attempted no
    /// matter how the perturbation or read-back went. A failed restore is
    /// retried once after [`RESTORE_RETRY_SETTLE`]; if that fails too the
    /// failure is logged at error level and reported in
    /// [`PerturbOutcome::restored`], never returned as an error.
    pub async fn run<T, R, A>(
        &self,
        io: &mut dyn ProbeIo,
        restore_from: R,
        accept: A,
    ) -> Result<PerturbOutcome<T>>
    where
        T: Send,
        R: Fn(&[u8]) -> Option<Vec<u8>> + Send,
        A: Fn(&[u8]) -> Result<T> + Send,
    {
        let original = io.query(self.read).await?;
        let restore = restore_from(&original).ok_or_else(|| {
            Error::Garbled(format!(
                "cannot derive restore command from {:?}",
                String::from_utf8_lossy(&original)
            ))
        })?;

        let readback = match io.command(self.perturb).await {
            Ok(()) => match io.query(self.read).await {
                Ok(resp) => accept(&resp),
                Err(e) => Err(e),
            },
            Err(e) => {
                debug!(error = %e, "perturbation refused");
                Err(e)
            }
        };

        let restored = match io.command(&restore).await {
            Ok(()) => true,
            Err(first) => {
                warn!(error = %first, "restore failed, retrying once");
                io.settle(RESTORE_RETRY_SETTLE).await;
                match io.command(&restore).await {
                    Ok(()) => true,
                    Err(second) => {
                        error!(
                            error = %second,
                            restore = %String::from_utf8_lossy(&restore),
                            "could not restore original device state after probe"
                        );
                        false
                    }
                }
            }
        };

        Ok(PerturbOutcome { readback, restored })
    }
}
