//! Bounded polling of a submission until its verdict settles.
//!
//! The judge queues submissions and answers status reads with a pending
//! verdict until evaluation finishes. This watcher owns that wait as a
//! spawned task: it polls on a fixed interval, stops on the first settled
//! verdict, gives up when its budget runs out, and can be cancelled from the
//! handle at any time. One watcher per submission; nothing here is global.

use crate::error::{ProtocolError, Result};
use crate::provider::SubmissionTransport;
use crate::types::Submission;
use log::{debug, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time;

/// Polling knobs
#[derive(Debug, Clone, Copy)]
pub struct PollConfig {
    /// Delay between status reads
    pub interval: Duration,
    /// Read budget before giving up
    pub max_polls: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(3),
            max_polls: 100,
        }
    }
}

impl PollConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.interval.is_zero() {
            return Err(ProtocolError::invalid_config(
                "poll interval must be positive",
            ));
        }
        if self.max_polls == 0 {
            return Err(ProtocolError::invalid_config("poll budget must be positive"));
        }
        Ok(())
    }
}

/// How a watch ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchOutcome {
    /// The verdict left the pending state
    Completed(Submission),
    /// The poll budget ran out with the verdict still pending
    Exhausted { polls: u32 },
    /// The handle cancelled the watch
    Cancelled,
}

enum WatchCommand {
    Cancel,
}

/// Handle to one running verdict watch.
pub struct SubmissionWatcher {
    command_tx: mpsc::Sender<WatchCommand>,
    task: JoinHandle<Result<WatchOutcome>>,
}

impl SubmissionWatcher {
    /// Start polling `submission_id` through `transport`.
    pub fn spawn(
        transport: Arc<dyn SubmissionTransport>,
        submission_id: u32,
        config: PollConfig,
    ) -> Result<Self> {
        config.validate()?;
        let (command_tx, command_rx) = mpsc::channel(4);
        let task = tokio::spawn(poll_loop(transport, submission_id, config, command_rx));
        Ok(Self { command_tx, task })
    }

    /// Stop the watch; takes effect at the next loop turn.
    pub async fn cancel(&self) {
        let _ = self.command_tx.send(WatchCommand::Cancel).await;
    }

    /// Wait for the watch to end and return how.
    pub async fn wait(self) -> Result<WatchOutcome> {
        self.task
            .await
            .map_err(|e| ProtocolError::TaskFailed(e.to_string()))?
    }
}

async fn poll_loop(
    transport: Arc<dyn SubmissionTransport>,
    submission_id: u32,
    config: PollConfig,
    mut command_rx: mpsc::Receiver<WatchCommand>,
) -> Result<WatchOutcome> {
    let mut polls = 0u32;
    loop {
        tokio::select! {
            Some(WatchCommand::Cancel) = command_rx.recv() => {
                debug!("watch for submission {submission_id} cancelled after {polls} polls");
                return Ok(WatchOutcome::Cancelled);
            }
            () = time::sleep(config.interval) => {
                polls += 1;
                match transport.submission_status(submission_id).await {
                    Ok(submission) if !submission.is_pending() => {
                        debug!(
                            "submission {submission_id} settled on '{}' after {polls} polls",
                            submission.status
                        );
                        return Ok(WatchOutcome::Completed(submission));
                    }
                    Ok(_) => {}
                    Err(err) => {
                        // A dropped read of a verdict that is still coming
                        // must not lose the watch; it only costs budget.
                        warn!("status poll {polls} for submission {submission_id} failed: {err}");
                    }
                }
                if polls >= config.max_polls {
                    debug!("watch for submission {submission_id} exhausted its {polls} polls");
                    return Ok(WatchOutcome::Exhausted { polls });
                }
            }
        }
    }
}
