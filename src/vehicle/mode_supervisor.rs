//! Mode Supervisor
//!
//! Owns the single active task slot. On every switch the outgoing handler is
//! asked to stop and its task is dropped outright, then the incoming
//! handler's task takes the slot. Nothing ever waits for the outgoing task to
//! reach a suspension point.
//!
//! ## Responsibilities
//!
//! - Cancel the outgoing activity unconditionally
//! - Start the incoming activity and record whether that worked
//! - Poll the active task from the flight loop and record how it ended

use core::future::{poll_fn, Future};
use core::task::{Context, Poll};

use mission_fsm_core::mode::{MissionMode, ModeError};

use super::mode::{ModeHandler, ModeTask};
use super::registry::ModeLookup;

/// What the active task slot currently holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TaskStatus {
    /// No mode activated yet, or the last one was cancelled
    Idle,
    /// Task in the slot, not finished
    Running,
    /// Task finished without error
    Completed,
    /// Task finished with an error
    Failed(ModeError),
    /// Handler refused to start; the mode is "not running, not done"
    StartFailed(ModeError),
}

/// Single-slot owner of the active mode's background task
pub struct ModeSupervisor<'a> {
    handlers: &'a dyn ModeLookup,
    active: Option<MissionMode>,
    task: Option<ModeTask<'a>>,
    status: TaskStatus,
}

impl<'a> ModeSupervisor<'a> {
    pub fn new(handlers: &'a dyn ModeLookup) -> Self {
        Self {
            handlers,
            active: None,
            task: None,
            status: TaskStatus::Idle,
        }
    }

    /// Mode whose handler was last activated
    pub fn active_mode(&self) -> Option<MissionMode> {
        self.active
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    /// Whether a task currently occupies the slot
    pub fn has_task(&self) -> bool {
        self.task.is_some()
    }

    /// Replace the active activity with `mode`'s
    ///
    /// The outgoing task is cancelled first. A start failure is recorded as
    /// [`TaskStatus::StartFailed`] and returned; the slot stays empty.
    pub fn switch_to(&mut self, mode: MissionMode) -> Result<(), ModeError> {
        self.cancel_active();

        let handler = self.handlers.handler(mode);
        self.active = Some(mode);
        match handler.start() {
            Ok(task) => {
                self.task = Some(task);
                self.status = TaskStatus::Running;
                Ok(())
            }
            Err(e) => {
                crate::log_error!("Failed to start {} activity: {}", mode.name(), e);
                self.status = TaskStatus::StartFailed(e);
                Err(e)
            }
        }
    }

    /// Stop and drop the active task, if any
    pub fn cancel_active(&mut self) {
        if let Some(mode) = self.active.take() {
            self.handlers.handler(mode).request_stop();
            if self.task.take().is_some() {
                crate::log_debug!("Cancelled {} activity", mode.name());
            }
        }
        self.task = None;
        self.status = TaskStatus::Idle;
    }

    /// Poll the active task once
    ///
    /// Returns `Ready` when the slot is empty (nothing left to run), `Pending`
    /// while the task is still in flight.
    pub fn poll_active(&mut self, cx: &mut Context<'_>) -> Poll<()> {
        let Some(task) = self.task.as_mut() else {
            return Poll::Ready(());
        };

        match task.as_mut().poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(result) => {
                self.task = None;
                self.status = match result {
                    Ok(()) => TaskStatus::Completed,
                    Err(e) => {
                        crate::log_warn!("Mode activity ended with error: {}", e);
                        TaskStatus::Failed(e)
                    }
                };
                Poll::Ready(())
            }
        }
    }

    /// Run the active task; never completes
    ///
    /// Meant to be raced against the tick delay with
    /// `embassy_futures::select`, which bounds how long it runs.
    pub async fn drive(&mut self) {
        poll_fn(|cx| {
            let _ = self.poll_active(cx);
            Poll::<()>::Pending
        })
        .await
    }

    fn active_handler(&self) -> Option<&'a dyn ModeHandler> {
        self.active.map(|mode| self.handlers.handler(mode))
    }

    /// Done flag of the active handler; false when nothing is active
    pub fn active_done(&self) -> bool {
        self.active_handler().is_some_and(|h| h.is_done())
    }
}
