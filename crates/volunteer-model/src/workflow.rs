use serde::{
  Deserialize,
  Serialize
};
use tracing::debug;

use crate::task::VolunteerTask;

/// Two-state delete confirmation
/// workflow. The dialog is visible
/// exactly when a task is pending.
#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub enum DeleteWorkflow {
  #[default]
  Idle,
  ConfirmPending(VolunteerTask)
}

impl DeleteWorkflow {
  pub fn confirmation_visible(
    &self
  ) -> bool {
    matches!(
      self,
      DeleteWorkflow::ConfirmPending(_)
    )
  }

  pub fn pending_task(
    &self
  ) -> Option<&VolunteerTask> {
    match self {
      | DeleteWorkflow::Idle => None,
      | DeleteWorkflow::ConfirmPending(
        task
      ) => Some(task)
    }
  }

  /// Valid from any state; replaces an
  /// earlier pending target.
  pub fn request(
    &mut self,
    task: VolunteerTask
  ) {
    debug!(
      task_id = task.id,
      replaced = ?self.pending_task().map(|t| t.id),
      "delete requested"
    );
    *self =
      DeleteWorkflow::ConfirmPending(task);
  }

  /// Leaves the pending state, handing
  /// back the task that was pending.
  pub fn confirm(
    &mut self
  ) -> Option<VolunteerTask> {
    let previous =
      std::mem::take(self);
    match previous {
      | DeleteWorkflow::Idle => {
        debug!(
          "delete confirmed with \
           nothing pending"
        );
        None
      }
      | DeleteWorkflow::ConfirmPending(
        task
      ) => {
        debug!(
          task_id = task.id,
          "delete confirmed"
        );
        Some(task)
      }
    }
  }

  pub fn cancel(&mut self) {
    if let Some(task) =
      self.pending_task()
    {
      debug!(
        task_id = task.id,
        "delete cancelled"
      );
    }
    *self = DeleteWorkflow::Idle;
  }
}
