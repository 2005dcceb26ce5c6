//! Task list view-model: filter criteria,
//! page number and the delete confirmation
//! workflow over a read-only collection.
//!
//! Every operation runs synchronously on
//! the caller's event thread. Out-of-range
//! page requests are ignored rather than
//! reported.

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  debug,
  info,
  trace
};

use crate::filter::{
  FilterCriteria,
  FilterField,
  apply_filters
};
use crate::paginate::{
  ITEMS_PER_PAGE,
  Page,
  paginate
};
use crate::provider::TaskProvider;
use crate::task::VolunteerTask;
use crate::workflow::DeleteWorkflow;

/// What a confirmed delete does to the
/// in-memory collection.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub enum DeleteMode {
  /// Dismiss the dialog only.
  #[default]
  Cosmetic,
  /// Drop the task from the view-model's
  /// collection. Nothing is persisted.
  Remove
}

impl FromStr for DeleteMode {
  type Err = anyhow::Error;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    match s
      .trim()
      .to_ascii_lowercase()
      .as_str()
    {
      | "cosmetic" => {
        Ok(DeleteMode::Cosmetic)
      }
      | "remove" => Ok(DeleteMode::Remove),
      | other => Err(anyhow!(
        "invalid delete mode: {other} \
         (expected cosmetic or remove)"
      ))
    }
  }
}

impl fmt::Display for DeleteMode {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    match self {
      | DeleteMode::Cosmetic => {
        f.write_str("cosmetic")
      }
      | DeleteMode::Remove => {
        f.write_str("remove")
      }
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct ViewModelPolicy {
  pub reset_page_on_filter: bool,
  pub delete_mode:          DeleteMode
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum DeleteOutcome {
  NothingPending,
  Dismissed(VolunteerTask),
  Removed(VolunteerTask)
}

/// Input events a rendering layer feeds
/// into the view-model.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub enum ViewEvent {
  FilterChanged {
    field: FilterField,
    value: String
  },
  PageRequested(usize),
  PreviousRequested,
  NextRequested,
  DeleteRequested(u64),
  DeleteConfirmed,
  DeleteCancelled
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum EventOutcome {
  FilterUpdated(FilterCriteria),
  Page {
    changed: bool,
    current: usize
  },
  ConfirmationShown(VolunteerTask),
  Deleted(DeleteOutcome),
  Cancelled
}

/// Everything a renderer needs for one
/// frame of the task page.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct TaskView {
  pub tasks:          Vec<VolunteerTask>,
  pub current_page:   usize,
  pub total_pages:    usize,
  pub items_per_page: usize,
  pub match_count:    usize,
  pub criteria:       FilterCriteria,
  pub pending_delete:
    Option<VolunteerTask>
}

impl TaskView {
  pub fn confirmation_visible(
    &self
  ) -> bool {
    self.pending_delete.is_some()
  }

  pub fn slots(
    &self
  ) -> Vec<Option<&VolunteerTask>> {
    (0..self.items_per_page)
      .map(|idx| self.tasks.get(idx))
      .collect()
  }

  pub fn has_previous(&self) -> bool {
    self.current_page > 1
  }

  pub fn has_next(&self) -> bool {
    self.current_page < self.total_pages
  }
}

#[derive(Debug, Clone)]
pub struct TaskViewModel {
  tasks:        Vec<VolunteerTask>,
  criteria:     FilterCriteria,
  current_page: usize,
  workflow:     DeleteWorkflow,
  policy:       ViewModelPolicy
}

impl TaskViewModel {
  pub fn new(
    tasks: Vec<VolunteerTask>,
    policy: ViewModelPolicy
  ) -> Self {
    debug!(
      count = tasks.len(),
      ?policy,
      "task view-model initialized"
    );
    Self {
      tasks,
      criteria: FilterCriteria::default(),
      current_page: 1,
      workflow: DeleteWorkflow::Idle,
      policy
    }
  }

  #[tracing::instrument(skip(provider))]
  pub fn from_provider<P>(
    provider: &P,
    policy: ViewModelPolicy
  ) -> anyhow::Result<Self>
  where
    P: TaskProvider + ?Sized
  {
    let tasks = provider.list_tasks()?;
    info!(
      count = tasks.len(),
      "loaded tasks from provider"
    );
    Ok(Self::new(tasks, policy))
  }

  /// Back to initial criteria, page and
  /// workflow state.
  pub fn reset(&mut self) {
    self.criteria =
      FilterCriteria::default();
    self.current_page = 1;
    self.workflow = DeleteWorkflow::Idle;
  }

  pub fn tasks(&self) -> &[VolunteerTask] {
    &self.tasks
  }

  pub fn criteria(
    &self
  ) -> &FilterCriteria {
    &self.criteria
  }

  pub fn current_page(&self) -> usize {
    self.current_page
  }

  pub fn workflow(
    &self
  ) -> &DeleteWorkflow {
    &self.workflow
  }

  pub fn policy(&self) -> ViewModelPolicy {
    self.policy
  }

  pub fn filtered(
    &self
  ) -> Vec<&VolunteerTask> {
    apply_filters(
      &self.tasks,
      &self.criteria
    )
  }

  pub fn page(&self) -> Page<'_> {
    paginate(
      &self.filtered(),
      self.current_page,
      ITEMS_PER_PAGE
    )
  }

  pub fn total_pages(&self) -> usize {
    crate::paginate::total_pages(
      self.filtered().len(),
      ITEMS_PER_PAGE
    )
  }

  /// Ignores requests outside
  /// `1..=total_pages`. Returns whether the
  /// page changed.
  pub fn set_page(
    &mut self,
    requested: usize
  ) -> bool {
    let total = self.total_pages();
    if requested < 1 || requested > total
    {
      trace!(
        requested,
        total,
        current = self.current_page,
        "page request out of range"
      );
      return false;
    }

    let changed =
      requested != self.current_page;
    self.current_page = requested;
    debug!(page = requested, total, "page set");
    changed
  }

  pub fn previous(&mut self) -> bool {
    match self.current_page.checked_sub(1)
    {
      | Some(page) => self.set_page(page),
      | None => false
    }
  }

  pub fn next(&mut self) -> bool {
    self.set_page(
      self.current_page.saturating_add(1)
    )
  }

  /// Replaces one criterion from a raw
  /// form value. The page is kept unless
  /// the policy asks for a reset.
  #[tracing::instrument(skip(self))]
  pub fn update_filter(
    &mut self,
    field: FilterField,
    value: &str
  ) -> anyhow::Result<&FilterCriteria> {
    self.criteria.set(field, value)?;

    if self.policy.reset_page_on_filter {
      self.current_page = 1;
    }

    debug!(
      criteria = ?self.criteria,
      page = self.current_page,
      "filter updated"
    );
    Ok(&self.criteria)
  }

  pub fn request_delete(
    &mut self,
    task: VolunteerTask
  ) {
    self.workflow.request(task);
  }

  pub fn request_delete_by_id(
    &mut self,
    id: u64
  ) -> anyhow::Result<&VolunteerTask> {
    let task = self
      .tasks
      .iter()
      .find(|task| task.id == id)
      .cloned()
      .ok_or_else(|| {
        anyhow!("no task with id {id}")
      })?;
    self.workflow.request(task);
    self.workflow.pending_task().ok_or_else(
      || anyhow!("delete request was not recorded")
    )
  }

  pub fn confirm_delete(
    &mut self
  ) -> DeleteOutcome {
    let Some(task) = self.workflow.confirm()
    else {
      return DeleteOutcome::NothingPending;
    };

    match self.policy.delete_mode {
      | DeleteMode::Cosmetic => {
        DeleteOutcome::Dismissed(task)
      }
      | DeleteMode::Remove => {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != task.id);
        info!(
          task_id = task.id,
          removed = before - self.tasks.len(),
          "task removed from collection"
        );
        DeleteOutcome::Removed(task)
      }
    }
  }

  pub fn cancel_delete(&mut self) {
    self.workflow.cancel();
  }

  #[tracing::instrument(skip(self))]
  pub fn handle(
    &mut self,
    event: ViewEvent
  ) -> anyhow::Result<EventOutcome> {
    let outcome = match event {
      | ViewEvent::FilterChanged {
        field,
        value
      } => EventOutcome::FilterUpdated(
        self
          .update_filter(field, &value)?
          .clone()
      ),
      | ViewEvent::PageRequested(page) => {
        let changed = self.set_page(page);
        EventOutcome::Page {
          changed,
          current: self.current_page
        }
      }
      | ViewEvent::PreviousRequested => {
        let changed = self.previous();
        EventOutcome::Page {
          changed,
          current: self.current_page
        }
      }
      | ViewEvent::NextRequested => {
        let changed = self.next();
        EventOutcome::Page {
          changed,
          current: self.current_page
        }
      }
      | ViewEvent::DeleteRequested(id) => {
        EventOutcome::ConfirmationShown(
          self
            .request_delete_by_id(id)?
            .clone()
        )
      }
      | ViewEvent::DeleteConfirmed => {
        EventOutcome::Deleted(
          self.confirm_delete()
        )
      }
      | ViewEvent::DeleteCancelled => {
        self.cancel_delete();
        EventOutcome::Cancelled
      }
    };
    Ok(outcome)
  }

  pub fn snapshot(&self) -> TaskView {
    let filtered = self.filtered();
    let page = paginate(
      &filtered,
      self.current_page,
      ITEMS_PER_PAGE
    );

    TaskView {
      tasks:          page
        .tasks
        .iter()
        .map(|task| (*task).clone())
        .collect(),
      current_page:   self.current_page,
      total_pages:    page
        .display_total_pages(),
      items_per_page: ITEMS_PER_PAGE,
      match_count:    filtered.len(),
      criteria:       self.criteria.clone(),
      pending_delete: self
        .workflow
        .pending_task()
        .cloned()
    }
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::{
    DeleteMode,
    DeleteOutcome,
    EventOutcome,
    TaskViewModel,
    ViewEvent,
    ViewModelPolicy
  };
  use crate::filter::FilterField;
  use crate::task::VolunteerTask;
  use crate::workflow::DeleteWorkflow;

  fn tasks(n: u64) -> Vec<VolunteerTask> {
    let date =
      NaiveDate::from_ymd_opt(2024, 6, 1)
        .expect("date");
    (1..=n)
      .map(|id| {
        let kind = if id % 2 == 0 {
          "setup"
        } else {
          "crowd control"
        };
        VolunteerTask::new(
          id,
          format!("task {id}"),
          kind,
          date
        )
        .with_points(id as u32 * 5)
      })
      .collect()
  }

  #[test]
  fn next_stops_at_last_page() {
    let mut vm = TaskViewModel::new(
      tasks(8),
      ViewModelPolicy::default()
    );
    assert_eq!(vm.total_pages(), 2);
    assert!(vm.next());
    assert_eq!(vm.current_page(), 2);
    assert!(!vm.next());
    assert_eq!(vm.current_page(), 2);
    assert_eq!(vm.page().tasks.len(), 2);
  }

  #[test]
  fn previous_stops_at_first_page() {
    let mut vm = TaskViewModel::new(
      tasks(8),
      ViewModelPolicy::default()
    );
    assert!(!vm.previous());
    assert_eq!(vm.current_page(), 1);
  }

  #[test]
  fn set_page_ignores_out_of_range() {
    let mut vm = TaskViewModel::new(
      tasks(13),
      ViewModelPolicy::default()
    );
    assert!(!vm.set_page(0));
    assert!(!vm.set_page(4));
    assert_eq!(vm.current_page(), 1);
    assert!(vm.set_page(3));
    assert_eq!(vm.current_page(), 3);
    assert_eq!(vm.page().tasks.len(), 1);
  }

  #[test]
  fn filter_change_keeps_page_by_default()
  {
    let mut vm = TaskViewModel::new(
      tasks(12),
      ViewModelPolicy::default()
    );
    assert!(vm.set_page(2));
    vm.update_filter(
      FilterField::MinPoints,
      "50"
    )
    .expect("filter");

    assert_eq!(vm.current_page(), 2);
    assert_eq!(vm.total_pages(), 1);
    assert!(vm.page().tasks.is_empty());
  }

  #[test]
  fn filter_change_resets_page_when_enabled()
   {
    let mut vm = TaskViewModel::new(
      tasks(12),
      ViewModelPolicy {
        reset_page_on_filter: true,
        ..ViewModelPolicy::default()
      }
    );
    assert!(vm.set_page(2));
    vm.update_filter(
      FilterField::MinPoints,
      "50"
    )
    .expect("filter");

    assert_eq!(vm.current_page(), 1);
    assert_eq!(vm.page().tasks.len(), 3);
  }

  #[test]
  fn update_filter_replaces_one_field() {
    let mut vm = TaskViewModel::new(
      tasks(4),
      ViewModelPolicy::default()
    );
    vm.update_filter(
      FilterField::Type,
      "setup"
    )
    .expect("type");
    vm.update_filter(
      FilterField::MinPoints,
      "15"
    )
    .expect("points");

    let criteria = vm.criteria();
    assert_eq!(
      criteria.kind.as_deref(),
      Some("setup")
    );
    assert_eq!(criteria.min_points, Some(15));
    assert_eq!(criteria.date, None);

    let ids: Vec<u64> = vm
      .filtered()
      .into_iter()
      .map(|t| t.id)
      .collect();
    assert_eq!(ids, vec![4]);
  }

  #[test]
  fn cosmetic_delete_keeps_collection() {
    let mut vm = TaskViewModel::new(
      tasks(3),
      ViewModelPolicy::default()
    );
    vm.request_delete_by_id(2)
      .expect("request");
    assert!(
      vm.workflow().confirmation_visible()
    );

    let outcome = vm.confirm_delete();
    assert!(matches!(
      outcome,
      DeleteOutcome::Dismissed(ref t) if t.id == 2
    ));
    assert!(
      !vm.workflow().confirmation_visible()
    );
    assert_eq!(vm.tasks().len(), 3);
  }

  #[test]
  fn remove_mode_drops_task() {
    let mut vm = TaskViewModel::new(
      tasks(3),
      ViewModelPolicy {
        delete_mode: DeleteMode::Remove,
        ..ViewModelPolicy::default()
      }
    );
    vm.request_delete_by_id(2)
      .expect("request");
    let outcome = vm.confirm_delete();

    assert!(matches!(
      outcome,
      DeleteOutcome::Removed(ref t) if t.id == 2
    ));
    let ids: Vec<u64> =
      vm.tasks().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 3]);
  }

  #[test]
  fn request_replaces_pending_target() {
    let all = tasks(3);
    let mut vm = TaskViewModel::new(
      all.clone(),
      ViewModelPolicy::default()
    );

    vm.request_delete(all[0].clone());
    assert_eq!(
      vm.workflow()
        .pending_task()
        .map(|t| t.id),
      Some(1)
    );

    vm.request_delete(all[2].clone());
    assert_eq!(
      vm.snapshot()
        .pending_delete
        .map(|t| t.id),
      Some(3)
    );

    vm.cancel_delete();
    assert_eq!(
      vm.workflow(),
      &DeleteWorkflow::Idle
    );
    assert!(!vm.snapshot().confirmation_visible());
    assert_eq!(vm.tasks().len(), 3);
  }

  #[test]
  fn kept_page_past_end_still_reports_matches() {
    let mut vm = TaskViewModel::new(
      tasks(8),
      ViewModelPolicy::default()
    );
    assert!(vm.set_page(2));
    vm.update_filter(FilterField::Type, "setup")
      .expect("filter");

    let view = vm.snapshot();
    assert_eq!(view.current_page, 2);
    assert!(view.tasks.is_empty());
    assert_eq!(view.match_count, 4);
  }

  #[test]
  fn confirm_without_request_is_noop() {
    let mut vm = TaskViewModel::new(
      tasks(2),
      ViewModelPolicy::default()
    );
    assert_eq!(
      vm.confirm_delete(),
      DeleteOutcome::NothingPending
    );
  }

  #[test]
  fn handle_dispatches_events() {
    let mut vm = TaskViewModel::new(
      tasks(8),
      ViewModelPolicy::default()
    );

    let outcome = vm
      .handle(ViewEvent::NextRequested)
      .expect("next");
    assert_eq!(
      outcome,
      EventOutcome::Page {
        changed: true,
        current: 2
      }
    );

    let outcome = vm
      .handle(ViewEvent::DeleteRequested(7))
      .expect("delete");
    assert!(matches!(
      outcome,
      EventOutcome::ConfirmationShown(ref t) if t.id == 7
    ));
    assert!(vm.snapshot().confirmation_visible());

    vm.handle(ViewEvent::DeleteCancelled)
      .expect("cancel");
    assert!(
      !vm.snapshot().confirmation_visible()
    );

    assert!(
      vm.handle(ViewEvent::DeleteRequested(
        99
      ))
      .is_err()
    );
    assert!(
      vm.handle(
        ViewEvent::FilterChanged {
          field: FilterField::Date,
          value: "tomorrow".to_string()
        }
      )
      .is_err()
    );
  }

  #[test]
  fn snapshot_reports_display_pages() {
    let mut vm = TaskViewModel::new(
      tasks(8),
      ViewModelPolicy::default()
    );
    vm.update_filter(
      FilterField::Type,
      "nothing"
    )
    .expect("type");

    let view = vm.snapshot();
    assert_eq!(view.match_count, 0);
    assert_eq!(view.total_pages, 1);
    assert!(view.tasks.is_empty());
    assert_eq!(view.slots().len(), 6);
    assert!(!view.has_next());
    assert!(!view.has_previous());
  }

  #[test]
  fn reset_restores_defaults() {
    let mut vm = TaskViewModel::new(
      tasks(8),
      ViewModelPolicy::default()
    );
    vm.next();
    vm.update_filter(
      FilterField::Type,
      "setup"
    )
    .expect("type");
    vm.request_delete_by_id(1)
      .expect("request");

    vm.reset();
    assert_eq!(vm.current_page(), 1);
    assert!(vm.criteria().is_unset());
    assert!(
      !vm.workflow().confirmation_visible()
    );
  }
}
