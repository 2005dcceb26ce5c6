//! Domain types and the task list view-model
//! shared by the terminal and browser front
//! ends. Kept free of native-only
//! dependencies so it builds for wasm.

pub mod community;
pub mod filter;
pub mod paginate;
pub mod provider;
pub mod sample;
pub mod session;
pub mod task;
pub mod view_model;
pub mod workflow;

pub use filter::{
  FilterCriteria,
  FilterField,
  apply_filters
};
pub use paginate::{
  ITEMS_PER_PAGE,
  Page,
  paginate
};
pub use provider::{
  StaticTaskProvider,
  TaskProvider
};
pub use session::Session;
pub use task::VolunteerTask;
pub use view_model::{
  DeleteMode,
  DeleteOutcome,
  EventOutcome,
  TaskView,
  TaskViewModel,
  ViewEvent,
  ViewModelPolicy
};
pub use workflow::DeleteWorkflow;
