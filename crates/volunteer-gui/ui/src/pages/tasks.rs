use std::rc::Rc;

use volunteer_model::{
  StaticTaskProvider,
  TaskViewModel,
  ViewEvent,
  ViewModelPolicy
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Reducible,
  function_component,
  html,
  use_reducer
};

use crate::components::{
  DeleteModal,
  FilterPanel,
  Pagination,
  TaskGrid
};

#[derive(Clone)]
struct TaskPageState {
  vm:    TaskViewModel,
  error: Option<String>
}

impl TaskPageState {
  fn load() -> Self {
    let provider =
      StaticTaskProvider::default();
    match TaskViewModel::from_provider(
      &provider,
      ViewModelPolicy::default()
    ) {
      | Ok(vm) => Self {
        vm,
        error: None
      },
      | Err(err) => {
        tracing::error!(error = %err, "failed to load tasks");
        Self {
          vm:    TaskViewModel::new(
            vec![],
            ViewModelPolicy::default()
          ),
          error: Some(format!(
            "failed to load tasks: \
             {err:#}"
          ))
        }
      }
    }
  }
}

impl Reducible for TaskPageState {
  type Action = ViewEvent;

  fn reduce(
    self: Rc<Self>,
    action: ViewEvent
  ) -> Rc<Self> {
    let mut next = (*self).clone();
    match next.vm.handle(action) {
      | Ok(outcome) => {
        tracing::debug!(?outcome, "task page event");
        next.error = None;
      }
      | Err(err) => {
        tracing::warn!(error = %err, "task page event rejected");
        next.error =
          Some(format!("{err:#}"));
      }
    }
    Rc::new(next)
  }
}

#[function_component(TasksPage)]
pub fn tasks_page() -> Html {
  let state =
    use_reducer(TaskPageState::load);
  let view = state.vm.snapshot();

  let on_event = {
    let state = state.clone();
    Callback::from(
      move |event: ViewEvent| {
        state.dispatch(event)
      }
    )
  };
  let on_delete = {
    let state = state.clone();
    Callback::from(move |id: u64| {
      state.dispatch(
        ViewEvent::DeleteRequested(id)
      )
    })
  };
  let on_confirm = {
    let state = state.clone();
    Callback::from(
      move |_: MouseEvent| {
        state.dispatch(
          ViewEvent::DeleteConfirmed
        )
      }
    )
  };
  let on_cancel = {
    let state = state.clone();
    Callback::from(
      move |_: MouseEvent| {
        state.dispatch(
          ViewEvent::DeleteCancelled
        )
      }
    )
  };

  html! {
      <div class="page tasks-page">
          <h2 class="page-title">{ "Task Management" }</h2>
          <FilterPanel
              criteria={view.criteria.clone()}
              error={state.error.clone()}
              on_event={on_event.clone()}
          />
          {
              if view.match_count == 0 {
                  html! { <div class="empty">{ "No tasks match these filters." }</div> }
              } else {
                  html! {}
              }
          }
          <TaskGrid view={view.clone()} on_delete={on_delete} />
          <Pagination
              current_page={view.current_page}
              total_pages={view.total_pages}
              on_event={on_event}
          />
          <DeleteModal
              task={view.pending_delete.clone()}
              on_confirm={on_confirm}
              on_cancel={on_cancel}
          />
      </div>
  }
}
