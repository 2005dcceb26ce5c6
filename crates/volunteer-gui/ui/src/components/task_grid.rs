use volunteer_model::TaskView;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskCard;

#[derive(Properties, PartialEq)]
pub struct TaskGridProps {
  pub view:      TaskView,
  pub on_delete: Callback<u64>
}

/// Always renders `items_per_page` cells;
/// missing tasks become invisible
/// placeholders so the grid keeps its
/// height.
#[function_component(TaskGrid)]
pub fn task_grid(
  props: &TaskGridProps
) -> Html {
  html! {
      <div class="task-grid">
          {
              for props.view.slots().into_iter().enumerate().map(|(idx, slot)| match slot {
                  Some(task) => html! {
                      <TaskCard
                          key={task.id.to_string()}
                          task={task.clone()}
                          on_delete={props.on_delete.clone()}
                      />
                  },
                  None => html! {
                      <div key={format!("placeholder-{idx}")} class="card placeholder">
                          <div class="invisible">{ "Placeholder" }</div>
                      </div>
                  },
              })
          }
      </div>
  }
}
