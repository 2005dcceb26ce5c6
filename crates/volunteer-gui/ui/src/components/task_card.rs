use volunteer_model::VolunteerTask;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskCardProps {
  pub task:      VolunteerTask,
  pub on_delete: Callback<u64>
}

#[function_component(TaskCard)]
pub fn task_card(
  props: &TaskCardProps
) -> Html {
  let task = &props.task;
  let id = task.id;
  let on_delete =
    props.on_delete.clone();

  html! {
      <div class="card task-card">
          <h3 class="title">{ &task.name }</h3>
          <div class="meta">{ format!("Date: {}", task.date.format("%Y-%m-%d")) }</div>
          <div class="meta">{ format!("Time: {}", task.time) }</div>
          <div class="meta">
              { format!("Volunteers Needed: {}", task.volunteers_needed) }
          </div>
          <div class="meta">{ format!("Points: {}", task.points) }</div>
          <div class="actions">
              <button
                  class="btn warn"
                  type="button"
                  onclick={|_| gloo::dialogs::alert("Edit functionality here")}
              >
                  { "Edit" }
              </button>
              <button
                  class="btn danger"
                  type="button"
                  onclick={move |_| on_delete.emit(id)}
              >
                  { "Delete" }
              </button>
          </div>
      </div>
  }
}
