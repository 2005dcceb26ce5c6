use volunteer_model::VolunteerTask;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct DeleteModalProps {
  pub task:       Option<VolunteerTask>,
  pub on_confirm: Callback<MouseEvent>,
  pub on_cancel:  Callback<MouseEvent>
}

#[function_component(DeleteModal)]
pub fn delete_modal(
  props: &DeleteModalProps
) -> Html {
  let Some(task) = props.task.as_ref()
  else {
    return html! {};
  };

  html! {
      <div class="modal-backdrop" onclick={props.on_cancel.clone()}>
          <div class="modal modal-sm" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
              <div class="header">{ "Confirm Deletion" }</div>
              <div class="content">
                  { format!("Are you sure you want to delete \"{}\"?", task.name) }
              </div>
              <div class="footer">
                  <button class="btn danger" type="button" onclick={props.on_confirm.clone()}>
                      { "Delete" }
                  </button>
                  <button class="btn" type="button" onclick={props.on_cancel.clone()}>
                      { "Cancel" }
                  </button>
              </div>
          </div>
      </div>
  }
}
