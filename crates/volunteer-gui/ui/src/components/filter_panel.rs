use volunteer_model::sample::TASK_KINDS;
use volunteer_model::{
  FilterCriteria,
  FilterField,
  ViewEvent
};
use web_sys::{
  HtmlInputElement,
  HtmlSelectElement
};
use yew::{
  Callback,
  Event,
  Html,
  InputEvent,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct FilterPanelProps {
  pub criteria: FilterCriteria,
  pub error:    Option<String>,
  pub on_event: Callback<ViewEvent>
}

fn type_change(
  on_event: &Callback<ViewEvent>
) -> Callback<Event> {
  let on_event = on_event.clone();
  Callback::from(move |e: Event| {
    let select: HtmlSelectElement =
      e.target_unchecked_into();
    on_event.emit(
      ViewEvent::FilterChanged {
        field: FilterField::Type,
        value: select.value()
      }
    );
  })
}

/// Fires on every keystroke, so the grid
/// follows the input as it is typed.
fn field_input(
  on_event: &Callback<ViewEvent>,
  field: FilterField
) -> Callback<InputEvent> {
  let on_event = on_event.clone();
  Callback::from(move |e: InputEvent| {
    let input: HtmlInputElement =
      e.target_unchecked_into();
    on_event.emit(
      ViewEvent::FilterChanged {
        field,
        value: input.value()
      }
    );
  })
}

#[function_component(FilterPanel)]
pub fn filter_panel(
  props: &FilterPanelProps
) -> Html {
  let criteria = &props.criteria;

  html! {
      <div class="panel filters">
          <h3 class="header">{ "Filter Tasks" }</h3>
          <form class="details filter-grid">
              <div class="field">
                  <label>{ "Type" }</label>
                  <select
                      name={FilterField::Type.form_name()}
                      value={criteria.form_value(FilterField::Type)}
                      onchange={type_change(&props.on_event)}
                  >
                      <option value="">{ "All Types" }</option>
                      {
                          for TASK_KINDS.iter().map(|(value, label)| html! {
                              <option value={*value}>{ *label }</option>
                          })
                      }
                  </select>
              </div>
              <div class="field">
                  <label>{ "Date" }</label>
                  <input
                      type="date"
                      name={FilterField::Date.form_name()}
                      value={criteria.form_value(FilterField::Date)}
                      oninput={field_input(&props.on_event, FilterField::Date)}
                  />
              </div>
              <div class="field">
                  <label>{ "Minimum Points" }</label>
                  <input
                      type="number"
                      min="0"
                      name={FilterField::MinPoints.form_name()}
                      placeholder="e.g. 10"
                      value={criteria.form_value(FilterField::MinPoints)}
                      oninput={field_input(&props.on_event, FilterField::MinPoints)}
                  />
              </div>
          </form>
          {
              if let Some(error) = props.error.as_ref() {
                  html! { <div class="field-help error">{ error.clone() }</div> }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
