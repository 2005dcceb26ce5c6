use volunteer_model::ViewEvent;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
  pub current_page: usize,
  pub total_pages:  usize,
  pub on_event:     Callback<ViewEvent>
}

#[function_component(Pagination)]
pub fn pagination(
  props: &PaginationProps
) -> Html {
  let emit = |event: ViewEvent| {
    let on_event = props.on_event.clone();
    Callback::from(move |_: MouseEvent| {
      on_event.emit(event.clone())
    })
  };

  html! {
      <div class="pagination">
          <button
              class="btn"
              disabled={props.current_page <= 1}
              onclick={emit(ViewEvent::PreviousRequested)}
          >
              { "Previous" }
          </button>
          {
              for (1..=props.total_pages).map(|page| {
                  let class = if page == props.current_page { "btn page active" } else { "btn page" };
                  html! {
                      <button class={class} onclick={emit(ViewEvent::PageRequested(page))}>
                          { page }
                      </button>
                  }
              })
          }
          <button
              class="btn"
              disabled={props.current_page >= props.total_pages}
              onclick={emit(ViewEvent::NextRequested)}
          >
              { "Next" }
          </button>
      </div>
  }
}
