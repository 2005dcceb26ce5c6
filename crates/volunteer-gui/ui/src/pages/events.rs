use volunteer_model::sample::sample_events;
use yew::{
  Html,
  function_component,
  html
};

#[function_component(EventsPage)]
pub fn events_page() -> Html {
  let events = sample_events();

  html! {
      <div class="page events-page">
          <section class="hero">
              <h1>{ "Upcoming Events" }</h1>
              <p>
                  { "Participate in upcoming events to support our community and connect with fellow volunteers." }
              </p>
          </section>
          <section class="event-grid">
              {
                  for events.into_iter().map(|event| {
                      let message = event.details_message();
                      html! {
                          <div key={event.id.to_string()} class="card event-card">
                              <div>
                                  <h2>{ &event.name }</h2>
                                  <div class="meta"><span class="label">{ "Date:" }</span>{ " " }{ &event.when }</div>
                                  <div class="meta"><span class="label">{ "Location:" }</span>{ " " }{ &event.location }</div>
                                  <p class="description">{ &event.description }</p>
                              </div>
                              <button
                                  class="btn btn-primary"
                                  type="button"
                                  onclick={move |_| gloo::dialogs::alert(&message)}
                              >
                                  { "View Details" }
                              </button>
                          </div>
                      }
                  })
              }
          </section>
      </div>
  }
}
