use volunteer_model::sample::{
  how_it_works,
  landing_highlights
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  function_component,
  html
};
use yew_router::prelude::*;

use crate::app::Route;

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
  let navigator = use_navigator();
  let go = |route: Route| {
    let navigator = navigator.clone();
    Callback::from(move |_: MouseEvent| {
      if let Some(nav) = navigator.as_ref()
      {
        nav.push(&route);
      }
    })
  };

  html! {
      <div class="page landing-page">
          <section class="hero">
              <h1>{ "Welcome to Our Mosque Volunteer Platform" }</h1>
              <p>
                  { "An app dedicated to organizing volunteer tasks and helping the mosque community flourish through service." }
              </p>
              <div class="actions">
                  <button class="btn btn-accent" onclick={go(Route::Register)}>{ "Get Started" }</button>
                  <button class="btn btn-outline" onclick={go(Route::About)}>{ "Learn More" }</button>
              </div>
          </section>

          <section class="steps">
              <h2>{ "How It Works" }</h2>
              <div class="step-grid">
                  {
                      for how_it_works().into_iter().map(|step| html! {
                          <div class="card step">
                              <h3>{ step.step }</h3>
                              <p>{ step.description }</p>
                          </div>
                      })
                  }
              </div>
          </section>

          <section class="highlights">
              <h2>{ "Upcoming Events & Tasks" }</h2>
              <div class="highlight-grid">
                  {
                      for landing_highlights().into_iter().map(|task| html! {
                          <div class="card highlight">
                              <h3>{ task.title }</h3>
                              <p>{ "Date: " }<span class="value">{ task.when }</span></p>
                              <p>{ "Points: " }<span class="value points">{ task.points }</span></p>
                          </div>
                      })
                  }
              </div>
              <button class="btn btn-primary" onclick={go(Route::Tasks)}>{ "View All Tasks" }</button>
          </section>

          <section class="call-to-action">
              <h2>{ "Join our community of dedicated volunteers!" }</h2>
              <p>{ "Make a difference by helping out at the mosque. Every small act counts!" }</p>
              <button class="btn btn-accent" onclick={go(Route::Register)}>{ "Become a Volunteer" }</button>
          </section>
      </div>
  }
}
