use volunteer_model::Session;
use volunteer_model::session::HeaderAction;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};
use yew_router::prelude::Link;

use crate::app::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
  pub session:   Session,
  pub on_logout: Callback<MouseEvent>
}

#[function_component(Header)]
pub fn header(
  props: &HeaderProps
) -> Html {
  html! {
      <header class="site-header">
          <nav class="nav">
              <Link<Route> to={Route::Landing}>{ "Home" }</Link<Route>>
              <Link<Route> to={Route::Events}>{ "Events" }</Link<Route>>
              <Link<Route> to={Route::Tasks}>{ "Tasks" }</Link<Route>>
          </nav>
          <div class="session">
              {
                  for props.session.header_actions().into_iter().map(|action| match action {
                      HeaderAction::Greeting(text) => html! {
                          <p class="greeting">{ text }</p>
                      },
                      HeaderAction::Link { label, route } => html! {
                          <Link<Route> classes="btn btn-primary btn-sm" to={Route::from_path(route)}>
                              { label }
                          </Link<Route>>
                      },
                      HeaderAction::Logout => html! {
                          <button class="btn btn-outline btn-xs" onclick={props.on_logout.clone()}>
                              { "logout" }
                          </button>
                      },
                  })
              }
          </div>
      </header>
  }
}
