use volunteer_model::Session;
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_state
};
use yew_router::prelude::*;

use crate::components::Header;
use crate::pages::{
  EventsPage,
  LandingPage,
  PlaceholderPage,
  TasksPage
};

#[derive(
  Clone, Routable, PartialEq, Debug,
)]
pub enum Route {
  #[at("/")]
  Landing,
  #[at("/events")]
  Events,
  #[at("/tasks")]
  Tasks,
  #[at("/login")]
  Login,
  #[at("/register")]
  Register,
  #[at("/about")]
  About,
  #[not_found]
  #[at("/404")]
  NotFound
}

impl Route {
  /// Maps the plain paths used by the
  /// shared header model onto routes.
  pub fn from_path(
    path: &str
  ) -> Route {
    Route::recognize(path)
      .unwrap_or(Route::NotFound)
  }
}

fn switch(route: Route) -> Html {
  tracing::debug!(?route, "route change");
  match route {
    | Route::Landing => {
      html! { <LandingPage /> }
    }
    | Route::Events => {
      html! { <EventsPage /> }
    }
    | Route::Tasks => {
      html! { <TasksPage /> }
    }
    | Route::Login => html! {
        <PlaceholderPage title="Sign in" />
    },
    | Route::Register => html! {
        <PlaceholderPage title="Create an Account" />
    },
    | Route::About => html! {
        <PlaceholderPage title="About" />
    },
    | Route::NotFound => html! {
        <PlaceholderPage title="Page not found" />
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  html! {
      <BrowserRouter>
          <Shell />
      </BrowserRouter>
  }
}

/// Owns the session handed to the header.
/// Until a sign-in service exists it stays
/// anonymous.
#[function_component(Shell)]
fn shell() -> Html {
  let session =
    use_state(Session::default);
  let navigator = use_navigator();

  let on_logout = {
    let session = session.clone();
    Callback::from(move |_| {
      let (next, path) =
        (*session).clone().logout();
      session.set(next);
      if let Some(nav) = navigator.as_ref()
      {
        nav.push(&Route::from_path(path));
      }
    })
  };

  html! {
      <>
          <Header session={(*session).clone()} on_logout={on_logout} />
          <main>
              <Switch<Route> render={switch} />
          </main>
      </>
  }
}
