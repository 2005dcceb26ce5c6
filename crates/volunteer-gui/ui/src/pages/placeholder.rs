use yew::{
  AttrValue,
  Html,
  Properties,
  function_component,
  html
};
use yew_router::prelude::Link;

use crate::app::Route;

#[derive(Properties, PartialEq)]
pub struct PlaceholderPageProps {
  pub title: AttrValue
}

/// Stand-in for pages owned by services
/// this front end does not talk to yet.
#[function_component(PlaceholderPage)]
pub fn placeholder_page(
  props: &PlaceholderPageProps
) -> Html {
  html! {
      <div class="page placeholder-page">
          <h2>{ props.title.clone() }</h2>
          <p>{ "This page is not available yet." }</p>
          <Link<Route> to={Route::Landing}>{ "Back to home" }</Link<Route>>
      </div>
  }
}
