use yew::prelude::*;

use crate::home::Home;
use crate::meta::{use_page_meta, PAGE_META};

#[function_component(App)]
pub fn app() -> Html {
  use_page_meta(PAGE_META);
  html! { <Home /> }
}
