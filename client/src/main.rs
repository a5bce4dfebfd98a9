use client::app::App;
use gloo_console::log;

fn main() {
  console_error_panic_hook::set_once();
  log!("Mounting CDW landing page...");
  yew::Renderer::<App>::new().render();
}
