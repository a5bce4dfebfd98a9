use web_sys::wasm_bindgen::{JsCast, UnwrapThrowExt};
use web_sys::HtmlLinkElement;
use yew::prelude::*;

/// Per-page document metadata, passed in explicitly instead of read from
/// ambient framework state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageMeta {
  pub title: &'static str,
  pub icon: &'static str,
}

pub const PAGE_META: PageMeta = PageMeta { title: "NYU-MOT-CDW", icon: "👋" };

fn icon_data_url(icon: &str) -> String {
  format!(
    "data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' \
     viewBox='0 0 100 100'><text y='.9em' font-size='90'>{icon}</text></svg>"
  )
}

/// Applies the title and favicon to the document. Runs as a browser effect
/// only, so server-side rendering never touches the DOM.
#[hook]
pub fn use_page_meta(meta: PageMeta) {
  use_effect_with(meta, |meta| {
    let document = gloo_utils::document();
    document.set_title(meta.title);
    let link = match document.query_selector("link[rel='icon']").unwrap_throw() {
      Some(el) => el.dyn_into::<HtmlLinkElement>().unwrap_throw(),
      None => {
        let el = document
          .create_element("link")
          .unwrap_throw()
          .dyn_into::<HtmlLinkElement>()
          .unwrap_throw();
        el.set_rel("icon");
        document.head().unwrap_throw().append_child(&el).unwrap_throw();
        el
      },
    };
    link.set_href(&icon_data_url(meta.icon));
  });
}
