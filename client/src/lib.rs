pub mod app;
pub mod home;
pub mod meta;
pub mod theme;

use common::TrustedHtml;
use yew::{AttrValue, Html};

/// The only route from a string to unescaped output. Everything else the page
/// emits goes through yew's normal text escaping.
pub fn raw_html(markup: &TrustedHtml) -> Html {
  Html::from_html_unchecked(AttrValue::from(markup.as_str().to_owned()))
}
