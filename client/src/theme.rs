use common::TrustedHtml;
use yew::prelude::*;

use crate::raw_html;

/// Style override: space out the layout columns and make images fill their
/// column width.
pub const STYLE_OVERRIDE: &str = "\
.team-grid { display: flex; gap: 20px; }
.team-grid .member { flex: 1 1 0; min-width: 0; }
.team-grid img { width: 100%; }
";

#[function_component(GlobalStyle)]
pub fn global_style() -> Html {
  raw_html(&TrustedHtml::new(format!("<style>{STYLE_OVERRIDE}</style>")))
}
