use serde::{Deserialize, Serialize};
use thiserror::Error;

#[macro_export]
macro_rules! clone {
  ($($n:ident),+; $body:expr) => (
    {
      $( let $n = $n.clone(); )+
      $body
    }
  );
}

/// One entry of the team roster shown on the landing page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TeamMember {
  pub name: String,
  pub role: String,
  pub linkedin: String,
  pub email: String,
  pub image_path: String,
}

impl TeamMember {
  fn new(name: &str, role: &str, linkedin: &str, email: &str, image_path: &str) -> Self {
    Self {
      name: name.to_owned(),
      role: role.to_owned(),
      linkedin: linkedin.to_owned(),
      email: email.to_owned(),
      image_path: image_path.to_owned(),
    }
  }
}

/// The fixed roster, rebuilt on every call. The image paths were never
/// committed alongside the page, so they don't resolve and the browser shows
/// its broken-image placeholder for each card.
pub fn team_members() -> Vec<TeamMember> {
  vec![
    TeamMember::new(
      "Yanfeng Xu",
      "JIRA",
      "https://www.linkedin.com/in/yanfeng-xu-734698239/",
      "yx3104@nyu.edu",
      "path_to_xu.jpg",
    ),
    TeamMember::new(
      "Tianyi Wu",
      "Email Communication",
      "https://www.linkedin.com/in/tianyi-wu-b558a51a3/",
      "tw2709@nyu.edu",
      "path_to_yi.jpg",
    ),
    TeamMember::new(
      "Ruoan Ni",
      "Meeting Notes",
      "https://www.linkedin.com/in/ruoan-ni-97815424b/",
      "rn2429@nyu.edu",
      "path_to_mao.jpg",
    ),
    TeamMember::new(
      "Rui Xue",
      "Meeting Moderator",
      "https://www.linkedin.com/in/rui-xue-b854731a4/",
      "rx2161@nyu.edu",
      "path_to_rui.jpg",
    ),
  ]
}

/// Author-controlled markup that is allowed to bypass escaping when rendered.
/// Anything that isn't wrapped in this goes through normal text escaping, so
/// untrusted input can't reach the unescaped path by accident.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrustedHtml(String);

impl TrustedHtml {
  pub fn new(markup: impl Into<String>) -> Self { Self(markup.into()) }
  pub fn as_str(&self) -> &str { &self.0 }
  pub fn into_string(self) -> String { self.0 }
}

/// Minimal escaping for plain-text table cells.
pub fn escape_text(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  for c in text.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      c => out.push(c),
    }
  }
  out
}

/// Wrap a link in an anchor that opens in a new tab. Link and label are
/// author-controlled literals and are emitted byte-exact.
pub fn make_clickable(link: &str, text: &str) -> TrustedHtml {
  TrustedHtml(format!("<a target=\"_blank\" href=\"{link}\">{text}</a>"))
}

pub fn mailto(addr: &str) -> String { format!("mailto:{addr}") }

/// A row of the contact table: plain text for name and role, clickable
/// anchors for the two contact channels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactRow {
  pub name: String,
  pub role: String,
  pub email: TrustedHtml,
  pub linkedin: TrustedHtml,
}

pub fn contact_rows(members: &[TeamMember]) -> Vec<ContactRow> {
  members
    .iter()
    .map(|m| ContactRow {
      name: m.name.clone(),
      role: m.role.clone(),
      email: make_clickable(&mailto(&m.email), &m.email),
      linkedin: make_clickable(&m.linkedin, "LinkedIn"),
    })
    .collect()
}

/// Render the contact rows as an HTML table. Anchor cells pass through
/// unescaped so they stay clickable; text cells are escaped.
pub fn contact_table(rows: &[ContactRow]) -> TrustedHtml {
  let mut html = String::from(
    "<table class=\"contact-table\"><thead><tr>\
     <th>name</th><th>role</th><th>email</th><th>linkedin</th>\
     </tr></thead><tbody>",
  );
  for row in rows {
    html.push_str("<tr>");
    html.push_str(&format!("<td>{}</td>", escape_text(&row.name)));
    html.push_str(&format!("<td>{}</td>", escape_text(&row.role)));
    html.push_str(&format!("<td>{}</td>", row.email.as_str()));
    html.push_str(&format!("<td>{}</td>", row.linkedin.as_str()));
    html.push_str("</tr>");
  }
  html.push_str("</tbody></table>");
  TrustedHtml(html)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
  #[error("{items} records don't fit {regions} layout regions")]
  RegionMismatch { items: usize, regions: usize },
}

/// A column grid shows one record per region; any other count would silently
/// overflow or leave regions empty, so the mismatch is surfaced instead.
pub fn split_into_regions<T>(items: &[T], regions: usize) -> Result<&[T], LayoutError> {
  if items.len() == regions {
    Ok(items)
  } else {
    Err(LayoutError::RegionMismatch { items: items.len(), regions })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn roster_has_four_members_in_order() {
    let members = team_members();
    let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Yanfeng Xu", "Tianyi Wu", "Ruoan Ni", "Rui Xue"]);
  }

  #[test]
  fn roster_serializes_with_expected_field_names() {
    let json = serde_json::to_value(&team_members()[0]).unwrap();
    for key in ["name", "role", "linkedin", "email", "image_path"] {
      assert!(json.get(key).is_some(), "missing field {key}");
    }
  }

  #[test]
  fn make_clickable_emits_exact_href_and_text() {
    let anchor = make_clickable("https://x.com", "LinkedIn");
    assert_eq!(anchor.as_str(), "<a target=\"_blank\" href=\"https://x.com\">LinkedIn</a>");
  }

  #[test]
  fn email_cells_use_mailto_hrefs() {
    let rows = contact_rows(&team_members());
    assert_eq!(
      rows[0].email.as_str(),
      "<a target=\"_blank\" href=\"mailto:yx3104@nyu.edu\">yx3104@nyu.edu</a>"
    );
  }

  #[test]
  fn contact_rows_keep_length_and_order() {
    let rows = contact_rows(&team_members());
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[3].name, "Rui Xue");
    assert_eq!(rows[3].linkedin.as_str(), make_clickable(
      "https://www.linkedin.com/in/rui-xue-b854731a4/",
      "LinkedIn",
    ).as_str());
  }

  #[test]
  fn contact_table_has_four_rows_with_fixed_column_order() {
    let table = contact_table(&contact_rows(&team_members()));
    let html = table.as_str();
    let body = html.split_once("<tbody>").unwrap().1;
    assert_eq!(body.matches("<tr>").count(), 4);
    let head = html.split_once("<tbody>").unwrap().0;
    let cols: Vec<usize> = ["<th>name</th>", "<th>role</th>", "<th>email</th>", "<th>linkedin</th>"]
      .iter()
      .map(|th| head.find(th).unwrap())
      .collect();
    assert!(cols.windows(2).all(|w| w[0] < w[1]));
  }

  #[test]
  fn contact_table_is_deterministic() {
    let rows = contact_rows(&team_members());
    assert_eq!(contact_table(&rows), contact_table(&rows));
  }

  #[test]
  fn escape_text_neutralizes_markup() {
    assert_eq!(escape_text("a <b> & \"c\""), "a &lt;b&gt; &amp; &quot;c&quot;");
  }

  #[test]
  fn four_records_fit_four_regions() {
    let members = team_members();
    assert_eq!(split_into_regions(&members, 4).unwrap().len(), 4);
  }

  #[test]
  fn five_records_are_rejected_by_four_regions() {
    let mut members = team_members();
    members.push(members[0].clone());
    assert_eq!(
      split_into_regions(&members, 4),
      Err(LayoutError::RegionMismatch { items: 5, regions: 4 })
    );
  }
}
