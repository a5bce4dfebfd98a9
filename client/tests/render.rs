//! Server-side renders of the page, checked for structure and determinism.

use client::app::App;
use common::team_members;

async fn render_page() -> String {
  yew::LocalServerRenderer::<App>::new().hydratable(false).render().await
}

#[tokio::test]
async fn rendering_twice_is_byte_identical() {
  assert_eq!(render_page().await, render_page().await);
}

#[tokio::test]
async fn page_shows_every_member_card() {
  let html = render_page().await;
  for member in team_members() {
    assert!(html.contains(&member.name), "missing card for {}", member.name);
    assert!(html.contains(&member.role), "missing role for {}", member.name);
    // the broken paths flow through verbatim; the browser degrades to its
    // placeholder instead of the page failing
    assert!(html.contains(&member.image_path));
  }
}

#[tokio::test]
async fn page_has_one_grid_region_per_member() {
  let html = render_page().await;
  assert_eq!(html.matches("class=\"member\"").count(), team_members().len());
}

#[tokio::test]
async fn contact_anchors_survive_markup_passthrough() {
  let html = render_page().await;
  assert!(html.contains("href=\"mailto:yx3104@nyu.edu\""));
  assert!(html.contains("href=\"https://www.linkedin.com/in/rui-xue-b854731a4/\""));
  assert_eq!(html.matches(">LinkedIn</a>").count(), 4);
}

#[tokio::test]
async fn page_embeds_video_and_style_override() {
  let html = render_page().await;
  assert!(html.contains("<iframe"));
  assert!(html.contains("https://cdn.pixabay.com/video/2016/12/31/6962-197634410_large.mp4"));
  assert!(html.contains("<style>"));
  assert!(html.contains(".team-grid img { width: 100%; }"));
}
