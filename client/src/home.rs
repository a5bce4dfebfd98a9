use common::{contact_rows, contact_table, split_into_regions, team_members, TeamMember, TrustedHtml};
use yew::prelude::*;

use crate::raw_html;
use crate::theme::GlobalStyle;

/// Number of side-by-side regions in the team grid. Must match the roster
/// length; `TeamGrid` checks instead of assuming.
pub const GRID_REGIONS: usize = 4;

const VIDEO_EMBED: &str = "<iframe width=\"800\" height=\"450\" \
  src=\"https://cdn.pixabay.com/video/2016/12/31/6962-197634410_large.mp4\" \
  scrolling=\"no\" frameborder=\"no\" allowfullscreen=\"true\"></iframe>";

#[function_component(Home)]
pub fn home() -> Html {
  let members = team_members();
  let table = contact_table(&contact_rows(&members));
  html! {
    <main>
      <GlobalStyle />
      <h1>{"Welcome to 2024 CDW Project! 👋"}</h1>
      <h3>{"Project Introduction"}</h3>
      <p>{"This website, as the final phase of the capstone project, will contain all
      deliverables of the project and serve as a publicly accessible site for displaying
      maps."}</p>
      <p>{"In this web application the team developed an interactive dashboard to
      visualize CDW flows in a variety of graphical views. This tool is useful in policy
      development for CDW recycling and reuse, providing insight into annual flow trends
      by material type, transaction, and destination, potentially facilitating a more
      sustainable approach to CDW management."}</p>
      <p>{"This project is part of a long-term collaboration between New York University
      (NYU) and the New York City Department of Design and Construction (DDC). This
      collaboration is embodied in the Town+Gown platform, a city-wide applied research
      platform designed to connect practitioners, including New York City organizations,
      with academics. Through this platform, students in NYU's Master of Science in
      Technology Management and Innovation program are able to engage in real-world
      research on urban problems and provide innovative solutions."}</p>
      <h3>{"How to use this web?"}</h3>
      { raw_html(&TrustedHtml::new(VIDEO_EMBED)) }
      <h1>{"About Us"}</h1>
      <TeamGrid members={members} />
      <h1>{"Connect with us"}</h1>
      <p>{"If you have any problems, please connect with us!"}</p>
      { raw_html(&table) }
    </main>
  }
}

#[derive(PartialEq, Properties)]
pub struct TeamGridProps {
  pub members: Vec<TeamMember>,
}

#[function_component(TeamGrid)]
pub fn team_grid(props: &TeamGridProps) -> Html {
  match split_into_regions(&props.members, GRID_REGIONS) {
    Err(e) => html! { <p class="layout-error">{e.to_string()}</p> },
    Ok(members) => html! {
      <div class="team-grid">
        { for members.iter().map(|member| html! {
          <div class="member">
            // the roster's image paths don't resolve; the browser falls back
            // to its broken-image placeholder rather than failing the page
            <img src={member.image_path.clone()} alt={member.name.clone()} />
            <p>{member.name.clone()}</p>
            <p>{member.role.clone()}</p>
          </div>
        })}
      </div>
    },
  }
}
