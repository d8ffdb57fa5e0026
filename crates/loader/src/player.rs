use super::*;

/// The downstream player element.
#[derive(Boilerplate, Clone, Debug, Eq, PartialEq)]
#[boilerplate(filename = "player.html")]
pub struct PlayerHtml {
  pub can_play: bool,
  pub height: String,
  pub initial_index: u32,
  pub tag: String,
  pub xml_base: Option<String>,
  pub xml_data: Option<String>,
}
