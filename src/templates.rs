use {super::*, loader::Attribute};

#[derive(Boilerplate)]
pub(crate) struct DemoHtml {
  pub(crate) attributes: Vec<(Attribute, String)>,
  pub(crate) widget: bool,
}
