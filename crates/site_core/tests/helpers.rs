use pretty_assertions::assert_eq;
use serde_json::json;
use site_core::{
    Assigns, Helpers, Item, LinkError, LinkResolver, LinkTarget, RenderError, Renderer,
    SiteConfig,
};

struct EchoRenderer;

impl Renderer for EchoRenderer {
    fn render(&self, layout: &str, assigns: &Assigns) -> Result<String, RenderError> {
        if layout != "/footer/" {
            return Err(RenderError::UnknownLayout(layout.to_string()));
        }
        let who = assigns
            .get("author")
            .and_then(|v| v.as_str())
            .unwrap_or("anonymous");
        Ok(format!("<footer>{who}</footer>"))
    }
}

struct PlainLinks;

impl LinkResolver for PlainLinks {
    fn link_to(
        &self,
        text: &str,
        target: LinkTarget<'_>,
        _attributes: &[(&str, &str)],
    ) -> Result<String, LinkError> {
        Ok(format!("{text} -> {}", target.path()?))
    }

    fn link_to_unless_current(
        &self,
        text: &str,
        target: LinkTarget<'_>,
        attributes: &[(&str, &str)],
        current: Option<&Item>,
    ) -> Result<String, LinkError> {
        if current.and_then(Item::path) == Some(target.path()?) {
            return Ok(text.to_string());
        }
        self.link_to(text, target, attributes)
    }

    fn relative_path_to(
        &self,
        target: LinkTarget<'_>,
        _current: &Item,
    ) -> Result<String, LinkError> {
        target.path().map(str::to_string)
    }
}

fn helpers() -> Helpers {
    Helpers::new(SiteConfig::default(), EchoRenderer, PlainLinks)
}

#[test]
fn helpers_resolve_titles_with_their_config() {
    let helpers = helpers();
    let item = Item::new("/about/").with_attribute("title", "About");
    assert_eq!(helpers.title_for(&item), "About | txt.jarred.eu");
    assert_eq!(helpers.config().site_name(), "txt.jarred.eu");
}

#[test]
fn render_dispatches_to_injected_renderer() {
    let helpers = helpers();
    let mut assigns = Assigns::new();
    assigns.insert("author".into(), json!("jarred"));

    assert_eq!(
        helpers.render("/footer/", &assigns).unwrap(),
        "<footer>jarred</footer>"
    );
    assert_eq!(
        helpers.render("/header/", &assigns),
        Err(RenderError::UnknownLayout("/header/".into()))
    );
}

#[test]
fn link_targets_accept_paths_and_items() {
    let helpers = helpers();
    let about = Item::new("/about/").with_path("/about/index.html");

    assert_eq!(helpers.link_to("Home", "/", &[]).unwrap(), "Home -> /");
    assert_eq!(
        helpers.link_to("About", &about, &[]).unwrap(),
        "About -> /about/index.html"
    );
    assert_eq!(
        helpers.link_to_unless_current("About", &about, &[], Some(&about)).unwrap(),
        "About"
    );
    assert_eq!(
        helpers.relative_path_to(&about, &about).unwrap(),
        "/about/index.html"
    );
}

#[test]
fn item_without_path_cannot_be_linked() {
    let helpers = helpers();
    let draft = Item::new("/draft/");
    assert_eq!(
        helpers.link_to("Draft", &draft, &[]),
        Err(LinkError::NoPath {
            identifier: "/draft/".into()
        })
    );
}
