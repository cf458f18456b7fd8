use pretty_assertions::assert_eq;
use site_core::{Item, LinkError, LinkResolver, LinkTarget};
use site_engine::LinkTo;

fn page(identifier: &str, path: &str) -> Item {
    Item::new(identifier).with_path(path)
}

#[test]
fn link_to_path_builds_anchor() {
    let html = LinkTo::new()
        .link_to("Home", LinkTarget::Path("/"), &[])
        .unwrap();
    assert_eq!(html, r#"<a href="/">Home</a>"#);
}

#[test]
fn link_to_item_uses_its_output_path_and_escapes_attributes() {
    let about = page("/about/", "/about/index.html");
    let html = LinkTo::new()
        .link_to(
            "About",
            LinkTarget::Item(&about),
            &[("title", "Who & why"), ("class", "nav")],
        )
        .unwrap();
    assert_eq!(
        html,
        r#"<a title="Who &amp; why" class="nav" href="/about/index.html">About</a>"#
    );
}

#[test]
fn link_to_item_without_path_fails() {
    let draft = Item::new("/draft/");
    let err = LinkTo::new()
        .link_to("Draft", LinkTarget::Item(&draft), &[])
        .unwrap_err();
    assert_eq!(
        err,
        LinkError::NoPath {
            identifier: "/draft/".into()
        }
    );
}

#[test]
fn current_page_renders_as_active_span() {
    let about = page("/about/", "/about/index.html");
    let links = LinkTo::new();

    let active = links
        .link_to_unless_current("About", LinkTarget::Item(&about), &[], Some(&about))
        .unwrap();
    assert_eq!(active, r#"<span class="active">About</span>"#);

    let home = page("/", "/index.html");
    let inactive = links
        .link_to_unless_current("About", LinkTarget::Item(&about), &[], Some(&home))
        .unwrap();
    assert_eq!(inactive, r#"<a href="/about/index.html">About</a>"#);

    let detached = links
        .link_to_unless_current("About", LinkTarget::Item(&about), &[], None)
        .unwrap();
    assert_eq!(detached, r#"<a href="/about/index.html">About</a>"#);
}

#[test]
fn relative_paths_between_pages() {
    let links = LinkTo::new();
    let post = page("/posts/hello/", "/posts/hello/index.html");

    assert_eq!(
        links.relative_path_to(LinkTarget::Path("/"), &post).unwrap(),
        "../../"
    );
    assert_eq!(
        links
            .relative_path_to(LinkTarget::Path("/posts/other/index.html"), &post)
            .unwrap(),
        "../other/index.html"
    );
    assert_eq!(
        links
            .relative_path_to(LinkTarget::Path("/style.css"), &post)
            .unwrap(),
        "../../style.css"
    );
}

#[test]
fn relative_path_within_same_directory() {
    let links = LinkTo::new();
    let about = page("/about/", "/about/index.html");

    assert_eq!(
        links.relative_path_to(LinkTarget::Path("/about/"), &about).unwrap(),
        "./"
    );
    assert_eq!(
        links
            .relative_path_to(LinkTarget::Path("/about/index.html"), &about)
            .unwrap(),
        "index.html"
    );
}

#[test]
fn relative_path_into_subdirectory_keeps_trailing_slash() {
    let home = page("/", "/index.html");
    assert_eq!(
        LinkTo::new()
            .relative_path_to(LinkTarget::Path("/about/"), &home)
            .unwrap(),
        "about/"
    );
}

#[test]
fn off_site_targets_are_returned_unchanged() {
    let home = page("/", "/index.html");
    assert_eq!(
        LinkTo::new()
            .relative_path_to(LinkTarget::Path("https://example.com/x"), &home)
            .unwrap(),
        "https://example.com/x"
    );
}

#[test]
fn relative_path_needs_current_path() {
    let current = Item::new("/draft/");
    assert_eq!(
        LinkTo::new().relative_path_to(LinkTarget::Path("/"), &current),
        Err(LinkError::NoCurrentPath)
    );
}

#[test]
fn relative_paths_are_not_percent_encoded() {
    let links = LinkTo::new();
    let home = page("/", "/index.html");
    let notes = page("/my notes/", "/my notes/index.html");

    assert_eq!(
        links.relative_path_to(LinkTarget::Path("/café/"), &home).unwrap(),
        "café/"
    );
    assert_eq!(
        links
            .relative_path_to(LinkTarget::Path("/my notes/"), &home)
            .unwrap(),
        "my notes/"
    );
    assert_eq!(
        links
            .relative_path_to(LinkTarget::Path("/café/menu.html"), &notes)
            .unwrap(),
        "../café/menu.html"
    );
    assert_eq!(
        links
            .relative_path_to(LinkTarget::Path("/my notes/index.html"), &notes)
            .unwrap(),
        "index.html"
    );
}
