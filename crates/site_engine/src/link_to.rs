use site_core::{Item, LinkError, LinkResolver, LinkTarget};
use site_logging::site_trace;
use percent_encoding::percent_decode_str;
use url::Url;

use crate::escape::escape_html;

// Only used to give url a base to resolve site paths against.
const PATH_BASE: &str = "http://site.invalid/";

/// Builds anchors and relative paths between site pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkTo;

impl LinkTo {
    pub fn new() -> Self {
        Self
    }

    fn anchor(text: &str, path: &str, attributes: &[(&str, &str)]) -> String {
        let attrs: String = attributes
            .iter()
            .map(|(key, value)| format!("{key}=\"{}\" ", escape_html(value)))
            .collect();
        format!("<a {attrs}href=\"{}\">{text}</a>", escape_html(path))
    }

    fn relative(&self, from: &str, to: &str) -> Option<String> {
        let base = Url::parse(PATH_BASE).ok()?;
        let from_url = base.join(from).ok()?;
        let to_url = base.join(to).ok()?;
        let relative = from_url.make_relative(&to_url)?;
        if !relative.is_empty() && relative != "/" {
            return Some(decode(&relative));
        }
        // Same directory: url reports nothing (or a bare slash) to walk.
        let file = to_url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or_default();
        if file.is_empty() {
            Some("./".to_string())
        } else {
            Some(decode(file))
        }
    }
}

// url percent-encodes path segments; site paths are returned as written.
fn decode(path: &str) -> String {
    percent_decode_str(path).decode_utf8_lossy().into_owned()
}

impl LinkResolver for LinkTo {
    fn link_to(
        &self,
        text: &str,
        target: LinkTarget<'_>,
        attributes: &[(&str, &str)],
    ) -> Result<String, LinkError> {
        let path = target.path()?;
        Ok(Self::anchor(text, path, attributes))
    }

    fn link_to_unless_current(
        &self,
        text: &str,
        target: LinkTarget<'_>,
        attributes: &[(&str, &str)],
        current: Option<&Item>,
    ) -> Result<String, LinkError> {
        let path = target.path()?;
        if current.and_then(Item::path) == Some(path) {
            return Ok(format!("<span class=\"active\">{text}</span>"));
        }
        Ok(Self::anchor(text, path, attributes))
    }

    fn relative_path_to(
        &self,
        target: LinkTarget<'_>,
        current: &Item,
    ) -> Result<String, LinkError> {
        let to = target.path()?;
        let from = current.path().ok_or(LinkError::NoCurrentPath)?;
        match self.relative(from, to) {
            Some(relative) => Ok(relative),
            None => {
                // Off-site targets stay as written.
                site_trace!("no relative path from {} to {}", from, to);
                Ok(to.to_string())
            }
        }
    }
}
