use site_logging::site_trace;

use crate::config::SiteConfig;
use crate::item::Item;

/// Display title for `item`: `"{title}{separator}{site_name}"`, or the site
/// name alone when the item has no usable title.
pub fn title_for(item: &Item, config: &SiteConfig) -> String {
    match item.title() {
        Some(title) => format!(
            "{title}{separator}{site}",
            separator = config.title_separator(),
            site = config.site_name()
        ),
        None => {
            site_trace!("item {} has no title, using site name", item.identifier());
            config.site_name().to_string()
        }
    }
}

/// Holds the site configuration so templates only pass the item.
#[derive(Debug, Clone, Default)]
pub struct TitleResolver {
    config: SiteConfig,
}

impl TitleResolver {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn resolve(&self, item: &Item) -> String {
        title_for(item, &self.config)
    }
}
