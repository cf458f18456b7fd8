//! Site engine: filesystem loading and the host-side helper implementations.
mod config_file;
mod escape;
mod frontmatter;
mod link_to;
mod loader;
mod render;

pub use config_file::{load_config, ConfigFileError};
pub use escape::escape_html;
pub use frontmatter::{parse_frontmatter, FrontmatterError, ParsedContent};
pub use link_to::LinkTo;
pub use loader::{
    identifier_for, is_page, load_item, load_items, output_path_for, LoadError, LoadedItem,
};
pub use render::{LayoutFn, LayoutRegistry};
