use std::collections::HashMap;

use site_core::{Assigns, RenderError, Renderer};
use site_logging::site_debug;

/// A layout supplied by the host; it receives the assigns and returns markup.
pub type LayoutFn = Box<dyn Fn(&Assigns) -> String + Send + Sync>;

/// Renderer that dispatches to closures registered per layout identifier.
#[derive(Default)]
pub struct LayoutRegistry {
    layouts: HashMap<String, LayoutFn>,
}

impl LayoutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `layout` under `identifier`, replacing any previous one.
    pub fn register<F>(&mut self, identifier: impl Into<String>, layout: F) -> &mut Self
    where
        F: Fn(&Assigns) -> String + Send + Sync + 'static,
    {
        self.layouts.insert(identifier.into(), Box::new(layout));
        self
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.layouts.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

impl Renderer for LayoutRegistry {
    fn render(&self, layout: &str, assigns: &Assigns) -> Result<String, RenderError> {
        let render = self
            .layouts
            .get(layout)
            .ok_or_else(|| RenderError::UnknownLayout(layout.to_string()))?;
        site_debug!("rendering layout {} with {} assigns", layout, assigns.len());
        Ok(render(assigns))
    }
}
