//! Process-wide stylesheet for rules components depend on but cannot scope
//! themselves, such as animation keyframes.
//!
//! Rules are registered by name; registering a name twice is a no-op. The
//! site-wide sheet is built exactly once on first access.

use std::collections::HashSet;
use std::sync::{LazyLock, Mutex};

pub const RIPPLE_KEYFRAMES: &str = "@keyframes ripple {
  to {
    transform: scale(4);
    opacity: 0;
  }
}";

pub const RIPPLE_COLOR: &str = ":root {
  --ripple-color: rgba(0, 0, 0, 0.15);
}

@media (prefers-color-scheme: dark) {
  :root {
    --ripple-color: rgba(255, 255, 255, 0.2);
  }
}";

/// An ordered set of named CSS rules.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    names: HashSet<&'static str>,
    rules: Vec<(&'static str, &'static str)>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `css` under `name`. Returns false if the name was taken.
    pub fn register(&mut self, name: &'static str, css: &'static str) -> bool {
        if !self.names.insert(name) {
            return false;
        }
        log::debug!("registered style rule '{name}'");
        self.rules.push((name, css));
        true
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// All rules in registration order, blank-line separated.
    pub fn stylesheet(&self) -> String {
        self.rules
            .iter()
            .map(|(_, css)| *css)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

static GLOBAL: LazyLock<Mutex<StyleRegistry>> = LazyLock::new(|| {
    let mut registry = StyleRegistry::new();
    registry.register("ripple-keyframes", RIPPLE_KEYFRAMES);
    registry.register("ripple-color", RIPPLE_COLOR);
    Mutex::new(registry)
});

/// Registers a rule in the site-wide sheet. Repeat calls are no-ops.
pub fn register_global(name: &'static str, css: &'static str) -> bool {
    match GLOBAL.lock() {
        Ok(mut registry) => registry.register(name, css),
        Err(poisoned) => poisoned.into_inner().register(name, css),
    }
}

/// The site-wide stylesheet, including the ripple rules.
pub fn global_stylesheet() -> String {
    match GLOBAL.lock() {
        Ok(registry) => registry.stylesheet(),
        Err(poisoned) => poisoned.into_inner().stylesheet(),
    }
}
