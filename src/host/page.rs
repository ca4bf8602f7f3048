//! Host page holding mount targets.

use crate::host::HostForm;
use indexmap::IndexMap;

/// An element the widget can render into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MountTarget {
    /// Element id, without the leading `#`.
    pub id: String,
    /// Current inner markup, fully replaced on every render.
    pub markup: String,
    /// Form enclosing the element, if any.
    pub form: Option<HostForm>,
}

impl MountTarget {
    /// Creates a target outside any form.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self {
            id: normalize(id).to_string(),
            ..Self::default()
        }
    }

    /// Places the target inside a form.
    #[must_use]
    pub fn in_form(mut self, form: HostForm) -> Self {
        self.form = Some(form);
        self
    }
}

/// Set of mount targets addressed by selector.
#[derive(Debug, Clone, Default)]
pub struct HostPage {
    targets: IndexMap<String, MountTarget>,
}

impl HostPage {
    /// Creates an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a target, builder style.
    #[must_use]
    pub fn with_target(mut self, target: MountTarget) -> Self {
        self.insert(target);
        self
    }

    /// Adds or replaces a target.
    pub fn insert(&mut self, target: MountTarget) {
        self.targets.insert(target.id.clone(), target);
    }

    /// Looks up a target by `#id` or bare id.
    #[must_use]
    pub fn get(&self, selector: &str) -> Option<&MountTarget> {
        self.targets.get(normalize(selector))
    }

    /// Removes and returns a target.
    pub fn take(&mut self, selector: &str) -> Option<MountTarget> {
        self.targets.shift_remove(normalize(selector))
    }

    /// Number of targets still on the page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the page has no targets left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

fn normalize(selector: &str) -> &str {
    let trimmed = selector.trim();
    trimmed.strip_prefix('#').unwrap_or(trimmed)
}
