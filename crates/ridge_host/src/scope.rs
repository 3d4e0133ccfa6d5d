//! Theme scope contract: the element a theme marker is reflected onto.

use std::{
    cell::RefCell,
    collections::{BTreeMap, BTreeSet},
    rc::Rc,
};

/// Element-like surface carrying theme markers (attribute + class) and custom properties.
///
/// Methods take `&self`; implementations wrap shared handles (DOM nodes, `Rc<RefCell<_>>`).
pub trait ThemeScope {
    /// Stable identifier reported in theme-change notifications.
    fn scope_id(&self) -> String;

    /// Reads an attribute value.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Sets an attribute value.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying element rejects the write.
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), String>;

    /// Removes an attribute. Removing an absent attribute succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying element rejects the write.
    fn remove_attribute(&self, name: &str) -> Result<(), String>;

    /// Whether the class list contains `class`.
    fn has_class(&self, class: &str) -> bool;

    /// Adds a class.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying element rejects the write.
    fn add_class(&self, class: &str) -> Result<(), String>;

    /// Removes a class. Removing an absent class succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying element rejects the write.
    fn remove_class(&self, class: &str) -> Result<(), String>;

    /// Reads the effective value of a CSS custom property (`--name`).
    fn style_property(&self, name: &str) -> Option<String>;

    /// Sets an inline CSS custom property.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying style declaration rejects the write.
    fn set_style_property(&self, name: &str, value: &str) -> Result<(), String>;

    /// Names of all custom properties visible on the scope.
    fn style_property_names(&self) -> Vec<String>;

    /// Announces a theme change on the scope (a bubbling DOM event in browsers).
    fn announce_theme_change(&self, _event_name: &str, _theme: &str) {}
}

#[derive(Debug, Default)]
struct MemoryScopeState {
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    properties: BTreeMap<String, String>,
    announcements: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
/// In-memory theme scope used by tests and non-browser hosts.
pub struct MemoryThemeScope {
    id: String,
    inner: Rc<RefCell<MemoryScopeState>>,
}

impl Default for MemoryThemeScope {
    fn default() -> Self {
        Self::new("root")
    }
}

impl MemoryThemeScope {
    /// Creates an empty scope with the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            inner: Rc::new(RefCell::new(MemoryScopeState::default())),
        }
    }

    /// Current class list, sorted.
    pub fn classes(&self) -> Vec<String> {
        self.inner.borrow().classes.iter().cloned().collect()
    }

    /// Announcements recorded by [`ThemeScope::announce_theme_change`], oldest first.
    pub fn announcements(&self) -> Vec<(String, String)> {
        self.inner.borrow().announcements.clone()
    }
}

impl ThemeScope for MemoryThemeScope {
    fn scope_id(&self) -> String {
        self.id.clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.inner.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove_attribute(&self, name: &str) -> Result<(), String> {
        self.inner.borrow_mut().attributes.remove(name);
        Ok(())
    }

    fn has_class(&self, class: &str) -> bool {
        self.inner.borrow().classes.contains(class)
    }

    fn add_class(&self, class: &str) -> Result<(), String> {
        self.inner.borrow_mut().classes.insert(class.to_string());
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<(), String> {
        self.inner.borrow_mut().classes.remove(class);
        Ok(())
    }

    fn style_property(&self, name: &str) -> Option<String> {
        self.inner.borrow().properties.get(name).cloned()
    }

    fn set_style_property(&self, name: &str, value: &str) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .properties
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn style_property_names(&self) -> Vec<String> {
        self.inner.borrow().properties.keys().cloned().collect()
    }

    fn announce_theme_change(&self, event_name: &str, theme: &str) {
        self.inner
            .borrow_mut()
            .announcements
            .push((event_name.to_string(), theme.to_string()));
    }
}
