//! DOM element theme scope.

use js_sys::{Object, Reflect};
use ridge_host::ThemeScope;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone)]
/// Theme scope backed by a live `HtmlElement`.
pub struct ElementThemeScope {
    id: String,
    element: web_sys::HtmlElement,
}

impl ElementThemeScope {
    /// Wraps an element under a diagnostic identifier.
    pub fn new(id: impl Into<String>, element: web_sys::HtmlElement) -> Self {
        Self {
            id: id.into(),
            element,
        }
    }

    /// Scope over `document.documentElement`, if a document exists.
    pub fn document_root() -> Option<Self> {
        let element = web_sys::window()?
            .document()?
            .document_element()?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()?;
        Some(Self::new("document", element))
    }

    /// Underlying element.
    pub fn element(&self) -> &web_sys::HtmlElement {
        &self.element
    }

    fn computed_style(&self) -> Option<web_sys::CssStyleDeclaration> {
        web_sys::window()?
            .get_computed_style(&self.element)
            .ok()
            .flatten()
    }
}

fn js_err(op: &str, err: JsValue) -> String {
    format!("{op} failed: {err:?}")
}

fn custom_property_names(style: &web_sys::CssStyleDeclaration, out: &mut Vec<String>) {
    for index in 0..style.length() {
        let name = style.item(index);
        if name.starts_with("--") && !out.contains(&name) {
            out.push(name);
        }
    }
}

impl ThemeScope for ElementThemeScope {
    fn scope_id(&self) -> String {
        self.id.clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), String> {
        self.element
            .set_attribute(name, value)
            .map_err(|e| js_err("set_attribute", e))
    }

    fn remove_attribute(&self, name: &str) -> Result<(), String> {
        self.element
            .remove_attribute(name)
            .map_err(|e| js_err("remove_attribute", e))
    }

    fn has_class(&self, class: &str) -> bool {
        self.element.class_list().contains(class)
    }

    fn add_class(&self, class: &str) -> Result<(), String> {
        self.element
            .class_list()
            .add_1(class)
            .map_err(|e| js_err("classList.add", e))
    }

    fn remove_class(&self, class: &str) -> Result<(), String> {
        self.element
            .class_list()
            .remove_1(class)
            .map_err(|e| js_err("classList.remove", e))
    }

    fn style_property(&self, name: &str) -> Option<String> {
        let value = self
            .computed_style()?
            .get_property_value(name)
            .ok()?
            .trim()
            .to_string();
        (!value.is_empty()).then_some(value)
    }

    fn set_style_property(&self, name: &str, value: &str) -> Result<(), String> {
        self.element
            .style()
            .set_property(name, value)
            .map_err(|e| js_err("style.setProperty", e))
    }

    fn style_property_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        if let Some(computed) = self.computed_style() {
            custom_property_names(&computed, &mut names);
        }
        custom_property_names(&self.element.style(), &mut names);
        names
    }

    fn announce_theme_change(&self, event_name: &str, theme: &str) {
        let detail = Object::new();
        let _ = Reflect::set(&detail, &"theme".into(), &theme.into());
        let _ = Reflect::set(&detail, &"element".into(), self.element.as_ref());

        let init = web_sys::CustomEventInit::new();
        init.set_bubbles(true);
        init.set_composed(true);
        init.set_detail(&detail);
        if let Ok(event) = web_sys::CustomEvent::new_with_event_init_dict(event_name, &init) {
            let _ = self.element.dispatch_event(&event);
        }
    }
}
