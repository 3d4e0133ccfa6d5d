//! Button and text-input controllers.
//!
//! Both widgets emit exactly one committed notification per user intent and swallow it while
//! disabled (and, for buttons, while loading). The payload always carries the originating host
//! event, generic over `E` so tests can use plain values.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Shared control size.
pub enum ControlSize {
    /// Compact.
    Small,
    /// Default.
    Medium,
    /// Spacious.
    Large,
}

impl Default for ControlSize {
    fn default() -> Self {
        Self::Medium
    }
}

impl ControlSize {
    /// Stable token used in DOM data attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Button emphasis.
pub enum ButtonVariant {
    /// Filled brand action.
    Primary,
    /// Muted action.
    Secondary,
    /// Bordered action.
    Outline,
    /// Borderless action.
    Ghost,
    /// Destructive action.
    Danger,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl ButtonVariant {
    /// Stable token used in DOM data attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Native button `type`.
pub enum ButtonKind {
    /// Plain button.
    Button,
    /// Form submit.
    Submit,
    /// Form reset.
    Reset,
}

impl Default for ButtonKind {
    fn default() -> Self {
        Self::Button
    }
}

impl ButtonKind {
    /// Native attribute value.
    pub fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Committed button click.
pub struct ButtonClick<E> {
    /// Host event that triggered the click.
    pub original_event: E,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Button configuration.
pub struct ButtonState {
    /// Emphasis.
    pub variant: ButtonVariant,
    /// Size.
    pub size: ControlSize,
    /// Refuses interaction.
    pub disabled: bool,
    /// Shows a spinner and refuses interaction.
    pub loading: bool,
    /// Renders as a link when set.
    pub href: Option<String>,
    /// Link target.
    pub target: Option<String>,
    /// Native button type.
    pub kind: ButtonKind,
}

impl ButtonState {
    /// Whether clicks are currently refused.
    pub fn is_inert(&self) -> bool {
        self.disabled || self.loading
    }

    /// Renders an anchor instead of a button.
    pub fn renders_link(&self) -> bool {
        self.href.is_some() && !self.disabled
    }

    /// Interaction state token: `disabled`, `loading`, or `idle`.
    pub fn state_token(&self) -> &'static str {
        if self.disabled {
            "disabled"
        } else if self.loading {
            "loading"
        } else {
            "idle"
        }
    }

    /// Turns a raw click into a committed click, or `None` when swallowed.
    pub fn press<E>(&self, event: E) -> Option<ButtonClick<E>> {
        if self.is_inert() {
            return None;
        }
        Some(ButtonClick {
            original_event: event,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Input chrome.
pub enum InputVariant {
    /// Bordered box.
    Outlined,
    /// Tinted background.
    Filled,
    /// Underline only.
    Plain,
}

impl Default for InputVariant {
    fn default() -> Self {
        Self::Outlined
    }
}

impl InputVariant {
    /// Stable token used in DOM data attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Outlined => "outlined",
            Self::Filled => "filled",
            Self::Plain => "plain",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Native input `type`.
pub enum InputType {
    /// Free text.
    Text,
    /// Masked secret.
    Password,
    /// Email address.
    Email,
}

impl Default for InputType {
    fn default() -> Self {
        Self::Text
    }
}

impl InputType {
    /// Native attribute value.
    pub fn token(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Email => "email",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Committed value edit.
pub struct InputChange<E> {
    /// Value after the edit.
    pub value: String,
    /// Host event that carried the edit.
    pub original_event: E,
}

#[derive(Debug, Clone, PartialEq)]
/// Committed focus.
pub struct InputFocus<E> {
    /// Host focus event.
    pub original_event: E,
}

#[derive(Debug, Clone, PartialEq)]
/// Committed blur.
pub struct InputBlur<E> {
    /// Host blur event.
    pub original_event: E,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Text input configuration plus its small amount of interaction state.
pub struct InputState {
    /// Chrome.
    pub variant: InputVariant,
    /// Size.
    pub size: ControlSize,
    /// Declared type.
    pub input_type: InputType,
    /// Current value.
    pub value: String,
    /// Visible label.
    pub label: Option<String>,
    /// Placeholder text.
    pub placeholder: Option<String>,
    /// Form field name.
    pub name: Option<String>,
    /// Explicit control id.
    pub id: Option<String>,
    /// Marks the field required.
    pub required: bool,
    /// Refuses edits but still takes focus.
    pub readonly: bool,
    /// Refuses all interaction.
    pub disabled: bool,
    /// Validation message; marks the field invalid when non-empty.
    pub error_message: Option<String>,
    /// Hint shown when there is no error.
    pub helper_text: Option<String>,
    /// Icon before the control.
    pub leading_icon: Option<String>,
    /// Icon after the control.
    pub trailing_icon: Option<String>,
    /// Set between a committed focus and the next committed blur.
    pub focused: bool,
    /// Password fields render as plain text while set.
    pub show_password: bool,
}

impl InputState {
    /// Records an edit; swallowed when disabled or read-only.
    pub fn edit<E>(&mut self, value: impl Into<String>, event: E) -> Option<InputChange<E>> {
        if self.disabled || self.readonly {
            return None;
        }
        self.value = value.into();
        Some(InputChange {
            value: self.value.clone(),
            original_event: event,
        })
    }

    /// Records focus; swallowed when disabled.
    pub fn focus<E>(&mut self, event: E) -> Option<InputFocus<E>> {
        if self.disabled {
            return None;
        }
        self.focused = true;
        Some(InputFocus {
            original_event: event,
        })
    }

    /// Records blur; swallowed when disabled.
    pub fn blur<E>(&mut self, event: E) -> Option<InputBlur<E>> {
        if self.disabled {
            return None;
        }
        self.focused = false;
        Some(InputBlur {
            original_event: event,
        })
    }

    /// Flips password visibility. No-op for other input types.
    pub fn toggle_password_visibility(&mut self) -> bool {
        if self.input_type == InputType::Password && !self.disabled {
            self.show_password = !self.show_password;
        }
        self.show_password
    }

    /// Type actually rendered.
    pub fn effective_type(&self) -> InputType {
        match self.input_type {
            InputType::Password if self.show_password => InputType::Text,
            other => other,
        }
    }

    /// Whether a non-empty error message is set.
    pub fn has_error(&self) -> bool {
        self.error_message.as_deref().is_some_and(|m| !m.is_empty())
    }

    /// Line shown under the control; an error message wins over helper text.
    pub fn helper_line(&self) -> Option<&str> {
        if self.has_error() {
            return self.error_message.as_deref();
        }
        self.helper_text.as_deref().filter(|text| !text.is_empty())
    }

    /// Id for label association: explicit id, else name.
    pub fn control_id(&self) -> Option<&str> {
        self.id.as_deref().or(self.name.as_deref())
    }

    /// Interaction state token: `disabled`, `error`, `focused`, or `idle`.
    pub fn state_token(&self) -> &'static str {
        if self.disabled {
            "disabled"
        } else if self.has_error() {
            "error"
        } else if self.focused {
            "focused"
        } else {
            "idle"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How an icon string renders.
pub enum IconContent<'a> {
    /// Short text such as an emoji, rendered as-is.
    Glyph(&'a str),
    /// Longer content treated as inline markup.
    Markup(&'a str),
}

/// Icons of at most two characters are glyphs; anything longer is markup.
pub fn classify_icon(icon: &str) -> IconContent<'_> {
    if icon.chars().count() <= 2 {
        IconContent::Glyph(icon)
    } else {
        IconContent::Markup(icon)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn button_swallows_clicks_while_disabled_or_loading() {
        let mut button = ButtonState::default();
        assert_eq!(
            button.press("click"),
            Some(ButtonClick {
                original_event: "click"
            })
        );

        button.loading = true;
        assert_eq!(button.press("click"), None);
        assert_eq!(button.state_token(), "loading");

        button.loading = false;
        button.disabled = true;
        assert_eq!(button.press("click"), None);
        assert_eq!(button.state_token(), "disabled");
    }

    #[test]
    fn button_renders_link_only_when_enabled() {
        let mut button = ButtonState {
            href: Some("/docs".to_string()),
            ..ButtonState::default()
        };
        assert!(button.renders_link());
        button.disabled = true;
        assert!(!button.renders_link());
    }

    #[test]
    fn input_edit_focus_blur_emit_payloads() {
        let mut input = InputState::default();
        assert_eq!(
            input.edit("hello", 7),
            Some(InputChange {
                value: "hello".to_string(),
                original_event: 7,
            })
        );
        assert_eq!(input.value, "hello");
        assert_eq!(input.focus(1), Some(InputFocus { original_event: 1 }));
        assert!(input.focused);
        assert_eq!(input.state_token(), "focused");
        assert_eq!(input.blur(2), Some(InputBlur { original_event: 2 }));
        assert!(!input.focused);
    }

    #[test]
    fn readonly_swallows_edits_and_disabled_swallows_everything() {
        let mut input = InputState {
            readonly: true,
            value: "fixed".to_string(),
            ..InputState::default()
        };
        assert_eq!(input.edit("changed", ()), None);
        assert_eq!(input.value, "fixed");
        assert!(input.focus(()).is_some());

        input.disabled = true;
        assert_eq!(input.focus(()), None);
        assert_eq!(input.blur(()), None);
        assert_eq!(input.edit("x", ()), None);
    }

    #[test]
    fn password_visibility_changes_effective_type() {
        let mut input = InputState {
            input_type: InputType::Password,
            ..InputState::default()
        };
        assert_eq!(input.effective_type(), InputType::Password);
        assert!(input.toggle_password_visibility());
        assert_eq!(input.effective_type(), InputType::Text);

        let mut email = InputState {
            input_type: InputType::Email,
            ..InputState::default()
        };
        assert!(!email.toggle_password_visibility());
        assert_eq!(email.effective_type(), InputType::Email);
    }

    #[test]
    fn helper_line_prefers_error_and_control_id_falls_back_to_name() {
        let mut input = InputState {
            helper_text: Some("We never share it".to_string()),
            name: Some("email".to_string()),
            ..InputState::default()
        };
        assert_eq!(input.helper_line(), Some("We never share it"));
        assert_eq!(input.control_id(), Some("email"));

        input.error_message = Some("Required".to_string());
        input.id = Some("signup-email".to_string());
        assert_eq!(input.helper_line(), Some("Required"));
        assert_eq!(input.state_token(), "error");
        assert_eq!(input.control_id(), Some("signup-email"));
    }

    #[test]
    fn short_icons_are_glyphs() {
        assert_eq!(classify_icon("🔍"), IconContent::Glyph("🔍"));
        assert_eq!(classify_icon("ab"), IconContent::Glyph("ab"));
        assert_eq!(
            classify_icon("<svg></svg>"),
            IconContent::Markup("<svg></svg>")
        );
    }
}
