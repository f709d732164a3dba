use tabula_lib::model::Alignment;

use crate::element::Element;
use crate::style::Style;

/// Placeholder for a screen or panel with nothing to show.
///
/// # Example
///
/// ```
/// use tabula_ui::empty_state::EmptyState;
///
/// let element = EmptyState::new("No accounts")
///     .description("Create one to get started.")
///     .action("New account", "account.create")
///     .element();
///
/// let button = element.find("empty-action").unwrap();
/// assert_eq!(button.get_data("action"), Some("account.create"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub icon: String,
    pub title: String,
    pub description: Option<String>,
    /// Button label and the action name reported when it is pressed.
    pub action: Option<(String, String)>,
}

impl Default for EmptyState {
    fn default() -> Self {
        Self {
            icon: "∅".to_string(),
            title: "No data".to_string(),
            description: None,
            action: None,
        }
    }
}

impl EmptyState {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn action(mut self, label: impl Into<String>, action: impl Into<String>) -> Self {
        self.action = Some((label.into(), action.into()));
        self
    }

    pub fn element(&self) -> Element {
        let centered = Style::new().align(Alignment::Center);

        let mut element = Element::col()
            .id("empty-state")
            .style(centered.clone())
            .child(Element::icon(self.icon.clone()).style(centered.clone().dim()))
            .child(Element::text(self.title.clone()).style(centered.clone().bold()));

        if let Some(description) = &self.description {
            element = element
                .child(Element::text(description.clone()).style(centered.clone().dim()));
        }

        if let Some((label, action)) = &self.action {
            element = element.child(
                Element::button(label.clone())
                    .id("empty-action")
                    .data("action", action.clone()),
            );
        }

        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let element = EmptyState::default().element();
        assert_eq!(element.children.len(), 2);
        assert_eq!(element.text_content(), "∅ No data");
        assert!(element.find("empty-action").is_none());
    }

    #[test]
    fn test_full_layout() {
        let element = EmptyState::new("Nothing here")
            .icon("☐")
            .description("Try another filter")
            .action("Reset", "filter.reset")
            .element();
        assert_eq!(element.children.len(), 4);
        assert_eq!(
            element.text_content(),
            "☐ Nothing here Try another filter Reset"
        );
    }
}
