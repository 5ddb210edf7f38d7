use crate::ui::style::{Color, Style};

/// Style configuration for the autocomplete widget. Every visual hook is an
/// enumerated field; there is no pass-through of unrecognized options.
#[derive(Debug, Clone)]
pub struct AutocompleteStyles {
    pub label: Style,
    pub placeholder: Style,
    pub hint: Style,
    pub error: Style,
    pub item: Style,
    pub active_item: Style,
    pub highlight: Style,
}

impl Default for AutocompleteStyles {
    fn default() -> Self {
        Self {
            label: Style::new().bold(),
            placeholder: Style::new().color(Color::DarkGrey),
            hint: Style::new().color(Color::DarkGrey),
            error: Style::new().color(Color::Red).bold(),
            item: Style::new().color(Color::DarkGrey),
            active_item: Style::new().color(Color::Cyan).bold(),
            highlight: Style::new().color(Color::Yellow).bold(),
        }
    }
}
