use crate::core::value::Value;
use crate::terminal::{CursorPos, KeyCode, KeyEvent};
use crate::ui::span::Span;
use crate::ui::style::{Color, Style};
use crate::widgets::base::ComponentBase;
use crate::widgets::text_edit;
use crate::widgets::traits::{
    DrawOutput, Drawable, FocusMode, InteractionResult, Interactive, RenderContext, WidgetAction,
};
use crate::widgets::validators::{Validator, run_validators};
use unicode_width::UnicodeWidthChar;

/// Single-line text entry. Draws only its own value line; any label prefix
/// belongs to the enclosing component.
pub struct TextInput {
    base: ComponentBase,
    value: String,
    cursor: usize,
    placeholder: Option<String>,
    placeholder_style: Style,
    validators: Vec<Validator>,
}

impl TextInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            base: ComponentBase::new(id, label),
            value: String::new(),
            cursor: 0,
            placeholder: None,
            placeholder_style: Style::new().color(Color::DarkGrey),
            validators: Vec::new(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.set_text(value);
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn set_placeholder_style(&mut self, style: Style) {
        self.placeholder_style = style;
    }

    pub fn text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = text_edit::char_count(&self.value);
    }

    pub fn cursor(&self) -> usize {
        text_edit::clamp_cursor(self.cursor, &self.value)
    }
}

impl Drawable for TextInput {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn label(&self) -> &str {
        self.base.label()
    }

    fn draw(&self, _ctx: &RenderContext) -> DrawOutput {
        let line = if self.value.is_empty() {
            match &self.placeholder {
                Some(placeholder) => {
                    vec![Span::styled(placeholder.clone(), self.placeholder_style).no_wrap()]
                }
                None => vec![Span::new("").no_wrap()],
            }
        } else {
            vec![Span::styled(self.value.clone(), Style::default()).no_wrap()]
        };
        DrawOutput { lines: vec![line] }
    }
}

impl Interactive for TextInput {
    fn focus_mode(&self) -> FocusMode {
        FocusMode::Leaf
    }

    fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        match key.code {
            KeyCode::Char(ch) => {
                text_edit::insert_char(&mut self.value, &mut self.cursor, ch);
                InteractionResult::handled()
            }
            KeyCode::Backspace => {
                if text_edit::backspace_char(&mut self.value, &mut self.cursor) {
                    return InteractionResult::handled();
                }
                InteractionResult::ignored()
            }
            KeyCode::Delete => {
                if text_edit::delete_char(&mut self.value, &mut self.cursor) {
                    return InteractionResult::handled();
                }
                InteractionResult::ignored()
            }
            KeyCode::Left => {
                if text_edit::move_left(&mut self.cursor, &self.value) {
                    return InteractionResult::handled();
                }
                InteractionResult::ignored()
            }
            KeyCode::Right => {
                if text_edit::move_right(&mut self.cursor, &self.value) {
                    return InteractionResult::handled();
                }
                InteractionResult::ignored()
            }
            KeyCode::Home => {
                self.cursor = 0;
                InteractionResult::handled()
            }
            KeyCode::End => {
                self.cursor = text_edit::char_count(&self.value);
                InteractionResult::handled()
            }
            KeyCode::Enter => InteractionResult::with_action(WidgetAction::Submitted {
                value: Value::Text(self.value.clone()),
            }),
            _ => InteractionResult::ignored(),
        }
    }

    fn cursor_pos(&self) -> Option<CursorPos> {
        let col: usize = self
            .value
            .chars()
            .take(self.cursor())
            .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
            .sum();
        Some(CursorPos {
            col: col as u16,
            row: 0,
        })
    }

    fn value(&self) -> Option<Value> {
        Some(Value::Text(self.value.clone()))
    }

    fn set_value(&mut self, value: Value) {
        if let Some(text) = value.into_text() {
            self.set_text(text);
        }
    }

    fn validate(&self) -> Result<(), String> {
        run_validators(&self.validators, &self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::TextInput;
    use crate::core::value::Value;
    use crate::terminal::{KeyCode, KeyEvent};
    use crate::widgets::traits::{Interactive, WidgetAction};
    use crate::widgets::validators::required;

    fn type_text(input: &mut TextInput, text: &str) {
        for ch in text.chars() {
            input.on_key(KeyEvent::plain(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn typing_builds_value() {
        let mut input = TextInput::new("q", "Query");
        type_text(&mut input, "abc");
        assert_eq!(input.text(), "abc");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn enter_submits_current_text() {
        let mut input = TextInput::new("q", "Query").with_default("done");
        let result = input.on_key(KeyEvent::plain(KeyCode::Enter));
        assert_eq!(result.actions.len(), 1);
        let WidgetAction::Submitted { value } = &result.actions[0];
        assert_eq!(*value, Value::Text("done".to_string()));
    }

    #[test]
    fn validators_run_against_current_text() {
        let mut input = TextInput::new("q", "Query").with_validator(required("required"));
        assert!(input.validate().is_err());
        type_text(&mut input, "x");
        assert!(input.validate().is_ok());
    }

    #[test]
    fn home_end_move_cursor() {
        let mut input = TextInput::new("q", "Query").with_default("abc");
        input.on_key(KeyEvent::plain(KeyCode::Home));
        assert_eq!(input.cursor(), 0);
        input.on_key(KeyEvent::plain(KeyCode::End));
        assert_eq!(input.cursor(), 3);
    }
}
