use crate::core::suggest::{self, FilterFn, Item, compute_suggestions};
use crate::core::value::Value;
use crate::terminal::{CursorPos, KeyCode, KeyEvent, KeyModifiers};
use crate::ui::span::{Span, SpanLine};
use crate::ui::theme::AutocompleteStyles;
use crate::widgets::base::ComponentBase;
use crate::widgets::dropdown::{SuggestionList, SuggestionRow};
use crate::widgets::text::TextInput;
use crate::widgets::traits::{
    DrawOutput, Drawable, FocusMode, InteractionResult, Interactive, RenderContext, WidgetAction,
};
use crate::widgets::validators::Validator;
use unicode_width::UnicodeWidthStr;

/// Autocomplete input: a query field with a suggestion dropdown underneath.
///
/// Suggestions are recomputed from scratch on every edit: the items are
/// filtered by the configured predicate (case-insensitive substring by
/// default), capped at `limit`, and suppressed entirely when the query is
/// already the exact value of an item. An empty result renders no dropdown.
pub struct Autocomplete {
    base: ComponentBase,
    input: TextInput,
    items: Vec<Item>,
    filter: Option<FilterFn>,
    limit: Option<usize>,
    list: SuggestionList,
    styles: AutocompleteStyles,
    description: Option<String>,
}

impl Autocomplete {
    pub fn new(id: impl Into<String>, label: impl Into<String>, items: Vec<Item>) -> Self {
        let id = id.into();
        let mut widget = Self {
            base: ComponentBase::new(id.clone(), label),
            input: TextInput::new(format!("{id}__query"), ""),
            items,
            filter: None,
            limit: None,
            list: SuggestionList::new(),
            styles: AutocompleteStyles::default(),
            description: None,
        };
        widget.recompute();
        widget
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.input = self.input.with_placeholder(placeholder);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Cap the number of suggestions. Zero removes the cap.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = if limit == 0 { None } else { Some(limit) };
        self.recompute();
        self
    }

    /// Cap the number of *rendered* rows; the window follows the active row.
    pub fn with_max_visible(mut self, max_visible: usize) -> Self {
        self.list.set_max_visible(max_visible);
        self
    }

    /// Replace the default substring predicate.
    pub fn with_filter(mut self, filter: FilterFn) -> Self {
        self.filter = Some(filter);
        self.recompute();
        self
    }

    pub fn with_styles(mut self, styles: AutocompleteStyles) -> Self {
        self.input.set_placeholder_style(styles.placeholder);
        self.styles = styles;
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.input = self.input.with_validator(validator);
        self
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.set_items(items);
        self
    }

    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
        self.recompute();
    }

    pub fn query(&self) -> &str {
        self.input.text()
    }

    /// Values of the currently computed suggestions, in display order.
    pub fn suggestion_values(&self) -> Vec<&str> {
        let query = self.input.text();
        compute_suggestions(&self.items, query, self.limit, self.filter.as_ref())
            .into_iter()
            .map(|index| self.items[index].value.as_str())
            .collect()
    }

    pub fn active_index(&self) -> usize {
        self.list.active_index()
    }

    fn recompute(&mut self) {
        let query = self.input.text().to_string();
        let indices = compute_suggestions(&self.items, &query, self.limit, self.filter.as_ref());

        let rows = indices
            .into_iter()
            .map(|index| {
                let item = &self.items[index];
                let highlights = if self.filter.is_none() {
                    // Only the default rule guarantees the match is a
                    // substring worth underlining.
                    suggest::match_range(&query, &item.value)
                        .into_iter()
                        .collect()
                } else {
                    Vec::new()
                };
                SuggestionRow {
                    text: item.value.clone(),
                    description: item.description.clone(),
                    highlights,
                }
            })
            .collect();
        self.list.set_rows(rows);
    }

    fn accept_active(&mut self) -> bool {
        let Some(row) = self.list.active_row() else {
            return false;
        };
        let value = row.text.clone();
        self.input.set_text(value);
        self.recompute();
        true
    }

    fn input_prefix(&self, focused: bool) -> String {
        format!(
            "{} {}: ",
            self.base.focus_marker(focused),
            self.base.label()
        )
    }
}

impl Drawable for Autocomplete {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn label(&self) -> &str {
        self.base.label()
    }

    fn draw(&self, ctx: &RenderContext) -> DrawOutput {
        let focused = self.base.is_focused(ctx);

        let mut first: SpanLine = vec![
            Span::styled(self.input_prefix(focused), self.styles.label).no_wrap(),
        ];
        first.extend(
            self.input
                .draw(ctx)
                .lines
                .into_iter()
                .next()
                .unwrap_or_default(),
        );

        let mut lines = vec![first];
        if let Some(description) = &self.description {
            lines.push(vec![
                Span::styled(format!("  {description}"), self.styles.hint).no_wrap(),
            ]);
        }
        lines.extend(self.list.draw_lines(focused, &self.styles));
        DrawOutput { lines }
    }
}

impl Interactive for Autocomplete {
    fn focus_mode(&self) -> FocusMode {
        FocusMode::Group
    }

    fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        if key.modifiers != KeyModifiers::NONE {
            return InteractionResult::ignored();
        }

        match key.code {
            KeyCode::Up => {
                if self.list.move_active(-1) {
                    return InteractionResult::handled();
                }
                InteractionResult::ignored()
            }
            KeyCode::Down => {
                if self.list.move_active(1) {
                    return InteractionResult::handled();
                }
                InteractionResult::ignored()
            }
            KeyCode::Enter => {
                if self.accept_active() {
                    return InteractionResult::handled();
                }
                InteractionResult::with_action(WidgetAction::Submitted {
                    value: Value::Text(self.input.text().to_string()),
                })
            }
            _ => {
                let before = self.input.text().to_string();
                let result = self.input.on_key(key);
                if self.input.text() != before {
                    self.recompute();
                }
                result
            }
        }
    }

    fn cursor_pos(&self) -> Option<CursorPos> {
        let inner = self.input.cursor_pos()?;
        let prefix_width = UnicodeWidthStr::width(self.input_prefix(true).as_str());
        Some(CursorPos {
            col: inner.col + prefix_width as u16,
            row: 0,
        })
    }

    fn value(&self) -> Option<Value> {
        Some(Value::Text(self.input.text().to_string()))
    }

    fn set_value(&mut self, value: Value) {
        match value {
            Value::Text(text) => {
                self.input.set_text(text);
                self.recompute();
            }
            Value::List(values) => {
                self.set_items(values.into_iter().map(Item::new).collect());
            }
            Value::None => {}
        }
    }

    fn validate(&self) -> Result<(), String> {
        self.input.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::Autocomplete;
    use crate::core::suggest::{FilterFn, Item};
    use crate::core::value::Value;
    use crate::terminal::{KeyCode, KeyEvent, TerminalSize};
    use crate::widgets::traits::{Drawable, Interactive, RenderContext, WidgetAction};
    use std::sync::Arc;

    fn numbered_items(count: usize) -> Vec<Item> {
        (0..count).map(|n| Item::new(n.to_string())).collect()
    }

    fn ctx() -> RenderContext {
        RenderContext::focused(
            "ac",
            TerminalSize {
                width: 80,
                height: 24,
            },
        )
    }

    fn type_text(widget: &mut Autocomplete, text: &str) {
        for ch in text.chars() {
            widget.on_key(KeyEvent::plain(KeyCode::Char(ch)));
        }
    }

    fn line_text(line: &[crate::ui::span::Span]) -> String {
        line.iter().map(|span| span.text.as_str()).collect()
    }

    #[test]
    fn typing_filters_suggestions() {
        let mut widget = Autocomplete::new(
            "ac",
            "Pick",
            vec![Item::new("alpha"), Item::new("beta"), Item::new("alphabet")],
        );
        type_text(&mut widget, "alp");
        assert_eq!(widget.suggestion_values(), vec!["alpha", "alphabet"]);
    }

    #[test]
    fn exact_query_renders_no_dropdown_rows() {
        let mut widget = Autocomplete::new("ac", "Pick", numbered_items(50));
        widget.set_value(Value::Text("2".to_string()));
        assert!(widget.suggestion_values().is_empty());

        let lines = widget.draw(&ctx()).lines;
        // Input line only; no suggestion rows.
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn empty_query_shows_dropdown_up_to_limit() {
        let widget = Autocomplete::new("ac", "Pick", numbered_items(50)).with_limit(10);
        assert_eq!(widget.suggestion_values().len(), 10);

        let lines = widget.draw(&ctx()).lines;
        assert_eq!(lines.len(), 1 + 10);
    }

    #[test]
    fn custom_filter_overrides_default_matching() {
        let filter: FilterFn = Arc::new(|_query, item| item.value.contains('2'));
        let widget = Autocomplete::new("ac", "Pick", numbered_items(50))
            .with_limit(10)
            .with_filter(filter);
        let values = widget.suggestion_values();
        assert_eq!(values.len(), 10);
        assert!(values.iter().all(|value| value.contains('2')));
    }

    #[test]
    fn fewer_items_than_limit_shows_them_all() {
        let widget = Autocomplete::new("ac", "Pick", numbered_items(5)).with_limit(10);
        assert_eq!(widget.suggestion_values().len(), 5);
    }

    #[test]
    fn enter_accepts_active_suggestion_and_closes_dropdown() {
        let mut widget =
            Autocomplete::new("ac", "Pick", vec![Item::new("rust"), Item::new("ruby")]);
        type_text(&mut widget, "ru");
        widget.on_key(KeyEvent::plain(KeyCode::Down));
        assert_eq!(widget.active_index(), 1);

        let result = widget.on_key(KeyEvent::plain(KeyCode::Enter));
        assert!(result.handled);
        assert!(result.actions.is_empty());
        assert_eq!(widget.query(), "ruby");
        // "ruby" is now an exact item value, so the dropdown is gone.
        assert!(widget.suggestion_values().is_empty());
    }

    #[test]
    fn enter_without_dropdown_submits_query() {
        let mut widget = Autocomplete::new("ac", "Pick", vec![Item::new("rust")]);
        type_text(&mut widget, "zzz");
        assert!(widget.suggestion_values().is_empty());

        let result = widget.on_key(KeyEvent::plain(KeyCode::Enter));
        assert_eq!(result.actions.len(), 1);
        let WidgetAction::Submitted { value } = &result.actions[0];
        assert_eq!(*value, Value::Text("zzz".to_string()));
    }

    #[test]
    fn up_down_wrap_around_the_list() {
        let mut widget = Autocomplete::new("ac", "Pick", numbered_items(3));
        widget.on_key(KeyEvent::plain(KeyCode::Up));
        assert_eq!(widget.active_index(), 2);
        widget.on_key(KeyEvent::plain(KeyCode::Down));
        assert_eq!(widget.active_index(), 0);
    }

    #[test]
    fn backspace_recomputes_suggestions() {
        let mut widget =
            Autocomplete::new("ac", "Pick", vec![Item::new("one"), Item::new("two")]);
        type_text(&mut widget, "on");
        assert_eq!(widget.suggestion_values(), vec!["one"]);
        widget.on_key(KeyEvent::plain(KeyCode::Backspace));
        widget.on_key(KeyEvent::plain(KeyCode::Backspace));
        assert_eq!(widget.suggestion_values(), vec!["one", "two"]);
    }

    #[test]
    fn description_line_renders_between_input_and_rows() {
        let widget = Autocomplete::new("ac", "Pick", numbered_items(2))
            .with_description("Type to filter");
        let lines = widget.draw(&ctx()).lines;
        assert_eq!(lines.len(), 1 + 1 + 2);
        assert!(line_text(&lines[1]).contains("Type to filter"));
    }

    #[test]
    fn default_match_is_highlighted_in_rows() {
        let mut widget = Autocomplete::new("ac", "Pick", vec![Item::new("carrot")]);
        type_text(&mut widget, "rro");
        let lines = widget.draw(&ctx()).lines;
        let row = &lines[1];
        let highlighted: Vec<&str> = row
            .iter()
            .filter(|span| span.style.color == Some(crate::ui::style::Color::Yellow))
            .map(|span| span.text.as_str())
            .collect();
        assert_eq!(highlighted, vec!["rro"]);
    }

    #[test]
    fn set_value_list_replaces_items() {
        let mut widget = Autocomplete::new("ac", "Pick", numbered_items(3));
        widget.set_value(Value::List(vec!["x".to_string(), "y".to_string()]));
        assert_eq!(widget.suggestion_values(), vec!["x", "y"]);
    }
}
