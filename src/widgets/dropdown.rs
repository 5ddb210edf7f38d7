use crate::ui::highlight::render_text_spans;
use crate::ui::span::{Span, SpanLine};
use crate::ui::theme::AutocompleteStyles;

/// One dropdown row: the item value, an optional dim description, and the
/// char ranges to highlight inside the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRow {
    pub text: String,
    pub description: Option<String>,
    pub highlights: Vec<(usize, usize)>,
}

impl SuggestionRow {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            description: None,
            highlights: Vec::new(),
        }
    }
}

/// The suggestion dropdown below an autocomplete input. Not a standalone
/// widget; owned and driven by `Autocomplete`.
pub struct SuggestionList {
    rows: Vec<SuggestionRow>,
    active: usize,
    scroll_offset: usize,
    max_visible: Option<usize>,
}

impl SuggestionList {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            active: 0,
            scroll_offset: 0,
            max_visible: None,
        }
    }

    /// Replace all rows. The active row resets to the top: the previous
    /// selection is meaningless against a recomputed result.
    pub fn set_rows(&mut self, rows: Vec<SuggestionRow>) {
        self.rows = rows;
        self.active = 0;
        self.scroll_offset = 0;
    }

    pub fn set_max_visible(&mut self, max_visible: usize) {
        self.max_visible = if max_visible == 0 {
            None
        } else {
            Some(max_visible)
        };
        self.ensure_visible();
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_row(&self) -> Option<&SuggestionRow> {
        self.rows.get(self.active)
    }

    /// Move the active row by `delta`, wrapping at both ends.
    pub fn move_active(&mut self, delta: isize) -> bool {
        if self.rows.is_empty() {
            return false;
        }
        let len = self.rows.len() as isize;
        let next = ((self.active as isize + delta % len + len) % len) as usize;
        if next == self.active {
            return false;
        }
        self.active = next;
        self.ensure_visible();
        true
    }

    fn ensure_visible(&mut self) {
        let Some(max_visible) = self.max_visible else {
            self.scroll_offset = 0;
            return;
        };
        if self.active < self.scroll_offset {
            self.scroll_offset = self.active;
        } else if self.active >= self.scroll_offset + max_visible {
            self.scroll_offset = self.active + 1 - max_visible;
        }
        let upper = self.rows.len().saturating_sub(max_visible);
        self.scroll_offset = self.scroll_offset.min(upper);
    }

    fn visible_range(&self) -> (usize, usize) {
        match self.max_visible {
            Some(max_visible) => (
                self.scroll_offset,
                (self.scroll_offset + max_visible).min(self.rows.len()),
            ),
            None => (0, self.rows.len()),
        }
    }

    /// Render the visible rows. Nothing is produced for an empty list: an
    /// empty suggestion set means no dropdown at all.
    pub fn draw_lines(&self, focused: bool, styles: &AutocompleteStyles) -> Vec<SpanLine> {
        let mut lines = Vec::<SpanLine>::new();
        let (start, end) = self.visible_range();

        for (index, row) in self
            .rows
            .iter()
            .enumerate()
            .skip(start)
            .take(end.saturating_sub(start))
        {
            let active = focused && index == self.active;
            let cursor = if active { "❯" } else { " " };
            let base_style = if active { styles.active_item } else { styles.item };

            let mut spans: SpanLine = vec![
                Span::styled(cursor, base_style).no_wrap(),
                Span::new(" ").no_wrap(),
            ];
            spans.extend(render_text_spans(
                &row.text,
                &row.highlights,
                base_style,
                styles.highlight,
            ));
            if let Some(description) = &row.description {
                spans.push(Span::styled(format!("  {description}"), styles.hint).no_wrap());
            }
            lines.push(spans);
        }

        if let Some(max_visible) = self.max_visible {
            let total = self.rows.len();
            if total > max_visible {
                lines.push(vec![
                    Span::styled(
                        format!("  {}-{} of {}", start + 1, end, total),
                        styles.hint,
                    )
                    .no_wrap(),
                ]);
            }
        }

        lines
    }
}

impl Default for SuggestionList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{SuggestionList, SuggestionRow};
    use crate::ui::theme::AutocompleteStyles;

    fn rows(count: usize) -> Vec<SuggestionRow> {
        (0..count)
            .map(|n| SuggestionRow::plain(format!("row-{n}")))
            .collect()
    }

    #[test]
    fn move_active_wraps_both_ways() {
        let mut list = SuggestionList::new();
        list.set_rows(rows(3));
        assert!(list.move_active(-1));
        assert_eq!(list.active_index(), 2);
        assert!(list.move_active(1));
        assert_eq!(list.active_index(), 0);
    }

    #[test]
    fn window_follows_active_row() {
        let mut list = SuggestionList::new();
        list.set_rows(rows(10));
        list.set_max_visible(3);
        for _ in 0..5 {
            list.move_active(1);
        }
        assert_eq!(list.active_index(), 5);
        let lines = list.draw_lines(true, &AutocompleteStyles::default());
        // 3 rows + footer
        assert_eq!(lines.len(), 4);
        let shown: String = lines[2].iter().map(|span| span.text.as_str()).collect();
        assert!(shown.contains("row-5"));
    }

    #[test]
    fn empty_list_draws_nothing() {
        let list = SuggestionList::new();
        assert!(list.draw_lines(true, &AutocompleteStyles::default()).is_empty());
    }

    #[test]
    fn set_rows_resets_active() {
        let mut list = SuggestionList::new();
        list.set_rows(rows(5));
        list.move_active(3);
        list.set_rows(rows(2));
        assert_eq!(list.active_index(), 0);
    }
}
