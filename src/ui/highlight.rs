use crate::ui::span::Span;
use crate::ui::style::Style;

/// Split `text` into spans, applying `highlight_style` over the given char
/// ranges and `base_style` elsewhere. Ranges are clamped to the text and
/// rendered in ascending order.
pub fn render_text_spans(
    text: &str,
    highlights: &[(usize, usize)],
    base_style: Style,
    highlight_style: Style,
) -> Vec<Span> {
    if highlights.is_empty() {
        return vec![Span::styled(text.to_string(), base_style).no_wrap()];
    }

    let chars: Vec<char> = text.chars().collect();
    let mut sorted = highlights.to_vec();
    sorted.sort_unstable();

    let mut spans = Vec::<Span>::new();
    let mut cursor = 0usize;
    for (start, end) in sorted {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > cursor {
            let plain: String = chars[cursor..start].iter().collect();
            spans.push(Span::styled(plain, base_style).no_wrap());
        }
        if end > start.max(cursor) {
            let from = start.max(cursor);
            let lit: String = chars[from..end].iter().collect();
            spans.push(Span::styled(lit, base_style.merge(highlight_style)).no_wrap());
        }
        cursor = cursor.max(end);
    }
    if cursor < chars.len() {
        let tail: String = chars[cursor..].iter().collect();
        spans.push(Span::styled(tail, base_style).no_wrap());
    }

    if spans.is_empty() {
        spans.push(Span::styled(text.to_string(), base_style).no_wrap());
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::render_text_spans;
    use crate::ui::style::{Color, Style};

    fn texts(spans: &[crate::ui::span::Span]) -> Vec<&str> {
        spans.iter().map(|span| span.text.as_str()).collect()
    }

    #[test]
    fn no_highlights_yields_single_span() {
        let spans = render_text_spans("hello", &[], Style::default(), Style::default());
        assert_eq!(texts(&spans), vec!["hello"]);
    }

    #[test]
    fn middle_range_splits_in_three() {
        let highlight = Style::new().color(Color::Yellow);
        let spans = render_text_spans("abcdef", &[(2, 4)], Style::default(), highlight);
        assert_eq!(texts(&spans), vec!["ab", "cd", "ef"]);
        assert_eq!(spans[1].style.color, Some(Color::Yellow));
        assert_eq!(spans[0].style.color, None);
    }

    #[test]
    fn out_of_bounds_ranges_are_clamped() {
        let spans = render_text_spans("abc", &[(1, 99)], Style::default(), Style::new().bold());
        assert_eq!(texts(&spans), vec!["a", "bc"]);
        assert!(spans[1].style.bold);
    }
}
