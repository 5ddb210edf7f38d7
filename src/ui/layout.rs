use crate::ui::span::{Span, SpanLine, WrapMode};
use unicode_width::UnicodeWidthChar;

/// Compose logical span lines into physical terminal lines of at most
/// `width` cells. `NoWrap` spans are truncated at the line end; `Wrap`
/// spans continue on the next line.
pub fn compose(lines: &[SpanLine], width: u16) -> Vec<SpanLine> {
    let width = width as usize;
    if width == 0 {
        return lines.iter().map(|_| SpanLine::new()).collect();
    }

    let mut out = Vec::<SpanLine>::new();
    for line in lines {
        let mut current = SpanLine::new();
        let mut used = 0usize;

        for span in line {
            if span.width() == 0 {
                continue;
            }
            match span.wrap_mode {
                WrapMode::NoWrap => place_no_wrap(span, width, &mut used, &mut current, &mut out),
                WrapMode::Wrap => place_wrap(span, width, &mut used, &mut current, &mut out),
            }
        }
        out.push(current);
    }
    out
}

fn place_no_wrap(
    span: &Span,
    width: usize,
    used: &mut usize,
    current: &mut SpanLine,
    out: &mut Vec<SpanLine>,
) {
    if *used > 0 && span.width() > width - *used {
        out.push(std::mem::take(current));
        *used = 0;
    }
    let (head, _) = split_at_width(span, width - *used);
    if head.width() > 0 {
        *used += head.width();
        current.push(head);
    }
}

fn place_wrap(
    span: &Span,
    width: usize,
    used: &mut usize,
    current: &mut SpanLine,
    out: &mut Vec<SpanLine>,
) {
    let mut rest = span.clone();
    loop {
        if *used >= width {
            out.push(std::mem::take(current));
            *used = 0;
        }
        let available = width - *used;
        if rest.width() <= available {
            *used += rest.width();
            current.push(rest);
            return;
        }

        let (head, tail) = split_at_width(&rest, available);
        if head.width() == 0 && *used == 0 {
            // Single glyph wider than the terminal; drop it rather than spin.
            let mut chars = rest.text.chars();
            chars.next();
            rest.text = chars.collect();
            if rest.width() == 0 {
                return;
            }
            continue;
        }
        if head.width() > 0 {
            current.push(head);
        }
        out.push(std::mem::take(current));
        *used = 0;

        match tail {
            Some(remaining) => rest = remaining,
            None => return,
        }
    }
}

fn split_at_width(span: &Span, max_width: usize) -> (Span, Option<Span>) {
    let mut head = String::new();
    let mut head_width = 0usize;
    let mut tail = String::new();

    let mut chars = span.text.chars();
    for ch in chars.by_ref() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if head_width + ch_width > max_width {
            tail.push(ch);
            break;
        }
        head.push(ch);
        head_width += ch_width;
    }
    tail.extend(chars);

    let make = |text: String| Span {
        text,
        style: span.style,
        wrap_mode: span.wrap_mode,
    };
    if tail.is_empty() {
        (make(head), None)
    } else {
        (make(head), Some(make(tail)))
    }
}
