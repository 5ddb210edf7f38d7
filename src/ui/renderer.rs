use crate::terminal::CursorPos;
use crate::ui::layout;
use crate::ui::span::SpanLine;
use crate::widgets::traits::{InteractiveNode, RenderContext};

#[derive(Debug, Default, Clone)]
pub struct RenderFrame {
    pub lines: Vec<SpanLine>,
    pub cursor: Option<CursorPos>,
}

pub struct Renderer;

impl Renderer {
    /// Draw `node` and compose the result to the context's terminal width.
    /// The cursor is reported only for the focused node, in frame-local
    /// coordinates.
    pub fn render(node: &dyn InteractiveNode, ctx: &RenderContext) -> RenderFrame {
        let out = node.draw(ctx);
        let focused = ctx.focused_id.as_deref().is_some_and(|id| id == node.id());
        RenderFrame {
            lines: layout::compose(&out.lines, ctx.terminal_size.width),
            cursor: if focused { node.cursor_pos() } else { None },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Renderer;
    use crate::core::suggest::Item;
    use crate::terminal::TerminalSize;
    use crate::widgets::autocomplete::Autocomplete;
    use crate::widgets::traits::RenderContext;

    #[test]
    fn focused_node_reports_cursor() {
        let widget = Autocomplete::new("ac", "Pick", vec![Item::new("a")]);
        let size = TerminalSize {
            width: 80,
            height: 24,
        };
        let focused = Renderer::render(&widget, &RenderContext::focused("ac", size));
        assert!(focused.cursor.is_some());

        let unfocused = Renderer::render(
            &widget,
            &RenderContext {
                focused_id: None,
                terminal_size: size,
            },
        );
        assert!(unfocused.cursor.is_none());
    }
}
