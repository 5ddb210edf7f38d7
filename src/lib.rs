pub mod core;
pub mod terminal;
pub mod ui;
pub mod widgets;

pub use crate::core::suggest::{FilterFn, Item, compute_suggestions, default_filter};
pub use crate::core::value::Value;

pub use terminal::{
    CursorPos, KeyCode, KeyEvent, KeyModifiers, Terminal, TerminalEvent, TerminalSize,
};

pub use ui::frame_json;
pub use ui::renderer::{RenderFrame, Renderer};
pub use ui::span::{Span, SpanLine};
pub use ui::style::{Color, Style};
pub use ui::theme::AutocompleteStyles;

pub use widgets::autocomplete::Autocomplete;
pub use widgets::text::TextInput;
pub use widgets::traits::{
    DrawOutput, Drawable, FocusMode, InteractionResult, Interactive, InteractiveNode,
    RenderContext, WidgetAction,
};
pub use widgets::validators;
