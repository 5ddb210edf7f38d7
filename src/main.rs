use std::io;
use std::time::Duration;
use typeahead::ui::frame_json;
use typeahead::{
    Autocomplete, Color, Drawable, Interactive, Item, KeyCode, KeyModifiers, RenderContext,
    Renderer, Span, Style, Terminal, TerminalEvent, TerminalSize, WidgetAction, validators,
};

const DEMO_ITEMS: &str = r#"[
    {"value": "c", "description": "1972"},
    {"value": "c++", "description": "1985"},
    {"value": "erlang", "description": "1986"},
    {"value": "go", "description": "2009"},
    {"value": "haskell", "description": "1990"},
    {"value": "java", "description": "1995"},
    {"value": "javascript", "description": "1995"},
    {"value": "kotlin", "description": "2011"},
    {"value": "lua", "description": "1993"},
    {"value": "ocaml", "description": "1996"},
    {"value": "python", "description": "1991"},
    {"value": "ruby", "description": "1995"},
    {"value": "rust", "description": "2015"},
    {"value": "scala", "description": "2004"},
    {"value": "swift", "description": "2014"},
    {"value": "zig", "description": "2016"}
]"#;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}

fn run() -> io::Result<()> {
    let items: Vec<Item> = serde_json::from_str(DEMO_ITEMS).map_err(io::Error::other)?;
    let mut widget = Autocomplete::new("language", "Language", items)
        .with_placeholder("Start typing a language")
        .with_description("Up/Down navigate · Enter accepts · Esc quits")
        .with_limit(8)
        .with_max_visible(6)
        .with_validator(validators::required("Pick a language first"));

    if std::env::args().any(|arg| arg == "--frame-json") {
        let size = TerminalSize {
            width: 80,
            height: 24,
        };
        let frame = Renderer::render(&widget, &RenderContext::focused(widget.id(), size));
        println!("{}", frame_json::frame_to_json(&frame, size));
        return Ok(());
    }

    let mut terminal = Terminal::new()?;
    terminal.enter_raw_mode()?;
    terminal.set_line_wrap(false)?;
    terminal.hide_cursor()?;

    let result = event_loop(&mut terminal, &mut widget);

    terminal.show_cursor()?;
    terminal.set_line_wrap(true)?;
    terminal.exit_raw_mode()?;

    match result? {
        Some(choice) => println!("\nSelected: {choice}"),
        None => println!("\nCancelled"),
    }
    Ok(())
}

fn event_loop(terminal: &mut Terminal, widget: &mut Autocomplete) -> io::Result<Option<String>> {
    let origin = terminal.cursor_position().y;
    let mut error: Option<String> = None;
    let mut render_requested = true;

    loop {
        if render_requested {
            draw(terminal, widget, origin, error.as_deref())?;
            render_requested = false;
        }

        if !terminal.poll(Duration::from_millis(100))? {
            continue;
        }

        match terminal.read_event()? {
            TerminalEvent::Key(key) => {
                if key.code == KeyCode::Esc && key.modifiers == KeyModifiers::NONE {
                    return Ok(None);
                }

                error = None;
                let result = widget.on_key(key);
                for action in &result.actions {
                    let WidgetAction::Submitted { value } = action;
                    match widget.validate() {
                        Ok(()) => return Ok(value.as_text().map(ToOwned::to_owned)),
                        Err(message) => error = Some(message),
                    }
                }
                render_requested = true;
            }
            TerminalEvent::Resize { .. } => {
                render_requested = true;
            }
        }
    }
}

fn draw(
    terminal: &mut Terminal,
    widget: &Autocomplete,
    origin: u16,
    error: Option<&str>,
) -> io::Result<()> {
    let size = terminal.size();
    let ctx = RenderContext::focused(widget.id(), size);
    let mut frame = Renderer::render(widget, &ctx);

    if let Some(message) = error {
        frame.lines.push(vec![
            Span::styled(format!("  ! {message}"), Style::new().color(Color::Red)).no_wrap(),
        ]);
    }

    terminal.move_cursor(0, origin)?;
    terminal.clear_from_cursor_down()?;
    for (row, line) in frame.lines.iter().enumerate() {
        terminal.move_cursor(0, origin.saturating_add(row as u16))?;
        terminal.render_line(line)?;
    }
    terminal.flush()
}
