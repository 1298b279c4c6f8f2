use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use taja_backdrop::BackdropState;
use taja_config::Config;
use taja_core::ColorTheme;
use taja_typing::Typewriter;

/// Blink period for the typed line's block cursor.
const CURSOR_BLINK_MS: u64 = 500;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = taja_config::load().map_err(|e| color_eyre::eyre::eyre!(e))?;
    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Current color theme.
    color_theme: ColorTheme,
    /// Banner headline.
    title: String,
    /// Typewriter for the role line; absent when there are no roles.
    typewriter: Option<Typewriter>,
    /// Elapsed-time stamp at which the next typewriter tick is due.
    type_due_ms: u64,
    /// Backdrop layers.
    backdrop: BackdropState,
    /// Start of the elapsed-time clock.
    started: Instant,
}

impl App {
    /// Construct a new instance of [`App`] from the loaded config.
    pub fn new(config: Config) -> Self {
        let roles = config.role_list();
        let typewriter = if roles.is_empty() {
            None
        } else {
            Some(Typewriter::new(roles))
        };

        Self {
            running: false,
            color_theme: config.color_theme(),
            typewriter,
            type_due_ms: 0,
            backdrop: BackdropState::new(config.backdrop()),
            title: config.title,
            started: Instant::now(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            let elapsed_ms = self.started.elapsed().as_millis() as u64;
            self.advance_typewriter(elapsed_ms);
            terminal.draw(|frame| self.render(frame, elapsed_ms))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Drive the typewriter chain: tick when due, re-arm with the
    /// returned delay.
    fn advance_typewriter(&mut self, elapsed_ms: u64) {
        if let Some(typewriter) = self.typewriter.as_mut()
            && elapsed_ms >= self.type_due_ms
        {
            let delay = typewriter.tick();
            self.type_due_ms = elapsed_ms + delay.as_millis() as u64;
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame, elapsed_ms: u64) {
        self.backdrop.render(frame, elapsed_ms);

        let color = self.color_theme.color();
        let area = frame.area();

        // Create vertical layout for centering
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Top padding
            Constraint::Length(1), // Title
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Typed role line
            Constraint::Fill(1),   // Bottom padding
            Constraint::Length(1), // Help text
        ])
        .split(area);

        // Render title
        let title = Paragraph::new(self.title.as_str())
            .style(Style::new().fg(color).bold())
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[1]);

        // Render the typed role line with a blinking block cursor
        let typed = self
            .typewriter
            .as_ref()
            .map(Typewriter::text)
            .unwrap_or_default();
        let cursor = if elapsed_ms / CURSOR_BLINK_MS % 2 == 0 {
            "▌"
        } else {
            " "
        };
        let role_line = Line::from(vec![
            Span::styled(typed.to_string(), Style::new().fg(color)),
            Span::styled(cursor, Style::new().fg(color)),
        ]);
        frame.render_widget(
            Paragraph::new(role_line).alignment(Alignment::Center),
            chunks[3],
        );

        // Render help text
        let help = Line::from(vec![
            "q".bold().fg(color),
            " quit  ".dark_gray(),
            "c".bold().fg(color),
            " cycle color".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[5]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with timeout for smooth animation updates.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        // Poll for events with 33ms timeout so the backdrop stays fluid
        if event::poll(Duration::from_millis(33))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('c')) => self.cycle_color_theme(),
            _ => {}
        }
    }

    /// Cycle through available color themes.
    fn cycle_color_theme(&mut self) {
        self.color_theme = self.color_theme.next();
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
