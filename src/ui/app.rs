//! Main TUI application state and logic

use crate::algorithms::Algorithm;
use crate::errors::{Result, VisualizerError};
use crate::playback::{Controller, Field, Phase};
use crate::ui::panes::{self, InputState};
use crate::ui::pseudocode;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// Longest wait for input before the loop checks the timer again
const IDLE_POLL: Duration = Duration::from_millis(50);

/// The main application state
pub struct App {
    /// The playback state machine
    pub controller: Controller,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last condition signaled by the core, shown until the next action
    pub error: Option<VisualizerError>,

    /// Setting being typed in, if any
    pub input: Option<InputState>,

    /// Highlighted pseudocode line (0-based)
    pub code_line: Option<usize>,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(controller: Controller) -> Self {
        App {
            controller,
            should_quit: false,
            status_message: String::from("Ready"),
            error: None,
            input: None,
            code_line: None,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Wake up in time for the next auto-advance
            let timeout = self
                .controller
                .next_deadline()
                .map(|due| due.saturating_duration_since(Instant::now()))
                .map_or(IDLE_POLL, |wait| wait.min(IDLE_POLL));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }

            self.controller.poll(Instant::now());
            self.absorb_snapshots();
        }

        Ok(())
    }

    /// The algorithm whose pseudocode is shown
    fn shown_algorithm(&self) -> Option<Algorithm> {
        match self.controller.run() {
            Some(run) => Some(run.algorithm()),
            None => self.controller.settings().resolve_algorithm().ok(),
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Controls on top, bars and pseudocode in the middle, status bar at bottom
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(rows[1]);

        panes::render_controls_bar(
            frame,
            rows[0],
            self.controller.settings(),
            self.input.as_ref(),
        );

        let algorithm = self.shown_algorithm();
        let title = algorithm.map_or("Array", Algorithm::name);
        panes::render_bars_pane(
            frame,
            columns[0],
            title,
            self.controller.array(),
            self.controller.last_operation(),
        );

        panes::render_code_pane(
            frame,
            columns[1],
            "Pseudocode",
            algorithm.map(pseudocode::listing).unwrap_or_default(),
            self.code_line,
        );

        panes::render_status_bar(
            frame,
            rows[2],
            &self.status_message,
            self.controller.applied_operations(),
            self.controller.phase(),
            self.error.is_some(),
            self.input.is_some(),
        );
    }

    /// Fold published snapshots into the status line and pseudocode marker
    pub fn absorb_snapshots(&mut self) {
        let snapshots = self.controller.take_snapshots();
        let Some(algorithm) = self.controller.run().map(|run| run.algorithm()) else {
            return;
        };
        for snapshot in &snapshots {
            self.code_line =
                pseudocode::line_for(algorithm, &snapshot.operation).apply(self.code_line);
            self.status_message = snapshot.operation.to_string();
        }
        if self.controller.phase() == Phase::Finished {
            self.status_message = "Finished".to_string();
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.input.is_some() {
            self.handle_input_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                // Toggle playback (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Right | KeyCode::Char('s') => {
                let result = self.controller.step();
                self.report(result);
                self.absorb_snapshots();
            }
            KeyCode::Char('r') => {
                self.controller.reset();
                self.code_line = None;
                self.error = None;
                self.status_message = "Reset".to_string();
            }
            KeyCode::Char('n') => {
                self.controller.randomize();
                self.error = None;
                self.status_message = format!(
                    "Randomized array of size {}",
                    self.controller.base_array().len()
                );
            }
            KeyCode::Tab | KeyCode::BackTab => {
                let forward = key.code == KeyCode::Tab;
                self.controller.settings_mut().cycle_algorithm(forward);
                self.error = None;
                self.status_message = format!("Selected {}", self.controller.settings().algorithm);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.controller.settings_mut().adjust_speed(10);
            }
            KeyCode::Char('-') => {
                self.controller.settings_mut().adjust_speed(-10);
            }
            KeyCode::Up => {
                self.controller.settings_mut().step_size(1);
            }
            KeyCode::Down => {
                self.controller.settings_mut().step_size(-1);
            }
            KeyCode::Char('e') => self.input = Some(InputState::new(Field::Size)),
            KeyCode::Char('v') => self.input = Some(InputState::new(Field::Speed)),
            KeyCode::Char('t') => self.input = Some(InputState::new(Field::Target)),
            _ => {}
        }
    }

    fn toggle_play(&mut self) {
        if self.controller.phase() == Phase::Running {
            self.controller.pause();
            self.status_message = "Paused".to_string();
            return;
        }
        let result = self.controller.start(Instant::now());
        if result.is_ok() {
            self.status_message = format!("Running {}...", self.controller.settings().algorithm);
        }
        self.report(result);
        self.absorb_snapshots();
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        let Some(input) = self.input.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => input.buffer.push(c),
            KeyCode::Backspace => {
                input.buffer.pop();
            }
            KeyCode::Esc => {
                self.input = None;
                self.status_message = "Edit cancelled".to_string();
            }
            KeyCode::Enter => {
                if let Some(input) = self.input.take() {
                    let result = self
                        .controller
                        .settings_mut()
                        .apply_input(input.field, &input.buffer);
                    if result.is_ok() {
                        self.status_message =
                            format!("Set {} to {}", input.field.label(), input.buffer);
                    }
                    self.report(result);
                }
            }
            _ => {}
        }
    }

    /// Surface a signaled condition in the status bar
    fn report(&mut self, result: Result<()>) {
        match result {
            Ok(()) => self.error = None,
            Err(err) => {
                debug!(%err, "reporting error to user");
                self.status_message = err.to_string();
                self.error = Some(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::Settings;
    use crossterm::event::KeyModifiers;

    fn app(values: Vec<u32>) -> App {
        let mut settings = Settings::default();
        settings.seed = Some(3);
        App::new(Controller::with_array(settings, values))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_step_updates_status_and_code_line() {
        let mut app = app(vec![5, 3, 1]);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.status_message, "Comparing indices 0 and 1");
        assert_eq!(app.code_line, Some(2));

        press(&mut app, KeyCode::Right);
        assert_eq!(app.status_message, "Swapped indices 0 and 1");
        assert_eq!(app.controller.array(), &[3, 5, 1]);
    }

    #[test]
    fn test_target_input() {
        let mut app = app(vec![2, 3]);
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);

        assert!(app.input.is_none());
        assert_eq!(app.controller.settings().target, 42);
        assert_eq!(app.status_message, "Set target to 42");
    }

    #[test]
    fn test_invalid_input_is_reported() {
        let mut app = app(vec![2, 3]);
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.controller.settings().size, 30);
        assert!(matches!(
            app.error,
            Some(VisualizerError::InvalidConfiguration { field: "size", .. })
        ));
    }

    #[test]
    fn test_unknown_algorithm_is_reported() {
        let mut app = app(vec![2, 3]);
        app.controller.settings_mut().algorithm = "Bogo Sort".to_string();
        press(&mut app, KeyCode::Right);

        assert_eq!(app.controller.phase(), Phase::Idle);
        assert_eq!(app.status_message, "Unknown algorithm: Bogo Sort");
    }

    #[test]
    fn test_space_toggles_play() {
        let mut app = app(vec![4, 3, 2, 1]);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.controller.phase(), Phase::Running);

        // Reset the debounce window instead of sleeping
        app.last_space_press = Instant::now() - Duration::from_secs(1);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.controller.phase(), Phase::Paused);
        assert_eq!(app.status_message, "Paused");
    }
}
