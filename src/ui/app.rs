use crate::config::AppConfig;
use crate::error::EngineError;
use crate::game::{GameEngine, GameEvent, GameResult, MoveOutcome, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

pub struct App {
    engine: GameEngine,
    inbox: Rc<RefCell<Vec<GameEvent>>>,
    start_column: usize,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let mut engine = GameEngine::new(config.players.to_players());

        // The view only learns about state changes through engine events
        let inbox = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&inbox);
        engine.subscribe(move |event: &GameEvent| sink.borrow_mut().push(event.clone()));

        App {
            engine,
            inbox,
            start_column: config.ui.start_column,
            selected_column: config.ui.start_column,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::other(e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_disc();
            }
            KeyCode::Char('r') => {
                self.engine.reset();
                self.selected_column = self.start_column;
            }
            _ => {}
        }

        self.drain_events();
    }

    /// Drop a disc in the selected column
    fn drop_disc(&mut self) {
        match self.engine.attempt_move(self.selected_column) {
            Ok(MoveOutcome::Rejected) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Ok(_) => {}
            Err(EngineError::InvalidColumn { column }) => {
                tracing::warn!(column, "selector outside the board");
            }
        }
    }

    /// React to whatever the engine announced during the last action
    fn drain_events(&mut self) {
        let events: Vec<GameEvent> = self.inbox.borrow_mut().drain(..).collect();
        for event in events {
            match event {
                GameEvent::ColumnFull { .. } => {
                    self.message = Some("Column is full, try another one.".to_string());
                }
                GameEvent::GameEnded(GameResult::Win { winner, info }) => {
                    self.message = Some(format!(
                        "{} wins in {} turns! Press 'r' to play again.",
                        winner.label(),
                        info.turn
                    ));
                }
                GameEvent::GameEnded(GameResult::Tie) => {
                    self.message = Some("It's a tie! Press 'r' to play again.".to_string());
                }
                GameEvent::GameRestarted => {
                    self.message = Some("New game started!".to_string());
                }
                GameEvent::MoveMade { .. } | GameEvent::SwitchedPlayer { .. } => {}
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.engine, self.selected_column, &self.message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
