use crate::core::{Direction, GameState, PuzzleEngine, SharedGameState, UserAction};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_state(engine: &PuzzleEngine) -> GameRenderState {
    GameRenderState {
        game: engine.state().clone(),
        won: engine.is_won(),
        status: engine.status_message(),
        boxes_on_goals: engine.boxes_on_goals(),
        total_goals: engine.shared().total_goals(),
        last_change: None,
    }
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    shared: &SharedGameState,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let game_text = render_game_to_string(shared, &state.game);
        let game_paragraph = Paragraph::new(game_text)
            .block(Block::default().borders(Borders::ALL).title("Sokoban"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let instructions = if state.won {
            format!("{} Press R to play again, Q to quit.", state.status)
        } else {
            format!(
                "Controls: WASD or Arrow keys to move, R to reset, Q to quit | Goals: {}/{}",
                state.boxes_on_goals, state.total_goals
            )
        };

        let instructions = if let Some(change_type) = &state.last_change {
            format!("{} | Last: {:?}", instructions, change_type)
        } else {
            instructions
        };

        let color = if state.won { Color::Green } else { Color::Cyan };
        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Status"))
            .style(Style::default().fg(color))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

/// Draws the board with the same symbols the level parser reads.
pub fn render_game_to_string(shared: &SharedGameState, game: &GameState) -> String {
    let mut result = String::new();
    for pos in shared.bounds.positions() {
        let tile = shared.tile_at(game, &pos);
        let ch = if tile.wall {
            '#'
        } else {
            match (tile.goal, tile.player, tile.boxed) {
                (false, true, _) => '@',
                (false, false, true) => '$',
                (false, false, false) => ' ',
                (true, true, _) => '+',
                (true, false, true) => '*',
                (true, false, false) => '.',
            }
        };
        result.push(ch);
        if pos.j == shared.width() - 1 {
            result.push('\n');
        }
    }
    result
}

pub fn render_engine_to_string(engine: &PuzzleEngine) -> String {
    render_game_to_string(engine.shared(), engine.state())
}

pub enum ConsoleInput {
    UserAction(UserAction),
    Quit,
    Timeout,
    Unknown,
}

pub fn input_from_key(code: KeyCode) -> ConsoleInput {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::UserAction(UserAction::Reset),
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Up))
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Down))
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Left))
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Right))
        }
        _ => ConsoleInput::Unknown,
    }
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(input_from_key(code));
        }
    }
    Ok(ConsoleInput::Timeout)
}
