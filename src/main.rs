// Sokoban in the terminal with ratatui
// Controls: W/A/S/D or arrow keys to move, R to reset, Q to quit.
// Tiles: '#' wall, '@' player, '$' box, '.' goal, '*' box on goal, '+' player on goal, ' ' floor.

use clap::Parser;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use sokoban_mini::config::{SokobanArgs, SokobanMode, init_file_logging, init_stderr_logging, load_engine};
use sokoban_mini::console_interface::ConsoleInput::*;
use sokoban_mini::console_interface::{
    cleanup_terminal, handle_input, render_engine_to_string, render_game, render_state,
    setup_terminal,
};
use sokoban_mini::core::PuzzleEngine;
use sokoban_mini::json_export::get_json_data;
use std::io;
use tracing::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = SokobanArgs::parse();

    match args.mode() {
        SokobanMode::Show => {
            init_stderr_logging();
            let engine = load_engine(&args)?;
            run_show(&engine)?;
        }
        SokobanMode::Play => {
            init_file_logging(&args.log_file)?;
            let mut engine = load_engine(&args)?;
            let mut terminal = setup_terminal()?;
            let result = run_interactive(&mut engine, &mut terminal);
            cleanup_terminal()?;
            if let Err(err) = &result {
                error!(%err, "interactive session failed");
            }
            result?;
        }
    }

    Ok(())
}

fn run_show(engine: &PuzzleEngine) -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", render_engine_to_string(engine));
    println!("{}", get_json_data(engine)?);
    Ok(())
}

fn run_interactive(
    engine: &mut PuzzleEngine,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    render_game(terminal, engine.shared(), &render_state(engine))?;

    loop {
        match handle_input()? {
            Quit => break,
            UserAction(user_action) => {
                let change = engine.apply(user_action);
                let mut to_render = render_state(engine);
                to_render.last_change = change;
                render_game(terminal, engine.shared(), &to_render)?;
            }
            Timeout | Unknown => {}
        }
    }

    info!(won = engine.is_won(), "quit");
    Ok(())
}
