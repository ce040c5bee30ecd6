// Simple CLI Sokoban with ratatui.
// Controls: W/A/S/D or arrow keys (immediate response). R restarts the level, Q quits.
// Tiles: '#' wall, '@' mover, '$' box, '.' goal, '*' box on goal, '+' mover on goal, ' ' floor.

use WarehouseEngine::console_interface::ConsoleInput::*;
use WarehouseEngine::console_interface::{
    cleanup_terminal, handle_input, render_game, setup_terminal,
};
use WarehouseEngine::core::{MoveOutcome, WarehouseGrid, attempt_move};
use WarehouseEngine::levels;
use WarehouseEngine::models::GameRenderState;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let level_number = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(0);

    let Some(layout) = levels::level(level_number) else {
        eprintln!(
            "No level {}. Pick one of 0..{}",
            level_number,
            levels::count() - 1
        );
        return Ok(());
    };

    let grid = WarehouseGrid::parse(layout, level_number)?;
    let mut terminal = setup_terminal()?;
    let completed = run_interactive(layout, grid, &mut terminal);
    cleanup_terminal()?;

    // Scoring is the caller's job: the engine only reports the win and the
    // level it happened on.
    if completed? {
        println!("Level {} complete", level_number);
    }

    Ok(())
}

fn run_interactive(
    layout: &str,
    mut grid: WarehouseGrid,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<bool, Box<dyn std::error::Error>> {
    let first_render = GameRenderState {
        won: false,
        last_outcome: None,
    };
    render_game(terminal, &grid, &first_render)?;

    loop {
        match handle_input() {
            Ok(Quit) => return Ok(false),
            Ok(Restart) => {
                // A restart discards the grid and parses the level fresh
                grid = WarehouseGrid::parse(layout, grid.level_number())?;
                render_game(
                    terminal,
                    &grid,
                    &GameRenderState {
                        won: false,
                        last_outcome: None,
                    },
                )?;
            }
            Ok(Move(direction)) => {
                let outcome = attempt_move(&mut grid, direction);
                let won = matches!(outcome, MoveOutcome::PushedAndWon { .. });
                let to_render = GameRenderState {
                    won,
                    last_outcome: Some(outcome),
                };
                render_game(terminal, &grid, &to_render)?;

                if won {
                    // Keep showing the win screen until user inputs
                    loop {
                        match handle_input() {
                            Ok(Timeout) => {}
                            Ok(_) => break,
                            Err(_) => {
                                println!("error reading input");
                                break;
                            }
                        }
                    }
                    return Ok(true);
                }
            }
            Ok(_) => {
                // No input, continue polling
            }
            Err(_) => {
                println!("error reading input");
                return Ok(false);
            }
        }
    }
}
