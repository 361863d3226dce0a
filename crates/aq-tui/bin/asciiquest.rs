//! AsciiQuest
//!
//! Main entry point for the game.

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use aq_core::{GameRng, GameState};
use aq_tui::{App, Theme};

/// AsciiQuest in the terminal
#[derive(Parser, Debug)]
#[command(name = "asciiquest")]
#[command(author, version, about = "AsciiQuest - explore the dungeon!", long_about = None)]
struct Args {
    /// World seed (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Force the light-background theme
    #[arg(long)]
    light: bool,

    /// Print the seed of the generated world and exit
    #[arg(long)]
    print_seed: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };

    if args.print_seed {
        println!("{}", rng.seed());
        return Ok(());
    }

    let state = GameState::new(rng);
    let theme = if args.light {
        Theme::light()
    } else {
        Theme::detect()
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(state, theme);

    // Main loop
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;

            if let Some(command) = app.handle_event(event) {
                app.execute(command);
            }

            if app.should_quit() {
                break;
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
