mod game_events;
mod ui;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};

use flapper::build_info;
use flapper::utils::logging;
use flapper::{Game, GameConfig, Scoreboard};
use game_events::{apply_game_events, Presentation};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// How a play-through ended.
enum Exit {
    Quit,
    Restart,
}

struct Options {
    seed: Option<u64>,
}

fn print_help() {
    println!("Flapper - a flappy bird clone for the terminal\n");
    println!("Usage: flapper [options]\n");
    println!("Options:");
    println!("  --seed <n>       Use a fixed seed for obstacle placement");
    println!("  --scores         Print the high score table and exit");
    println!("  --reset-scores   Clear the high score table and exit");
    println!("  --version        Show version information");
    println!("  --help           Show this help message");
}

fn print_scores() {
    let scoreboard = Scoreboard::load_default();
    if scoreboard.is_empty() {
        println!("No high scores yet.");
        return;
    }
    for (i, entry) in scoreboard.entries().iter().enumerate() {
        println!("{}. {} - {}", i + 1, entry.score, entry.time);
    }
}

/// Parse CLI arguments. Returns `None` when the command already ran.
fn parse_args() -> io::Result<Option<Options>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut options = Options { seed: None };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                return Ok(None);
            }
            "--help" | "-h" => {
                print_help();
                return Ok(None);
            }
            "--scores" => {
                print_scores();
                return Ok(None);
            }
            "--reset-scores" => {
                Scoreboard::load_default().clear()?;
                println!("High scores cleared.");
                return Ok(None);
            }
            "--seed" => {
                let value = iter.next().and_then(|v| v.parse::<u64>().ok());
                match value {
                    Some(seed) => options.seed = Some(seed),
                    None => {
                        eprintln!("--seed needs a non-negative integer");
                        std::process::exit(1);
                    }
                }
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'flapper --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    Ok(Some(options))
}

fn main() -> io::Result<()> {
    let Some(options) = parse_args()? else {
        return Ok(());
    };

    if let Err(e) = logging::init() {
        eprintln!("Logging disabled: {}", e);
    }
    log::info!("Starting {}", build_info::version_line());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run(&mut terminal, &options);

    // Cleanup terminal, even if the game loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("Exiting with error: {}", e);
    }
    result
}

/// Play until the user quits. A restart rebuilds every piece of state from
/// scratch, as if the program had been relaunched.
fn run(terminal: &mut Term, options: &Options) -> io::Result<()> {
    loop {
        let config = GameConfig::load();
        let scoreboard = Scoreboard::load_default();
        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let game = Game::new(config, scoreboard);

        match play(terminal, game, &mut rng)? {
            Exit::Quit => {
                log::info!("Quit");
                return Ok(());
            }
            Exit::Restart => log::info!("Restarting"),
        }
    }
}

/// Frame loop for one game.
fn play(terminal: &mut Term, mut game: Game, rng: &mut StdRng) -> io::Result<Exit> {
    let frame_len = Duration::from_millis(game.config().frame_ms);
    let mut presentation = Presentation::default();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            ui::draw(frame, &game.view(), game.scoreboard(), &presentation);
        })?;

        // Wait for input until the next frame is due
        let timeout = frame_len.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        return Ok(Exit::Quit);
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(Exit::Quit);
                    }
                    KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('k') => {
                        game.flap();
                    }
                    KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => {
                        if game.can_restart() {
                            return Ok(Exit::Restart);
                        }
                    }
                    _ => {}
                },
                Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                    game.flap();
                }
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= frame_len {
            last_tick = Instant::now();
            let events = game.tick(rng, elapsed.as_millis() as u64);
            presentation.advance_frame();
            apply_game_events(&mut presentation, &events, &mut io::stdout());
        }
    }
}
