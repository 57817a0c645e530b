mod cli;
mod ui;

use anyhow::{Context, Result};
use cli::{CliCommand, RunOptions};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    MouseButton, MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use env_logger::{Env, Target};
use flappy::{build_info, FlappyGame, GameLoop};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::{self, Stdout};
use std::path::Path;
use std::time::Duration;
use ui::TerminalRenderer;

type Host = GameLoop<TerminalRenderer<CrosstermBackend<Stdout>>>;

/// What a terminal event means to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HostInput {
    PrimaryAction,
    TogglePause,
    Quit,
    Ignored,
}

fn classify(event: &Event) -> HostInput {
    match event {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Up => HostInput::PrimaryAction,
            KeyCode::Char('p') | KeyCode::Char('P') => HostInput::TogglePause,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => HostInput::Quit,
            _ => HostInput::Ignored,
        },
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            HostInput::PrimaryAction
        }
        _ => HostInput::Ignored,
    }
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    // Stderr shares the screen with the UI, so stay quiet unless asked.
    let default_filter = if log_file.is_some() { "info" } else { "off" };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = match cli::parse_args(&args) {
        Ok(CliCommand::Run(options)) => options,
        Ok(CliCommand::Version) => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Ok(CliCommand::Help) => {
            println!("{}", cli::USAGE);
            return Ok(());
        }
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("Run 'flappy --help' for usage.");
            std::process::exit(1);
        }
    };

    init_logging(options.log_file.as_deref())?;
    log::info!("Starting {}", build_info::version_line());

    enable_raw_mode()?;
    let result = run_in_terminal(&options);
    let restored = restore_terminal().context("Failed to restore terminal");
    result?;
    restored
}

fn run_in_terminal(options: &RunOptions) -> Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    run(options, TerminalRenderer::new(terminal))
}

/// Undo every terminal mode, even if an earlier step fails.
fn restore_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    let steps = [
        stdout.execute(DisableMouseCapture).map(|_| ()),
        stdout.execute(LeaveAlternateScreen).map(|_| ()),
        disable_raw_mode(),
    ];
    first_error(steps)
}

/// `Ok` if every step succeeded, otherwise the earliest failure.
fn first_error(steps: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    steps.into_iter().collect()
}

fn run(options: &RunOptions, renderer: TerminalRenderer<CrosstermBackend<Stdout>>) -> Result<()> {
    let game = FlappyGame::new(&options.config)?;
    let mut host: Host = GameLoop::new(game, renderer, options.config.tick_interval());
    host.start()?;

    loop {
        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        match classify(&event::read()?) {
            HostInput::PrimaryAction => {
                if host.is_running() {
                    let outcome = host.on_primary_action();
                    log::debug!("Primary action: {:?}", outcome);
                }
            }
            HostInput::TogglePause => {
                if host.is_running() {
                    host.stop()?;
                    log::info!("Paused while {}", host.handle().snapshot().phase.name());
                } else {
                    host.start()?;
                    log::info!("Resumed");
                }
            }
            HostInput::Quit => break,
            HostInput::Ignored => {}
        }
    }

    host.stop()?;
    Ok(())
}
