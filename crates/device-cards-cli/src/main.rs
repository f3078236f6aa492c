use anyhow::{Context, Result, bail};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use device_cards_config::Config;
use device_cards_engine::{CardStyle, GroupShape, RowFrame, generate_deck};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::{
    env,
    fs::OpenOptions,
    io::{Stdout, stdout},
    path::PathBuf,
};

mod app;

use app::{Action, App, row_of};

/// Set to a file path to capture logs while the terminal UI owns the screen.
const LOG_FILE_ENV: &str = "DEVICE_CARDS_LOG";

// Stderr is shared with the alternate screen, so logging stays off unless
// RUST_LOG asks for it or a log file is given.
fn init_logging() -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Off).parse_default_env();

    if let Ok(path) = env::var(LOG_FILE_ENV) {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {path}"))?;
        builder
            .filter_level(log::LevelFilter::Debug)
            .parse_default_env()
            .target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn load_config() -> Result<Config> {
    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => Ok(Config::load()?.unwrap_or_default()),
        2 => {
            let config_path = PathBuf::from(&args[1]);
            match Config::load_from_path(&config_path)? {
                Some(config) => Ok(config),
                None => bail!("Config file not found: {}", config_path.display()),
            }
        }
        _ => bail!("Usage: {} [config-path]", args[0]),
    }
}

fn main() -> Result<()> {
    init_logging()?;

    let config = load_config()?;
    log::info!("Using config: {config:?}");

    let cards = match config.seed {
        Some(seed) => generate_deck(&config.deck, &mut StdRng::seed_from_u64(seed))?,
        None => generate_deck(&config.deck, &mut rand::rng())?,
    };
    let mut app = App::new(cards, config.deck, config.layout);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let action = match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Left | KeyCode::Char('h') => Action::Left,
                KeyCode::Right | KeyCode::Char('l') => Action::Right,
                KeyCode::Up | KeyCode::Char('k') => Action::Up,
                KeyCode::Down | KeyCode::Char('j') => Action::Down,
                KeyCode::Char(' ') => Action::Grab,
                KeyCode::Enter => Action::Drop,
                KeyCode::Esc => Action::Cancel,
                KeyCode::Char('r') => Action::Reshuffle,
                _ => continue,
            };
            app.handle(action);
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)].as_ref())
        .split(f.area());

    let title = if app.board.is_dragging() {
        "Cards (dragging)"
    } else {
        "Cards"
    };
    let grid = Block::default().borders(Borders::ALL).title(title);
    let inner = grid.inner(chunks[0]);
    f.render_widget(grid, chunks[0]);

    if app.board.is_empty() {
        f.render_widget(Paragraph::new("No cards"), inner);
    } else {
        render_grid(f, app, inner);
    }

    let help = Line::from(vec![
        Span::raw("q: Quit | ←/→: Move | ↑/↓: Row | "),
        Span::raw("Space: Grab/Drop | Enter: Drop | Esc: Cancel | r: Reshuffle"),
    ]);
    let status = Line::from(Span::styled(
        app.status.clone(),
        Style::default().fg(Color::Cyan),
    ));
    f.render_widget(Paragraph::new(vec![help, status]), chunks[1]);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let metrics = app.terminal_metrics();
    let rows = app.board.layout_frames(&metrics, f64::from(area.width));
    let groups = app.board.layout();

    // Scroll so the row holding the cursor is fully visible.
    let cursor_row = row_of(&groups, app.cursor).unwrap_or(0);
    let offset = scroll_offset(&rows, cursor_row, f64::from(area.height));

    let working = app.board.working();
    let dragged = app.board.dragged_card();

    for row in &rows {
        let top = (row.y - offset).round();
        let height = row.height.round().max(3.0);
        if top < 0.0 || top + height > f64::from(area.height) {
            continue;
        }

        for cell in &row.cells {
            let card = &working[cell.index];
            let rect = Rect::new(
                area.x + cell.x.round() as u16,
                area.y + top as u16,
                cell.width.round().max(1.0) as u16,
                height as u16,
            )
            .intersection(area);

            let mut border = Style::default();
            if row.shape == GroupShape::Emphasized {
                border = border.add_modifier(Modifier::BOLD);
            }
            if cell.index == app.cursor {
                border = border.fg(Color::Yellow);
            }
            if Some(card.id()) == dragged {
                border = border.fg(Color::Black).bg(Color::Yellow);
            }

            let border_type = match card.style() {
                CardStyle::Complex => BorderType::Double,
                CardStyle::Basic => BorderType::Rounded,
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border)
                .title(card.value().to_string());
            f.render_widget(Paragraph::new(card.style().label()).block(block), rect);
        }
    }
}

fn scroll_offset(rows: &[RowFrame], cursor_row: usize, viewport: f64) -> f64 {
    let Some(row) = rows.get(cursor_row) else {
        return 0.0;
    };
    let bottom = row.y + row.height.max(3.0);
    if bottom > viewport {
        (bottom - viewport).ceil()
    } else {
        0.0
    }
}
