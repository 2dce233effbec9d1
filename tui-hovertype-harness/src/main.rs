use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::EnvFilter;

use tui_hovertype::animator::{AnimatorConfig, GridAnimator, PointerKind};
use tui_hovertype::field::FieldConfig;
use tui_hovertype::layout::ContainerSize;
use tui_hovertype::measure::{self, StabilizeConfig, TextProbe};
use tui_hovertype::metrics::CellMetrics;
use tui_hovertype::ramp::WeightRamp;
use tui_hovertype::throttle::Throttle;
use tui_hovertype::widget::HoverGrid;

const RESIZE_INTERVAL: Duration = Duration::from_millis(10);
const POLL_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Parser)]
#[command(name = "tui-hovertype")]
#[command(about = "Pointer-proximity text grid effect. Move the mouse; q quits.")]
struct Cli {
    /// Text repeated across the grid
    #[arg(long, default_value = "HELLOWORLD")]
    text: String,

    /// Influence radius around the pointer, in pixel units
    #[arg(long, default_value_t = 400.0)]
    radius: f32,

    /// Nominal pixel width of one terminal cell
    #[arg(long, default_value_t = 10.0)]
    cell_width: f32,

    /// Nominal pixel height of one terminal cell
    #[arg(long, default_value_t = 20.0)]
    cell_height: f32,

    /// Append debug logs to this file (the TUI owns stdout)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e:#}"); // pretty anyhow chain
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_ref())?;

    if cli.text.chars().all(|ch| ch == ' ') {
        bail!("--text needs at least one visible character");
    }

    install_panic_hook();
    enable_raw_mode().context("failed to enable raw mode")?;
    crossterm::execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
        .context("failed to enter alternate screen")?;

    let result = event_loop(&cli);

    restore_terminal();
    result
}

fn restore_terminal() {
    let _ = crossterm::execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Restore the terminal before the default panic output, so the message is
/// readable and the host shell is left intact.
fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        original(info);
    }));
}

fn init_tracing(log_file: Option<&PathBuf>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn event_loop(cli: &Cli) -> Result<()> {
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let metrics = CellMetrics {
        cell_width: cli.cell_width,
        cell_height: cli.cell_height,
    };

    let size = terminal.size().context("failed to query terminal size")?;

    if size.width == 0 || size.height == 0 {
        bail!("terminal reports a zero-sized area; nothing to tile");
    }

    // Measure once and latch the result: cell metrics are fixed for the
    // process lifetime, so resizes reuse the stabilized tile.
    let mut probe = TextProbe::new(&cli.text, &metrics);
    let measured = measure::stabilize(&mut probe, StabilizeConfig::default(), std::thread::sleep);
    tracing::info!(
        attempts = measured.attempts,
        converged = measured.converged,
        tile_width = measured.size.width,
        tile_height = measured.size.height,
        "tile measurement settled"
    );

    let config = AnimatorConfig {
        field: FieldConfig {
            radius: cli.radius,
            ..FieldConfig::default()
        },
        ..AnimatorConfig::default()
    };
    let mut animator = GridAnimator::new(cli.text.clone(), config);
    let ramp = WeightRamp::default();

    animator.relayout(container_px(size.width, size.height, metrics), measured.size, &metrics);
    log_layout(&animator);

    let mut resize_gate = Throttle::new(RESIZE_INTERVAL);
    let mut dirty = true;

    loop {
        if dirty {
            terminal.draw(|f| {
                f.render_widget(
                    HoverGrid {
                        layout: animator.layout(),
                        ramp: &ramp,
                        metrics,
                    },
                    f.area(),
                );
            })?;

            dirty = false;
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                _ => {}
            },

            Event::Mouse(mouse) => {
                let (x, y) = metrics.pointer_px(mouse.column, mouse.row);

                let changed = match mouse.kind {
                    MouseEventKind::Moved => {
                        animator.pointer_moved(PointerKind::Hover, x, y, Instant::now())
                    }
                    MouseEventKind::Drag(MouseButton::Left) => {
                        animator.pointer_moved(PointerKind::Drag, x, y, Instant::now())
                    }
                    MouseEventKind::Down(MouseButton::Left) => animator.pointer_pressed(x, y),
                    MouseEventKind::Up(MouseButton::Left) => animator.pointer_released(),
                    _ => 0,
                };

                if changed > 0 {
                    dirty = true;
                }
            }

            Event::Resize(width, height) => {
                if resize_gate.admit(Instant::now()) {
                    animator.relayout(container_px(width, height, metrics), measured.size, &metrics);
                    log_layout(&animator);
                    dirty = true;
                }
            }

            _ => {}
        }
    }

    Ok(())
}

fn container_px(width: u16, height: u16, metrics: CellMetrics) -> ContainerSize {
    ContainerSize {
        width: width as f32 * metrics.cell_width,
        height: height as f32 * metrics.cell_height,
    }
}

fn log_layout(animator: &GridAnimator) {
    let layout = animator.layout();
    tracing::debug!(
        rows = layout.rows,
        columns = layout.columns,
        letters = layout.letters.len(),
        "grid laid out"
    );
}
