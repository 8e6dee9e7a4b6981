//! Nimbus - A terminal weather display.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use nimbus::api::{GeolocationClient, WeatherClient};
use nimbus::app::App;
use nimbus::config::Config;
use nimbus::dispatch::{Dispatcher, Message};
use nimbus::display::ForecastDay;
use nimbus::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "nimbus", version)]
#[command(about = "A terminal weather display", long_about = None)]
struct Args {
    /// Location to look up instead of geolocating (city and state, or zip code)
    #[arg(long)]
    location: Option<String>,

    /// Weather provider API key
    #[arg(long, env = "WEATHER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Weather provider base URL
    #[arg(long, env = "WEATHER_API_URL", default_value = "https://api.weatherapi.com/v1")]
    weather_url: String,

    /// IP geolocation lookup URL
    #[arg(long, env = "GEOLOCATION_URL", default_value = "http://ip-api.com/json")]
    geo_url: String,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> Config {
        let mut config = Config::with_base_urls(&self.weather_url, &self.geo_url);
        config.weather.api_key = self.api_key.clone();
        config.set_timeout(self.timeout);
        config
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Nimbus");
    }

    let config = args.config();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let geolocation = GeolocationClient::new(config.geolocation.clone())?;
    let weather = WeatherClient::new(config.weather.clone())?;
    let (dispatcher, rx) = Dispatcher::new(runtime.handle().clone(), geolocation, weather);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(config.weather.days);
    let res = run_app(&mut terminal, app, dispatcher, rx, args.location);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Nimbus exited");
    }

    runtime.shutdown_background();
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    mut dispatcher: Dispatcher,
    mut rx: UnboundedReceiver<Message>,
    location: Option<String>,
) -> Result<()> {
    let effects = app.start(location);
    dispatcher.dispatch_all(effects);

    loop {
        while let Ok(message) = rx.try_recv() {
            if let Message::Weather { generation, .. } = &message {
                dispatcher.complete(*generation);
            }
            let effects = app.handle_message(message);
            dispatcher.dispatch_all(effects);
        }

        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // Location field has focus - handle separately
        if app.input.is_active() {
            match key.code {
                KeyCode::Enter => {
                    let effects = app.commit_edit();
                    dispatcher.dispatch_all(effects);
                },
                KeyCode::Esc => app.cancel_edit(),
                KeyCode::Backspace => app.input.backspace(),
                KeyCode::Left | KeyCode::End => app.input.deselect(),
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.input.input(c)
                },
                _ => {},
            }
            continue;
        }

        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::NONE, KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),

            // Location
            (KeyModifiers::NONE, KeyCode::Char('/'))
            | (KeyModifiers::NONE, KeyCode::Char('e')) => app.begin_edit(),
            (KeyModifiers::NONE, KeyCode::Enter) => {
                let effects = app.refresh();
                dispatcher.dispatch_all(effects);
            },
            (KeyModifiers::NONE, KeyCode::Char('r')) => {
                let effects = app.relocate();
                dispatcher.dispatch_all(effects);
            },

            // Hourly panels
            (KeyModifiers::NONE, KeyCode::Char('1')) => app.toggle_hourly(ForecastDay::Today),
            (KeyModifiers::NONE, KeyCode::Char('2')) => app.toggle_hourly(ForecastDay::Tomorrow),
            (KeyModifiers::NONE, KeyCode::Char('3')) => app.toggle_hourly(ForecastDay::DayAfter),

            // Scrolling
            (KeyModifiers::NONE, KeyCode::Down)
            | (KeyModifiers::NONE, KeyCode::Char('j')) => app.scroll_down(1),
            (KeyModifiers::NONE, KeyCode::Up)
            | (KeyModifiers::NONE, KeyCode::Char('k')) => app.scroll_up(1),
            (KeyModifiers::CONTROL, KeyCode::Char('d'))
            | (KeyModifiers::NONE, KeyCode::PageDown) => app.scroll_down(10),
            (KeyModifiers::CONTROL, KeyCode::Char('u'))
            | (KeyModifiers::NONE, KeyCode::PageUp) => app.scroll_up(10),
            (KeyModifiers::NONE, KeyCode::Char('g')) => app.scroll = 0,

            // Features
            (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),
            (KeyModifiers::NONE, KeyCode::Esc) => app.dismiss_error(),

            _ => {},
        }
    }
}
