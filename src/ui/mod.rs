//! User interface rendering.

pub mod formatters;

use crate::app::App;
use crate::display::ui::draw_weather;
use crate::display::view::DisplayView;
use crate::input::ui::draw_location_input;
use crate::shared::{draw_keymap, draw_status, ThemeColors};
use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the UI at the current instant.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    draw_at(f, app, Utc::now());
}

/// Draw the UI as of `now`.
pub fn draw_at(f: &mut Frame<'_>, app: &App, now: DateTime<Utc>) {
    let colors = ThemeColors::from_theme(&app.theme);
    let error = app.controller.error();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(if error.is_some() { 1 } else { 0 }),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_location_input(f, &app.input, app.controller.query(), chunks[0], &colors);

    if let Some(message) = error {
        draw_error(f, message, chunks[1], &colors);
    }

    let view = DisplayView::build(&app.controller, now);
    draw_weather(
        f,
        view.as_ref(),
        app.controller.is_fetching(),
        app.scroll,
        chunks[2],
        &colors,
    );

    draw_status(f, chunks[3], &app.status, app.controller.is_fetching(), &colors);
    draw_keymap(f, chunks[4], app.input.is_active(), &colors);
}

fn draw_error(f: &mut Frame<'_>, message: &str, area: Rect, colors: &ThemeColors) {
    let banner = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default()
            .fg(colors.error)
            .bg(colors.bg)
            .add_modifier(Modifier::BOLD),
    )));
    f.render_widget(banner, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::schema::fixtures;
    use crate::dispatch::Message;
    use crate::display::{Effect, ForecastDay};
    use crate::error::NimbusError;
    use chrono::TimeZone;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 19, 30, 0).single().expect("now")
    }

    fn render(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(100, 60)).expect("terminal");
        terminal.draw(|f| draw_at(f, app, now())).expect("draw");
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn loaded(country: &str) -> App {
        let mut app = App::default();
        let effects = app.start(Some("Springfield, Illinois".into()));
        let generation = effects
            .iter()
            .find_map(|e| match e {
                Effect::FetchWeather(r) => Some(r.generation),
                _ => None,
            })
            .expect("fetch");
        app.handle_message(Message::Weather {
            generation,
            result: Ok(serde_json::from_value(fixtures::forecast_response(country)).expect("fixture")),
        });
        app
    }

    #[test]
    fn rendering_twice_is_identical() {
        let mut app = loaded("USA");
        app.toggle_hourly(ForecastDay::Today);
        assert_eq!(render(&app), render(&app));
    }

    #[test]
    fn country_line_only_outside_us() {
        let us = text(&render(&loaded("USA")));
        assert!(us.contains("Springfield, Illinois"));
        assert!(!us.contains("USA"));

        let ca = text(&render(&loaded("Canada")));
        assert!(ca.contains("Canada"));
    }

    #[test]
    fn error_banner_only_when_set() {
        let app = loaded("USA");
        assert!(!text(&render(&app)).contains("No matching location"));

        let mut app = App::default();
        let effects = app.start(Some("Atlantis".into()));
        let generation = effects
            .iter()
            .find_map(|e| match e {
                Effect::FetchWeather(r) => Some(r.generation),
                _ => None,
            })
            .expect("fetch");
        app.handle_message(Message::Weather {
            generation,
            result: Err(NimbusError::weather_fetch(Some(400), "No matching location found.")),
        });
        let screen = text(&render(&app));
        assert!(screen.contains("No matching location found."));
        assert!(screen.contains("No weather data"));
    }

    #[test]
    fn empty_query_shows_prompt() {
        let app = App::default();
        let screen = text(&render(&app));
        assert!(screen.contains("Enter a city and state or a zip code"));
        assert!(screen.contains("No location yet"));
    }
}
