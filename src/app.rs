//! Application state and logic.

use crate::config::FORECAST_DAYS;
use crate::dispatch::Message;
use crate::display::query::{classify, QueryKind};
use crate::display::{DisplayController, Effect, ForecastDay};
use crate::input::LocationInput;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Weather view state.
    pub controller: DisplayController,
    /// Location field.
    pub input: LocationInput,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Weather panel scroll offset.
    pub scroll: u16,
}

impl App {
    /// Create a new application instance.
    pub fn new(days: u8) -> Self {
        Self {
            controller: DisplayController::new(days),
            input: LocationInput::new(),
            status: "Ready".to_string(),
            theme: Theme::GruvboxDark,
            scroll: 0,
        }
    }

    /// Mount the display: look up `location` if given, otherwise geolocate.
    pub fn start(&mut self, location: Option<String>) -> Vec<Effect> {
        let effects = match location {
            Some(text) => self.controller.mount_with_query(text),
            None => self.controller.mount(),
        };
        self.note_effects(&effects);
        effects
    }

    /// Focus the location field.
    pub fn begin_edit(&mut self) {
        self.input.focus(self.controller.query());
        self.status = "Editing location".to_string();
    }

    /// Apply the edited location, or refresh when it is unchanged.
    pub fn commit_edit(&mut self) -> Vec<Effect> {
        let text = self.input.commit();
        if text == self.controller.query() {
            return self.refresh();
        }
        let was_fetching = self.controller.is_fetching();
        let effects = self.controller.edit_query(text);
        self.after_trigger(&effects, was_fetching);
        effects
    }

    /// Leave the location field without applying the edit.
    pub fn cancel_edit(&mut self) {
        self.input.cancel();
        self.status = "Edit canceled".to_string();
    }

    /// Look up the current location again.
    pub fn refresh(&mut self) -> Vec<Effect> {
        let was_fetching = self.controller.is_fetching();
        let effects = self.controller.submit();
        self.after_trigger(&effects, was_fetching);
        effects
    }

    /// Resolve the location from the network again.
    pub fn relocate(&mut self) -> Vec<Effect> {
        let effects = self.controller.relocate();
        self.note_effects(&effects);
        effects
    }

    /// Flip a day's hourly panel.
    pub fn toggle_hourly(&mut self, day: ForecastDay) {
        self.controller.toggle_hourly(day);
        let shown = self.controller.hourly().is_expanded(day);
        self.status = format!(
            "{}: hourly {}",
            day.title(),
            if shown { "shown" } else { "hidden" }
        );
    }

    /// Apply a finished lookup.
    pub fn handle_message(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::Location(result) => {
                self.status = match &result {
                    Ok(location) if !location.city_name.is_empty() => {
                        format!("Located {}", location.city_name)
                    },
                    Ok(_) => "Location resolved without a city".to_string(),
                    Err(_) => "Location unavailable, enter one with /".to_string(),
                };
                let effects = self.controller.on_location(result);
                self.note_effects(&effects);
                effects
            },
            Message::Weather { generation, result } => {
                let canceled = matches!(&result, Err(e) if e.is_canceled());
                self.controller.on_weather(generation, result);
                if canceled {
                    return Vec::new();
                }
                if let Some(error) = self.controller.error() {
                    self.status = format!("Error: {}", error);
                } else if let Some(record) = self.controller.record() {
                    self.status = format!("Weather for {}", record.location.name);
                    self.scroll = 0;
                }
                Vec::new()
            },
        }
    }

    /// Dismiss the error banner.
    pub fn dismiss_error(&mut self) {
        self.controller.clear_error();
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Scroll the weather panel down.
    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    /// Scroll the weather panel up.
    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    fn after_trigger(&mut self, effects: &[Effect], was_fetching: bool) {
        let kind = classify(self.controller.query());
        if !kind.triggers_fetch() {
            self.status = match kind {
                QueryKind::InvalidNumeric => "Invalid location",
                _ => "Location cleared",
            }
            .to_string();
        } else if effects.is_empty() && was_fetching {
            self.status = "A lookup is already in progress".to_string();
        } else {
            self.note_effects(effects);
        }
    }

    fn note_effects(&mut self, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::FetchLocation => self.status = "Locating...".to_string(),
                Effect::FetchWeather(request) => {
                    self.status = format!("Fetching weather for {}...", request.query);
                },
                Effect::CancelWeather { .. } => self.status = "Lookup canceled".to_string(),
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(FORECAST_DAYS)
    }
}
