//! Display controller - all weather view state and fetch decisions.
//!
//! The controller never performs I/O. Every operation returns the
//! [`Effect`]s the caller must carry out, and results come back through
//! [`DisplayController::on_location`] and [`DisplayController::on_weather`].

pub mod query;
pub mod time;
pub mod ui;
pub mod view;

use tracing::{debug, error, info, warn};

use crate::api::{ForecastMode, LocationData, WeatherRecord};
use crate::config::FORECAST_DAYS;
use crate::error::{NimbusError, Result};
use query::{classify, QueryKind};

/// One of the three displayed forecast days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastDay {
    /// Forecast index 0, shown with current conditions.
    Today,
    /// Forecast index 1.
    Tomorrow,
    /// Forecast index 2.
    DayAfter,
}

impl ForecastDay {
    /// All days in display order.
    pub const ALL: [ForecastDay; 3] = [
        ForecastDay::Today,
        ForecastDay::Tomorrow,
        ForecastDay::DayAfter,
    ];

    /// Index into `forecast.forecastday`.
    pub fn index(self) -> usize {
        match self {
            ForecastDay::Today => 0,
            ForecastDay::Tomorrow => 1,
            ForecastDay::DayAfter => 2,
        }
    }

    /// Panel heading.
    pub fn title(self) -> &'static str {
        match self {
            ForecastDay::Today => "Current Conditions",
            ForecastDay::Tomorrow => "Tomorrow's Conditions",
            ForecastDay::DayAfter => "The Next Day's Conditions",
        }
    }
}

/// Weather fetch lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    /// Nothing requested yet, or the last request was superseded.
    Idle,
    /// A request tagged with this generation is outstanding.
    InFlight(u64),
    /// The last request finished.
    Settled,
}

/// Where the current query text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    /// Seeded from IP geolocation.
    Geolocated,
    /// Typed or passed by the user.
    ManuallyEdited,
}

/// A weather lookup the caller must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRequest {
    /// Generation the response must be tagged with.
    pub generation: u64,
    /// Query sent as `q`.
    pub query: String,
    /// Forecast days.
    pub days: u8,
    /// Endpoint to call.
    pub mode: ForecastMode,
}

/// Side effects requested by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Resolve the caller's location.
    FetchLocation,
    /// Look up weather.
    FetchWeather(WeatherRequest),
    /// Abandon the request of this generation.
    CancelWeather {
        /// Generation to cancel.
        generation: u64,
    },
}

/// Per-day "show hourly" flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HourlyPanels {
    expanded: [bool; 3],
}

impl HourlyPanels {
    /// Flip the panel for `day`.
    pub fn toggle(&mut self, day: ForecastDay) {
        let slot = &mut self.expanded[day.index()];
        *slot = !*slot;
    }

    /// Whether the panel for `day` is open.
    pub fn is_expanded(&self, day: ForecastDay) -> bool {
        self.expanded[day.index()]
    }
}

/// Weather display state.
#[derive(Debug)]
pub struct DisplayController {
    query: String,
    source: InputSource,
    location: Option<LocationData>,
    location_initialized: bool,
    record: Option<WeatherRecord>,
    fetch: FetchState,
    generation: u64,
    hourly: HourlyPanels,
    error: Option<String>,
    mounted: bool,
    days: u8,
    mode: ForecastMode,
}

impl DisplayController {
    /// Create a controller requesting `days` forecast days.
    pub fn new(days: u8) -> Self {
        Self {
            query: String::new(),
            source: InputSource::ManuallyEdited,
            location: None,
            location_initialized: false,
            record: None,
            fetch: FetchState::Idle,
            generation: 0,
            hourly: HourlyPanels::default(),
            error: None,
            mounted: false,
            days,
            mode: ForecastMode::Forecast,
        }
    }

    /// First activation; asks for geolocation exactly once.
    pub fn mount(&mut self) -> Vec<Effect> {
        if self.mounted {
            return Vec::new();
        }
        self.mounted = true;
        info!("Display mounted, resolving location");
        vec![Effect::FetchLocation]
    }

    /// Mark as mounted without geolocating, e.g. when a location was given up front.
    pub fn mount_with_query(&mut self, query: impl Into<String>) -> Vec<Effect> {
        self.mounted = true;
        self.set_query(query, InputSource::ManuallyEdited)
    }

    /// Drop the known location and query, then resolve the location again.
    ///
    /// Unlike [`DisplayController::clear_location`] this also discards manual
    /// text, so the next geolocation result seeds the field.
    pub fn relocate(&mut self) -> Vec<Effect> {
        self.location = None;
        self.location_initialized = false;
        let mut effects = self.set_query(String::new(), InputSource::Geolocated);
        self.source = InputSource::Geolocated;
        effects.push(Effect::FetchLocation);
        effects
    }

    /// A user edit of the location field.
    pub fn edit_query(&mut self, text: impl Into<String>) -> Vec<Effect> {
        self.set_query(text, InputSource::ManuallyEdited)
    }

    /// Replace the query. A value equal to the current one is not a change.
    pub fn set_query(&mut self, text: impl Into<String>, source: InputSource) -> Vec<Effect> {
        let text = text.into();
        if text == self.query {
            return Vec::new();
        }
        self.query = text;
        self.source = source;
        self.evaluate()
    }

    /// Explicit submit: re-evaluate the current query.
    pub fn submit(&mut self) -> Vec<Effect> {
        self.evaluate()
    }

    fn evaluate(&mut self) -> Vec<Effect> {
        match classify(&self.query) {
            QueryKind::Empty => {
                self.record = None;
                self.error = None;
                self.supersede()
            },
            QueryKind::InvalidNumeric => {
                warn!(query = %self.query, "Invalid: input number is longer than 5 characters");
                self.error = Some(NimbusError::invalid_query(self.query.as_str()).to_string());
                self.record = None;
                self.supersede()
            },
            QueryKind::PostalCode | QueryKind::PlaceName => self.begin_fetch(),
        }
    }

    fn begin_fetch(&mut self) -> Vec<Effect> {
        if let FetchState::InFlight(generation) = self.fetch {
            debug!(generation, query = %self.query, "Fetch in flight, dropping trigger");
            return Vec::new();
        }

        self.generation += 1;
        self.fetch = FetchState::InFlight(self.generation);
        self.error = None;
        debug!(generation = self.generation, query = %self.query, "Requesting weather");

        vec![Effect::FetchWeather(WeatherRequest {
            generation: self.generation,
            query: self.query.clone(),
            days: self.days,
            mode: self.mode,
        })]
    }

    fn supersede(&mut self) -> Vec<Effect> {
        match self.fetch {
            FetchState::InFlight(generation) => {
                debug!(generation, "Superseding in-flight fetch");
                self.fetch = FetchState::Idle;
                vec![Effect::CancelWeather { generation }]
            },
            _ => Vec::new(),
        }
    }

    /// Outcome of a geolocation lookup.
    pub fn on_location(&mut self, result: Result<LocationData>) -> Vec<Effect> {
        match result {
            Ok(location) => {
                let seed = location.query_text();
                self.location = Some(location);

                let field_free = self.query.is_empty() || self.source == InputSource::Geolocated;
                match seed {
                    Some(text) if !self.location_initialized && field_free => {
                        info!(query = %text, "Seeding location from geolocation");
                        self.location_initialized = true;
                        self.set_query(text, InputSource::Geolocated)
                    },
                    _ => Vec::new(),
                }
            },
            Err(e) => {
                warn!("Failed to fetch geolocation data: {}", e);
                self.clear_location()
            },
        }
    }

    /// Forget the known location.
    ///
    /// Only a geolocated query is reset; manual text is kept.
    pub fn clear_location(&mut self) -> Vec<Effect> {
        self.location = None;
        self.location_initialized = false;
        if self.source == InputSource::Geolocated {
            self.set_query(String::new(), InputSource::Geolocated)
        } else {
            Vec::new()
        }
    }

    /// Outcome of the weather request tagged `generation`.
    pub fn on_weather(&mut self, generation: u64, result: Result<WeatherRecord>) {
        if self.fetch != FetchState::InFlight(generation) {
            debug!(generation, current = ?self.fetch, "Discarding stale weather response");
            return;
        }
        self.fetch = FetchState::Settled;

        match result {
            Ok(record) => {
                info!(location = %record.location.name, "Weather updated");
                self.record = Some(record);
                self.error = None;
            },
            Err(e) if e.is_canceled() => {
                debug!(generation, "Weather request canceled");
            },
            Err(e) => {
                error!("Error fetching weather data: {}", e);
                self.error = Some(e.to_string());
                self.record = None;
            },
        }
    }

    /// Flip the hourly panel for `day`.
    pub fn toggle_hourly(&mut self, day: ForecastDay) {
        self.hourly.toggle(day);
    }

    /// Dismiss the error banner.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Where the query came from.
    pub fn source(&self) -> InputSource {
        self.source
    }

    /// Last resolved location.
    pub fn location(&self) -> Option<&LocationData> {
        self.location.as_ref()
    }

    /// Whether the query was seeded from geolocation.
    pub fn is_location_initialized(&self) -> bool {
        self.location_initialized
    }

    /// Current weather record.
    pub fn record(&self) -> Option<&WeatherRecord> {
        self.record.as_ref()
    }

    /// Fetch lifecycle state.
    pub fn fetch_state(&self) -> FetchState {
        self.fetch
    }

    /// Whether a weather request is outstanding.
    pub fn is_fetching(&self) -> bool {
        matches!(self.fetch, FetchState::InFlight(_))
    }

    /// Hourly panel flags.
    pub fn hourly(&self) -> &HourlyPanels {
        &self.hourly
    }

    /// User-visible error.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Default for DisplayController {
    fn default() -> Self {
        Self::new(FORECAST_DAYS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::schema::fixtures;

    fn record(country: &str) -> WeatherRecord {
        serde_json::from_value(fixtures::forecast_response(country)).expect("fixture")
    }

    fn springfield() -> LocationData {
        LocationData {
            country: "United States".into(),
            country_code: "US".into(),
            region_name: "Illinois".into(),
            city_name: "Springfield".into(),
            lat: 39.78,
            lon: -89.65,
            zip: "62701".into(),
            timezone: "America/Chicago".into(),
        }
    }

    fn fetch_requests(effects: &[Effect]) -> Vec<&WeatherRequest> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::FetchWeather(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn postal_code_triggers_fetch_with_query() {
        let mut c = DisplayController::default();
        let effects = c.edit_query("62701");

        let requests = fetch_requests(&effects);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].query, "62701");
        assert_eq!(requests[0].days, 3);
        assert_eq!(requests[0].mode, ForecastMode::Forecast);
        assert_eq!(c.fetch_state(), FetchState::InFlight(requests[0].generation));
    }

    #[test]
    fn long_numeric_input_sets_validation_error_without_fetch() {
        let mut c = DisplayController::default();
        let effects = c.edit_query("627012");

        assert!(effects.is_empty());
        assert!(c.error().is_some_and(|e| e.contains("627012")));
        assert!(c.record().is_none());
        assert_eq!(c.fetch_state(), FetchState::Idle);
    }

    #[test]
    fn place_name_triggers_fetch() {
        let mut c = DisplayController::default();
        let effects = c.edit_query("Paris");
        assert_eq!(fetch_requests(&effects).len(), 1);
    }

    #[test]
    fn empty_query_clears_display_without_fetch() {
        let mut c = DisplayController::default();
        let first = fetch_requests(&c.edit_query("Paris"))[0].generation;
        c.on_weather(first, Ok(record("France")));
        assert!(c.record().is_some());

        let effects = c.edit_query("");
        assert!(effects.is_empty());
        assert!(c.record().is_none());
    }

    #[test]
    fn second_trigger_while_in_flight_is_dropped() {
        let mut c = DisplayController::default();
        assert_eq!(fetch_requests(&c.edit_query("Paris")).len(), 1);

        assert!(c.submit().is_empty());
        assert!(c.edit_query("Berlin").is_empty());
        assert_eq!(c.query(), "Berlin");
    }

    #[test]
    fn submit_after_settling_refetches() {
        let mut c = DisplayController::default();
        let generation = fetch_requests(&c.edit_query("Paris"))[0].generation;
        c.on_weather(generation, Ok(record("France")));

        let effects = c.submit();
        let requests = fetch_requests(&effects);
        assert_eq!(requests.len(), 1);
        assert!(requests[0].generation > generation);
    }

    #[test]
    fn unchanged_query_is_not_a_change() {
        let mut c = DisplayController::default();
        let generation = fetch_requests(&c.edit_query("Paris"))[0].generation;
        c.on_weather(generation, Ok(record("France")));

        assert!(c.edit_query("Paris").is_empty());
    }

    #[test]
    fn fetch_failure_sets_error_and_clears_record() {
        let mut c = DisplayController::default();
        let generation = fetch_requests(&c.edit_query("Paris"))[0].generation;
        c.on_weather(generation, Ok(record("France")));

        let generation = fetch_requests(&c.submit())[0].generation;
        c.on_weather(
            generation,
            Err(NimbusError::weather_fetch(Some(400), "No matching location found.")),
        );

        assert_eq!(c.error(), Some("No matching location found."));
        assert!(c.record().is_none());
        assert_eq!(c.fetch_state(), FetchState::Settled);
    }

    #[test]
    fn successful_fetch_clears_previous_error() {
        let mut c = DisplayController::default();
        let generation = fetch_requests(&c.edit_query("Nowhere")).first().map(|r| r.generation);
        c.on_weather(
            generation.expect("request"),
            Err(NimbusError::weather_fetch(Some(400), "No matching location found.")),
        );

        let generation = fetch_requests(&c.edit_query("Paris"))[0].generation;
        assert!(c.error().is_none());
        c.on_weather(generation, Ok(record("France")));
        assert!(c.error().is_none());
        assert!(c.record().is_some());
    }

    #[test]
    fn geolocation_seeds_query_and_fetches_once() {
        let mut c = DisplayController::default();
        assert_eq!(c.mount(), vec![Effect::FetchLocation]);

        let effects = c.on_location(Ok(springfield()));
        let requests = fetch_requests(&effects);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].query, "Springfield, Illinois");
        assert_eq!(c.query(), "Springfield, Illinois");
        assert_eq!(c.source(), InputSource::Geolocated);
        assert!(c.is_location_initialized());

        // A repeated lookup does not re-seed an initialized field.
        assert!(c.on_location(Ok(springfield())).is_empty());
    }

    #[test]
    fn mount_geolocates_once() {
        let mut c = DisplayController::default();
        assert_eq!(c.mount().len(), 1);
        assert!(c.mount().is_empty());
    }

    #[test]
    fn mount_with_query_skips_geolocation() {
        let mut c = DisplayController::default();
        let effects = c.mount_with_query("Oslo");
        assert_eq!(fetch_requests(&effects)[0].query, "Oslo");
        assert!(c.mount().is_empty());
        assert_eq!(c.source(), InputSource::ManuallyEdited);
    }

    #[test]
    fn geolocation_failure_is_swallowed() {
        let mut c = DisplayController::default();
        c.mount();
        let effects = c.on_location(Err(NimbusError::geolocation("connection refused")));

        assert!(effects.is_empty());
        assert!(c.error().is_none());
        assert_eq!(c.query(), "");
        assert!(c.location().is_none());
    }

    #[test]
    fn geolocation_does_not_overwrite_manual_text() {
        let mut c = DisplayController::default();
        c.mount();
        c.edit_query("Paris");

        let effects = c.on_location(Ok(springfield()));
        assert!(effects.is_empty());
        assert_eq!(c.query(), "Paris");
        assert!(c.location().is_some());
    }

    #[test]
    fn losing_location_keeps_manual_edits() {
        let mut c = DisplayController::default();
        c.mount();
        let generation = fetch_requests(&c.on_location(Ok(springfield())))[0].generation;
        c.on_weather(generation, Ok(record("USA")));
        c.edit_query("Paris");

        c.clear_location();
        assert_eq!(c.query(), "Paris");
        assert!(!c.is_location_initialized());
    }

    #[test]
    fn losing_location_resets_geolocated_query() {
        let mut c = DisplayController::default();
        c.mount();
        let generation = fetch_requests(&c.on_location(Ok(springfield())))[0].generation;
        c.on_weather(generation, Ok(record("USA")));

        let effects = c.clear_location();
        assert!(effects.is_empty());
        assert_eq!(c.query(), "");
        assert!(c.record().is_none());
        assert!(!c.is_location_initialized());

        // A later success can seed the field again.
        let effects = c.on_location(Ok(springfield()));
        assert_eq!(fetch_requests(&effects).len(), 1);
    }

    #[test]
    fn relocate_cancels_geolocated_fetch_in_flight() {
        let mut c = DisplayController::default();
        c.mount();
        let generation = fetch_requests(&c.on_location(Ok(springfield())))[0].generation;

        let effects = c.relocate();
        assert_eq!(
            effects,
            vec![Effect::CancelWeather { generation }, Effect::FetchLocation]
        );
        assert_eq!(c.fetch_state(), FetchState::Idle);

        // The late response of the superseded request is ignored.
        c.on_weather(generation, Ok(record("USA")));
        assert!(c.record().is_none());
    }

    #[test]
    fn invalid_numeric_while_in_flight_supersedes_fetch() {
        let mut c = DisplayController::default();
        let generation = fetch_requests(&c.edit_query("Paris"))[0].generation;

        let effects = c.edit_query("1234567");
        assert_eq!(effects, vec![Effect::CancelWeather { generation }]);
        assert_eq!(c.fetch_state(), FetchState::Idle);

        c.on_weather(generation, Ok(record("France")));
        assert_eq!(c.query(), "1234567");
        assert!(c.error().is_some_and(|e| e.contains("1234567")));
        assert!(c.record().is_none());
    }

    #[test]
    fn dropped_trigger_then_empty_query_discards_late_response() {
        let mut c = DisplayController::default();
        let generation = fetch_requests(&c.edit_query("Paris"))[0].generation;
        assert!(c.edit_query("Berlin").is_empty());

        assert_eq!(c.edit_query(""), vec![Effect::CancelWeather { generation }]);
        c.on_weather(generation, Ok(record("France")));
        assert!(c.record().is_none());
        assert_eq!(c.fetch_state(), FetchState::Idle);
    }

    #[test]
    fn relocate_replaces_manual_text() {
        let mut c = DisplayController::default();
        c.mount();
        let generation = fetch_requests(&c.edit_query("Paris"))[0].generation;

        let effects = c.relocate();
        assert_eq!(
            effects,
            vec![Effect::CancelWeather { generation }, Effect::FetchLocation]
        );
        assert_eq!(c.query(), "");
        assert_eq!(c.source(), InputSource::Geolocated);

        let effects = c.on_location(Ok(springfield()));
        assert_eq!(fetch_requests(&effects)[0].query, "Springfield, Illinois");
        assert_eq!(c.query(), "Springfield, Illinois");
        assert!(c.is_location_initialized());
    }

    #[test]
    fn relocate_with_empty_field_still_seeds() {
        let mut c = DisplayController::default();
        assert_eq!(c.relocate(), vec![Effect::FetchLocation]);
        let effects = c.on_location(Ok(springfield()));
        assert_eq!(fetch_requests(&effects).len(), 1);
        assert_eq!(c.source(), InputSource::Geolocated);
    }

    #[test]
    fn stale_generation_is_discarded() {
        let mut c = DisplayController::default();
        let first = fetch_requests(&c.edit_query("Paris"))[0].generation;
        c.edit_query("");
        let second = fetch_requests(&c.edit_query("Berlin"))[0].generation;
        assert_ne!(first, second);

        c.on_weather(first, Ok(record("France")));
        assert!(c.record().is_none());
        assert_eq!(c.fetch_state(), FetchState::InFlight(second));

        c.on_weather(second, Ok(record("Germany")));
        assert_eq!(c.record().map(|r| r.location.country.as_str()), Some("Germany"));
    }

    #[test]
    fn cancellation_is_not_an_error() {
        let mut c = DisplayController::default();
        let generation = fetch_requests(&c.edit_query("Paris"))[0].generation;
        c.on_weather(generation, Err(NimbusError::RequestCanceled));

        assert!(c.error().is_none());
        assert_eq!(c.fetch_state(), FetchState::Settled);
    }

    #[test]
    fn hourly_toggles_are_independent() {
        let mut c = DisplayController::default();
        c.toggle_hourly(ForecastDay::Tomorrow);
        assert!(c.hourly().is_expanded(ForecastDay::Tomorrow));
        assert!(!c.hourly().is_expanded(ForecastDay::Today));
        assert!(!c.hourly().is_expanded(ForecastDay::DayAfter));

        c.toggle_hourly(ForecastDay::Tomorrow);
        assert!(!c.hourly().is_expanded(ForecastDay::Tomorrow));
    }
}
