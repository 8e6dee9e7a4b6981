//! Effect execution.
//!
//! The dispatcher runs controller effects on a tokio runtime and reports
//! results over a channel the UI loop drains between frames.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::api::{GeolocationClient, LocationData, WeatherClient, WeatherRecord};
use crate::display::{Effect, WeatherRequest};
use crate::error::Result;

/// A finished lookup.
#[derive(Debug)]
pub enum Message {
    /// Geolocation outcome.
    Location(Result<LocationData>),
    /// Weather outcome for the request of `generation`.
    Weather {
        /// Generation of the originating request.
        generation: u64,
        /// Lookup outcome.
        result: Result<WeatherRecord>,
    },
}

/// Runs effects and keeps the cancellation token of the outstanding fetch.
#[derive(Debug)]
pub struct Dispatcher {
    handle: Handle,
    geolocation: Arc<GeolocationClient>,
    weather: Arc<WeatherClient>,
    tx: UnboundedSender<Message>,
    in_flight: Option<(u64, CancellationToken)>,
}

impl Dispatcher {
    /// Create a dispatcher spawning onto `handle`.
    pub fn new(
        handle: Handle,
        geolocation: GeolocationClient,
        weather: WeatherClient,
    ) -> (Self, UnboundedReceiver<Message>) {
        let (tx, rx) = unbounded_channel();
        let dispatcher = Self {
            handle,
            geolocation: Arc::new(geolocation),
            weather: Arc::new(weather),
            tx,
            in_flight: None,
        };
        (dispatcher, rx)
    }

    /// Carry out every effect in order.
    pub fn dispatch_all(&mut self, effects: impl IntoIterator<Item = Effect>) {
        for effect in effects {
            self.dispatch(effect);
        }
    }

    /// Carry out one effect.
    pub fn dispatch(&mut self, effect: Effect) {
        match effect {
            Effect::FetchLocation => self.spawn_location(),
            Effect::FetchWeather(request) => self.spawn_weather(request),
            Effect::CancelWeather { generation } => self.cancel(generation),
        }
    }

    fn spawn_location(&self) {
        let client = Arc::clone(&self.geolocation);
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let result = client.fetch_location().await;
            if tx.send(Message::Location(result)).is_err() {
                debug!("UI gone, dropping location result");
            }
        });
    }

    fn spawn_weather(&mut self, request: WeatherRequest) {
        let token = CancellationToken::new();
        if let Some((previous, old)) = self.in_flight.replace((request.generation, token.clone())) {
            debug!(previous, "Replacing outstanding weather token");
            old.cancel();
        }

        let client = Arc::clone(&self.weather);
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let result = client
                .fetch(&request.query, request.days, request.mode, &token)
                .await;
            let message = Message::Weather {
                generation: request.generation,
                result,
            };
            if tx.send(message).is_err() {
                debug!("UI gone, dropping weather result");
            }
        });
    }

    fn cancel(&mut self, generation: u64) {
        match self.in_flight.take() {
            Some((current, token)) if current == generation => {
                debug!(generation, "Canceling weather request");
                token.cancel();
            },
            other => {
                warn!(generation, "No outstanding weather request with this generation");
                self.in_flight = other;
            },
        }
    }

    /// Generation of the outstanding weather request, if any.
    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight.as_ref().map(|(generation, _)| *generation)
    }

    /// Forget the token of a finished request.
    pub fn complete(&mut self, generation: u64) {
        if self.in_flight() == Some(generation) {
            self.in_flight = None;
        }
    }
}
