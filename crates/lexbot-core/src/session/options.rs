use crate::constants::defaults;
use crate::context::{ResponseLength, Topic};

/// Per-request controls chosen by the user. Built fresh for every turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequestOptions {
    pub topic: Topic,
    pub length: ResponseLength,
    temperature: f32,
}

impl RequestOptions {
    pub fn new(topic: Topic, length: ResponseLength, temperature: f32) -> Self {
        Self {
            topic,
            length,
            temperature: clamp_temperature(temperature),
        }
    }

    pub fn with_topic(mut self, topic: Topic) -> Self {
        self.topic = topic;
        self
    }

    pub fn with_length(mut self, length: ResponseLength) -> Self {
        self.length = length;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = clamp_temperature(temperature);
        self
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Topic::General, ResponseLength::Medium, defaults::TEMPERATURE)
    }
}

/// Pin a temperature into the supported range; non-finite values get the default.
pub fn clamp_temperature(value: f32) -> f32 {
    if !value.is_finite() {
        return defaults::TEMPERATURE;
    }
    let clamped = value.clamp(defaults::MIN_TEMPERATURE, defaults::MAX_TEMPERATURE);
    if clamped != value {
        tracing::debug!(requested = value, used = clamped, "temperature clamped");
    }
    clamped
}
