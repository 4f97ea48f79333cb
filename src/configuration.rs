use crate::censoredstring::CensoredString;
use crate::rate_limit::DEFAULT_COOLDOWN;
use serde_aux::field_attributes::deserialize_number_from_string;
use std::time::Duration;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Settings {
    pub emailjs: EmailJsSettings,
    #[serde(default)]
    pub submission: SubmissionSettings,
    pub recipient: RecipientSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

/// Account and template the contact form delivers through. None of the
/// identifiers are secret; the optional access token is.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct EmailJsSettings {
    #[serde(default = "default_emailjs_base_url")]
    pub base_url: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    #[serde(default)]
    pub access_token: Option<CensoredString>,
    #[serde(
        default = "default_emailjs_timeout_milliseconds",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub timeout_milliseconds: u64,
}

impl EmailJsSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct SubmissionSettings {
    #[serde(
        default = "default_cooldown_seconds",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub cooldown_seconds: u64,
    #[serde(
        default = "default_delivery_timeout_milliseconds",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub delivery_timeout_milliseconds: u64,
}

impl SubmissionSettings {
    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_seconds)
    }

    pub fn delivery_timeout(&self) -> Duration {
        Duration::from_millis(self.delivery_timeout_milliseconds)
    }
}

impl Default for SubmissionSettings {
    fn default() -> Self {
        Self {
            cooldown_seconds: default_cooldown_seconds(),
            delivery_timeout_milliseconds: default_delivery_timeout_milliseconds(),
        }
    }
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct RecipientSettings {
    /// Sent as `to_name` with every message.
    pub name: String,
    /// Offered as a fallback channel when delivery fails.
    #[serde(default)]
    pub direct_email: Option<String>,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct TelemetrySettings {
    #[serde(default = "default_telemetry_name")]
    pub name: String,
    #[serde(default = "default_telemetry_level")]
    pub level: String,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            name: default_telemetry_name(),
            level: default_telemetry_level(),
        }
    }
}

fn default_emailjs_base_url() -> String {
    "https://api.emailjs.com".to_owned()
}

fn default_emailjs_timeout_milliseconds() -> u64 {
    10_000
}

fn default_cooldown_seconds() -> u64 {
    DEFAULT_COOLDOWN.as_secs()
}

fn default_delivery_timeout_milliseconds() -> u64 {
    10_000
}

fn default_telemetry_name() -> String {
    env!("CARGO_PKG_NAME").to_owned()
}

fn default_telemetry_level() -> String {
    "info".to_owned()
}

// Read top-level configuration file with compatible extension YAML,JSON...
// Environment variables such as CONTACT__SUBMISSION__COOLDOWN_SECONDS=10
// take precedence over the file.
pub fn get_configuration(filename: &str) -> Result<Settings, config::ConfigError> {
    config::Config::builder()
        .add_source(config::File::with_name(filename))
        .add_source(
            config::Environment::with_prefix("CONTACT")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}
