use crate::configuration::TelemetrySettings;
use anyhow::{Context, Result};
use tracing::{subscriber::set_global_default, Subscriber};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt, EnvFilter, Registry};

/// Bunyan JSON records named after `settings.name`, written to `sink`.
pub fn get_subscriber<Sink>(settings: &TelemetrySettings, sink: Sink) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    Registry::default()
        .with(level_filter(&settings.level))
        .with(JsonStorageLayer)
        .with(BunyanFormattingLayer::new(settings.name.clone(), sink))
}

// RUST_LOG wins over the configured level.
fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Installs `subscriber` for the whole process. Fails when called twice.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> Result<()> {
    LogTracer::init().context("Failed to forward `log` records from dependencies to tracing")?;
    set_global_default(subscriber).context("Failed to install the contact form log subscriber")
}

#[cfg(test)]
mod tests {
    use super::get_subscriber;
    use crate::configuration::TelemetrySettings;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn records_are_bunyan_json_named_after_the_service() {
        let buffer = Buffer::default();
        let sink = buffer.clone();
        let settings = TelemetrySettings {
            name: "contact-form-test".to_owned(),
            level: "info".to_owned(),
        };

        tracing::subscriber::with_default(get_subscriber(&settings, move || sink.clone()), || {
            tracing::error!("Contact message delivery failed.");
        });

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        let record: serde_json::Value =
            serde_json::from_str(output.lines().next().expect("one record was written")).unwrap();
        assert_eq!("contact-form-test", record["name"]);
        assert_eq!("Contact message delivery failed.", record["msg"]);
    }
}
