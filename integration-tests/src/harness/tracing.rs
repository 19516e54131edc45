use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

/// One event as seen by the capture layer, fields rendered to strings.
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub target: String,
    pub level: Level,
    pub fields: Vec<(String, String)>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

type EventLog = Arc<Mutex<Vec<CapturedEvent>>>;

static EVENTS: OnceLock<EventLog> = OnceLock::new();

struct CaptureLayer(EventLog);

/// Install the capturing subscriber once per test binary.
pub fn init_test_tracing() -> EventLog {
    EVENTS
        .get_or_init(|| {
            let events = EventLog::default();
            let subscriber = tracing_subscriber::registry().with(CaptureLayer(events.clone()));

            tracing::subscriber::set_global_default(subscriber)
                .expect("failed to set global tracing subscriber");

            events
        })
        .clone()
}

/// Every event captured so far whose message matches.
pub fn captured_events(message: &str) -> Vec<CapturedEvent> {
    init_test_tracing()
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e.field("message") == Some(message))
        .cloned()
        .collect()
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        // Only `record_debug` is overridden, so `&str` fields come out quoted.
        let mut fields = FieldStrings(Vec::new());
        event.record(&mut fields);

        let meta = event.metadata();
        self.0.lock().unwrap().push(CapturedEvent {
            target: meta.target().to_string(),
            level: *meta.level(),
            fields: fields.0,
        });
    }
}

struct FieldStrings(Vec<(String, String)>);

impl Visit for FieldStrings {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }
}
