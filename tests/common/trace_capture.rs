use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::{Layer, layer::Context};

/// A recorded event: its message and the numeric fields that came with it
#[derive(Debug, Clone, Default)]
pub struct CapturedEvent {
    pub message: String,
    pub values: HashMap<String, f64>,
}

impl Visit for CapturedEvent {
    fn record_f64(&mut self, field: &Field, value: f64) {
        self.values.insert(field.name().to_string(), value);
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }
}

/// A tracing layer that keeps every event so tests can inspect them
#[derive(Clone, Default)]
pub struct TraceCaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TraceCaptureLayer {
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl<S> Layer<S> for TraceCaptureLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut captured = CapturedEvent::default();
        event.record(&mut captured);
        self.events.lock().unwrap().push(captured);
    }
}
