//! Tracing setup with an optional layer feeding the in-app log panel

use crossbeam_channel::Sender;
use std::fmt;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    fmt::time::ChronoLocal,
    layer::{Context, Layer},
    registry::LookupSpan,
};

/// A tracing layer that forwards formatted events to the GUI log panel
pub struct GuiLogLayer {
    sender: Sender<(Level, String)>,
}

impl GuiLogLayer {
    pub fn new(sender: Sender<(Level, String)>) -> Self {
        Self { sender }
    }
}

impl<S> Layer<S> for GuiLogLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut message = String::new();

        if let Some(target) = metadata.target().split("::").last() {
            message.push_str(target);
            message.push_str(": ");
        }

        let mut visitor = MessageVisitor(&mut message);
        event.record(&mut visitor);

        // Channel closure just means the panel is gone
        let _ = self.sender.send((*metadata.level(), message));
    }
}

struct MessageVisitor<'a>(&'a mut String);

impl<'a> tracing::field::Visit for MessageVisitor<'a> {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0.push_str(&format!("{:?}", value));
        } else {
            self.0.push_str(&format!(" {}={:?}", field.name(), value));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.0.push_str(value);
        } else {
            self.0.push_str(&format!(" {}=\"{}\"", field.name(), value));
        }
    }
}

/// Initialize tracing with console output and, when a sender is given,
/// the GUI log layer.
pub fn init_tracing(gui_sender: Option<Sender<(Level, String)>>) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let env_filter = EnvFilter::from_default_env()
        .add_directive("ferry_gui=debug".parse().unwrap())
        .add_directive("ferry_core=debug".parse().unwrap());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_timer(ChronoLocal::new("%H:%M:%S%.3f".to_string()))
        .with_target(false);

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer);

    if let Some(sender) = gui_sender {
        subscriber.with(GuiLogLayer::new(sender)).init();
    } else {
        subscriber.init();
    }
}
