//! Event bus abstraction for decoupled event emission.
//!
//! The simulator publishes through this trait so the core stays free of any
//! UI framework. Tests capture events with `InMemoryEventBus`; harnesses that
//! only care about delegates use `NullEventBus`.

use crate::DeviceEvent;
use std::sync::{Arc, Mutex};

/// Trait for emitting events to subscribers.
pub trait EventBus: Send + Sync {
    /// Emit an event with a JSON payload.
    ///
    /// # Arguments
    /// * `topic` - Event name/topic (e.g., "device:mode_changed")
    /// * `payload` - JSON payload to emit
    fn emit(&self, topic: &str, payload: serde_json::Value);
}

/// Type alias for shared event bus reference.
pub type EventBusRef = Arc<dyn EventBus>;

/// Serialize a typed event and emit it under its own topic.
///
/// Event DTOs only hold strings, numbers and booleans, so serialization
/// cannot fail; a non-finite float becomes `null` in the payload.
pub fn publish<E: DeviceEvent>(bus: &dyn EventBus, event: &E) {
    let payload = serde_json::to_value(event).unwrap_or(serde_json::Value::Null);
    bus.emit(E::TOPIC, payload);
}

/// In-memory event bus for testing.
///
/// Captures all emitted events for later inspection.
#[derive(Default)]
pub struct InMemoryEventBus {
    events: Mutex<Vec<EmittedEvent>>,
}

/// A captured event from InMemoryEventBus.
#[derive(Debug, Clone)]
pub struct EmittedEvent {
    pub topic: String,
    pub payload: serde_json::Value,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured events, oldest first.
    pub fn events(&self) -> Vec<EmittedEvent> {
        self.lock().clone()
    }

    /// Get events for a specific topic.
    pub fn events_for(&self, topic: &str) -> Vec<EmittedEvent> {
        self.lock()
            .iter()
            .filter(|e| e.topic == topic)
            .cloned()
            .collect()
    }

    /// Topics in emission order.
    pub fn topics(&self) -> Vec<String> {
        self.lock().iter().map(|e| e.topic.clone()).collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panicking delegate must not take the capture log down with it.
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<EmittedEvent>> {
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl EventBus for InMemoryEventBus {
    fn emit(&self, topic: &str, payload: serde_json::Value) {
        self.lock().push(EmittedEvent {
            topic: topic.to_string(),
            payload,
        });
    }
}

/// No-op event bus that discards all events.
pub struct NullEventBus;

impl EventBus for NullEventBus {
    fn emit(&self, _topic: &str, _payload: serde_json::Value) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{event_names, ModeChangedEvent, WearerHeadingChangedEvent};
    use serde_json::json;

    #[test]
    fn test_in_memory_event_bus() {
        let bus = InMemoryEventBus::new();

        bus.emit(event_names::MODE_CHANGED, json!({"mode": "nav"}));
        bus.emit(event_names::LOW_POWER_CHANGED, json!({"isLowPower": true}));
        bus.emit(event_names::MODE_CHANGED, json!({"mode": "idle"}));

        assert_eq!(bus.len(), 3);
        assert_eq!(bus.events_for(event_names::MODE_CHANGED).len(), 2);
        assert_eq!(bus.events_for(event_names::LOW_POWER_CHANGED).len(), 1);
        assert_eq!(bus.events_for("device:missing").len(), 0);
    }

    #[test]
    fn test_publish_uses_event_topic() {
        let bus = InMemoryEventBus::new();

        publish(&bus, &ModeChangedEvent::new("navigation"));
        publish(&bus, &WearerHeadingChangedEvent::new(359.0));

        assert_eq!(
            bus.topics(),
            vec![
                event_names::MODE_CHANGED.to_string(),
                event_names::WEARER_HEADING_CHANGED.to_string()
            ]
        );
        let events = bus.events();
        assert_eq!(events[0].payload["mode"], "navigation");
        assert_eq!(events[1].payload["heading"], 359.0);
    }

    #[test]
    fn test_in_memory_event_bus_clear() {
        let bus = InMemoryEventBus::new();

        bus.emit("device:test", json!({}));
        assert!(!bus.is_empty());

        bus.clear();
        assert!(bus.is_empty());
    }

    #[test]
    fn test_null_event_bus() {
        let bus = NullEventBus;
        publish(&bus, &ModeChangedEvent::new("ignored"));
    }
}
