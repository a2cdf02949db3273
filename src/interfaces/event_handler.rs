// ============================================================================
// Event Handler Interface
// Defines the contract for observing conversion outcomes
// ============================================================================

use crate::numeral::RomanError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by a `Converter`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConversionEvent {
    /// Input converted successfully
    Converted { input: String, value: u64 },

    /// Input rejected
    Rejected { input: String, error: RomanError },
}

/// Event handler trait for processing conversion events
/// Implementations can handle logging, metrics, auditing, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a conversion event
    fn on_event(&self, event: ConversionEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<ConversionEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler, the converter's default
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: ConversionEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: ConversionEvent) {
        match &event {
            ConversionEvent::Converted { input, value } => {
                tracing::debug!(input = %input, value, "roman numeral converted");
            }
            ConversionEvent::Rejected { input, error } => {
                tracing::debug!(input = %input, error = %error, "roman numeral rejected");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingHandler(Mutex<Vec<ConversionEvent>>);

    impl EventHandler for RecordingHandler {
        fn on_event(&self, event: ConversionEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(ConversionEvent::Converted {
            input: "X".to_string(),
            value: 10,
        });
        // Should not panic
    }

    #[test]
    fn test_logging_handler() {
        let handler = LoggingEventHandler;
        handler.on_event(ConversionEvent::Rejected {
            input: "A".to_string(),
            error: RomanError::InvalidNumeral,
        });
        // No subscriber installed, should not panic
    }

    #[test]
    fn test_on_events_forwards_in_order() {
        let handler = RecordingHandler(Mutex::new(Vec::new()));
        let events = vec![
            ConversionEvent::Converted {
                input: "I".to_string(),
                value: 1,
            },
            ConversionEvent::Rejected {
                input: "VV".to_string(),
                error: RomanError::InvalidNumeral,
            },
        ];

        handler.on_events(events.clone());
        assert_eq!(*handler.0.lock().unwrap(), events);
    }
}
