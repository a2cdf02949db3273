// ============================================================================
// Converter Factory
// Creates converters with validated configuration
// ============================================================================

use crate::domain::config::{ConverterConfig, RangePolicy};
use crate::engine::Converter;
use crate::interfaces::{EventHandler, NoOpEventHandler};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a converter from configuration
///
/// # Arguments
/// * `config` - Converter configuration
/// * `event_handler` - Event handler for conversion events
///
/// # Returns
/// * `Result<Converter, String>` - Configured converter or error
///
/// # Example
/// ```
/// use roman_numeral::prelude::*;
/// use std::sync::Arc;
///
/// let converter = create_from_config(ConverterConfig::strict(), Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(converter.convert("XLIX"), Ok(49));
/// ```
pub fn create_from_config(
    config: ConverterConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<Converter, String> {
    config.validate()?;
    Ok(Converter::new(config, event_handler))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating converters with fluent API
///
/// # Example
/// ```
/// use roman_numeral::prelude::*;
/// use std::sync::Arc;
///
/// let converter = ConverterBuilder::new()
///     .bounded_range(1, 100)
///     .event_handler(Arc::new(LoggingEventHandler))
///     .build()
///     .unwrap();
///
/// assert_eq!(converter.convert("XCV"), Ok(95));
/// assert!(converter.convert("CI").is_err());
/// ```
pub struct ConverterBuilder {
    config: ConverterConfig,
    event_handler: Arc<dyn EventHandler>,
}

impl ConverterBuilder {
    /// Create a new builder with the permissive default configuration
    pub fn new() -> Self {
        Self {
            config: ConverterConfig::default(),
            event_handler: Arc::new(NoOpEventHandler),
        }
    }

    // ========================================================================
    // Range Configuration
    // ========================================================================

    /// Accept any value the scan produces (default)
    pub fn unchecked_range(mut self) -> Self {
        self.config.range_policy = RangePolicy::Unchecked;
        self
    }

    /// Enforce 1..=3999
    pub fn conventional_range(mut self) -> Self {
        self.config.range_policy = RangePolicy::Conventional;
        self
    }

    /// Enforce min..=max
    pub fn bounded_range(mut self, min: u64, max: u64) -> Self {
        self.config.range_policy = RangePolicy::Bounded { min, max };
        self
    }

    pub fn range_policy(mut self, range_policy: RangePolicy) -> Self {
        self.config.range_policy = range_policy;
        self
    }

    // ========================================================================
    // Events
    // ========================================================================

    pub fn event_handler(mut self, event_handler: Arc<dyn EventHandler>) -> Self {
        self.event_handler = event_handler;
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the converter
    pub fn build(self) -> Result<Converter, String> {
        create_from_config(self.config, self.event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &ConverterConfig {
        &self.config
    }
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeral::RomanError;

    #[test]
    fn test_create_from_config() {
        let converter =
            create_from_config(ConverterConfig::default(), Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(converter.config().range_policy, RangePolicy::Unchecked);
        assert_eq!(converter.convert("MMMM"), Ok(4000));
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        let config =
            ConverterConfig::new().with_range_policy(RangePolicy::Bounded { min: 5, max: 1 });
        assert!(create_from_config(config, Arc::new(NoOpEventHandler)).is_err());
    }

    #[test]
    fn test_builder_pattern() {
        let converter = ConverterBuilder::new()
            .conventional_range()
            .event_handler(Arc::new(NoOpEventHandler))
            .build()
            .unwrap();

        assert_eq!(converter.config().range_policy, RangePolicy::Conventional);
        assert!(matches!(
            converter.convert("MMMM"),
            Err(RomanError::OutOfRange { value: 4000, .. })
        ));
    }

    #[test]
    fn test_builder_last_range_wins() {
        let builder = ConverterBuilder::new()
            .bounded_range(1, 10)
            .unchecked_range();
        assert_eq!(builder.get_config().range_policy, RangePolicy::Unchecked);

        let builder = ConverterBuilder::default().range_policy(RangePolicy::Conventional);
        assert_eq!(builder.get_config().range_policy, RangePolicy::Conventional);
    }

    #[test]
    fn test_builder_invalid_bounds() {
        assert!(ConverterBuilder::new().bounded_range(100, 1).build().is_err());
    }
}
