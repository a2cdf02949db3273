// ============================================================================
// Basic Usage Example
// ============================================================================

use roman_numeral::prelude::*;
use std::sync::Arc;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Roman Numeral Example ===\n");

    // Plain conversion
    println!("Plain conversion:");
    for roman in ["XIV", "MCMXCVIII", "MMXXIV", "", "IIII", "MMMM"] {
        match roman_to_decimal(roman) {
            Ok(value) => println!("  {:>10} = {}", format!("{:?}", roman), value),
            Err(e) => println!("  {:>10} : {}", format!("{:?}", roman), e),
        }
    }

    // Converter with conventional range and logged events
    println!("\nConventional range (1..=3999), with event logging:");
    let converter = match ConverterBuilder::new()
        .conventional_range()
        .event_handler(Arc::new(LoggingEventHandler))
        .build()
    {
        Ok(converter) => converter,
        Err(e) => {
            eprintln!("invalid configuration: {}", e);
            return;
        }
    };

    for roman in ["MMMCMXCIX", "MMMM", "XVV", "A", ""] {
        match converter.convert(roman) {
            Ok(value) => println!("  {:>11} = {}", format!("{:?}", roman), value),
            Err(e) => println!("  {:>11} : {}", format!("{:?}", roman), e),
        }
    }

    // Value objects sort by decimal value
    println!("\nSorted numerals:");
    let mut numerals: Vec<RomanNumeral> = ["XC", "IX", "MM", "XLIX", "CD"]
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();
    numerals.sort();
    for numeral in &numerals {
        println!("  {} ({})", numeral, numeral.value());
    }
}
