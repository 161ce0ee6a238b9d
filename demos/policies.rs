//! Policy configuration example
//!
//! Demonstrates level-filtered policies, raising errors, silencing levels and
//! loading a configuration from JSON.
//!
//! Run with: cargo run --example policies

use policy_logger::prelude::*;

const CONFIG: &str = r#"{
    "general": { "prefix": "billing", "verbosity": "debug" },
    "policies": [
        { "levels": ["debug"], "action": { "type": "none" } },
        { "levels": ["info", "warn"], "action": { "type": "console", "color": "cyan" } },
        { "levels": ["error"], "action": { "type": "error" } }
    ]
}"#;

#[derive(serde::Deserialize)]
struct Settings {
    general: GeneralConfig,
    policies: Vec<Policy>,
}

fn main() {
    println!("=== Policy Logger - Policies Example ===\n");

    println!("1. Custom console methods and colors:");
    let logger = Logger::builder()
        .policy(Policy::console_with(ConsoleMethod::Info, ConsoleColor::Magenta).with_prefix("audit"))
        .build();
    let _ = logger.info("user 17 signed in");

    println!("\n2. Raising errors:");
    let strict = Logger::builder()
        .prefix("payments")
        .policy(Policy::console().for_levels([LogLevel::Error]))
        .policy(Policy::raise_error().for_levels([LogLevel::Error]))
        .build();
    match strict.error("card declined") {
        Ok(()) => println!("   no error raised"),
        Err(e) => println!("   caught: {e}"),
    }

    println!("\n3. Configuration from JSON:");
    let settings: Settings = match serde_json::from_str(CONFIG) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            return;
        }
    };
    let configured = Logger::with_config(settings.general, settings.policies);
    let _ = configured.debug("silenced by a none policy");
    let _ = configured.info("invoice 1001 created");
    let _ = configured.warn("invoice 1001 is overdue");
    if let Err(e) = configured.error("invoice total is negative") {
        println!("   raised: {e}");
    }

    println!("\n4. Unknown values are rejected when parsing:");
    for value in ["console", "file:/tmp/app.log", "syslog"] {
        match value.parse::<Action>() {
            Ok(action) => println!("   {value:<18} -> {}", action.kind()),
            Err(e) => println!("   {value:<18} -> {e}"),
        }
    }

    println!("\n=== Example completed successfully! ===");
}
