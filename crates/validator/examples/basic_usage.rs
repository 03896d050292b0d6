//! Checking request fields against named rules.
//!
//! Run: `cargo run -p inputguard-validator --example basic_usage`

use inputguard_validator::foundation::Validate;
use inputguard_validator::rules::{self, Rule};
use inputguard_validator::validators::password;
use tracing::Level;

fn main() {
    // Registry events are emitted at TRACE / DEBUG.
    tracing_subscriber::fmt().with_max_level(Level::TRACE).init();

    let request = [
        (Rule::Alphanumeric, "build-agent-7", vec!["16"]),
        (Rule::Tag, "machine-learning", vec![]),
        (Rule::Email, "ops@example", vec![]),
        (Rule::MemorySize, "512Mi", vec![]),
        (Rule::In, "desktop", vec!["android", "ios", "web"]),
        (Rule::Alphanumeric, "build-agent-7", vec!["sixteen"]),
    ];

    for (rule, value, params) in &request {
        match rule.validate(value, params) {
            Ok(()) => println!("✓ {rule}: '{value}'"),
            Err(e) => println!("✗ {rule}: '{value}' ({e})"),
        }
    }

    // Unknown names never pass.
    println!("\nunknown rule -> {}", rules::check("isEmail", "a@b.io", &[]));

    // Password failures say which fact was missed.
    for candidate in ["Passw0rd!", "password", "P4ss!"] {
        match password().validate(candidate) {
            Ok(()) => println!("✓ password '{candidate}'"),
            Err(e) => println!("✗ password '{candidate}': {e}"),
        }
    }
}
