//! Combinators example for inputguard-validator

use inputguard_validator::prelude::*;

fn main() {
    // A handle must be a short lowercase identifier.
    let handle = AlphanumericIdentifier::with_max_length(20).and(lowercase());

    println!("Testing handle validation:\n");

    for candidate in [
        "build-agent",
        "Build-Agent",
        "build--agent",
        "a-very-long-build-agent-name",
    ] {
        match handle.validate(candidate) {
            Ok(()) => println!("✓ '{candidate}' is valid"),
            Err(e) => println!("✗ '{candidate}': {e}"),
        }
    }

    // A webhook target is either a URL or an email address.
    let target = url().or(email());

    println!("\nTesting webhook targets:\n");

    for candidate in ["https://hooks.example.com/in", "ops@example.com", "ftp:/broken"] {
        match target.validate(candidate) {
            Ok(()) => println!("✓ '{candidate}' is valid"),
            Err(e) => println!("✗ '{candidate}': {e}"),
        }
    }
}
