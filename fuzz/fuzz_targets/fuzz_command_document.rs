//! Fuzz target: command document parser
//!
//! Feeds arbitrary bytes through the JSON parser and, when they form a
//! document, through `parse_command`, verifying:
//! - No panics on any JSON shape
//! - `off` present on an object always yields `Off`
//! - An accepted temperature is the exact integer that was sent
//!
//! cargo fuzz run fuzz_command_document

#![no_main]

use kettlebridge::app::commands::ApplianceCommand;
use kettlebridge::sync::document::parse_command;
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
    let Ok(doc) = serde_json::from_slice::<Value>(data) else {
        return;
    };

    let parsed = parse_command(&doc);

    if let Some(obj) = doc.as_object() {
        if obj.contains_key("off") {
            assert_eq!(parsed, Ok(ApplianceCommand::Off));
        }
    } else {
        assert!(parsed.is_err(), "non-object accepted: {doc}");
    }

    if let Ok(ApplianceCommand::SetTemp(t)) = parsed {
        let sent = doc.get("temp").and_then(|v| v.get("value")).and_then(Value::as_i64);
        assert_eq!(sent, Some(i64::from(t)));
    }
});
