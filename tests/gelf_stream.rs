// Copyright 2025 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use gelf_stream::Config;
use gelf_stream::Error;
use gelf_stream::FactoryRegistry;
use gelf_stream::GelfStreamFactory;
use gelf_stream::Level;
use gelf_stream::Record;
use gelf_stream::append::Capture;
use serde_json::Value;
use serde_json::json;

fn registry() -> FactoryRegistry {
    let mut registry = FactoryRegistry::default();
    registry.register(GelfStreamFactory);
    registry
}

fn parse(line: &str) -> serde_json::Map<String, Value> {
    match serde_json::from_str(line).unwrap() {
        Value::Object(object) => object,
        value => panic!("expected a JSON object, got {value}"),
    }
}

#[test]
fn test_severity_codes_on_the_wire() {
    let conf = Config::new(json!({
        "logging": {
            "stacktrace": "false",
            "cores": { "json": { "type": "gelf_stream", "level": "debug" } },
        },
    }));
    let capture = Capture::default();
    let core = GelfStreamFactory::profile(&conf, "logging.cores.json")
        .unwrap()
        .append(capture.clone())
        .build()
        .unwrap();

    let expected = [
        (Level::Debug, 7),
        (Level::Info, 6),
        (Level::Warn, 4),
        (Level::Error, 3),
        (Level::DPanic, 0),
        (Level::Panic, 0),
        (Level::Fatal, 0),
    ];
    for (level, _) in expected {
        core.log(&Record::builder().level(level).payload("x").build());
    }

    let lines = capture.lines();
    assert_eq!(lines.len(), expected.len());
    for (line, (_, code)) in lines.iter().zip(expected) {
        assert_eq!(parse(line)["level"], code);
    }
}

#[test]
fn test_stacktrace_flag_string_equality() {
    for (value, enabled) in [
        (json!("false"), false),
        (json!(false), false),
        (json!("true"), true),
        (json!("TRUE"), true),
        (json!("yes"), true),
        (json!("flase"), true),
    ] {
        let conf = Config::new(json!({
            "logging": {
                "stacktrace": value.clone(),
                "cores": { "json": { "type": "gelf_stream" } },
            },
        }));
        let profile = GelfStreamFactory::profile(&conf, "logging.cores.json").unwrap();
        assert_eq!(profile.stacktrace_enabled(), enabled, "stacktrace = {value}");
    }
}

#[test]
fn test_caller_flag() {
    for (tree, enabled) in [
        (json!({ "logging": { "caller": true, "cores": { "json": {} } } }), true),
        (json!({ "logging": { "caller": false, "cores": { "json": {} } } }), false),
    ] {
        let conf = Config::new(tree);
        let profile = GelfStreamFactory::profile(&conf, "logging.cores.json").unwrap();
        assert_eq!(profile.caller_enabled(), enabled);
    }
}

#[test]
fn test_caller_flows_to_the_wire() {
    let conf = Config::new(json!({
        "logging": {
            "caller": false,
            "stacktrace": "false",
            "cores": { "json": { "type": "gelf_stream" } },
        },
    }));
    let capture = Capture::default();
    let core = GelfStreamFactory::profile(&conf, "logging.cores.json")
        .unwrap()
        .append(capture.clone())
        .build()
        .unwrap();

    core.log(
        &Record::builder()
            .level(Level::Info)
            .file(Some("src/checkout.rs"))
            .line(Some(51))
            .payload("hello")
            .build(),
    );

    let object = parse(&capture.lines()[0]);
    assert!(!object.contains_key("_caller"));
}

#[test]
fn test_level_threshold() {
    let conf = Config::new(json!({
        "logging": { "cores": { "json": { "type": "gelf_stream", "level": "debug" } } },
    }));
    let core = registry().new_core(&conf, "logging.cores.json").unwrap();

    assert!(core.enabled(Level::Debug));
    assert!(core.enabled(Level::Fatal));

    core.set_level(Level::Warn);
    assert!(!core.enabled(Level::Info));
    assert!(core.enabled(Level::Warn));
}

#[test]
fn test_malformed_level_is_a_config_error() {
    let conf = Config::new(json!({
        "logging": { "cores": { "json": { "type": "gelf_stream", "level": "not-a-level" } } },
    }));
    let err = registry().new_core(&conf, "logging.cores.json").unwrap_err();

    assert!(matches!(err, Error::Config { ref value, .. } if value == "not-a-level"));
    assert!(err.to_string().contains("not-a-level"));
}

#[test]
fn test_version_field_on_every_record() {
    let conf = Config::new(json!({
        "app": { "version": "1.2.3" },
        "logging": {
            "stacktrace": "false",
            "cores": { "json": { "type": "gelf_stream" } },
        },
    }));
    let capture = Capture::default();
    let core = GelfStreamFactory::profile(&conf, "logging.cores.json")
        .unwrap()
        .append(capture.clone())
        .build()
        .unwrap();

    core.log(&Record::builder().level(Level::Info).payload("one").build());
    core.log(&Record::builder().level(Level::Error).payload("two").build());

    let lines = capture.lines();
    assert_eq!(lines.len(), 2);
    for line in &lines {
        assert_eq!(parse(line)["version"], "1.2.3");
    }
}

#[test]
fn test_gelf_field_names_exactly() {
    let conf = Config::new(json!({
        "logging": { "cores": { "json": { "type": "gelf_stream" } } },
    }));
    let capture = Capture::default();
    let core = GelfStreamFactory::profile(&conf, "logging.cores.json")
        .unwrap()
        .append(capture.clone())
        .build()
        .unwrap();

    core.log(
        &Record::builder()
            .level(Level::Error)
            .logger("payments")
            .file(Some("src/checkout.rs"))
            .line(Some(51))
            .payload("charge failed")
            .build(),
    );

    let object = parse(&capture.lines()[0]);
    assert!(object.contains_key("timestamp"));
    assert!(object["level"].is_u64());
    assert_eq!(object["_logger"], "payments");
    assert_eq!(object["_caller"], "checkout.rs:51");
    assert_eq!(object["short_message"], "charge failed");
    // the stacktrace default captures on errors
    assert!(object.contains_key("full_message"));
    assert!(!object.contains_key("message"));
    assert!(!object.contains_key("logger"));
    assert!(!object.contains_key("caller"));
}

#[test]
fn test_build_is_idempotent() {
    let conf = Config::new(json!({
        "app": { "version": "1.2.3" },
        "logging": {
            "stacktrace": "false",
            "cores": { "json": { "type": "gelf_stream", "level": "warn" } },
        },
    }));

    let mut outputs = vec![];
    for _ in 0..2 {
        let capture = Capture::default();
        let core = GelfStreamFactory::profile(&conf, "logging.cores.json")
            .unwrap()
            .append(capture.clone())
            .build()
            .unwrap();
        assert_eq!(core.level(), Level::Warn);

        core.log(&Record::builder().level(Level::Fatal).payload("end").build());
        let object = parse(&capture.lines()[0]);
        let keys: Vec<String> = object.keys().cloned().collect();
        outputs.push((keys, object["level"].clone()));
    }

    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn test_registry_rejects_unknown_type() {
    let conf = Config::new(json!({
        "logging": { "cores": { "json": { "type": "mystery" } } },
    }));
    let err = registry().new_core(&conf, "logging.cores.json").unwrap_err();
    assert!(matches!(err, Error::Build { .. }));
}

#[test]
fn test_console_encoding_override() {
    let conf = Config::new(json!({
        "logging": {
            "development": true,
            "stacktrace": "false",
            "cores": { "json": { "type": "gelf_stream", "encoding": "console" } },
        },
    }));
    let capture = Capture::default();
    let core = GelfStreamFactory::profile(&conf, "logging.cores.json")
        .unwrap()
        .append(capture.clone())
        .build()
        .unwrap();

    core.log(&Record::builder().level(Level::Info).payload("hello").build());

    let lines = capture.lines();
    assert_eq!(lines.len(), 1);
    // not JSON: the console rendering carries the severity in angle brackets
    assert!(serde_json::from_str::<Value>(&lines[0]).is_err());
    assert!(lines[0].contains("hello"));
}

#[test]
fn test_unknown_encoding_is_a_build_error() {
    let conf = Config::new(json!({
        "logging": { "cores": { "json": { "type": "gelf_stream", "encoding": "protobuf" } } },
    }));
    let err = registry().new_core(&conf, "logging.cores.json").unwrap_err();
    assert!(matches!(err, Error::Build { .. }));
}
