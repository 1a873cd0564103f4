//! Behavioural properties of the logger facade.

use std::collections::BTreeSet;

use kvlogr::{kvs, Fields, Logger, PolicySnapshot, Value};

mod common;

#[test]
fn test_v_enabled_iff_level_and_name_admitted() {
    let names = ["foo", "bar", "foo.bar"];
    let allow_lists: [&[&str]; 3] = [&[], &["bar"], &["foo", "foo.bar"]];

    for threshold in 0..3u32 {
        for allowed in allow_lists {
            for name in names {
                let (root, _, policy) = common::capture_logger("foo");
                let logger = match name {
                    "foo" => root,
                    "bar" => Logger::new("bar", std::sync::Arc::new(kvlogr::DiscardSink), policy.clone()),
                    _ => root.with_name("bar"),
                };
                policy.replace(PolicySnapshot {
                    verbosity: threshold,
                    loggers: allowed.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
                });

                for level in 0..4u32 {
                    let expected =
                        level <= threshold && (allowed.is_empty() || allowed.contains(&name));
                    assert_eq!(
                        logger.v(level).enabled(),
                        expected,
                        "name={} level={} threshold={} allowed={:?}",
                        name,
                        level,
                        threshold,
                        allowed
                    );
                }
            }
        }
    }
}

#[test]
fn test_with_values_chaining_matches_single_call() {
    let (logger, _, _) = common::capture_logger("foo");
    let chained = logger.with_values(kvs!("k1" => "v1")).with_values(kvs!("k2" => "v2"));
    let single = logger.with_values(kvs!("k1" => "v1", "k2" => "v2"));
    assert_eq!(chained.context(), single.context());
}

#[test]
fn test_with_name_is_associative() {
    let (logger, _, _) = common::capture_logger("a");
    assert_eq!(logger.with_name("x").with_name("y").name(), Some("a.x.y"));
}

#[test]
fn test_duplicate_key_keeps_first_position() {
    let (logger, sink, _) = common::capture_logger("foo");
    logger.with_values(kvs!("a" => 1)).info("m", kvs!("b" => 2, "a" => 3));

    let record = &sink.records()[0];
    let pairs: Vec<(String, Value)> = record
        .fields
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
    assert_eq!(
        pairs,
        vec![("a".to_string(), Value::I64(3)), ("b".to_string(), Value::I64(2))]
    );
}

#[test]
fn test_disabled_facade_is_absorbing() {
    let (logger, sink, _) = common::capture_logger("foo");
    let disabled = logger.v(9);
    let err = std::io::Error::other("boom");

    let derived = [
        disabled.v(0),
        disabled.with_name("x"),
        disabled.with_values(kvs!("a" => 1)),
        disabled.with_name("x").with_values(kvs!("b" => 2)).v(0),
    ];
    for d in &derived {
        assert!(!d.enabled());
        d.info("m", kvs!("k" => "v"));
        d.error(&err, "m", Fields::new());
    }
    disabled.info("m", kvs![]);
    assert_eq!(sink.count(), 0);
}

#[test]
fn test_derived_loggers_share_sink() {
    let (logger, sink, policy) = common::capture_logger("foo");
    policy.set_verbosity(1);

    logger.info("root", kvs![]);
    logger.with_name("child").info("child", kvs![]);
    logger.with_values(kvs!("k" => 1)).v(1).info("verbose", kvs![]);

    let names: Vec<String> = sink.records().into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["foo", "foo.child", "foo"]);
}

#[test]
fn test_parent_context_unchanged_by_children() {
    let (logger, sink, policy) = common::capture_logger("foo");
    policy.set_verbosity(1);
    let parent = logger.with_values(kvs!("request" => "r-1"));

    let _child = parent.with_values(kvs!("request" => "r-2", "extra" => true));
    let _verbose = parent.v(1);
    parent.info("m", kvs![]);

    assert_eq!(sink.records()[0].fields, kvs!("request" => "r-1"));
}

#[test]
fn test_error_record_carries_message() {
    let (logger, sink, _) = common::capture_logger("foo");
    let err = std::io::Error::other("BOOM SUCKA!");
    logger.error(&err, "test error log", kvs!("hello" => "world"));

    let record = &sink.records()[0];
    assert_eq!(record.level, kvlogr::Level::Error);
    assert_eq!(record.message, "test error log");
    assert_eq!(record.error.as_deref(), Some("BOOM SUCKA!"));
    assert_eq!(record.fields, kvs!("hello" => "world"));
}
