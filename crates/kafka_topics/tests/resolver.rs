use std::path::PathBuf;

use kafka_topics::{Error, Flow, GeneralTopicConf, KafkaSettings, State, TopicResolver};
use serde_json::json;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/default.json")
}

fn resolver() -> TopicResolver {
    TopicResolver::new(KafkaSettings::load(fixture_path()).unwrap())
}

#[test]
fn load_and_resolve_topics() {
    let resolver = resolver();
    assert_eq!(resolver.fulfil_topic_name().unwrap(), "topic-transfer-fulfil");
    assert_eq!(
        resolver.transfer_by_id_topic_name().unwrap(),
        "topic-transfer-get"
    );
    assert_eq!(
        resolver.notification_topic_name().unwrap(),
        "topic-notification-event"
    );
    assert_eq!(
        resolver
            .create_general_topic_conf("transfer", "prepare")
            .unwrap(),
        GeneralTopicConf {
            topic_name: "topic-transfer-prepare".to_string(),
            key: None,
            partition: None,
            opaque_key: None,
        }
    );
}

#[test]
fn producer_and_consumer_config() {
    let resolver = resolver();

    let producer = resolver
        .kafka_config(Flow::Producer, "TRANSFER", "PREPARE")
        .unwrap();
    let properties = producer.settings.client_properties();
    assert_eq!(properties["client.id"], "ml-prod-transfer-prepare");
    assert_eq!(properties["queue.buffering.max.messages"], "10000000");

    let consumer = resolver
        .kafka_config(Flow::Consumer, "NOTIFICATION", "EVENT")
        .unwrap();
    assert_eq!(
        consumer.settings.options["messageAsJSON"],
        json!(true)
    );
    assert_eq!(
        serde_json::to_value(&consumer).unwrap()["rdkafkaConf"]["group.id"],
        json!("ml-group-notification-event")
    );
}

#[test]
fn missing_config() {
    let err = resolver()
        .kafka_config("CONSUMER", "POSITION", "COMMIT")
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "No config found for flow='CONSUMER', functionality='POSITION', action='COMMIT'"
    );
}

#[test]
fn missing_settings_file() {
    let err = KafkaSettings::load(fixture_path().with_file_name("missing.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn resolver_is_shareable_across_threads() {
    let resolver = resolver();
    let handles: Vec<_> = (0..4)
        .map(|partition| {
            let resolver = resolver.clone();
            std::thread::spawn(move || {
                resolver
                    .create_general_topic_conf("transfer", "fulfil")
                    .map(|conf| conf.with_partition(partition))
            })
        })
        .collect();

    for (partition, handle) in handles.into_iter().enumerate() {
        let conf = handle.join().unwrap().unwrap();
        assert_eq!(conf.topic_name, "topic-transfer-fulfil");
        assert_eq!(conf.partition, Some(partition as i32));
    }
}

#[test]
fn states() {
    assert_eq!(State::SUCCESS.code, 0);
    assert_eq!(State::FAILURE.description, "action failed");
}
