use stock_sentiment::{ConfigError, Source};

#[test]
fn source_names_are_case_insensitive() {
    assert_eq!("Yahoo".parse::<Source>().unwrap(), Source::Yahoo);
    assert_eq!("yahoo".parse::<Source>().unwrap(), Source::Yahoo);
    assert_eq!("YAHOO".parse::<Source>().unwrap(), Source::Yahoo);
    assert_eq!(Source::default(), Source::Yahoo);
}

#[test]
fn unknown_source_is_a_configuration_error() {
    match "Bloomberg".parse::<Source>() {
        Err(ConfigError::UnsupportedSource(name)) => assert_eq!(name, "Bloomberg"),
        other => panic!("expected UnsupportedSource, got {other:?}"),
    }
}
