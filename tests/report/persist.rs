use std::fs;
use std::path::PathBuf;

use indexmap::IndexMap;
use stock_sentiment::{ArticleSentiment, ConfigError, ReportPath, TickerReport};
use stock_sentiment::report::OutputFormat;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("stock-sentiment-{}-{name}", std::process::id()))
}

fn sample_report() -> TickerReport {
    let mut tickers = IndexMap::new();
    tickers.insert(
        "ACME".to_string(),
        ArticleSentiment::from([
            ("Acme beats estimates".to_string(), 1.5),
            ("Acme trims guidance".to_string(), -0.75),
        ]),
    );
    tickers.insert("GLBX".to_string(), ArticleSentiment::new());
    TickerReport::from(tickers)
}

#[test]
fn json_and_txt_extensions_are_accepted() {
    assert_eq!(ReportPath::parse("out.json").unwrap().format(), OutputFormat::Json);
    assert_eq!(ReportPath::parse("out/report.TXT").unwrap().format(), OutputFormat::Txt);
}

#[test]
fn other_extensions_are_configuration_errors() {
    for bad in ["report.csv", "report", "report.json.bak"] {
        match ReportPath::parse(bad) {
            Err(ConfigError::OutputExtension(path)) => assert_eq!(path, bad),
            other => panic!("expected OutputExtension for {bad}, got {other:?}"),
        }
    }
}

#[test]
fn report_round_trips_through_json() {
    let report = sample_report();
    let target = ReportPath::parse(temp_path("roundtrip.json")).unwrap();

    report.write_json(&target).unwrap();
    let back = TickerReport::read_json(target.path()).unwrap();
    fs::remove_file(target.path()).ok();

    assert_eq!(back, report);
}

#[test]
fn summed_confidences_read_back_bit_for_bit() {
    let mut articles = ArticleSentiment::new();
    articles.insert("Mixed quarter".to_string(), 0.8 + -0.2 + 0.0987654321);
    articles.insert("Long tail".to_string(), 2.0831290322580642);
    let mut total = 0.0;
    for i in 1..=200u32 {
        let confidence = 0.005 + f64::from(i) * 0.00497;
        total += if i % 3 == 0 { -confidence } else { confidence };
        articles.insert(format!("article {i}"), total);
    }
    let report = TickerReport::from(IndexMap::from([("ACME".to_string(), articles)]));
    let target = ReportPath::parse(temp_path("floats.json")).unwrap();

    report.write_json(&target).unwrap();
    let back = TickerReport::read_json(target.path()).unwrap();
    fs::remove_file(target.path()).ok();

    let (written, read) = (report.get("ACME").unwrap(), back.get("ACME").unwrap());
    for (title, score) in written {
        assert_eq!(read[title].to_bits(), score.to_bits(), "{title}: {score}");
    }
    assert_eq!(back, report);
}

#[test]
fn tickers_and_articles_keep_insertion_order() {
    let mut tickers = IndexMap::new();
    tickers.insert(
        "ZETA".to_string(),
        ArticleSentiment::from([
            ("Zeta widens losses".to_string(), -1.0),
            ("Analysts upgrade Zeta".to_string(), 0.5),
        ]),
    );
    tickers.insert("ACME".to_string(), ArticleSentiment::new());
    let report = TickerReport::from(tickers);

    let text = serde_json::to_string(&report).unwrap();
    assert_eq!(
        text,
        r#"{"ZETA":{"Zeta widens losses":-1.0,"Analysts upgrade Zeta":0.5},"ACME":{}}"#
    );
    let order: Vec<&str> = report.iter().map(|(ticker, _)| ticker).collect();
    assert_eq!(order, ["ZETA", "ACME"]);
}

#[test]
fn txt_output_holds_the_same_indented_json() {
    let report = sample_report();
    let target = ReportPath::parse(temp_path("report.txt")).unwrap();

    report.write_json(&target).unwrap();
    let text = fs::read_to_string(target.path()).unwrap();
    fs::remove_file(target.path()).ok();

    assert!(text.starts_with("{\n    \"ACME\": {\n        \"Acme beats estimates\": 1.5,"));
    assert!(text.contains("\"GLBX\": {}"));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["ACME"]["Acme trims guidance"], -0.75);
}

#[test]
fn empty_report_serializes_as_empty_object() {
    assert_eq!(serde_json::to_string(&TickerReport::new()).unwrap(), "{}");
}
