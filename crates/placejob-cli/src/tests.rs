use serde_json::json;

use super::*;

#[test]
fn parses_fetch_with_defaults() {
    let cli =
        Cli::try_parse_from(["placejob-cli", "fetch", "coffee shops"]).expect("valid cli args");
    let Commands::Fetch(args) = cli.command else {
        panic!("expected fetch");
    };
    assert_eq!(args.job_params(), JobParams::new("coffee shops"));
    assert!(args.base_url.is_none());
    assert!(args.timeout_secs.is_none());
}

#[test]
fn parses_fetch_with_overrides() {
    let cli = Cli::try_parse_from([
        "placejob-cli",
        "fetch",
        "bakeries",
        "--zoom",
        "17",
        "--fast-mode",
        "--lat",
        "40.71",
        "--lon",
        "-74.00",
        "--proxy",
        "socks5://a:1",
        "--proxy",
        "socks5://b:2",
        "--base-url",
        "http://scraper:8090",
        "--timeout-secs",
        "60",
    ])
    .expect("valid cli args");
    let Commands::Fetch(args) = cli.command else {
        panic!("expected fetch");
    };
    let params = args.job_params();
    assert_eq!(params.zoom, 17);
    assert!(params.fast_mode);
    assert_eq!(params.lon, "-74.00");
    assert_eq!(params.proxies, vec!["socks5://a:1", "socks5://b:2"]);
    assert_eq!(args.base_url.as_deref(), Some("http://scraper:8090"));
    assert_eq!(args.timeout_secs, Some(60));
}

#[test]
fn fetch_requires_query() {
    assert!(Cli::try_parse_from(["placejob-cli", "fetch"]).is_err());
}

#[test]
fn parses_decode_command() {
    let cli = Cli::try_parse_from(["placejob-cli", "decode", "out.csv"]).expect("valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Decode { ref file } if file == std::path::Path::new("out.csv")
    ));
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["placejob-cli"]).is_err());
}

#[test]
fn decode_csv_preserves_row_order() {
    let records = decode::decode_csv("title,review_count\nFirst,3\nSecond,4.0\n");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "First");
    assert_eq!(records[1].review_count, 4);
}

#[test]
fn decode_documents_accepts_array_or_object() {
    let many = decode::decode_documents(&json!([{ "title": "A" }, { "title": "B" }]));
    assert_eq!(many.len(), 2);

    let one = decode::decode_documents(&json!({ "title": "Solo", "longtitude": 2.5 }));
    assert_eq!(one.len(), 1);
    assert!((one[0].longitude - 2.5).abs() < 1e-9);
}
