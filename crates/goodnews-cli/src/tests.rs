use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["goodnews-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn news_defaults_to_us_and_one_week() {
    let cli = Cli::try_parse_from(["goodnews-cli", "news"]).expect("expected valid cli args");

    match cli.command {
        Some(Commands::News {
            country,
            days,
            json,
        }) => {
            assert_eq!(country, "us");
            assert_eq!(days, 7);
            assert!(!json);
        }
        other => panic!("expected news command, got {other:?}"),
    }
}

#[test]
fn news_accepts_country_days_and_json() {
    let cli = Cli::try_parse_from([
        "goodnews-cli",
        "news",
        "--country",
        "bg",
        "--days",
        "30",
        "--json",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Some(Commands::News {
            country,
            days,
            json,
        }) => {
            assert_eq!(country, "bg");
            assert_eq!(days, 30);
            assert!(json);
        }
        other => panic!("expected news command, got {other:?}"),
    }
}

#[test]
fn news_accepts_non_positive_days() {
    let cli = Cli::try_parse_from(["goodnews-cli", "news", "--days", "-3"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::News { days: -3, .. })
    ));
}

#[test]
fn news_rejects_non_numeric_days() {
    let result = Cli::try_parse_from(["goodnews-cli", "news", "--days", "week"]);
    assert!(result.is_err());
}

#[test]
fn parses_countries_command() {
    let cli = Cli::try_parse_from(["goodnews-cli", "countries"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Countries)));
}
