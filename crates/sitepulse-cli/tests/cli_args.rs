use clap::Parser;
use sitepulse::{AnalyticsCommand, Cli, Commands, ServicesCommand};

#[test]
fn parses_services_list_with_filters() {
    let cli = Cli::try_parse_from([
        "sitepulse",
        "services",
        "list",
        "--page",
        "2",
        "--status",
        "published",
        "--search",
        "web",
    ])
    .unwrap();

    match cli.command {
        Commands::Services {
            command:
                ServicesCommand::List {
                    page,
                    status,
                    search,
                    ..
                },
        } => {
            assert_eq!(page, Some(2));
            assert!(status.is_some());
            assert_eq!(search.as_deref(), Some("web"));
        }
        _ => panic!("expected services list"),
    }
}

#[test]
fn parses_track_with_referrer() {
    let cli = Cli::try_parse_from([
        "sitepulse",
        "track",
        "/services",
        "--referrer",
        "https://search.example",
    ])
    .unwrap();

    match cli.command {
        Commands::Track { path, referrer, .. } => {
            assert_eq!(path, "/services");
            assert_eq!(referrer.as_deref(), Some("https://search.example"));
        }
        _ => panic!("expected track"),
    }
}

#[test]
fn parses_analytics_export_dates() {
    let cli = Cli::try_parse_from([
        "sitepulse",
        "analytics",
        "export",
        "--out",
        "pages.csv",
        "--since",
        "2025-07-01",
    ])
    .unwrap();

    match cli.command {
        Commands::Analytics {
            command: AnalyticsCommand::Export { out, since, .. },
        } => {
            assert_eq!(out.to_str(), Some("pages.csv"));
            assert_eq!(
                since,
                Some(chrono::NaiveDate::from_ymd_opt(2025, 7, 1).unwrap())
            );
        }
        _ => panic!("expected analytics export"),
    }
}

#[test]
fn rejects_bad_date() {
    let result = Cli::try_parse_from([
        "sitepulse",
        "analytics",
        "summary",
        "--since",
        "July 1st",
    ]);
    assert!(result.is_err());
}

#[test]
fn global_flags_are_accepted_after_subcommand() {
    let cli = Cli::try_parse_from(["sitepulse", "dashboard", "--format", "json"]).unwrap();
    assert!(matches!(cli.command, Commands::Dashboard));
}
