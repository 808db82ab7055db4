use super::*;

use nsi_core::Segmentation;

#[test]
fn parses_crawl_without_segmentations() {
    let cli = Cli::try_parse_from(["nsi-cli", "crawl"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Crawl { ref segmentations } if segmentations.is_empty()
    ));
}

#[test]
fn parses_repeated_segmentation_flags_in_order() {
    let cli = Cli::try_parse_from([
        "nsi-cli",
        "crawl",
        "--segmentation",
        "IND.NEW.POSTPAID.ACQ",
        "--segmentation",
        "IND.NEW.MIX.ACQ",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Crawl { segmentations } => {
            assert_eq!(segmentations, ["IND.NEW.POSTPAID.ACQ", "IND.NEW.MIX.ACQ"]);
        }
        other => panic!("expected Commands::Crawl, got: {other:?}"),
    }
}

#[test]
fn parses_availability_command() {
    let cli = Cli::try_parse_from(["nsi-cli", "availability", "SKU123"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Availability { ref stock_code } if stock_code == "SKU123"
    ));
}

#[test]
fn availability_requires_stock_code() {
    assert!(Cli::try_parse_from(["nsi-cli", "availability"]).is_err());
}

#[test]
fn parses_prices_command() {
    let cli = Cli::try_parse_from([
        "nsi-cli",
        "prices",
        "SKU123",
        "--offer",
        "OFF1",
        "--tariff",
        "TP40",
        "--contract-condition",
        "24A",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Prices {
            ref stock_code,
            ref offer,
            ref tariff,
            ref contract_condition,
        } if stock_code == "SKU123" && offer == "OFF1" && tariff == "TP40" && contract_condition == "24A"
    ));
}

#[test]
fn prices_requires_offer_identity() {
    let result = Cli::try_parse_from(["nsi-cli", "prices", "SKU123", "--offer", "OFF1"]);
    assert!(result.is_err(), "expected missing --tariff to be rejected");
}

#[test]
fn parses_photo_command() {
    let cli = Cli::try_parse_from(["nsi-cli", "photo", "http://plus.pl/telefon?deviceStockCode=X"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Photo { ref product_page_url } if product_page_url.ends_with("deviceStockCode=X")
    ));
}

#[test]
fn missing_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["nsi-cli"]).is_err());
}

// ---- segmentation selection ----

#[test]
fn requested_segmentations_win_over_configured() {
    let configured = [Segmentation::new("IND.NEW.POSTPAID.ACQ")];
    let selected =
        crawl::select_segmentations(&["SOHO.NEW.POSTPAID.ACQ".to_owned()], &configured).unwrap();
    assert_eq!(selected, [Segmentation::new("SOHO.NEW.POSTPAID.ACQ")]);
}

#[test]
fn configured_segmentations_used_when_none_requested() {
    let configured = [
        Segmentation::new("IND.NEW.POSTPAID.ACQ"),
        Segmentation::new("IND.NEW.MIX.ACQ"),
    ];
    let selected = crawl::select_segmentations(&[], &configured).unwrap();
    assert_eq!(selected, configured);
}

#[test]
fn no_segmentation_anywhere_is_an_error() {
    let err = crawl::select_segmentations(&[], &[]).unwrap_err();
    assert!(
        err.to_string().contains("--segmentation"),
        "expected hint about --segmentation, got: {err}"
    );
}
