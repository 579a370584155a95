use clap::Parser;

use super::*;

#[test]
fn parses_bare_browse_command() {
    let cli = Cli::try_parse_from(["vitrine-cli", "browse"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Browse(_))));
}

#[test]
fn parses_browse_with_filters() {
    let cli = Cli::try_parse_from([
        "vitrine-cli",
        "browse",
        "--category",
        "cat-rings",
        "--search",
        "moonstone",
        "--sort",
        "price-low",
        "--discount",
        "--min-price",
        "50",
        "--max-price",
        "300",
        "--page",
        "2",
    ])
    .expect("expected valid cli args");

    let Some(Commands::Browse(args)) = cli.command else {
        panic!("expected browse command");
    };
    assert_eq!(args.category.as_deref(), Some("cat-rings"));
    assert_eq!(args.search.as_deref(), Some("moonstone"));
    assert_eq!(args.sort, SortKey::PriceLow);
    assert!(args.discount);
    assert_eq!(args.min_price, Some(50.0));
    assert_eq!(args.max_price, Some(300.0));
    assert_eq!(args.page, 2);
    assert!(args.user.is_none());
}

#[test]
fn browse_defaults_to_featured_sort_page_one() {
    let cli = Cli::try_parse_from(["vitrine-cli", "browse"]).expect("expected valid cli args");
    let Some(Commands::Browse(args)) = cli.command else {
        panic!("expected browse command");
    };
    assert_eq!(args.sort, SortKey::Featured);
    assert_eq!(args.page, 1);
    assert!(!args.discount);
}

#[test]
fn rejects_unknown_sort_key() {
    let result = Cli::try_parse_from(["vitrine-cli", "browse", "--sort", "cheapest"]);
    assert!(result.is_err());
}

#[test]
fn parses_facets_command() {
    let cli = Cli::try_parse_from(["vitrine-cli", "facets"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Facets)));
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["vitrine-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}
