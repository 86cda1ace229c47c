use super::*;

use clap::CommandFactory;

#[test]
fn test_command() {
    Opt::command().debug_assert();
}

#[test]
fn test_parse() {
    let opt = Opt::parse_from(["wmatch", "c*e", "cdsadjfke", "cdsadjfkz"]);
    assert_eq!(opt.pattern, "c*e");
    assert_eq!(opt.texts, vec!["cdsadjfke", "cdsadjfkz"]);
    assert!(!opt.quiet);

    let opt = Opt::parse_from(["wmatch", "-q", "?"]);
    assert_eq!(opt.pattern, "?");
    assert!(opt.texts.is_empty());
    assert!(opt.quiet);
}
