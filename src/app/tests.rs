use super::*;

use rstest::rstest;

fn app(pattern: &str, quiet: bool) -> App {
    App::new(Options {
        pattern: Pattern::new(pattern),
        quiet,
    })
}

#[rstest]
#[case("c*e", &["cdsadjfke", "cdsadjfkz"], "Yes\nNo\n", false)]
#[case("*", &["", "anything"], "Yes\nYes\n", true)]
#[case("a?c", &["abc", "ac", "axc"], "Yes\nNo\nYes\n", false)]
#[case("?", &[], "", true)]
fn test_run_verdicts(
    #[case] pattern: &str,
    #[case] texts: &[&str],
    #[case] expected: &str,
    #[case] all: bool,
) {
    let mut buf = Vec::new();
    let result = app(pattern, false).run(texts, &mut buf).unwrap();
    assert_eq!(result, all);
    assert_eq!(String::from_utf8(buf).unwrap(), expected);
}

#[test]
fn test_run_quiet() {
    let mut buf = Vec::new();
    let all = app("a?c", true).run(["abc", "abd"], &mut buf).unwrap();
    assert!(!all);
    assert!(buf.is_empty());
}
