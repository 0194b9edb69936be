use clap::Parser;
use quickstart::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("quickstart")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["./template", "--name", "My Plugin"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.template, PathBuf::from("./template"));
    assert_eq!(parsed.name, "My Plugin");
    assert!(parsed.output_dir.is_none());
    assert!(parsed.id.is_none());
    assert_eq!(parsed.description, "");
    assert_eq!(parsed.author, "");
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "./template",
        "./output",
        "--name",
        "My Plugin",
        "--id",
        "custom-id",
        "--description",
        "A test plugin.",
        "--author",
        "Jane Doe",
        "--verbose",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.output_dir, Some(PathBuf::from("./output")));
    assert_eq!(parsed.id.as_deref(), Some("custom-id"));
    assert_eq!(parsed.description, "A test plugin.");
    assert_eq!(parsed.author, "Jane Doe");
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-v", "-n", "My Plugin", "./template"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.verbose);
    assert_eq!(parsed.name, "My Plugin");
}

#[test]
fn test_missing_name() {
    let args = make_args(&["./template"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_missing_template() {
    let args = make_args(&["--name", "My Plugin"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["./template", "./output", "extra", "--name", "My Plugin"]);
    assert!(Args::try_parse_from(args).is_err());
}
