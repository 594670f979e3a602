use declarg::{HelpStyle, OptionParser, OptionSpec, ParseError};

fn widget_specs() -> Vec<OptionSpec> {
    vec![
        OptionSpec::flag("verbose", Some('v'), "Make the output verbose.", false),
        OptionSpec::string("colour", Some('c'), "The widget colour.", true),
        OptionSpec::enumeration(
            "mode",
            Some('m'),
            "The mode of operation.",
            vec!["aaa", "bbb", "ccc"],
            false,
        ),
        OptionSpec::integer("count", Some('n'), "Number of widgets.", false)
            .int_range(1, 10)
            .default_int(4),
        OptionSpec::real("ratio", Some('r'), "The widget ratio.", false).default_real(31.6227),
        OptionSpec::version(),
        OptionSpec::help(),
    ]
}

#[test]
fn full_invocation() {
    // Setup
    let parser = OptionParser::new(widget_specs());
    assert_eq!(parser.warnings(), Vec::<String>::default());

    // Execute
    let parsed = parser
        .process(
            &["widgets", "-v", "--colour", "blue", "-m", "bbb", "--count", "7", "one", "two"],
            true,
        )
        .unwrap();

    // Verify
    assert!(parsed.values().get("verbose").flag);
    assert_eq!(parsed.values().get("colour").str, "blue");
    assert_eq!(parsed.values().get("mode").str, "bbb");
    assert_eq!(parsed.values().get("mode").ival, 1);
    assert_eq!(parsed.values().get("count").ival, 7);
    // Untouched options keep their defaults.
    assert_eq!(parsed.values().get("ratio").real, 31.6227);
    assert!(parsed.values().get("ratio").is_defined);
    assert_eq!(
        parsed.parameters(),
        vec!["one".to_string(), "two".to_string()]
    );
}

#[test]
fn defaults_only() {
    // Setup
    let parser = OptionParser::new(widget_specs());

    // Execute
    let error = parser.process(&["widgets"], true).unwrap_err();

    // Verify
    // The only required option has no default, so a bare invocation fails.
    assert_eq!(
        error,
        ParseError::MissingRequired {
            name: "-c, --colour".to_string()
        }
    );
    assert_eq!(error.to_string(), "a value is required for: -c, --colour");
}

#[test]
fn out_of_range_count() {
    // Setup
    let parser = OptionParser::new(widget_specs());

    // Execute
    let error = parser
        .process(&["widgets", "-c", "blue", "--count", "15"], true)
        .unwrap_err();

    // Verify
    assert_eq!(
        error.to_string(),
        "invalid value for -n, --count: 15 is out of range 1 to 10."
    );
}

#[test]
fn unknown_enumeration_value() {
    // Setup
    let parser = OptionParser::new(widget_specs());

    // Execute
    let error = parser
        .process(&["widgets", "-c", "blue", "-m", "zzz"], true)
        .unwrap_err();

    // Verify
    assert_eq!(
        error.to_string(),
        "invalid value for -m, --mode: zzz is not one of (aaa, bbb, ccc)."
    );
}

#[test]
fn terminator_with_no_specs() {
    // Setup
    let parser = OptionParser::new(Vec::default());

    // Execute
    let parsed = parser
        .process(&["program", "--", "--looks-like-option"], true)
        .unwrap();

    // Verify
    assert_eq!(
        parsed.parameters(),
        vec!["--looks-like-option".to_string()]
    );
}

#[test]
fn help_wins_over_required() {
    // Setup
    let parser = OptionParser::new(widget_specs());

    // Execute
    // The required --colour is absent; the help singleton succeeds anyway.
    let parsed = parser.process(&["widgets", "--help"], true).unwrap();

    // Verify
    let help = parsed.values().get("help");
    assert!(help.is_defined);
    assert!(help.flag);
    assert!(!parsed.values().get("colour").is_defined);
}

#[test]
fn help_text_covers_every_option() {
    // Setup
    let parser = OptionParser::new(widget_specs());

    // Execute
    let help = parser.option_help(&HelpStyle::default());

    // Verify
    for name in [
        "-v, --verbose",
        "-c, --colour",
        "-m, --mode",
        "-n, --count",
        "-r, --ratio",
        "-V, --version",
        "-h, --help",
    ] {
        assert!(help.contains(name), "'{help}' does not contain '{name}'");
    }

    assert!(help.contains("Required."));
    assert!(help.contains("Allowed values: (aaa, bbb, ccc)."));
    assert!(help.contains("Range: 1 to 10."));
    assert!(help.contains("Default value: 4."));
    assert!(help.contains("Default value: 31.6227."));
}

#[test]
fn conflicting_specifications_always_fail() {
    // Setup
    let parser = OptionParser::new(vec![
        OptionSpec::flag("twice", Some('t'), "The first.", false),
        OptionSpec::string("twice", Some('u'), "The second.", false),
    ]);

    // Verify
    assert_eq!(
        parser.warnings(),
        &["conflicting option names: -t, --twice and -u, --twice".to_string()]
    );

    for tokens in [vec!["program"], vec!["program", "-t"]] {
        let error = parser.process(tokens.as_slice(), true).unwrap_err();
        assert_eq!(error.to_string(), "option specification errors");
    }
}
