use crate::metadata::{AttributeMetadata, ExampleValue, FieldType};
use crate::{Context, Dispatch, Options, RuleCatalog, aggregate_verbose_with, aggregate_with};

fn meta(field: &str, rules: &[&str]) -> AttributeMetadata {
    aggregate_with(field, rules, "POST /api/test", &RuleCatalog::new(), &Context::default(), &Options::default())
}

fn text(value: &ExampleValue) -> &str {
    match value {
        ExampleValue::Text(s) => s,
        other => panic!("expected text value, got {other:?}"),
    }
}

fn integer(value: &ExampleValue) -> i64 {
    match value {
        ExampleValue::Integer(n) => *n,
        other => panic!("expected integer value, got {other:?}"),
    }
}

#[test]
fn description_examples() {
    // (field, rules, expected description)
    let cases: Vec<(&str, Vec<&str>, Vec<&str>)> = vec![
        ("colour", vec!["in:red,green,blue"], vec!["`red`, `green` or `blue`"]),
        ("colour", vec![r#"in:"red,ish",blue"#], vec!["`red,ish` or `blue`"]),
        ("colour", vec!["not_in:red,green"], vec!["Not in: `red` or `green`"]),
        ("name", vec!["alpha"], vec!["Only alphabetic characters allowed"]),
        ("slug", vec!["alpha_dash"], vec!["Allowed: alpha-numeric characters, as well as dashes and underscores."]),
        ("code", vec!["alpha_num"], vec!["Only alpha-numeric characters allowed"]),
        ("name", vec!["min:3"], vec!["Minimum: `3`"]),
        ("name", vec!["max:10"], vec!["Maximum: `10`"]),
        ("age", vec!["between:1,10"], vec!["Between: `1` and `10`"]),
        ("items", vec!["size:4"], vec!["Must have the size of `4`"]),
        ("pin", vec!["digits:4"], vec!["Must have an exact length of `4`"]),
        ("pin", vec!["digits_between:2,5"], vec!["Must have a length between `2` and `5`"]),
        ("new_password", vec!["different:password"], vec!["Must have a different value than parameter: `password`"]),
        ("confirmation", vec!["same:password"], vec!["Must be the same as `password`"]),
        ("avatar", vec!["file"], vec!["Must be a file upload"]),
        ("avatar", vec!["image"], vec!["Must be an image (jpeg, png, bmp, gif, or svg)"]),
        ("avatar", vec!["mimes:jpeg,png"], vec!["Allowed mime types: `jpeg` or `png`"]),
        ("doc", vec!["mimetypes:text/plain"], vec!["Allowed mime types: `text/plain`"]),
        ("payload", vec!["json"], vec!["Must be a valid JSON string."]),
        ("tz", vec!["timezone"], vec!["Must be a valid time zone, such as `Africa/Accra`"]),
        ("stamp", vec!["date_format:Y-m-d"], vec!["Date format: `Y-m-d`"]),
        ("wheels", vec!["required_if:type,car"], vec!["Required if `type` is `car`"]),
        (
            "wheels",
            vec!["required_unless:type,boat,kind,ship"],
            vec!["Required unless `type` is `boat` or `kind` is `ship`"],
        ),
        ("zip", vec!["required_with:street,city"], vec!["Required if the parameters `street` or `city` are present."]),
        (
            "zip",
            vec!["required_with_all:street,city,country"],
            vec!["Required if the parameters `street`, `city` and `country` are present."],
        ),
        ("phone", vec!["required_without:email"], vec!["Required if the parameters `email` are not present."]),
        (
            "phone",
            vec!["required_without_all:email,fax"],
            vec!["Required if the parameters `email` and `fax` are not present."],
        ),
        ("user_id", vec!["exists:users"], vec!["Valid user user_id"]),
        ("item", vec!["exists:order_items,code"], vec!["Valid order_item code"]),
        ("category", vec!["exists:categories,id"], vec!["Valid category id"]),
        ("slug", vec!["regex:/^[a-z]+,[0-9]{2}$/"], vec!["Must match this regular expression: `/^[a-z]+,[0-9]{2}$/`"]),
        ("start", vec!["after:2017-01-01"], vec!["Must be a date after: `Sunday, 01-Jan-17 00:00:00 UTC`"]),
        ("end", vec!["before:2017-01-01"], vec!["Must be a date preceding: `Sunday, 01-Jan-17 00:00:00 UTC`"]),
        ("name", vec!["required", "string", "min:3", "max:50"], vec!["Minimum: `3`", "Maximum: `50`"]),
    ];

    for (field, rules, expected) in cases {
        let attr = meta(field, &rules);
        assert_eq!(attr.description, expected, "rules: {rules:?}");
    }
}

#[test]
fn rules_without_description() {
    let silent = [
        "required", "accepted", "boolean", "array", "date", "email", "string", "integer", "numeric", "url",
        "active_url", "ip", "custom",
    ];
    for rule in silent {
        assert!(meta("field", &[rule]).description.is_empty(), "{rule} should not describe");
    }
}

#[test]
fn type_examples() {
    let cases: Vec<(Vec<&str>, FieldType)> = vec![
        (vec!["boolean"], FieldType::Boolean),
        (vec!["bool"], FieldType::Boolean),
        (vec!["integer"], FieldType::Integer),
        (vec!["int"], FieldType::Integer),
        (vec!["Integer "], FieldType::Integer),
        (vec!["numeric"], FieldType::Numeric),
        (vec!["array"], FieldType::Array),
        (vec!["date"], FieldType::Date),
        (vec!["email"], FieldType::Email),
        (vec!["url"], FieldType::Url),
        (vec!["active_url"], FieldType::Url),
        (vec!["ip"], FieldType::Ip),
        (vec!["file"], FieldType::File),
        (vec!["image"], FieldType::Image),
        (vec!["json"], FieldType::String),
        (vec!["regex:/x/"], FieldType::String),
        (vec!["custom"], FieldType::Custom),
        (vec!["digits:4"], FieldType::Numeric),
        (vec!["digits_between:1,3"], FieldType::Numeric),
        (vec!["after:2017-01-01"], FieldType::Date),
        (vec!["before:2017-01-01"], FieldType::Date),
        (vec!["date_format:Y"], FieldType::Date),
        (vec!["accepted"], FieldType::Boolean),
        (vec!["between:1,2"], FieldType::Numeric),
        (vec!["string", "between:1,2"], FieldType::String),
        (vec!["integer", "string"], FieldType::String),
        (vec!["string", "digits:3"], FieldType::Numeric),
        (vec!["in:a,b", "alpha", "min:1"], FieldType::String),
        (vec!["timezone"], FieldType::String),
        (vec![], FieldType::String),
    ];

    for (rules, expected) in cases {
        assert_eq!(meta("field", &rules).field_type, Some(expected), "rules: {rules:?}");
    }
}

#[test]
fn required_comes_from_required_and_accepted_only() {
    assert!(meta("f", &["required"]).required);
    assert!(meta("f", &["Required"]).required);
    assert!(meta("f", &["accepted"]).required);
    assert!(!meta("f", &["required_if:a,b"]).required);
    assert!(!meta("f", &["required_with:a"]).required);
    assert!(!meta("f", &["string", "max:3"]).required);
}

#[test]
fn accepted_and_boolean_are_true() {
    assert_eq!(meta("terms", &["accepted"]).value, ExampleValue::Bool(true));
    assert_eq!(meta("flag", &["boolean"]).value, ExampleValue::Bool(true));
}

#[test]
fn in_picks_a_listed_value() {
    for i in 0..25 {
        let attr = aggregate_with(
            "colour",
            ["in:red,green,blue"],
            &format!("seed-{i}"),
            &RuleCatalog::new(),
            &Context::default(),
            &Options::default(),
        );
        assert!(["red", "green", "blue"].contains(&text(&attr.value)));
    }
}

#[test]
fn digits_width_boundary() {
    for n in 1..=8usize {
        let rule = format!("digits:{n}");
        let attr = meta("pin", &[rule.as_str()]);
        assert_eq!(integer(&attr.value).to_string().len(), n, "{rule}");
    }
    for n in [9usize, 10, 12, 30] {
        let rule = format!("digits:{n}");
        let attr = meta("pin", &[rule.as_str()]);
        let digits = text(&attr.value);
        assert_eq!(digits.len(), n, "{rule}");
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }
}

#[test]
fn digits_rejects_unusable_counts() {
    for rule in ["digits:0", "digits:-3", "digits:abc", "digits:100000"] {
        let attr = meta("pin", &[rule]);
        assert_eq!(attr.field_type, Some(FieldType::Numeric), "{rule}");
        assert!(matches!(attr.value, ExampleValue::Text(ref w) if !w.chars().all(|c| c.is_ascii_digit())), "{rule}");
    }
}

#[test]
fn numeric_bounds() {
    for i in 0..20 {
        let seed = format!("bounds-{i}");
        let ctx = Context::default();
        let opts = Options::default();
        let catalog = RuleCatalog::new();

        let max = aggregate_with("n", ["integer", "max:10"], &seed, &catalog, &ctx, &opts);
        assert!((0..=10).contains(&integer(&max.value)));

        let min = aggregate_with("n", ["numeric", "min:100"], &seed, &catalog, &ctx, &opts);
        assert!(integer(&min.value) >= 100);

        let between = aggregate_with("n", ["between:5,7"], &seed, &catalog, &ctx, &opts);
        assert!((5..=7).contains(&integer(&between.value)));

        let decimal = aggregate_with("n", ["between:1.5,3.9"], &seed, &catalog, &ctx, &opts);
        assert!((1..=3).contains(&integer(&decimal.value)));
    }
}

#[test]
fn min_on_text_keeps_word() {
    let attr = meta("name", &["string", "min:3"]);
    assert!(matches!(attr.value, ExampleValue::Text(_)));
}

#[test]
fn date_bounds_shift_by_one_day() {
    assert_eq!(text(&meta("start", &["after:2017-01-01"]).value), "Monday, 02-Jan-17 00:00:00 UTC");
    assert_eq!(text(&meta("end", &["before:2017-01-01"]).value), "Saturday, 31-Dec-16 00:00:00 UTC");
    assert_eq!(
        text(&meta("start", &["after:2017-01-01 13:45:00"]).value),
        "Monday, 02-Jan-17 13:45:00 UTC"
    );
}

#[test]
fn relative_date_bounds_use_reference_time() {
    // Context::default() is fixed at 2013-02-12 04:30:00.
    let attr = meta("start", &["after:tomorrow"]);
    assert!(attr.description[0].starts_with("Must be a date after: `Wednesday, 13-Feb-13"), "{:?}", attr.description);
    assert!(text(&attr.value).starts_with("Thursday, 14-Feb-13"));
}

#[test]
fn unparseable_date_drops_description_and_value() {
    let details = aggregate_verbose_with(
        "start",
        ["after:whenever it suits"],
        "seed",
        &RuleCatalog::new(),
        &Context::default(),
        &Options::default(),
    );
    let attr = &details.metadata;
    assert_eq!(attr.field_type, Some(FieldType::Date));
    assert!(attr.description.is_empty());
    assert!(!text(&attr.value).contains("UTC"));

    let Dispatch::Applied { dropped, .. } = &details.outcomes[0].dispatch else { panic!("after is a known rule") };
    assert_eq!(dropped.len(), 2);
}

#[test]
fn date_bounds_at_calendar_edges_do_not_shift() {
    let latest = format!("after:{}", chrono::NaiveDate::MAX.format("%Y-%m-%d"));
    let earliest = format!("before:{}", chrono::NaiveDate::MIN.format("%Y-%m-%d"));
    for rule in [latest, earliest] {
        let attr = meta("edge", &[rule.as_str()]);
        assert_eq!(attr.field_type, Some(FieldType::Date), "{rule}");
        assert!(!text(&attr.value).contains("UTC"), "{rule}: {:?}", attr.value);
    }
}

#[test]
fn date_format_renders_reference_time() {
    assert_eq!(text(&meta("day", &["date_format:Y-m-d"]).value), "2013-02-12");
    assert_eq!(text(&meta("day", &["date_format:H:i"]).value), "04:30");
    assert_eq!(text(&meta("day", &["date_format:D d M Y"]).value), "Tue 12 Feb 2013");
    // Parameters are comma separated, so only `D` survives here.
    assert_eq!(text(&meta("day", &["date_format:D, d M Y"]).value), "Tue");
}

#[test]
fn fixed_values() {
    assert_eq!(text(&meta("payload", &["json"]).value), r#"["foo","bar","baz"]"#);
    assert_eq!(text(&meta("x", &["custom"]).value), "oi");
}

#[test]
fn generated_value_shapes() {
    let email = meta("email", &["email"]);
    assert!(text(&email.value).contains("@example."));

    let url = meta("homepage", &["active_url"]);
    assert!(text(&url.value).starts_with("http"));

    let ip = meta("addr", &["ip"]);
    assert!(text(&ip.value).parse::<std::net::Ipv4Addr>().is_ok());

    let date = meta("born", &["date"]);
    assert!(chrono::NaiveDate::parse_from_str(text(&date.value), "%Y-%m-%d").is_ok());

    let tz = meta("tz", &["timezone"]);
    assert!(text(&tz.value).parse::<chrono_tz::Tz>().is_ok());

    let number = meta("count", &["integer"]);
    assert!((0..=999_999_999).contains(&integer(&number.value)));
}

#[test]
fn missing_parameters_drop_only_failing_effects() {
    let attr = meta("x", &["between:5"]);
    assert_eq!(attr.field_type, Some(FieldType::Numeric));
    assert!(attr.description.is_empty());

    let attr = meta("x", &["in:"]);
    assert!(attr.description.is_empty());
    assert!(matches!(attr.value, ExampleValue::Text(ref w) if !w.is_empty()));

    let attr = meta("x", &["date_format"]);
    assert_eq!(attr.field_type, Some(FieldType::Date));
    assert!(attr.description.is_empty());
}

#[test]
fn unknown_rules_leave_metadata_untouched() {
    assert_eq!(meta("x", &["required", "sometimes", "nullable"]), meta("x", &["required"]));
}
