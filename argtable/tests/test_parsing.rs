use argtable::{
    callback, count, insert, store, store_true, toggle, Error, Opt, OptionState, OptionTable,
};

/// `flag` (`-f`, toggles) and `arg` (`-a`, stores an integer).
fn flag_and_arg(args: &[&str]) -> Result<(bool, i32, OptionState), Error> {
    let mut flag = false;
    let mut arg = 0;
    let state = OptionTable::new()
        .option(Opt::flag("flag", toggle(&mut flag)).short('f'))
        .option(Opt::value("arg", store(&mut arg)).short('a'))
        .parse(args)?;
    Ok((flag, arg, state))
}

#[test]
fn test_defaults_untouched() -> Result<(), Error> {
    let (flag, arg, state) = flag_and_arg(&[])?;
    assert!(!flag);
    assert_eq!(arg, 0);
    assert!(state.is_empty());
    Ok(())
}

#[test]
fn test_cluster_with_next_value() -> Result<(), Error> {
    let (flag, arg, _) = flag_and_arg(&["-fa", "1"])?;
    assert!(flag);
    assert_eq!(arg, 1);
    Ok(())
}

#[test]
fn test_long_forms() -> Result<(), Error> {
    let (flag, arg, _) = flag_and_arg(&["--flag", "--arg=7"])?;
    assert!(flag);
    assert_eq!(arg, 7);
    Ok(())
}

#[test]
fn test_missing_short_value() {
    assert_eq!(
        flag_and_arg(&["-a"]).unwrap_err(),
        Error::MissingArg("-a".into())
    );
}

#[test]
fn test_value_spellings_are_equivalent() -> Result<(), Error> {
    let spellings: [&[&str]; 4] = [&["-a1"], &["-a", "1"], &["--arg=1"], &["--arg", "1"]];
    for args in spellings {
        let (flag, arg, state) = flag_and_arg(args)?;
        assert!(!flag, "{args:?}");
        assert_eq!(arg, 1, "{args:?}");
        assert_eq!(state.len(), 1, "{args:?}");
    }
    Ok(())
}

#[test]
fn test_cluster_inline_value() -> Result<(), Error> {
    let expected = flag_and_arg(&["-f", "-a", "1"])?;
    assert_eq!(flag_and_arg(&["-fa1"])?, expected);
    assert_eq!(flag_and_arg(&["-fa", "1"])?, expected);
    Ok(())
}

#[test]
fn test_value_swallows_rest_of_cluster() -> Result<(), Error> {
    // "f" after "a" is part of the value, not another flag
    let mut flag = false;
    let mut value = String::new();
    OptionTable::new()
        .option(Opt::flag("flag", toggle(&mut flag)).short('f'))
        .option(Opt::value("arg", store(&mut value)).short('a'))
        .parse(&["-af"])?;
    assert!(!flag);
    assert_eq!(value, "f");
    Ok(())
}

#[test]
fn test_next_token_value_is_taken_verbatim() -> Result<(), Error> {
    let mut value = String::new();
    let mut other = String::new();
    OptionTable::new()
        .option(Opt::value("arg", store(&mut value)).short('a'))
        .option(Opt::value("other", store(&mut other)))
        .parse(&["-a", "--", "--other", "-x"])?;
    assert_eq!(value, "--");
    assert_eq!(other, "-x");
    Ok(())
}

#[test]
fn test_long_value_with_equals() -> Result<(), Error> {
    let mut value = String::new();
    OptionTable::new()
        .option(Opt::value("define", store(&mut value)))
        .parse(&["--define=key=value"])?;
    assert_eq!(value, "key=value");
    Ok(())
}

#[test]
fn test_empty_inline_long_value() -> Result<(), Error> {
    let mut value = String::from("unchanged");
    OptionTable::new()
        .option(Opt::value("name", store(&mut value)))
        .parse(&["--name="])?;
    assert_eq!(value, "");
    Ok(())
}

#[test]
fn test_repeated_counting() -> Result<(), Error> {
    let mut verbose = 0;
    let mut table = OptionTable::new();
    let id = table.push(Opt::flag("verbose", count(&mut verbose)).short('v'));
    let state = table.parse(&["-v", "-v", "-v"])?;
    assert_eq!(state.count(id), 3);
    drop(table);
    assert_eq!(verbose, 3);
    Ok(())
}

#[test]
fn test_clustered_counting() -> Result<(), Error> {
    let mut verbose = 0u8;
    let mut table = OptionTable::new().option(Opt::flag("verbose", count(&mut verbose)).short('v'));
    let state = table.parse(&["-vvv", "--verbose"])?;
    let id = table.lookup("verbose").unwrap();
    assert_eq!(state.count(id), 4);
    drop(table);
    assert_eq!(verbose, 4);
    Ok(())
}

#[test]
fn test_flags_get_no_value() -> Result<(), Error> {
    let mut seen = Vec::new();
    OptionTable::new()
        .option(
            Opt::flag(
                "flag",
                callback(|value| {
                    seen.push(value.map(str::to_string));
                    Ok(())
                }),
            )
            .short('f'),
        )
        .parse(&["-f", "--flag", "-ff"])?;
    assert_eq!(seen, vec![None, None, None, None]);
    Ok(())
}

#[test]
fn test_positionals_in_order() -> Result<(), Error> {
    let mut infile = String::new();
    let mut outfile = String::new();
    let mut verbose = false;
    let state = OptionTable::new()
        .option(Opt::positional("INFILE", store(&mut infile)))
        .option(Opt::flag("verbose", store_true(&mut verbose)).short('v'))
        .option(Opt::positional("OUTFILE", store(&mut outfile)))
        .parse(&["in.txt", "-v", "out.txt"])?;
    assert_eq!(state.len(), 3);
    assert_eq!(infile, "in.txt");
    assert_eq!(outfile, "out.txt");
    assert!(verbose);
    Ok(())
}

#[test]
fn test_double_dash_forces_positionals() -> Result<(), Error> {
    let mut verbose = false;
    let mut rest = Vec::<String>::new();
    OptionTable::new()
        .option(Opt::flag("verbose", store_true(&mut verbose)).short('v'))
        .option(Opt::remainder("ARGS", insert(&mut rest)))
        .parse(&["a", "--", "-v", "--verbose", "--", "b"])?;
    assert!(!verbose);
    assert_eq!(rest, ["a", "-v", "--verbose", "--", "b"]);
    Ok(())
}

#[test]
fn test_double_dash_without_positionals() {
    let mut verbose = false;
    let err = OptionTable::new()
        .option(Opt::flag("verbose", store_true(&mut verbose)).short('v'))
        .parse(&["--", "-v"])
        .unwrap_err();
    assert_eq!(err, Error::UnknownArgument("-v".into()));
}

#[test]
fn test_lone_dash_is_positional() -> Result<(), Error> {
    let mut input = String::new();
    OptionTable::new()
        .option(Opt::positional("INPUT", store(&mut input)))
        .parse(&["-"])?;
    assert_eq!(input, "-");
    Ok(())
}

#[test]
fn test_multi_value_positional() -> Result<(), Error> {
    let mut pair = Vec::<i32>::new();
    let mut last = String::new();
    let mut table = OptionTable::new()
        .option(Opt::positional("PAIR", insert(&mut pair)).nargs(2))
        .option(Opt::positional("LAST", store(&mut last)));
    let state = table.parse(&["1", "2", "three"])?;
    assert_eq!(state.count(table.lookup("PAIR").unwrap()), 2);
    assert_eq!(state.count(table.lookup("LAST").unwrap()), 1);
    drop(table);
    assert_eq!(pair, [1, 2]);
    assert_eq!(last, "three");
    Ok(())
}

#[test]
fn test_multi_value_option() -> Result<(), Error> {
    let mut point = Vec::<f64>::new();
    let mut table = OptionTable::new().option(Opt::new("point", 2, insert(&mut point)).short('p'));
    let state = table.parse(&["-p1.5", "2", "--point", "3", "-4"])?;
    assert_eq!(state.count(table.lookup("point").unwrap()), 2);
    drop(table);
    assert_eq!(point, [1.5, 2.0, 3.0, -4.0]);
    Ok(())
}

#[test]
fn test_multi_value_option_runs_out() {
    let mut point = Vec::<f64>::new();
    let err = OptionTable::new()
        .option(Opt::new("point", 2, insert(&mut point)))
        .parse(&["--point=1"])
        .unwrap_err();
    assert_eq!(err, Error::MissingArg("--point".into()));
}

#[test]
fn test_unicode_short_options() -> Result<(), Error> {
    let mut flag = false;
    let mut value = String::new();
    OptionTable::new()
        .option(Opt::flag("lambda", store_true(&mut flag)).short('λ'))
        .option(Opt::value("mu", store(&mut value)).short('μ'))
        .parse(&["-λμ€"])?;
    assert!(flag);
    assert_eq!(value, "€");
    Ok(())
}

#[test]
fn test_idempotent() -> Result<(), Error> {
    let args = ["-vv", "--level=3", "file", "--", "-x"];
    let run = || -> Result<(u32, u8, Vec<String>, OptionState), Error> {
        let mut verbose = 0;
        let mut level = 0;
        let mut files = Vec::new();
        let state = OptionTable::new()
            .option(Opt::flag("verbose", count(&mut verbose)).short('v'))
            .option(Opt::value("level", store(&mut level)))
            .option(Opt::remainder("FILE", insert(&mut files)))
            .parse(&args)?;
        Ok((verbose, level, files, state))
    };
    let first = run()?;
    let second = run()?;
    assert_eq!(first, second);
    assert_eq!(first.0, 2);
    assert_eq!(first.1, 3);
    assert_eq!(first.2, ["file", "-x"]);
    Ok(())
}
