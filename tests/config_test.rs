use std::path::PathBuf;

use ascii_blast::config::{Config, Invocation, DEFAULT_LOG_PATH};

#[test]
fn no_args_runs_with_defaults() {
    let inv = Config::default().with_args(Vec::<String>::new()).unwrap();
    assert_eq!(inv, Invocation::Run(Config::default()));
}

#[test]
fn debug_aliases() {
    for flag in ["-d", "-debug", "--debug"] {
        match Config::default().with_args([flag]).unwrap() {
            Invocation::Run(c) => assert!(c.debug, "{}", flag),
            Invocation::Help => panic!("unexpected help for {}", flag),
        }
    }
}

#[test]
fn help_wins() {
    let inv = Config::default().with_args(["--debug", "--help"]).unwrap();
    assert_eq!(inv, Invocation::Help);
}

#[test]
fn unknown_argument_is_an_error() {
    let err = Config::default().with_args(["--fast"]).unwrap_err();
    assert!(err.to_string().contains("--fast"));
}

#[test]
fn args_apply_on_top_of_env() {
    let base = Config::from_lookup(|k| (k == "ASCII_BLAST_LOG_PATH").then(|| "blast.log".to_string()));
    match base.with_args(["--debug"]).unwrap() {
        Invocation::Run(c) => {
            assert!(c.debug);
            assert_eq!(c.log_path, PathBuf::from("blast.log"));
        }
        Invocation::Help => panic!("unexpected help"),
    }
}

#[test]
fn env_debug_accepts_one_and_true_only() {
    for (v, want) in [("1", true), ("true", true), ("True", true), ("0", false), ("yes", false)] {
        let c = Config::from_lookup(|k| (k == "ASCII_BLAST_DEBUG").then(|| v.to_string()));
        assert_eq!(c.debug, want, "{}", v);
        assert_eq!(c.log_path, PathBuf::from(DEFAULT_LOG_PATH));
    }
}
