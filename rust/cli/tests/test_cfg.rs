use holdem_cli::run;
use serde_json::Value;
use serial_test::serial;

const VARS: &[&str] = &[
    "HOLDEM_CONFIG",
    "HOLDEM_SEED",
    "HOLDEM_BIG_BLIND",
    "HOLDEM_STARTING_STACK",
    "HOLDEM_PLAYERS",
    "HOLDEM_TRIALS",
];

fn clear_env() {
    for v in VARS {
        unsafe {
            std::env::remove_var(v);
        }
    }
}

fn cfg() -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["holdem", "cfg"], &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_env();
    let (code, out, err) = cfg();
    assert_eq!(code, 0, "{err}");
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["starting_stack"]["value"], 500);
    assert_eq!(json["starting_stack"]["source"], "default");
    assert_eq!(json["big_blind"]["value"], 10);
    assert_eq!(json["players"]["value"], 4);
    assert_eq!(json["trials"]["value"], 1000);
    assert!(json["seed"]["value"].is_null());
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("holdem.toml");
    std::fs::write(&path, "big_blind = 20\nplayers = 6\nseed = 5\n").unwrap();
    unsafe {
        std::env::set_var("HOLDEM_CONFIG", &path);
        std::env::set_var("HOLDEM_SEED", "99");
    }

    let (code, out, err) = cfg();
    clear_env();
    assert_eq!(code, 0, "{err}");
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["big_blind"]["value"], 20);
    assert_eq!(json["big_blind"]["source"], "file");
    assert_eq!(json["players"]["value"], 6);
    assert_eq!(json["seed"]["value"], 99);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["trials"]["source"], "default");
}

#[test]
#[serial]
fn invalid_values_fail_with_exit_code_2() {
    clear_env();
    unsafe {
        std::env::set_var("HOLDEM_PLAYERS", "1");
    }
    let (code, _, err) = cfg();
    clear_env();
    assert_eq!(code, 2);
    assert!(err.contains("players must be between 2 and 23"), "{err}");

    unsafe {
        std::env::set_var("HOLDEM_TRIALS", "many");
    }
    let (code, _, err) = cfg();
    clear_env();
    assert_eq!(code, 2);
    assert!(err.contains("HOLDEM_TRIALS"), "{err}");
}

#[test]
#[serial]
fn unknown_keys_in_the_file_are_rejected() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("holdem.toml");
    std::fs::write(&path, "blinds = 3\n").unwrap();
    unsafe {
        std::env::set_var("HOLDEM_CONFIG", &path);
    }
    let (code, _, err) = cfg();
    clear_env();
    assert_eq!(code, 2);
    assert!(err.contains("cannot parse config file"), "{err}");
}

#[test]
#[serial]
fn equity_uses_configured_trials() {
    clear_env();
    unsafe {
        std::env::set_var("HOLDEM_TRIALS", "40");
        std::env::set_var("HOLDEM_PLAYERS", "3");
    }
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(
        ["holdem", "equity", "--hand", "KS", "KD", "--seed", "1"],
        &mut out,
        &mut err,
    );
    clear_env();
    assert_eq!(code, 0);
    let stdout = String::from_utf8_lossy(&out);
    assert!(stdout.contains("players=3 trials=40"), "{stdout}");
}
