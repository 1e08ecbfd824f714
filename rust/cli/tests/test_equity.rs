use holdem_cli::run;

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let mut argv = vec!["holdem"];
    argv.extend_from_slice(args);
    let code = run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn seeded_equity_is_reproducible() {
    let args = [
        "equity", "--hand", "AS", "AH", "--players", "4", "--trials", "500", "--seed", "42",
    ];
    let (code_a, out_a, _) = run_cli(&args);
    let (code_b, out_b, _) = run_cli(&args);
    assert_eq!(code_a, 0);
    assert_eq!(code_b, 0);
    assert_eq!(out_a, out_b);
    assert!(out_a.contains("equity: hand=[AS AH] players=4 trials=500 seed=42"));
    assert!(out_a.contains("Win rate: "));
    assert_eq!(out_a.matches("(random)").count(), 3);
}

#[test]
fn equity_rejects_a_pair_of_identical_cards() {
    let (code, _, err) = run_cli(&["equity", "--hand", "AS", "AS", "--trials", "10"]);
    assert_eq!(code, 2);
    assert!(err.contains("distinct"));
}

#[test]
fn equity_rejects_zero_trials() {
    let (code, _, err) = run_cli(&["equity", "--hand", "AS", "KD", "--trials", "0"]);
    assert_eq!(code, 2);
    assert!(err.contains("trials"));
}

#[test]
fn equity_rejects_an_oversized_table() {
    let (code, _, err) = run_cli(&[
        "equity", "--hand", "AS", "KD", "--players", "24", "--trials", "10",
    ]);
    assert_eq!(code, 2);
    assert!(err.contains("Invalid seat count"), "{err}");
}
