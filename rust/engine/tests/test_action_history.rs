use holdem_engine::engine::Game;
use holdem_engine::history::Street;
use holdem_engine::player::{Player, PlayerAction};
use holdem_engine::policy::{DecisionPolicy, Unattended};

fn played_game(seed: u64) -> Game {
    let players = ["Alice", "Bob", "Carol"]
        .iter()
        .map(|n| Player::new(*n, 500, DecisionPolicy::RuleBased))
        .collect();
    let mut game = Game::with_seed(players, 10, seed).unwrap();
    game.play_hand(&mut Unattended).unwrap();
    game
}

#[test]
fn every_call_is_recorded_with_its_street() {
    let game = played_game(12);
    assert_eq!(game.seed(), Some(12));
    // three calls per street
    let actions = game.actions();
    assert_eq!(actions.len(), 12);
    assert!(actions
        .iter()
        .all(|a| a.action == PlayerAction::Call && a.amount == 10));
    let streets = [Street::Preflop, Street::Flop, Street::Turn, Street::River];
    for (i, street) in streets.iter().enumerate() {
        let names: Vec<&str> = actions[i * 3..i * 3 + 3]
            .iter()
            .inspect(|a| assert_eq!(a.street, *street))
            .map(|a| a.player.as_str())
            .collect();
        assert_eq!(names, ["Alice", "Bob", "Carol"]);
    }
}

#[test]
fn payout_is_kept_until_the_next_hand() {
    let mut game = played_game(5);
    let payout = game.last_payout().cloned().expect("paid out");
    assert!(!payout.winners.is_empty());
    assert_eq!(
        payout.share * payout.winners.len() as u32 + payout.burned,
        120
    );

    game.start_next_hand().unwrap();
    assert!(game.last_payout().is_none());
    assert!(game.actions().is_empty());
}
