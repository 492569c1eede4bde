//! End-to-end tests for the line console.

use strictly_timeline::{BoardStyle, Console, Player, SessionConfig, SortOrder, Verdict};

fn run(script: &str, config: SessionConfig) -> (Console<&[u8], Vec<u8>>, String) {
    let mut console = Console::new(script.as_bytes(), Vec::new(), config);
    console.run().expect("console run");
    let rendered = console.view().render(BoardStyle::Numbered, false);
    (console, rendered)
}

#[test]
fn test_full_session_with_time_travel() {
    let script = "1\n4\n2\n5\n3\n6\njump 2\n9\nsort\nquit\n";
    let (console, final_view) = run(script, SessionConfig::default());

    // The win was discarded by branching from step 2.
    assert_eq!(console.history().len(), 4);
    assert_eq!(console.history().verdict(), Verdict::InProgress);
    assert_eq!(console.history().current_turn(), Player::O);
    assert_eq!(console.sort_order(), SortOrder::Descending);
    assert!(final_view.contains("Next player: O"));
    assert!(final_view.contains("You are at move #3"));

    let transcript = String::from_utf8(console.into_output()).unwrap();
    assert!(transcript.contains("Winner: X"));
    assert!(transcript.contains("Game is already over"));
}

#[test]
fn test_descending_config_orders_move_list() {
    let config = SessionConfig::default().with_sort_order(SortOrder::Descending);
    let (console, final_view) = run("5\n1\n", config);

    let entries: Vec<usize> = console.view().moves().iter().map(|m| *m.step()).collect();
    assert_eq!(entries, vec![2, 1, 0]);
    assert!(final_view.ends_with("Go to game start"));
}
