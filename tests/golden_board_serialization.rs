use chrono::{DateTime, Utc};
use quote_board::config::BoardConfig;
use quote_board::quote::{Quote, QuotePool};
use quote_board::selection::DailySelector;
use quote_board::types::{DailyBoard, DayKey};

fn sample_pool() -> QuotePool {
    QuotePool::new(vec![
        Quote::new("a", "I am not lost, I am exploring.", "Sam").with_tags(["travel"]),
        Quote::new("b", "Coffee is a food group.", "Alex"),
        Quote::new("c", "Who moved my keys?", "Jo"),
        Quote::new("d", "It worked on my machine.", "Riley").with_tags(["work", "code"]),
        Quote::new("e", "Five more minutes.", "Sam"),
    ])
    .unwrap()
}

#[test]
fn golden_board_for_2099_01_01() {
    let selector = DailySelector::new(&BoardConfig::v0()).unwrap();
    let pool = sample_pool();

    // 2099-01-01 12:00 in Los Angeles
    let now = DateTime::parse_from_rfc3339("2099-01-01T20:00:00Z")
        .unwrap()
        .with_timezone(&Utc);
    let board = selector.board(&pool, now);

    let json = serde_json::to_string_pretty(&board).unwrap();

    let expected = r#"{
  "quotes": [
    {
      "rank": 1,
      "id": "a",
      "text": "I am not lost, I am exploring.",
      "attributed_to": "Sam",
      "tags": [
        "travel"
      ]
    },
    {
      "rank": 2,
      "id": "e",
      "text": "Five more minutes.",
      "attributed_to": "Sam"
    },
    {
      "rank": 3,
      "id": "c",
      "text": "Who moved my keys?",
      "attributed_to": "Jo"
    }
  ],
  "selection": {
    "day_key": "2099-01-01",
    "time_zone": "America/Los_Angeles",
    "seed": 4053668196,
    "pool_version": "sha256:266e2a62422deadb18765972748ed2dfa411a8a589c179f7861760055248d654",
    "quotes_considered": 5,
    "quotes_selected": 3
  }
}"#;

    assert_eq!(json.trim(), expected.trim(), "Golden snapshot mismatch");

    let parsed: DailyBoard = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, board);
}

#[test]
fn board_matches_free_function_selection() {
    let selector = DailySelector::default();
    let pool = sample_pool();
    let day: DayKey = "2024-01-01".parse().unwrap();

    let board = selector.board_for_day(&pool, &day);
    let picked = quote_board::selection::select_daily(pool.quotes(), &day);

    let board_ids: Vec<&str> = board.quotes.iter().map(|q| q.id.as_str()).collect();
    let picked_ids: Vec<&str> = picked.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(board_ids, picked_ids);

    let ranks: Vec<usize> = board.quotes.iter().map(|q| q.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
}

#[test]
fn empty_pool_gives_empty_board() {
    let selector = DailySelector::default();
    let day: DayKey = "2099-01-01".parse().unwrap();

    let board = selector.board_for_day(&QuotePool::empty(), &day);

    assert!(board.quotes.is_empty());
    assert_eq!(board.selection.quotes_considered, 0);
    assert_eq!(board.selection.quotes_selected, 0);
}

#[test]
fn larger_pick_count_is_honored() {
    let config = BoardConfig {
        pick_count: 4,
        ..BoardConfig::v0()
    };
    let selector = DailySelector::new(&config).unwrap();
    let day: DayKey = "2099-01-01".parse().unwrap();

    let board = selector.board_for_day(&sample_pool(), &day);
    assert_eq!(board.quotes.len(), 4);

    // Same seed, so the first three match the default board
    let default_board = DailySelector::default().board_for_day(&sample_pool(), &day);
    assert_eq!(board.quotes[..3], default_board.quotes[..]);
}
