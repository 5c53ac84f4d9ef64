mod common;

use chrono::NaiveDate;

use bowling_score_client::model::{GameDetail, GameSummary};
use bowling_score_client::seed::{default_seed_dates, seed_test_games, PERFECT_GAME};

use common::{status_error, FakeGateway};

fn created(date: NaiveDate, n: u32) -> GameDetail {
    GameDetail {
        date_id: format!("d{}", n),
        date,
        game: GameSummary { game_id: format!("g{}", n), game_no: 1, score_str: PERFECT_GAME.to_string() },
    }
}

#[test]
fn default_dates_match_seed_table() {
    let dates = default_seed_dates();
    assert_eq!(dates.len(), 5);
    assert_eq!(dates[0], NaiveDate::from_ymd_opt(2022, 1, 1).unwrap());
    assert_eq!(dates[4], NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
}

#[test]
fn seeds_every_date_in_order() {
    let dates = default_seed_dates();
    let mut gateway = FakeGateway::new();
    for (i, d) in dates.iter().enumerate() {
        gateway = gateway.with_create(Ok(created(*d, i as u32)));
    }

    let games = seed_test_games(&gateway, &dates, PERFECT_GAME).expect("seed");

    assert_eq!(games.len(), 5);
    let sent: Vec<NaiveDate> = gateway.create_calls.borrow().iter().map(|(d, _)| *d).collect();
    assert_eq!(sent, dates);
    assert!(gateway.create_calls.borrow().iter().all(|(_, s)| s == PERFECT_GAME));
}

#[test]
fn stops_at_first_failure() {
    let dates = default_seed_dates();
    let gateway = FakeGateway::new()
        .with_create(Ok(created(dates[0], 0)))
        .with_create(Err(status_error(500, "Error occured while adding new game")));

    let err = seed_test_games(&gateway, &dates, PERFECT_GAME).unwrap_err();

    assert_eq!(err, status_error(500, "Error occured while adding new game"));
    assert_eq!(gateway.create_calls.borrow().len(), 2);
}
