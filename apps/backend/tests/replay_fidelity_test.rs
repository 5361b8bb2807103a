//! Replaying a session reproduces the identical tile layout, move for move.

use backend::test_support::accepting_engine;
use backend::{GameStatus, Owner, PlayResult, TilePos};

fn pos(x: u8, y: u16) -> TilePos {
    TilePos::new(x, y)
}

fn paths() -> Vec<Vec<TilePos>> {
    vec![
        vec![pos(0, 7), pos(1, 7)],
        vec![pos(3, 0), pos(3, 1), pos(4, 1)],
        vec![pos(0, 0), pos(0, 1), pos(1, 1), pos(1, 0)],
    ]
}

#[tokio::test]
async fn replay_reproduces_the_same_words_and_tiles() {
    let harness = accepting_engine();
    let owner = Owner::user("player-1").unwrap();
    let id = harness.service.init(&owner, None).await.unwrap();
    harness.service.start(&owner, id).await.unwrap();

    for path in paths() {
        let result = harness.service.play_word(&owner, id, &path).await.unwrap();
        assert!(result.is_accepted());
    }
    let first_run = harness.service.snapshot(&owner, id).await.unwrap();
    assert_eq!(first_run.words.len(), 3);
    assert_eq!(first_run.tiles_played, 9);

    harness.service.replay(&owner, id).await.unwrap();
    let reset = harness.service.snapshot(&owner, id).await.unwrap();
    assert_eq!(reset.status, GameStatus::Init);
    assert!(reset.words.is_empty());
    assert_eq!(reset.time_left, 180_000);

    harness.service.start(&owner, id).await.unwrap();
    for path in paths() {
        let result = harness.service.play_word(&owner, id, &path).await.unwrap();
        assert!(result.is_accepted());
    }
    let second_run = harness.service.snapshot(&owner, id).await.unwrap();

    assert_eq!(second_run.words, first_run.words);
    assert_eq!(second_run.score, first_run.score);
}

#[tokio::test]
async fn replay_restores_the_original_board() {
    let harness = accepting_engine();
    let owner = Owner::user("player-1").unwrap();
    let id = harness.service.init(&owner, None).await.unwrap();
    let fresh = harness.service.snapshot(&owner, id).await.unwrap();

    harness.service.start(&owner, id).await.unwrap();
    for path in paths() {
        harness.service.play_word(&owner, id, &path).await.unwrap();
    }
    harness.service.replay(&owner, id).await.unwrap();

    let replayed = harness.service.snapshot(&owner, id).await.unwrap();
    for (x, column) in fresh.tiles.columns().iter().enumerate() {
        let restored = &replayed.tiles.columns()[x];
        assert!(restored.len() >= column.len());
        for (y, tile) in column.iter().enumerate() {
            assert_eq!(restored[y].letter, tile.letter, "tile ({x},{y}) differs");
            assert_eq!(restored[y].value, tile.value);
            assert_eq!(restored[y].pos, tile.pos);
        }
    }
}

#[tokio::test]
async fn play_beyond_the_replay_buffer_keeps_drawing_the_same_stream() {
    let harness = accepting_engine();
    let owner = Owner::user("player-1").unwrap();
    let id = harness.service.init(&owner, None).await.unwrap();
    harness.service.start(&owner, id).await.unwrap();

    for path in paths() {
        harness.service.play_word(&owner, id, &path).await.unwrap();
    }
    harness.service.replay(&owner, id).await.unwrap();
    harness.service.start(&owner, id).await.unwrap();

    // the pre-drawn history buffer absorbs the replayed moves without
    // consuming the letter stream again
    for path in paths() {
        harness.service.play_word(&owner, id, &path).await.unwrap();
    }
    let replayed = harness.service.snapshot(&owner, id).await.unwrap();
    assert_eq!(replayed.tiles_played, 9);

    // a brand-new word in untouched columns must draw fresh tiles
    let result = harness
        .service
        .play_word(&owner, id, &[pos(6, 0), pos(7, 0)])
        .await
        .unwrap();
    assert!(matches!(result, PlayResult::Accepted { .. }));

    let extended = harness.service.snapshot(&owner, id).await.unwrap();
    assert_eq!(extended.tiles_played, 11);
    for column in extended.tiles.columns() {
        assert!(column.len() >= 8);
        for (y, tile) in column.iter().enumerate() {
            assert_eq!(usize::from(tile.pos.y), y);
        }
    }
}
