//! Integration tests for shared engines and provider availability.

use graphfeed_core::{AccountName, Comment, CommentId, FollowType};
use graphfeed_query::QueryEngine;
use graphfeed_storage::MemoryStore;
use std::sync::Arc;
use std::thread;

fn seeded_engine() -> Arc<QueryEngine<MemoryStore>> {
    let store = MemoryStore::new();
    store
        .write(|state| {
            state.create_account("reader")?;
            state.create_account("writer")?;
            state.set_follow(&"reader".into(), &"writer".into(), [FollowType::Blog])?;
            state.set_reputation(&"writer".into(), 10)
        })
        .unwrap();
    Arc::new(QueryEngine::new(store))
}

#[test]
fn test_readers_see_consistent_feed_while_writer_appends() {
    let engine = seeded_engine();

    let writer = {
        let engine = Arc::clone(&engine);
        thread::spawn(move || {
            for i in 0..200 {
                engine
                    .provider()
                    .write(|state| {
                        let post = state.add_comment(Comment::new(
                            CommentId::default(),
                            "writer",
                            format!("post-{}", i),
                        ))?;
                        state.push_feed(&"reader".into(), post, None).map(|_| ())
                    })
                    .unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                for _ in 0..100 {
                    let page = engine.get_feed_entries("reader", 0, 50).unwrap();
                    // A snapshot holds a contiguous run of ids ending at the newest.
                    for pair in page.windows(2) {
                        assert_eq!(pair[0].entry_id, pair[1].entry_id + 1);
                        assert_eq!(pair[0].permlink, format!("post-{}", pair[0].entry_id));
                    }
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    let page = engine.get_feed_entries("reader", 0, 1).unwrap();
    assert_eq!(page[0].entry_id, 199);
}

#[test]
fn test_shared_engine_across_threads() {
    let engine = seeded_engine();
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let followers = engine.get_followers("writer", "", FollowType::Blog, 10).unwrap();
                let reputations = engine.get_account_reputations("", 10).unwrap();
                (followers.len(), reputations.len())
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), (1, 2));
    }
}

#[test]
fn test_closed_store_is_unavailable() {
    let engine = seeded_engine();
    engine.provider().close();

    assert!(engine
        .get_followers("writer", "", FollowType::Blog, 10)
        .unwrap_err()
        .is_unavailable());
    assert!(engine
        .get_following("reader", "", FollowType::Blog, 10)
        .unwrap_err()
        .is_unavailable());
    assert!(engine.get_feed_entries("reader", 0, 10).unwrap_err().is_unavailable());
    assert!(engine.get_feed("reader", 0, 10).unwrap_err().is_unavailable());
    assert!(engine
        .get_account_reputations("", 10)
        .unwrap_err()
        .is_unavailable());

    engine.provider().reopen();
    let result = engine.get_followers("writer", "", FollowType::Blog, 10).unwrap();
    assert_eq!(result[0].follower, AccountName::from("reader"));
}
