//! Integration tests for follower / following lookups.

use graphfeed_core::{AccountName, FollowRelationship, FollowType};
use graphfeed_query::{resume_followers_cursor, resume_following_cursor, QueryEngine};
use graphfeed_storage::MemoryStore;

fn follower_names(records: &[FollowRelationship]) -> Vec<&str> {
    records.iter().map(|r| r.follower.as_str()).collect()
}

fn following_names(records: &[FollowRelationship]) -> Vec<&str> {
    records.iter().map(|r| r.following.as_str()).collect()
}

/// bob and carol follow alice's blog, dave ignores her.
fn social_engine() -> QueryEngine<MemoryStore> {
    let store = MemoryStore::new();
    store
        .write(|state| {
            for name in ["alice", "bob", "carol", "dave"] {
                state.create_account(name)?;
            }
            let alice = AccountName::from("alice");
            state.set_follow(&"bob".into(), &alice, [FollowType::Blog])?;
            state.set_follow(&"carol".into(), &alice, [FollowType::Blog])?;
            state.set_follow(&"dave".into(), &alice, [FollowType::Ignore])?;
            Ok(())
        })
        .unwrap();
    QueryEngine::new(store)
}

#[test]
fn test_blog_followers_of_alice() {
    let engine = social_engine();
    let result = engine.get_followers("alice", "", FollowType::Blog, 10).unwrap();
    assert_eq!(follower_names(&result), vec!["bob", "carol"]);
    assert!(result.iter().all(|r| r.following == "alice"));
}

#[test]
fn test_ignore_followers_of_alice() {
    let engine = social_engine();
    let result = engine.get_followers("alice", "", FollowType::Ignore, 10).unwrap();
    assert_eq!(follower_names(&result), vec!["dave"]);
}

#[test]
fn test_results_only_hold_requested_kind() {
    let engine = social_engine();
    for kind in [FollowType::Blog, FollowType::Ignore, FollowType::Undefined] {
        let result = engine.get_followers("alice", "", kind, 100).unwrap();
        assert!(result.iter().all(|r| r.has(kind)));
    }
}

#[test]
fn test_relationship_with_both_kinds() {
    let engine = social_engine();
    engine
        .provider()
        .write(|state| {
            state.set_follow(
                &"dave".into(),
                &"alice".into(),
                [FollowType::Blog, FollowType::Ignore],
            )
        })
        .unwrap();

    let blog = engine.get_followers("alice", "", FollowType::Blog, 10).unwrap();
    assert_eq!(follower_names(&blog), vec!["bob", "carol", "dave"]);
    let ignore = engine.get_followers("alice", "", FollowType::Ignore, 10).unwrap();
    assert_eq!(follower_names(&ignore), vec!["dave"]);
}

#[test]
fn test_unfollow_removes_record() {
    let engine = social_engine();
    engine
        .provider()
        .write(|state| {
            state.set_follow(&"bob".into(), &"alice".into(), Vec::<FollowType>::new())
        })
        .unwrap();
    let result = engine.get_followers("alice", "", FollowType::Blog, 10).unwrap();
    assert_eq!(follower_names(&result), vec!["carol"]);
}

#[test]
fn test_following_symmetry() {
    let engine = social_engine();
    for name in ["bob", "carol"] {
        let result = engine.get_following(name, "", FollowType::Blog, 10).unwrap();
        assert_eq!(following_names(&result), vec!["alice"]);
        assert!(result.iter().all(|r| r.follower == name));
    }
    let result = engine.get_following("dave", "", FollowType::Blog, 10).unwrap();
    assert!(result.is_empty());
    let result = engine.get_following("dave", "", FollowType::Ignore, 10).unwrap();
    assert_eq!(following_names(&result), vec!["alice"]);
}

#[test]
fn test_limit_zero_is_empty() {
    let engine = social_engine();
    assert!(engine.get_followers("alice", "", FollowType::Blog, 0).unwrap().is_empty());
    assert!(engine.get_following("bob", "", FollowType::Blog, 0).unwrap().is_empty());
}

#[test]
fn test_limit_above_cap() {
    let engine = social_engine();
    assert!(engine.get_followers("alice", "", FollowType::Blog, 100).is_ok());

    let err = engine.get_followers("alice", "", FollowType::Blog, 101).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("100 followers"));

    let err = engine.get_following("bob", "", FollowType::Blog, 101).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("100 following"));
}

#[test]
fn test_unknown_account_is_empty() {
    let engine = social_engine();
    assert!(engine.get_followers("nobody", "", FollowType::Blog, 10).unwrap().is_empty());
    assert!(engine.get_following("nobody", "", FollowType::Blog, 10).unwrap().is_empty());
}

/// `count` fans follow `star`; every fifth one with `ignore`.
fn fan_engine(count: usize) -> QueryEngine<MemoryStore> {
    let store = MemoryStore::new();
    store
        .write(|state| {
            state.create_account("star")?;
            for i in 0..count {
                let fan = AccountName::from(format!("fan{:02}", i));
                state.create_account(fan.clone())?;
                let kind = if i % 5 == 0 { FollowType::Ignore } else { FollowType::Blog };
                state.set_follow(&fan, &"star".into(), [kind])?;
            }
            Ok(())
        })
        .unwrap();
    QueryEngine::new(store)
}

fn page_followers(engine: &QueryEngine<MemoryStore>, limit: u32) -> Vec<String> {
    let mut collected = Vec::new();
    let mut cursor = AccountName::min();
    loop {
        let page = engine
            .get_followers("star", cursor.as_str(), FollowType::Blog, limit)
            .unwrap();
        assert!(page.len() <= limit as usize);
        let next = resume_followers_cursor(&page, limit);
        collected.extend(page.into_iter().map(|r| r.follower.to_string()));
        match next {
            Some(next) => cursor = next,
            None => break,
        }
    }
    collected
}

#[test]
fn test_paging_through_followers() {
    let engine = fan_engine(25);
    let expected: Vec<String> = (0..25)
        .filter(|i| i % 5 != 0)
        .map(|i| format!("fan{:02}", i))
        .collect();

    for limit in [1, 2, 7, 20, 100] {
        assert_eq!(page_followers(&engine, limit), expected, "limit {}", limit);
    }
}

#[test]
fn test_blog_following_of_alice() {
    let store = MemoryStore::new();
    store
        .write(|state| {
            for name in ["alice", "bob", "carol", "dave"] {
                state.create_account(name)?;
            }
            let alice = AccountName::from("alice");
            state.set_follow(&alice, &"bob".into(), [FollowType::Blog])?;
            state.set_follow(&alice, &"carol".into(), [FollowType::Blog])?;
            state.set_follow(&alice, &"dave".into(), [FollowType::Ignore])?;
            Ok(())
        })
        .unwrap();
    let engine = QueryEngine::new(store);

    let result = engine.get_following("alice", "", FollowType::Blog, 10).unwrap();
    assert_eq!(following_names(&result), vec!["bob", "carol"]);
    assert!(result.iter().all(|r| r.follower == "alice"));

    let result = engine.get_following("alice", "", FollowType::Ignore, 10).unwrap();
    assert_eq!(following_names(&result), vec!["dave"]);
}

#[test]
fn test_resume_following_cursor() {
    let engine = social_engine();
    engine
        .provider()
        .write(|state| {
            state.set_follow(&"bob".into(), &"carol".into(), [FollowType::Blog])?;
            state.set_follow(&"bob".into(), &"dave".into(), [FollowType::Blog])
        })
        .unwrap();

    let first = engine.get_following("bob", "", FollowType::Blog, 2).unwrap();
    assert_eq!(following_names(&first), vec!["alice", "carol"]);
    let cursor = resume_following_cursor(&first, 2).unwrap();

    let second = engine
        .get_following("bob", cursor.as_str(), FollowType::Blog, 2)
        .unwrap();
    assert_eq!(following_names(&second), vec!["dave"]);
    assert_eq!(resume_following_cursor(&second, 2), None);
}

#[test]
fn test_following_pages_of_one() {
    let engine = social_engine();
    engine
        .provider()
        .write(|state| {
            state.set_follow(&"bob".into(), &"carol".into(), [FollowType::Blog])?;
            state.set_follow(&"bob".into(), &"dave".into(), [FollowType::Blog])
        })
        .unwrap();

    let mut collected = Vec::new();
    let mut cursor = AccountName::min();
    while collected.len() <= 3 {
        let page = engine
            .get_following("bob", cursor.as_str(), FollowType::Blog, 1)
            .unwrap();
        let next = resume_following_cursor(&page, 1);
        collected.extend(page.into_iter().map(|r| r.following.to_string()));
        match next {
            Some(next) => cursor = next,
            None => break,
        }
    }
    assert_eq!(collected, vec!["alice", "carol", "dave"]);
}
