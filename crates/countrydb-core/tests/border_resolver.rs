// crates/countrydb-core/tests/border_resolver.rs
mod common;

use common::{Event, ScriptedApi};
use countrydb_core::{resolve_borders, BorderResolver};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

const TABLE: &[(&str, &str)] = &[
    ("DEU", "Germany"),
    ("CZE", "Czechia"),
    ("HUN", "Hungary"),
    ("ITA", "Italy"),
    ("FRA", "France"),
    ("ESP", "Spain"),
];

#[tokio::test]
async fn lookups_are_sequential_and_in_order() {
    let api = ScriptedApi::new(TABLE);
    let codes = ["CZE", "DEU", "HUN", "ITA"];
    let names = resolve_borders(&api, &codes, |_| {}).await;

    assert_eq!(names, vec!["Czechia", "Germany", "Hungary", "Italy"]);
    assert_eq!(api.requested(), codes);
    assert_eq!(api.max_in_flight(), 1);

    // every request finishes before the next one starts
    let events = api.events();
    for (i, code) in codes.iter().enumerate() {
        assert_eq!(events[2 * i], Event::Started(code.to_string()));
        assert_eq!(events[2 * i + 1], Event::Finished(code.to_string()));
    }
}

#[tokio::test]
async fn germany_resolves_and_austria_fails() {
    let api = ScriptedApi::new(TABLE);
    let names = resolve_borders(&api, &["DEU", "AUT"], |_| {}).await;
    assert_eq!(names, vec!["Germany"]);
    assert_eq!(api.requested(), vec!["DEU", "AUT"]);
}

#[tokio::test]
async fn failure_in_the_middle_keeps_relative_order() {
    let api = ScriptedApi::new(TABLE);
    let names = resolve_borders(&api, &["FRA", "XXX", "ESP", "ITA"], |_| {}).await;
    assert_eq!(names, vec!["France", "Spain", "Italy"]);
    assert_eq!(api.requested().len(), 4);
}

#[tokio::test]
async fn empty_input_issues_no_requests() {
    let api = Arc::new(ScriptedApi::new(TABLE));
    let names = resolve_borders(api.as_ref(), &[] as &[String], |_| {}).await;
    assert!(names.is_empty());

    let mut resolver = BorderResolver::from_arc(Arc::clone(&api));
    resolver.resolve(Vec::<String>::new());
    let done = resolver.wait_until_complete().await;
    assert!(done.names.is_empty());
    assert!(api.events().is_empty());
}

#[tokio::test]
async fn names_are_published_before_the_run_finishes() {
    let api = Arc::new(ScriptedApi::new(TABLE).hold("HUN"));
    let mut resolver = BorderResolver::from_arc(Arc::clone(&api));
    let mut updates = resolver.subscribe();

    let run = resolver.resolve(["DEU", "HUN", "ITA"]);
    updates
        .wait_for(|s| s.run == run && s.names == ["Germany"])
        .await
        .unwrap();
    api.wait_for_request("HUN").await;

    let partial = resolver.snapshot();
    assert!(!partial.complete);
    assert_eq!(partial.attempted, 1);
    assert_eq!(api.requested(), vec!["DEU", "HUN"]);

    api.release("HUN");
    let done = resolver.wait_until_complete().await;
    assert_eq!(done.names, vec!["Germany", "Hungary", "Italy"]);
    assert_eq!(api.max_in_flight(), 1);
}

fn names_for(codes: &[&str]) -> Vec<String> {
    codes
        .iter()
        .filter_map(|code| TABLE.iter().find(|(c, _)| c == code))
        .map(|(_, name)| name.to_string())
        .collect()
}

#[tokio::test]
async fn new_run_discards_results_of_the_superseded_one() {
    supersede_while_a_lookup_is_held().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn new_run_discards_results_of_the_superseded_one_on_worker_threads() {
    supersede_while_a_lookup_is_held().await;
}

async fn supersede_while_a_lookup_is_held() {
    let api = Arc::new(ScriptedApi::new(TABLE).hold("CZE"));
    let mut resolver = BorderResolver::from_arc(Arc::clone(&api));
    let mut updates = resolver.subscribe();

    let first = resolver.resolve(["DEU", "CZE", "HUN"]);
    updates
        .wait_for(|s| s.run == first && s.names == ["Germany"])
        .await
        .unwrap();
    api.wait_for_request("CZE").await;

    let second = resolver.resolve(["FRA", "ESP"]);
    assert!(resolver.snapshot().names.is_empty());
    // the stale lookup completes after the new run started
    api.release("CZE");

    let done = resolver.wait_until_complete().await;
    assert_eq!(done.run, second);
    assert_eq!(done.names, vec!["France", "Spain"]);
    assert!(!api.requested().contains(&"HUN".to_string()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn rapid_supersedes_never_mix_runs() {
    const FIRST: [&str; 3] = ["DEU", "CZE", "HUN"];
    const SECOND: [&str; 3] = ["FRA", "ESP", "ITA"];

    let api = Arc::new(ScriptedApi::new(TABLE));
    let mut resolver = BorderResolver::from_arc(api);
    let mut updates = resolver.subscribe();
    let observer = tokio::spawn(async move {
        let mut seen = Vec::new();
        while updates.changed().await.is_ok() {
            seen.push(updates.borrow_and_update().clone());
        }
        seen
    });

    let mut expected = HashMap::new();
    let mut last = None;
    for i in 0..50 {
        let codes = if i % 2 == 0 { FIRST } else { SECOND };
        let run = resolver.resolve(codes);
        expected.insert(run, names_for(&codes));
        last = Some(run);
        if i % 3 == 0 {
            tokio::task::yield_now().await;
        }
    }

    let done = resolver.wait_until_complete().await;
    assert_eq!(Some(done.run), last);
    assert!(done.complete);
    assert_eq!(done.names, vec!["France", "Spain", "Italy"]);

    drop(resolver);
    let seen = tokio::time::timeout(Duration::from_secs(10), observer)
        .await
        .expect("observer stops once the resolver is gone")
        .unwrap();
    for snapshot in seen {
        let names = &expected[&snapshot.run];
        assert!(
            names.starts_with(&snapshot.names),
            "run {} published {:?}",
            snapshot.run,
            snapshot.names
        );
        assert!(snapshot.attempted <= snapshot.total);
    }
}

#[tokio::test]
async fn observers_never_see_a_shrinking_list_within_a_run() {
    let api = Arc::new(ScriptedApi::new(TABLE));
    let mut resolver = BorderResolver::from_arc(api);
    let mut updates = resolver.subscribe();
    let run = resolver.resolve(["DEU", "XXX", "CZE", "ITA"]);

    let mut last_len = 0;
    loop {
        let snapshot = updates.borrow_and_update().clone();
        if snapshot.run == run {
            assert!(snapshot.names.len() >= last_len);
            last_len = snapshot.names.len();
            if snapshot.complete {
                assert_eq!(snapshot.names, vec!["Germany", "Czechia", "Italy"]);
                break;
            }
        }
        updates.changed().await.unwrap();
    }
}

#[tokio::test]
async fn cancel_keeps_partial_results() {
    let api = Arc::new(ScriptedApi::new(TABLE).hold("CZE"));
    let mut resolver = BorderResolver::from_arc(Arc::clone(&api));
    let mut updates = resolver.subscribe();

    let run = resolver.resolve(["DEU", "CZE"]);
    updates
        .wait_for(|s| s.run == run && s.attempted == 1)
        .await
        .unwrap();
    resolver.cancel();
    api.release("CZE");
    tokio::task::yield_now().await;

    let snapshot = resolver.snapshot();
    assert_eq!(snapshot.names, vec!["Germany"]);
    assert!(!snapshot.complete);
    assert!(snapshot.cancelled);
}

#[tokio::test]
async fn waiting_after_cancel_returns_partial_results() {
    let api = Arc::new(ScriptedApi::new(TABLE).hold("CZE"));
    let mut resolver = BorderResolver::from_arc(Arc::clone(&api));
    let mut updates = resolver.subscribe();

    let run = resolver.resolve(["DEU", "CZE", "HUN"]);
    updates
        .wait_for(|s| s.run == run && s.attempted == 1)
        .await
        .unwrap();
    api.wait_for_request("CZE").await;
    resolver.cancel();

    let done = tokio::time::timeout(Duration::from_secs(5), resolver.wait_until_complete())
        .await
        .expect("wait_until_complete hangs after cancel");
    assert_eq!(done.run, run);
    assert_eq!(done.names, vec!["Germany"]);
    assert!(done.cancelled);
    assert!(!api.requested().contains(&"HUN".to_string()));
}
