//! Route table behaviour through the public API.

use std::sync::Arc;
use std::thread;

use rest_router::routing::{
    MatchOutcome, NodeError, PatternError, RoutePattern, Router, TypeTag, UnmatchedPath, Value,
};

fn declined_cause(pattern: &str, path: &str) -> NodeError {
    match RoutePattern::compile(pattern).unwrap().match_path(path) {
        MatchOutcome::Declined(reason) => reason.cause().clone(),
        MatchOutcome::Matched(vars) => panic!("{} unexpectedly matched {}: {:?}", pattern, path, vars),
    }
}

#[test]
fn test_literal_patterns_match_equal_segments_only() {
    let cases = [
        ("/a/b", "/a/b", true),
        ("/a/b", "a/b/", true),
        ("/a/b", "/a//b", true),
        ("/a/b", "/a", false),
        ("/a/b", "/a/b/c", false),
        ("/a/b", "/a/B", false),
        ("/", "/", true),
        ("/", "/a", false),
    ];

    for (pattern, path, expected) in cases {
        let outcome = RoutePattern::compile(pattern).unwrap().match_path(path);
        assert_eq!(outcome.is_matched(), expected, "{} vs {}", pattern, path);
    }
}

#[test]
fn test_integer_placeholder() {
    let vars = RoutePattern::compile("/user/<id:integer>")
        .unwrap()
        .match_path("/user/42")
        .into_result()
        .unwrap();
    assert_eq!(vars.get("id"), Some(&Value::Integer(42)));
    assert_eq!(vars.resource(), Some(&Value::Integer(42)));

    assert_eq!(
        declined_cause("/user/<id:integer>", "/user/abc"),
        NodeError::InvalidNodeType {
            name: "id".into(),
            tag: TypeTag::Integer,
            raw: "abc".into(),
        }
    );
}

#[test]
fn test_optional_boolean_placeholder() {
    let pattern = RoutePattern::compile("/a/[b:boolean]").unwrap();

    let vars = pattern.match_path("/a").into_result().unwrap();
    assert_eq!(vars.len(), 1);
    assert_eq!(vars.get("b"), None);

    let vars = pattern.match_path("/a/true").into_result().unwrap();
    assert_eq!(vars.get("b"), Some(&Value::Boolean(true)));
}

#[test]
fn test_unconsumed_remainder() {
    assert_eq!(
        declined_cause("/a/b", "/a/b/c"),
        NodeError::UnconsumedPath(vec!["c".into()])
    );
}

#[test]
fn test_first_registered_route_wins() {
    let mut builder = Router::builder();
    builder.route("/docs/<page>", "r1").unwrap();
    builder.route("/docs/[page]", "r2").unwrap();
    let router = builder.build();

    for _ in 0..3 {
        assert_eq!(*router.resolve("/docs/intro").unwrap().handler(), "r1");
    }
    assert_eq!(*router.resolve("/docs").unwrap().handler(), "r2");
}

#[test]
fn test_unmatched_path() {
    let empty: Router<()> = Router::builder().build();
    assert_eq!(empty.resolve("/").unwrap_err(), UnmatchedPath("/".into()));

    let mut builder = Router::builder();
    builder.route("/only", ()).unwrap();
    let router = builder.build();
    let err = router.resolve("/other").unwrap_err();
    assert_eq!(err.path(), "/other");
}

#[test]
fn test_compile_errors_surface_at_registration() {
    let mut builder: rest_router::routing::RouterBuilder<()> = Router::builder();
    assert_eq!(
        builder.route("/a/[x:hex]", ()).unwrap_err(),
        PatternError::InvalidPlaceholderType("hex".into())
    );
    assert_eq!(builder.build().len(), 0);
}

#[test]
fn test_router_is_shared_across_threads() {
    let mut builder = Router::builder();
    builder.route("/n/<n:integer>", "n").unwrap();
    let router = Arc::new(builder.build());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let router = Arc::clone(&router);
            thread::spawn(move || {
                let path = format!("/n/{}", i);
                let bound = router.resolve(&path).unwrap();
                bound.variables().get("n").and_then(Value::as_i64)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![Some(0), Some(1), Some(2), Some(3)]);
}
