// Session lifecycle: load failures, one-shot hand-off consumption and detail
// lookups.
mod support;

use anyhow::Result;
use feature_compat::{
    FeatureId, HandoffMessage, HandoffStore, LookupError, ResultView, SearchResult, Session,
    Severity,
};
use std::path::Path;
use tempfile::TempDir;

use support::{feature_json, repo_catalog_path, write_raw_catalog};

#[test]
fn missing_catalog_is_a_load_failure() {
    let err = Session::open(Path::new("/nonexistent/feature_compat.json"), None).unwrap_err();
    assert!(matches!(err, LookupError::LoadFailure { .. }));
    assert_eq!(err.severity(), Severity::Error);
    assert!(err.to_string().contains("/nonexistent/feature_compat.json"));
}

#[test]
fn malformed_catalog_is_a_load_failure() -> Result<()> {
    let record = feature_json(1, "", "blank name", "css");
    let file = write_raw_catalog(&serde_json::to_string(&[record])?)?;
    match Session::open(file.path(), None) {
        Err(LookupError::LoadFailure { reason, .. }) => assert!(!reason.is_empty()),
        other => panic!("expected LoadFailure, got {other:?}"),
    }
    Ok(())
}

// The hand-off query runs once; a second take yields nothing.
#[test]
fn pending_handoff_runs_once() -> Result<()> {
    let message = HandoffMessage::new("  Flexbox ", true);
    let mut session = Session::open(&repo_catalog_path(), Some(message))?;
    assert!(session.has_pending());

    {
        let pending = session.take_pending().expect("hand-off should be pending");
        assert!(pending.message.scroll_to_results);
        let SearchResult::Single(best) = pending.outcome? else {
            panic!("expected a single best match");
        };
        assert_eq!(best.feature.name, "Flexbox");
    }

    assert!(!session.has_pending());
    assert!(session.take_pending().is_none());
    Ok(())
}

// A hand-off attached after loading runs like one passed to `open`, and a
// later message replaces an earlier one.
#[test]
fn hand_off_attached_after_load() -> Result<()> {
    let mut session = Session::open(&repo_catalog_path(), None)?;
    assert!(!session.has_pending());
    session.set_pending(HandoffMessage::new("flexbox", false));
    session.set_pending(HandoffMessage::new("dialog", true));

    let pending = session.take_pending().expect("hand-off should be pending");
    assert!(pending.message.scroll_to_results);
    let SearchResult::Single(best) = pending.outcome? else {
        panic!("expected a single best match");
    };
    assert_eq!(best.feature.name, "Dialog Element");
    assert!(session.take_pending().is_none());
    Ok(())
}

// Stash, take, open: the typed message carries the scroll flag through to the
// rendered view and the store is empty afterwards.
#[test]
fn store_to_session_round_trip() -> Result<()> {
    let state = TempDir::new()?;
    let store = HandoffStore::at(state.path());
    store.stash(&HandoffMessage::new("api", true))?;

    let message = store.take()?;
    assert!(store.take()?.is_none());

    let mut session = Session::open(&repo_catalog_path(), message)?;
    let pending = session.take_pending().expect("hand-off should be pending");
    let view = ResultView::from_result(&pending.outcome?)
        .with_scroll(pending.message.scroll_to_results);
    assert_eq!(view.title, "API Features");
    assert!(view.scroll_to_results);
    assert!(view.card_count() > 0);
    Ok(())
}

#[test]
fn pending_handoff_reports_empty_query() -> Result<()> {
    let message = HandoffMessage::new("   ", false);
    let mut session = Session::open(&repo_catalog_path(), Some(message))?;
    let pending = session.take_pending().expect("hand-off should be pending");
    assert!(matches!(pending.outcome, Err(LookupError::EmptyQuery)));
    Ok(())
}

#[test]
fn details_resolve_by_id() -> Result<()> {
    let session = Session::open(&repo_catalog_path(), None)?;
    let feature = session.details(FeatureId(1))?;
    assert_eq!(feature.name, "CSS Grid");
    assert!(matches!(
        session.details(FeatureId(9999)),
        Err(LookupError::UnknownFeature { id: FeatureId(9999) })
    ));
    Ok(())
}
