//! Cross-reload persistence scenarios against the filesystem backend.

use nvn_core::Region;
use nvn_state::{
    ComplianceState, ComplianceStore, FileBackend, GatePhase, MemoryBackend, StorageBackend,
    STORAGE_KEY,
};

#[test]
fn acceptance_survives_reload() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = ComplianceStore::load(FileBackend::new(dir.path()));
        store.set_region(Region::Us);
        store.accept().unwrap();
    }

    // A fresh hydration simulates the next page load.
    let store = ComplianceStore::load(FileBackend::new(dir.path()));
    assert_eq!(store.phase(), GatePhase::Open);
    assert_eq!(store.state().region, Some(Region::Us));
    let accepted_at = store.state().accepted_at.expect("timestamp persisted");
    assert!(accepted_at.to_iso8601().ends_with('Z'));
}

#[test]
fn region_alone_survives_reload_without_opening_gate() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = ComplianceStore::load(FileBackend::new(dir.path()));
        store.set_region(Region::Cn);
    }

    let store = ComplianceStore::load(FileBackend::new(dir.path()));
    assert_eq!(store.phase(), GatePhase::Gated);
    assert_eq!(store.state().region, Some(Region::Cn));
}

#[test]
fn reset_survives_reload() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = ComplianceStore::load(FileBackend::new(dir.path()));
        store.set_region(Region::Uk);
        store.accept().unwrap();
        store.reset();
    }

    let store = ComplianceStore::load(FileBackend::new(dir.path()));
    assert_eq!(*store.state(), ComplianceState::gated());
}

#[test]
fn first_load_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let _store = ComplianceStore::load(FileBackend::new(dir.path()));
    let backend = FileBackend::new(dir.path());
    assert!(backend.read(STORAGE_KEY).unwrap().is_none());
}

#[test]
fn record_written_by_old_session_merges_with_defaults() {
    // A record from a session that stored extra fields the current schema
    // does not know about.
    let dir = tempfile::tempdir().unwrap();
    let mut backend = FileBackend::new(dir.path());
    backend
        .write(
            STORAGE_KEY,
            r#"{"accepted":false,"region":"EU","acceptedAt":null,"bannerDismissed":true}"#,
        )
        .unwrap();

    let store = ComplianceStore::load(FileBackend::new(dir.path()));
    assert_eq!(store.state().region, Some(Region::Eu));
    assert_eq!(store.phase(), GatePhase::Gated);
}

#[test]
fn healed_backend_reflects_last_successful_write() {
    // A record persisted by an earlier, healthy session.
    let mut backend = MemoryBackend::with_record(STORAGE_KEY, r#"{"region":"JP"}"#);
    backend.poison();

    // While storage is unavailable, hydration fails closed and mutations
    // stay in memory only.
    let mut session = ComplianceStore::load(backend.clone());
    assert_eq!(session.state().region, None);
    session.set_region(Region::Ca);
    assert_eq!(session.accept(), Ok(()));
    assert_eq!(session.phase(), GatePhase::Open);

    // Once storage returns, the next load still sees the last record that
    // actually landed — nothing from the poisoned session leaked through.
    backend.heal();
    let store = ComplianceStore::load(backend);
    assert_eq!(store.state().region, Some(Region::Jp));
    assert_eq!(store.phase(), GatePhase::Gated);
}
