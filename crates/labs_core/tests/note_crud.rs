use labs_core::db::open_db_in_memory;
use labs_core::{
    EntityStore, MemoryStore, Note, NoteDraft, NotePatch, NoteService, RepoError, ServiceError,
    SqliteNoteStore,
};

fn lifecycle_scenario<S: EntityStore<Note>>(service: &NoteService<S>) {
    let created = service
        .create(&NoteDraft::new("Nota 1", "Contenido 1"))
        .unwrap();

    let all = service.find_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], created);
    assert_eq!(all[0].title, "Nota 1");
    assert_eq!(all[0].content, "Contenido 1");

    service.remove(created.id).unwrap();
    let err = service.find_one(created.id).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(
        err.to_string(),
        format!("Nota con ID {} no encontrada", created.id)
    );
}

fn roundtrip_and_merge_scenario<S: EntityStore<Note>>(service: &NoteService<S>) {
    let created = service.create(&NoteDraft::new("Borrador", "Cuerpo")).unwrap();
    assert_eq!(service.find_one(created.id).unwrap(), created);

    let patch = NotePatch {
        title: Some("X".to_string()),
        content: None,
    };
    let updated = service.update(created.id, &patch).unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "X");
    assert_eq!(updated.content, "Cuerpo");
    assert_eq!(service.find_one(created.id).unwrap(), updated);

    let untouched = service.update(created.id, &NotePatch::default()).unwrap();
    assert_eq!(untouched, updated);
}

fn missing_id_scenario<S: EntityStore<Note>>(service: &NoteService<S>) {
    let patch = NotePatch {
        title: Some("nuevo".to_string()),
        content: None,
    };
    assert!(matches!(
        service.update(404, &patch),
        Err(ServiceError::Repo(RepoError::NotFound { id: 404, .. }))
    ));
    assert!(matches!(
        service.remove(404),
        Err(ServiceError::Repo(RepoError::NotFound { id: 404, .. }))
    ));
}

fn title_search_scenario<S: EntityStore<Note>>(service: &NoteService<S>) {
    let first = service.create(&NoteDraft::new("Lista compras", "leche")).unwrap();
    service.create(&NoteDraft::new("Recordatorio", "llamar")).unwrap();
    let third = service.create(&NoteDraft::new("Otra lista", "pan")).unwrap();

    let hits = service.find_by_title("lista").unwrap();
    assert_eq!(hits, vec![third.clone()]);

    let hits = service.find_by_title("ista").unwrap();
    assert_eq!(hits, vec![first, third]);

    let err = service.find_by_title("nonexistent").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(
        err.to_string(),
        "Nota con el título nonexistent no encontrada"
    );
}

fn creation_order_scenario<S: EntityStore<Note>>(service: &NoteService<S>) {
    assert!(service.find_all().unwrap().is_empty());
    let ids: Vec<_> = (0..4)
        .map(|idx| {
            service
                .create(&NoteDraft::new(format!("n{idx}"), "c"))
                .unwrap()
                .id
        })
        .collect();
    service.remove(ids[1]).unwrap();
    let recreated = service.create(&NoteDraft::new("n4", "c")).unwrap();
    assert!(!ids.contains(&recreated.id));

    let listed: Vec<_> = service.find_all().unwrap().iter().map(|n| n.id).collect();
    assert_eq!(listed, vec![ids[0], ids[2], ids[3], recreated.id]);
}

#[test]
fn memory_store_note_lifecycle() {
    lifecycle_scenario(&NoteService::new(MemoryStore::new()));
}

#[test]
fn sqlite_store_note_lifecycle() {
    let conn = open_db_in_memory().unwrap();
    lifecycle_scenario(&NoteService::new(SqliteNoteStore::try_new(&conn).unwrap()));
}

#[test]
fn memory_store_roundtrip_and_merge() {
    roundtrip_and_merge_scenario(&NoteService::new(MemoryStore::new()));
}

#[test]
fn sqlite_store_roundtrip_and_merge() {
    let conn = open_db_in_memory().unwrap();
    roundtrip_and_merge_scenario(&NoteService::new(SqliteNoteStore::try_new(&conn).unwrap()));
}

#[test]
fn memory_store_missing_id() {
    missing_id_scenario(&NoteService::new(MemoryStore::new()));
}

#[test]
fn sqlite_store_missing_id() {
    let conn = open_db_in_memory().unwrap();
    missing_id_scenario(&NoteService::new(SqliteNoteStore::try_new(&conn).unwrap()));
}

#[test]
fn memory_store_title_search_is_case_sensitive_substring() {
    title_search_scenario(&NoteService::new(MemoryStore::new()));
}

#[test]
fn sqlite_store_title_search_is_case_sensitive_substring() {
    let conn = open_db_in_memory().unwrap();
    title_search_scenario(&NoteService::new(SqliteNoteStore::try_new(&conn).unwrap()));
}

#[test]
fn memory_store_keeps_creation_order_without_reusing_ids() {
    creation_order_scenario(&NoteService::new(MemoryStore::new()));
}

#[test]
fn sqlite_store_keeps_creation_order_without_reusing_ids() {
    let conn = open_db_in_memory().unwrap();
    creation_order_scenario(&NoteService::new(SqliteNoteStore::try_new(&conn).unwrap()));
}

#[test]
fn sqlite_notes_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notas.sqlite3");

    let created = {
        let conn = labs_core::db::open_db(&path).unwrap();
        let service = NoteService::new(SqliteNoteStore::try_new(&conn).unwrap());
        service.create(&NoteDraft::new("Persistida", "texto")).unwrap()
    };

    let conn = labs_core::db::open_db(&path).unwrap();
    let service = NoteService::new(SqliteNoteStore::try_new(&conn).unwrap());
    assert_eq!(service.find_one(created.id).unwrap(), created);
}
