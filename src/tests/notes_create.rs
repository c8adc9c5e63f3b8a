use axum::http::StatusCode;

use crate::notes::MAX_TITLE_LENGTH;
use crate::tests::helper;

#[sqlx::test]
async fn test_create_and_read_note(pool: sqlx::SqlitePool) {
    let mut app = helper::setup_test_app(pool).await;

    let title = "Notiz zum Test";
    let body = "Eintrag für Testzwecke";

    let (status_code, note, _) = helper::maybe_create_note(&mut app, title, body).await;
    assert_eq!(StatusCode::CREATED, status_code);
    assert!(note.is_some());
    let note = note.unwrap();
    assert_eq!(title.to_string(), note.title);
    assert_eq!(body.to_string(), note.body);
    assert!(note.id > 0);

    // the fresh ID shows up in the list
    let (status_code, notes) = helper::list_notes(&mut app, "").await;
    assert_eq!(StatusCode::OK, status_code);
    assert!(notes.unwrap().iter().any(|note_| note_.id == note.id));
}

#[sqlx::test]
async fn test_create_note_empty_title(pool: sqlx::SqlitePool) {
    let mut app = helper::setup_test_app(pool).await;

    let (status_code, note, error) = helper::maybe_create_note(&mut app, "", "some body").await;
    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status_code);
    assert!(note.is_none());
    assert_eq!(Some("Title can not be empty".to_string()), error);

    // nothing was persisted
    let (_, notes) = helper::list_notes(&mut app, "").await;
    assert_eq!(Some(Vec::new()), notes);
}

#[sqlx::test]
async fn test_create_note_empty_body(pool: sqlx::SqlitePool) {
    let mut app = helper::setup_test_app(pool).await;

    let (status_code, note, error) = helper::maybe_create_note(&mut app, "some title", "").await;
    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status_code);
    assert!(note.is_none());
    assert_eq!(Some("Body can not be empty".to_string()), error);

    // nothing was persisted
    let (_, notes) = helper::list_notes(&mut app, "").await;
    assert_eq!(Some(Vec::new()), notes);
}

#[sqlx::test]
async fn test_create_note_title_length_boundary(pool: sqlx::SqlitePool) {
    let mut app = helper::setup_test_app(pool).await;

    // exactly at the limit is fine
    let title = "a".repeat(MAX_TITLE_LENGTH);
    let (status_code, note, _) = helper::maybe_create_note(&mut app, &title, "some body").await;
    assert_eq!(StatusCode::CREATED, status_code);
    assert_eq!(title, note.unwrap().title);

    // one character over is not
    let title = "a".repeat(MAX_TITLE_LENGTH + 1);
    let (status_code, _, error) = helper::maybe_create_note(&mut app, &title, "some body").await;
    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status_code);
    assert_eq!(
        Some("Title can not be longer than 200 characters".to_string()),
        error
    );
}
