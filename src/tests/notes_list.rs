use axum::Router;
use axum::http::StatusCode;

use crate::tests::helper;

/// Three notes, ids are returned in creation order
async fn seed_notes(app: &mut Router) -> Vec<i64> {
    let notes = [
        ("Shopping list", "milk and eggs"),
        ("Workout plan", "push day"),
        ("Milk recall", "check the fridge"),
    ];

    let mut ids = Vec::new();

    for (title, body) in notes {
        let (status_code, note, _) = helper::maybe_create_note(app, title, body).await;
        assert_eq!(StatusCode::CREATED, status_code);
        ids.push(note.unwrap().id);
    }

    ids
}

#[sqlx::test]
async fn test_list_search(pool: sqlx::SqlitePool) {
    let mut app = helper::setup_test_app(pool).await;

    let ids = seed_notes(&mut app).await;

    // matches title of one note and body of another
    let (status_code, notes) = helper::list_notes(&mut app, "?q=milk").await;
    assert_eq!(StatusCode::OK, status_code);
    let mut found = notes
        .unwrap()
        .iter()
        .map(|note| note.id)
        .collect::<Vec<i64>>();
    found.sort_unstable();
    assert_eq!(vec![ids[0], ids[2]], found);

    // case-insensitive
    let (status_code, notes) = helper::list_notes(&mut app, "?q=MILK").await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!(2, notes.unwrap().len());

    // no match is an empty list, not an error
    let (status_code, notes) = helper::list_notes(&mut app, "?q=zzz").await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!(Some(Vec::new()), notes);
}

#[sqlx::test]
async fn test_list_sort(pool: sqlx::SqlitePool) {
    let mut app = helper::setup_test_app(pool).await;

    let ids = seed_notes(&mut app).await;

    // descending by id
    let (status_code, notes) = helper::list_notes(&mut app, "?sort=-id").await;
    assert_eq!(StatusCode::OK, status_code);
    let found = notes
        .unwrap()
        .iter()
        .map(|note| note.id)
        .collect::<Vec<i64>>();
    assert_eq!(vec![ids[2], ids[1], ids[0]], found);

    // ascending by title
    let (status_code, notes) = helper::list_notes(&mut app, "?sort=title").await;
    assert_eq!(StatusCode::OK, status_code);
    let found = notes
        .unwrap()
        .iter()
        .map(|note| note.title.clone())
        .collect::<Vec<String>>();
    assert_eq!(vec!["Milk recall", "Shopping list", "Workout plan"], found);

    // newest first
    let (status_code, notes) = helper::list_notes(&mut app, "?sort=-created_at").await;
    assert_eq!(StatusCode::OK, status_code);
    let found = notes
        .unwrap()
        .iter()
        .map(|note| note.id)
        .collect::<Vec<i64>>();
    assert_eq!(vec![ids[2], ids[1], ids[0]], found);

    // without a sort parameter the list is ordered by creation date
    let (status_code, notes) = helper::list_notes(&mut app, "").await;
    assert_eq!(StatusCode::OK, status_code);
    let found = notes
        .unwrap()
        .iter()
        .map(|note| note.id)
        .collect::<Vec<i64>>();
    assert_eq!(ids, found);
}

#[sqlx::test]
async fn test_list_sort_unrecognized_key(pool: sqlx::SqlitePool) {
    let mut app = helper::setup_test_app(pool).await;

    let ids = seed_notes(&mut app).await;

    // silently ignored, all notes are returned
    let (status_code, notes) = helper::list_notes(&mut app, "?sort=body").await;
    assert_eq!(StatusCode::OK, status_code);
    let mut found = notes
        .unwrap()
        .iter()
        .map(|note| note.id)
        .collect::<Vec<i64>>();
    found.sort_unstable();
    assert_eq!(ids, found);
}

#[sqlx::test]
async fn test_list_search_and_sort_combined(pool: sqlx::SqlitePool) {
    let mut app = helper::setup_test_app(pool).await;

    let ids = seed_notes(&mut app).await;

    let (status_code, notes) = helper::list_notes(&mut app, "?q=milk&sort=-id").await;
    assert_eq!(StatusCode::OK, status_code);
    let found = notes
        .unwrap()
        .iter()
        .map(|note| note.id)
        .collect::<Vec<i64>>();
    assert_eq!(vec![ids[2], ids[0]], found);
}
