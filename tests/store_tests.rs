use guardarr::db::{Database, Store, StoreError};
use guardarr::entities::media_type::MediaType;

async fn memory_store() -> Store {
    let database = Database::new("sqlite::memory:");
    let conn = database.connect().await.expect("connect failed");
    Store::new(conn)
}

#[tokio::test]
async fn test_connect_is_idempotent() {
    let database = Database::new("sqlite::memory:");

    let first = database.connect().await.expect("first connect failed");
    let second = database.connect().await.expect("second connect failed");
    assert!(database.is_connected().await);

    // Both handles reach the same database.
    let profile = Store::new(first)
        .create_profile("Shared", None, None)
        .await
        .unwrap();
    let seen = Store::new(second).get_profile(&profile.id).await.unwrap();
    assert!(seen.is_some());
}

#[tokio::test]
async fn test_get_connection_requires_connect() {
    let database = Database::new("sqlite::memory:");

    assert!(!database.is_connected().await);
    assert!(matches!(
        database.get_connection().await,
        Err(StoreError::NotConnected)
    ));

    database.connect().await.unwrap();
    assert!(database.get_connection().await.is_ok());
}

#[tokio::test]
async fn test_disconnect_is_safe_when_already_disconnected() {
    let database = Database::new("sqlite::memory:");

    database.disconnect().await.unwrap();
    database.disconnect().await.unwrap();

    database.connect().await.unwrap();
    database.disconnect().await.unwrap();
    assert!(!database.is_connected().await);
    assert!(matches!(
        database.get_connection().await,
        Err(StoreError::NotConnected)
    ));
}

#[tokio::test]
async fn test_ping() {
    let store = memory_store().await;
    store.ping().await.unwrap();
}

#[tokio::test]
async fn test_create_profile_round_trip() {
    let store = memory_store().await;

    let created = store
        .create_profile("Test Child", Some("boy-1".to_string()), None)
        .await
        .unwrap();

    assert!(!created.id.is_empty());
    assert_eq!(created.name, "Test Child");
    assert_eq!(created.avatar.as_deref(), Some("boy-1"));
    assert_eq!(created.pin, None);
    assert_eq!(created.created_at, created.updated_at);

    let fetched = store.get_profile(&created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_missing_profile_returns_none() {
    let store = memory_store().await;

    let missing = store.get_profile("no-such-id").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_list_profiles_newest_first() {
    let store = memory_store().await;

    for name in ["Alice", "Bob", "Carol"] {
        store.create_profile(name, None, None).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }

    let profiles = store.list_profiles().await.unwrap();
    let names: Vec<&str> = profiles.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Carol", "Bob", "Alice"]);
}

#[tokio::test]
async fn test_update_overwrites_fields_and_bumps_updated_at() {
    let store = memory_store().await;

    let created = store
        .create_profile("Before", Some("boy-1".to_string()), None)
        .await
        .unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let updated = store
        .update_profile(&created.id, "After", None, Some("1234".to_string()))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "After");
    assert_eq!(updated.avatar, None);
    assert_eq!(updated.pin.as_deref(), Some("1234"));
    assert_eq!(updated.created_at, created.created_at);

    let before = chrono::DateTime::parse_from_rfc3339(&created.updated_at).unwrap();
    let after = chrono::DateTime::parse_from_rfc3339(&updated.updated_at).unwrap();
    assert!(after > before);
}

#[tokio::test]
async fn test_update_missing_profile_returns_none() {
    let store = memory_store().await;

    let updated = store
        .update_profile("no-such-id", "Ghost", None, None)
        .await
        .unwrap();
    assert!(updated.is_none());
}

#[tokio::test]
async fn test_delete_profile_then_get_yields_none() {
    let store = memory_store().await;

    let created = store.create_profile("Short Lived", None, None).await.unwrap();
    store.delete_profile(&created.id).await.unwrap();

    assert!(store.get_profile(&created.id).await.unwrap().is_none());

    // Deleting again is a no-op.
    store.delete_profile(&created.id).await.unwrap();
}

#[tokio::test]
async fn test_delete_profile_cascades_whitelist() {
    let store = memory_store().await;

    let profile = store.create_profile("Cascade", None, None).await.unwrap();
    store
        .add_to_whitelist(&profile.id, "100", MediaType::Movie)
        .await
        .unwrap();
    store
        .add_to_whitelist(&profile.id, "200", MediaType::Tv)
        .await
        .unwrap();

    store.delete_profile(&profile.id).await.unwrap();

    let remaining = store.get_whitelist(&profile.id).await.unwrap();
    assert!(remaining.is_empty());
    assert!(
        !store
            .is_whitelisted(&profile.id, "100", MediaType::Movie)
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn test_whitelist_add_round_trip() {
    let store = memory_store().await;

    let profile = store.create_profile("Viewer", None, None).await.unwrap();
    let entry = store
        .add_to_whitelist(&profile.id, "12345", MediaType::Movie)
        .await
        .unwrap();

    assert!(!entry.id.is_empty());
    assert_eq!(entry.profile_id, profile.id);
    assert_eq!(entry.tmdb_id, "12345");
    assert_eq!(entry.media_type, MediaType::Movie);

    let listed = store.get_whitelist(&profile.id).await.unwrap();
    assert_eq!(listed, vec![entry]);
}

#[tokio::test]
async fn test_duplicate_whitelist_entry_is_rejected() {
    let store = memory_store().await;

    let profile = store.create_profile("Viewer", None, None).await.unwrap();
    store
        .add_to_whitelist(&profile.id, "555", MediaType::Movie)
        .await
        .unwrap();

    let duplicate = store
        .add_to_whitelist(&profile.id, "555", MediaType::Movie)
        .await;
    assert!(matches!(duplicate, Err(StoreError::UniqueViolation(_))));

    // Same title as a different media type is a different entry.
    store
        .add_to_whitelist(&profile.id, "555", MediaType::Tv)
        .await
        .unwrap();

    assert_eq!(store.get_whitelist(&profile.id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_whitelist_requires_existing_profile() {
    let store = memory_store().await;

    let orphan = store
        .add_to_whitelist("no-such-profile", "42", MediaType::Tv)
        .await;
    assert!(matches!(orphan, Err(StoreError::ForeignKeyViolation(_))));
}

#[tokio::test]
async fn test_whitelist_is_scoped_and_newest_first() {
    let store = memory_store().await;

    let first = store.create_profile("First", None, None).await.unwrap();
    let second = store.create_profile("Second", None, None).await.unwrap();

    store
        .add_to_whitelist(&first.id, "100", MediaType::Movie)
        .await
        .unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    store
        .add_to_whitelist(&first.id, "200", MediaType::Movie)
        .await
        .unwrap();
    store
        .add_to_whitelist(&second.id, "300", MediaType::Tv)
        .await
        .unwrap();

    let entries = store.get_whitelist(&first.id).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].tmdb_id, "200");
    assert_eq!(entries[1].tmdb_id, "100");
    assert!(entries.iter().all(|e| e.profile_id == first.id));
}

#[tokio::test]
async fn test_remove_whitelist_entry_by_composite_key() {
    let store = memory_store().await;

    let profile = store.create_profile("Viewer", None, None).await.unwrap();
    store
        .add_to_whitelist(&profile.id, "900", MediaType::Movie)
        .await
        .unwrap();
    store
        .add_to_whitelist(&profile.id, "900", MediaType::Tv)
        .await
        .unwrap();

    store
        .remove_from_whitelist(&profile.id, "900", MediaType::Movie)
        .await
        .unwrap();

    let remaining = store.get_whitelist(&profile.id).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].media_type, MediaType::Tv);

    // Removing the same entry again is a no-op.
    store
        .remove_from_whitelist(&profile.id, "900", MediaType::Movie)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_is_whitelisted() {
    let store = memory_store().await;

    let profile = store.create_profile("Viewer", None, None).await.unwrap();
    store
        .add_to_whitelist(&profile.id, "42", MediaType::Movie)
        .await
        .unwrap();

    assert!(
        store
            .is_whitelisted(&profile.id, "42", MediaType::Movie)
            .await
            .unwrap()
    );
    assert!(
        !store
            .is_whitelisted(&profile.id, "42", MediaType::Tv)
            .await
            .unwrap()
    );
    assert!(
        !store
            .is_whitelisted("someone-else", "42", MediaType::Movie)
            .await
            .unwrap()
    );
}
