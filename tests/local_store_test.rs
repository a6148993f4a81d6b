use bytes::Bytes;

use vosk_captions::application::ports::{StagingStore, StagingStoreError};
use vosk_captions::domain::{StoragePath, VideoId};
use vosk_captions::infrastructure::storage::LocalStagingStore;

fn new_store() -> (LocalStagingStore, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStagingStore::new(dir.path().to_path_buf()).unwrap();
    (store, dir)
}

#[tokio::test]
async fn given_stored_object_when_fetching_then_bytes_round_trip() {
    let (store, _dir) = new_store();
    let path = StoragePath::for_upload(&VideoId::new(), "clip.mp4");
    let data = Bytes::from_static(b"fake mp4 bytes");

    let written = store.store(&path, data.clone()).await.unwrap();
    let fetched = store.fetch(&path).await.unwrap();

    assert_eq!(written, data.len() as u64);
    assert_eq!(fetched, data.to_vec());
}

#[tokio::test]
async fn given_missing_object_when_fetching_then_returns_not_found() {
    let (store, _dir) = new_store();
    let path = StoragePath::from_raw("uploads/nope/clip.mp4");

    let result = store.fetch(&path).await;

    assert!(matches!(result, Err(StagingStoreError::NotFound(_))));
}

#[tokio::test]
async fn given_deleted_object_when_checking_existence_then_false() {
    let (store, _dir) = new_store();
    let path = StoragePath::for_upload(&VideoId::new(), "clip.mp4");
    store
        .store(&path, Bytes::from_static(b"payload"))
        .await
        .unwrap();
    assert!(store.exists(&path).await.unwrap());

    store.delete(&path).await.unwrap();

    assert!(!store.exists(&path).await.unwrap());
}
