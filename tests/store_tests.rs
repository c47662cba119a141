use nshow::db::Store;
use nshow::models::video::{MediaType, VideoInput, WatchStatus};

async fn spawn_store() -> Store {
    Store::new("sqlite::memory:")
        .await
        .expect("Failed to open in-memory store")
}

fn sample_input() -> VideoInput {
    VideoInput {
        title: "测试剧集".to_string(),
        media_type: MediaType::Series,
        genre: Some("剧情".to_string()),
        year: Some(2024),
        director: Some("某导演".to_string()),
        actors: Some("演员甲, 演员乙".to_string()),
        description: Some("一部用于测试的剧集。".to_string()),
        poster_url: Some("https://example.com/poster.jpg".to_string()),
        video_url: Some("https://example.com/video.mp4".to_string()),
        rating: 7.2,
        episodes: 12,
        current_episode: 3,
        status: WatchStatus::Watching,
    }
}

#[tokio::test]
async fn test_seeding_is_idempotent() {
    let store = spawn_store().await;

    let first = store.seed_if_empty().await.unwrap();
    assert_eq!(first, 5);
    assert_eq!(store.video_count().await.unwrap(), 5);

    let second = store.seed_if_empty().await.unwrap();
    assert_eq!(second, 0);
    assert_eq!(store.video_count().await.unwrap(), 5);
}

#[tokio::test]
async fn test_create_then_fetch_round_trips_fields() {
    let store = spawn_store().await;
    let input = sample_input();

    let created = store.create_video(&input).await.unwrap();
    assert!(created.id > 0);

    let fetched = store.get_video(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.title, input.title);
    assert_eq!(fetched.media_type, "series");
    assert_eq!(fetched.genre, input.genre);
    assert_eq!(fetched.year, input.year);
    assert_eq!(fetched.director, input.director);
    assert_eq!(fetched.actors, input.actors);
    assert_eq!(fetched.description, input.description);
    assert_eq!(fetched.poster_url, input.poster_url);
    assert_eq!(fetched.video_url, input.video_url);
    assert!((fetched.rating - input.rating).abs() < f32::EPSILON);
    assert_eq!(fetched.episodes, input.episodes);
    assert_eq!(fetched.current_episode, input.current_episode);
    assert_eq!(fetched.status, "watching");

    let created_at = fetched.created_at.expect("created_at should be set");
    let updated_at = fetched.updated_at.expect("updated_at should be set");
    assert!(updated_at >= created_at);
}

#[tokio::test]
async fn test_update_refreshes_updated_at() {
    let store = spawn_store().await;
    let created = store.create_video(&sample_input()).await.unwrap();
    let created_at = created.created_at.unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let mut input = sample_input();
    input.status = WatchStatus::Completed;
    input.current_episode = 12;

    let updated = store
        .update_video(created.id, &input)
        .await
        .unwrap()
        .expect("row should exist");

    assert_eq!(updated.status, "completed");
    assert_eq!(updated.current_episode, 12);
    assert_eq!(updated.created_at.unwrap(), created_at);
    assert!(updated.updated_at.unwrap() > created_at);
}

#[tokio::test]
async fn test_update_missing_row_returns_none() {
    let store = spawn_store().await;
    let result = store.update_video(9999, &sample_input()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_delete_removes_row() {
    let store = spawn_store().await;
    let created = store.create_video(&sample_input()).await.unwrap();

    assert!(store.delete_video(created.id).await.unwrap());
    assert!(store.get_video(created.id).await.unwrap().is_none());
    assert!(!store.delete_video(created.id).await.unwrap());
}

#[tokio::test]
async fn test_stats_counts_by_status_and_type() {
    let store = spawn_store().await;
    store.seed_if_empty().await.unwrap();

    let stats = store.watch_stats().await.unwrap();
    assert_eq!(stats.total, 5);
    assert_eq!(stats.watching, 2);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.planned, 2);
    assert_eq!(stats.by_type.get("电视剧"), Some(&2));
    assert_eq!(stats.by_type.get("电影"), Some(&1));
    assert_eq!(stats.by_type.get("动漫"), Some(&2));
}
