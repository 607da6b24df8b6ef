mod common;

use sqlx::PgPool;
use std::sync::Arc;
use tokio::task::JoinSet;

use linksnip::domain::access_event::AccessEvent;
use linksnip::domain::access_worker::run_access_worker;
use linksnip::domain::repositories::StatsRepository;
use linksnip::error::AppError;
use linksnip::infrastructure::persistence::PgStatsRepository;

#[sqlx::test]
async fn test_count_is_zero_when_never_accessed(pool: PgPool) {
    let repo = PgStatsRepository::new(Arc::new(pool.clone()));

    common::create_test_alias(&pool, "quiet1", "https://example.com").await;

    assert_eq!(repo.access_count("quiet1").await.unwrap(), 0);
    assert_eq!(common::stat_row_count(&pool, "quiet1").await, 0);
}

#[sqlx::test]
async fn test_first_increment_creates_row_at_one(pool: PgPool) {
    let repo = PgStatsRepository::new(Arc::new(pool.clone()));

    common::create_test_alias(&pool, "hit1", "https://example.com").await;

    repo.increment_access("hit1").await.unwrap();

    assert_eq!(repo.access_count("hit1").await.unwrap(), 1);
    assert_eq!(common::stat_row_count(&pool, "hit1").await, 1);
}

#[sqlx::test]
async fn test_increments_accumulate(pool: PgPool) {
    let repo = PgStatsRepository::new(Arc::new(pool.clone()));

    common::create_test_alias(&pool, "hit5", "https://example.com").await;

    for _ in 0..5 {
        repo.increment_access("hit5").await.unwrap();
    }

    assert_eq!(repo.access_count("hit5").await.unwrap(), 5);
}

#[sqlx::test]
async fn test_increment_unknown_code_is_not_found(pool: PgPool) {
    let repo = PgStatsRepository::new(Arc::new(pool));

    let result = repo.increment_access("doesNotExist").await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_concurrent_increments_lose_no_updates(pool: PgPool) {
    let repo = Arc::new(PgStatsRepository::new(Arc::new(pool.clone())));

    common::create_test_alias(&pool, "race1", "https://example.com").await;

    const WRITERS: usize = 20;

    let mut tasks = JoinSet::new();
    for _ in 0..WRITERS {
        let repo = Arc::clone(&repo);
        tasks.spawn(async move { repo.increment_access("race1").await });
    }
    while let Some(result) = tasks.join_next().await {
        result.unwrap().unwrap();
    }

    assert_eq!(repo.access_count("race1").await.unwrap(), WRITERS as i64);
}

#[sqlx::test]
async fn test_access_worker_drains_events(pool: PgPool) {
    let repo = Arc::new(PgStatsRepository::new(Arc::new(pool.clone())));

    common::create_test_alias(&pool, "wrk1", "https://example.com").await;

    let (tx, rx) = tokio::sync::mpsc::channel(16);
    let worker = tokio::spawn(run_access_worker(rx, Arc::clone(&repo)));

    for _ in 0..3 {
        tx.send(AccessEvent::new("wrk1", None)).await.unwrap();
    }
    // Events for unknown codes are dropped without stopping the worker.
    tx.send(AccessEvent::new("ghost", None)).await.unwrap();
    drop(tx);
    worker.await.unwrap();

    assert_eq!(repo.access_count("wrk1").await.unwrap(), 3);
    assert_eq!(repo.access_count("ghost").await.unwrap(), 0);
}
