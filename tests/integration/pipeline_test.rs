//! End-to-end pipeline scenarios through the public facade.

use std::sync::Arc;

use chrono::Duration;

use signalhub::{ErrorKind, NotificationPipeline, NotificationRequest, Urgency, UserId};

use crate::helpers::{maria_pipeline, StaticDirectory};

#[tokio::test]
async fn test_send_round_trip_to_inbox() {
    let (pipeline, _clock, user_id) = maria_pipeline();

    let id = pipeline
        .send(NotificationRequest::new(user_id, "job", "jobs", "ignored").immediate())
        .await
        .unwrap();

    assert_eq!(pipeline.tick().await.unwrap(), 1);

    let listed = pipeline.user_notifications(user_id, 1);
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].notification.id, id);
    assert_eq!(
        listed[0].notification.content,
        "Hi Maria! A new job placement matches your profile."
    );
}

#[tokio::test]
async fn test_validation_error_is_synchronous() {
    let (pipeline, _clock, user_id) = maria_pipeline();

    let result = pipeline
        .send(NotificationRequest::new(user_id, "job", "jobs", "   "))
        .await;

    let error = result.unwrap_err();
    assert_eq!(error.kind, ErrorKind::Validation);
}

#[tokio::test]
async fn test_deferred_notification_waits_for_peak_hour() {
    let (pipeline, clock, user_id) = maria_pipeline();

    // Medium urgency at 09:30 defers to Maria's 18:00 peak hour.
    pipeline
        .send(NotificationRequest::new(user_id, "job", "jobs", "later"))
        .await
        .unwrap();

    assert_eq!(pipeline.tick().await.unwrap(), 0);
    assert!(pipeline.user_notifications(user_id, 10).is_empty());

    let stats = pipeline.queue_stats().await;
    assert_eq!(stats.deferred, 1);

    clock.advance(Duration::hours(9));
    assert_eq!(pipeline.tick().await.unwrap(), 1);
    assert_eq!(pipeline.user_notifications(user_id, 10).len(), 1);
}

#[tokio::test]
async fn test_critical_bypasses_scheduling() {
    let (pipeline, _clock, user_id) = maria_pipeline();

    pipeline
        .send(
            NotificationRequest::new(user_id, "message", "messages", "Contract cancelled")
                .with_urgency(Urgency::Critical),
        )
        .await
        .unwrap();

    // Delivered on the very next tick even though 18:00 is hours away.
    assert_eq!(pipeline.tick().await.unwrap(), 1);

    let listed = pipeline.user_notifications(user_id, 1);
    let notification = &listed[0].notification;
    assert_eq!(notification.deliver_at, notification.created_at);
    assert!(notification.channels.len() <= 3);
    assert!(notification
        .channels
        .contains(&signalhub::Channel::InApp));
}

#[tokio::test]
async fn test_cancel_pending_notification() {
    let (pipeline, clock, user_id) = maria_pipeline();

    let id = pipeline
        .send(NotificationRequest::new(user_id, "job", "jobs", "later"))
        .await
        .unwrap();

    assert!(pipeline.cancel(id).await);

    clock.advance(Duration::hours(12));
    assert_eq!(pipeline.tick().await.unwrap(), 0);
    assert!(pipeline.user_notifications(user_id, 10).is_empty());

    // Already gone.
    assert!(!pipeline.cancel(id).await);
}

#[tokio::test]
async fn test_mark_engaged_is_idempotent() {
    let (pipeline, _clock, user_id) = maria_pipeline();

    let id = pipeline
        .send(NotificationRequest::new(user_id, "job", "jobs", "hi").immediate())
        .await
        .unwrap();
    pipeline.tick().await.unwrap();

    assert!(pipeline.mark_engaged(user_id, id));
    assert!(pipeline.mark_engaged(user_id, id));
    assert!(!pipeline.mark_engaged(user_id, signalhub::NotificationId::new()));
}

#[tokio::test]
async fn test_inbox_read_state_and_clear() {
    let (pipeline, _clock, user_id) = maria_pipeline();

    let id = pipeline
        .send(NotificationRequest::new(user_id, "job", "jobs", "a").immediate())
        .await
        .unwrap();
    pipeline
        .send(NotificationRequest::new(user_id, "job", "jobs", "b").immediate())
        .await
        .unwrap();
    pipeline.tick().await.unwrap();

    assert_eq!(pipeline.unread_count(user_id), 2);
    assert!(pipeline.mark_read(user_id, id));
    assert_eq!(pipeline.unread_count(user_id), 1);

    assert_eq!(pipeline.clear_notifications(user_id), 2);
    assert_eq!(pipeline.unread_count(user_id), 0);
}

#[tokio::test]
async fn test_unknown_user_still_receives_in_app() {
    // A directory with no data at all: scoring and channel selection
    // degrade to defaults, delivery still happens.
    let pipeline = NotificationPipeline::builder(Arc::new(StaticDirectory::default()))
        .with_clock(crate::helpers::manual_clock())
        .build();
    let user_id = UserId::new();

    let id = pipeline
        .send(NotificationRequest::new(user_id, "job", "jobs", "Hello {name}!").immediate())
        .await
        .unwrap();
    pipeline.tick().await.unwrap();

    let listed = pipeline.user_notifications(user_id, 1);
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].notification.id, id);
    // No profile: content unchanged.
    assert_eq!(listed[0].notification.content, "Hello {name}!");
}

#[tokio::test(start_paused = true)]
async fn test_spawned_dispatcher_delivers_and_shuts_down() {
    let (pipeline, _clock, user_id) = maria_pipeline();
    let pipeline = Arc::new(pipeline);
    let handle = pipeline.spawn();

    pipeline
        .send(NotificationRequest::new(user_id, "job", "jobs", "hi").immediate())
        .await
        .unwrap();

    // Paused tokio time auto-advances the dispatcher's sleep.
    let delivered = tokio::time::timeout(std::time::Duration::from_secs(30), async {
        loop {
            if !pipeline.user_notifications(user_id, 1).is_empty() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        }
    })
    .await;
    assert!(delivered.is_ok());

    handle.shutdown().await;
}
