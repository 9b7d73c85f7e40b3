//! Dispatch ordering and failure-containment scenarios.

use std::sync::Arc;

use signalhub::{
    Channel, NotificationPipeline, NotificationRequest, Urgency, UserId,
};

use crate::helpers::{
    manual_clock, FailingSender, RecordingMonitor, RecordingSender, StaticDirectory,
};

#[tokio::test]
async fn test_dispatch_order_critical_first_then_score() {
    let user_id = UserId::new();
    let in_app = Arc::new(RecordingSender::new(Channel::InApp));
    let pipeline = NotificationPipeline::builder(Arc::new(StaticDirectory::with_maria(user_id)))
        .with_clock(manual_clock())
        .with_sender(in_app.clone())
        .build();

    // Urgency drives the score here, so high outranks medium; critical
    // goes first regardless of score.
    let medium = pipeline
        .send(NotificationRequest::new(user_id, "job", "jobs", "m").immediate())
        .await
        .unwrap();
    let critical = pipeline
        .send(
            NotificationRequest::new(user_id, "job", "jobs", "c").with_urgency(Urgency::Critical),
        )
        .await
        .unwrap();
    let high = pipeline
        .send(
            NotificationRequest::new(user_id, "job", "jobs", "h")
                .with_urgency(Urgency::High)
                .immediate(),
        )
        .await
        .unwrap();

    assert_eq!(pipeline.tick().await.unwrap(), 3);

    let delivered = in_app.delivered.lock().unwrap().clone();
    assert_eq!(delivered, vec![critical, high, medium]);
}

#[tokio::test]
async fn test_failed_channel_reported_and_contained() {
    let user_id = UserId::new();
    let monitor = Arc::new(RecordingMonitor::default());
    let pipeline = NotificationPipeline::builder(Arc::new(StaticDirectory::with_maria(user_id)))
        .with_clock(manual_clock())
        .with_monitor(monitor.clone())
        .with_sender(Arc::new(FailingSender::new(Channel::Push)))
        .build();

    let id = pipeline
        .send(
            NotificationRequest::new(user_id, "message", "messages", "now")
                .with_urgency(Urgency::Critical),
        )
        .await
        .unwrap();

    assert_eq!(pipeline.tick().await.unwrap(), 1);

    // The push failure was reported but the in-app copy still landed
    // and the item left the queue for good.
    let failures = monitor.failures.lock().unwrap().clone();
    assert!(failures.contains(&(id, Channel::Push)));
    assert_eq!(pipeline.user_notifications(user_id, 1).len(), 1);
    assert_eq!(pipeline.queue_stats().await.pending, 0);
    assert_eq!(pipeline.tick().await.unwrap(), 0);
}

#[tokio::test]
async fn test_items_enqueued_during_tick_wait_for_next_tick() {
    let user_id = UserId::new();
    let pipeline = NotificationPipeline::builder(Arc::new(StaticDirectory::with_maria(user_id)))
        .with_clock(manual_clock())
        .build();

    pipeline
        .send(NotificationRequest::new(user_id, "job", "jobs", "first").immediate())
        .await
        .unwrap();
    assert_eq!(pipeline.tick().await.unwrap(), 1);

    pipeline
        .send(NotificationRequest::new(user_id, "job", "jobs", "second").immediate())
        .await
        .unwrap();
    assert_eq!(pipeline.tick().await.unwrap(), 1);
    assert_eq!(pipeline.user_notifications(user_id, 10).len(), 2);
}
