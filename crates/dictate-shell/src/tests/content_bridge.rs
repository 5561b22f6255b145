use crate::{AppError, ContentBridge, ShellEvent, tests::fakes};

use tokio::sync::mpsc;

/// WHAT: Registration request resolves to the host's answer
/// WHY: The content layer awaits a boolean from the host
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_granting_host_when_registering_then_true_and_descriptor_forwarded() {
    // Given: A host that grants every request
    let (host_tx, mut seen_rx) = fakes::spawn_fake_host(true);
    let bridge = ContentBridge::new(host_tx);

    // When: Requesting Ctrl+Shift+S
    let registered = bridge
        .register_global_shortcut(Some("Ctrl+Shift+S".to_string()))
        .await
        .unwrap();

    // Then: True and the host saw the descriptor
    assert!(registered);
    assert_eq!(seen_rx.recv().await.unwrap().as_deref(), Some("Ctrl+Shift+S"));
}

/// WHAT: Refusal surfaces as false, not an error
/// WHY: Validation and conflicts are reported as a plain boolean
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_refusing_host_when_registering_then_false() {
    // Given: A host that refuses every request
    let (host_tx, _seen_rx) = fakes::spawn_fake_host(false);
    let bridge = ContentBridge::new(host_tx);

    // When: Requesting a shortcut
    let registered = bridge
        .register_global_shortcut(Some("Ctrl+@".to_string()))
        .await
        .unwrap();

    // Then: False
    assert!(!registered);
}

/// WHAT: Closed host channel is a send error
/// WHY: The content layer must notice the host has gone away
#[tokio::test]
async fn given_closed_host_when_registering_then_channel_send_failed() {
    // Given: A host channel whose receiver is gone
    let (host_tx, host_rx) = mpsc::unbounded_channel::<ShellEvent>();
    drop(host_rx);
    let bridge = ContentBridge::new(host_tx);

    // When: Requesting a shortcut
    let result = bridge.register_global_shortcut(None).await;

    // Then: Channel error
    assert!(matches!(result, Err(AppError::ChannelSendFailed { .. })));
}

/// WHAT: Host dropping the responder is an error
/// WHY: A request must never hang when the host discards it
#[tokio::test]
async fn given_host_dropping_request_when_registering_then_channel_send_failed() {
    // Given: A host that drops every request unanswered
    let (host_tx, mut host_rx) = mpsc::unbounded_channel::<ShellEvent>();
    tokio::spawn(async move { while host_rx.recv().await.is_some() {} });
    let bridge = ContentBridge::new(host_tx);

    // When: Requesting a shortcut
    let result = bridge.register_global_shortcut(Some("Ctrl+A".to_string())).await;

    // Then: Channel error
    assert!(matches!(result, Err(AppError::ChannelSendFailed { .. })));
}

/// WHAT: Quit request reaches the host as a quit event
/// WHY: A failing content layer must exit through the host's shutdown path
#[test]
#[allow(clippy::unwrap_used)]
fn given_bridge_when_requesting_quit_then_host_receives_quit() {
    // Given: A bridge over a plain channel
    let (host_tx, mut host_rx) = mpsc::unbounded_channel();
    let bridge = ContentBridge::new(host_tx);

    // When: Requesting quit
    bridge.request_quit().unwrap();

    // Then: The host sees exactly one quit event
    assert!(matches!(host_rx.try_recv().unwrap(), ShellEvent::Quit));
    assert!(host_rx.try_recv().is_err());
}

/// WHAT: Quit request to a stopped host is an error
/// WHY: The caller logs it instead of assuming shutdown began
#[test]
fn given_closed_host_when_requesting_quit_then_channel_send_failed() {
    // Given: A bridge whose host is gone
    let (host_tx, host_rx) = mpsc::unbounded_channel::<ShellEvent>();
    drop(host_rx);
    let bridge = ContentBridge::new(host_tx);

    // When: Requesting quit
    let result = bridge.request_quit();

    // Then: Send failure
    assert!(matches!(result, Err(AppError::ChannelSendFailed { .. })));
}
