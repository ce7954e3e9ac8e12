use serenity::async_trait;
use std::sync::Arc;
use std::time::Duration;

use super::{guild_event, FakeResponder, Sent};
use crate::bot::router::{CommandHandler, CommandRouter};
use crate::model::interaction::{InteractionEvent, ResponseData};
use crate::service::discord::DiscordApi;
use crate::service::test::FakeDiscordApi;

const DEFER_TIMEOUT: Duration = Duration::from_millis(1500);

/// Handler that sleeps for `delay` and then replies with `reply`.
struct StubHandler {
    delay: Duration,
    reply: Option<&'static str>,
}

#[async_trait]
impl CommandHandler for StubHandler {
    async fn handle(
        &self,
        _discord: Arc<dyn DiscordApi>,
        _event: InteractionEvent,
    ) -> Option<ResponseData> {
        tokio::time::sleep(self.delay).await;
        self.reply.map(ResponseData::ephemeral)
    }
}

struct PanickingHandler;

#[async_trait]
impl CommandHandler for PanickingHandler {
    async fn handle(
        &self,
        _discord: Arc<dyn DiscordApi>,
        _event: InteractionEvent,
    ) -> Option<ResponseData> {
        panic!("handler blew up");
    }
}

fn router_with(handler: Arc<dyn CommandHandler>) -> CommandRouter {
    let mut router = CommandRouter::new(DEFER_TIMEOUT);
    router.add("stub", handler);
    router
}

/// Tests dispatching to a handler that finishes before the deferral timeout.
///
/// Expected: single initial response with the handler's reply, no deferral
#[tokio::test(start_paused = true)]
async fn responds_directly_when_handler_is_fast() {
    let router = router_with(Arc::new(StubHandler {
        delay: Duration::from_millis(10),
        reply: Some("fast"),
    }));
    let responder = FakeResponder::new();

    router
        .dispatch(
            Arc::new(FakeDiscordApi::new()),
            guild_event("stub", vec![]),
            &responder,
        )
        .await
        .unwrap();

    assert_eq!(
        responder.sent(),
        vec![Sent::Respond(ResponseData::ephemeral("fast"))]
    );
}

/// Tests dispatching to a handler that outlives the deferral timeout.
///
/// Expected: ephemeral deferral first, then the reply as a follow-up
#[tokio::test(start_paused = true)]
async fn defers_then_follows_up_when_handler_is_slow() {
    let router = router_with(Arc::new(StubHandler {
        delay: Duration::from_secs(5),
        reply: Some("slow"),
    }));
    let responder = FakeResponder::new();

    router
        .dispatch(
            Arc::new(FakeDiscordApi::new()),
            guild_event("stub", vec![]),
            &responder,
        )
        .await
        .unwrap();

    assert_eq!(
        responder.sent(),
        vec![
            Sent::Defer { ephemeral: true },
            Sent::FollowUp(ResponseData::ephemeral("slow")),
        ]
    );
}

/// Tests dispatching a command name nobody registered.
///
/// Expected: generic ephemeral "unknown command" error
#[tokio::test]
async fn rejects_unknown_command() {
    let router = router_with(Arc::new(StubHandler {
        delay: Duration::ZERO,
        reply: Some("unused"),
    }));
    let responder = FakeResponder::new();

    router
        .dispatch(
            Arc::new(FakeDiscordApi::new()),
            guild_event("troll_nope", vec![]),
            &responder,
        )
        .await
        .unwrap();

    assert_eq!(
        responder.sent(),
        vec![Sent::Respond(ResponseData::error("unknown command"))]
    );
}

/// Tests a handler that returns no response.
///
/// Expected: generic ephemeral "internal error" instead of silence
#[tokio::test]
async fn substitutes_error_for_missing_response() {
    let router = router_with(Arc::new(StubHandler {
        delay: Duration::ZERO,
        reply: None,
    }));
    let responder = FakeResponder::new();

    router
        .dispatch(
            Arc::new(FakeDiscordApi::new()),
            guild_event("stub", vec![]),
            &responder,
        )
        .await
        .unwrap();

    assert_eq!(
        responder.sent(),
        vec![Sent::Respond(ResponseData::error("internal error"))]
    );
}

/// Tests a handler that panics.
///
/// Expected: generic ephemeral "internal error"; the router itself survives
#[tokio::test]
async fn substitutes_error_for_panicking_handler() {
    let router = router_with(Arc::new(PanickingHandler));
    let responder = FakeResponder::new();

    router
        .dispatch(
            Arc::new(FakeDiscordApi::new()),
            guild_event("stub", vec![]),
            &responder,
        )
        .await
        .unwrap();

    assert_eq!(
        responder.sent(),
        vec![Sent::Respond(ResponseData::error("internal error"))]
    );
}
