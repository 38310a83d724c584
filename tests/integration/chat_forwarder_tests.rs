//! Chat forwarding integration tests
//!
//! Drives the forwarder the way the chat route does: admission first, then
//! the upstream call.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::default_reply;
    use crate::common::{MockAiService, upstream_config};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::ResponseTemplate;
    use xionco_gateway::{ChatForwarder, ChatRequest, GatewayError, RateLimiter};

    async fn gated_chat(
        limiter: &RateLimiter,
        forwarder: &ChatForwarder,
        client: &str,
        request: &ChatRequest,
    ) -> Result<xionco_gateway::ChatResponse, GatewayError> {
        let decision = limiter.admit(client);
        if !decision.allowed {
            return Err(GatewayError::rate_limited(decision.retry_after));
        }
        forwarder.handle(request).await
    }

    #[tokio::test]
    async fn test_rejected_requests_never_reach_upstream() {
        let service = MockAiService::healthy().await;
        let forwarder = ChatForwarder::new(&upstream_config(service.uri())).unwrap();
        let limiter = RateLimiter::with_policy(3, Duration::from_secs(900));
        let request = ChatRequest::new("Ada kursi ergonomis?");

        for _ in 0..3 {
            assert!(gated_chat(&limiter, &forwarder, "203.0.113.7", &request).await.is_ok());
        }
        let err = gated_chat(&limiter, &forwarder, "203.0.113.7", &request)
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::RateLimit { .. }));
        assert_eq!(service.received().await, 3);
    }

    #[tokio::test]
    async fn test_failed_upstream_calls_still_consume_quota() {
        let service =
            MockAiService::with_template(ResponseTemplate::new(502).set_body_string("bad gateway"))
                .await;
        let forwarder = ChatForwarder::new(&upstream_config(service.uri())).unwrap();
        let limiter = RateLimiter::with_policy(2, Duration::from_secs(900));
        let request = ChatRequest::new("halo");

        for _ in 0..2 {
            let err = gated_chat(&limiter, &forwarder, "198.51.100.1", &request)
                .await
                .unwrap_err();
            assert!(err.is_upstream());
        }

        let err = gated_chat(&limiter, &forwarder, "198.51.100.1", &request)
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::RateLimit { .. }));
    }

    #[tokio::test]
    async fn test_reply_fields_are_carried_through() {
        let service = MockAiService::replying(default_reply()).await;
        let forwarder = ChatForwarder::new(&upstream_config(service.uri())).unwrap();

        let reply = forwarder
            .handle(&ChatRequest::new("Kursi kerja?").with_product(2).with_user("u-9"))
            .await
            .unwrap();

        assert_eq!(reply.message, "Kursi ini cocok untuk kerja lama.");
        assert_eq!(reply.provider, "deepseek");
        assert_eq!(reply.related_products, vec![2]);
        assert!(reply.id.starts_with("msg_"));
    }

    #[tokio::test]
    async fn test_missing_confidence_defaults_to_zero() {
        let service = MockAiService::replying(json!({
            "message": "ok",
            "provider": "fallback"
        }))
        .await;
        let forwarder = ChatForwarder::new(&upstream_config(service.uri())).unwrap();

        let reply = forwarder.handle(&ChatRequest::new("halo")).await.unwrap();
        assert_eq!(reply.confidence, 0.0);
        assert!(reply.related_products.is_empty());
    }

    #[tokio::test]
    async fn test_reply_missing_provider_is_protocol_error() {
        let service = MockAiService::replying(json!({ "message": "ok" })).await;
        let forwarder = ChatForwarder::new(&upstream_config(service.uri())).unwrap();

        let err = forwarder.handle(&ChatRequest::new("halo")).await.unwrap_err();
        assert!(matches!(err, GatewayError::UpstreamProtocol(_)));
    }

    #[tokio::test]
    async fn test_chat_url_joins_base_and_path() {
        let forwarder =
            ChatForwarder::new(&upstream_config("http://ai.internal:5000/".to_string())).unwrap();
        assert_eq!(forwarder.chat_url(), "http://ai.internal:5000/api/v1/chat");
        assert_eq!(forwarder.timeout(), Duration::from_secs(2));
    }
}
