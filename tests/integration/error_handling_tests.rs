//! Error handling integration tests
//!
//! Verifies how each gateway error renders as an HTTP response.

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;
    use actix_web::body::to_bytes;
    use actix_web::http::header::RETRY_AFTER;
    use serde_json::Value;
    use std::time::Duration;
    use xionco_gateway::GatewayError;
    use xionco_gateway::utils::error::retry_after_seconds;

    async fn body_of(err: &GatewayError) -> Value {
        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn test_rate_limit_response() {
        let err = GatewayError::rate_limited(Duration::from_millis(1500));
        let response = err.error_response();

        assert_eq!(response.status().as_u16(), 429);
        assert_eq!(response.headers().get(RETRY_AFTER).unwrap(), "2");

        let body = body_of(&err).await;
        assert_eq!(body["error"], "Rate limit exceeded");
        assert_eq!(body["retryAfterSeconds"], 2);
        assert_eq!(body["retry_after"], 2);
    }

    #[actix_web::test]
    async fn test_upstream_errors_share_503_shape() {
        let errors = [
            GatewayError::upstream_unavailable("http://ai/api/v1/chat", "connection refused"),
            GatewayError::upstream_error(500, "model crashed"),
            GatewayError::upstream_protocol("expected value at line 1"),
        ];

        for err in &errors {
            assert_eq!(err.error_response().status().as_u16(), 503);
            let body = body_of(err).await;
            assert_eq!(body["error"], "AI service temporarily unavailable");
            assert_eq!(body["message"], err.to_string());
        }
    }

    #[actix_web::test]
    async fn test_validation_and_not_found_bodies() {
        let body = body_of(&GatewayError::validation("message cannot be empty")).await;
        assert_eq!(body["error"], "message cannot be empty");

        let err = GatewayError::not_found("/nope");
        assert_eq!(err.error_response().status().as_u16(), 404);
        let body = body_of(&err).await;
        assert_eq!(body["path"], "/nope");
    }

    #[actix_web::test]
    async fn test_internal_errors_are_not_leaked() {
        let err = GatewayError::internal("mutex poisoned at limiter.rs");
        assert_eq!(err.error_response().status().as_u16(), 500);
        let body = body_of(&err).await;
        assert_eq!(body["error"], "An internal error occurred");
    }

    #[test]
    fn test_retry_after_rounding() {
        assert_eq!(retry_after_seconds(Duration::ZERO), 1);
        assert_eq!(retry_after_seconds(Duration::from_millis(1)), 1);
        assert_eq!(retry_after_seconds(Duration::from_secs(840)), 840);
        assert_eq!(retry_after_seconds(Duration::from_millis(840_001)), 841);
    }
}
