//! Configuration loading integration tests
//!
//! Covers YAML files on disk, partial sections falling back to defaults, and
//! environment overrides on top of a loaded file.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;
    use xionco_gateway::{Config, GatewayError};

    fn write_config(yaml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_full_config_file() {
        let file = write_config(
            r#"
server:
  host: 127.0.0.1
  port: 8080
  cors:
    allowed_origins: ["https://xionco.example"]
upstream:
  base_url: http://ai:5000
  timeout_secs: 30
rate_limit:
  max_requests: 20
  window_secs: 60
conversations:
  max_conversations: 10
  max_messages: 5
"#,
        );

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.server().address(), "127.0.0.1:8080");
        assert!(!config.server().cors.allows_all_origins());
        assert_eq!(config.upstream().chat_url(), "http://ai:5000/api/v1/chat");
        assert_eq!(config.upstream().timeout(), Duration::from_secs(30));
        assert_eq!(config.rate_limit().max_requests, 20);
        assert_eq!(config.rate_limit().window(), Duration::from_secs(60));
        assert_eq!(config.conversations.max_messages, 5);
    }

    #[tokio::test]
    async fn test_partial_file_keeps_defaults() {
        let file = write_config("upstream:\n  base_url: http://ai:5000\n");

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.server().port, 3001);
        assert_eq!(config.rate_limit().max_requests, 100);
        assert_eq!(config.rate_limit().window_secs, 900);
        assert_eq!(config.upstream().timeout_secs, 60);
    }

    #[tokio::test]
    async fn test_invalid_file_values_are_rejected() {
        let file = write_config("rate_limit:\n  max_requests: 0\n");

        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, GatewayError::Config(_)));
        assert!(err.to_string().contains("Rate limit config error"));
    }

    #[tokio::test]
    async fn test_missing_file_is_config_error() {
        let err = Config::from_file("/definitely/not/here.yaml").await.unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[tokio::test]
    async fn test_env_overrides_file() {
        let file = write_config("server:\n  port: 8080\nupstream:\n  base_url: http://ai:5000\n");
        let mut config = Config::from_file(file.path()).await.unwrap();

        let env: HashMap<&str, &str> = HashMap::from([
            ("PYTHON_SERVICE_URL", "http://python-service:5000"),
            ("FIBER_PORT", "3005"),
            ("ALLOWED_ORIGINS", "http://localhost:3000, http://localhost:5173"),
        ]);
        config
            .apply_env_from(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.upstream().base_url, "http://python-service:5000");
        assert_eq!(config.server().port, 3005);
        assert_eq!(
            config.server().cors.allowed_origins,
            vec!["http://localhost:3000", "http://localhost:5173"]
        );
    }

    #[tokio::test]
    async fn test_yaml_round_trip_loads_back() {
        let mut config = Config::default();
        config.rate_limit.max_requests = 42;

        let file = write_config(&config.to_yaml().unwrap());
        let loaded = Config::from_file(file.path()).await.unwrap();
        assert_eq!(loaded.rate_limit().max_requests, 42);
    }
}
