//! Rate limiter integration tests

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::{Duration, Instant};
    use xionco_gateway::RateLimiter;
    use xionco_gateway::config::RateLimitConfig;

    #[test]
    fn test_default_policy_is_100_per_15_minutes() {
        let limiter = RateLimiter::new(RateLimitConfig::default());
        let start = Instant::now();

        for i in 1..=100 {
            let decision = limiter.admit_at("192.0.2.10", start);
            assert!(decision.allowed, "request {} should be admitted", i);
            assert_eq!(decision.count, i);
        }

        let decision = limiter.admit_at("192.0.2.10", start + Duration::from_secs(60));
        assert!(!decision.allowed);
        assert_eq!(decision.remaining, 0);
        assert_eq!(decision.retry_after, Duration::from_secs(840));

        let decision = limiter.admit_at("192.0.2.10", start + Duration::from_secs(900));
        assert!(decision.allowed);
        assert_eq!(decision.count, 1);
    }

    #[test]
    fn test_rejections_do_not_extend_window() {
        let limiter = RateLimiter::with_policy(1, Duration::from_secs(10));
        let start = Instant::now();

        assert!(limiter.admit_at("a", start).allowed);
        for s in 1..10 {
            assert!(!limiter.admit_at("a", start + Duration::from_secs(s)).allowed);
        }
        assert!(limiter.admit_at("a", start + Duration::from_secs(10)).allowed);
    }

    #[test]
    fn test_shared_limiter_across_threads() {
        let limiter = Arc::new(RateLimiter::with_policy(10, Duration::from_secs(60)));

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let limiter = Arc::clone(&limiter);
                std::thread::spawn(move || {
                    let client = format!("10.1.0.{}", t);
                    (0..20).filter(|_| limiter.admit(&client).allowed).count()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 10);
        }
        assert_eq!(limiter.tracked_clients(), 4);
    }

    #[test]
    fn test_disabled_limiter_tracks_nothing() {
        let limiter = RateLimiter::new(RateLimitConfig {
            enabled: false,
            ..RateLimitConfig::default()
        });

        for _ in 0..500 {
            assert!(limiter.admit("192.0.2.20").allowed);
        }
        assert_eq!(limiter.tracked_clients(), 0);
        assert!(!limiter.is_enabled());
    }

    #[test]
    fn test_sweep_removes_only_expired_windows() {
        let limiter = RateLimiter::with_policy(5, Duration::from_secs(30));
        let start = Instant::now();

        limiter.admit_at("old", start);
        limiter.admit_at("new", start + Duration::from_secs(20));

        assert_eq!(limiter.sweep_expired(start + Duration::from_secs(30)), 1);
        assert!(limiter.window("old").is_none());
        assert!(limiter.window("new").is_some());
    }
}
