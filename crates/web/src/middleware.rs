use std::time::{Duration, Instant};

use axum::{extract::Request, middleware::Next, response::Response};

/// One log line per request: method, path, status and latency.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let res = next.run(req).await;

    tracing::info!(
        %method,
        path = %path,
        status = res.status().as_u16(),
        elapsed_ms = elapsed_millis(started.elapsed()),
        "request served"
    );
    res
}

/// Saturates instead of truncating the `u128` millisecond count.
fn elapsed_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_millis_is_exact_for_ordinary_latencies() {
        assert_eq!(elapsed_millis(Duration::from_micros(2_500)), 2);
        assert_eq!(elapsed_millis(Duration::from_secs(3)), 3_000);
    }

    #[test]
    fn elapsed_millis_saturates_instead_of_wrapping() {
        assert_eq!(elapsed_millis(Duration::MAX), u64::MAX);
    }
}
