use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use uuid::Uuid;

static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Request context for correlation and timing
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Id the host uses to route the reply back to the caller
    pub request_id: String,
    /// Sequence number within this process
    pub request_seq: u64,
    pub started_at: Instant,
}

impl RequestContext {
    pub fn new(request_id: &str) -> Self {
        let request_seq = REQUEST_COUNTER.fetch_add(1, Ordering::SeqCst);

        let request_id = if request_id.is_empty() {
            format!("req-{}-{}", request_seq, Uuid::new_v4().as_simple())
        } else {
            request_id.to_string()
        };

        Self {
            request_id,
            request_seq,
            started_at: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }

    pub fn log_prefix(&self) -> String {
        let short: String = self.request_id.chars().take(8).collect();
        format!("[req={} seq={}]", short, self.request_seq)
    }
}
