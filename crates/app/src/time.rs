//! Browser timers.

use dioxus::document;

/// Fixed delay standing in for network latency on simulated
/// incident-report submissions.
pub const SUBMIT_LATENCY_MS: u32 = 1500;

/// How long non-error notifications stay before clearing themselves.
pub const NOTIFICATION_TTL_MS: u32 = 5000;

/// Quiet period after a search keystroke before the fetch fires.
pub const DEBOUNCE_MS: u32 = 500;

/// Await a browser timer. The eval resolves once the embedded script
/// finishes, which the setTimeout promise holds open for `ms`.
pub async fn sleep_ms(ms: u32) {
    let js = format!("await new Promise((resolve) => setTimeout(resolve, {ms}));");
    let _ = document::eval(&js).await;
}
