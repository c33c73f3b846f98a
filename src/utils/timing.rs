use std::time::{Duration, Instant};

/// 執行一段操作並回傳結果與耗時
pub fn time_run<T>(operation: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = operation();
    (result, start.elapsed())
}

pub fn log_elapsed(title: &str, elapsed: Duration) {
    tracing::info!("⏱️  Time elapsed for {}: {:.3} ms", title, as_millis(elapsed));
}

pub fn as_millis(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}
