//! Execution timing helper

use log::debug;
use std::time::{Duration, Instant};

/// Run `f`, log how long it took under `label`, and return its value
pub fn timed<T, F: FnOnce() -> T>(label: &str, f: F) -> T {
    let (value, elapsed) = measure(f);
    debug!("{label} finished in {:.4}s", elapsed.as_secs_f64());
    value
}

/// Run `f` and return its value with the elapsed time
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_returns_value() {
        assert_eq!(timed("sum", || (1..=10).sum::<i32>()), 55);
    }

    #[test]
    fn test_measure_elapsed() {
        let (_, elapsed) = measure(|| std::thread::sleep(Duration::from_millis(5)));
        assert!(elapsed >= Duration::from_millis(5));
    }
}
