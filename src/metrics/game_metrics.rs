use std::time::{Duration, Instant};

/// Wall-clock stats for the current session: which run this is and how long
/// it has been going. Nothing is persisted.
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub runs: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            runs: 1,
        }
    }

    /// Refresh the elapsed clock; called once per frame
    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    /// Start timing a new run, after a collision reset or a manual restart
    pub fn on_reset(&mut self) {
        self.runs += 1;
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    /// Current run time as mm:ss
    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
