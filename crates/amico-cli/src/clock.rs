//! Wall-clock bookkeeping for one run.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use comfy_table::{CellAlignment, Table};

use crate::report::{align_column, apply_table_style, header_cell};

/// Accumulated time for one named stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageTiming {
    pub name: &'static str,
    pub calls: usize,
    pub total: Duration,
}

/// Start/stop times of a run plus per-stage totals.
#[derive(Debug, Clone)]
pub struct RunClock {
    name: String,
    started_at: DateTime<Local>,
    start: Instant,
    stopped: Option<(DateTime<Local>, Duration)>,
    stages: Vec<StageTiming>,
}

impl RunClock {
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            started_at: Local::now(),
            start: Instant::now(),
            stopped: None,
            stages: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    pub fn stopped_at(&self) -> Option<DateTime<Local>> {
        self.stopped.map(|(at, _)| at)
    }

    /// Time since start, frozen once the clock is stopped.
    pub fn elapsed(&self) -> Duration {
        match self.stopped {
            Some((_, elapsed)) => elapsed,
            None => self.start.elapsed(),
        }
    }

    /// Run `f`, adding its duration to `stage`.
    pub fn time<T>(&mut self, stage: &'static str, f: impl FnOnce() -> T) -> T {
        let started = Instant::now();
        let value = f();
        self.record(stage, started.elapsed());
        value
    }

    /// Add a measured duration to `stage`.
    pub fn record(&mut self, stage: &'static str, duration: Duration) {
        match self.stages.iter_mut().find(|timing| timing.name == stage) {
            Some(timing) => {
                timing.calls += 1;
                timing.total += duration;
            }
            None => self.stages.push(StageTiming {
                name: stage,
                calls: 1,
                total: duration,
            }),
        }
    }

    /// Stop the clock; later calls keep the first stop time.
    pub fn stop(&mut self) -> DateTime<Local> {
        if self.stopped.is_none() {
            self.stopped = Some((Local::now(), self.start.elapsed()));
        }
        self.stopped_at().unwrap_or(self.started_at)
    }

    pub fn stages(&self) -> &[StageTiming] {
        &self.stages
    }

    /// Per-stage timing table, in first-seen order, with the run total last.
    pub fn report(&self) -> Table {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("stage"),
            header_cell("calls"),
            header_cell("total (ms)"),
            header_cell("share"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        align_column(&mut table, 2, CellAlignment::Right);
        align_column(&mut table, 3, CellAlignment::Right);

        let elapsed = self.elapsed();
        for stage in &self.stages {
            table.add_row(vec![
                stage.name.to_string(),
                stage.calls.to_string(),
                format_millis(stage.total),
                format_share(stage.total, elapsed),
            ]);
        }
        table.add_row(vec![
            self.name.clone(),
            "1".to_string(),
            format_millis(elapsed),
            format_share(elapsed, elapsed),
        ]);
        table
    }
}

fn format_millis(duration: Duration) -> String {
    format!("{:.3}", duration.as_secs_f64() * 1000.0)
}

fn format_share(part: Duration, whole: Duration) -> String {
    if whole.is_zero() {
        return "-".to_string();
    }
    format!("{:.1}%", 100.0 * part.as_secs_f64() / whole.as_secs_f64())
}
