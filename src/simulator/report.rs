//! Simulation report generation.

use super::runner::RunStats;
use crate::core::CrashCause;
use serde::Serialize;
use std::collections::BTreeMap;

/// Score buckets for the distribution chart: (lowest score, label).
const SCORE_BUCKETS: [(u32, &str); 6] = [
    (0, "0"),
    (1, "1-4"),
    (5, "5-9"),
    (10, "10-24"),
    (25, "25-49"),
    (50, "50+"),
];

/// Aggregated results from multiple simulated sessions.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_crashed: u32,
    pub runs_timed_out: u32,
    pub max_ticks_per_run: u64,

    pub avg_score: f64,
    pub min_score: u32,
    pub median_score: u32,
    pub max_score: u32,
    pub avg_ticks: f64,
    pub avg_flaps: f64,
    /// Mean ticks between consecutive points, over runs that scored twice or more
    pub avg_ticks_per_point: f64,

    pub crash_causes: BTreeMap<CrashCause, u32>,
    /// Runs per entry of `SCORE_BUCKETS`
    pub score_distribution: Vec<u32>,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>, max_ticks_per_run: u64) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;
        let runs_timed_out = runs.iter().filter(|r| r.timed_out()).count() as u32;

        let avg_score = runs.iter().map(|r| r.score as f64).sum::<f64>() / divisor;
        let avg_ticks = runs.iter().map(|r| r.ticks as f64).sum::<f64>() / divisor;
        let avg_flaps = runs.iter().map(|r| r.flaps as f64).sum::<f64>() / divisor;

        let mut scores: Vec<u32> = runs.iter().map(|r| r.score).collect();
        scores.sort_unstable();
        let min_score = scores.first().copied().unwrap_or(0);
        let max_score = scores.last().copied().unwrap_or(0);
        let median_score = scores.get(scores.len() / 2).copied().unwrap_or(0);

        let intervals: Vec<f64> = runs
            .iter()
            .flat_map(|r| r.score_ticks.windows(2).map(|w| (w[1] - w[0]) as f64))
            .collect();
        let avg_ticks_per_point = if intervals.is_empty() {
            0.0
        } else {
            intervals.iter().sum::<f64>() / intervals.len() as f64
        };

        let mut crash_causes = BTreeMap::new();
        for cause in runs.iter().filter_map(|r| r.cause) {
            *crash_causes.entry(cause).or_insert(0) += 1;
        }

        let mut score_distribution = vec![0; SCORE_BUCKETS.len()];
        for score in &scores {
            let bucket = SCORE_BUCKETS
                .iter()
                .rposition(|(low, _)| score >= low)
                .unwrap_or(0);
            score_distribution[bucket] += 1;
        }

        Self {
            num_runs,
            runs_crashed: num_runs - runs_timed_out,
            runs_timed_out,
            max_ticks_per_run,
            avg_score,
            min_score,
            median_score,
            max_score,
            avg_ticks,
            avg_flaps,
            avg_ticks_per_point,
            crash_causes,
            score_distribution,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("                  (Autopilot, real physics)\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} crashed, {} hit the {}-tick limit\n\n",
            self.num_runs, self.runs_crashed, self.runs_timed_out, self.max_ticks_per_run
        ));

        report.push_str("── SCORE ────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Score:        {:.2}\n", self.avg_score));
        report.push_str(&format!("  Min Score:        {}\n", self.min_score));
        report.push_str(&format!("  Median Score:     {}\n", self.median_score));
        report.push_str(&format!("  Max Score:        {}\n", self.max_score));
        report.push_str(&format!("  Avg Ticks:        {:.0}\n", self.avg_ticks));
        report.push_str(&format!("  Avg Flaps:        {:.1}\n", self.avg_flaps));
        if self.avg_ticks_per_point > 0.0 {
            report.push_str(&format!(
                "  Ticks per Point:  {:.1}\n",
                self.avg_ticks_per_point
            ));
        }
        report.push('\n');

        report.push_str("── SCORE DISTRIBUTION ───────────────────────────────────────────\n");
        for ((_, label), count) in SCORE_BUCKETS.iter().zip(&self.score_distribution) {
            let pct = self.percent(*count);
            let bar = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  {:>6}: {:>5.1}% {}\n", label, pct, bar));
        }
        report.push('\n');

        report.push_str("── CRASH CAUSES ─────────────────────────────────────────────────\n");
        if self.crash_causes.is_empty() {
            report.push_str("  (none)\n");
        }
        for (cause, count) in &self.crash_causes {
            report.push_str(&format!(
                "  {:<18} {:>5} ({:.1}%)\n",
                cause.to_string(),
                count,
                self.percent(*count)
            ));
        }
        report.push('\n');

        report.push_str("── ASSESSMENT ───────────────────────────────────────────────────\n");
        if self.percent(self.score_distribution[0]) > 50.0 {
            report.push_str("  ⚠️  Most runs never clear a pipe - first gap too hard?\n");
        }
        if self.runs_timed_out == self.num_runs && self.num_runs > 0 {
            report.push_str("  ⚠️  Every run hit the tick limit - raise --max-ticks\n");
        }
        let floor_crashes = self
            .crash_causes
            .get(&CrashCause::Floor)
            .copied()
            .unwrap_or(0);
        if self.percent(floor_crashes) > 25.0 {
            report.push_str("  ⚠️  Many floor crashes - autopilot margin too large?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    fn percent(&self, count: u32) -> f64 {
        if self.num_runs == 0 {
            0.0
        } else {
            count as f64 / self.num_runs as f64 * 100.0
        }
    }
}
