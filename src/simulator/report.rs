//! Simulation report generation.

use super::runner::RunStats;
use crate::game::CrashCause;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregated results from multiple autopilot rounds.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_timed_out: u32,

    // Score
    pub mean_score: f64,
    pub median_score: u32,
    pub min_score: u32,
    pub max_score: u32,

    // Survival
    pub mean_ticks: f64,
    pub mean_flaps: f64,

    // How rounds ended
    pub ground_crashes: u32,
    pub obstacle_crashes: u32,

    /// Score → number of rounds that ended on it.
    pub score_histogram: BTreeMap<u32, u32>,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;
        let runs_timed_out = runs.iter().filter(|r| r.timed_out).count() as u32;

        let mean_score = runs.iter().map(|r| r.score as f64).sum::<f64>() / divisor;
        let mean_ticks = runs.iter().map(|r| r.ticks as f64).sum::<f64>() / divisor;
        let mean_flaps = runs.iter().map(|r| r.flaps as f64).sum::<f64>() / divisor;

        let min_score = runs.iter().map(|r| r.score).min().unwrap_or(0);
        let max_score = runs.iter().map(|r| r.score).max().unwrap_or(0);
        let median_score = {
            let mut sorted: Vec<u32> = runs.iter().map(|r| r.score).collect();
            sorted.sort_unstable();
            sorted.get(sorted.len() / 2).copied().unwrap_or(0)
        };

        let crashes = |cause: CrashCause| {
            runs.iter().filter(|r| r.crash == Some(cause)).count() as u32
        };
        let ground_crashes = crashes(CrashCause::Ground);
        let obstacle_crashes = crashes(CrashCause::Obstacle);

        let mut score_histogram = BTreeMap::new();
        for run in &runs {
            *score_histogram.entry(run.score).or_insert(0) += 1;
        }

        Self {
            num_runs,
            runs_timed_out,
            mean_score,
            median_score,
            min_score,
            max_score,
            mean_ticks,
            mean_flaps,
            ground_crashes,
            obstacle_crashes,
            score_histogram,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                   SKYFLAP AUTOPILOT REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} crashed, {} timed out\n\n",
            self.num_runs,
            self.num_runs - self.runs_timed_out,
            self.runs_timed_out
        ));

        report.push_str("── SCORE ────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Mean:    {:.2}\n", self.mean_score));
        report.push_str(&format!("  Median:  {}\n", self.median_score));
        report.push_str(&format!("  Min:     {}\n", self.min_score));
        report.push_str(&format!("  Max:     {}\n\n", self.max_score));

        report.push_str("── SURVIVAL ─────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Mean Ticks:  {:.0}\n", self.mean_ticks));
        report.push_str(&format!("  Mean Flaps:  {:.1}\n", self.mean_flaps));
        report.push_str(&format!("  Ground Hits: {}\n", self.ground_crashes));
        report.push_str(&format!("  Pipe Hits:   {}\n\n", self.obstacle_crashes));

        report.push_str("── SCORE DISTRIBUTION ───────────────────────────────────────────\n");
        for (score, count) in &self.score_histogram {
            let pct = (*count as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar: String = "█".repeat((pct / 2.0) as usize);
            report.push_str(&format!("  {:4}: {:>5.1}% {}\n", score, pct, bar));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(score: u32, ticks: u64, crash: Option<CrashCause>) -> RunStats {
        RunStats {
            score,
            ticks,
            flaps: 10,
            crash,
            timed_out: crash.is_none(),
        }
    }

    #[test]
    fn test_report_generation() {
        let runs = vec![
            run(2, 100, Some(CrashCause::Obstacle)),
            run(4, 200, Some(CrashCause::Ground)),
            run(4, 300, None),
        ];

        let report = SimReport::from_runs(runs);
        assert_eq!(report.num_runs, 3);
        assert_eq!(report.runs_timed_out, 1);
        assert!((report.mean_score - 10.0 / 3.0).abs() < 1e-9);
        assert_eq!(report.min_score, 2);
        assert_eq!(report.max_score, 4);
        assert_eq!(report.median_score, 4);
        assert!((report.mean_ticks - 200.0).abs() < 1e-9);
        assert_eq!(report.ground_crashes, 1);
        assert_eq!(report.obstacle_crashes, 1);
        assert_eq!(report.score_histogram.get(&4), Some(&2));
        assert_eq!(report.score_histogram.get(&2), Some(&1));
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs(Vec::new());
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.mean_score, 0.0);
        assert!(report.to_text().contains("Runs: 0 total"));
    }

    #[test]
    fn test_json_output() {
        let report = SimReport::from_runs(vec![run(1, 50, Some(CrashCause::Ground))]);
        let value: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(value["num_runs"], 1);
        assert_eq!(value["ground_crashes"], 1);
        assert_eq!(value["score_histogram"]["1"], 1);
        assert!(value.get("run_stats").is_none());
    }
}
