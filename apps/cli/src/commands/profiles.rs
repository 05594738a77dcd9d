//! profiles 命令
//!
//! 列出内置力曲线及其关键特征

use anyhow::Result;
use clap::Args;
use door_lut::{FORCE_TABLES, ForceTable};
use door_protocol::{BenchmarkProfile, RotationDirection};
use serde::Serialize;

/// profiles 命令参数
#[derive(Args, Debug)]
pub struct ProfilesCommand {
    /// 以 JSON 输出
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ProfileSummary {
    profile: &'static str,
    side: Option<&'static str>,
    peak: i32,
    onset_deg: Option<usize>,
    at_180: i32,
}

impl ProfileSummary {
    fn new(profile: BenchmarkProfile, side: Option<RotationDirection>, table: &ForceTable) -> Self {
        Self {
            profile: profile.label(),
            side: side.map(RotationDirection::label),
            peak: table.peak(),
            onset_deg: table.samples().iter().position(|&v| v != 0),
            at_180: table[180],
        }
    }
}

impl ProfilesCommand {
    pub fn execute(&self) -> Result<()> {
        let summaries: Vec<ProfileSummary> = FORCE_TABLES
            .entries()
            .map(|(profile, side, table)| ProfileSummary::new(profile, side, table))
            .collect();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&summaries)?);
            return Ok(());
        }

        println!(
            "{:<16} {:<6} {:>6} {:>8} {:>6}",
            "PROFILE", "SIDE", "PEAK", "ONSET", "180°"
        );
        for s in &summaries {
            let onset = s.onset_deg.map_or_else(|| "-".to_string(), |d| format!("{}°", d));
            println!(
                "{:<16} {:<6} {:>6} {:>8} {:>6}",
                s.profile,
                s.side.unwrap_or("any"),
                s.peak,
                onset,
                s.at_180
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_for_sudden_force() {
        let table = FORCE_TABLES.table(BenchmarkProfile::SuddenForce, RotationDirection::Clockwise);
        let summary = ProfileSummary::new(
            BenchmarkProfile::SuddenForce,
            Some(RotationDirection::Clockwise),
            table,
        );
        assert_eq!(summary.profile, "Sudden Force");
        assert_eq!(summary.side, Some("CW"));
        assert_eq!(summary.peak, 40);
        assert_eq!(summary.onset_deg, Some(25));
        assert_eq!(summary.at_180, 0);
    }

    #[test]
    fn test_summary_for_no_force() {
        let summary = ProfileSummary::new(BenchmarkProfile::NoForce, None, &FORCE_TABLES.no_force);
        assert_eq!(summary.peak, 0);
        assert_eq!(summary.onset_deg, None);
        assert_eq!(summary.side, None);
    }
}
