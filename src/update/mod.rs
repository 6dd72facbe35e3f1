//! Update judgment for dependencies
//!
//! Compares each declared version with the registry's latest version and
//! sorts dependencies into ignored, unresolved, up-to-date and outdated.
//! Versions are compared as plain strings: `~1.2.0` against `1.2.0` counts
//! as outdated.

use crate::domain::{CheckReport, Dependency, ResolvedDependency};
use crate::manifest::IgnoreSet;
use log::debug;

/// Update judgment engine
pub struct UpdateJudge {
    ignore: IgnoreSet,
}

impl UpdateJudge {
    /// Create a judge honoring the given ignore set
    pub fn new(ignore: IgnoreSet) -> Self {
        Self { ignore }
    }

    /// True when the dependency must not be fetched, reported or installed
    pub fn should_skip(&self, dependency: &Dependency) -> bool {
        self.ignore.contains(&dependency.name)
    }

    /// Classify resolved dependencies, keeping manifest order within each bucket
    pub fn classify(&self, resolved: Vec<ResolvedDependency>) -> CheckReport {
        let mut report = CheckReport::new();

        for entry in resolved {
            if self.should_skip(&entry.dependency) {
                debug!("{}: ignored", entry.dependency);
                report.ignored += 1;
            } else if entry.is_unresolved() {
                debug!("{}: unresolved", entry.dependency);
                report.unresolved.push(entry.dependency);
            } else if entry.is_outdated() {
                debug!(
                    "{}: outdated, latest {}",
                    entry.dependency,
                    entry.latest_version().unwrap_or_default()
                );
                report.outdated.push(entry);
            } else {
                debug!("{}: up to date", entry.dependency);
                report.up_to_date += 1;
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(name: &str, declared: &str, latest: Option<&str>) -> ResolvedDependency {
        Dependency::production(name, declared).resolve(latest.map(str::to_string))
    }

    #[test]
    fn test_judge_simple_update() {
        let judge = UpdateJudge::new(IgnoreSet::new());
        let report = judge.classify(vec![resolved("left-pad", "1.0.0", Some("1.3.0"))]);

        assert_eq!(report.outdated.len(), 1);
        assert_eq!(report.outdated[0].latest_version(), Some("1.3.0"));
        assert!(report.unresolved.is_empty());
    }

    #[test]
    fn test_judge_already_latest() {
        let judge = UpdateJudge::new(IgnoreSet::new());
        let report = judge.classify(vec![resolved("react", "18.3.1", Some("18.3.1"))]);

        assert!(report.outdated.is_empty());
        assert_eq!(report.up_to_date, 1);
    }

    #[test]
    fn test_judge_unresolved() {
        let judge = UpdateJudge::new(IgnoreSet::new());
        let report = judge.classify(vec![
            resolved("ghost", "1.0.0", None),
            resolved("left-pad", "1.0.0", Some("1.3.0")),
        ]);

        assert!(report.has_unresolved());
        assert_eq!(report.unresolved_names(), vec!["ghost"]);
        assert_eq!(report.outdated.len(), 1);
    }

    #[test]
    fn test_judge_ignored_wins_over_everything() {
        let ignore: IgnoreSet = ["left-pad", "ghost"].into_iter().collect();
        let judge = UpdateJudge::new(ignore);
        let report = judge.classify(vec![
            resolved("left-pad", "1.0.0", Some("1.3.0")),
            resolved("ghost", "1.0.0", None),
            resolved("react", "17.0.0", Some("18.3.1")),
        ]);

        assert_eq!(report.ignored, 2);
        assert!(!report.has_unresolved());
        assert_eq!(report.install_specs(), vec!["react@18.3.1"]);
    }

    #[test]
    fn test_judge_textual_comparison() {
        let judge = UpdateJudge::new(IgnoreSet::new());
        let report = judge.classify(vec![
            resolved("express", "~4.18.2", Some("4.18.2")),
            resolved("typescript", ">=5", Some("5.4.0")),
        ]);

        assert_eq!(report.outdated.len(), 2);
        assert_eq!(report.up_to_date, 0);
    }

    #[test]
    fn test_judge_preserves_order() {
        let judge = UpdateJudge::new(IgnoreSet::new());
        let report = judge.classify(vec![
            resolved("b", "1.0.0", Some("2.0.0")),
            resolved("a", "1.0.0", Some("1.0.0")),
            resolved("c", "1.0.0", Some("3.0.0")),
        ]);

        let names: Vec<_> = report.outdated.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["b", "c"]);
        assert_eq!(report.total(), 3);
    }

    #[test]
    fn test_should_skip() {
        let judge = UpdateJudge::new(["lodash"].into_iter().collect());
        assert!(judge.should_skip(&Dependency::production("lodash", "4.0.0")));
        assert!(!judge.should_skip(&Dependency::production("express", "4.0.0")));
    }
}
