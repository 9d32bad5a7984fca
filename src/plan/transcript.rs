use std::fmt;

/// Prefix the agent puts in front of every line of captured terraform output.
pub const LOG_PREFIX: &str = "terraform: ";

const SUMMARY_MARKER: &str = "Plan: ";
const NO_CHANGES_MARKER: &str = "No changes.";
const SAVED_PLAN_MARKER: &str = "This plan was saved to: ";

/// Resource counts from a plan's `Plan: N to add, M to change, K to destroy.` line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PlanSummary {
    pub to_add: u32,
    pub to_change: u32,
    pub to_destroy: u32,
}

impl PlanSummary {
    pub fn has_changes(&self) -> bool {
        self.to_add > 0 || self.to_change > 0 || self.to_destroy > 0
    }

    /// Parses the text after `Plan: `, e.g. `1 to add, 0 to change, 0 to destroy.`
    ///
    /// Counts for other actions (`to import`, `to forget`) are skipped.
    fn parse(counts: &str) -> Option<Self> {
        let mut summary = PlanSummary::default();
        for part in counts.trim().trim_end_matches('.').split(',') {
            let (count, action) = part.trim().split_once(" to ")?;
            let count: u32 = count.trim().parse().ok()?;
            match action.trim() {
                "add" => summary.to_add = count,
                "change" => summary.to_change = count,
                "destroy" => summary.to_destroy = count,
                _ => {}
            }
        }
        Some(summary)
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to add, {} to change, {} to destroy",
            self.to_add, self.to_change, self.to_destroy
        )
    }
}

/// Captured stdout of a `terraform plan` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanTranscript {
    raw: String,
}

impl PlanTranscript {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The transcript exactly as captured, prefixes included.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn into_raw(self) -> String {
        self.raw
    }

    /// Transcript lines with the agent's `terraform: ` prefix removed.
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.raw.lines().map(strip_log_prefix)
    }

    /// The transcript with every line's prefix removed.
    pub fn plain_text(&self) -> String {
        self.lines().collect::<Vec<_>>().join("\n")
    }

    /// The resource counts of the plan, or `None` if the transcript reports neither a
    /// summary line nor `No changes.` (e.g. the plan failed).
    pub fn summary(&self) -> Option<PlanSummary> {
        self.lines().map(str::trim).find_map(|line| {
            if let Some(counts) = line.strip_prefix(SUMMARY_MARKER) {
                PlanSummary::parse(counts)
            } else if line.starts_with(NO_CHANGES_MARKER) {
                Some(PlanSummary::default())
            } else {
                None
            }
        })
    }

    pub fn has_changes(&self) -> Option<bool> {
        self.summary().map(|summary| summary.has_changes())
    }

    /// Path of the saved plan file, when the run was made with `-out`.
    pub fn saved_plan_path(&self) -> Option<&str> {
        self.lines()
            .find_map(|line| line.trim().strip_prefix(SAVED_PLAN_MARKER))
            .map(str::trim)
            .filter(|path| !path.is_empty())
    }
}

impl fmt::Display for PlanTranscript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

fn strip_log_prefix(line: &str) -> &str {
    line.strip_prefix(LOG_PREFIX)
        .or_else(|| line.strip_prefix(LOG_PREFIX.trim_end()))
        .unwrap_or(line)
}
