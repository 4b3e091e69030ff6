/// Aggregated view of assessment progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}
