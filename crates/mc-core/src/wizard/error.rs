/// Wizard store errors.
///
/// 向导状态错误类型。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("step index {index} out of range (total {total})")]
    StepOutOfRange { index: usize, total: usize },
    #[error("update mode requires an active member id")]
    MissingMemberId,
}
