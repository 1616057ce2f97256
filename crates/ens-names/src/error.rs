use thiserror::Error;

/// Why a name failed normalization. `label` is the zero-based label index
/// counted from the left.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("label {label} is empty")]
    EmptyLabel { label: usize },

    /// ENSIP-15 rejected the label; `reason` is its message.
    #[error("label {label}: {reason}")]
    Rejected { label: usize, reason: String },
}
