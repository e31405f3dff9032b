use thiserror::Error;

/// Reasons an add-application submission is rejected.
///
/// The `Display` text is what the user sees in the error toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name or package field was left empty.
    #[error("Por favor, complete todos los campos.")]
    MissingFields,
}
