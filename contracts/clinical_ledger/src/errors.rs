use soroban_sdk::contracttype;

/// Error categories for classifying different types of errors
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Validation errors: invalid input parameters
    Validation = 1,
    /// Authorization errors: the caller is not an authorized writer
    Authorization = 2,
    /// Not found errors: an index past the end of a history
    NotFound = 3,
    /// State conflict errors: lifecycle misuse
    StateConflict = 4,
    /// Storage errors: a history can take no more entries
    Storage = 5,
    /// System errors: a collaborating contract could not be reached
    System = 6,
}

/// Error severity levels indicating the impact and urgency of errors
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorSeverity {
    Low = 1,
    Medium = 2,
    High = 3,
    Critical = 4,
}

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    IndexOutOfRange = 4,
    InvalidDose = 5,
    AccessControlUnavailable = 6,
    SequenceFull = 7,
}

impl ContractError {
    /// Returns the error category for this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::InvalidDose => ErrorCategory::Validation,
            ContractError::Unauthorized => ErrorCategory::Authorization,
            ContractError::IndexOutOfRange => ErrorCategory::NotFound,
            ContractError::NotInitialized | ContractError::AlreadyInitialized => {
                ErrorCategory::StateConflict
            }
            ContractError::SequenceFull => ErrorCategory::Storage,
            ContractError::AccessControlUnavailable => ErrorCategory::System,
        }
    }

    /// Returns the severity level for this error.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ContractError::NotInitialized
            | ContractError::AlreadyInitialized
            | ContractError::IndexOutOfRange
            | ContractError::InvalidDose => ErrorSeverity::Low,
            ContractError::Unauthorized => ErrorSeverity::Medium,
            ContractError::SequenceFull => ErrorSeverity::High,
            ContractError::AccessControlUnavailable => ErrorSeverity::Critical,
        }
    }

    /// Authorization failures go back to a human and out-of-range reads are
    /// caller bugs; only a missing collaborator can clear up on its own.
    pub fn retryable(&self) -> bool {
        matches!(self, ContractError::AccessControlUnavailable)
    }

    pub fn message(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract is already initialized",
            ContractError::Unauthorized => "Caller is not authorized to record clinical data",
            ContractError::IndexOutOfRange => "Index is past the end of the patient's history",
            ContractError::InvalidDose => "Dose and total doses must be positive",
            ContractError::AccessControlUnavailable => "Access control contract did not answer",
            ContractError::SequenceFull => "Patient history cannot take more entries",
        }
    }
}
