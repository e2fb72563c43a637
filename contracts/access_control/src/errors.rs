use soroban_sdk::contracttype;

/// Error categories for classifying different types of errors
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Lifecycle errors: calls made in the wrong contract state
    StateConflict = 1,
    /// Authorization errors: the caller may not perform the operation
    Authorization = 2,
}

/// Error severity levels indicating the impact and urgency of errors
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorSeverity {
    Low = 1,
    Medium = 2,
}

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
}

impl ContractError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized | ContractError::AlreadyInitialized => {
                ErrorCategory::StateConflict
            }
            ContractError::Unauthorized => ErrorCategory::Authorization,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ContractError::NotInitialized | ContractError::AlreadyInitialized => {
                ErrorSeverity::Low
            }
            ContractError::Unauthorized => ErrorSeverity::Medium,
        }
    }

    /// None of the registry errors clear up by retrying the same call.
    pub fn retryable(&self) -> bool {
        false
    }

    pub fn message(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract is already initialized",
            ContractError::Unauthorized => "Caller is not allowed to change authorizations",
        }
    }
}
