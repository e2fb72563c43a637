use crate::ContractError;

/// Both counters of a vaccine entry are positive. A dose above the
/// series length is accepted (boosters).
pub fn validate_doses(dose: u64, total_doses: u64) -> Result<(), ContractError> {
    if dose == 0 || total_doses == 0 {
        return Err(ContractError::InvalidDose);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_counters_are_rejected() {
        assert_eq!(validate_doses(0, 3), Err(ContractError::InvalidDose));
        assert_eq!(validate_doses(1, 0), Err(ContractError::InvalidDose));
    }

    #[test]
    fn booster_past_series_is_accepted() {
        assert_eq!(validate_doses(1, 3), Ok(()));
        assert_eq!(validate_doses(4, 3), Ok(()));
    }
}
