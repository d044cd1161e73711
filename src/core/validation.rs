use super::error::ValidationError;

/// Validate customer details against the finalize-time rules.
/// Returns all validation errors found (not just the first).
pub fn validate_customer(name: &str, phone: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if name.trim().chars().count() < 2 {
        errors.push(ValidationError::new(
            "customer_name",
            "customer name is required (minimum 2 characters)",
        ));
    }

    if !is_mobile_number(phone) {
        errors.push(ValidationError::new(
            "customer_phone",
            "valid 10-digit mobile number is required",
        ));
    }

    errors
}

/// Validate a cart quantity before a line item is computed.
pub fn validate_quantity(quantity: u32) -> Vec<ValidationError> {
    if quantity == 0 {
        vec![ValidationError::new(
            "quantity",
            "quantity must be at least 1",
        )]
    } else {
        Vec::new()
    }
}

/// Indian mobile numbers: exactly 10 digits, leading digit 6–9.
pub fn is_mobile_number(phone: &str) -> bool {
    phone.len() == 10
        && phone.bytes().all(|b| b.is_ascii_digit())
        && matches!(phone.as_bytes()[0], b'6'..=b'9')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_customer() {
        assert!(validate_customer("Asha Verma", "9876543210").is_empty());
    }

    #[test]
    fn rejects_short_name() {
        let errors = validate_customer(" A ", "9876543210");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "customer_name");
    }

    #[test]
    fn rejects_bad_phones() {
        for phone in ["", "12345", "5876543210", "98765432101", "98765abc10"] {
            assert!(!is_mobile_number(phone), "accepted: {phone}");
        }
        for phone in ["6000000000", "7123456789", "8999999999", "9876543210"] {
            assert!(is_mobile_number(phone), "rejected: {phone}");
        }
    }

    #[test]
    fn collects_all_errors() {
        let errors = validate_customer("", "000");
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn quantity_must_be_positive() {
        assert!(!validate_quantity(0).is_empty());
        assert!(validate_quantity(1).is_empty());
    }
}
