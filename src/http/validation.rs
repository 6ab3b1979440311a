use crate::domain::card::{CardRequest, DepositFundsRequest, FieldError};

pub const MUST_NOT_BE_NULL: &str = "must not be null";
pub const MUST_BE_POSITIVE: &str = "must be greater than 0";

/// Field paths in the returned errors use the wire names, so nested address
/// fields come back as e.g. `address.addressLine1`.
pub fn validate_card_request(req: &CardRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();
    require(&mut errors, "firstName", &req.first_name);
    require(&mut errors, "lastName", &req.last_name);
    match &req.address {
        None => errors.push(missing("address")),
        Some(address) => {
            require(&mut errors, "address.addressLine1", &address.address_line_1);
            require(&mut errors, "address.postcode", &address.postcode);
        }
    }
    errors
}

pub fn validate_deposit_request(req: &DepositFundsRequest) -> Vec<FieldError> {
    match req.amount_in_pence {
        None => vec![missing("amountInPence")],
        Some(amount) if amount <= 0 => vec![FieldError {
            field: "amountInPence".to_string(),
            message: MUST_BE_POSITIVE.to_string(),
        }],
        Some(_) => Vec::new(),
    }
}

fn require<T>(errors: &mut Vec<FieldError>, field: &str, value: &Option<T>) {
    if value.is_none() {
        errors.push(missing(field));
    }
}

fn missing(field: &str) -> FieldError {
    FieldError {
        field: field.to_string(),
        message: MUST_NOT_BE_NULL.to_string(),
    }
}
