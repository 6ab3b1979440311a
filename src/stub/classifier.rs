/// Card identifiers beginning with this prefix trigger a simulated upstream
/// failure on deposit. The prefix is a published convention for dependents'
/// error-path tests; changing it breaks them.
pub const INJECTED_FAILURE_PREFIX: &str = "4-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardIdRouting {
    Proceed,
    NotFound,
    InjectedFailure,
}

/// Classify an inbound card identifier. No lookup happens anywhere in the
/// stub, so any non-blank identifier without the failure prefix proceeds.
pub fn classify(card_id: &str) -> CardIdRouting {
    if card_id.trim().is_empty() {
        return CardIdRouting::NotFound;
    }
    if card_id.starts_with(INJECTED_FAILURE_PREFIX) {
        return CardIdRouting::InjectedFailure;
    }
    CardIdRouting::Proceed
}
