use crate::domain::card::{
    CardBalanceResponse, CardRequest, CreateCardResponse, DepositFundsRequest,
    DepositFundsResponse,
};
use crate::stub::classifier::{classify, CardIdRouting};
use crate::stub::generator::ValueGenerator;
use std::sync::Arc;

pub const MIN_BALANCE_IN_PENCE: i64 = 0;
/// Upper bound of the synthetic balances. Dependents assert against the
/// exact value, so it is part of the stub's contract.
pub const MAX_BALANCE_IN_PENCE: i64 = 1239;

/// Failure signals the stub core can raise. Validation failures never reach
/// this layer; the HTTP collaborator rejects malformed requests first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubFailure {
    NotFound,
    SimulatedServerFailure,
}

#[derive(Clone)]
pub struct CardStubService {
    pub generator: Arc<dyn ValueGenerator>,
}

impl CardStubService {
    /// Every validly-shaped request gets a card. There is no failure
    /// injection on this operation.
    pub fn create_card(&self, _request: &CardRequest) -> CreateCardResponse {
        CreateCardResponse {
            card_account_id: self.generator.random_identifier(),
        }
    }

    /// Balances are minted fresh per call, available and ledger always equal.
    /// Identifiers carrying the injected-failure prefix still succeed here:
    /// only the deposit path honors that convention.
    pub fn get_balance(&self, card_id: &str) -> Result<CardBalanceResponse, StubFailure> {
        if classify(card_id) == CardIdRouting::NotFound {
            return Err(StubFailure::NotFound);
        }
        let amount = self
            .generator
            .random_bounded_amount(MIN_BALANCE_IN_PENCE, MAX_BALANCE_IN_PENCE);
        Ok(CardBalanceResponse {
            available_balance_in_pence: amount,
            ledger_balance_in_pence: amount,
        })
    }

    /// The reference identifier is independent of the deposited amount.
    pub fn deposit_funds(
        &self,
        card_id: &str,
        _request: &DepositFundsRequest,
    ) -> Result<DepositFundsResponse, StubFailure> {
        match classify(card_id) {
            CardIdRouting::NotFound => Err(StubFailure::NotFound),
            CardIdRouting::InjectedFailure => {
                tracing::info!("simulating provider failure for deposit to card {card_id}");
                Err(StubFailure::SimulatedServerFailure)
            }
            CardIdRouting::Proceed => Ok(DepositFundsResponse {
                reference_id: self.generator.random_identifier(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::Address;

    struct FixedValueGenerator {
        identifier: &'static str,
        amount: i64,
    }

    impl ValueGenerator for FixedValueGenerator {
        fn random_identifier(&self) -> String {
            self.identifier.to_string()
        }

        fn random_bounded_amount(&self, _min: i64, _max: i64) -> i64 {
            self.amount
        }
    }

    fn service(identifier: &'static str, amount: i64) -> CardStubService {
        CardStubService {
            generator: Arc::new(FixedValueGenerator { identifier, amount }),
        }
    }

    fn card_request() -> CardRequest {
        CardRequest {
            first_name: Some("Lisa".to_string()),
            last_name: Some("Simpson".to_string()),
            address: Some(Address {
                address_line_1: Some("742 Evergreen Terrace".to_string()),
                address_line_2: None,
                town_or_city: Some("Springfield".to_string()),
                postcode: Some("AA1 1AA".to_string()),
            }),
        }
    }

    fn deposit_request() -> DepositFundsRequest {
        DepositFundsRequest {
            amount_in_pence: Some(310),
        }
    }

    #[test]
    fn create_card_returns_generated_identifier() {
        let resp = service("card-1", 0).create_card(&card_request());
        assert_eq!(resp.card_account_id, "card-1");
    }

    #[test]
    fn balance_is_an_equal_pair() {
        let resp = service("card-1", 512).get_balance("myId").unwrap();
        assert_eq!(resp.available_balance_in_pence, 512);
        assert_eq!(resp.ledger_balance_in_pence, 512);
    }

    #[test]
    fn balance_for_blank_identifier_is_not_found() {
        assert_eq!(
            service("card-1", 0).get_balance("  ").unwrap_err(),
            StubFailure::NotFound
        );
    }

    #[test]
    fn balance_ignores_the_failure_prefix() {
        let resp = service("card-1", 99).get_balance("4-anything").unwrap();
        assert_eq!(resp.available_balance_in_pence, 99);
    }

    #[test]
    fn deposit_returns_generated_reference() {
        let resp = service("txn-1", 0)
            .deposit_funds("myId", &deposit_request())
            .unwrap();
        assert_eq!(resp.reference_id, "txn-1");
    }

    #[test]
    fn deposit_for_blank_identifier_is_not_found() {
        assert_eq!(
            service("txn-1", 0)
                .deposit_funds("", &deposit_request())
                .unwrap_err(),
            StubFailure::NotFound
        );
    }

    #[test]
    fn deposit_honors_the_failure_prefix() {
        assert_eq!(
            service("txn-1", 0)
                .deposit_funds("4-anything", &deposit_request())
                .unwrap_err(),
            StubFailure::SimulatedServerFailure
        );
    }
}
