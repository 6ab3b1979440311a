use rand::Rng;
use uuid::Uuid;

/// Source of the synthetic values the stub hands out. The service takes this
/// as an explicit dependency so tests can substitute a fixed generator.
pub trait ValueGenerator: Send + Sync {
    /// Fresh opaque token. Dependents may rely on nothing beyond non-empty
    /// and unique enough to tell two responses apart.
    fn random_identifier(&self) -> String;

    /// Uniform integer in `[min, max]` inclusive.
    fn random_bounded_amount(&self, min: i64, max: i64) -> i64;
}

/// Production generator: UUID v4 tokens and the thread-local RNG.
pub struct ThreadRngGenerator;

impl ValueGenerator for ThreadRngGenerator {
    fn random_identifier(&self) -> String {
        Uuid::new_v4().to_string()
    }

    fn random_bounded_amount(&self, min: i64, max: i64) -> i64 {
        rand::thread_rng().gen_range(min..=max)
    }
}
