//! Shared test utilities for the domain crates
//!
//! - `TestMongo`: MongoDB container dropped with the test (feature: "mongo")
//! - `TestDataBuilder`: deterministic ids derived from the test name
//!
//! ```rust,no_run
//! use test_utils::{TestDataBuilder, TestMongo};
//!
//! #[tokio::test]
//! #[ignore] // Requires Docker
//! async fn test_saves_cart() {
//!     let mongo = TestMongo::new().await;
//!     let db = mongo.database("test_saves_cart");
//!     let ids = TestDataBuilder::from_test_name("test_saves_cart");
//!
//!     let user_id = ids.user_id();
//!     let first_product = ids.product_id(0);
//! }
//! ```

use uuid::Uuid;

#[cfg(feature = "mongo")]
mod mongo;

#[cfg(feature = "mongo")]
pub use mongo::TestMongo;

/// Seeded id source, so reruns of a test touch the same documents
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from a hash of the test name
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let ids = TestDataBuilder::from_test_name("test_add_to_cart");
    /// assert_eq!(ids.user_id(), TestDataBuilder::from_test_name("test_add_to_cart").user_id());
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    pub fn user_id(&self) -> Uuid {
        Uuid::from_u64_pair(self.seed, 0)
    }

    /// Distinct per `index`, never equal to [`Self::user_id`]
    pub fn product_id(&self, index: u64) -> Uuid {
        Uuid::from_u64_pair(self.seed, index.wrapping_add(1))
    }
}
