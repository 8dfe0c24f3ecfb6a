// restkit
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Generic abstractions for the storage layer.
//!
//! Stores keep their data in memory only, so the set of failures is small: the requested entry
//! may be missing, or the store may be in an unusable state (such as a lock poisoned by a panic in
//! a concurrent request).

/// Storage errors.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DbError {
    /// Catch-all error type for unexpected storage errors.
    #[error("Store error: {0}")]
    BackendError(String),

    /// Indicates that a requested entry does not exist.
    #[error("Entity not found")]
    NotFound,
}

/// Result type for this module.
pub type DbResult<T> = Result<T, DbError>;

/// Macros to help instantiate tests for multiple store implementations.
#[cfg(any(test, feature = "testutils"))]
pub mod testutils {
    pub use paste::paste;

    /// Instantiates the `module::name` test for the store configured by `setup`.
    #[macro_export]
    macro_rules! generate_one_test [
        ( $name:ident, $setup:expr, $module:path ) => {
            #[tokio::test]
            async fn $name() {
                $crate::db::testutils::paste! {
                    $module :: [< $name >]($setup).await;
                }
            }
        }
    ];

    pub use generate_one_test;

    /// Instantiates a collection of tests for a specific store implementation.
    ///
    /// The store to run the tests against is determined by the `setup` expression, which is
    /// evaluated once per test and must return a fresh, empty store.
    #[macro_export]
    macro_rules! generate_tests [
        ( $setup:expr, $module:path $(, $name:ident)+ ) => {
            $(
                $crate::db::testutils::generate_one_test!($name, $setup, $module);
            )+
        };
    ];

    pub use generate_tests;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_error_messages() {
        assert_eq!("Entity not found", DbError::NotFound.to_string());
        assert_eq!(
            "Store error: lock poisoned",
            DbError::BackendError("lock poisoned".to_owned()).to_string()
        );
    }

    pub(super) async fn test_setup_is_passed_through(value: u32) {
        assert_eq!(42, value);
    }

    mod generated {
        crate::db::testutils::generate_tests!(
            42u32,
            crate::db::tests,
            test_setup_is_passed_through
        );
    }
}
