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

//! Business logic for the service.

use crate::db::TodoStore;
use crate::model::TodoId;
use restkit_core::db::DbError;
use restkit_core::driver::DriverError;
use std::sync::Arc;

#[cfg(test)]
mod testutils;
mod todo;
mod todos;

/// Business logic.
///
/// The public operations exposed by the driver are all "one shot": each one maps to a single
/// atomic operation against the store.  For this reason, these operations consume the driver in
/// an attempt to minimize the possibility of composing two operations that should have been one.
#[derive(Clone)]
pub(crate) struct Driver {
    /// The store that holds the ToDo list.
    store: Arc<dyn TodoStore>,
}

impl Driver {
    /// Creates a new driver backed by the given injected components.
    pub(crate) fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }
}

/// Converts a store error `e` for an operation on the item `id` to a driver error, giving
/// missing items a user-facing description.
fn todo_error(e: DbError, id: TodoId) -> DriverError {
    match e {
        DbError::NotFound => {
            log::warn!("Todo {} not found", id);
            DriverError::NotFound("Todo not found".to_owned())
        }
        e => e.into(),
    }
}
