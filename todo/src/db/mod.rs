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

//! Storage abstraction in terms of the operations needed by the server.
//!
//! The ToDo list is an ordered sequence: items keep the position in which they were added, and
//! identifiers are not required to be unique.  Operations that look up an item by its identifier
//! act on the first match.

use crate::model::*;
use async_trait::async_trait;
use restkit_core::db::DbResult;

mod memory;
pub(crate) use memory::MemoryStore;

/// A store with high-level operations that deal with our types.
///
/// Every operation is atomic with respect to all others.
#[async_trait]
pub(crate) trait TodoStore: Send + Sync {
    /// Appends `item` to the end of the list.
    async fn add_todo(&self, item: TodoItem) -> DbResult<()>;

    /// Gets a snapshot of all items in insertion order.
    async fn get_todos(&self) -> DbResult<Vec<TodoItem>>;

    /// Gets the first item identified by `id`.
    async fn get_todo(&self, id: TodoId) -> DbResult<TodoItem>;

    /// Replaces the first item identified by `id` with `item`, keeping its position.
    ///
    /// The identifier of `item` need not match `id`.
    async fn replace_todo(&self, id: TodoId, item: TodoItem) -> DbResult<()>;

    /// Removes the first item identified by `id`.
    async fn delete_todo(&self, id: TodoId) -> DbResult<()>;
}
