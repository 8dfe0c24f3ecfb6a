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

//! Operations on one item.

use crate::driver::{Driver, todo_error};
use crate::model::*;
use restkit_core::driver::DriverResult;

impl Driver {
    /// Appends `item` to the list and returns it.  Identifiers are not checked for uniqueness.
    pub(crate) async fn create_todo(self, item: TodoItem) -> DriverResult<TodoItem> {
        self.store.add_todo(item.clone()).await?;
        log::info!("Created todo {}", item.id());
        Ok(item)
    }

    /// Deletes the first item identified by `id`.
    pub(crate) async fn delete_todo(self, id: TodoId) -> DriverResult<()> {
        self.store.delete_todo(id).await.map_err(|e| todo_error(e, id))?;
        log::info!("Deleted todo {}", id);
        Ok(())
    }

    /// Gets the first item identified by `id`.
    pub(crate) async fn get_todo(self, id: TodoId) -> DriverResult<TodoItem> {
        let item = self.store.get_todo(id).await.map_err(|e| todo_error(e, id))?;
        Ok(item)
    }

    /// Replaces the first item identified by `id` with `item` and returns the latter.
    pub(crate) async fn update_todo(self, id: TodoId, item: TodoItem) -> DriverResult<TodoItem> {
        self.store.replace_todo(id, item.clone()).await.map_err(|e| todo_error(e, id))?;
        log::info!("Updated todo {}", id);
        Ok(item)
    }
}
