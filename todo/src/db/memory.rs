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

//! Implementation of the store that keeps items in memory.

use crate::db::TodoStore;
use crate::model::*;
use async_trait::async_trait;
use restkit_core::db::{DbError, DbResult};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A store backed by a vector that lives as long as the process.
#[derive(Default)]
pub(crate) struct MemoryStore {
    /// The items in insertion order.
    items: RwLock<Vec<TodoItem>>,
}

impl MemoryStore {
    /// Acquires the items for reading.
    fn read(&self) -> DbResult<RwLockReadGuard<'_, Vec<TodoItem>>> {
        self.items.read().map_err(|e| DbError::BackendError(e.to_string()))
    }

    /// Acquires the items for writing.
    fn write(&self) -> DbResult<RwLockWriteGuard<'_, Vec<TodoItem>>> {
        self.items.write().map_err(|e| DbError::BackendError(e.to_string()))
    }

    /// Leaves the store unusable, as would happen if a writer panicked while holding the lock.
    #[cfg(test)]
    pub(crate) fn poison(&self) {
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = self.items.write().unwrap();
            panic!("Poisoning the store on purpose");
        }));
        assert!(result.is_err());
        assert!(self.items.is_poisoned());
    }
}

/// Finds the position of the first item identified by `id`.
fn position(items: &[TodoItem], id: TodoId) -> DbResult<usize> {
    items.iter().position(|item| *item.id() == id).ok_or(DbError::NotFound)
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn add_todo(&self, item: TodoItem) -> DbResult<()> {
        self.write()?.push(item);
        Ok(())
    }

    async fn get_todos(&self) -> DbResult<Vec<TodoItem>> {
        Ok(self.read()?.clone())
    }

    async fn get_todo(&self, id: TodoId) -> DbResult<TodoItem> {
        let items = self.read()?;
        let i = position(&items, id)?;
        Ok(items[i].clone())
    }

    async fn replace_todo(&self, id: TodoId, item: TodoItem) -> DbResult<()> {
        let mut items = self.write()?;
        let i = position(&items, id)?;
        items[i] = item;
        Ok(())
    }

    async fn delete_todo(&self, id: TodoId) -> DbResult<()> {
        let mut items = self.write()?;
        let i = position(&items, id)?;
        items.remove(i);
        Ok(())
    }
}
