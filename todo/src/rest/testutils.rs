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

//! Test utilities for the REST API.

use crate::db::{MemoryStore, TodoStore};
use crate::driver::Driver;
use crate::model::*;
use crate::rest::app;
use axum::Router;
use std::sync::Arc;

pub(crate) struct TestContext {
    store: Arc<MemoryStore>,
    app: Router,
}

impl TestContext {
    pub(crate) fn setup() -> Self {
        let store = Arc::new(MemoryStore::default());
        let driver = Driver::new(store.clone());
        let app = app(driver);
        Self { store, app }
    }

    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    pub(crate) fn into_app(self) -> Router {
        self.app
    }

    pub(crate) async fn add_todo<N: Into<String>, D: Into<String>>(
        &mut self,
        id: i64,
        name: N,
        description: D,
    ) {
        self.store
            .add_todo(TodoItem::new(TodoId::from(id), name.into(), description.into()))
            .await
            .unwrap();
    }

    pub(crate) async fn get_todos(&self) -> Vec<TodoItem> {
        self.store.get_todos().await.unwrap()
    }

    pub(crate) fn poison_store(&mut self) {
        self.store.poison();
    }
}
