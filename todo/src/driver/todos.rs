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

//! Operations on the whole list.

use crate::driver::Driver;
use crate::model::*;
use restkit_core::driver::DriverResult;

impl Driver {
    /// Gets a snapshot of all items in the order in which they were added.
    pub(crate) async fn get_todos(self) -> DriverResult<Vec<TodoItem>> {
        let items = self.store.get_todos().await?;
        Ok(items)
    }
}
