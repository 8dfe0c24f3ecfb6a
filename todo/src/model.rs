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

//! High-level data types.

use derive_getters::Getters;
use derive_more::{Constructor, Display, From};
use serde::{Deserialize, Serialize};

/// Identifier of a ToDo item.
///
/// Identifiers are chosen by the caller and are not guaranteed to be unique.
#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, From, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub(crate) struct TodoId(i64);

/// A single entry in the ToDo list.
#[derive(Clone, Constructor, Deserialize, Getters, Serialize)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub(crate) struct TodoItem {
    /// Caller-assigned identifier of the item.
    id: TodoId,

    /// Short title of the item.
    name: String,

    /// Free-form details about the item.
    description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{Token, assert_de_tokens_error, assert_tokens};

    #[test]
    fn test_todo_id_display() {
        assert_eq!("-5", TodoId::from(-5).to_string());
    }

    #[test]
    fn test_todo_item_ser_de_ok() {
        let item = TodoItem::new(TodoId::from(1), "Test".to_owned(), "Test ToDo".to_owned());
        assert_tokens(
            &item,
            &[
                Token::Struct { name: "TodoItem", len: 3 },
                Token::Str("id"),
                Token::I64(1),
                Token::Str("name"),
                Token::Str("Test"),
                Token::Str("description"),
                Token::Str("Test ToDo"),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_todo_item_de_missing_field() {
        assert_de_tokens_error::<TodoItem>(
            &[
                Token::Struct { name: "TodoItem", len: 2 },
                Token::Str("id"),
                Token::I64(1),
                Token::Str("name"),
                Token::Str("Test"),
                Token::StructEnd,
            ],
            "missing field `description`",
        );
    }

    #[test]
    fn test_todo_item_json() {
        let item: TodoItem =
            serde_json::from_str(r#"{"id":1,"name":"Test","description":"Test ToDo"}"#).unwrap();
        assert_eq!(TodoItem::new(TodoId::from(1), "Test".to_owned(), "Test ToDo".to_owned()), item);
        assert_eq!(
            r#"{"id":1,"name":"Test","description":"Test ToDo"}"#,
            serde_json::to_string(&item).unwrap()
        );
    }
}
