// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suggestion items and the rows a list renders from them.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// One suggestion.
///
/// `T` is the host's rendered content for the entry (for example a widget
/// handle); entries without content render their `label`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuggestionItem<T = ()> {
    /// Stable identifier.
    pub id: String,
    /// Plain-text label.
    pub label: String,
    /// Rendered content, if the host supplies one.
    pub content: Option<T>,
    /// Group the entry belongs to (for example `"channel_members"`).
    pub category: Option<String>,
}

impl<T> SuggestionItem<T> {
    /// An entry with an id and label only.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            content: None,
            category: None,
        }
    }

    /// Attach rendered content.
    #[must_use]
    pub fn with_content(mut self, content: T) -> Self {
        self.content = Some(content);
        self
    }

    /// Put the entry in a group.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// A row of a rendered suggestion list.
#[derive(Debug, PartialEq, Eq)]
pub enum SuggestionRow<'a, T> {
    /// Title of the group the following entries belong to.
    GroupTitle {
        /// The group.
        category: &'a str,
    },
    /// An entry.
    Item {
        /// Index into the item list.
        index: usize,
        /// The entry.
        item: &'a SuggestionItem<T>,
        /// The entry is the current selection.
        selected: bool,
    },
}

impl<T> Clone for SuggestionRow<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SuggestionRow<'_, T> {}

/// Message id of a group title, looked up in the host's catalog.
pub fn group_title_id(category: &str) -> String {
    format!("suggestion.mention.{category}")
}

/// Rows for `items` with `selected` highlighted.
///
/// With `separators`, a group title precedes every entry whose category is
/// set and differs from the previous entry's.
pub fn build_rows<T>(
    items: &[SuggestionItem<T>],
    selected: Option<usize>,
    separators: bool,
) -> Vec<SuggestionRow<'_, T>> {
    let mut rows = Vec::with_capacity(items.len());
    let mut previous: Option<&str> = None;
    for (index, item) in items.iter().enumerate() {
        let category = item.category.as_deref();
        if separators
            && let Some(category) = category
            && previous != Some(category)
        {
            rows.push(SuggestionRow::GroupTitle { category });
        }
        previous = category;
        rows.push(SuggestionRow::Item {
            index,
            item,
            selected: selected == Some(index),
        });
    }
    rows
}
