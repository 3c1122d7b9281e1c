//! Paginated user table.
//!
//! While the initial load is outstanding the list shows only a busy
//! indicator; after a failed load it shows an error alert; otherwise a table
//! page. Pagination and sorting only shape what is displayed; the store's
//! order is never touched.

use crate::model::{User, UserId};
use crate::store::CollectionState;
use std::fmt;

/// Rows per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;

const COLUMNS: [&str; 6] = ["Avatar", "Name", "Username", "E-mail", "Phone", "Actions"];
const ACTIONS: &str = "[view] [edit] [delete]";

/// One table row.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: UserId,
    pub avatar_url: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
}

impl From<&User> for Row {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            avatar_url: user.avatar_url.clone(),
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
        }
    }
}

impl Row {
    fn cells(&self) -> [&str; 6] {
        [
            self.avatar_url.as_str(),
            self.name.as_str(),
            self.username.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            ACTIONS,
        ]
    }
}

/// One page of the table.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePage {
    pub rows: Vec<Row>,
    /// 1-based.
    pub page: usize,
    pub pages: usize,
    pub total: usize,
}

/// What the list shows for a given state.
#[derive(Debug, Clone, PartialEq)]
pub enum ListModel {
    Loading,
    Error(String),
    Table(TablePage),
}

/// Builds [`ListModel`]s from store state.
#[derive(Debug, Clone)]
pub struct ListView {
    page_size: usize,
    sort_by_name: bool,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListView {
    /// A page size of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            sort_by_name: false,
        }
    }

    /// Orders the displayed rows by name, ignoring case.
    pub fn sort_by_name(mut self, enabled: bool) -> Self {
        self.sort_by_name = enabled;
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Computes the model for `page` (1-based; clamped into range).
    pub fn model(&self, state: &CollectionState, page: usize) -> ListModel {
        if state.loading {
            return ListModel::Loading;
        }
        if let Some(error) = &state.error {
            return ListModel::Error(error.clone());
        }

        let mut users: Vec<&User> = state.users.iter().collect();
        if self.sort_by_name {
            users.sort_by_key(|u| u.name.to_lowercase());
        }

        let total = users.len();
        let pages = total.div_ceil(self.page_size).max(1);
        let page = page.clamp(1, pages);
        let rows = users
            .into_iter()
            .skip((page - 1) * self.page_size)
            .take(self.page_size)
            .map(Row::from)
            .collect();

        ListModel::Table(TablePage {
            rows,
            page,
            pages,
            total,
        })
    }

    pub fn render(&self, state: &CollectionState, page: usize) -> String {
        self.model(state, page).to_string()
    }
}

impl fmt::Display for ListModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListModel::Loading => writeln!(f, "Loading..."),
            ListModel::Error(description) => writeln!(f, "Error: {description}"),
            ListModel::Table(page) => write!(f, "{page}"),
        }
    }
}

impl fmt::Display for TablePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut widths = COLUMNS.map(str::len);
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        writeln!(f, "[+ Add User]")?;
        write_line(f, COLUMNS, widths)?;
        for row in &self.rows {
            write_line(f, row.cells(), widths)?;
        }
        writeln!(f, "page {}/{} ({} users)", self.page, self.pages, self.total)
    }
}

fn write_line(
    f: &mut fmt::Formatter<'_>,
    cells: [&str; 6],
    widths: [usize; 6],
) -> fmt::Result {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    writeln!(f, "{}", padded.join(" | ").trim_end())
}
