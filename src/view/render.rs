//! Terminal rendering of a page.

use std::fmt::Write;

use crate::view::paginate::Page;

pub const EMPTY_PLACEHOLDER: &str = "No tasks found";

/// Render a page: one line per task, then the page bar.
pub fn render(page: &Page<'_>) -> String {
    let mut out = String::new();

    if page.is_empty() {
        out.push_str(EMPTY_PLACEHOLDER);
        out.push('\n');
    } else {
        let width = page
            .items
            .iter()
            .map(|t| t.id.to_string().len())
            .max()
            .unwrap_or(1);
        for todo in &page.items {
            let _ = writeln!(
                out,
                "#{:<width$}  {}  (created {})",
                todo.id,
                todo.title,
                todo.created_at.format("%Y-%m-%d"),
                width = width,
            );
        }
    }

    if page.page_count > 0 {
        out.push_str("Pages:");
        for i in 1..=page.page_count {
            if i == page.page {
                let _ = write!(out, " [{}]", i);
            } else {
                let _ = write!(out, " {}", i);
            }
        }
        out.push('\n');
    }

    out
}
