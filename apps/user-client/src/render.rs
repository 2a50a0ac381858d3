//! Plain-text rendering of user lists.

use entities::User;

const HEADERS: [&str; 3] = ["ID", "NAME", "EMAIL"];

/// Renders users as an aligned table with a header row.
pub fn render_table(users: &[User]) -> String {
    if users.is_empty() {
        return "No users found.\n".to_string();
    }

    let rows: Vec<[String; 3]> = users
        .iter()
        .map(|u| [u.id.to_string(), u.name.clone(), u.email.clone()])
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 3], widths: &[usize; 3]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
