//! Workbook upload parsing

use std::io::Cursor;

use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};

use super::SheetError;
use crate::models::ContactFields;

/// Normalized header names every import must carry, in reporting order.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "first_name",
    "last_name",
    "email",
    "phone",
    "company",
    "notes",
];

/// Canonical header form: trimmed, lowercased, spaces become underscores.
///
/// `" First Name "` and `"first_name"` both normalize to `first_name`.
pub fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_")
}

/// Parse the first worksheet into contact rows.
///
/// The first row is the header. Cells are trimmed; fully blank rows are
/// dropped. Fails without returning any rows if a required column is absent.
pub fn read_contacts(bytes: &[u8]) -> Result<Vec<ContactFields>, SheetError> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(SheetError::NoWorksheet)??;

    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .map(|row| row.iter().map(|cell| normalize_header(&cell_text(cell))).collect())
        .unwrap_or_default();

    let columns = ColumnIndex::locate(&header)?;

    Ok(rows
        .map(|row| columns.fields(row))
        .filter(|fields| !fields.is_blank())
        .collect())
}

/// Position of each required column within the header row
struct ColumnIndex([usize; REQUIRED_COLUMNS.len()]);

impl ColumnIndex {
    fn locate(header: &[String]) -> Result<Self, SheetError> {
        let mut positions = [0; REQUIRED_COLUMNS.len()];
        let mut missing = Vec::new();

        for (slot, name) in positions.iter_mut().zip(REQUIRED_COLUMNS) {
            match header.iter().position(|h| h == name) {
                Some(pos) => *slot = pos,
                None => missing.push(name.to_owned()),
            }
        }

        if missing.is_empty() {
            Ok(Self(positions))
        } else {
            Err(SheetError::MissingColumns(missing))
        }
    }

    fn fields(&self, row: &[Data]) -> ContactFields {
        let cell = |i: usize| {
            row.get(self.0[i])
                .map(|c| cell_text(c).trim().to_owned())
                .unwrap_or_default()
        };

        ContactFields {
            first_name: cell(0),
            last_name: cell(1),
            email: cell(2),
            phone: cell(3),
            company: cell(4),
            notes: cell(5),
        }
    }
}

/// Render a cell as text. Integral floats drop their fractional part so
/// phone numbers stored as numbers survive (`5551234.0` -> `5551234`).
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => (*f as i64).to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    fn workbook(rows: &[&[&str]]) -> Vec<u8> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                sheet.write_string(r as u32, c as u16, *value).unwrap();
            }
        }
        workbook.save_to_buffer().unwrap()
    }

    #[test]
    fn normalizes_headers() {
        assert_eq!(normalize_header(" First Name "), "first_name");
        assert_eq!(normalize_header("EMAIL"), "email");
        assert_eq!(normalize_header("last_name"), "last_name");
    }

    #[test]
    fn integral_floats_render_without_fraction() {
        assert_eq!(cell_text(&Data::Float(5551234.0)), "5551234");
        assert_eq!(cell_text(&Data::Float(1.5)), "1.5");
        assert_eq!(cell_text(&Data::Empty), "");
    }

    #[test]
    fn reads_humanized_headers_and_trims_cells() {
        let bytes = workbook(&[
            &["First Name", "Last Name", "Email", "Phone", "Company", "Notes"],
            &["  Ada ", "Lovelace", "ada@example.com ", "555-0101", "", " met at conf"],
        ]);

        let rows = read_contacts(&bytes).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].first_name, "Ada");
        assert_eq!(rows[0].email, "ada@example.com");
        assert_eq!(rows[0].company, "");
        assert_eq!(rows[0].notes, "met at conf");
    }

    #[test]
    fn column_order_does_not_matter() {
        let bytes = workbook(&[
            &["email", "phone", "notes", "company", "last_name", "first_name", "id"],
            &["g@example.com", "555", "n", "Navy", "Hopper", "Grace", "99"],
        ]);

        let rows = read_contacts(&bytes).unwrap();
        assert_eq!(rows[0].first_name, "Grace");
        assert_eq!(rows[0].last_name, "Hopper");
        assert_eq!(rows[0].company, "Navy");
    }

    #[test]
    fn skips_blank_and_whitespace_rows() {
        let header: &[&str] = &["first_name", "last_name", "email", "phone", "company", "notes"];
        let bytes = workbook(&[
            header,
            &["Ada", "Lovelace", "ada@example.com", "555-0101", "", ""],
            &[],
            &["  ", " ", "\t", "", "   ", ""],
            &["Grace", "Hopper", "grace@example.com", "555-0102", "", ""],
        ]);

        let rows = read_contacts(&bytes).unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.first_name.as_str()).collect();
        assert_eq!(names, vec!["Ada", "Grace"]);
    }

    #[test]
    fn reports_missing_columns_in_order() {
        let bytes = workbook(&[&["first_name", "last_name", "phone", "company"]]);

        let err = read_contacts(&bytes).unwrap_err();
        match err {
            SheetError::MissingColumns(cols) => assert_eq!(cols, vec!["email", "notes"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_non_workbook_bytes() {
        let err = read_contacts(b"first_name,last_name\n").unwrap_err();
        assert!(matches!(err, SheetError::Read(_)));
    }
}
