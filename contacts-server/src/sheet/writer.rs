//! Workbook export

use rust_xlsxwriter::{Format, Workbook};

use super::SheetError;
use crate::models::Contact;

/// MIME type of an `.xlsx` workbook
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Name of the single exported worksheet
pub const SHEET_NAME: &str = "Contacts";

/// Stored column names in export order
pub const EXPORT_COLUMNS: [&str; 7] = [
    "id",
    "first_name",
    "last_name",
    "email",
    "phone",
    "company",
    "notes",
];

/// Turn a snake_case column name into a header: `first_name` -> `First Name`.
pub fn humanize_header(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Serialize contacts into an `.xlsx` workbook held in memory.
pub fn write_contacts(contacts: &[Contact]) -> Result<Vec<u8>, SheetError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let bold = Format::new().set_bold();
    for (col, name) in EXPORT_COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, humanize_header(name), &bold)?;
    }

    for (i, contact) in contacts.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_number(row, 0, contact.id)?;

        let values = [
            &contact.first_name,
            &contact.last_name,
            &contact.email,
            &contact.phone,
            &contact.company,
            &contact.notes,
        ];
        for (offset, value) in values.into_iter().enumerate() {
            sheet.write_string(row, offset as u16 + 1, value.as_str())?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContactFields;
    use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
    use std::io::Cursor;

    #[test]
    fn humanizes_snake_case() {
        assert_eq!(humanize_header("first_name"), "First Name");
        assert_eq!(humanize_header("id"), "Id");
        assert_eq!(humanize_header("notes"), "Notes");
    }

    #[test]
    fn writes_single_sheet_with_header_and_rows() {
        let contact = ContactFields {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "555-0101".into(),
            company: "Analytical Engines".into(),
            notes: String::new(),
        }
        .with_id(3);

        let bytes = write_contacts(&[contact]).unwrap();
        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes)).unwrap();
        assert_eq!(workbook.sheet_names(), vec![SHEET_NAME.to_string()]);

        let range = workbook.worksheet_range_at(0).unwrap().unwrap();
        let rows: Vec<&[Data]> = range.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][1], Data::String("First Name".into()));
        assert_eq!(rows[0][6], Data::String("Notes".into()));
        assert_eq!(rows[1][0], Data::Float(3.0));
        assert_eq!(rows[1][4], Data::String("555-0101".into()));
    }
}
