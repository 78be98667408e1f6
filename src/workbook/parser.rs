//! Workbook package parsing.

use crate::container::OoxmlContainer;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::Path;

use super::shared_strings::SharedStrings;
use super::sheet::{parse_cell_ref, CellValue, Sheet};
use super::Workbook;

/// Sheet info from workbook.xml.
#[derive(Debug, Clone)]
struct SheetInfo {
    name: String,
    rel_id: String,
}

/// Parser for `.xlsx` workbook packages.
///
/// Formula cells contribute their cached `<v>` value; the formula text
/// itself is never evaluated or kept, which is the "last-computed values"
/// view of the workbook.
pub struct WorkbookParser {
    container: OoxmlContainer,
    shared_strings: SharedStrings,
    sheets: Vec<SheetInfo>,
    relationships: HashMap<String, String>,
}

impl WorkbookParser {
    /// Open an XLSX file for parsing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let container = OoxmlContainer::open(path)?;
        Self::from_container(container)
    }

    /// Create a parser from bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let container = OoxmlContainer::from_bytes(data)?;
        Self::from_container(container)
    }

    /// Create a parser from a container.
    fn from_container(container: OoxmlContainer) -> Result<Self> {
        if !container.has_part("xl/workbook.xml") {
            return Err(Error::NotAWorkbook(
                "missing xl/workbook.xml".to_string(),
            ));
        }

        let shared_strings = if let Ok(xml) = container.read_xml("xl/sharedStrings.xml") {
            SharedStrings::parse(&xml)?
        } else {
            SharedStrings::default()
        };

        let relationships = Self::parse_workbook_rels(&container)?;
        let sheets = Self::parse_workbook(&container)?;

        Ok(Self {
            container,
            shared_strings,
            sheets,
            relationships,
        })
    }

    /// Parse workbook relationships.
    fn parse_workbook_rels(container: &OoxmlContainer) -> Result<HashMap<String, String>> {
        let mut rels = HashMap::new();

        if let Ok(xml) = container.read_xml("xl/_rels/workbook.xml.rels") {
            let mut reader = quick_xml::Reader::from_str(&xml);
            reader.config_mut().trim_text(true);

            let mut buf = Vec::new();

            loop {
                match reader.read_event_into(&mut buf) {
                    Ok(quick_xml::events::Event::Empty(e))
                    | Ok(quick_xml::events::Event::Start(e)) => {
                        if e.name().as_ref() == b"Relationship" {
                            let mut id = String::new();
                            let mut target = String::new();

                            for attr in e.attributes().flatten() {
                                match attr.key.as_ref() {
                                    b"Id" => {
                                        id = String::from_utf8_lossy(&attr.value).to_string();
                                    }
                                    b"Target" => {
                                        target = String::from_utf8_lossy(&attr.value).to_string();
                                    }
                                    _ => {}
                                }
                            }

                            if !id.is_empty() && !target.is_empty() {
                                rels.insert(id, target);
                            }
                        }
                    }
                    Ok(quick_xml::events::Event::Eof) => break,
                    Err(e) => return Err(Error::XmlParse(e.to_string())),
                    _ => {}
                }
                buf.clear();
            }
        }

        Ok(rels)
    }

    /// Parse workbook.xml for sheet names and relationship ids.
    fn parse_workbook(container: &OoxmlContainer) -> Result<Vec<SheetInfo>> {
        let mut sheets = Vec::new();

        let xml = container.read_xml("xl/workbook.xml")?;
        let mut reader = quick_xml::Reader::from_str(&xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(quick_xml::events::Event::Empty(e))
                | Ok(quick_xml::events::Event::Start(e)) => {
                    if e.name().as_ref() == b"sheet" {
                        let mut name = String::new();
                        let mut rel_id = String::new();

                        for attr in e.attributes().flatten() {
                            match attr.key.as_ref() {
                                b"name" => {
                                    name = String::from_utf8_lossy(&attr.value).to_string();
                                }
                                b"r:id" => {
                                    rel_id = String::from_utf8_lossy(&attr.value).to_string();
                                }
                                _ => {}
                            }
                        }

                        if !name.is_empty() {
                            sheets.push(SheetInfo { name, rel_id });
                        }
                    }
                }
                Ok(quick_xml::events::Event::Eof) => break,
                Err(e) => return Err(Error::XmlParse(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        Ok(sheets)
    }

    /// Parse every sheet and return the workbook.
    pub fn parse(&mut self) -> Result<Workbook> {
        let mut workbook = Workbook::new();

        for info in self.sheets.clone() {
            let mut sheet = Sheet::new(&info.name);

            if let Some(target) = self.relationships.get(&info.rel_id) {
                let part = if let Some(stripped) = target.strip_prefix('/') {
                    stripped.to_string()
                } else {
                    format!("xl/{}", target)
                };

                if let Ok(xml) = self.container.read_xml(&part) {
                    self.parse_sheet(&xml, &mut sheet)?;
                }
            }

            workbook.insert_sheet(sheet);
        }

        Ok(workbook)
    }

    /// Parse one worksheet part into a sparse cell grid.
    fn parse_sheet(&self, xml: &str, sheet: &mut Sheet) -> Result<()> {
        let mut reader = quick_xml::Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut in_cell = false;
        let mut in_value = false;

        // Cursor-tracked position: used when a <row>/<c> carries no
        // reference attribute (writers are allowed to omit them).
        let mut next_row = 0usize;
        let mut next_col = 0usize;

        let mut cell_pos = (0usize, 0usize);
        let mut cell_type: Option<String> = None;
        let mut cell_text = String::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(quick_xml::events::Event::Start(ref e)) => match e.name().as_ref() {
                    b"row" => {
                        let row_idx = Self::row_index(e, next_row);
                        next_row = row_idx + 1;
                        next_col = 0;
                        cell_pos.0 = row_idx;
                    }
                    b"c" => {
                        in_cell = true;
                        cell_text.clear();

                        let (pos, t) = Self::cell_attrs(e, cell_pos.0, next_col);
                        cell_pos = pos;
                        cell_type = t;
                        next_col = pos.1 + 1;
                    }
                    b"v" | b"t" if in_cell => {
                        in_value = true;
                    }
                    _ => {}
                },
                // Self-closing elements get no End event; an empty <c/> only
                // advances the column cursor.
                Ok(quick_xml::events::Event::Empty(ref e)) => match e.name().as_ref() {
                    b"row" => {
                        let row_idx = Self::row_index(e, next_row);
                        next_row = row_idx + 1;
                        next_col = 0;
                        cell_pos.0 = row_idx;
                    }
                    b"c" => {
                        let (pos, _) = Self::cell_attrs(e, cell_pos.0, next_col);
                        next_col = pos.1 + 1;
                    }
                    _ => {}
                },
                Ok(quick_xml::events::Event::Text(ref e)) => {
                    if in_value {
                        let text = e.unescape().unwrap_or_default();
                        cell_text.push_str(&text);
                    }
                }
                Ok(quick_xml::events::Event::End(ref e)) => match e.name().as_ref() {
                    b"c" => {
                        if let Some(value) =
                            self.resolve_cell_value(&cell_text, cell_type.as_deref())
                        {
                            sheet.insert(cell_pos.0, cell_pos.1, value);
                        }
                        in_cell = false;
                    }
                    b"v" | b"t" => {
                        in_value = false;
                    }
                    _ => {}
                },
                Ok(quick_xml::events::Event::Eof) => break,
                Err(e) => return Err(Error::XmlParse(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        Ok(())
    }

    /// Row index from a `<row>` element's `r` attribute (1-based), or the
    /// cursor position when absent.
    fn row_index(e: &quick_xml::events::BytesStart<'_>, fallback: usize) -> usize {
        for attr in e.attributes().flatten() {
            if attr.key.as_ref() == b"r" {
                if let Ok(n) = String::from_utf8_lossy(&attr.value).parse::<usize>() {
                    if n > 0 {
                        return n - 1;
                    }
                }
            }
        }
        fallback
    }

    /// Position and type of a `<c>` element, from its `r`/`t` attributes,
    /// falling back to the cursor column when the reference is absent.
    fn cell_attrs(
        e: &quick_xml::events::BytesStart<'_>,
        cursor_row: usize,
        cursor_col: usize,
    ) -> ((usize, usize), Option<String>) {
        let mut pos = (cursor_row, cursor_col);
        let mut cell_type = None;

        for attr in e.attributes().flatten() {
            match attr.key.as_ref() {
                b"r" => {
                    let r = String::from_utf8_lossy(&attr.value);
                    if let Some((row, col)) = parse_cell_ref(&r) {
                        pos = (row, col);
                    }
                }
                b"t" => {
                    cell_type = Some(String::from_utf8_lossy(&attr.value).to_string());
                }
                _ => {}
            }
        }

        (pos, cell_type)
    }

    /// Resolve a cell's raw text based on its type attribute.
    ///
    /// Returns `None` for cells with no stored value.
    fn resolve_cell_value(&self, raw: &str, cell_type: Option<&str>) -> Option<CellValue> {
        if raw.is_empty() {
            return None;
        }

        match cell_type {
            Some("s") => {
                // Shared string index
                let resolved = raw
                    .parse::<usize>()
                    .ok()
                    .and_then(|idx| self.shared_strings.get(idx))
                    .unwrap_or(raw);
                Some(CellValue::Text(resolved.to_string()))
            }
            Some("b") => Some(CellValue::Bool(raw == "1")),
            Some("e") => Some(CellValue::Error(raw.to_string())),
            Some("str") | Some("inlineStr") => Some(CellValue::Text(raw.to_string())),
            _ => match raw.parse::<f64>() {
                Ok(n) => Some(CellValue::Number(n)),
                Err(_) => Some(CellValue::Text(raw.to_string())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser_without_package() -> WorkbookParser {
        // parse_sheet and resolve_cell_value only touch shared strings, so a
        // stub container is enough for unit tests.
        let mut buffer = Vec::new();
        {
            use std::io::Write;
            let mut zip = zip::ZipWriter::new(std::io::Cursor::new(&mut buffer));
            let options = zip::write::SimpleFileOptions::default();
            zip.start_file("xl/workbook.xml", options).unwrap();
            zip.write_all(b"<workbook/>").unwrap();
            zip.finish().unwrap();
        }
        let container = OoxmlContainer::from_bytes(buffer).unwrap();
        WorkbookParser {
            container,
            shared_strings: SharedStrings::parse(
                r#"<sst><si><t>Copper</t></si><si><t>Total demand</t></si></sst>"#,
            )
            .unwrap(),
            sheets: Vec::new(),
            relationships: HashMap::new(),
        }
    }

    #[test]
    fn test_parse_sheet_with_references() {
        let parser = parser_without_package();
        let xml = r#"<worksheet>
            <sheetData>
                <row r="4">
                    <c r="A4" t="s"><v>0</v></c>
                    <c r="B4"><v>120.5</v></c>
                    <c r="D4"><v>151</v></c>
                </row>
                <row r="6">
                    <c r="A6" t="s"><v>1</v></c>
                </row>
            </sheetData>
        </worksheet>"#;

        let mut sheet = Sheet::new("test");
        parser.parse_sheet(xml, &mut sheet).unwrap();

        assert_eq!(sheet.label(3, 0).as_deref(), Some("Copper"));
        assert_eq!(sheet.value(3, 1), Some(&CellValue::Number(120.5)));
        assert_eq!(sheet.value(3, 3), Some(&CellValue::Number(151.0)));
        assert!(sheet.is_blank(3, 2));
        assert_eq!(sheet.label(5, 0).as_deref(), Some("Total demand"));
        assert_eq!(sheet.last_row(), 5);
    }

    #[test]
    fn test_parse_sheet_without_references() {
        let parser = parser_without_package();
        let xml = r#"<worksheet><sheetData>
            <row><c><v>1</v></c><c><v>2</v></c></row>
            <row><c><v>3</v></c></row>
        </sheetData></worksheet>"#;

        let mut sheet = Sheet::new("test");
        parser.parse_sheet(xml, &mut sheet).unwrap();

        assert_eq!(sheet.value(0, 0), Some(&CellValue::Number(1.0)));
        assert_eq!(sheet.value(0, 1), Some(&CellValue::Number(2.0)));
        assert_eq!(sheet.value(1, 0), Some(&CellValue::Number(3.0)));
    }

    #[test]
    fn test_formula_cell_uses_cached_value() {
        let parser = parser_without_package();
        let xml = r#"<worksheet><sheetData>
            <row r="1"><c r="B1"><f>SUM(B2:B9)</f><v>42.5</v></c></row>
        </sheetData></worksheet>"#;

        let mut sheet = Sheet::new("test");
        parser.parse_sheet(xml, &mut sheet).unwrap();

        assert_eq!(sheet.value(0, 1), Some(&CellValue::Number(42.5)));
    }

    #[test]
    fn test_inline_string_and_error_cells() {
        let parser = parser_without_package();
        let xml = r#"<worksheet><sheetData>
            <row r="1">
                <c r="A1" t="inlineStr"><is><t>Base case</t></is></c>
                <c r="B1" t="e"><v>#DIV/0!</v></c>
                <c r="C1" t="b"><v>1</v></c>
            </row>
        </sheetData></worksheet>"#;

        let mut sheet = Sheet::new("test");
        parser.parse_sheet(xml, &mut sheet).unwrap();

        assert_eq!(
            sheet.value(0, 0),
            Some(&CellValue::Text("Base case".to_string()))
        );
        assert_eq!(
            sheet.value(0, 1),
            Some(&CellValue::Error("#DIV/0!".to_string()))
        );
        assert_eq!(sheet.value(0, 2), Some(&CellValue::Bool(true)));
    }
}
