//! Benchmarks for minex extraction performance.
//!
//! Run with: cargo bench
//!
//! Builds synthetic workbook packages of varying row counts in memory and
//! times the full extraction pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Creates a synthetic workbook whose demand sheet carries `sections`
/// repetitions of a mineral section.
fn create_test_workbook(sections: usize) -> Vec<u8> {
    let mut buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
</Types>"#,
    )
    .unwrap();

    zip.start_file("xl/workbook.xml", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="1 Total demand for key minerals" sheetId="1" r:id="rId1"/></sheets></workbook>"#,
    )
    .unwrap();

    zip.start_file("xl/_rels/workbook.xml.rels", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#,
    )
    .unwrap();

    let mut sheet = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );
    let mut row = 1;
    for _ in 0..sections {
        sheet.push_str(&format!(
            "<row r=\"{}\"><c r=\"A{}\" t=\"inlineStr\"><is><t>Copper</t></is></c></row>",
            row, row
        ));
        row += 1;
        for label in ["Solar PV", "Wind", "Electric vehicles", "Total demand"] {
            sheet.push_str(&format!(
                "<row r=\"{r}\"><c r=\"A{r}\" t=\"inlineStr\"><is><t>{label}</t></is></c>\
                 <c r=\"B{r}\"><v>1.5</v></c><c r=\"D{r}\"><v>2.5</v></c>\
                 <c r=\"J{r}\"><v>3.5</v></c><c r=\"P{r}\"><v>4.5</v></c></row>",
                r = row,
                label = label
            ));
            row += 1;
        }
    }
    sheet.push_str("</sheetData></worksheet>");

    zip.start_file("xl/worksheets/sheet1.xml", options).unwrap();
    zip.write_all(sheet.as_bytes()).unwrap();

    zip.finish().unwrap();
    buffer
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    for sections in [10usize, 100, 500] {
        let data = create_test_workbook(sections);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(sections),
            &data,
            |b, data| {
                b.iter(|| minex::extract_bytes(black_box(data)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_workbook_parse(c: &mut Criterion) {
    let data = create_test_workbook(100);
    c.bench_function("workbook_parse", |b| {
        b.iter(|| {
            minex::workbook::WorkbookParser::from_bytes(black_box(data.clone()))
                .unwrap()
                .parse()
                .unwrap()
        });
    });
}

criterion_group!(benches, bench_extract, bench_workbook_parse);
criterion_main!(benches);
