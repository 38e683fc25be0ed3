use std::io::{Cursor, Write};

use zip::write::FileOptions;
use zip::CompressionMethod;

/// Build a small DOCX in memory: a styled title, two body paragraphs, and a
/// two-row table.
pub fn sample_docx() -> Vec<u8> {
    use docx_rs::*;

    let table = Table::new(vec![
        TableRow::new(vec![
            TableCell::new().add_paragraph(
                Paragraph::new().add_run(Run::new().add_text("Region")),
            ),
            TableCell::new().add_paragraph(
                Paragraph::new().add_run(Run::new().add_text("Revenue")),
            ),
        ]),
        TableRow::new(vec![
            TableCell::new()
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text("North"))),
            TableCell::new()
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text("1200"))),
        ]),
    ]);

    let docx = Docx::new()
        .add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text("Annual Logistics Review"))
                .style("Heading1"),
        )
        .add_paragraph(Paragraph::new().add_run(
            Run::new().add_text("Shipment volumes increased across every warehouse this year."),
        ))
        .add_paragraph(Paragraph::new().add_run(
            Run::new().add_text("Carrier performance stayed within the agreed thresholds."),
        ))
        .add_table(table);

    let mut buffer = Cursor::new(Vec::new());
    docx.build().pack(&mut buffer).expect("Failed to pack DOCX");
    buffer.into_inner()
}

/// Build a two-slide PPTX in memory, with speaker notes on the first slide.
pub fn sample_pptx() -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    {
        let mut zip = zip::ZipWriter::new(&mut buffer);
        let options: FileOptions<zip::write::ExtendedFileOptions> = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(0o644);

        zip.start_file("[Content_Types].xml", options.clone())
            .unwrap();
        zip.write_all(CONTENT_TYPES.as_bytes()).unwrap();

        zip.add_directory("_rels", options.clone()).unwrap();
        zip.start_file("_rels/.rels", options.clone()).unwrap();
        zip.write_all(ROOT_RELS.as_bytes()).unwrap();

        zip.add_directory("ppt", options.clone()).unwrap();
        zip.start_file("ppt/presentation.xml", options.clone())
            .unwrap();
        zip.write_all(PRESENTATION.as_bytes()).unwrap();

        zip.add_directory("ppt/slides", options.clone()).unwrap();
        zip.start_file("ppt/slides/slide1.xml", options.clone())
            .unwrap();
        zip.write_all(slide_xml("Fleet Overview", "Twelve trucks operate out of three depots.").as_bytes())
            .unwrap();
        zip.start_file("ppt/slides/slide2.xml", options.clone())
            .unwrap();
        zip.write_all(slide_xml("Depot Map", "Each depot covers a separate province.").as_bytes())
            .unwrap();

        zip.add_directory("ppt/notesSlides", options.clone()).unwrap();
        zip.start_file("ppt/notesSlides/notesSlide1.xml", options.clone())
            .unwrap();
        zip.write_all(slide_xml("Mention the new depot opening next quarter.", "").as_bytes())
            .unwrap();

        zip.finish().unwrap();
    }
    buffer.into_inner()
}

fn slide_xml(line1: &str, line2: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
    <p:cSld>
        <p:spTree>
            <p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
            <p:grpSpPr/>
            <p:sp>
                <p:nvSpPr><p:cNvPr id="2" name="Title"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>
                <p:spPr/>
                <p:txBody><a:bodyPr/><a:p><a:r><a:t>{line1}</a:t></a:r></a:p></p:txBody>
            </p:sp>
            <p:sp>
                <p:nvSpPr><p:cNvPr id="3" name="Content"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>
                <p:spPr/>
                <p:txBody><a:bodyPr/><a:p><a:r><a:t>{line2}</a:t></a:r></a:p></p:txBody>
            </p:sp>
        </p:spTree>
    </p:cSld>
</p:sld>"#
    )
}

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
    <Override PartName="/ppt/slides/slide1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>
    <Override PartName="/ppt/slides/slide2.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>
</Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>
</Relationships>"#;

const PRESENTATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
    <p:sldIdLst>
        <p:sldId id="256" r:id="rId1"/>
        <p:sldId id="257" r:id="rId2"/>
    </p:sldIdLst>
</p:presentation>"#;
