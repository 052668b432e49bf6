use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType};
use tracing::info;

use crate::error::PortalError;
use crate::styles::DocumentStyles;
use crate::summary::CarerSummary;

/// One paragraph of the printed summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    Title(&'a str),
    Heading(&'a str),
    /// Stands in for an empty field; drawn in grey italics.
    Placeholder(&'a str),
    Text(String),
}

/// Lay out a carer summary paragraph by paragraph.
///
/// Layout follows the summary's structure, never the text inside it: a
/// field value is always body text, whatever characters it contains. Values
/// spanning several lines become one paragraph per line.
pub fn layout(summary: &CarerSummary) -> Vec<Block<'_>> {
    let mut blocks = vec![Block::Title(&summary.title)];
    if let Some(date) = summary.prepared_on {
        blocks.push(Block::Text(format!("Prepared on {date}")));
    }
    blocks.push(Block::Text(format!(
        "{} of {} details provided.",
        summary.provided, summary.total
    )));

    for row in &summary.rows {
        blocks.push(Block::Heading(row.label));
        match &row.value {
            Some(value) => blocks.extend(value.lines().map(|line| Block::Text(line.to_string()))),
            None => blocks.push(Block::Placeholder(&summary.placeholder)),
        }
    }
    blocks
}

/// Pack a carer summary into a DOCX document.
pub fn generate_docx(
    summary: &CarerSummary,
    styles: &DocumentStyles,
) -> Result<Vec<u8>, PortalError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Title", "title", styles.title_size))
        .add_style(heading_style("Heading1", "heading 1", styles.heading_size));

    for block in layout(summary) {
        let paragraph = match block {
            Block::Title(text) => heading_paragraph(text, "Title", styles),
            Block::Heading(text) => heading_paragraph(text, "Heading1", styles),
            Block::Placeholder(text) => Paragraph::new().add_run(
                body_run(text, styles)
                    .italic()
                    .color(styles.placeholder_color.as_str()),
            ),
            Block::Text(text) => Paragraph::new()
                .align(AlignmentType::Left)
                .add_run(body_run(&text, styles)),
        };
        docx = docx.add_paragraph(paragraph);
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| PortalError::Docx(e.to_string()))?;

    let bytes = buf.into_inner();
    info!(
        bytes = bytes.len(),
        provided = summary.provided,
        "carer summary packed as DOCX"
    );
    Ok(bytes)
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
        .bold()
}

fn heading_paragraph(text: &str, style_id: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().style(style_id).add_run(
        Run::new()
            .add_text(text)
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    )
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}
