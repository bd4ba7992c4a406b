#![allow(dead_code)] // not every test binary uses every helper

use assert_cmd::Command;

pub const PAGE_NS: &str = "http://schema.primaresearch.org/PAGE/gts/pagecontent/2013-07-15";

pub fn pagetag_cmd() -> Command {
    Command::cargo_bin("pagetag").unwrap()
}

/// Build a PAGE-XML document from pre-rendered region elements.
pub fn page_document(regions: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<PcGts xmlns="{PAGE_NS}">
  <Page>
{regions}
  </Page>
</PcGts>"#
    )
}

pub fn text_region(id: &str, lines: &str) -> String {
    format!(r#"<TextRegion id="{id}">{lines}</TextRegion>"#)
}

pub fn text_line(id: &str, custom: &str, text: &str) -> String {
    format!(
        r#"<TextLine id="{id}" custom="{custom}">
  <Coords points="0,0 100,0 100,30 0,30"/>
  <Baseline points="0,25 100,25"/>
  <TextEquiv><Unicode>{text}</Unicode></TextEquiv>
</TextLine>"#
    )
}

/// One region, one line: the shape most fixtures need.
pub fn single_line_document(custom: &str, text: &str) -> String {
    page_document(&text_region("r1", &text_line("l1", custom, text)))
}

/// Split one CSV line into fields, honoring quoting (coords fields contain
/// commas).
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut field)),
                _ => field.push(c),
            }
        }
    }

    fields.push(field);
    fields
}
