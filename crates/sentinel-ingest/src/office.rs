//! DOCX and PPTX text extraction (Office Open XML zip containers).

use std::io::{Cursor, Read};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use sentinel_core::{Error, Result};

static DOCX_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>").unwrap());
static PPTX_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<a:t(?:\s[^>]*)?>([^<]*)</a:t>").unwrap());
static SLIDE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ppt/slides/slide(\d+)\.xml$").unwrap());
static ENTITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(amp|lt|gt|quot|apos|#[0-9]+|#x[0-9a-fA-F]+);").unwrap());

fn processing_error(e: impl std::fmt::Display) -> Error {
    Error::Extraction(format!("File processing error: {}", e))
}

fn open_archive(bytes: &[u8]) -> Result<zip::ZipArchive<Cursor<&[u8]>>> {
    zip::ZipArchive::new(Cursor::new(bytes)).map_err(processing_error)
}

fn read_entry(archive: &mut zip::ZipArchive<Cursor<&[u8]>>, name: &str) -> Result<String> {
    let mut entry = archive.by_name(name).map_err(processing_error)?;
    let mut xml = String::new();
    entry.read_to_string(&mut xml).map_err(processing_error)?;
    Ok(xml)
}

/// One line per `<w:p>` paragraph of `word/document.xml`.
pub fn extract_docx(bytes: &[u8]) -> Result<String> {
    let mut archive = open_archive(bytes)?;
    let xml = read_entry(&mut archive, "word/document.xml")?;

    let paragraphs: Vec<String> = paragraph_chunks(&xml, "</w:p>")
        .map(|chunk| join_runs(&DOCX_RUN_RE, chunk))
        .collect();
    Ok(paragraphs.join("\n"))
}

/// Slides in slide-number order; one line per `<a:p>` paragraph, a blank
/// line closing each slide.
pub fn extract_pptx(bytes: &[u8]) -> Result<String> {
    let mut archive = open_archive(bytes)?;

    let mut slides: Vec<(u32, String)> = archive
        .file_names()
        .filter_map(|name| {
            let number = SLIDE_NAME_RE.captures(name)?.get(1)?.as_str().parse().ok()?;
            Some((number, name.to_string()))
        })
        .collect();
    slides.sort_by_key(|(number, _)| *number);

    let mut text = String::new();
    for (_, name) in slides {
        let xml = read_entry(&mut archive, &name)?;
        for chunk in paragraph_chunks(&xml, "</a:p>") {
            let line = join_runs(&PPTX_RUN_RE, chunk);
            if !line.is_empty() {
                text.push_str(&line);
                text.push('\n');
            }
        }
        text.push('\n');
    }
    Ok(text)
}

/// XML fragments that each end with a closing paragraph tag.
fn paragraph_chunks<'a>(xml: &'a str, close_tag: &'a str) -> impl Iterator<Item = &'a str> {
    let count = xml.matches(close_tag).count();
    xml.split(close_tag).take(count)
}

fn join_runs(run_re: &Regex, chunk: &str) -> String {
    run_re
        .captures_iter(chunk)
        .filter_map(|cap| cap.get(1))
        .map(|m| decode_entities(m.as_str()))
        .collect()
}

/// Decode the predefined XML entities and numeric character references.
pub fn decode_entities(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &Captures| {
            let name = &caps[1];
            match name {
                "amp" => "&".to_string(),
                "lt" => "<".to_string(),
                "gt" => ">".to_string(),
                "quot" => "\"".to_string(),
                "apos" => "'".to_string(),
                _ => {
                    let code = if let Some(hex) = name.strip_prefix("#x") {
                        u32::from_str_radix(hex, 16).ok()
                    } else {
                        name[1..].parse().ok()
                    };
                    code.and_then(char::from_u32)
                        .map(String::from)
                        .unwrap_or_else(|| caps[0].to_string())
                }
            }
        })
        .into_owned()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::io::Write;

    /// Build an in-memory zip with the given `(name, contents)` entries.
    pub fn build_zip(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut zip = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
        let options = zip::write::SimpleFileOptions::default();
        for (name, contents) in entries {
            zip.start_file(*name, options).unwrap();
            zip.write_all(contents.as_bytes()).unwrap();
        }
        zip.finish().unwrap().into_inner()
    }

    pub fn docx(paragraphs: &[&str]) -> Vec<u8> {
        let body: String = paragraphs
            .iter()
            .map(|p| format!(r#"<w:p><w:r><w:rPr><w:b/></w:rPr><w:t xml:space="preserve">{p}</w:t></w:r></w:p>"#))
            .collect();
        let xml = format!(
            r#"<?xml version="1.0"?><w:document><w:body>{body}<w:sectPr/></w:body></w:document>"#
        );
        build_zip(&[("word/document.xml", xml.as_str())])
    }

    pub fn slide(paragraphs: &[&str]) -> String {
        let body: String = paragraphs
            .iter()
            .map(|p| format!("<a:p><a:r><a:t>{p}</a:t></a:r></a:p>"))
            .collect();
        format!("<p:sld><p:txBody>{body}</p:txBody></p:sld>")
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_docx_paragraphs() {
        let bytes = docx(&["Jane Doe", "Manager at Google &amp; Co"]);
        let text = extract_docx(&bytes).unwrap();
        assert_eq!(text, "Jane Doe\nManager at Google & Co");
    }

    #[test]
    fn test_docx_joins_runs_and_skips_tabs() {
        let xml = r#"<w:document><w:body><w:p><w:r><w:t>jane</w:t></w:r><w:r><w:tab/><w:t>@acme.com</w:t></w:r></w:p></w:body></w:document>"#;
        let bytes = build_zip(&[("word/document.xml", xml)]);
        assert_eq!(extract_docx(&bytes).unwrap(), "jane@acme.com");
    }

    #[test]
    fn test_docx_missing_document_part() {
        let bytes = build_zip(&[("word/styles.xml", "<w:styles/>")]);
        let err = extract_docx(&bytes).unwrap_err();
        assert!(err.to_string().starts_with("File processing error"));
    }

    #[test]
    fn test_pptx_slide_order() {
        let ten = slide(&["Ten"]);
        let two = slide(&["Two", "Call 9876543210"]);
        let bytes = build_zip(&[
            ("ppt/slides/slide10.xml", ten.as_str()),
            ("ppt/slides/slide2.xml", two.as_str()),
            ("ppt/slides/_rels/slide2.xml.rels", "<Relationships/>"),
            ("ppt/presentation.xml", "<p:presentation/>"),
        ]);
        let text = extract_pptx(&bytes).unwrap();
        assert_eq!(text, "Two\nCall 9876543210\n\nTen\n\n");
    }

    #[test]
    fn test_not_a_zip() {
        assert!(extract_pptx(b"plain text").is_err());
        assert!(extract_docx(b"").is_err());
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_entities("a &lt;b&gt; &quot;c&quot; &apos;d&apos;"), "a <b> \"c\" 'd'");
        assert_eq!(decode_entities("&#64;&#x41;"), "@A");
        assert_eq!(decode_entities("&unknown; &#xD800;"), "&unknown; &#xD800;");
    }
}
