use lopdf::Document as LopdfDocument;

/// Extract text content from a generated PDF.
pub fn extract_text_from_pdf(pdf_bytes: &[u8]) -> Result<String, Box<dyn std::error::Error>> {
    let doc = LopdfDocument::load_mem(pdf_bytes)?;
    let mut text = String::new();

    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        let page_text = doc.extract_text(&[page_num as u32])?;
        text.push_str(&page_text);
        text.push('\n');
    }

    Ok(text)
}

/// Number of pages in a generated PDF.
pub fn page_count(pdf_bytes: &[u8]) -> Result<usize, Box<dyn std::error::Error>> {
    let doc = LopdfDocument::load_mem(pdf_bytes)?;
    Ok(doc.get_pages().len())
}

/// Base-font names registered in a generated PDF, sorted.
pub fn registered_fonts(pdf_bytes: &[u8]) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let doc = LopdfDocument::load_mem(pdf_bytes)?;
    let mut fonts = Vec::new();

    for (_, object) in doc.objects.iter() {
        if let Ok(dict) = object.as_dict()
            && let Ok(type_val) = dict.get(b"Type")
            && let Ok(type_name) = type_val.as_name()
            && type_name == b"Font"
            && let Ok(base_font) = dict.get(b"BaseFont")
            && let Ok(font_name) = base_font.as_name()
        {
            fonts.push(String::from_utf8_lossy(font_name).to_string());
        }
    }

    fonts.sort();
    Ok(fonts)
}
