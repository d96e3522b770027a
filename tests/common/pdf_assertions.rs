use lopdf::Document as LopdfDocument;
use lopdf::content::Content;
use std::path::{Path, PathBuf};

/// Every spooled job in `dir`, oldest name first.
pub fn spooled_jobs(dir: &Path) -> Vec<PathBuf> {
    let mut jobs: Vec<PathBuf> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok().map(|e| e.path()))
                .filter(|p| p.extension().is_some_and(|ext| ext == "pdf"))
                .collect()
        })
        .unwrap_or_default();
    jobs.sort();
    jobs
}

/// Width and height of the first page's MediaBox, in points.
pub fn page_size(path: &Path) -> Result<(f32, f32), Box<dyn std::error::Error>> {
    let doc = LopdfDocument::load(path)?;
    let pages = doc.get_pages();
    let page_id = *pages.values().next().ok_or("PDF has no pages")?;
    let media_box = doc.get_object(page_id)?.as_dict()?.get(b"MediaBox")?.as_array()?;
    let width = media_box[2].as_float()?;
    let height = media_box[3].as_float()?;
    Ok((width, height))
}

pub fn page_count(path: &Path) -> Result<usize, Box<dyn std::error::Error>> {
    Ok(LopdfDocument::load(path)?.get_pages().len())
}

/// The x operand of every text placement (`Td`) and path point (`m`, `l`)
/// on the first page, in points.
pub fn drawn_x_positions(path: &Path) -> Result<Vec<f32>, Box<dyn std::error::Error>> {
    let doc = LopdfDocument::load(path)?;
    let page_id = doc.page_iter().next().ok_or("PDF has no pages")?;
    let content = Content::decode(&doc.get_page_content(page_id)?)?;
    let mut xs = Vec::new();
    for op in content.operations {
        if matches!(op.operator.as_str(), "Td" | "m" | "l") {
            let x = op.operands.first().ok_or("operator without operands")?;
            xs.push(x.as_float()?);
        }
    }
    Ok(xs)
}

/// Text of the first page as decoded through the fonts' ToUnicode maps,
/// with whitespace removed.
pub fn page_text(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let doc = LopdfDocument::load(path)?;
    let text = doc.extract_text(&[1])?;
    Ok(text.chars().filter(|c| !c.is_whitespace()).collect())
}
