use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::debug;
use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, Stream, StringFormat, dictionary};

use super::canvas::{Canvas, win_ansi};
use super::raster::{ImageError, RasterImage};
use crate::layout::PageSize;
use crate::metrics::BuiltinFont;

/// Metadata written to the PDF `/Info` dictionary.
#[derive(Debug, Clone)]
pub struct DocumentInfo {
    pub title: String,
    pub created: Option<DateTime<Utc>>,
}

impl Default for DocumentInfo {
    fn default() -> Self {
        Self {
            title: "Card Sheet".to_string(),
            created: None,
        }
    }
}

/// Reference to an embedded image, usable with [`Canvas::draw_image`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

/// Pages and resources of a sheet before serialization.
#[derive(Debug)]
pub struct SheetDocument {
    page_size: PageSize,
    pages: Vec<Canvas>,
    images: Vec<(ImageHandle, RasterImage)>,
    image_index: HashMap<PathBuf, usize>,
    info: DocumentInfo,
    fingerprint: Option<Vec<u8>>,
}

impl SheetDocument {
    pub fn new(page_size: PageSize, info: DocumentInfo) -> Self {
        Self {
            page_size,
            pages: Vec::new(),
            images: Vec::new(),
            image_index: HashMap::new(),
            info,
            fingerprint: None,
        }
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Start a new page and return its canvas.
    pub fn add_page(&mut self) -> &mut Canvas {
        self.pages.push(Canvas::new());
        debug!("started page {}", self.pages.len());
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    pub fn page_mut(&mut self, index: usize) -> Option<&mut Canvas> {
        self.pages.get_mut(index)
    }

    /// Decode and register an image. A path already embedded is reused.
    pub fn embed_image(&mut self, path: &Path) -> Result<ImageHandle, ImageError> {
        if let Some(&idx) = self.image_index.get(path) {
            return Ok(self.images[idx].0.clone());
        }
        let raster = RasterImage::open(path)?;
        let handle = ImageHandle {
            name: format!("Im{}", self.images.len() + 1),
            width: raster.width,
            height: raster.height,
        };
        debug!(
            "embedded {} as {} ({}x{})",
            path.display(),
            handle.name,
            handle.width,
            handle.height
        );
        self.image_index.insert(path.to_path_buf(), self.images.len());
        self.images.push((handle.clone(), raster));
        Ok(handle)
    }

    /// Digest identifying the document content, written as the trailer `/ID`.
    pub fn set_fingerprint(&mut self, digest: &[u8]) {
        self.fingerprint = Some(digest.iter().take(16).copied().collect());
    }

    /// Assemble the lopdf object graph.
    pub fn into_pdf(mut self) -> Result<Document> {
        if self.pages.is_empty() {
            self.pages.push(Canvas::new());
        }
        let (width, height) = self.page_size.dimensions();
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut fonts = Dictionary::new();
        for font in BuiltinFont::ALL {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(font.resource_name(), font_id);
        }

        let mut xobjects = Dictionary::new();
        for (handle, raster) in self.images {
            let mut image_dict = dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => i64::from(raster.width),
                "Height" => i64::from(raster.height),
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8_i64,
            };
            if let Some(alpha) = raster.alpha {
                let mask = dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => i64::from(raster.width),
                    "Height" => i64::from(raster.height),
                    "ColorSpace" => "DeviceGray",
                    "BitsPerComponent" => 8_i64,
                };
                let mask_id = doc.add_object(Stream::new(mask, alpha));
                image_dict.set("SMask", mask_id);
            }
            let image_id = doc.add_object(Stream::new(image_dict, raster.rgb));
            xobjects.set(handle.name, image_id);
        }

        let resources_id = doc.add_object(dictionary! {
            "Font" => fonts,
            "XObject" => xobjects,
        });

        let mut kids: Vec<Object> = Vec::with_capacity(self.pages.len());
        for canvas in self.pages {
            let content = Content {
                operations: canvas.into_operations(),
            };
            let encoded = content.encode().context("failed to encode page content")?;
            let content_id = doc.add_object(Stream::new(Dictionary::new(), encoded));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                width.into(),
                height.into(),
            ],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut info = dictionary! {
            "Title" => Object::String(win_ansi(&self.info.title), StringFormat::Literal),
            "Producer" => Object::string_literal(concat!("cardsheet ", env!("CARGO_PKG_VERSION"))),
        };
        if let Some(created) = self.info.created {
            let stamp = created.format("D:%Y%m%d%H%M%SZ").to_string();
            info.set("CreationDate", Object::string_literal(stamp));
        }
        let info_id = doc.add_object(info);
        doc.trailer.set("Info", info_id);

        if let Some(id) = self.fingerprint {
            doc.trailer.set(
                "ID",
                vec![
                    Object::String(id.clone(), StringFormat::Hexadecimal),
                    Object::String(id, StringFormat::Hexadecimal),
                ],
            );
        }

        doc.compress();
        Ok(doc)
    }

    pub fn write_to<W: Write>(self, writer: &mut W) -> Result<()> {
        let mut doc = self.into_pdf()?;
        doc.save_to(writer).context("failed to serialize PDF")?;
        Ok(())
    }

    pub fn to_bytes(self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(buffer)
    }

    pub fn save(self, path: &Path) -> Result<()> {
        let file =
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer
            .flush()
            .with_context(|| format!("failed to write {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_still_has_one_page() {
        let doc = SheetDocument::new(PageSize::Letter, DocumentInfo::default());
        let bytes = doc.to_bytes().unwrap();
        let parsed = Document::load_mem(&bytes).unwrap();
        assert_eq!(parsed.get_pages().len(), 1);
    }

    #[test]
    fn every_added_page_is_serialized() {
        let mut doc = SheetDocument::new(PageSize::A4, DocumentInfo::default());
        for _ in 0..3 {
            doc.add_page().stroke_rect(0.0, 0.0, 10.0, 10.0);
        }
        let bytes = doc.to_bytes().unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
        let parsed = Document::load_mem(&bytes).unwrap();
        assert_eq!(parsed.get_pages().len(), 3);
    }

    #[test]
    fn same_image_path_is_embedded_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("goo.png");
        RgbImage::new(4, 2).save(&path).unwrap();

        let mut doc = SheetDocument::new(PageSize::Letter, DocumentInfo::default());
        let first = doc.embed_image(&path).unwrap();
        let second = doc.embed_image(&path).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.name, "Im1");
        assert_eq!((first.width, first.height), (4, 2));
        assert_eq!(doc.image_count(), 1);
    }

    #[test]
    fn missing_image_does_not_register() {
        let mut doc = SheetDocument::new(PageSize::Letter, DocumentInfo::default());
        assert!(doc.embed_image(Path::new("nowhere/goo.png")).is_err());
        assert_eq!(doc.image_count(), 0);
    }
}
