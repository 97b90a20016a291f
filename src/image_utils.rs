//! Image utilities for PDF rendering

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use image::RgbaImage;
use pdf_writer::{Filter, Pdf, Ref};

use crate::error::{RendererError, RendererResult};

/// Zlib-compress a stream body for `/FlateDecode`
pub fn deflate(data: &[u8]) -> RendererResult<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 2), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Split RGBA pixels into an RGB plane and an alpha plane
pub fn split_alpha(image: &RgbaImage) -> (Vec<u8>, Vec<u8>) {
    let (w, h) = image.dimensions();
    let mut rgb: Vec<u8> = Vec::with_capacity((w * h * 3) as usize);
    let mut alpha: Vec<u8> = Vec::with_capacity((w * h) as usize);
    for chunk in image.as_raw().chunks_exact(4) {
        rgb.extend_from_slice(&chunk[..3]);
        alpha.push(chunk[3]);
    }
    (rgb, alpha)
}

/// Write an image XObject plus its soft mask
///
/// The alpha channel goes into a DeviceGray `/SMask` so the transparent
/// signature background stays transparent on the page.
pub fn add_image_to_pdf(pdf: &mut Pdf, image: &RgbaImage, image_id: Ref, smask_id: Ref) -> RendererResult<()> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(RendererError::ImageError(format!("empty image {}x{}", width, height)));
    }
    let (rgb, alpha) = split_alpha(image);
    let rgb = deflate(&rgb)?;
    let alpha = deflate(&alpha)?;

    {
        let mut smask = pdf.image_xobject(smask_id, &alpha);
        smask.filter(Filter::FlateDecode);
        smask.width(width as i32);
        smask.height(height as i32);
        smask.color_space().device_gray();
        smask.bits_per_component(8);
    }

    let mut xobject = pdf.image_xobject(image_id, &rgb);
    xobject.filter(Filter::FlateDecode);
    xobject.width(width as i32);
    xobject.height(height as i32);
    xobject.color_space().device_rgb();
    xobject.bits_per_component(8);
    xobject.s_mask(smask_id);
    Ok(())
}
