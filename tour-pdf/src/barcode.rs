//! CODE128 barcode rasterization
//!
//! Encodes one SKU into a linear CODE128 (code set B) barcode PNG sized
//! for reliable optical scanning from a printed page. The raster carries
//! no human-readable text; the document places the SKU beneath the image.

use std::io::Cursor;
use std::sync::Arc;

use image::{GrayImage, Luma};
use tokio::sync::Semaphore;

use crate::error::{DocError, DocResult};
use crate::summary::NormalizedSummary;

/// Width of one barcode module in pixels
const MODULE_WIDTH: u32 = 3;
/// Bar height in pixels
const BAR_HEIGHT: u32 = 100;
/// Quiet zone margin around the bars in pixels
const MARGIN: u32 = 10;

/// CODE128 start symbol for code set B
const START_B: usize = 104;
/// CODE128 stop symbol
const STOP: usize = 106;

/// Element widths for symbols 0..=106, six elements per symbol
/// (alternating bar/space), eleven modules total. The stop symbol carries
/// a seventh element for the termination bar.
const PATTERNS: [&[u8]; 107] = [
    b"212222", b"222122", b"222221", b"121223", b"121322", b"131222", b"122213", b"122312",
    b"132212", b"221213", b"221312", b"231212", b"112232", b"122132", b"122231", b"113222",
    b"123122", b"123221", b"223211", b"221132", b"221231", b"213212", b"223112", b"312131",
    b"311222", b"321122", b"321221", b"312212", b"322112", b"322211", b"212123", b"212321",
    b"232121", b"111323", b"131123", b"131321", b"112313", b"132113", b"132311", b"211313",
    b"231113", b"231311", b"112133", b"112331", b"132131", b"113123", b"113321", b"133121",
    b"313121", b"211331", b"231131", b"213113", b"213311", b"213131", b"311123", b"311321",
    b"331121", b"312113", b"312311", b"332111", b"314111", b"221411", b"431111", b"111224",
    b"111422", b"121124", b"121421", b"141122", b"141221", b"112214", b"112412", b"122114",
    b"122411", b"142112", b"142211", b"241211", b"221114", b"413111", b"241112", b"134111",
    b"111242", b"121142", b"121241", b"114212", b"124112", b"124211", b"411212", b"421112",
    b"421211", b"212141", b"214121", b"412121", b"111143", b"111341", b"131141", b"114113",
    b"114311", b"411113", b"411311", b"113141", b"114131", b"311141", b"411131", b"211412",
    b"211214", b"211232", b"2331112",
];

/// One encoded barcode ready for layout
///
/// `image` is `None` when encoding failed; the cell then degrades to a
/// text-only label instead of failing the document.
#[derive(Debug, Clone)]
pub struct Barcode {
    pub sku: String,
    pub image: Option<Vec<u8>>,
    pub usage_count: usize,
}

/// Encode one SKU as a CODE128 barcode PNG
pub fn encode_png(sku: &str) -> DocResult<Vec<u8>> {
    let symbols = code_set_b_symbols(sku)?;
    let modules = render_modules(&symbols);

    let width = modules.len() as u32 * MODULE_WIDTH + 2 * MARGIN;
    let height = BAR_HEIGHT + 2 * MARGIN;
    let mut img = GrayImage::from_pixel(width, height, Luma([255u8]));

    for (i, dark) in modules.iter().enumerate() {
        if !dark {
            continue;
        }
        let x0 = MARGIN + i as u32 * MODULE_WIDTH;
        for x in x0..x0 + MODULE_WIDTH {
            for y in MARGIN..MARGIN + BAR_HEIGHT {
                img.put_pixel(x, y, Luma([0u8]));
            }
        }
    }

    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)?;
    Ok(buf)
}

/// Map the SKU to code set B symbol values, including start, checksum and
/// stop symbols
fn code_set_b_symbols(sku: &str) -> DocResult<Vec<usize>> {
    if sku.is_empty() {
        return Err(DocError::InvalidSku { sku: sku.to_string() });
    }

    let mut symbols = vec![START_B];
    for ch in sku.chars() {
        let code = ch as u32;
        // Code set B covers ASCII 32..=126
        if !(32..=126).contains(&code) {
            return Err(DocError::InvalidSku { sku: sku.to_string() });
        }
        symbols.push((code - 32) as usize);
    }

    let checksum = symbols
        .iter()
        .enumerate()
        .map(|(i, value)| value * i.max(1))
        .sum::<usize>()
        % 103;
    symbols.push(checksum);
    symbols.push(STOP);
    Ok(symbols)
}

/// Expand symbol values into a flat module sequence (true = dark)
fn render_modules(symbols: &[usize]) -> Vec<bool> {
    let mut modules = Vec::new();
    for &symbol in symbols {
        let mut dark = true;
        for &width in PATTERNS[symbol] {
            let count = (width - b'0') as usize;
            modules.extend(std::iter::repeat_n(dark, count));
            dark = !dark;
        }
    }
    modules
}

/// Encode every unique SKU of a normalized summary, bounded fan-out
///
/// Encoding is independent per SKU and CPU-bound, so each code runs on the
/// blocking pool behind a semaphore permit. Per-SKU failures are logged
/// and degrade that barcode to a text-only cell; the batch itself never
/// fails. Output order matches the (sorted) input SKU order.
pub async fn encode_batch(summary: &NormalizedSummary, concurrency: usize) -> Vec<Barcode> {
    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));

    let tasks = summary.skus.iter().map(|sku| {
        let sku = sku.clone();
        let usage_count = summary.usage_count(&sku);
        let semaphore = semaphore.clone();
        async move {
            let _permit = semaphore.acquire_owned().await.ok();
            let encode_sku = sku.clone();
            let image = match tokio::task::spawn_blocking(move || encode_png(&encode_sku)).await {
                Ok(Ok(png)) => Some(png),
                Ok(Err(e)) => {
                    tracing::warn!(sku = %sku, error = %e, "Barcode encoding failed");
                    None
                }
                Err(e) => {
                    tracing::warn!(sku = %sku, error = %e, "Barcode encoding task failed");
                    None
                }
            };
            Barcode { sku, image, usage_count }
        }
    });

    let barcodes = futures::future::join_all(tasks).await;
    tracing::debug!(
        total = barcodes.len(),
        failed = barcodes.iter().filter(|b| b.image.is_none()).count(),
        "Barcode batch encoded"
    );
    barcodes
}
