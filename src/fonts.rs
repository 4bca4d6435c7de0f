//! Font registration for the `ab_glyph` text path used by bitmap output.
//!
//! `ab_glyph` doesn't discover OS fonts, so a TTF has to be registered under
//! the "sans-serif" family before PNG text can be drawn. SVG output does not
//! need this: text is written as `<text>` elements.

use log::{debug, warn};
use plotters::style::FontStyle;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Common locations of a plain sans-serif TTF.
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static REGISTERED: OnceLock<Option<PathBuf>> = OnceLock::new();

fn try_register(path: &Path) -> bool {
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            debug!("font {} not readable: {}", path.display(), e);
            return false;
        }
    };
    // Plotters keeps a reference for the rest of the process.
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    match plotters::style::register_font("sans-serif", FontStyle::Normal, bytes) {
        Ok(()) => true,
        Err(_) => {
            warn!("{} is not a usable TrueType font", path.display());
            false
        }
    }
}

/// Register a "sans-serif" font once per process and return where it came from.
///
/// `custom` is tried first, then [`SYSTEM_FONT_CANDIDATES`]. Only the first call
/// has an effect. Returns `None` when nothing could be registered; bitmap charts
/// are then drawn without text.
pub fn ensure_fonts_registered(custom: Option<&Path>) -> Option<&'static Path> {
    REGISTERED
        .get_or_init(|| {
            let candidates = custom
                .map(Path::to_path_buf)
                .into_iter()
                .chain(SYSTEM_FONT_CANDIDATES.iter().map(PathBuf::from));
            for path in candidates {
                if try_register(&path) {
                    debug!("registered font {}", path.display());
                    return Some(path);
                }
            }
            warn!("no usable font found; bitmap charts will have no text (try --font)");
            None
        })
        .as_deref()
}
