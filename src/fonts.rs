use std::path::{Path, PathBuf};

use crate::error::{MenuError, MenuResult};

/// Candidate paths that commonly host a CJK-capable font, tried in order.
/// First existing path wins; this is an ordered fallback, not a quality
/// ranking, and the order is part of the tool's contract.
pub const CJK_FONT_CANDIDATES: [&str; 10] = [
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/opentype/noto/NotoSerifCJK-Regular.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansTC-Regular.otf",
    "/usr/share/fonts/truetype/noto/NotoSansTC-Regular.otf",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-zenhei.ttc",
    "/usr/share/fonts/truetype/droid/DroidSansFallbackFull.ttf",
    "/usr/share/fonts/truetype/arphic/uming.ttc",
    "/usr/share/fonts/truetype/arphic/ukai.ttc",
];

/// Fixed path of the Latin font used for the secondary label line.
pub const LATIN_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

pub const FONT_INSTALL_HINT: &str =
    "no CJK-capable font found; install one, e.g. `sudo apt install fonts-noto-cjk`";

/// Ordered filesystem search for the fonts a run needs. The candidate list
/// is a plain field so tests can point it at a synthetic directory.
#[derive(Clone, Debug)]
pub struct FontLocator {
    pub candidates: Vec<PathBuf>,
    pub secondary: PathBuf,
}

impl Default for FontLocator {
    fn default() -> Self {
        Self {
            candidates: CJK_FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
            secondary: PathBuf::from(LATIN_FONT_PATH),
        }
    }
}

impl FontLocator {
    /// First existing candidate, in list order.
    pub fn locate_primary(&self) -> Option<&Path> {
        for candidate in &self.candidates {
            if candidate.exists() {
                tracing::info!(path = %candidate.display(), "found CJK font");
                return Some(candidate);
            }
        }
        tracing::warn!("no CJK font candidate exists on this host");
        None
    }

    /// Resolve and read both fonts. Any miss here is fatal to the run:
    /// producing menus without the correct script rendering would be
    /// misleading, so the caller must abort before compositing.
    pub fn load(&self) -> MenuResult<FontSet> {
        let primary_path = self
            .locate_primary()
            .ok_or_else(|| MenuError::font_not_found(FONT_INSTALL_HINT))?
            .to_path_buf();
        let primary = std::fs::read(&primary_path).map_err(|e| {
            MenuError::font_not_found(format!("read '{}': {e}", primary_path.display()))
        })?;
        let secondary = std::fs::read(&self.secondary).map_err(|e| {
            MenuError::font_not_found(format!("read '{}': {e}", self.secondary.display()))
        })?;

        Ok(FontSet {
            primary,
            secondary,
            primary_path,
            secondary_path: self.secondary.clone(),
        })
    }
}

/// Raw bytes of the two fonts for one run, loaded once and shared read-only.
#[derive(Clone)]
pub struct FontSet {
    pub primary: Vec<u8>,
    pub secondary: Vec<u8>,
    pub primary_path: PathBuf,
    pub secondary_path: PathBuf,
}

impl std::fmt::Debug for FontSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSet")
            .field("primary_path", &self.primary_path)
            .field("primary_len", &self.primary.len())
            .field("secondary_path", &self.secondary_path)
            .field("secondary_len", &self.secondary.len())
            .finish()
    }
}
