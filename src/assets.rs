//! Sprite loading.
//!
//! Sprites are small text files (`<dir>/<name>.txt`), one line per terminal
//! row.  A sprite is loaded once and shared by every entity of that kind, so
//! the handle is a cheap `Arc` clone.  A sprite that cannot be read is not an
//! error: the entity simply carries no visual and the renderer draws a
//! placeholder block instead.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::entities::RowKind;

#[derive(Debug, PartialEq, Eq)]
struct SpriteArt {
    name: String,
    lines: Vec<String>,
}

/// Shared, immutable visual handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sprite(Arc<SpriteArt>);

impl Sprite {
    pub fn from_lines<S: Into<String>>(name: &str, lines: impl IntoIterator<Item = S>) -> Self {
        Sprite(Arc::new(SpriteArt {
            name: name.to_string(),
            lines: lines.into_iter().map(Into::into).collect(),
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn lines(&self) -> &[String] {
        &self.0.lines
    }

    /// True when both handles point at the same loaded sprite.
    pub fn same_as(&self, other: &Sprite) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// The visual handles for every entity kind that has artwork.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpriteSet {
    pub ship: Option<Sprite>,
    pub flagship: Option<Sprite>,
    pub red: Option<Sprite>,
    pub pink: Option<Sprite>,
    pub cyan: Option<Sprite>,
}

impl SpriteSet {
    pub fn for_row(&self, kind: RowKind) -> Option<Sprite> {
        match kind {
            RowKind::Flagship => self.flagship.clone(),
            RowKind::Red => self.red.clone(),
            RowKind::Pink => self.pink.clone(),
            RowKind::Cyan => self.cyan.clone(),
        }
    }
}

pub const SHIP_ASSET: &str = "ship";

pub struct AssetLoader {
    dir: PathBuf,
}

impl AssetLoader {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.txt"))
    }

    /// Load one sprite by logical name, degrading to `None` on any failure.
    pub fn load(&self, name: &str) -> Option<Sprite> {
        let path = self.path_for(name);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("sprite '{}' unavailable ({}): {}", name, path.display(), e);
                return None;
            }
        };

        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        let used = lines
            .iter()
            .rposition(|l| !l.is_empty())
            .map(|last| last + 1)
            .unwrap_or(0);
        if used == 0 {
            log::warn!("sprite '{}' at {} is empty", name, path.display());
            return None;
        }

        log::debug!("loaded sprite '{}' ({} rows)", name, used);
        Some(Sprite::from_lines(name, lines[..used].iter().copied()))
    }

    pub fn load_all(&self) -> SpriteSet {
        SpriteSet {
            ship: self.load(SHIP_ASSET),
            flagship: self.load(RowKind::Flagship.asset_name()),
            red: self.load(RowKind::Red.asset_name()),
            pink: self.load(RowKind::Pink.asset_name()),
            cyan: self.load(RowKind::Cyan.asset_name()),
        }
    }
}
