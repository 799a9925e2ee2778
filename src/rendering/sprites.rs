//! Sprite cache keyed by logical name.
//!
//! Every constructor fills all keys, so `get` never misses.

use std::collections::HashMap;

use macroquad::prelude::*;

use super::RenderError;

/// Size of every sprite image in pixels
pub const SPRITE_WIDTH: u16 = 101;
pub const SPRITE_HEIGHT: u16 = 171;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteKey {
    WaterBlock,
    StoneBlock,
    GrassBlock,
    EnemyBug,
    CharBoy,
}

impl SpriteKey {
    pub const ALL: [SpriteKey; 5] = [
        SpriteKey::WaterBlock,
        SpriteKey::StoneBlock,
        SpriteKey::GrassBlock,
        SpriteKey::EnemyBug,
        SpriteKey::CharBoy,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            SpriteKey::WaterBlock => "water-block",
            SpriteKey::StoneBlock => "stone-block",
            SpriteKey::GrassBlock => "grass-block",
            SpriteKey::EnemyBug => "enemy-bug",
            SpriteKey::CharBoy => "char-boy",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.png", self.name())
    }

    /// Opaque region (x, y, w, h) and colour of the stand-in image
    fn placeholder_body(self) -> ((u16, u16, u16, u16), Color) {
        match self {
            SpriteKey::WaterBlock => ((0, 50, 101, 121), Color::from_rgba(60, 120, 220, 255)),
            SpriteKey::StoneBlock => ((0, 50, 101, 121), Color::from_rgba(150, 150, 150, 255)),
            SpriteKey::GrassBlock => ((0, 50, 101, 121), Color::from_rgba(80, 170, 70, 255)),
            SpriteKey::EnemyBug => ((2, 77, 97, 66), Color::from_rgba(200, 40, 40, 255)),
            SpriteKey::CharBoy => ((17, 63, 67, 76), Color::from_rgba(240, 200, 150, 255)),
        }
    }

    /// Flat-coloured stand-in: transparent except for the sprite's body
    pub fn placeholder_image(self) -> Image {
        let mut image = Image::gen_image_color(SPRITE_WIDTH, SPRITE_HEIGHT, BLANK);
        let ((x, y, w, h), color) = self.placeholder_body();
        for py in y..y + h {
            for px in x..x + w {
                image.set_pixel(px as u32, py as u32, color);
            }
        }
        image
    }
}

pub struct Sprites {
    textures: HashMap<SpriteKey, Texture2D>,
}

impl Sprites {
    /// Load every sprite from `dir`, failing on the first missing one
    pub async fn load(dir: &str) -> Result<Self, RenderError> {
        let mut textures = HashMap::with_capacity(SpriteKey::ALL.len());
        for key in SpriteKey::ALL {
            let path = format!("{dir}/{}", key.file_name());
            let texture = load_texture(&path)
                .await
                .map_err(|source| RenderError::SpriteLoad {
                    key: key.name(),
                    path: path.clone(),
                    source,
                })?;
            textures.insert(key, texture);
        }
        log::info!("loaded {} sprites from {dir}", textures.len());
        Ok(Self { textures })
    }

    /// Sprites generated in memory, for running without an asset directory
    pub fn placeholder() -> Self {
        let textures = SpriteKey::ALL
            .iter()
            .map(|&key| (key, Texture2D::from_image(&key.placeholder_image())))
            .collect();
        Self { textures }
    }

    pub fn get(&self, key: SpriteKey) -> &Texture2D {
        &self.textures[&key]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_asset_files() {
        let files: Vec<String> = SpriteKey::ALL.iter().map(|k| k.file_name()).collect();
        assert_eq!(
            files,
            vec![
                "water-block.png",
                "stone-block.png",
                "grass-block.png",
                "enemy-bug.png",
                "char-boy.png"
            ]
        );
    }

    #[test]
    fn test_placeholder_bodies_fit_sprite() {
        for key in SpriteKey::ALL {
            let ((x, y, w, h), _) = key.placeholder_body();
            assert!(x + w <= SPRITE_WIDTH, "{key:?}");
            assert!(y + h <= SPRITE_HEIGHT, "{key:?}");
        }
    }

    #[test]
    fn test_placeholder_image_is_transparent_outside_body() {
        let image = SpriteKey::EnemyBug.placeholder_image();
        assert_eq!(image.width(), SPRITE_WIDTH as usize);
        assert_eq!(image.height(), SPRITE_HEIGHT as usize);
        assert_eq!(image.get_pixel(0, 0).a, 0.0);
        assert_eq!(image.get_pixel(50, 100).a, 1.0);
    }
}
