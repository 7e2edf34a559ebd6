// src/assets.rs
//
// Resolución de arte por ruta de convención bajo assets/. Un fichero
// ausente es un fallo silencioso: se registra una vez y la pantalla
// usa su texto de reserva.

use egui::{ColorImage, Context, TextureHandle, TextureOptions};
use log::warn;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub struct AssetStore {
    root: PathBuf,
    // None cacheado = ya sabemos que falta; no se reintenta cada frame.
    textures: HashMap<String, Option<TextureHandle>>,
}

impl AssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            textures: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Textura para una ruta relativa al root de assets; carga perezosa
    /// con caché, None si el fichero falta o no decodifica.
    pub fn texture(&mut self, ctx: &Context, rel: &str) -> Option<TextureHandle> {
        if let Some(cached) = self.textures.get(rel) {
            return cached.clone();
        }
        let loaded = self.load_texture(ctx, rel);
        self.textures.insert(rel.to_owned(), loaded.clone());
        loaded
    }

    fn load_texture(&self, ctx: &Context, rel: &str) -> Option<TextureHandle> {
        let path = self.root.join(rel);
        let image = match image::open(&path) {
            Ok(image) => image,
            Err(err) => {
                warn!("No se pudo cargar {}: {err}", path.display());
                return None;
            }
        };
        let rgba = image.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        let color_image = ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
        Some(ctx.load_texture(rel.to_owned(), color_image, TextureOptions::LINEAR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_keeps_the_given_root() {
        let store = AssetStore::new("assets");
        assert_eq!(store.root(), Path::new("assets"));
    }
}
