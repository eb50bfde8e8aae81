use crate::util::random_array;
use std::path::{Path, PathBuf};

pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "bmp", "tif", "tiff"];

/// Background images found in the slideshow directory and the order to show
/// them in.
pub struct Slideshow {
    pub images: Vec<PathBuf>,
    /// Permutation of `0..images.len()`.
    pub order: Vec<usize>,
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

impl Slideshow {
    /// Lists images directly inside `dir` (not recursing) and shuffles them.
    pub fn scan(dir: &Path) -> Slideshow {
        let mut images = Vec::new();
        match dir.read_dir() {
            Ok(entries) => {
                for e in entries.flatten() {
                    let p = e.path();
                    match e.file_type() {
                        Ok(ft) if ft.is_file() && is_image(&p) => images.push(p),
                        _ => {}
                    }
                }
            }
            Err(e) => log::warn!("Could not open slideshow directory {}: {}", dir.display(), e),
        }
        images.sort();

        let mut slideshow = Slideshow {
            order: vec![0; images.len()],
            images,
        };
        slideshow.shuffle();
        slideshow
    }

    pub fn shuffle(&mut self) {
        random_array(&mut self.order);
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Images in display order.
    pub fn ordered(&self) -> impl Iterator<Item = &PathBuf> {
        self.order.iter().map(|&i| &self.images[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_images_only() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.JPG", "c.webp", "notes.txt", "noext"] {
            std::fs::write(dir.path().join(name), "").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.png")).unwrap();

        let slideshow = Slideshow::scan(dir.path());
        let names: Vec<_> = slideshow
            .images
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.JPG", "b.png", "c.webp"]);

        let mut order = slideshow.order.clone();
        order.sort_unstable();
        assert_eq!(order, vec![0, 1, 2]);
        assert_eq!(slideshow.ordered().count(), 3);
    }

    #[test]
    fn missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let slideshow = Slideshow::scan(&dir.path().join("missing"));
        assert!(slideshow.is_empty());
        assert!(slideshow.order.is_empty());
    }
}
