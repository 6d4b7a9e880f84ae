use crate::{Result, config::SlideshowConfig, dom::Document};

pub const IMAGE_CONTAINER_ID: &str = "image-container";

/// Cycles through the trip photos. Indexes are 1-based and always within
/// `1..=image_count`.
#[derive(Debug, Clone)]
pub struct Slideshow {
    index: u32,
    config: SlideshowConfig,
}

impl Slideshow {
    pub fn new(config: SlideshowConfig) -> Self {
        Self {
            index: 1,
            config: SlideshowConfig {
                image_count: config.image_count.max(1),
                ..config
            },
        }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn image_count(&self) -> u32 {
        self.config.image_count
    }

    /// Moves by `delta` slides, wrapping past either end.
    pub fn advance(&mut self, delta: i32) -> u32 {
        let count = i64::from(self.config.image_count);
        let zero_based = i64::from(self.index) - 1 + i64::from(delta);
        // rem_euclid keeps the result in 0..count for negative deltas too.
        self.index = (zero_based.rem_euclid(count) + 1) as u32;
        self.index
    }

    pub fn image_url(&self) -> String {
        format!(
            "{}{}.{}",
            self.config.image_prefix, self.index, self.config.image_extension
        )
    }

    /// Points the image in the slide container at the current slide.
    pub fn show(&self, document: &mut Document) -> Result<()> {
        let container = document.require(IMAGE_CONTAINER_ID)?;
        container.src = Some(self.image_url());
        Ok(())
    }
}

impl Default for Slideshow {
    fn default() -> Self {
        Self::new(SlideshowConfig::default())
    }
}
