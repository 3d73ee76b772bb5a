//! Segmentation options.

/// Tunables for page segmentation.
#[derive(Debug, Clone)]
pub struct SegmentOptions {
    /// Character budget for text-block grouping
    pub char_count_threshold: usize,

    /// Proximity threshold for locating caption text, as a fraction of
    /// page height (vertical) and box width (horizontal tolerance)
    pub proximity_threshold: f32,

    /// Fraction of page height treated as header/footer band at the top
    /// and bottom of every page
    pub margin_band: f32,

    /// Minimum image size as a fraction of page dimensions; smaller
    /// images are discarded as decorative
    pub min_image_fraction: f32,
}

impl SegmentOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grouping character budget.
    pub fn with_char_count_threshold(mut self, threshold: usize) -> Self {
        self.char_count_threshold = threshold;
        self
    }

    /// Set the caption proximity threshold.
    pub fn with_proximity_threshold(mut self, threshold: f32) -> Self {
        self.proximity_threshold = threshold;
        self
    }

    /// Set the header/footer band fraction.
    pub fn with_margin_band(mut self, band: f32) -> Self {
        self.margin_band = band;
        self
    }

    /// Set the minimum image size fraction.
    pub fn with_min_image_fraction(mut self, fraction: f32) -> Self {
        self.min_image_fraction = fraction;
        self
    }
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            char_count_threshold: 500,
            proximity_threshold: 0.1,
            margin_band: 0.1,
            min_image_fraction: 1.0 / 20.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SegmentOptions::default();
        assert_eq!(options.char_count_threshold, 500);
        assert_eq!(options.proximity_threshold, 0.1);
        assert_eq!(options.margin_band, 0.1);
        assert_eq!(options.min_image_fraction, 0.05);
    }

    #[test]
    fn test_builder() {
        let options = SegmentOptions::new()
            .with_char_count_threshold(200)
            .with_proximity_threshold(0.2);

        assert_eq!(options.char_count_threshold, 200);
        assert_eq!(options.proximity_threshold, 0.2);
    }
}
