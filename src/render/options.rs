//! Rendering options and configuration.

use chrono::{DateTime, FixedOffset, Local};

use super::{TypographyOptions, TypographyPreset};
use crate::model::{Margins, PageSize, StyleSheet};

/// Default product banner.
pub const DEFAULT_PRODUCT_NAME: &str = "ATS Resume Expert";

/// Default footer tagline.
pub const DEFAULT_TAGLINE: &str = "Your AI-Powered Career Assistant";

/// Default file name prefix of single reports.
pub const DEFAULT_PREFIX: &str = "ATS_Analysis";

/// Default file name prefix of combined reports.
pub const DEFAULT_COMBINED_PREFIX: &str = "ATS";

/// Default title of combined reports.
pub const DEFAULT_COMBINED_TITLE: &str = "Complete Analysis Report";

/// Options for building and writing reports.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Product banner shown in headers and footers
    pub product_name: String,

    /// Tagline shown under the attribution line
    pub tagline: String,

    /// File name and report id prefix of single reports
    pub filename_prefix: String,

    /// File name and report id prefix of combined reports
    pub combined_prefix: String,

    /// Title of combined reports, used on the cover and in the file name
    pub combined_title: String,

    /// Author written to the PDF info dictionary
    pub author: String,

    /// Pinned generation time; the local clock is read when `None`
    pub timestamp: Option<DateTime<FixedOffset>>,

    /// Page size
    pub page_size: PageSize,

    /// Page margins
    pub margins: Margins,

    /// Flate-compress content streams
    pub compress: bool,

    /// Typography applied to body lines
    pub typography: TypographyOptions,

    /// Draw `Page N of M` in the bottom margin
    pub page_numbers: bool,

    /// Paragraph styles
    pub styles: StyleSheet,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the product banner.
    pub fn with_product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = name.into();
        self
    }

    /// Set the footer tagline.
    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = tagline.into();
        self
    }

    /// Set the prefix of single reports.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.filename_prefix = prefix.into();
        self
    }

    /// Set the prefix of combined reports.
    pub fn with_combined_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.combined_prefix = prefix.into();
        self
    }

    /// Set the combined report title.
    pub fn with_combined_title(mut self, title: impl Into<String>) -> Self {
        self.combined_title = title.into();
        self
    }

    /// Set the PDF author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Pin the generation time.
    pub fn with_timestamp(mut self, timestamp: DateTime<FixedOffset>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.page_size = size;
        self
    }

    /// Set the page margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Enable or disable content stream compression.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Set typography options.
    pub fn with_typography(mut self, typography: TypographyOptions) -> Self {
        self.typography = typography;
        self
    }

    /// Set typography preset.
    pub fn with_typography_preset(mut self, preset: TypographyPreset) -> Self {
        self.typography = TypographyOptions::from_preset(preset);
        self
    }

    /// Enable or disable page numbers.
    pub fn with_page_numbers(mut self, enabled: bool) -> Self {
        self.page_numbers = enabled;
        self
    }

    /// Set the style sheet.
    pub fn with_styles(mut self, styles: StyleSheet) -> Self {
        self.styles = styles;
        self
    }

    /// The generation time: the pinned timestamp, or the local clock.
    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
            .unwrap_or_else(|| Local::now().fixed_offset())
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            product_name: DEFAULT_PRODUCT_NAME.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
            filename_prefix: DEFAULT_PREFIX.to_string(),
            combined_prefix: DEFAULT_COMBINED_PREFIX.to_string(),
            combined_title: DEFAULT_COMBINED_TITLE.to_string(),
            author: "AI Career Assistant".to_string(),
            timestamp: None,
            page_size: PageSize::A4,
            margins: Margins::default(),
            compress: true,
            typography: TypographyOptions::standard(),
            page_numbers: true,
            styles: StyleSheet::professional(),
        }
    }
}
