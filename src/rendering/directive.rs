// src/rendering/directive.rs
//
// Image directive micro-syntax: an image URL's query string may carry
// `w`/`h` (pixel dimensions) and `loc` (placement). Parsing never fails;
// anything unrecognized or out of range falls back to the defaults.
use serde::{Deserialize, Serialize};

pub const DEFAULT_IMAGE_DIMENSION: u32 = 190;
const MAX_IMAGE_DIMENSION: u32 = 4096;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImagePlacement {
    Left,
    #[default]
    Center,
    Right,
    FloatLeft,
    FloatRight,
}

impl ImagePlacement {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            "float-left" => Some(Self::FloatLeft),
            "float-right" => Some(Self::FloatRight),
            _ => None,
        }
    }

    /// Float placements render inline-flow; the rest are block-level with a
    /// horizontal alignment.
    pub fn is_float(self) -> bool {
        matches!(self, Self::FloatLeft | Self::FloatRight)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDirective {
    pub width: u32,
    pub height: u32,
    pub placement: ImagePlacement,
}

impl Default for ImageDirective {
    fn default() -> Self {
        Self {
            width: DEFAULT_IMAGE_DIMENSION,
            height: DEFAULT_IMAGE_DIMENSION,
            placement: ImagePlacement::Center,
        }
    }
}

impl ImageDirective {
    /// Extract the directive from an image URL. Grammar: query pairs split on
    /// `&` then `=`; `w`/`h` must be integers in the open interval
    /// (0, 4096); `loc` must be one of the five placements. Empty values,
    /// unknown keys, and malformed numbers are silently skipped.
    pub fn from_url(url: &str) -> Self {
        let mut directive = Self::default();
        let Some((_, query)) = url.split_once('?') else {
            return directive;
        };
        if query.is_empty() {
            return directive;
        }

        for pair in query.split('&') {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or_default();
            let Some(value) = parts.next().filter(|value| !value.is_empty()) else {
                continue;
            };
            match key {
                "w" => {
                    if let Some(width) = parse_dimension(value) {
                        directive.width = width;
                    }
                }
                "h" => {
                    if let Some(height) = parse_dimension(value) {
                        directive.height = height;
                    }
                }
                "loc" => {
                    if let Some(placement) = ImagePlacement::parse(value) {
                        directive.placement = placement;
                    }
                }
                _ => {}
            }
        }

        directive
    }
}

fn parse_dimension(value: &str) -> Option<u32> {
    value
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0 && *n < MAX_IMAGE_DIMENSION)
}
