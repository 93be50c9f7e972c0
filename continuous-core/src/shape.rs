//! Shape descriptors - the unit of data exchanged with the simulation feed.
//!
//! A frame is a JSON array of objects such as
//!
//! ```json
//! [
//!   { "Shape": "rect", "x": 0.5, "y": 0.5, "w": 0.2, "h": 0.1, "Color": "red", "Filled": true },
//!   { "Shape": "circle", "x": 0.1, "y": 0.9, "r": 2, "Color": "Red", "Filled": "true" }
//! ]
//! ```
//!
//! Positions are fractions of the surface size. Rectangle extents are
//! fractions too, circle radii are pixels.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// One shape to draw for a single render call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "Shape", rename_all = "lowercase")]
pub enum ShapeDescriptor {
    /// An axis-aligned rectangle centred on `(x, y)`.
    Rect {
        /// Fractional x position of the centre.
        x: f64,
        /// Fractional y position of the centre.
        y: f64,
        /// Width as a fraction of the surface width.
        w: f64,
        /// Height as a fraction of the surface height.
        h: f64,
        /// CSS colour string.
        #[serde(rename = "Color")]
        color: String,
        /// Fill instead of stroke.
        #[serde(rename = "Filled", default, deserialize_with = "lenient_bool")]
        filled: bool,
    },

    /// A circle centred on `(x, y)`.
    Circle {
        /// Fractional x position of the centre.
        x: f64,
        /// Fractional y position of the centre.
        y: f64,
        /// Radius in pixels.
        r: f64,
        /// CSS colour string.
        #[serde(rename = "Color")]
        color: String,
        /// Fill in addition to the outline.
        #[serde(rename = "Filled", default, deserialize_with = "lenient_bool")]
        filled: bool,
    },
}

impl ShapeDescriptor {
    /// Create a rectangle descriptor.
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn rect(x: f64, y: f64, w: f64, h: f64, color: impl Into<String>, filled: bool) -> Self {
        Self::Rect {
            x,
            y,
            w,
            h,
            color: color.into(),
            filled,
        }
    }

    /// Create a circle descriptor.
    #[must_use]
    pub fn circle(x: f64, y: f64, r: f64, color: impl Into<String>, filled: bool) -> Self {
        Self::Circle {
            x,
            y,
            r,
            color: color.into(),
            filled,
        }
    }

    /// The wire tag of this shape.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Rect { .. } => "rect",
            Self::Circle { .. } => "circle",
        }
    }

    /// Fractional position of the shape's centre.
    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        match self {
            Self::Rect { x, y, .. } | Self::Circle { x, y, .. } => (*x, *y),
        }
    }

    /// The shape's colour string, as received.
    #[must_use]
    pub fn color(&self) -> &str {
        match self {
            Self::Rect { color, .. } | Self::Circle { color, .. } => color,
        }
    }

    /// Whether every numeric field is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Rect { x, y, w, h, .. } => [x, y, w, h].iter().all(|v| v.is_finite()),
            Self::Circle { x, y, r, .. } => [x, y, r].iter().all(|v| v.is_finite()),
        }
    }

    /// Whether the shape is filled.
    #[must_use]
    pub fn filled(&self) -> bool {
        match self {
            Self::Rect { filled, .. } | Self::Circle { filled, .. } => *filled,
        }
    }
}

/// Decode a frame of descriptors.
///
/// Entries with an unknown `Shape`, a missing size field or mistyped values
/// are dropped; the rest of the frame is kept in order.
///
/// # Errors
///
/// Returns an error if the frame is not valid JSON or is not an array.
pub fn decode_frame(json: &str) -> CoreResult<Vec<ShapeDescriptor>> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let total = entries.len();

    let shapes: Vec<ShapeDescriptor> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(idx, entry)| match serde_json::from_value(entry) {
            Ok(shape) => Some(shape),
            Err(e) => {
                tracing::debug!("Skipping descriptor {idx}: {e}");
                None
            }
        })
        .collect();

    tracing::trace!("Decoded {} of {total} descriptors", shapes.len());
    Ok(shapes)
}

/// Encode a frame of descriptors to its wire form.
///
/// # Errors
///
/// Returns [`CoreError::NonFinite`] if a shape has a NaN or infinite field,
/// which JSON cannot carry, or an error if serialization fails.
pub fn encode_frame(shapes: &[ShapeDescriptor]) -> CoreResult<String> {
    if let Some(idx) = shapes.iter().position(|s| !s.is_finite()) {
        return Err(CoreError::NonFinite(format!(
            "{} at index {idx}",
            shapes[idx].tag()
        )));
    }
    Ok(serde_json::to_string(shapes)?)
}

/// Accept `true`/`false` as JSON booleans or strings; numbers are true
/// when non-zero.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct FilledVisitor;

    impl Visitor<'_> for FilledVisitor {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a boolean, a number or the string \"true\"/\"false\"")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
            Ok(v)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
            if v.eq_ignore_ascii_case("true") {
                Ok(true)
            } else if v.eq_ignore_ascii_case("false") {
                Ok(false)
            } else {
                Err(E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
            Ok(v != 0)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
            Ok(v != 0)
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<bool, E> {
            Ok(v != 0.0 && !v.is_nan())
        }

        fn visit_unit<E: de::Error>(self) -> Result<bool, E> {
            Ok(false)
        }

        fn visit_none<E: de::Error>(self) -> Result<bool, E> {
            Ok(false)
        }
    }

    deserializer.deserialize_any(FilledVisitor)
}
