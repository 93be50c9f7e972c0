//! Producing descriptor frames from agents in a continuous space.
//!
//! This is the simulation side of the feed: every tick each agent is
//! portrayed as a shape and its position is normalized against the bounds
//! of the space it lives in.

use crate::{CoreError, CoreResult, ShapeDescriptor};

/// Bounds of a continuous 2D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuousSpace {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl ContinuousSpace {
    /// Create a space spanning `[x_min, x_max] × [y_min, y_max]`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidSpace`] if either extent is empty,
    /// inverted or not finite.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> CoreResult<Self> {
        let extents = [x_min, x_max, y_min, y_max];
        if extents.iter().any(|v| !v.is_finite()) || x_max <= x_min || y_max <= y_min {
            return Err(CoreError::InvalidSpace(format!(
                "x [{x_min}, {x_max}], y [{y_min}, {y_max}]"
            )));
        }
        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// A space with its origin at `(0, 0)`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidSpace`] if `width` or `height` is not
    /// positive.
    pub fn with_size(width: f64, height: f64) -> CoreResult<Self> {
        Self::new(0.0, width, 0.0, height)
    }

    /// Width of the space.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the space.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Map a position in the space to fractional coordinates.
    #[must_use]
    pub fn normalize(&self, x: f64, y: f64) -> (f64, f64) {
        (
            (x - self.x_min) / self.width(),
            (y - self.y_min) / self.height(),
        )
    }
}

/// How an agent looks, independent of where it is.
#[derive(Debug, Clone, PartialEq)]
pub enum Portrayal {
    /// Rectangle with fractional extents.
    Rect {
        /// Width as a fraction of the surface width.
        w: f64,
        /// Height as a fraction of the surface height.
        h: f64,
        /// CSS colour string.
        color: String,
        /// Fill instead of stroke.
        filled: bool,
    },
    /// Circle with a pixel radius.
    Circle {
        /// Radius in pixels.
        r: f64,
        /// CSS colour string.
        color: String,
        /// Fill in addition to the outline.
        filled: bool,
    },
}

impl Portrayal {
    /// Place the portrayal at a fractional position.
    #[must_use]
    pub fn at(self, x: f64, y: f64) -> ShapeDescriptor {
        match self {
            Self::Rect {
                w,
                h,
                color,
                filled,
            } => ShapeDescriptor::Rect {
                x,
                y,
                w,
                h,
                color,
                filled,
            },
            Self::Circle { r, color, filled } => ShapeDescriptor::Circle {
                x,
                y,
                r,
                color,
                filled,
            },
        }
    }
}

/// Anything with a position in a continuous space.
pub trait Positioned {
    /// Current position in space coordinates.
    fn position(&self) -> (f64, f64);
}

impl Positioned for (f64, f64) {
    fn position(&self) -> (f64, f64) {
        *self
    }
}

/// Turns a population of agents into a descriptor frame.
pub struct SimpleCanvas<F> {
    portrayal: F,
    space: ContinuousSpace,
}

impl<F> SimpleCanvas<F> {
    /// Create a canvas portraying agents of `space` with `portrayal`.
    #[must_use]
    pub fn new(portrayal: F, space: ContinuousSpace) -> Self {
        Self { portrayal, space }
    }

    /// The space positions are normalized against.
    #[must_use]
    pub fn space(&self) -> &ContinuousSpace {
        &self.space
    }

    /// Portray every agent, in iteration order.
    pub fn portray<'a, A, I>(&self, agents: I) -> Vec<ShapeDescriptor>
    where
        A: Positioned + 'a,
        I: IntoIterator<Item = &'a A>,
        F: Fn(&A) -> Portrayal,
    {
        let frame: Vec<_> = agents
            .into_iter()
            .map(|agent| {
                let (px, py) = agent.position();
                let (x, y) = self.space.normalize(px, py);
                (self.portrayal)(agent).at(x, y)
            })
            .collect();
        tracing::trace!("Portrayed {} agents", frame.len());
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Guest {
        pos: (f64, f64),
        angry: bool,
    }

    impl Positioned for Guest {
        fn position(&self) -> (f64, f64) {
            self.pos
        }
    }

    fn guest_portrayal(guest: &Guest) -> Portrayal {
        Portrayal::Circle {
            r: 2.0,
            color: if guest.angry { "Red" } else { "Blue" }.to_string(),
            filled: true,
        }
    }

    #[test]
    fn test_space_validation() {
        assert!(ContinuousSpace::new(0.0, 100.0, 0.0, 100.0).is_ok());
        assert!(ContinuousSpace::new(0.0, 0.0, 0.0, 100.0).is_err());
        assert!(ContinuousSpace::new(10.0, 0.0, 0.0, 100.0).is_err());
        assert!(ContinuousSpace::new(0.0, f64::INFINITY, 0.0, 1.0).is_err());
        assert!(ContinuousSpace::with_size(100.0, -1.0).is_err());
    }

    #[test]
    fn test_normalize_with_offset_origin() {
        let space = ContinuousSpace::new(-50.0, 50.0, 10.0, 30.0).expect("space");
        assert_eq!(space.normalize(-50.0, 10.0), (0.0, 0.0));
        assert_eq!(space.normalize(50.0, 30.0), (1.0, 1.0));
        assert_eq!(space.normalize(0.0, 20.0), (0.5, 0.5));
    }

    #[test]
    fn test_portray_keeps_agent_order() {
        let space = ContinuousSpace::with_size(100.0, 100.0).expect("space");
        let canvas = SimpleCanvas::new(guest_portrayal, space);
        let guests = vec![
            Guest {
                pos: (25.0, 75.0),
                angry: true,
            },
            Guest {
                pos: (50.0, 50.0),
                angry: false,
            },
        ];

        let frame = canvas.portray(&guests);
        assert_eq!(
            frame,
            vec![
                ShapeDescriptor::circle(0.25, 0.75, 2.0, "Red", true),
                ShapeDescriptor::circle(0.5, 0.5, 2.0, "Blue", true),
            ]
        );
    }

    #[test]
    fn test_portray_tuples() {
        let space = ContinuousSpace::with_size(10.0, 20.0).expect("space");
        let canvas = SimpleCanvas::new(
            |_: &(f64, f64)| Portrayal::Rect {
                w: 0.1,
                h: 0.05,
                color: "black".to_string(),
                filled: false,
            },
            space,
        );
        let frame = canvas.portray(&[(5.0, 5.0)]);
        assert_eq!(
            frame,
            vec![ShapeDescriptor::rect(0.5, 0.25, 0.1, 0.05, "black", false)]
        );
    }
}
