//! Character footprint measurement with fallback defaults.
//!
//! Layout reads go through [`LayoutSource`] so the fallback logic stays pure.
//! The browser implementation lives in [`web`] (feature `web`); tests use a
//! scripted fake.

use crate::ConfigError;

/// Default footprint width used when a glyph has no measurable width.
pub const FALLBACK_CHAR_WIDTH: f64 = 7.0;

/// Default footprint height used when a glyph has no measurable height.
pub const FALLBACK_CHAR_HEIGHT: f64 = 14.0;

/// A bounding box as read from layout, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Read access to rendered layout geometry.
///
/// Implement this for your platform (browser DOM, headless layout engine,
/// test double). Both methods are plain reads with no side effects.
pub trait LayoutSource {
    /// Handle to a rendered element.
    type Element: ?Sized;

    /// Bounding box of `element`. Detached or unlaid-out elements report zero.
    fn bounds_of(&self, element: &Self::Element) -> Bounds;

    /// Current inner size of the viewport.
    fn viewport(&self) -> Bounds;
}

/// Rendered size of one representative glyph.
///
/// Both values are strictly positive when produced by [`CharMetrics`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharFootprint {
    pub width: f64,
    pub height: f64,
}

/// Glyph measurement with per-axis fallbacks.
///
/// Fallbacks are always finite and positive; build custom ones with
/// [`CharMetrics::with_fallbacks`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CharMetrics {
    /// Width substituted when the measured width is unavailable
    fallback_width: f64,
    /// Height substituted when the measured height is unavailable
    fallback_height: f64,
}

impl Default for CharMetrics {
    fn default() -> Self {
        Self {
            fallback_width: FALLBACK_CHAR_WIDTH,
            fallback_height: FALLBACK_CHAR_HEIGHT,
        }
    }
}

impl CharMetrics {
    /// Create metrics with the default 7x14 fallbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create metrics with custom fallbacks.
    ///
    /// Fails with [`ConfigError::InvalidFallback`] unless both values are
    /// finite and greater than zero.
    pub fn with_fallbacks(width: f64, height: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            fallback_width: positive("width", width)?,
            fallback_height: positive("height", height)?,
        })
    }

    #[inline]
    pub fn fallback_width(&self) -> f64 {
        self.fallback_width
    }

    #[inline]
    pub fn fallback_height(&self) -> f64 {
        self.fallback_height
    }

    /// Measure the glyph element `ch` through `layout`.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use ascii_canvas_core::{Bounds, CharMetrics, LayoutSource};
    ///
    /// struct Fixed(Bounds);
    ///
    /// impl LayoutSource for Fixed {
    ///     type Element = ();
    ///     fn bounds_of(&self, _: &()) -> Bounds { self.0 }
    ///     fn viewport(&self) -> Bounds { Bounds::default() }
    /// }
    ///
    /// let fp = CharMetrics::new().measure(&Fixed(Bounds::new(8.4, 0.0)), &());
    /// assert_eq!((fp.width, fp.height), (8.4, 14.0));
    /// ```
    pub fn measure<L: LayoutSource + ?Sized>(&self, layout: &L, ch: &L::Element) -> CharFootprint {
        self.footprint(layout.bounds_of(ch))
    }

    /// Turn measured bounds into a footprint, substituting fallbacks per axis.
    ///
    /// An axis falls back when its measurement is zero, negative, NaN or
    /// infinite. Browsers never report negative or infinite sizes for a laid
    /// out glyph, so those are treated as missing rather than passed through.
    pub fn footprint(&self, measured: Bounds) -> CharFootprint {
        let width = available(measured.width).unwrap_or_else(|| {
            tracing::trace!(target: "metrics", measured = measured.width, "char_width_fallback");
            self.fallback_width
        });
        let height = available(measured.height).unwrap_or_else(|| {
            tracing::trace!(target: "metrics", measured = measured.height, "char_height_fallback");
            self.fallback_height
        });
        CharFootprint { width, height }
    }
}

/// Measure a glyph with the default fallbacks.
pub fn get_char_dimensions<L: LayoutSource + ?Sized>(layout: &L, ch: &L::Element) -> CharFootprint {
    CharMetrics::default().measure(layout, ch)
}

/// A measured length is usable only when it is finite and positive.
#[inline]
pub(crate) fn available(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}

fn positive(axis: &'static str, value: f64) -> Result<f64, ConfigError> {
    available(value).ok_or(ConfigError::InvalidFallback { axis, value })
}

/// Browser DOM implementation of [`LayoutSource`].
#[cfg(feature = "web")]
pub mod web {
    use super::*;

    /// Reads geometry from the live document.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct DomLayout;

    impl LayoutSource for DomLayout {
        type Element = web_sys::Element;

        fn bounds_of(&self, element: &web_sys::Element) -> Bounds {
            let rect = element.get_bounding_client_rect();
            Bounds::new(rect.width(), rect.height())
        }

        fn viewport(&self) -> Bounds {
            let Some(window) = web_sys::window() else {
                tracing::debug!(target: "metrics", "no_window_for_viewport");
                return Bounds::default();
            };
            let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            Bounds::new(width, height)
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Layout double returning scripted bounds per element name.
    #[derive(Default)]
    pub(crate) struct ScriptedLayout {
        pub bounds: HashMap<&'static str, Bounds>,
        pub viewport: Bounds,
    }

    impl ScriptedLayout {
        pub fn with(mut self, name: &'static str, width: f64, height: f64) -> Self {
            self.bounds.insert(name, Bounds::new(width, height));
            self
        }

        pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
            self.viewport = Bounds::new(width, height);
            self
        }
    }

    impl LayoutSource for ScriptedLayout {
        type Element = str;

        fn bounds_of(&self, element: &str) -> Bounds {
            self.bounds.get(element).copied().unwrap_or_default()
        }

        fn viewport(&self) -> Bounds {
            self.viewport
        }
    }

    #[test]
    fn test_zero_element_uses_both_fallbacks() {
        let layout = ScriptedLayout::default().with("char", 0.0, 0.0);
        let fp = get_char_dimensions(&layout, "char");
        assert_eq!(fp, CharFootprint { width: 7.0, height: 14.0 });
    }

    #[test]
    fn test_detached_element_uses_fallbacks() {
        let layout = ScriptedLayout::default();
        assert_eq!(
            get_char_dimensions(&layout, "missing"),
            CharFootprint { width: 7.0, height: 14.0 }
        );
    }

    #[test]
    fn test_fallbacks_are_independent() {
        let layout = ScriptedLayout::default()
            .with("wide", 9.5, 0.0)
            .with("tall", 0.0, 18.0);
        assert_eq!(
            get_char_dimensions(&layout, "wide"),
            CharFootprint { width: 9.5, height: 14.0 }
        );
        assert_eq!(
            get_char_dimensions(&layout, "tall"),
            CharFootprint { width: 7.0, height: 18.0 }
        );
    }

    #[test]
    fn test_measured_values_pass_through() {
        let layout = ScriptedLayout::default().with("char", 8.4, 16.8);
        assert_eq!(
            get_char_dimensions(&layout, "char"),
            CharFootprint { width: 8.4, height: 16.8 }
        );
    }

    #[test]
    fn test_non_finite_and_negative_fall_back() {
        let metrics = CharMetrics::default();
        assert_eq!(
            metrics.footprint(Bounds::new(f64::NAN, f64::INFINITY)),
            CharFootprint { width: 7.0, height: 14.0 }
        );
        assert_eq!(
            metrics.footprint(Bounds::new(-3.0, -1.0)),
            CharFootprint { width: 7.0, height: 14.0 }
        );
    }

    #[test]
    fn test_custom_fallbacks() {
        let metrics = CharMetrics::with_fallbacks(10.0, 20.0).unwrap();
        let fp = metrics.footprint(Bounds::default());
        assert_eq!(fp, CharFootprint { width: 10.0, height: 20.0 });
    }

    #[test]
    fn test_rejects_invalid_fallbacks() {
        assert!(matches!(
            CharMetrics::with_fallbacks(0.0, 14.0),
            Err(ConfigError::InvalidFallback { axis: "width", .. })
        ));
        assert!(matches!(
            CharMetrics::with_fallbacks(7.0, -14.0),
            Err(ConfigError::InvalidFallback { axis: "height", .. })
        ));
        assert!(CharMetrics::with_fallbacks(f64::NAN, 14.0).is_err());
        assert!(CharMetrics::with_fallbacks(7.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_footprint_always_positive() {
        let metrics = CharMetrics::with_fallbacks(0.5, 0.5).unwrap();
        for measured in [0.0, -7.0, f64::NAN, f64::NEG_INFINITY] {
            let fp = metrics.footprint(Bounds::new(measured, measured));
            assert!(fp.width > 0.0 && fp.height > 0.0);
        }
    }
}
