//! Viewport bands derived from the logical window width.

use dioxus::prelude::*;

/// Lower bound (logical px) of the tablet band.
pub const TABLET_MIN_WIDTH: f64 = 640.0;
/// Lower bound (logical px) of the desktop band.
pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportBand {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl ViewportBand {
    pub fn from_width(width: f64) -> Self {
        if width.is_nan() || width >= DESKTOP_MIN_WIDTH {
            Self::Desktop
        } else if width >= TABLET_MIN_WIDTH {
            Self::Tablet
        } else {
            Self::Mobile
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }
}

/// Band from the nearest `Signal<ViewportBand>` context, or Desktop when no
/// platform shell provided one.
pub fn use_viewport_band() -> ViewportBand {
    try_use_context::<Signal<ViewportBand>>()
        .map(|band| band())
        .unwrap_or_default()
}

/// Browser band signal kept current by a `resize` listener on `window`.
#[cfg(target_arch = "wasm32")]
pub fn use_browser_viewport() -> Signal<ViewportBand> {
    use wasm_bindgen::{closure::Closure, JsCast};

    fn current_band() -> ViewportBand {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|w| w.as_f64())
            .map(ViewportBand::from_width)
            .unwrap_or_default()
    }

    let band = use_signal(current_band);

    use_hook(move || {
        let mut band = band;
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            let next = current_band();
            if *band.peek() != next {
                band.set(next);
            }
        });
        if let Some(window) = web_sys::window() {
            if let Err(err) = window
                .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            {
                dioxus::logger::tracing::warn!("[viewport] resize listener not installed: {err:?}");
            }
        }
        // The listener lives as long as the page.
        on_resize.forget();
    });

    band
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_follow_breakpoints() {
        assert_eq!(ViewportBand::from_width(0.0), ViewportBand::Mobile);
        assert_eq!(ViewportBand::from_width(639.9), ViewportBand::Mobile);
        assert_eq!(ViewportBand::from_width(640.0), ViewportBand::Tablet);
        assert_eq!(ViewportBand::from_width(1023.0), ViewportBand::Tablet);
        assert_eq!(ViewportBand::from_width(1024.0), ViewportBand::Desktop);
        assert_eq!(ViewportBand::from_width(2560.0), ViewportBand::Desktop);
    }

    #[test]
    fn unknown_width_defaults_to_desktop() {
        assert_eq!(ViewportBand::from_width(f64::NAN), ViewportBand::Desktop);
        assert_eq!(ViewportBand::default(), ViewportBand::Desktop);
    }
}
