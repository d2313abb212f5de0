//! Image gallery of a detail view.
//!
//! Main image, thumbnail strip and lightbox overlay all read the same
//! [`GalleryState`], so one update changes them together.

/// Minimum horizontal travel, in CSS pixels, for a drag to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GalleryMode {
    #[default]
    Inline,
    Overlay,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryState {
    images: Vec<String>,
    index: usize,
    mode: GalleryMode,
}

impl GalleryState {
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images,
            index: 0,
            mode: GalleryMode::Inline,
        }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn mode(&self) -> GalleryMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode == GalleryMode::Overlay
    }

    pub fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    pub fn is_active(&self, index: usize) -> bool {
        !self.images.is_empty() && self.index == index
    }

    /// Prev/next controls only make sense with more than one image.
    pub fn has_navigation(&self) -> bool {
        self.images.len() > 1
    }

    /// Opens the lightbox. No-op without images.
    pub fn open(&mut self) {
        if !self.images.is_empty() {
            self.mode = GalleryMode::Overlay;
        }
    }

    pub fn close(&mut self) {
        self.mode = GalleryMode::Inline;
    }

    /// Moves by `delta`, wrapping in both directions. Mode is unchanged.
    pub fn navigate(&mut self, delta: isize) {
        let len = self.images.len();
        if len == 0 {
            return;
        }
        let len = len as isize;
        self.index = (self.index as isize + delta).rem_euclid(len) as usize;
    }

    pub fn next(&mut self) {
        self.navigate(1);
    }

    pub fn prev(&mut self) {
        self.navigate(-1);
    }

    /// Jumps to `index`; out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.images.len() {
            self.index = index;
        }
    }
}

/// Turns a pointer down/up pair into a navigation step.
///
/// A drag that navigated also eats the `click` the browser fires after the
/// pointer is released, so a swipe never opens or closes the lightbox.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start: Option<(f64, f64)>,
    swallow_click: bool,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
        self.swallow_click = false;
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// `Some(1)` for a swipe to the left (next image), `Some(-1)` for a swipe
    /// to the right, `None` when the gesture was too short or mostly vertical.
    pub fn finish(&mut self, x: f64, y: f64) -> Option<isize> {
        let (start_x, start_y) = self.start.take()?;
        let dx = x - start_x;
        let dy = y - start_y;
        if dx.abs() < SWIPE_THRESHOLD_PX || dx.abs() <= dy.abs() {
            return None;
        }
        self.swallow_click = true;
        Some(if dx < 0.0 { 1 } else { -1 })
    }

    /// Whether a click should be acted on. Consumes the suppression left by a swipe.
    pub fn take_click(&mut self) -> bool {
        !std::mem::take(&mut self.swallow_click)
    }
}
