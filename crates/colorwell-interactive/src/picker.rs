//! Color picker component
//!
//! A saturation/value area with hue and alpha bars underneath, each backed by
//! an [`InteractiveSurface`]. Dragging on a surface maps the surface-relative
//! position onto the matching color channels.
//!
//! # Example
//!
//! ```ignore
//! let registry = ListenerRegistry::shared();
//! let mut picker = ColorPicker::new(&registry, PickerConfig::new(256.0), Color::from_hex("#ff0000")?)?
//!     .on_change(|color| println!("{}", color))
//!     .on_change_complete(|color| println!("committed {}", color));
//! picker.mount();
//! picker.handle_event(&event);
//! ```

use crate::{ColorField, PickerConfig};
use colorwell::{
    BoundingRect, Color, EventResponse, Hsv, InteractiveSurface, PointerEvent, Point, Result,
    SharedRegistry, SurfaceAttributes, SurfaceState,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Height of the hue and alpha bars
pub const BAR_HEIGHT: f32 = 12.0;
/// Vertical space between the saturation area and each bar
pub const BAR_GAP: f32 = 10.0;

/// Geometry of a picker placed at `origin`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerLayout {
    pub origin: Point,
    pub width: f32,
    pub height: f32,
}

impl PickerLayout {
    pub fn new(origin: Point, config: &PickerConfig) -> Self {
        Self {
            origin,
            width: config.width,
            height: config.height(),
        }
    }

    pub fn saturation(&self) -> BoundingRect {
        BoundingRect::from_origin_size(self.origin, self.width, self.height)
    }

    pub fn hue(&self) -> BoundingRect {
        let top = self.origin.y + self.height + BAR_GAP;
        BoundingRect::new(self.width, BAR_HEIGHT, self.origin.x, top)
    }

    pub fn alpha(&self) -> BoundingRect {
        let top = self.hue().bottom() + BAR_GAP;
        BoundingRect::new(self.width, BAR_HEIGHT, self.origin.x, top)
    }

    /// Total height covered by the picker
    pub fn total_height(&self) -> f32 {
        self.alpha().bottom() - self.origin.y
    }
}

/// Ratio of `offset` along `extent`, in `[0, 1]`
fn ratio(offset: f32, extent: f32) -> f32 {
    if extent > 0.0 {
        (offset / extent).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Map a position in the saturation area onto saturation (x) and value (y)
pub fn saturation_color(current: &Color, point: Point, width: f32, height: f32) -> Color {
    let s = ratio(point.x, width) * 100.0;
    let v = 100.0 - ratio(point.y, height) * 100.0;
    current.with_hsv(current.hsv.h, s, v)
}

/// Map a position on the hue bar onto hue
pub fn hue_color(current: &Color, point: Point, width: f32) -> Color {
    let Hsv { s, v, .. } = current.hsv;
    current.with_hsv(ratio(point.x, width) * 360.0, s, v)
}

/// Map a position on the alpha bar onto alpha
pub fn alpha_color(current: &Color, point: Point, width: f32) -> Color {
    current.with_alpha(ratio(point.x, width))
}

#[derive(Default)]
struct PickerCallbacks {
    on_change: Option<Box<dyn FnMut(Color)>>,
    on_change_complete: Option<Box<dyn FnMut(Color)>>,
}

/// Shared between the picker and the closures its surfaces call
#[derive(Clone)]
struct PickerShared {
    color: Rc<RefCell<Color>>,
    callbacks: Rc<RefCell<PickerCallbacks>>,
}

impl PickerShared {
    /// Store `next` and notify the consumer
    fn update(&self, next: Color, complete: bool) {
        *self.color.borrow_mut() = next.clone();

        let mut callbacks = self.callbacks.borrow_mut();
        let callback = if complete {
            callbacks.on_change_complete.as_mut()
        } else {
            callbacks.on_change.as_mut()
        };
        if let Some(callback) = callback {
            callback(next);
        }
    }

    /// Wire a surface so its previews and commits update the color through `map`
    fn bind(
        &self,
        surface: InteractiveSurface,
        map: impl Fn(&Color, Point) -> Color + 'static,
    ) -> InteractiveSurface {
        let map = Rc::new(map);
        let (preview, commit) = (self.clone(), self.clone());
        let (map_preview, map_commit) = (map.clone(), map);

        surface
            .on_preview(move |point| {
                let next = map_preview(&preview.color.borrow(), point);
                preview.update(next, false);
            })
            .on_commit(move |point| {
                let next = map_commit(&commit.color.borrow(), point);
                commit.update(next, true);
            })
    }
}

/// A complete color picker: saturation area, hue bar and alpha bar
pub struct ColorPicker {
    config: PickerConfig,
    origin: Rc<Cell<Point>>,
    shared: PickerShared,
    saturation: InteractiveSurface,
    hue: InteractiveSurface,
    alpha: InteractiveSurface,
}

impl std::fmt::Debug for ColorPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorPicker")
            .field("config", &self.config)
            .field("origin", &self.origin.get())
            .field("color", &*self.shared.color.borrow())
            .finish_non_exhaustive()
    }
}

impl ColorPicker {
    /// Create an unmounted picker at the origin
    ///
    /// # Errors
    /// Returns [`colorwell::ColorwellError::InvalidConfig`] if the configured
    /// size is not positive.
    pub fn new(registry: &SharedRegistry, config: PickerConfig, color: Color) -> Result<Self> {
        config.validate()?;

        let origin = Rc::new(Cell::new(Point::zero()));
        let shared = PickerShared {
            color: Rc::new(RefCell::new(color)),
            callbacks: Rc::new(RefCell::new(PickerCallbacks::default())),
        };
        let (width, height) = (config.width, config.height());

        let saturation = {
            let (origin, config) = (origin.clone(), config.clone());
            InteractiveSurface::new(registry, move || {
                Some(PickerLayout::new(origin.get(), &config).saturation())
            })
        };
        let hue = {
            let (origin, config) = (origin.clone(), config.clone());
            InteractiveSurface::new(registry, move || {
                Some(PickerLayout::new(origin.get(), &config).hue())
            })
        };
        let alpha = {
            let (origin, config) = (origin.clone(), config.clone());
            InteractiveSurface::new(registry, move || {
                Some(PickerLayout::new(origin.get(), &config).alpha())
            })
        };

        let saturation = shared
            .bind(saturation, move |color, point| {
                saturation_color(color, point, width, height)
            })
            .with_attributes(surface_attributes("saturation", config.dark));
        let hue = shared
            .bind(hue, move |color, point| hue_color(color, point, width))
            .with_attributes(surface_attributes("hue", config.dark));
        let alpha = shared
            .bind(alpha, move |color, point| alpha_color(color, point, width))
            .with_attributes(surface_attributes("alpha", config.dark));

        Ok(Self {
            config,
            origin,
            shared,
            saturation,
            hue,
            alpha,
        })
    }

    /// Set a callback fired with the new color on every change
    pub fn on_change(self, f: impl FnMut(Color) + 'static) -> Self {
        self.shared.callbacks.borrow_mut().on_change = Some(Box::new(f));
        self
    }

    /// Set a callback fired with the final color when a drag is released or
    /// a field is submitted
    pub fn on_change_complete(self, f: impl FnMut(Color) + 'static) -> Self {
        self.shared.callbacks.borrow_mut().on_change_complete = Some(Box::new(f));
        self
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Current color
    pub fn color(&self) -> Color {
        self.shared.color.borrow().clone()
    }

    /// Replace the color without notifying callbacks
    pub fn set_color(&mut self, color: Color) {
        *self.shared.color.borrow_mut() = color;
    }

    /// Move the picker. Takes effect on the next pointer event.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin.set(origin);
    }

    pub fn layout(&self) -> PickerLayout {
        PickerLayout::new(self.origin.get(), &self.config)
    }

    pub fn surfaces(&self) -> [&InteractiveSurface; 3] {
        [&self.saturation, &self.hue, &self.alpha]
    }

    pub fn is_dragging(&self) -> bool {
        self.surfaces()
            .iter()
            .any(|surface| surface.state() == SurfaceState::Dragging)
    }

    pub fn mount(&mut self) {
        self.saturation.mount();
        self.hue.mount();
        self.alpha.mount();
    }

    pub fn unmount(&mut self) {
        self.saturation.unmount();
        self.hue.unmount();
        self.alpha.unmount();
    }

    /// Offer a pointer event to every surface of the picker
    pub fn handle_event(&mut self, event: &PointerEvent) -> EventResponse {
        self.saturation
            .handle_event(event)
            .merge(self.hue.handle_event(event))
            .merge(self.alpha.handle_event(event))
    }

    /// Apply text typed into one of the color fields
    ///
    /// On success the color is replaced and both callbacks fire, since a
    /// submitted field is a finished edit.
    ///
    /// # Errors
    /// Returns [`colorwell::ColorwellError::InvalidField`] if the text does not
    /// parse; the color is left unchanged.
    pub fn submit_field(&mut self, field: ColorField, text: &str) -> Result<Color> {
        let color = field
            .parse(text)
            .inspect_err(|err| log::debug!("rejected {} field input: {err}", field.label()))?;
        self.shared.update(color.clone(), false);
        self.shared.update(color.clone(), true);
        Ok(color)
    }
}

fn surface_attributes(part: &str, dark: bool) -> SurfaceAttributes {
    let mut class_name = format!("colorwell-{part}");
    if dark {
        class_name.push_str(" colorwell--dark");
    }
    SurfaceAttributes::default().with_class_name(class_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorwell::{ColorwellError, ListenerRegistry, MouseButton};

    type Log = Rc<RefCell<Vec<Color>>>;

    fn picker(hex: &str) -> (ColorPicker, Log, Log, SharedRegistry) {
        let registry = ListenerRegistry::shared();
        let changes: Log = Rc::new(RefCell::new(Vec::new()));
        let completes: Log = Rc::new(RefCell::new(Vec::new()));
        let (c, d) = (changes.clone(), completes.clone());

        let mut picker = ColorPicker::new(
            &registry,
            PickerConfig::new(200.0).with_height(100.0),
            Color::from_hex(hex).unwrap(),
        )
        .unwrap()
        .on_change(move |color| c.borrow_mut().push(color))
        .on_change_complete(move |color| d.borrow_mut().push(color));
        picker.mount();

        (picker, changes, completes, registry)
    }

    #[test]
    fn test_layout() {
        let layout = PickerLayout::new(Point::new(10.0, 20.0), &PickerConfig::new(200.0).with_height(100.0));
        assert_eq!(layout.saturation(), BoundingRect::new(200.0, 100.0, 10.0, 20.0));
        assert_eq!(layout.hue(), BoundingRect::new(200.0, BAR_HEIGHT, 10.0, 130.0));
        assert_eq!(layout.alpha(), BoundingRect::new(200.0, BAR_HEIGHT, 10.0, 152.0));
        assert_eq!(layout.total_height(), 144.0);
    }

    #[test]
    fn test_saturation_mapping_corners() {
        let red = Color::from_hex("#ff0000").unwrap();

        let top_right = saturation_color(&red, Point::new(200.0, 0.0), 200.0, 100.0);
        assert_eq!(top_right.hex, "#ff0000");

        let top_left = saturation_color(&red, Point::new(0.0, 0.0), 200.0, 100.0);
        assert_eq!(top_left.hex, "#ffffff");

        let bottom = saturation_color(&red, Point::new(100.0, 100.0), 200.0, 100.0);
        assert_eq!(bottom.hex, "#000000");
        assert_eq!(bottom.hsv.s, 50.0);
    }

    #[test]
    fn test_hue_and_alpha_mapping() {
        let red = Color::from_hex("#ff0000").unwrap();
        assert_eq!(hue_color(&red, Point::new(100.0, 6.0), 300.0).hex, "#00ff00");
        assert_eq!(alpha_color(&red, Point::new(100.0, 6.0), 200.0).alpha(), 0.5);
        assert_eq!(hue_color(&red, Point::new(5.0, 0.0), 0.0).hsv.h, 0.0);
    }

    #[test]
    fn test_drag_on_saturation() {
        let (mut picker, changes, completes, registry) = picker("#ff0000");

        picker.handle_event(&PointerEvent::mouse_down(200.0, 0.0, MouseButton::Left));
        assert!(picker.is_dragging());
        picker.handle_event(&PointerEvent::mouse_move(0.0, 0.0));
        let response = picker.handle_event(&PointerEvent::mouse_up(0.0, 500.0, MouseButton::Left));

        assert!(response.handled);
        let hexes: Vec<String> = changes.borrow().iter().map(|c| c.hex.clone()).collect();
        assert_eq!(hexes, vec!["#ff0000", "#ffffff", "#000000"]);
        assert_eq!(completes.borrow().len(), 1);
        assert_eq!(completes.borrow()[0].hex, "#000000");
        assert_eq!(picker.color().hex, "#000000");
        assert!(!picker.is_dragging());
        assert_eq!(registry.borrow().len(), 6);
    }

    #[test]
    fn test_drag_on_hue_keeps_saturation() {
        let (mut picker, changes, _completes, _registry) = picker("#ff0000");

        // Hue bar sits below the 100px saturation area
        picker.handle_event(&PointerEvent::touch_start(100.0, 115.0));
        picker.handle_event(&PointerEvent::touch_end(100.0, 115.0));

        let last = changes.borrow().last().cloned().unwrap();
        assert_eq!(last.hsv.h, 180.0);
        assert_eq!(last.hex, "#00ffff");
    }

    #[test]
    fn test_press_in_gap_hits_nothing() {
        let (mut picker, changes, _completes, _registry) = picker("#ff0000");

        let response = picker.handle_event(&PointerEvent::mouse_down(50.0, 105.0, MouseButton::Left));
        assert_eq!(response, EventResponse::IGNORED);
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn test_origin_moves_regions() {
        let (mut picker, changes, _completes, _registry) = picker("#ff0000");
        picker.set_origin(Point::new(100.0, 100.0));

        picker.handle_event(&PointerEvent::mouse_down(50.0, 50.0, MouseButton::Left));
        assert!(changes.borrow().is_empty());

        picker.handle_event(&PointerEvent::mouse_down(300.0, 100.0, MouseButton::Left));
        assert_eq!(changes.borrow().last().map(|c| c.hex.as_str()), Some("#ff0000"));
    }

    #[test]
    fn test_submit_field() {
        let (mut picker, changes, completes, _registry) = picker("#ff0000");

        let color = picker.submit_field(ColorField::Rgb, "0, 0, 255").unwrap();
        assert_eq!(color.hex, "#0000ff");
        assert_eq!(changes.borrow().len(), 1);
        assert_eq!(completes.borrow().len(), 1);

        let err = picker.submit_field(ColorField::Hex, "nope").unwrap_err();
        assert!(matches!(err, ColorwellError::InvalidField(_)));
        assert_eq!(picker.color().hex, "#0000ff");
    }

    #[test]
    fn test_invalid_config() {
        let registry = ListenerRegistry::shared();
        let result = ColorPicker::new(&registry, PickerConfig::new(-5.0), Color::default());
        assert!(matches!(result, Err(ColorwellError::InvalidConfig(_))));
    }

    #[test]
    fn test_dark_class_names() {
        let registry = ListenerRegistry::shared();
        let picker = ColorPicker::new(
            &registry,
            PickerConfig::default().with_dark(true),
            Color::default(),
        )
        .unwrap();

        let classes = picker
            .surfaces()
            .map(|s| s.attributes().class_name.clone().unwrap_or_default());
        assert_eq!(
            classes,
            [
                "colorwell-saturation colorwell--dark",
                "colorwell-hue colorwell--dark",
                "colorwell-alpha colorwell--dark",
            ]
        );
    }

    #[test]
    fn test_unmount_releases_everything() {
        let (mut picker, _changes, completes, registry) = picker("#ff0000");
        picker.handle_event(&PointerEvent::mouse_down(10.0, 10.0, MouseButton::Left));
        assert_eq!(registry.borrow().len(), 10);

        picker.unmount();
        assert!(registry.borrow().is_empty());
        assert!(completes.borrow().is_empty());
    }
}
