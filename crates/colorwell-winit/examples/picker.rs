//! Drives a color picker from real winit input.
//!
//! Nothing is drawn: the window only provides pointer input. Drag inside the
//! top-left 256x256 square (saturation/value) or the two bars below it (hue,
//! then alpha) and watch the colors in the log.
//!
//! Run with `RUST_LOG=info cargo run --example picker`.

use colorwell::{Color, ListenerRegistry, Point, SharedRegistry};
use colorwell_interactive::{ColorField, ColorPicker, PickerConfig};
use colorwell_winit::{is_pointer_event, PointerTranslator};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

const ORIGIN: Point = Point { x: 24.0, y: 24.0 };

struct App {
    window: Option<Window>,
    translator: PointerTranslator,
    picker: ColorPicker,
    // Keeps the listener registry alive for the picker's surfaces
    _registry: SharedRegistry,
}

impl App {
    fn new() -> Self {
        let registry = ListenerRegistry::shared();
        let initial = Color::from_hex("#3b82f6").expect("valid hex literal");

        let mut picker = ColorPicker::new(&registry, PickerConfig::default(), initial)
            .expect("default config is valid")
            .on_change(|color| log::debug!("preview {color}"))
            .on_change_complete(|color| {
                log::info!(
                    "picked {} | {} | {}",
                    color,
                    ColorField::Rgb.format(&color),
                    ColorField::Hsv.format(&color)
                )
            });
        picker.set_origin(ORIGIN);
        picker.mount();

        Self {
            window: None,
            translator: PointerTranslator::new(),
            picker,
            _registry: registry,
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        // Number keys submit sample field input, the same path a text box uses
        let submission = match code {
            KeyCode::Digit1 => (ColorField::Hex, "#f38ba8"),
            KeyCode::Digit2 => (ColorField::Rgb, "166, 227, 161"),
            KeyCode::Digit3 => (ColorField::Hsv, "40, 30, 98, 0.5"),
            KeyCode::Digit4 => (ColorField::Rgb, "300, 0, 0"),
            _ => return,
        };

        let (field, text) = submission;
        if let Err(err) = self.picker.submit_field(field, text) {
            log::warn!("{} field rejected `{text}`: {err}", field.label());
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let layout = self.picker.layout();
        let window_attributes = Window::default_attributes()
            .with_title("colorwell picker")
            .with_inner_size(winit::dpi::LogicalSize::new(
                layout.width + ORIGIN.x * 2.0,
                layout.total_height() + ORIGIN.y * 2.0,
            ));

        let window = event_loop.create_window(window_attributes).unwrap();
        self.translator.set_scale_factor(window.scale_factor());
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if is_pointer_event(&event) {
            match self.translator.translate(&event) {
                Ok(Some(pointer)) => {
                    let response = self.picker.handle_event(&pointer);
                    if response.handled {
                        log::trace!("{:?} handled by picker", pointer.phase);
                    }
                }
                Ok(None) => {}
                Err(err) => log::error!("{err}"),
            }
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.translator.set_scale_factor(scale_factor);
            }

            WindowEvent::KeyboardInput {
                event: ref key_event,
                ..
            } if key_event.state == ElementState::Pressed => {
                if let PhysicalKey::Code(code) = key_event.physical_key {
                    if code == KeyCode::Escape {
                        event_loop.exit();
                    } else {
                        self.handle_key(code);
                    }
                }
            }

            _ => {}
        }
    }
}

fn main() {
    env_logger::init();

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new();

    println!("Color picker controls:");
    println!("  Drag square - Saturation / value");
    println!("  Drag first bar - Hue");
    println!("  Drag second bar - Alpha");
    println!("  1-4 - Submit sample field input (4 is out of range)");
    println!("  ESC - Exit");

    event_loop.run_app(&mut app).expect("Failed to run event loop");
}
