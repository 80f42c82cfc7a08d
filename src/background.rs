// Full-viewport particle background. Creates its own canvas behind the page
// content, keeps it sized to the window and drives the field every frame.

use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::renderer::CanvasSurface;
use crate::scheduler::AnimationLoop;
use crate::Timer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

struct Scene {
    canvas: HtmlCanvasElement,
    surface: CanvasSurface,
    field: ParticleField,
}

impl Scene {
    fn fit_to(&mut self, window: &Window) -> Result<(), JsValue> {
        let (width, height) = viewport_size(window)?;
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.field.resize(width, height);
        Ok(())
    }

    fn frame(&mut self) -> Result<(), JsValue> {
        if self.field.config().profile {
            let _timer = Timer::new("ParticleField::frame");
            self.field.frame(&mut self.surface)
        } else {
            self.field.frame(&mut self.surface)
        }
    }
}

fn viewport_size(window: &Window) -> Result<(f64, f64), JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("window.innerWidth is not a number"))?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("window.innerHeight is not a number"))?;
    Ok((width.max(0.0).floor(), height.max(0.0).floor()))
}

fn create_overlay_canvas(window: &Window) -> Result<HtmlCanvasElement, JsValue> {
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document on window"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()?;

    let style = canvas.style();
    for (property, value) in &[
        ("position", "fixed"),
        ("top", "0"),
        ("left", "0"),
        ("width", "100%"),
        ("height", "100%"),
        ("z-index", "-2"),
        ("pointer-events", "none"),
    ] {
        style.set_property(property, value)?;
    }

    body.append_child(&canvas)?;
    Ok(canvas)
}

#[wasm_bindgen]
pub struct Background {
    window: Window,
    scene: Rc<RefCell<Scene>>,
    animation: Option<AnimationLoop>,
    on_resize: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl Background {
    pub fn attach() -> Result<Background, JsValue> {
        Background::attach_with(FieldConfig::default())
    }

    pub fn attach_with_config(json: &str) -> Result<Background, JsValue> {
        let config = FieldConfig::from_json(json).map_err(|e| JsValue::from_str(&e))?;
        Background::attach_with(config)
    }

    pub fn resize(&mut self) -> Result<(), JsValue> {
        self.scene.borrow_mut().fit_to(&self.window)
    }

    pub fn particle_count(&self) -> usize {
        self.scene.borrow().field.len()
    }

    pub fn is_running(&self) -> bool {
        self.animation
            .as_ref()
            .map(AnimationLoop::is_running)
            .unwrap_or(false)
    }

    // Stops the loop, detaches the resize listener and removes the canvas
    pub fn dispose(&mut self) {
        if let Some(mut animation) = self.animation.take() {
            animation.stop();
        }
        if let Some(on_resize) = self.on_resize.take() {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            {
                web_sys::console::warn_2(&"failed to detach resize listener".into(), &e);
            }
        }
        self.scene.borrow().canvas.remove();
        log!("particle background disposed");
    }
}

impl Background {
    pub fn attach_with(config: FieldConfig) -> Result<Background, JsValue> {
        config.validate().map_err(|e| JsValue::from_str(&e))?;
        let mut background = Background::mount(config)?;
        // Anything registered so far is torn down again on failure.
        if let Err(e) = background
            .listen_for_resize()
            .and_then(|_| background.start_loop())
        {
            background.dispose();
            return Err(e);
        }

        let (width, height) = background.scene.borrow().field.size();
        log!(
            "particle background attached: {} particles on {}x{}",
            background.particle_count(),
            width,
            height
        );
        if width == 0.0 || height == 0.0 {
            warn!("particle background has a zero-area viewport, frames are skipped");
        }
        Ok(background)
    }

    // Canvas and field only; no listener and no frame loop yet.
    fn mount(config: FieldConfig) -> Result<Background, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let (width, height) = viewport_size(&window)?;
        let canvas = create_overlay_canvas(&window)?;
        let surface = match CanvasSurface::new(&canvas) {
            Ok(surface) => surface,
            Err(e) => {
                canvas.remove();
                return Err(e);
            }
        };
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let field = ParticleField::with_config(width, height, config, &mut rand::thread_rng());
        Ok(Background {
            window,
            scene: Rc::new(RefCell::new(Scene {
                canvas,
                surface,
                field,
            })),
            animation: None,
            on_resize: None,
        })
    }

    fn listen_for_resize(&mut self) -> Result<(), JsValue> {
        let resize_scene = self.scene.clone();
        let resize_window = self.window.clone();
        let on_resize = Closure::wrap(Box::new(move || {
            if let Err(e) = resize_scene.borrow_mut().fit_to(&resize_window) {
                web_sys::console::warn_2(&"resize failed".into(), &e);
            }
        }) as Box<dyn FnMut()>);
        self.window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        self.on_resize = Some(on_resize);
        Ok(())
    }

    fn start_loop(&mut self) -> Result<(), JsValue> {
        let frame_scene = self.scene.clone();
        let animation = AnimationLoop::start(self.window.clone(), move || {
            if let Err(e) = frame_scene.borrow_mut().frame() {
                web_sys::console::error_2(&"particle frame failed".into(), &e);
            }
        })?;
        self.animation = Some(animation);
        Ok(())
    }
}

impl Drop for Background {
    fn drop(&mut self) {
        if self.animation.is_some() || self.on_resize.is_some() {
            self.dispose();
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::Event;

    wasm_bindgen_test_configure!(run_in_browser);

    fn canvas_count(window: &Window) -> u32 {
        window
            .document()
            .unwrap()
            .get_elements_by_tag_name("canvas")
            .length()
    }

    #[wasm_bindgen_test]
    fn teardown_after_partial_attach_detaches_listener() {
        let window = web_sys::window().unwrap();
        let before = canvas_count(&window);

        let mut background = Background::mount(FieldConfig::default()).unwrap();
        background.listen_for_resize().unwrap();
        assert_eq!(canvas_count(&window), before + 1);

        // Same path attach_with takes when starting the loop fails
        background.dispose();
        assert_eq!(canvas_count(&window), before);
        assert!(background.on_resize.is_none());

        let resize = Event::new("resize").unwrap();
        assert!(window.dispatch_event(&resize).is_ok());
    }

    #[wasm_bindgen_test]
    fn invalid_config_never_touches_the_dom() {
        let window = web_sys::window().unwrap();
        let before = canvas_count(&window);
        let config = FieldConfig {
            count: crate::config::MAX_COUNT + 1,
            ..FieldConfig::default()
        };
        assert!(Background::attach_with(config).is_err());
        assert_eq!(canvas_count(&window), before);
    }
}
