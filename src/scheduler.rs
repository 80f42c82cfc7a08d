// requestAnimationFrame loop. The callback re-requests itself after every frame
// until the loop is stopped or dropped.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct AnimationLoop {
    window: Window,
    callback: FrameSlot,
    pending: Rc<Cell<Option<i32>>>,
}

fn request_frame(window: &Window, callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window.request_animation_frame(callback.as_ref().unchecked_ref())
}

impl AnimationLoop {
    pub fn start<F>(window: Window, mut on_frame: F) -> Result<AnimationLoop, JsValue>
    where
        F: FnMut() + 'static,
    {
        let callback: FrameSlot = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        // The closure holds a handle to its own slot; stop() empties the slot to
        // break the cycle.
        let slot = callback.clone();
        let frame_pending = pending.clone();
        let frame_window = window.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            frame_pending.set(None);
            on_frame();
            if let Some(next) = slot.borrow().as_ref() {
                match request_frame(&frame_window, next) {
                    Ok(id) => frame_pending.set(Some(id)),
                    Err(e) => web_sys::console::warn_2(&"animation frame request failed".into(), &e),
                }
            }
        }) as Box<dyn FnMut()>));

        let first = match callback.borrow().as_ref() {
            Some(first) => request_frame(&window, first),
            None => Err(JsValue::from_str("animation callback missing")),
        };
        match first {
            Ok(id) => pending.set(Some(id)),
            Err(e) => {
                // The closure still references its own slot.
                callback.borrow_mut().take();
                return Err(e);
            }
        }

        Ok(AnimationLoop {
            window,
            callback,
            pending,
        })
    }

    pub fn is_running(&self) -> bool {
        self.callback.borrow().is_some()
    }

    // Must not be called from inside the frame callback.
    pub fn stop(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                web_sys::console::warn_2(&"cancel_animation_frame failed".into(), &e);
            }
        }
        self.callback.borrow_mut().take();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
