//! Browser bindings: canvas surface, `requestAnimationFrame` host and the
//! functions the page calls from JavaScript.
//!
//! Endpoint ids cannot be read from the environment inside the browser, so
//! they are baked in at build time from the same variables the native
//! config reads.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::{Rc, Weak};
use std::sync::LazyLock;

use wasm_bindgen::prelude::*;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::config::{ENV_CONTACT_FORM_ID, ENV_FORM_BASE_URL, ENV_PITCH_FORM_ID, FormConfig};
use crate::form::{FormClient, FormSubmission, SubmissionOutcome, TalentApplication, validate, validate_talent};
use crate::particles::{FrameHost, FrameId, ParticleNetwork, Surface};

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;
type ResizeSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Install the panic hook and route `tracing` events to the browser console.
///
/// No tracing subscriber runs in the browser, so events fall through to the
/// `log` facade and `console_log` prints them.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        tracing::debug!(error = %e, "console logger already installed");
    }
}

// =============================================================================
// SURFACE
// =============================================================================

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (f64::from(self.canvas.width()), f64::from(self.canvas.height()))
    }

    fn fit(&mut self) {
        self.canvas.set_width(self.canvas.client_width().max(0).unsigned_abs());
        self.canvas.set_height(self.canvas.client_height().max(0).unsigned_abs());
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
        self.ctx.begin_path();
        if self.ctx.arc(x, y, radius, 0.0, TAU).is_err() {
            return;
        }
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, width: f64) {
        self.ctx.begin_path();
        self.ctx.move_to(from.0, from.1);
        self.ctx.line_to(to.0, to.1);
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }
}

// =============================================================================
// HOST
// =============================================================================

pub struct BrowserHost {
    window: Window,
    frame_cb: FrameSlot,
    resize_cb: ResizeSlot,
}

impl FrameHost for BrowserHost {
    fn request_frame(&mut self) -> Option<FrameId> {
        let slot = self.frame_cb.borrow();
        let cb = slot.as_ref()?;
        self.window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .ok()
            .map(FrameId)
    }

    fn cancel_frame(&mut self, id: FrameId) {
        let _ = self.window.cancel_animation_frame(id.0);
    }

    fn watch_resize(&mut self) -> bool {
        let slot = self.resize_cb.borrow();
        let Some(cb) = slot.as_ref() else {
            return false;
        };
        self.window
            .add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())
            .is_ok()
    }

    fn unwatch_resize(&mut self) {
        if let Some(cb) = self.resize_cb.borrow().as_ref() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
        }
    }
}

type BrowserNetwork = ParticleNetwork<CanvasSurface, BrowserHost>;

/// Running particle network. Dropping it (or calling `unmount`) stops the
/// frame loop and removes the resize listener.
#[wasm_bindgen]
pub struct ParticleNetworkHandle {
    network: Option<Rc<RefCell<BrowserNetwork>>>,
}

#[wasm_bindgen]
impl ParticleNetworkHandle {
    /// Start the particle network on `canvas`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if there is no window or the canvas has no 2D context.
    #[wasm_bindgen(constructor)]
    pub fn mount(canvas: HtmlCanvasElement) -> Result<ParticleNetworkHandle, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let surface = CanvasSurface::new(canvas)?;

        let frame_cb: FrameSlot = Rc::new(RefCell::new(None));
        let resize_cb: ResizeSlot = Rc::new(RefCell::new(None));
        let host = BrowserHost { window, frame_cb: Rc::clone(&frame_cb), resize_cb: Rc::clone(&resize_cb) };

        let network = Rc::new(RefCell::new(ParticleNetwork::new(surface, host, &mut rand::rng())));

        let weak: Weak<RefCell<BrowserNetwork>> = Rc::downgrade(&network);
        *frame_cb.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
            if let Some(network) = weak.upgrade() {
                network.borrow_mut().on_frame();
            }
        }) as Box<dyn FnMut(f64)>));

        let weak: Weak<RefCell<BrowserNetwork>> = Rc::downgrade(&network);
        *resize_cb.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Some(network) = weak.upgrade() {
                network.borrow_mut().on_resize();
            }
        }) as Box<dyn FnMut()>));

        network.borrow_mut().start();
        Ok(Self { network: Some(network) })
    }

    /// Stop the animation now rather than waiting for garbage collection.
    pub fn unmount(&mut self) {
        if let Some(network) = self.network.take() {
            network.borrow_mut().stop();
        }
    }
}

impl Drop for ParticleNetworkHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

// =============================================================================
// FORMS
// =============================================================================

static FORM_CONFIG: LazyLock<FormConfig> = LazyLock::new(|| {
    FormConfig::from_lookup_or_default(|key| {
        match key {
            ENV_FORM_BASE_URL => option_env!("FORMSPREE_BASE_URL"),
            ENV_CONTACT_FORM_ID => option_env!("FORMSPREE_CONTACT_ID"),
            ENV_PITCH_FORM_ID => option_env!("FORMSPREE_PITCH_ID"),
            _ => None,
        }
        .map(str::to_owned)
    })
});

fn parse<T: serde::de::DeserializeOwned>(json: &str) -> Result<T, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_json::to_string(value)
        .map(|s| JsValue::from_str(&s))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

async fn send<F, Fut>(f: F) -> Result<JsValue, JsValue>
where
    F: FnOnce(FormClient) -> Fut,
    Fut: Future<Output = SubmissionOutcome>,
{
    let outcome = match FormClient::from_config(&FORM_CONFIG) {
        Ok(client) => f(client).await,
        Err(e) => {
            tracing::error!(error = %e, "form client unavailable");
            SubmissionOutcome::network_error()
        }
    };
    to_js(&outcome)
}

/// Validate a contact/pitch form given as JSON. Returns the validation result as JSON.
///
/// # Errors
///
/// Returns `Err` if the input is not a form object.
#[wasm_bindgen(js_name = validateContact)]
pub fn validate_contact(form_json: &str) -> Result<JsValue, JsValue> {
    to_js(&validate(&parse::<FormSubmission>(form_json)?))
}

/// Submit a contact/pitch form given as JSON. Resolves to the outcome as JSON.
///
/// # Errors
///
/// Rejects only if the input is not a form object.
#[wasm_bindgen(js_name = submitContact)]
pub async fn submit_contact(form_json: String) -> Result<JsValue, JsValue> {
    let form: FormSubmission = parse(&form_json)?;
    let endpoint = FORM_CONFIG.endpoint_for(form.category).to_owned();
    send(|client| async move { client.sanitize_and_submit(&endpoint, &form).await }).await
}

/// # Errors
///
/// Returns `Err` if the input is not an application object.
#[wasm_bindgen(js_name = validateTalent)]
pub fn validate_talent_application(application_json: &str) -> Result<JsValue, JsValue> {
    to_js(&validate_talent(&parse::<TalentApplication>(application_json)?))
}

/// # Errors
///
/// Rejects only if the input is not an application object.
#[wasm_bindgen(js_name = submitTalent)]
pub async fn submit_talent(application_json: String) -> Result<JsValue, JsValue> {
    let application: TalentApplication = parse(&application_json)?;
    let endpoint = FORM_CONFIG.talent_endpoint().to_owned();
    send(|client| async move { client.submit_talent(&endpoint, &application).await }).await
}
