use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Element by id, cast to the requested type. `None` if missing or of a
/// different kind.
#[inline]
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Attach a listener for the lifetime of the page. Passive listeners never
/// call `preventDefault`, which keeps touch scrolling smooth.
pub fn listen<E: JsCast + 'static>(
    target: &web::EventTarget,
    event: &str,
    passive: bool,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    let options = web::AddEventListenerOptions::new();
    options.set_passive(passive);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        log::warn!("[dom] could not listen for {}: {:?}", event, e);
    }
    closure.forget();
}

/// How a canvas derives its backing pixel size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sizing {
    /// Match the element's laid-out size.
    Element,
    /// Match the window's inner size (fixed full-page canvas).
    Viewport,
}

impl Sizing {
    /// Resize the canvas backing store and return its new pixel size.
    pub fn apply(self, canvas: &web::HtmlCanvasElement) -> (u32, u32) {
        let (w, h) = match self {
            Sizing::Element => (
                canvas.offset_width().max(0) as u32,
                canvas.offset_height().max(0) as u32,
            ),
            Sizing::Viewport => web::window()
                .map(|w| {
                    let px = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
                        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
                    };
                    (px(w.inner_width()), px(w.inner_height()))
                })
                .unwrap_or((0, 0)),
        };
        canvas.set_width(w);
        canvas.set_height(h);
        (w, h)
    }
}
