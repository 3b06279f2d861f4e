#![cfg(target_arch = "wasm32")]
use smokefield_core::{SceneConfig, Simulation};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod calculator;
mod constants;
mod dom;
mod events;
mod frame;
mod render;

use constants::*;
use dom::Sizing;
use events::PointerSource;
use frame::{FrameContext, FrameLoop};
use render::CanvasSurface;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("smokefield-web starting");
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    // The hero and the calculator are independent page features.
    if let Err(e) = mount_hero(&document) {
        log::warn!("[hero] {:?}", e);
    }
    calculator::wire(&document);
    Ok(())
}

fn mount_hero(document: &web::Document) -> anyhow::Result<()> {
    let Some(canvas) = dom::element_by_id::<web::HtmlCanvasElement>(document, HERO_CANVAS_ID)
    else {
        log::debug!("[hero] no #{} on this page", HERO_CANVAS_ID);
        return Ok(());
    };
    let config = canvas
        .get_attribute(SCENE_ATTR)
        .and_then(|name| {
            let scene = SceneConfig::from_name(&name);
            if scene.is_none() {
                log::warn!("[hero] unknown scene {:?}, using hero", name);
            }
            scene
        })
        .unwrap_or_else(SceneConfig::hero);
    let region: web::EventTarget = document
        .query_selector(HERO_SECTION_SELECTOR)
        .ok()
        .flatten()
        .map(Into::into)
        .unwrap_or_else(|| canvas.clone().into());
    mount_scene(canvas, config, Sizing::Element, PointerSource::Region(region))
}

/// Full-page backdrop variant: creates its own fixed canvas behind the page
/// content and follows the mouse anywhere on the document.
#[wasm_bindgen]
pub fn start_backdrop() {
    if let Err(e) = build_backdrop() {
        log::warn!("[backdrop] {:?}", e);
    }
}

fn build_backdrop() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow::anyhow!("created element is not a canvas"))?;
    canvas.set_id(BACKDROP_CANVAS_ID);
    canvas
        .set_attribute("style", BACKDROP_STYLE)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    body.insert_before(&canvas, body.first_child().as_ref())
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    mount_scene(
        canvas,
        SceneConfig::backdrop(),
        Sizing::Viewport,
        PointerSource::Document(document),
    )
}

fn mount_scene(
    canvas: web::HtmlCanvasElement,
    config: SceneConfig,
    sizing: Sizing,
    pointer: PointerSource,
) -> anyhow::Result<()> {
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| anyhow::anyhow!("unexpected context type"))?;

    let (w, h) = sizing.apply(&canvas);
    let seed = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64;
    let name = config.name;
    let sim = Simulation::new(config, w as f32, h as f32, seed);
    log::info!(
        "[scene] {} mounted at {}x{} with {} particles",
        name,
        w,
        h,
        sim.particle_count()
    );

    let scene = Rc::new(RefCell::new(FrameContext {
        sim,
        surface: CanvasSurface::new(ctx),
        renderer: Default::default(),
        canvas,
        sizing,
        stats: Default::default(),
    }));
    events::wire_pointer(&scene, pointer);
    let frame_loop = FrameLoop::new(scene);
    frame::start_loop(&frame_loop);
    frame::wire_resize(frame_loop);
    Ok(())
}
