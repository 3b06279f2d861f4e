use crate::dom;
use crate::frame::FrameContext;
use glam::Vec2;
use smokefield_core::surface_local;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Where pointer samples come from.
pub enum PointerSource {
    /// Mouse and touch moves over `target`, reset when the mouse leaves it.
    Region(web::EventTarget),
    /// Mouse moves anywhere on the document; the pointer stays active once seen.
    Document(web::Document),
}

#[inline]
fn canvas_local(canvas: &web::HtmlCanvasElement, client_x: f64, client_y: f64) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    surface_local(
        Vec2::new(client_x as f32, client_y as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

pub fn wire_pointer(scene: &Rc<RefCell<FrameContext>>, source: PointerSource) {
    match source {
        PointerSource::Region(target) => {
            wire_mousemove(scene, &target);
            wire_touchmove(scene, &target);
            wire_mouseleave(scene, &target);
        }
        PointerSource::Document(document) => wire_mousemove(scene, &document),
    }
}

fn wire_mousemove(scene: &Rc<RefCell<FrameContext>>, target: &web::EventTarget) {
    let scene = scene.clone();
    dom::listen(target, "mousemove", true, move |ev: web::MouseEvent| {
        let mut ctx = scene.borrow_mut();
        let at = canvas_local(&ctx.canvas, ev.client_x() as f64, ev.client_y() as f64);
        ctx.sim.pointer_moved(at);
    });
}

fn wire_touchmove(scene: &Rc<RefCell<FrameContext>>, target: &web::EventTarget) {
    let scene = scene.clone();
    dom::listen(target, "touchmove", true, move |ev: web::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            let mut ctx = scene.borrow_mut();
            let at = canvas_local(&ctx.canvas, touch.client_x() as f64, touch.client_y() as f64);
            ctx.sim.pointer_moved(at);
        }
    });
}

fn wire_mouseleave(scene: &Rc<RefCell<FrameContext>>, target: &web::EventTarget) {
    let scene = scene.clone();
    dom::listen(target, "mouseleave", true, move |_ev: web::MouseEvent| {
        scene.borrow_mut().sim.pointer_left();
    });
}
