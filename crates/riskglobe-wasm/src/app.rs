// crates/riskglobe-wasm/src/app.rs

//! The mounted globe: one shared state cell driven by DOM events.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use riskglobe_core::gesture::{DragGesture, PinchGesture, ZoomGesture};
use riskglobe_core::{
    Boundaries, GlobeConfig, GlobeError, GlobeEvent, GlobeView, ScoreTable, ViewState, ViewUpdate,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, PointerEvent, TouchEvent, WheelEvent};

use crate::dom::{DetailPanel, DomScene};
use crate::listener::Listener;
use crate::log;
use crate::service::{fetch_boundaries, DataService, Subscription};

struct AppState {
    view: GlobeView,
    zoom: ZoomGesture,
    drag: DragGesture,
    pinch: PinchGesture,
    document: Document,
    mount: Element,
    panel: Option<DetailPanel>,
    dom: Option<DomScene>,
    listeners: Vec<Listener>,
}

type Shared = Rc<RefCell<AppState>>;

impl AppState {
    fn dispatch(&mut self, event: GlobeEvent) {
        let update = self.view.handle(event);
        if let Err(e) = self.apply(update) {
            log::error(&format!("redraw failed: {e:?}"));
        }
    }

    fn apply(&mut self, update: ViewUpdate) -> Result<(), JsValue> {
        match update {
            ViewUpdate::None => {}
            ViewUpdate::Details => {
                if let Some(panel) = &self.panel {
                    panel.show(self.view.details());
                }
            }
            ViewUpdate::Paths => {
                if let (Some(dom), Some(scene)) = (&self.dom, self.view.scene()) {
                    dom.redraw_paths(scene)?;
                }
            }
            ViewUpdate::Zoomed { factor } => {
                self.zoom.reset_to(factor);
                if let (Some(dom), Some(scene)) = (&self.dom, self.view.scene()) {
                    dom.redraw_paths(scene)?;
                    dom.resize_ocean(scene)?;
                }
            }
        }
        Ok(())
    }
}

/// Runs `f` against the live state. Events arriving after the app was
/// dropped, or while another handler holds the state, are skipped.
fn with_state(weak: &Weak<RefCell<AppState>>, f: impl FnOnce(&mut AppState)) {
    let Some(state) = weak.upgrade() else {
        return;
    };
    let Ok(mut app) = state.try_borrow_mut() else {
        return;
    };
    f(&mut app);
}

/// A globe mounted into the page.
///
/// ```javascript
/// import init, { GlobeApp } from 'riskglobe-wasm';
///
/// await init();
/// const globe = new GlobeApp({ scores_url: '/assets/data.json' });
/// // ...
/// globe.destroy();
/// ```
#[wasm_bindgen]
pub struct GlobeApp {
    state: Shared,
    subscription: Option<Subscription>,
}

#[wasm_bindgen]
impl GlobeApp {
    /// Mounts into `config.mount_selector` and starts loading data.
    /// `config` may be `undefined` for the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<GlobeApp, JsValue> {
        let config = read_config(config)?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let mount = document
            .query_selector(&config.mount_selector)?
            .ok_or_else(|| {
                JsValue::from_str(&format!("mount point {} not found", config.mount_selector))
            })?;

        let width = window.inner_width()?.as_f64().unwrap_or_default();
        let height = window.inner_height()?.as_f64().unwrap_or_default();

        let panel = DetailPanel::mount(&document, &mount)?;
        panel.show(None);

        let service = DataService::new(config.scores_url.clone());
        let boundaries_url = config.boundaries_url.clone();

        let state = Rc::new(RefCell::new(AppState {
            view: GlobeView::new(width, height, config),
            zoom: ZoomGesture::new(),
            drag: DragGesture::default(),
            pinch: PinchGesture::default(),
            document,
            mount,
            panel: Some(panel),
            dom: None,
            listeners: Vec::new(),
        }));

        let weak = Rc::downgrade(&state);
        let subscription = service.subscribe(move |result| {
            if let Some(state) = weak.upgrade() {
                on_scores(&state, result, boundaries_url);
            }
        });
        log::info(&format!("riskglobe: loading scores from {}", service.url()));

        Ok(GlobeApp {
            state,
            subscription: Some(subscription),
        })
    }

    /// Current hover line, if a scored country is under the pointer.
    #[wasm_bindgen(getter)]
    pub fn details(&self) -> Option<String> {
        self.state
            .try_borrow()
            .ok()
            .and_then(|app| app.view.details().map(str::to_owned))
    }

    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        match self.state.try_borrow() {
            Ok(app) => format!("{:?}", app.view.state()),
            Err(_) => "Busy".to_string(),
        }
    }

    /// Current `[lambda, phi]` rotation in degrees.
    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> js_sys::Array {
        let out = js_sys::Array::new();
        if let Ok(app) = self.state.try_borrow() {
            let (lambda, phi) = app.view.controller().rotation();
            out.push(&JsValue::from_f64(lambda));
            out.push(&JsValue::from_f64(phi));
        }
        out
    }

    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f64 {
        self.state
            .try_borrow()
            .map(|app| app.view.controller().scale())
            .unwrap_or(f64::NAN)
    }

    /// Scene statistics, or `null` before the first render.
    pub fn stats(&self) -> Result<JsValue, JsValue> {
        let app = self
            .state
            .try_borrow()
            .map_err(|_| JsValue::from_str("globe is busy"))?;
        match app.view.scene() {
            Some(scene) => Ok(serde_wasm_bindgen::to_value(&scene.stats())?),
            None => Ok(JsValue::NULL),
        }
    }

    /// Cancels the pending score request, detaches every listener and
    /// removes the globe from the page. Safe to call twice. Dropping the
    /// app without calling this still clears the page.
    pub fn destroy(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
        }
        let Ok(mut app) = self.state.try_borrow_mut() else {
            log::warn("riskglobe: destroy called from inside an event handler");
            return;
        };
        if app.view.state() == ViewState::Destroyed {
            return;
        }
        app.view.destroy();
        app.drag.end();
        app.pinch.end();
        app.listeners.clear();
        app.dom = None;
        app.panel = None;
        log::info("riskglobe: destroyed");
    }
}

fn read_config(value: JsValue) -> Result<GlobeConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(GlobeConfig::default());
    }
    Ok(serde_wasm_bindgen::from_value(value)?)
}

fn on_scores(state: &Shared, result: Result<ScoreTable, GlobeError>, boundaries_url: String) {
    let table = match result {
        Ok(table) => {
            log::info(&format!(
                "riskglobe: {} score records, {} visible",
                table.len(),
                table.visible_count()
            ));
            table
        }
        Err(e) => {
            log::error(&format!("riskglobe: score data unavailable: {e}"));
            ScoreTable::new()
        }
    };

    if !state.borrow_mut().view.receive_scores(table) {
        return;
    }

    let weak = Rc::downgrade(state);
    spawn_local(async move {
        let boundaries = fetch_boundaries(&boundaries_url).await;
        let Some(state) = weak.upgrade() else {
            return;
        };
        if let Err(e) = render(&state, boundaries) {
            log::error(&format!("riskglobe: render failed: {e:?}"));
        }
    });
}

fn render(state: &Shared, boundaries: Result<Boundaries, GlobeError>) -> Result<(), JsValue> {
    {
        let mut guard = state.borrow_mut();
        let app = &mut *guard;
        let Some(scene) = app.view.receive_boundaries(boundaries) else {
            return Ok(());
        };
        let dom = DomScene::mount(&app.document, &app.mount, scene)?;
        let stats = scene.stats();
        log::info(&format!(
            "riskglobe: rendered {} countries, {} scored",
            stats.shapes, stats.scored
        ));
        app.dom = Some(dom);
    }

    let listeners = attach_listeners(state)?;
    state.borrow_mut().listeners = listeners;
    Ok(())
}

fn attach_listeners(state: &Shared) -> Result<Vec<Listener>, JsValue> {
    let (svg, paths) = {
        let app = state.borrow();
        let Some(dom) = app.dom.as_ref() else {
            return Ok(Vec::new());
        };
        (dom.svg().clone(), dom.paths().to_vec())
    };
    let mut listeners = Vec::with_capacity(paths.len() * 2 + 8);

    /* ---- Drag (mouse, pen or one finger) ---- */

    let weak = Rc::downgrade(state);
    listeners.push(Listener::new(&svg, "pointerdown", move |event| {
        let Some(pointer) = event.dyn_ref::<PointerEvent>() else {
            return;
        };
        if !pointer.is_primary() {
            return;
        }
        pointer.prevent_default();
        // Keep receiving moves after the pointer leaves the globe.
        if let Some(target) = event.current_target().and_then(|t| t.dyn_into::<Element>().ok()) {
            let _ = target.set_pointer_capture(pointer.pointer_id());
        }
        let (x, y) = (f64::from(pointer.client_x()), f64::from(pointer.client_y()));
        with_state(&weak, |app| {
            if !app.pinch.is_active() {
                app.drag.start(x, y);
            }
        });
    })?);

    let weak = Rc::downgrade(state);
    listeners.push(Listener::new(&svg, "pointermove", move |event| {
        let Some(pointer) = event.dyn_ref::<PointerEvent>() else {
            return;
        };
        if !pointer.is_primary() {
            return;
        }
        let (x, y) = (f64::from(pointer.client_x()), f64::from(pointer.client_y()));
        with_state(&weak, |app| {
            if let Some((dx, dy)) = app.drag.move_to(x, y) {
                app.dispatch(GlobeEvent::Drag { dx, dy });
            }
        });
    })?);

    for kind in ["pointerup", "pointercancel"] {
        let weak = Rc::downgrade(state);
        listeners.push(Listener::new(&svg, kind, move |_| {
            with_state(&weak, |app| app.drag.end());
        })?);
    }

    /* ---- Zoom: wheel and trackpad pinch ---- */

    let weak = Rc::downgrade(state);
    listeners.push(Listener::active(&svg, "wheel", move |event| {
        let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
            return;
        };
        wheel.prevent_default();
        with_state(&weak, |app| {
            let factor = app
                .zoom
                .wheel(wheel.delta_y(), wheel.delta_mode(), wheel.ctrl_key());
            app.dispatch(GlobeEvent::Zoom { factor });
        });
    })?);

    /* ---- Zoom: two-finger pinch ---- */

    let weak = Rc::downgrade(state);
    listeners.push(Listener::active(&svg, "touchstart", move |event| {
        let Some((a, b)) = event.dyn_ref::<TouchEvent>().and_then(two_touches) else {
            return;
        };
        event.prevent_default();
        with_state(&weak, |app| {
            app.drag.end();
            app.pinch.start(a, b);
        });
    })?);

    let weak = Rc::downgrade(state);
    listeners.push(Listener::active(&svg, "touchmove", move |event| {
        let Some((a, b)) = event.dyn_ref::<TouchEvent>().and_then(two_touches) else {
            return;
        };
        event.prevent_default();
        with_state(&weak, |app| {
            if let Some(ratio) = app.pinch.move_to(a, b) {
                let factor = app.zoom.scale_by(ratio);
                app.dispatch(GlobeEvent::Zoom { factor });
            }
        });
    })?);

    for kind in ["touchend", "touchcancel"] {
        let weak = Rc::downgrade(state);
        listeners.push(Listener::new(&svg, kind, move |event| {
            let remaining = event
                .dyn_ref::<TouchEvent>()
                .map_or(0, |touch| touch.touches().length());
            if remaining < 2 {
                with_state(&weak, |app| app.pinch.end());
            }
        })?);
    }

    /* ---- Hover ---- */

    for (index, path) in paths.iter().enumerate() {
        let weak = Rc::downgrade(state);
        listeners.push(Listener::new(path, "mouseover", move |_| {
            with_state(&weak, |app| app.dispatch(GlobeEvent::HoverEnter { index }));
        })?);

        let weak = Rc::downgrade(state);
        listeners.push(Listener::new(path, "mouseleave", move |_| {
            with_state(&weak, |app| app.dispatch(GlobeEvent::HoverLeave));
        })?);
    }

    Ok(listeners)
}

/// Client positions of the first two fingers, when exactly two are down.
fn two_touches(event: &TouchEvent) -> Option<((f64, f64), (f64, f64))> {
    let touches = event.touches();
    if touches.length() != 2 {
        return None;
    }
    let a = touches.get(0)?;
    let b = touches.get(1)?;
    Some((
        (f64::from(a.client_x()), f64::from(a.client_y())),
        (f64::from(b.client_x()), f64::from(b.client_y())),
    ))
}
