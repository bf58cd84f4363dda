//! Browser bindings for the Stellarium Web Engine.
//!
//! The loader script installs a global `StelWebEngine(options)` function.
//! [`mount`] injects the script, calls the entry point once it loads, and
//! hands a [`StelHandle`] to the caller from the engine's `onReady` callback.
//! Every property read goes through `Reflect` and treats `undefined`, `null`
//! and thrown exceptions alike as "absent".

use js_sys::{Array, Function, Object, Reflect};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlCanvasElement, HtmlScriptElement};

use crate::change::Change;
use crate::consts::ENGINE_GLOBAL;
use crate::engine::{EngineError, SkyEngine};
use crate::layer::Layer;
use crate::object::ObjectSnapshot;
use crate::observer::Observer;
use crate::source::{DataSource, EngineConfig, Font};

// =============================================================================
// REFLECTION HELPERS
// =============================================================================

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    match Reflect::get(target, &JsValue::from_str(key)) {
        Ok(value) if !value.is_undefined() && !value.is_null() => Some(value),
        _ => None,
    }
}

fn get_path(root: &JsValue, path: &[&str]) -> Option<JsValue> {
    path.iter().try_fold(root.clone(), |value, key| get(&value, key))
}

fn set(target: &JsValue, key: &str, value: &JsValue) -> Result<(), EngineError> {
    match Reflect::set(target, &JsValue::from_str(key), value) {
        Ok(true) => Ok(()),
        Ok(false) => Err(EngineError::Init(format!("property {key} is read-only"))),
        Err(err) => Err(EngineError::Init(describe(&err))),
    }
}

fn method(target: &JsValue, name: &str) -> Option<Function> {
    match get(target, name)?.dyn_into::<Function>() {
        Ok(function) => Some(function),
        Err(_) => None,
    }
}

/// Call `target.name(...args)`; absent method, exception, or empty result is `None`.
fn call_opt(target: &JsValue, name: &str, args: &Array) -> Option<JsValue> {
    let function = method(target, name)?;
    match function.apply(target, args) {
        Ok(value) if !value.is_undefined() && !value.is_null() => Some(value),
        _ => None,
    }
}

fn get_info(obj: &JsValue, key: &str) -> Option<JsValue> {
    call_opt(obj, "getInfo", &Array::of1(&JsValue::from_str(key)))
}

fn non_empty_string(value: Option<JsValue>) -> Option<String> {
    value.and_then(|v| v.as_string()).filter(|s| !s.is_empty())
}

fn vec3(value: &JsValue) -> Option<[f64; 3]> {
    if !Array::is_array(value) {
        return None;
    }
    let array = Array::from(value);
    if array.length() < 3 {
        return None;
    }
    Some([array.get(0).as_f64()?, array.get(1).as_f64()?, array.get(2).as_f64()?])
}

/// Read every accessor the info panel uses, skipping the ones that are absent.
fn snapshot(obj: &JsValue) -> ObjectSnapshot {
    let no_args = Array::new();
    let designations = call_opt(obj, "designations", &no_args)
        .filter(Array::is_array)
        .map(|list| Array::from(&list).iter().filter_map(|d| d.as_string()).collect())
        .unwrap_or_default();
    let type_code = non_empty_string(call_opt(obj, "getType", &no_args))
        .or_else(|| non_empty_string(call_opt(obj, "getObjectType", &no_args)))
        .or_else(|| non_empty_string(get(obj, "type")));

    ObjectSnapshot {
        designations,
        english_name: non_empty_string(call_opt(obj, "getEnglishName", &no_args)),
        i18n_name: non_empty_string(call_opt(obj, "getNameI18n", &no_args)),
        type_code,
        vmag: get_info(obj, "vmag").and_then(|v| v.as_f64()),
        radec: get_info(obj, "radec").as_ref().and_then(vec3),
        distance: get_info(obj, "distance").and_then(|v| v.as_f64()),
        constellation: non_empty_string(get_info(obj, "constellation")),
    }
}

// =============================================================================
// HANDLE
// =============================================================================

/// Live engine instance passed to `onReady`.
#[derive(Clone)]
pub struct StelHandle {
    stel: JsValue,
}

impl StelHandle {
    fn new(stel: JsValue) -> Self {
        Self { stel }
    }

    fn core(&self) -> Result<JsValue, EngineError> {
        get(&self.stel, "core").ok_or_else(|| EngineError::Init("engine has no core".to_owned()))
    }

    /// Subscribe to attribute changes. The callback lives as long as the page.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Init`] if the engine has no `change` method or throws.
    pub fn on_change(&self, mut callback: impl FnMut(Change) + 'static) -> Result<(), EngineError> {
        let change = method(&self.stel, "change").ok_or_else(|| EngineError::Init("engine has no change()".to_owned()))?;
        let listener = Closure::<dyn FnMut(JsValue, JsValue)>::new(move |_obj: JsValue, attr: JsValue| {
            callback(Change::classify(&attr.as_string().unwrap_or_default()));
        });
        change
            .call1(&self.stel, &listener.into_js_value())
            .map(|_| ())
            .map_err(|err| EngineError::Init(describe(&err)))
    }
}

impl SkyEngine for StelHandle {
    fn set_observer(&mut self, observer: &Observer) -> Result<(), EngineError> {
        let target = get(&self.core()?, "observer").ok_or_else(|| EngineError::Init("core has no observer".to_owned()))?;
        set(&target, "latitude", &JsValue::from_f64(observer.latitude_rad()))?;
        set(&target, "longitude", &JsValue::from_f64(observer.longitude_rad()))?;
        set(&target, "elevation", &JsValue::from_f64(observer.altitude))?;
        set(&target, "location_name", &JsValue::from_str(&observer.name))
    }

    fn add_data_source(&mut self, source: &DataSource) -> Result<(), EngineError> {
        let name = source.module.property();
        let module = get(&self.core()?, name).ok_or_else(|| EngineError::Init(format!("core has no {name}")))?;
        let add = method(&module, "addDataSource").ok_or_else(|| EngineError::Init(format!("{name}.addDataSource missing")))?;
        let options: JsValue = Object::new().into();
        set(&options, "url", &JsValue::from_str(&source.url))?;
        if let Some(key) = source.key {
            set(&options, "key", &JsValue::from_str(key))?;
        }
        add.call1(&module, &options)
            .map(|_| ())
            .map_err(|err| EngineError::Init(format!("{name}: {}", describe(&err))))
    }

    fn set_font(&mut self, font: &Font) -> Result<(), EngineError> {
        let set_font = method(&self.stel, "setFont").ok_or_else(|| EngineError::Init("engine has no setFont()".to_owned()))?;
        set_font
            .call3(&self.stel, &JsValue::from_str(font.name), &JsValue::from_str(font.url), &JsValue::from_f64(font.scale))
            .map(|_| ())
            .map_err(|err| EngineError::Init(describe(&err)))
    }

    fn layer_visible(&self, layer: Layer) -> Option<bool> {
        let core = get(&self.stel, "core")?;
        get(&get_path(&core, layer.path())?, "visible")?.as_bool()
    }

    fn set_layer_visible(&mut self, layer: Layer, visible: bool) -> bool {
        let Some(target) = get(&self.stel, "core").and_then(|core| get_path(&core, layer.path())) else {
            return false;
        };
        match set(&target, "visible", &JsValue::from_bool(visible)) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("layer {} toggle rejected: {}", layer.label(), err.detail());
                false
            }
        }
    }

    fn selection(&self) -> Option<ObjectSnapshot> {
        let selected = get(&get(&self.stel, "core")?, "selection")?;
        Some(snapshot(&selected))
    }

    fn icrf_to_cirs(&self, v: [f64; 3]) -> Option<[f64; 3]> {
        let observer = get(&get(&self.stel, "core")?, "observer")?;
        let position = Array::of3(&JsValue::from_f64(v[0]), &JsValue::from_f64(v[1]), &JsValue::from_f64(v[2]));
        let args = Array::of4(&observer, &JsValue::from_str("ICRF"), &JsValue::from_str("CIRS"), &position);
        vec3(&call_opt(&self.stel, "convertFrame", &args)?)
    }
}

// =============================================================================
// MOUNT
// =============================================================================

/// The injected loader script. Dropping it removes the script element.
pub struct EngineMount {
    script: HtmlScriptElement,
    _on_load: Closure<dyn FnMut()>,
    _on_error: Closure<dyn FnMut()>,
}

impl Drop for EngineMount {
    fn drop(&mut self) {
        self.script.set_onload(None);
        self.script.set_onerror(None);
        self.script.remove();
    }
}

/// Inject the loader script and start the engine on `canvas` once it loads.
///
/// `on_ready` runs at most once, from the engine's `onReady` callback.
/// Failures after injection are reported through `on_error`.
///
/// # Errors
///
/// Returns [`EngineError::ScriptLoad`] if the script element cannot be created
/// or attached to the document.
pub fn mount(
    config: &EngineConfig,
    canvas: HtmlCanvasElement,
    on_ready: impl FnOnce(StelHandle) + 'static,
    on_error: impl Fn(EngineError) + 'static,
) -> Result<EngineMount, EngineError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(EngineError::ScriptLoad)?;
    let body = document.body().ok_or(EngineError::ScriptLoad)?;
    let script = document
        .create_element("script")
        .map_err(|_| EngineError::ScriptLoad)?
        .dyn_into::<HtmlScriptElement>()
        .map_err(|_| EngineError::ScriptLoad)?;
    script.set_src(&config.script_url);
    script.set_async(true);

    let on_error = Rc::new(on_error);
    let report_start = Rc::clone(&on_error);
    let wasm_file = config.wasm_file.clone();
    let mut pending = Some(on_ready);
    let on_load = Closure::<dyn FnMut()>::new(move || {
        let Some(on_ready) = pending.take() else {
            return;
        };
        if let Err(err) = start(&wasm_file, &canvas, on_ready) {
            (*report_start)(err);
        }
    });
    let report_load = Rc::clone(&on_error);
    let on_script_error = Closure::<dyn FnMut()>::new(move || (*report_load)(EngineError::ScriptLoad));

    script.set_onload(Some(on_load.as_ref().unchecked_ref()));
    script.set_onerror(Some(on_script_error.as_ref().unchecked_ref()));
    body.append_child(&script).map_err(|_| EngineError::ScriptLoad)?;

    Ok(EngineMount { script, _on_load: on_load, _on_error: on_script_error })
}

fn start(wasm_file: &str, canvas: &HtmlCanvasElement, on_ready: impl FnOnce(StelHandle) + 'static) -> Result<(), EngineError> {
    let window = web_sys::window().ok_or(EngineError::MissingGlobal)?;
    let entry = method(window.as_ref(), ENGINE_GLOBAL).ok_or(EngineError::MissingGlobal)?;

    let options: JsValue = Object::new().into();
    set(&options, "wasmFile", &JsValue::from_str(wasm_file))?;
    set(&options, "canvas", canvas.as_ref())?;
    let translate = Closure::<dyn Fn(JsValue, JsValue) -> JsValue>::new(|_domain: JsValue, text: JsValue| text);
    set(&options, "translateFn", &translate.into_js_value())?;
    let ready = Closure::once_into_js(move |stel: JsValue| on_ready(StelHandle::new(stel)));
    set(&options, "onReady", &ready)?;

    entry
        .call1(&JsValue::NULL, &options)
        .map(|_| ())
        .map_err(|err| EngineError::Init(describe(&err)))
}
