//! WASM build test
//!
//! Exercises the DOM-facing pieces in a real browser.
//!
//! Run with: wasm-pack test --headless --chrome

#![cfg(target_arch = "wasm32")]

use pdf_canvas_wasm::models::{CanvasSize, CANVAS_DISPLAY_WIDTH};
use pdf_canvas_wasm::renderers::{CanvasHost, DomCanvasHost, PAGE_ATTRIBUTE};
use pdf_canvas_wasm::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

fn container() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

fn config_object(scale: Option<f64>) -> JsValue {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &"moduleUrl".into(), &"/pdfjs/pdf.mjs".into()).unwrap();
    js_sys::Reflect::set(&config, &"workerSrc".into(), &"/pdfjs/pdf.worker.mjs".into()).unwrap();
    if let Some(scale) = scale {
        js_sys::Reflect::set(&config, &"scale".into(), &JsValue::from_f64(scale)).unwrap();
    }
    config.into()
}

#[wasm_bindgen_test]
fn test_version_is_reported() {
    assert!(!get_version().is_empty());
}

#[wasm_bindgen_test]
fn test_canvas_is_sized_and_fills_its_parent() {
    let host = DomCanvasHost::new(container()).unwrap();

    let canvas: HtmlCanvasElement = host
        .create_canvas(1, CanvasSize { width: 1224, height: 1584 })
        .unwrap();

    assert_eq!(canvas.width(), 1224);
    assert_eq!(canvas.height(), 1584);
    assert_eq!(
        canvas.style().get_property_value("width").unwrap(),
        CANVAS_DISPLAY_WIDTH
    );
    assert_eq!(canvas.get_attribute(PAGE_ATTRIBUTE).as_deref(), Some("1"));
}

fn page_numbers(element: &Element) -> Vec<String> {
    let children = element.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|child| child.get_attribute(PAGE_ATTRIBUTE))
        .collect()
}

fn attach_pages(element: &Element, order: &[u32]) {
    let host = DomCanvasHost::new(element.clone()).unwrap();
    for &page in order {
        let canvas = host
            .create_canvas(page, CanvasSize { width: 10, height: 10 })
            .unwrap();
        host.attach(page, &canvas).unwrap();
    }
}

#[wasm_bindgen_test]
fn test_second_render_is_appended_after_the_first() {
    let element = container();

    attach_pages(&element, &[2, 1, 3]);
    attach_pages(&element, &[3, 1, 2]);

    assert_eq!(page_numbers(&element), vec!["1", "2", "3", "1", "2", "3"]);
}

#[wasm_bindgen_test]
fn test_existing_children_stay_ahead_of_page_canvases() {
    let element = container();
    let document = element.owner_document().unwrap();
    let caption = document.create_element("p").unwrap();
    caption.set_attribute("id", "caption").unwrap();
    element.append_child(&caption).unwrap();

    attach_pages(&element, &[2, 1]);

    let children = element.children();
    assert_eq!(children.length(), 3);
    assert_eq!(children.item(0).unwrap().id(), "caption");
    assert_eq!(page_numbers(&element), vec!["1", "2"]);
}

#[wasm_bindgen_test]
fn test_canvases_are_kept_in_page_order() {
    let element = container();
    let host = DomCanvasHost::new(element.clone()).unwrap();

    for page in [3, 1, 2] {
        let canvas = host
            .create_canvas(page, CanvasSize { width: 10, height: 10 })
            .unwrap();
        host.attach(page, &canvas).unwrap();
    }

    let children = element.children();
    let pages: Vec<String> = (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|child| child.get_attribute(PAGE_ATTRIBUTE))
        .collect();
    assert_eq!(pages, vec!["1", "2", "3"]);
    assert!(children
        .item(0)
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .is_ok());
}

#[wasm_bindgen_test]
fn test_viewer_defaults_to_double_scale() {
    let viewer = PdfViewer::new(config_object(None)).unwrap();
    assert_eq!(viewer.scale(), 2.0);
    assert!(!viewer.is_library_loaded());
}

#[wasm_bindgen_test]
fn test_viewer_rejects_invalid_scale() {
    assert!(PdfViewer::new(config_object(Some(0.0))).is_err());
}

#[wasm_bindgen_test]
fn test_plugin_viewer_renders_at_unit_scale() {
    let viewer = PdfViewer::for_plugin("http://localhost:8000").unwrap();
    assert_eq!(viewer.scale(), 1.0);
}

#[wasm_bindgen_test]
fn test_signed_media_url() {
    let media = js_sys::Object::new();
    js_sys::Reflect::set(&media, &"path".into(), &"/d/a b.pdf".into()).unwrap();
    js_sys::Reflect::set(&media, &"signature".into(), &"c2ln/".into()).unwrap();

    let url = signed_media_url("http://localhost:8000", media.into()).unwrap();
    assert_eq!(
        url,
        "http://localhost:8000/api/plugin/timeline_plugin_documents/file/%2Fd%2Fa%20b.pdf/c2ln%2F"
    );
}

#[wasm_bindgen_test]
fn test_generator_loads_nothing_up_front() {
    let generator = PdfGenerator::new();
    assert!(!generator.is_library_loaded());
}
