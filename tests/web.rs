//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use js_sys::Array;
use portfolio_fx::contact::{validate_contact_field, validate_contact_json};
use portfolio_fx::counter::CountUp;
use portfolio_fx::projects::ProjectBrowser;
use portfolio_fx::renderer::CanvasSurface;
use portfolio_fx::{Background, ParticleField, Particle, Surface};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn canvas(width: u32, height: u32) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_width(width);
    canvas.set_height(height);
    canvas
}

fn overlay_canvases() -> u32 {
    let document = web_sys::window().unwrap().document().unwrap();
    document.get_elements_by_tag_name("canvas").length()
}

#[wasm_bindgen_test]
fn canvas_surface_draws_field() {
    let canvas = canvas(200, 100);
    let mut surface = CanvasSurface::new(&canvas).unwrap();
    let mut field = ParticleField::from_particles(
        200.0,
        100.0,
        vec![
            Particle::new(10.0, 10.0, 0.1, 0.1, 2.0, 0.5),
            Particle::new(20.0, 10.0, -0.1, 0.1, 2.0, 0.5),
        ],
    );
    for _ in 0..10 {
        field.frame(&mut surface).unwrap();
    }
    assert_eq!(field.len(), 2);
}

#[wasm_bindgen_test]
fn canvas_surface_clears() {
    let canvas = canvas(20, 20);
    let mut surface = CanvasSurface::new(&canvas).unwrap();
    surface.clear(20.0, 20.0).unwrap();
}

#[wasm_bindgen_test]
fn background_attaches_and_disposes() {
    let before = overlay_canvases();
    let mut background = Background::attach().unwrap();
    assert_eq!(overlay_canvases(), before + 1);
    assert_eq!(background.particle_count(), 50);
    assert!(background.is_running());

    background.resize().unwrap();
    background.dispose();
    assert!(!background.is_running());
    assert_eq!(overlay_canvases(), before);
}

#[wasm_bindgen_test]
fn background_accepts_json_config() {
    let mut background = Background::attach_with_config(r#"{"count": 12}"#).unwrap();
    assert_eq!(background.particle_count(), 12);
    background.dispose();

    assert!(Background::attach_with_config(r#"{"speed": -3}"#).is_err());
}

#[wasm_bindgen_test]
fn contact_json_reports_messages() {
    assert!(validate_contact_json(
        r#"{"name":"Ada","email":"ada@example.com","subject":"hi","message":"Hello there, friend"}"#
    )
    .is_ok());

    let err = validate_contact_json(r#"{"name":"A"}"#).unwrap_err();
    let list: Array = err.dyn_into().unwrap();
    assert_eq!(list.length(), 4);
    assert_eq!(
        list.get(0).as_string().as_deref(),
        Some("Name must be at least 2 characters long")
    );

    let err = validate_contact_json("not json").unwrap_err();
    assert!(err.as_string().unwrap().starts_with("invalid contact form"));
    assert_eq!(validate_contact_field("subject", ""), Some("Please select a subject".to_string()));
}

#[wasm_bindgen_test]
fn counter_rejects_labels_without_numbers() {
    assert!(CountUp::for_label("soon").is_err());
    assert!(CountUp::for_label("12+").is_ok());
}

#[wasm_bindgen_test]
fn project_browser_from_json() {
    let mut browser =
        ProjectBrowser::from_json(r#"{"demo": {"title": "Demo", "description": "d"}}"#).unwrap();
    assert!(browser.open_from_title("Demo"));
    assert!(browser.current_json().unwrap().contains("\"title\":\"Demo\""));
    assert!(ProjectBrowser::from_json("nope").is_err());
}
