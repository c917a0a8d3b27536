//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use hero_particles_web::config::PageMarkup;
use hero_particles_web::dom_helpers;
use hero_particles_web::hero;
use hero_particles_web::renderer::context_2d;
use hero_particles_web::ui::{filter, menu, nav, scroll, tabs, ticker, timestamp};
use hero_particles_web::ParticleCanvas;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, Event, HtmlCanvasElement, HtmlElement, HtmlInputElement, MouseEvent, Window,
};

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> Window {
    web_sys::window().unwrap()
}

fn document() -> Document {
    window().document().unwrap()
}

// Appends a fixture under <body>; tests scope their selectors to its id
fn fixture(id: &str, html: &str) -> Element {
    let root = document().create_element("div").unwrap();
    root.set_id(id);
    root.set_inner_html(html);
    document().body().unwrap().append_child(&root).unwrap();
    root
}

fn html_element(root: &Element, selector: &str) -> HtmlElement {
    root.query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

fn click(root: &Element, selector: &str) {
    html_element(root, selector).click();
}

fn has_class(root: &Element, selector: &str, class: &str) -> bool {
    root.query_selector(selector)
        .unwrap()
        .unwrap()
        .class_list()
        .contains(class)
}

#[wasm_bindgen_test]
fn filter_shows_matching_cards() {
    let root = fixture(
        "filter-test",
        r#"<button class="filter-btn active" data-filter="all">All</button>
           <button class="filter-btn" data-filter="electronics">Electronics</button>
           <button class="filter-btn" data-filter="books">Books</button>
           <div class="card" id="c1" data-category="electronics"></div>
           <div class="card" id="c2" data-category="books"></div>
           <div class="card" id="c3" data-category="electronics"></div>"#,
    );
    let markup = PageMarkup {
        filter_button_selector: "#filter-test .filter-btn",
        card_selector: "#filter-test .card",
        ..PageMarkup::default()
    };
    filter::bind(&window(), &document(), &markup).unwrap();

    click(&root, "[data-filter=electronics]");

    assert!(has_class(&root, "[data-filter=electronics]", "active"));
    assert!(!has_class(&root, "[data-filter=all]", "active"));
    assert!(!has_class(&root, "[data-filter=books]", "active"));
    assert!(has_class(&root, "#c1", "show"));
    assert!(has_class(&root, "#c2", "hide"));
    assert!(!has_class(&root, "#c2", "show"));
    assert!(has_class(&root, "#c3", "show"));
    root.remove();
}

#[wasm_bindgen_test]
fn tab_click_switches_panel() {
    let root = fixture(
        "tabs-test",
        r#"<button class="tab-btn active" data-tab="p1">One</button>
           <button class="tab-btn" data-tab="p2">Two</button>
           <button class="tab-btn" data-tab="p3">Three</button>
           <div class="tab-content active" id="p1"></div>
           <div class="tab-content" id="p2"></div>
           <div class="sidebar" id="p3"></div>"#,
    );
    let markup = PageMarkup {
        tab_button_selector: "#tabs-test .tab-btn",
        tab_panel_selector: "#tabs-test .tab-content",
        ..PageMarkup::default()
    };
    tabs::bind(&window(), &document(), &markup).unwrap();

    click(&root, "[data-tab=p2]");

    assert!(has_class(&root, "[data-tab=p2]", "active"));
    assert!(!has_class(&root, "[data-tab=p1]", "active"));
    assert!(has_class(&root, "#p2", "active"));
    assert!(!has_class(&root, "#p1", "active"));

    // p3 exists but is not one of the tab panels
    click(&root, "[data-tab=p3]");
    assert!(has_class(&root, "[data-tab=p3]", "active"));
    assert!(!has_class(&root, "#p2", "active"));
    assert!(!has_class(&root, "#p3", "active"));
    root.remove();
}

#[wasm_bindgen_test]
fn menu_button_toggles_menu() {
    let root = fixture(
        "menu-test",
        r#"<button id="menu-test-btn"></button><ul id="menu-test-menu"></ul>"#,
    );
    let markup = PageMarkup {
        menu_button_id: "menu-test-btn",
        menu_id: "menu-test-menu",
        ..PageMarkup::default()
    };
    menu::bind(&window(), &document(), &markup).unwrap();

    click(&root, "#menu-test-btn");
    assert!(has_class(&root, "#menu-test-menu", "active"));
    click(&root, "#menu-test-btn");
    assert!(!has_class(&root, "#menu-test-menu", "active"));
    root.remove();
}

#[wasm_bindgen_test]
fn missing_markup_is_not_an_error() {
    let markup = PageMarkup {
        canvas_id: "nope-canvas",
        filter_button_selector: ".nope-filter",
        tab_button_selector: ".nope-tab",
        menu_button_id: "nope-menu",
        timestamp_id: "nope-timestamp",
        ticker_selector: ".nope-ticker",
        ..PageMarkup::default()
    };
    let (window, document) = (window(), document());
    hero_particles_web::hero::bind(&window, &document, &markup).unwrap();
    filter::bind(&window, &document, &markup).unwrap();
    tabs::bind(&window, &document, &markup).unwrap();
    menu::bind(&window, &document, &markup).unwrap();
    timestamp::bind(&window, &document, &markup).unwrap();
    ticker::bind(&window, &document, &markup).unwrap();
}

#[wasm_bindgen_test]
fn nav_highlights_current_page() {
    let root = fixture(
        "nav-test",
        r#"<a class="navbar-link" href="index.html"></a>
           <a class="navbar-link active" href="programs.html"></a>
           <a class="navbar-link" href="contact.html"></a>"#,
    );
    let markup = PageMarkup {
        nav_link_selector: "#nav-test .navbar-link",
        ..PageMarkup::default()
    };

    assert_eq!(nav::highlight(&document(), "/site/contact.html", &markup).unwrap(), 1);
    assert!(has_class(&root, "[href='contact.html']", "active"));
    assert!(!has_class(&root, "[href='programs.html']", "active"));

    assert_eq!(nav::highlight(&document(), "/", &markup).unwrap(), 1);
    assert!(has_class(&root, "[href='index.html']", "active"));
    assert!(!has_class(&root, "[href='contact.html']", "active"));
    root.remove();
}

#[wasm_bindgen_test]
fn timestamp_field_is_stamped() {
    let root = fixture(
        "timestamp-test",
        r#"<input type="hidden" id="timestamp-test-field" value="">"#,
    );
    let markup = PageMarkup {
        timestamp_id: "timestamp-test-field",
        ..PageMarkup::default()
    };
    assert!(timestamp::stamp(&document(), &markup, 1_700_000_000_000.0));
    let field = document()
        .get_element_by_id("timestamp-test-field")
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap();
    assert_eq!(field.value(), "1700000000000");
    root.remove();
}

#[wasm_bindgen_test]
fn anchor_without_target_does_not_scroll() {
    let root = fixture(
        "scroll-test",
        r##"<a id="bare" href="#"></a><a id="dangling" href="#no-such-section"></a>"##,
    );
    let markup = PageMarkup::default();
    let bare = root.query_selector("#bare").unwrap().unwrap();
    let dangling = root.query_selector("#dangling").unwrap().unwrap();
    assert_eq!(scroll::follow(&window(), &document(), &bare, &markup), None);
    assert_eq!(scroll::follow(&window(), &document(), &dangling, &markup), None);
    root.remove();
}

#[wasm_bindgen_test]
fn anchor_click_scrolls_to_target_below_header() {
    let root = fixture(
        "scroll-ok-test",
        r##"<a id="jump" href="#scroll-ok-target">Programs</a>
            <div id="scroll-ok-target" style="margin-top: 1500px; height: 20px;"></div>"##,
    );
    let markup = PageMarkup {
        anchor_selector: "#scroll-ok-test a[href^=\"#\"]",
        ..PageMarkup::default()
    };
    let (window, document) = (window(), document());
    let anchor = root.query_selector("#jump").unwrap().unwrap();
    let target = html_element(&root, "#scroll-ok-target");

    let expected = target.offset_top() as f64 - 100.0;
    assert_eq!(scroll::follow(&window, &document, &anchor, &markup), Some(expected));

    let hash_before = window.location().hash().unwrap();
    scroll::bind(&window, &document, &markup).unwrap();
    let prevented = Rc::new(Cell::new(false));
    {
        let prevented = prevented.clone();
        // Registered after bind, so it sees the event once the scroll handler ran
        dom_helpers::on_event(&anchor, "click", move |event| {
            prevented.set(event.default_prevented());
        })
        .unwrap();
    }
    click(&root, "#jump");

    assert!(prevented.get());
    assert_eq!(window.location().hash().unwrap(), hash_before);
    root.remove();
}

#[wasm_bindgen_test]
fn ticker_doubles_logos_and_sets_duration() {
    let root = fixture(
        "ticker-test",
        r#"<div class="track" style="display: flex; width: 200px; overflow: hidden;">
             <div style="flex: none; width: 120px; height: 10px;"></div>
             <div style="flex: none; width: 120px; height: 10px;"></div>
             <div style="flex: none; width: 120px; height: 10px;"></div>
             <div style="flex: none; width: 120px; height: 10px;"></div>
             <div style="flex: none; width: 120px; height: 10px;"></div>
           </div>"#,
    );
    let track = root
        .query_selector(".track")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();

    assert_eq!(ticker::duplicate_children(&track).unwrap(), 5);
    assert_eq!(track.child_element_count(), 10);

    let markup = PageMarkup::default();
    let animation = ticker::animate(&document(), &track, &markup).unwrap();
    let scroll_width = track.scroll_width() as f64;
    assert_eq!(animation.distance, scroll_width / 2.0);
    assert_eq!(animation.duration_secs, (scroll_width / 2.0) / 50.0);
    assert!(track
        .style()
        .get_property_value("animation")
        .unwrap()
        .contains("scrollTicker"));
    root.remove();
}

#[wasm_bindgen_test]
fn particle_canvas_ticks_on_a_real_context() {
    let canvas = document()
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_width(240);
    canvas.set_height(120);
    let ctx = context_2d(&canvas).unwrap();

    let mut particles = ParticleCanvas::new(240.0, 120.0);
    assert_eq!(particles.particle_count(), 20);
    particles.set_pointer(120.0, 60.0);
    particles.tick(&ctx).unwrap();
    particles.clear_pointer();
    particles.tick(&ctx).unwrap();

    particles.resize(600.0, 120.0);
    assert_eq!(particles.particle_count(), 50);
    assert_eq!(particles.width(), 600.0);
}

#[wasm_bindgen_test]
fn hero_canvas_follows_resize_and_pointer() {
    let root = fixture(
        "hero-test",
        r#"<div class="hero" style="height: 240px;"><canvas id="hero-test-canvas"></canvas></div>"#,
    );
    let markup = PageMarkup {
        canvas_id: "hero-test-canvas",
        hero_selector: "#hero-test .hero",
        ..PageMarkup::default()
    };
    let (window, document) = (window(), document());
    let canvas = html_element(&root, "#hero-test-canvas")
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    let banner = html_element(&root, ".hero");

    let particles = hero::attach(&window, &document, &canvas, &markup).unwrap();
    let inner_width = window.inner_width().unwrap().as_f64().unwrap();
    assert_eq!(canvas.width(), inner_width as u32);
    assert_eq!(canvas.height(), 240);
    assert_eq!(
        particles.borrow().particle_count(),
        (inner_width / 12.0).floor() as usize
    );
    let generation = particles.borrow().generation();

    banner.style().set_property("height", "300px").unwrap();
    window.dispatch_event(&Event::new("resize").unwrap()).unwrap();
    assert_eq!(canvas.height(), 300);
    assert_eq!(particles.borrow().height(), 300.0);
    assert_eq!(particles.borrow().generation(), generation + 1);

    assert!(!particles.borrow().has_pointer());
    window
        .dispatch_event(&MouseEvent::new("mousemove").unwrap())
        .unwrap();
    assert!(particles.borrow().has_pointer());
    // No related target: the pointer left the window
    window
        .dispatch_event(&MouseEvent::new("mouseout").unwrap())
        .unwrap();
    assert!(!particles.borrow().has_pointer());
    root.remove();
}
