//! Tunables for the particle field and the markup contract of the page.

use crate::color::Color;

/// Physics and drawing constants for [`ParticleField`](crate::field::ParticleField).
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// One particle per this many pixels of viewport width.
    pub density_divisor: f64,
    /// Velocity components are drawn from `[-max_speed, max_speed]` px/frame.
    pub max_speed: f64,
    pub min_size: f64,
    pub max_size: f64,
    pub min_opacity: f64,
    pub max_opacity: f64,
    /// Distance under which the pointer pushes particles away.
    pub influence_radius: f64,
    /// Pixels moved per frame at zero distance from the pointer.
    pub push_strength: f64,
    /// Particles closer than this get a connecting line.
    pub link_distance: f64,
    pub link_base_alpha: f64,
    pub link_alpha_falloff: f64,
    pub link_width: f64,
    pub link_color: Color,
    /// Each particle picks one of these with equal probability.
    pub palette: [Color; 2],
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            density_divisor: 12.0,
            max_speed: 0.75,
            min_size: 1.0,
            max_size: 3.0,
            min_opacity: 0.1,
            max_opacity: 0.6,
            influence_radius: 150.0,
            push_strength: 3.0,
            link_distance: 120.0,
            link_base_alpha: 0.15,
            link_alpha_falloff: 800.0,
            link_width: 0.5,
            link_color: Color::WHITE,
            palette: [Color::GOLD, Color::WHITE],
        }
    }
}

impl FieldConfig {
    pub fn particle_count(&self, viewport_width: f64) -> usize {
        if viewport_width <= 0.0 || self.density_divisor <= 0.0 {
            return 0;
        }
        (viewport_width / self.density_divisor).floor() as usize
    }

    pub fn link_alpha(&self, distance: f64) -> f64 {
        self.link_base_alpha - distance / self.link_alpha_falloff
    }
}

/// Ids, selectors and class names the page markup is expected to use.
#[derive(Clone, Debug, PartialEq)]
pub struct PageMarkup {
    pub canvas_id: &'static str,
    pub hero_selector: &'static str,
    pub filter_button_selector: &'static str,
    pub card_selector: &'static str,
    pub menu_button_id: &'static str,
    pub menu_id: &'static str,
    pub tab_button_selector: &'static str,
    pub tab_panel_selector: &'static str,
    pub nav_link_selector: &'static str,
    pub anchor_selector: &'static str,
    pub ticker_selector: &'static str,
    pub timestamp_id: &'static str,

    pub filter_attr: &'static str,
    pub category_attr: &'static str,
    pub tab_attr: &'static str,

    pub active_class: &'static str,
    pub show_class: &'static str,
    pub hide_class: &'static str,

    pub home_page: &'static str,
    pub scroll_offset: f64,
    pub ticker_speed: f64,
    pub ticker_keyframes: &'static str,
}

impl Default for PageMarkup {
    fn default() -> Self {
        PageMarkup {
            canvas_id: "hero-canvas",
            hero_selector: ".hero",
            filter_button_selector: ".filter-btn",
            card_selector: "#flagship .flagship-card",
            menu_button_id: "mobile-menu-btn",
            menu_id: "navbar-menu",
            tab_button_selector: ".tab-btn",
            tab_panel_selector: ".tab-content",
            nav_link_selector: ".navbar-link",
            anchor_selector: "a[href^=\"#\"]",
            ticker_selector: ".sponsors-track",
            timestamp_id: "form-timestamp",

            filter_attr: "data-filter",
            category_attr: "data-category",
            tab_attr: "data-tab",

            active_class: "active",
            show_class: "show",
            hide_class: "hide",

            home_page: "index.html",
            scroll_offset: 100.0,
            ticker_speed: 50.0,
            ticker_keyframes: "scrollTicker",
        }
    }
}
