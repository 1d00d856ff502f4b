// crates/riskglobe-wasm/src/dom.rs

//! Mirrors a [`Scene`] into live SVG elements.

use riskglobe_core::detail::DETAILS_TITLE;
use riskglobe_core::scene::{COUNTRY_STROKE, OCEAN_STROKE, OCEAN_STROKE_WIDTH};
use riskglobe_core::Scene;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub const DETAILS_CLASS: &str = "country-details";

/// `.country-details` box: a fixed title plus one line of hover text.
///
/// With nothing hovered the line is empty, so the box's text content is
/// exactly the title. Dropping the panel takes it off the page.
pub struct DetailPanel {
    root: Element,
    line: Element,
}

impl DetailPanel {
    pub fn mount(document: &Document, parent: &Element) -> Result<Self, JsValue> {
        let root = document.create_element("div")?;
        root.set_class_name(DETAILS_CLASS);

        let title = document.create_element("h3")?;
        title.set_text_content(Some(DETAILS_TITLE));
        root.append_child(&title)?;

        let line = document.create_element("p")?;
        root.append_child(&line)?;

        parent.append_child(&root)?;
        Ok(Self { root, line })
    }

    pub fn show(&self, details: Option<&str>) {
        self.line.set_text_content(Some(details.unwrap_or_default()));
    }
}

impl Drop for DetailPanel {
    fn drop(&mut self) {
        self.root.remove();
    }
}

/// The `<svg>` tree for one scene; removed from the page on drop.
pub struct DomScene {
    svg: Element,
    ocean: Element,
    paths: Vec<Element>,
}

impl DomScene {
    pub fn mount(document: &Document, parent: &Element, scene: &Scene) -> Result<Self, JsValue> {
        let svg = svg_element(document, "svg")?;
        svg.set_attribute("width", &scene.width.to_string())?;
        svg.set_attribute("height", &scene.height.to_string())?;
        // Touch drags rotate the globe instead of scrolling the page.
        svg.set_attribute("style", "touch-action: none")?;

        let ocean = svg_element(document, "circle")?;
        ocean.set_attribute("fill", &scene.ocean.fill)?;
        ocean.set_attribute("stroke", OCEAN_STROKE)?;
        ocean.set_attribute("stroke-width", &OCEAN_STROKE_WIDTH.to_string())?;
        ocean.set_attribute("cx", &scene.ocean.cx.to_string())?;
        ocean.set_attribute("cy", &scene.ocean.cy.to_string())?;
        ocean.set_attribute("r", &scene.ocean.r.to_string())?;
        svg.append_child(&ocean)?;

        let map = svg_element(document, "g")?;
        let countries = svg_element(document, "g")?;
        countries.set_attribute("class", "countries")?;
        map.append_child(&countries)?;
        svg.append_child(&map)?;

        let style = format!(
            "stroke: {COUNTRY_STROKE}; stroke-width: {};",
            scene.stroke_width
        );
        let mut paths = Vec::with_capacity(scene.shapes.len());
        for shape in &scene.shapes {
            let path = svg_element(document, "path")?;
            path.set_attribute("class", &shape.class_name())?;
            path.set_attribute("d", &shape.d)?;
            path.set_attribute("fill", &shape.fill)?;
            path.set_attribute("style", &style)?;
            countries.append_child(&path)?;
            paths.push(path);
        }

        parent.append_child(&svg)?;
        Ok(Self { svg, ocean, paths })
    }

    pub fn svg(&self) -> &Element {
        &self.svg
    }

    /// Path elements in the same order as [`Scene::shapes`].
    pub fn paths(&self) -> &[Element] {
        &self.paths
    }

    pub fn redraw_paths(&self, scene: &Scene) -> Result<(), JsValue> {
        for (path, shape) in self.paths.iter().zip(&scene.shapes) {
            path.set_attribute("d", &shape.d)?;
        }
        Ok(())
    }

    pub fn resize_ocean(&self, scene: &Scene) -> Result<(), JsValue> {
        self.ocean.set_attribute("r", &scene.ocean.r.to_string())
    }
}

impl Drop for DomScene {
    fn drop(&mut self) {
        self.svg.remove();
    }
}

fn svg_element(document: &Document, name: &str) -> Result<Element, JsValue> {
    document.create_element_ns(Some(SVG_NS), name)
}
