//! Category Filter Binder
//!
//! Click handlers on the category selector buttons that dim project tiles
//! outside the selected category and show its description block.

use event_page_core::categories::{filter_categories, CategorySnapshot, Selection};
use web_sys::Element;

use crate::dom;

const SELECTOR_BUTTONS: &str = ".nav-categories .btn-group label";
const PROJECT_TILES: &str = ".honeycomb .project";
const DESCRIPTION_BLOCKS: &str = ".category-info div";
const CATEGORY_ATTRIBUTE: &str = "category-id";

pub fn attach(dimmed_opacity: f64) {
    for label in dom::query_all(SELECTOR_BUTTONS) {
        let button = label.clone();
        dom::listen(&label, "click", move |_| {
            let input_id = button.query_selector("input").ok().flatten().map(|input| input.id());
            apply_selection(&Selection::from_input_id(input_id.as_deref()), dimmed_opacity);
        });
    }
}

fn snapshot(elements: &[Element]) -> Vec<CategorySnapshot> {
    elements.iter().map(|el| el.get_attribute(CATEGORY_ATTRIBUTE)).collect()
}

fn apply_selection(selection: &Selection, dimmed_opacity: f64) {
    let tiles = dom::query_all(PROJECT_TILES);
    let blocks = dom::query_all(DESCRIPTION_BLOCKS);
    let view = filter_categories(selection, &snapshot(&tiles), &snapshot(&blocks), dimmed_opacity);

    for (tile, opacity) in tiles.iter().zip(view.tile_opacity) {
        dom::set_style(tile, "opacity", &opacity.to_string());
    }
    for (block, visible) in blocks.iter().zip(view.block_visible) {
        dom::set_style(block, "display", if visible { "block" } else { "none" });
    }
}
