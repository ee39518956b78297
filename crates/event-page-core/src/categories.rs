//! Category Filter
//!
//! Works on attribute snapshots of the project tiles and category
//! description blocks and returns how each should be displayed.

pub const FULL_OPACITY: f64 = 1.0;

/// `category-id` attribute of a tile or description block, if any
pub type CategorySnapshot = Option<String>;

/// Display state for every tile and block, in snapshot order
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryView {
    pub tile_opacity: Vec<f64>,
    pub block_visible: Vec<bool>,
}

/// Category selection read from a selector button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Category(String),
}

impl Selection {
    /// A missing or empty input id selects every category
    pub fn from_input_id(id: Option<&str>) -> Self {
        match id {
            Some(id) if !id.is_empty() => Selection::Category(id.to_string()),
            _ => Selection::All,
        }
    }
}

/// Dim or highlight tiles and show the matching description block
pub fn filter_categories(
    selection: &Selection,
    tiles: &[CategorySnapshot],
    blocks: &[CategorySnapshot],
    dimmed_opacity: f64,
) -> CategoryView {
    match selection {
        Selection::Category(id) => {
            let matches = |attr: &CategorySnapshot| attr.as_deref() == Some(id.as_str());
            CategoryView {
                tile_opacity: tiles
                    .iter()
                    .map(|t| if matches(t) { FULL_OPACITY } else { dimmed_opacity })
                    .collect(),
                block_visible: blocks.iter().map(matches).collect(),
            }
        }
        Selection::All => CategoryView {
            tile_opacity: vec![FULL_OPACITY; tiles.len()],
            block_visible: vec![false; blocks.len()],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_DIMMED_OPACITY;

    fn snap(ids: &[Option<&str>]) -> Vec<CategorySnapshot> {
        ids.iter().map(|id| id.map(str::to_string)).collect()
    }

    #[test]
    fn test_selection_from_input_id() {
        assert_eq!(Selection::from_input_id(Some("cat-42")), Selection::Category("cat-42".into()));
        assert_eq!(Selection::from_input_id(Some("")), Selection::All);
        assert_eq!(Selection::from_input_id(None), Selection::All);
    }

    #[test]
    fn test_select_category() {
        let tiles = snap(&[Some("cat-42"), Some("cat-7"), None, Some("cat-42")]);
        let blocks = snap(&[Some("cat-7"), Some("cat-42")]);
        let view = filter_categories(&Selection::Category("cat-42".into()), &tiles, &blocks, DEFAULT_DIMMED_OPACITY);
        assert_eq!(view.tile_opacity, vec![1.0, 0.4, 0.4, 1.0]);
        assert_eq!(view.block_visible, vec![false, true]);
    }

    #[test]
    fn test_select_all_restores() {
        let tiles = snap(&[Some("cat-42"), Some("cat-7")]);
        let blocks = snap(&[Some("cat-7"), Some("cat-42")]);
        let view = filter_categories(&Selection::All, &tiles, &blocks, DEFAULT_DIMMED_OPACITY);
        assert_eq!(view.tile_opacity, vec![1.0, 1.0]);
        assert_eq!(view.block_visible, vec![false, false]);
    }

    #[test]
    fn test_unknown_category_dims_everything() {
        let tiles = snap(&[Some("a"), Some("b")]);
        let view = filter_categories(&Selection::Category("zzz".into()), &tiles, &[], 0.25);
        assert_eq!(view.tile_opacity, vec![0.25, 0.25]);
        assert!(view.block_visible.is_empty());
    }
}
