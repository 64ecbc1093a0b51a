//! Tile list view - ordered tiles plus a fixed trailing add control

use crate::models::Tile;

/// One visible position in the dashboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot<'a> {
    Tile(&'a Tile),
    /// The add-affordance, always the last slot
    AddControl,
}

/// Ordered tiles with a dedicated footer slot for the add control.
///
/// Tiles keep server order on load and append order afterwards. The footer
/// is not stored among the tiles, so no mutation can move it.
#[derive(Clone, Debug, Default)]
pub struct TileListView {
    tiles: Vec<Tile>,
    selected: usize,
}

impl TileListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every tile, in the given order
    pub fn render_all(&mut self, tiles: Vec<Tile>) {
        self.tiles = tiles;
        self.clamp_selection();
    }

    /// Append one confirmed tile at the end. A selected add control stays
    /// selected.
    pub fn append_one(&mut self, tile: Tile) {
        let on_add_control = self.selected == self.tiles.len();
        self.tiles.push(tile);
        if on_add_control {
            self.selected = self.tiles.len();
        }
    }

    /// Remove the tile named `name`. Returns false when no tile matched.
    pub fn remove_one(&mut self, name: &str) -> bool {
        match self.tiles.iter().position(|t| t.name == name) {
            Some(index) => {
                self.tiles.remove(index);
                if self.selected > index {
                    self.selected -= 1;
                }
                self.clamp_selection();
                true
            }
            None => false,
        }
    }

    /// Every slot in display order, add control last
    pub fn slots(&self) -> impl Iterator<Item = Slot<'_>> {
        self.tiles
            .iter()
            .map(Slot::Tile)
            .chain(std::iter::once(Slot::AddControl))
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_slot(&self) -> Slot<'_> {
        match self.tiles.get(self.selected) {
            Some(tile) => Slot::Tile(tile),
            None => Slot::AddControl,
        }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.slot_count();
    }

    pub fn select_prev(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.slot_count() - 1);
    }

    fn slot_count(&self) -> usize {
        self.tiles.len() + 1
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.slot_count() - 1);
    }
}
