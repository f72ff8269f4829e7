use indexmap::IndexMap;

/// Number of nodes per grid row.
pub const COLUMNS: usize = 3;
/// Horizontal distance between neighbouring columns.
pub const X_PITCH: u32 = 200;
/// Vertical distance between neighbouring rows.
pub const Y_PITCH: u32 = 120;
/// Position of the first grid cell.
pub const ORIGIN: (u32, u32) = (50, 80);

/// Top-left corner of a node on the diagram canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPosition {
    pub x: u32,
    pub y: u32,
}

impl LayoutPosition {
    /// Position of the `index`-th node in the grid.
    ///
    /// Coordinates saturate at `u32::MAX` instead of overflowing.
    pub fn for_index(index: usize) -> Self {
        let column = (index % COLUMNS) as u32;
        let row = u32::try_from(index / COLUMNS).unwrap_or(u32::MAX);
        Self {
            x: ORIGIN.0 + column * X_PITCH,
            y: ORIGIN.1.saturating_add(row.saturating_mul(Y_PITCH)),
        }
    }
}

/// Assigns grid positions in the given order.
///
/// Depends only on the order and count of `ids`. Repeated ids keep the
/// position of their first occurrence.
pub fn layout<'a, I>(ids: I) -> IndexMap<String, LayoutPosition>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut positions = IndexMap::new();
    for (index, id) in ids.into_iter().enumerate() {
        positions
            .entry(id.to_string())
            .or_insert_with(|| LayoutPosition::for_index(index));
    }
    positions
}
