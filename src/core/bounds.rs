use crate::core::models::Vec2;

/// A bounding box with one corner fixed at 0,0 and assumed to have positive extent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundsOriginRoot {
    pub height: i32,
    pub width: i32,
}

impl BoundsOriginRoot {
    pub fn new(height: i32, width: i32) -> BoundsOriginRoot {
        BoundsOriginRoot { height, width }
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        pos.i >= 0 && pos.i < self.height && pos.j >= 0 && pos.j < self.width
    }

    pub fn area(&self) -> i32 {
        self.width * self.height
    }

    /// Every position inside the bounds, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Vec2> + use<> {
        let width = self.width;
        (0..self.height).flat_map(move |i| (0..width).map(move |j| Vec2 { i, j }))
    }
}
