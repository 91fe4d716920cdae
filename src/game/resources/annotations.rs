//! Annotation overlays drawn with the secondary button
//!
//! Purely visual: nothing here touches the position. Overlays are cleared
//! on any primary press and on reset.

use crate::game::types::BoardSquare;

/// Ellipse around one square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marker {
    pub square: BoardSquare,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arrow {
    pub start: BoardSquare,
    pub end: BoardSquare,
}

/// Markers and arrows in the order they were drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
    pub markers: Vec<Marker>,
    pub arrows: Vec<Arrow>,
    /// Square of the secondary press that may become an arrow on release
    pub arrow_anchor: Option<BoardSquare>,
}

impl Annotations {
    /// Records a marker on `square` and remembers it as a potential arrow start.
    pub fn press(&mut self, square: BoardSquare) {
        self.markers.push(Marker { square });
        self.arrow_anchor = Some(square);
    }

    /// Finishes a secondary gesture. Releasing on another square adds an
    /// arrow from the press square; the marker placed by the press stays.
    pub fn release(&mut self, square: Option<BoardSquare>) -> Option<Arrow> {
        let start = self.arrow_anchor.take()?;
        let end = square?;
        if start == end {
            return None;
        }
        let arrow = Arrow { start, end };
        self.arrows.push(arrow);
        Some(arrow)
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty() && self.arrows.is_empty()
    }

    pub fn clear(&mut self) {
        self.markers.clear();
        self.arrows.clear();
        self.arrow_anchor = None;
    }
}
