//! Apply stored sizes and bounds to GUI components.
//!
//! The toolkit itself is abstracted behind [ComponentSizer]. A restored size
//! is never allowed to shrink a component below its minimum size: each
//! dimension is clamped independently.

use configkit_codec::{Rect, Size};
use tracing::debug;

/// A GUI component that can be resized.
pub trait ComponentSizer {
    /// The smallest size the component can be laid out at.
    fn minimum_size(&self) -> Size;

    /// Whether the component is a top-level window.
    ///
    /// Windows are sized directly, other components through their preferred
    /// size so the enclosing layout stays in charge.
    fn is_window(&self) -> bool;

    /// Resizes the component directly.
    fn set_size(&mut self, size: Size);

    /// Sets the size the enclosing layout should give the component.
    fn set_preferred_size(&mut self, size: Size);

    /// Moves and resizes the component.
    fn set_bounds(&mut self, bounds: Rect);
}

fn clamp(minimum: Size, width: i32, height: i32) -> Size {
    Size::new(width.max(minimum.width), height.max(minimum.height))
}

/// Sets the size of `comp`, respecting its minimum size.
pub fn set_component_size(comp: &mut impl ComponentSizer, width: i32, height: i32) {
    let size = clamp(comp.minimum_size(), width, height);
    debug!(width = size.width, height = size.height, "sizing component");
    if comp.is_window() {
        comp.set_size(size);
    } else {
        comp.set_preferred_size(size);
    }
}

/// Sets the size of `comp` if a size was provided.
pub fn set_component_size_opt(comp: &mut impl ComponentSizer, size: Option<Size>) {
    if let Some(size) = size {
        set_component_size(comp, size.width, size.height);
    }
}

/// Sets the bounds of `comp`, respecting its minimum size.
///
/// The location is applied as given.
pub fn set_component_bounds(
    comp: &mut impl ComponentSizer,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
) {
    let size = clamp(comp.minimum_size(), width, height);
    debug!(x, y, width = size.width, height = size.height, "placing component");
    comp.set_bounds(Rect::new(x, y, size.width, size.height));
}

/// Sets the bounds of `comp` if bounds were provided.
pub fn set_component_bounds_opt(comp: &mut impl ComponentSizer, bounds: Option<Rect>) {
    if let Some(bounds) = bounds {
        set_component_bounds(comp, bounds.x, bounds.y, bounds.width, bounds.height);
    }
}
