//! Widget trait: type name, rendering, focus, downcasting.

use std::any::Any;

use crate::geometry::Region;
use crate::render::strip::Strip;

/// Core trait implemented by renderable widgets.
///
/// Object-safe: every method takes `&self`/`&mut self` and returns owned or
/// borrowed data, so widgets can be handled as `&dyn Widget`.
pub trait Widget {
    /// The type name for this widget (e.g. "VerticalStepper").
    fn widget_type(&self) -> &str;

    /// Render this widget's content into strips within the given region.
    ///
    /// The `region` is in absolute terminal cells. Strips must stay inside it.
    fn render(&self, region: Region) -> Vec<Strip>;

    /// Whether this widget can receive keyboard focus.
    fn can_focus(&self) -> bool {
        false
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::strip::CellStyle;

    struct Dot;

    impl Widget for Dot {
        fn widget_type(&self) -> &str {
            "Dot"
        }

        fn render(&self, region: Region) -> Vec<Strip> {
            let mut strip = Strip::new(region.y, region.x);
            strip.push('.', CellStyle::new());
            vec![strip]
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[test]
    fn defaults_and_object_safety() {
        let mut dot = Dot;
        let widget: &mut dyn Widget = &mut dot;
        assert_eq!(widget.widget_type(), "Dot");
        assert!(!widget.can_focus());
        assert_eq!(widget.render(Region::new(3, 4, 1, 1))[0].x_offset, 3);
        assert!(widget.as_any().downcast_ref::<Dot>().is_some());
        assert!(widget.as_any_mut().downcast_mut::<Dot>().is_some());
    }
}
