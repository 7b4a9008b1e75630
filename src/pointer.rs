//! Pointer routing for floating panels
//!
//! Turns raw pointer events into messages using the panel hit test.
//! Panels are tested topmost first, so an overlapped panel never steals a
//! press meant for the one above it.

use crate::commands::Cmd;
use crate::geometry::Point;
use crate::messages::{DragMsg, Msg, PanelMsg};
use crate::model::Workbench;
use crate::panel::PanelHit;
use crate::update::update;

/// A raw pointer event in window coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Down(p) | PointerEvent::Move(p) | PointerEvent::Up(p) => p,
        }
    }
}

/// Map a pointer event to the message it should produce, if any
pub fn route_pointer(model: &Workbench, event: PointerEvent) -> Option<Msg> {
    match event {
        PointerEvent::Down(point) => {
            let (tool, hit) = model.panel_at(point)?;
            let msg = match hit {
                PanelHit::Header => PanelMsg::BeginMove {
                    tool,
                    pointer: point,
                },
                PanelHit::CloseButton => PanelMsg::Close(tool),
                PanelHit::Resize(edge) => PanelMsg::BeginResize {
                    tool,
                    edge,
                    pointer: point,
                },
                PanelHit::Body => PanelMsg::Focus(tool),
            };
            Some(Msg::Panel(msg))
        }

        PointerEvent::Move(point) => model
            .panels
            .interaction()
            .map(|_| Msg::Panel(PanelMsg::PointerMove(point))),

        PointerEvent::Up(_) => {
            if model.panels.interaction().is_some() {
                Some(Msg::Panel(PanelMsg::PointerUp))
            } else if model.drag.is_dragging() {
                Some(Msg::Drag(DragMsg::Release))
            } else {
                None
            }
        }
    }
}

/// Route a pointer event and run the resulting message through `update`
///
/// Starting a move or resize raises the panel as part of the gesture.
pub fn dispatch(model: &mut Workbench, event: PointerEvent) -> Option<Cmd> {
    let msg = route_pointer(model, event)?;
    update(model, msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::{EntryPoint, ResizeEdge};
    use crate::tool::ToolId;

    fn workbench_with_calculator() -> Workbench {
        let mut model = Workbench::in_memory();
        model.panels.open_from(ToolId::Calculator, EntryPoint::Sidebar);
        model
    }

    #[test]
    fn test_press_on_header_begins_move() {
        let model = workbench_with_calculator();
        // Calculator frame starts at (300, 46); header is the top strip
        let msg = route_pointer(&model, PointerEvent::Down(Point::new(350.0, 56.0)));
        assert_eq!(
            msg,
            Some(Msg::Panel(PanelMsg::BeginMove {
                tool: ToolId::Calculator,
                pointer: Point::new(350.0, 56.0),
            }))
        );
    }

    #[test]
    fn test_press_on_corner_begins_resize() {
        let model = workbench_with_calculator();
        let msg = route_pointer(&model, PointerEvent::Down(Point::new(698.0, 544.0)));
        assert!(matches!(
            msg,
            Some(Msg::Panel(PanelMsg::BeginResize {
                edge: ResizeEdge::SouthEast,
                ..
            }))
        ));
    }

    #[test]
    fn test_press_outside_panels_is_ignored() {
        let model = workbench_with_calculator();
        assert_eq!(
            route_pointer(&model, PointerEvent::Down(Point::new(5.0, 5.0))),
            None
        );
    }

    #[test]
    fn test_move_without_interaction_is_ignored() {
        let model = workbench_with_calculator();
        assert_eq!(
            route_pointer(&model, PointerEvent::Move(Point::new(400.0, 400.0))),
            None
        );
    }

    #[test]
    fn test_header_drag_moves_panel() {
        let mut model = workbench_with_calculator();
        dispatch(&mut model, PointerEvent::Down(Point::new(350.0, 56.0)));
        dispatch(&mut model, PointerEvent::Move(Point::new(400.0, 106.0)));
        dispatch(&mut model, PointerEvent::Up(Point::new(400.0, 106.0)));

        let geometry = model.panels.geometry(ToolId::Calculator).copied();
        let geometry = geometry.map(|g| (g.x, g.y, g.width, g.height));
        assert_eq!(geometry, Some((350.0, 96.0, 400.0, 500.0)));
        assert!(model.panels.interaction().is_none());
    }

    #[test]
    fn test_press_on_body_raises_lower_panel() {
        let mut model = workbench_with_calculator();
        model
            .panels
            .open_from(ToolId::ComparisonChart, EntryPoint::Sidebar);
        assert_eq!(model.panels.topmost(), Some(ToolId::ComparisonChart));

        // Lower-left of the calculator, left of where the chart starts
        dispatch(&mut model, PointerEvent::Down(Point::new(310.0, 516.0)));
        assert_eq!(model.panels.topmost(), Some(ToolId::Calculator));
        assert_eq!(
            model.panels.geometry(ToolId::Calculator).map(|g| g.z_index),
            Some(32)
        );
    }

    #[test]
    fn test_release_ends_drag_gesture() {
        use crate::dnd::{DragPayload, DropContainer};
        use crate::tool::ToolLocation;

        let mut model = Workbench::in_memory();
        model.drag.begin(
            DragPayload::Tool(ToolId::Calculator),
            DropContainer::Tools(ToolLocation::Sidebar),
            0,
            Point::new(10.0, 10.0),
        );
        assert_eq!(
            route_pointer(&model, PointerEvent::Up(Point::new(10.0, 10.0))),
            Some(Msg::Drag(DragMsg::Release))
        );
        dispatch(&mut model, PointerEvent::Up(Point::new(10.0, 10.0)));
        assert!(!model.drag.is_dragging());
    }
}
