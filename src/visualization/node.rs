use eframe::emath::{Pos2, Vec2};
use eframe::epaint::{CircleShape, FontFamily, FontId, Shape, Stroke, TextShape};
use egui::Color32;
use egui_graphs::{DisplayNode, DrawContext, NodeProps};
use petgraph::stable_graph::IndexType;
use petgraph::EdgeType;

pub(crate) trait MachineInfo {
    fn is_machine(&self) -> bool;
}

#[derive(Clone, Debug)]
pub(crate) struct NodeData {
    is_machine: bool,
}

impl NodeData {
    pub(crate) fn new() -> Self {
        Self { is_machine: false }
    }

    pub(crate) fn new_machine() -> Self {
        Self { is_machine: true }
    }
}

impl MachineInfo for NodeData {
    fn is_machine(&self) -> bool {
        self.is_machine
    }
}

const MACHINE: Color32 = Color32::from_rgb(0xFF, 0x80, 0x80);
const MACHINE_INTERACTED: Color32 = Color32::from_rgb(0xFF, 0xB0, 0xB0);

#[derive(Clone)]
pub(crate) struct CustomNodeShape {
    pos: Pos2,
    label_text: String,
    selected: bool,
    dragged: bool,

    radius: f32,
    is_machine: bool,
}

impl<N: Clone + MachineInfo> From<NodeProps<N>> for CustomNodeShape {
    fn from(node_props: NodeProps<N>) -> Self {
        Self {
            pos: node_props.location,
            label_text: node_props.label.to_string(),
            selected: node_props.selected,
            dragged: node_props.dragged,
            radius: 5.0,
            is_machine: node_props.payload.is_machine(),
        }
    }
}

impl<N: Clone + MachineInfo, E: Clone, Ty: EdgeType, Ix: IndexType> DisplayNode<N, E, Ty, Ix>
    for CustomNodeShape
{
    fn closest_boundary_point(&self, dir: Vec2) -> Pos2 {
        self.pos + dir.normalized() * self.radius
    }

    fn shapes(&mut self, ctx: &DrawContext) -> Vec<Shape> {
        let is_interacted = self.selected || self.dragged;

        let color = match (self.is_machine, is_interacted) {
            (true, true) => MACHINE_INTERACTED,
            (true, false) => MACHINE,
            (false, true) => ctx.ctx.style().visuals.widgets.active.fg_stroke.color,
            (false, false) => ctx.ctx.style().visuals.widgets.inactive.fg_stroke.color,
        };

        let center = ctx.meta.canvas_to_screen_pos(self.pos);
        let radius = ctx.meta.canvas_to_screen_size(self.radius);
        let circle = CircleShape {
            center,
            radius,
            fill: color,
            stroke: Stroke::default(),
        };

        let galley = ctx.ctx.fonts(|f| {
            f.layout_no_wrap(
                self.label_text.clone(),
                FontId::new(radius, FontFamily::Monospace),
                Color32::BLACK,
            )
        });

        // node id in the middle of the circle
        let label_pos = Pos2::new(
            center.x - galley.size().x / 2.,
            center.y - galley.size().y / 2.,
        );

        vec![
            circle.into(),
            TextShape::new(label_pos, galley, Color32::BLACK).into(),
        ]
    }

    fn update(&mut self, state: &NodeProps<N>) {
        self.pos = state.location;
        self.label_text = state.label.to_string();
        self.selected = state.selected;
        self.dragged = state.dragged;
        self.is_machine = state.payload.is_machine();
    }

    fn is_inside(&self, pos: Pos2) -> bool {
        (pos - self.pos).length() <= self.radius
    }
}
