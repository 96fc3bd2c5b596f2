use eframe::emath::Pos2;
use eframe::epaint::{FontFamily, FontId, Shape, TextShape};
use egui::{Color32, Stroke};
use egui_graphs::{DisplayEdge, DisplayNode, DrawContext, EdgeProps, Node};
use petgraph::stable_graph::IndexType;
use petgraph::EdgeType;

use machine_separators::Weight;

pub(crate) trait CutInfo {
    fn weight(&self) -> Weight;
    fn is_cut(&self) -> bool;
}

#[derive(Clone, Debug)]
pub(crate) struct EdgeData {
    weight: Weight,
    is_cut: bool,
}

impl EdgeData {
    pub(crate) fn new(weight: Weight, is_cut: bool) -> Self {
        Self { weight, is_cut }
    }
}

impl CutInfo for EdgeData {
    fn weight(&self) -> Weight {
        self.weight
    }

    fn is_cut(&self) -> bool {
        self.is_cut
    }
}

const CUT: Color32 = Color32::from_rgb(0x90, 0xEE, 0x90);

/// Straight undirected edge with its weight written at the midpoint.
#[derive(Clone)]
pub(crate) struct CustomEdgeShape {
    selected: bool,
    width: f32,
    weight: Weight,
    is_cut: bool,
}

impl<E: Clone + CutInfo> From<EdgeProps<E>> for CustomEdgeShape {
    fn from(edge_props: EdgeProps<E>) -> Self {
        Self {
            selected: edge_props.selected,
            width: 2.,
            weight: edge_props.payload.weight(),
            is_cut: edge_props.payload.is_cut(),
        }
    }
}

impl<N: Clone, E: Clone + CutInfo, Ty: EdgeType, Ix: IndexType, D: DisplayNode<N, E, Ty, Ix>>
    DisplayEdge<N, E, Ty, Ix, D> for CustomEdgeShape
{
    fn shapes(
        &mut self,
        start_node: &Node<N, E, Ty, Ix, D>,
        end_node: &Node<N, E, Ty, Ix, D>,
        ctx: &DrawContext,
    ) -> Vec<Shape> {
        let color = match (self.is_cut, self.selected) {
            (true, _) => CUT,
            (false, true) => ctx.ctx.style().visuals.widgets.active.fg_stroke.color,
            (false, false) => ctx.ctx.style().visuals.widgets.inactive.fg_stroke.color,
        };
        let stroke = Stroke::new(ctx.meta.canvas_to_screen_size(self.width), color);

        let dir = (end_node.location() - start_node.location()).normalized();
        let start = ctx
            .meta
            .canvas_to_screen_pos(start_node.display().closest_boundary_point(dir));
        let end = ctx
            .meta
            .canvas_to_screen_pos(end_node.display().closest_boundary_point(-dir));

        let galley = ctx.ctx.fonts(|f| {
            f.layout_no_wrap(
                self.weight.to_string(),
                FontId::new(ctx.meta.canvas_to_screen_size(4.), FontFamily::Monospace),
                color,
            )
        });
        let middle = Pos2::new((start.x + end.x) / 2., (start.y + end.y) / 2.);
        let label_pos = Pos2::new(middle.x - galley.size().x / 2., middle.y - galley.size().y);

        vec![
            Shape::line_segment([start, end], stroke),
            TextShape::new(label_pos, galley, color).into(),
        ]
    }

    fn update(&mut self, state: &EdgeProps<E>) {
        self.selected = state.selected;
        self.weight = state.payload.weight();
        self.is_cut = state.payload.is_cut();
    }

    fn is_inside(
        &self,
        start: &Node<N, E, Ty, Ix, D>,
        end: &Node<N, E, Ty, Ix, D>,
        pos: Pos2,
    ) -> bool {
        distance_segment_to_point(start.location(), end.location(), pos) <= self.width
    }
}

fn distance_segment_to_point(a: Pos2, b: Pos2, point: Pos2) -> f32 {
    let ab = b - a;
    let length_sq = ab.dot(ab);
    if length_sq == 0. {
        return (point - a).length();
    }
    let t = ((point - a).dot(ab) / length_sq).clamp(0., 1.);
    (point - (a + ab * t)).length()
}
