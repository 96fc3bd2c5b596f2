mod edge;
mod node;

use anyhow::{anyhow, Result};
use eframe::{run_native, App, CreationContext};
use egui::{Context, Style, Visuals};
use egui_graphs::{GraphView, SettingsInteraction, SettingsStyle};
use petgraph::prelude::StableUnGraph;
use petgraph::stable_graph::{DefaultIx, NodeIndex};
use petgraph::Undirected;

use machine_separators::{Disconnection, WeightedGraph};

use crate::visualization::edge::{CustomEdgeShape, EdgeData};
use crate::visualization::node::{CustomNodeShape, NodeData};

type DisplayGraph =
    egui_graphs::Graph<NodeData, EdgeData, Undirected, DefaultIx, CustomNodeShape, CustomEdgeShape>;

struct GraphApp {
    graph: DisplayGraph,
}

impl GraphApp {
    fn new(graph: DisplayGraph, _: &CreationContext<'_>) -> Self {
        Self { graph }
    }
}

impl App for GraphApp {
    fn update(&mut self, ctx: &Context, _: &mut eframe::Frame) {
        let settings_style = &SettingsStyle::new().with_labels_always(true);
        let interaction_settings = &SettingsInteraction::new()
            .with_dragging_enabled(true)
            .with_node_clicking_enabled(true)
            .with_node_selection_enabled(true);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add(
                &mut GraphView::<_, _, _, _, CustomNodeShape, CustomEdgeShape>::new(
                    &mut self.graph,
                )
                .with_styles(settings_style)
                .with_interactions(interaction_settings),
            );
        });
    }
}

/// The uncut graph, with machines coloured and cut edges highlighted.
fn generate_graph(graph: &WeightedGraph, machines: &[usize], disconnection: &Disconnection) -> DisplayGraph {
    let mut g = StableUnGraph::with_capacity(graph.order(), graph.edge_count());

    (0..graph.order()).for_each(|node| {
        if machines.contains(&node) {
            g.add_node(NodeData::new_machine());
        } else {
            g.add_node(NodeData::new());
        }
    });

    graph.edges().for_each(|(u, v, weight)| {
        let is_cut = disconnection.contains(u, v);
        g.add_edge(NodeIndex::new(u), NodeIndex::new(v), EdgeData::new(weight, is_cut));
    });

    egui_graphs::Graph::from(&g)
}

pub fn draw_graph(graph: &WeightedGraph, machines: &[usize], disconnection: &Disconnection) -> Result<()> {
    let display_graph = generate_graph(graph, machines, disconnection);
    let native_options = eframe::NativeOptions::default();
    run_native(
        "Machine Separators",
        native_options,
        Box::new(|cc| {
            // Set to dark mode always
            let style = Style {
                visuals: Visuals::dark(),
                ..Style::default()
            };
            cc.egui_ctx.set_style(style);
            Box::new(GraphApp::new(display_graph, cc))
        }),
    )
    .map_err(|err| anyhow!("failed to open window: {err}"))
}
