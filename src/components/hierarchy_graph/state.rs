use crate::model::hierarchy::{GraphNode, HierarchyGraph};

/// Drawn size of a node box, in graph space.
pub const NODE_WIDTH: f64 = 260.0;
pub const NODE_HEIGHT: f64 = 64.0;

const FIT_MARGIN: f64 = 40.0;

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Canvas-side state: the built graph plus the pan/zoom transform.
/// Positions never change here; layout belongs to the graph builder.
pub struct GraphCanvasState {
	pub graph: HierarchyGraph,
	pub transform: ViewTransform,
	pub pan: PanState,
	pub width: f64,
	pub height: f64,
}

impl GraphCanvasState {
	pub fn new(graph: HierarchyGraph, width: f64, height: f64) -> Self {
		let transform = fit_transform(&graph.nodes, width, height);
		Self {
			graph,
			transform,
			pan: PanState::default(),
			width,
			height,
		}
	}
}

/// Center the graph in the viewport, zooming out if it overflows.
pub fn fit_transform(nodes: &[GraphNode], width: f64, height: f64) -> ViewTransform {
	if nodes.is_empty() {
		return ViewTransform {
			x: width / 2.0,
			y: height / 2.0,
			k: 1.0,
		};
	}

	let (mut min_x, mut max_x) = (f64::MAX, f64::MIN);
	let (mut min_y, mut max_y) = (f64::MAX, f64::MIN);
	for node in nodes {
		let (x, y) = node.position;
		min_x = min_x.min(x - NODE_WIDTH / 2.0);
		max_x = max_x.max(x + NODE_WIDTH / 2.0);
		min_y = min_y.min(y - NODE_HEIGHT / 2.0);
		max_y = max_y.max(y + NODE_HEIGHT / 2.0);
	}

	let k = ((width - FIT_MARGIN) / (max_x - min_x))
		.min((height - FIT_MARGIN) / (max_y - min_y))
		.clamp(0.1, 1.0);
	let (cx, cy) = ((min_x + max_x) / 2.0, (min_y + max_y) / 2.0);
	ViewTransform {
		x: width / 2.0 - cx * k,
		y: height / 2.0 - cy * k,
		k,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::hierarchy::NodeRole;

	fn node(x: f64, y: f64) -> GraphNode {
		GraphNode {
			id: "n".to_owned(),
			role: NodeRole::Current,
			position: (x, y),
		}
	}

	#[test]
	fn empty_graph_centers_the_origin() {
		let t = fit_transform(&[], 800.0, 500.0);
		assert_eq!((t.x, t.y, t.k), (400.0, 250.0, 1.0));
	}

	#[test]
	fn fit_maps_the_bounds_center_to_the_viewport_center() {
		let nodes = vec![node(-700.0, 200.0), node(0.0, 0.0), node(700.0, 200.0)];
		let t = fit_transform(&nodes, 800.0, 500.0);
		// Bounds center in graph space.
		let (cx, cy) = (0.0, 100.0);
		assert!((cx * t.k + t.x - 400.0).abs() < 1e-9);
		assert!((cy * t.k + t.y - 250.0).abs() < 1e-9);
	}

	#[test]
	fn wide_graphs_zoom_out_and_never_past_full_scale() {
		let wide = vec![node(-2000.0, 0.0), node(2000.0, 0.0)];
		assert!(fit_transform(&wide, 800.0, 500.0).k < 1.0);

		let single = vec![node(0.0, 0.0)];
		assert_eq!(fit_transform(&single, 800.0, 500.0).k, 1.0);
	}
}
