use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{GraphCanvasState, NODE_HEIGHT, NODE_WIDTH};
use crate::model::hierarchy::{GraphEdge, GraphNode};
use crate::theme::Theme;

pub fn render(state: &GraphCanvasState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	ctx.set_fill_style_str(theme.background);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	for edge in &state.graph.edges {
		draw_edge(state, edge, ctx, theme);
	}
	for node in &state.graph.nodes {
		draw_node(node, ctx, theme);
	}
	ctx.restore();
}

fn node_position(state: &GraphCanvasState, id: &str) -> Option<(f64, f64)> {
	state
		.graph
		.nodes
		.iter()
		.find(|node| node.id == id)
		.map(|node| node.position)
}

fn draw_edge(
	state: &GraphCanvasState,
	edge: &GraphEdge,
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
) {
	let (Some((sx, sy)), Some((tx, ty))) = (
		node_position(state, &edge.source),
		node_position(state, &edge.target),
	) else {
		return;
	};
	// Anchor on the facing box borders, not the centers.
	let (x1, y1) = (sx, sy + NODE_HEIGHT / 2.0);
	let (x2, y2) = (tx, ty - NODE_HEIGHT / 2.0);
	let (dx, dy) = (x2 - x1, y2 - y1);
	let dist = (dx * dx + dy * dy).sqrt();
	if dist < 0.001 {
		return;
	}
	let (ux, uy) = (dx / dist, dy / dist);
	let arrow_size = 10.0;

	ctx.set_stroke_style_str(theme.text_secondary);
	ctx.set_line_width(1.5);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(6.0),
		&JsValue::from_f64(4.0),
	));
	ctx.begin_path();
	ctx.move_to(x1, y1);
	ctx.line_to(x2 - ux * arrow_size, y2 - uy * arrow_size);
	ctx.stroke();
	let _ = ctx.set_line_dash(&js_sys::Array::new());

	ctx.set_fill_style_str(theme.text_secondary);
	let (back_x, back_y) = (x2 - ux * arrow_size, y2 - uy * arrow_size);
	let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
	ctx.begin_path();
	ctx.move_to(x2, y2);
	ctx.line_to(back_x + px, back_y + py);
	ctx.line_to(back_x - px, back_y - py);
	ctx.close_path();
	ctx.fill();

	if let Some(label) = &edge.label {
		let (mx, my) = ((x1 + x2) / 2.0, (y1 + y2) / 2.0);
		ctx.set_font("13px sans-serif");
		let width = ctx.measure_text(label).map(|m| m.width()).unwrap_or(60.0);
		ctx.set_fill_style_str(theme.surface);
		ctx.fill_rect(mx - width / 2.0 - 4.0, my - 10.0, width + 8.0, 20.0);
		ctx.set_fill_style_str(theme.text_primary);
		ctx.set_text_align("center");
		let _ = ctx.fill_text(label, mx, my + 4.0);
		ctx.set_text_align("start");
	}
}

fn draw_node(node: &GraphNode, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let (x, y) = node.position;
	let (left, top) = (x - NODE_WIDTH / 2.0, y - NODE_HEIGHT / 2.0);

	ctx.set_fill_style_str(theme.surface);
	ctx.set_stroke_style_str(theme.text_secondary);
	ctx.set_line_width(1.0);
	rounded_rect(ctx, left, top, NODE_WIDTH, NODE_HEIGHT, 8.0);
	ctx.fill();
	ctx.stroke();

	ctx.set_text_align("center");
	ctx.set_fill_style_str(theme.text_primary);
	ctx.set_font("14px sans-serif");
	let _ = ctx.fill_text(&node.id, x, top + 24.0);

	let label = node.role.label();
	ctx.set_font("11px sans-serif");
	let chip_width = ctx.measure_text(label).map(|m| m.width()).unwrap_or(80.0) + 16.0;
	ctx.set_fill_style_str(theme.role_color(node.role));
	rounded_rect(ctx, x - chip_width / 2.0, top + 34.0, chip_width, 18.0, 9.0);
	ctx.fill();
	ctx.set_fill_style_str(theme.surface);
	let _ = ctx.fill_text(label, x, top + 47.0);
	ctx.set_text_align("start");
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
	ctx.begin_path();
	ctx.move_to(x + r, y);
	let _ = ctx.arc_to(x + w, y, x + w, y + h, r);
	let _ = ctx.arc_to(x + w, y + h, x, y + h, r);
	let _ = ctx.arc_to(x, y + h, x, y, r);
	let _ = ctx.arc_to(x, y, x + w, y, r);
	ctx.close_path();
}
