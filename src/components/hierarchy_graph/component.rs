use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::render;
use super::state::GraphCanvasState;
use crate::model::hierarchy::HierarchyGraph;
use crate::theme::Theme;

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Canvas view of a profile hierarchy graph.
///
/// Node positions come from the graph itself; the canvas only fits the
/// view, pans on background drag and zooms on the wheel.
#[component]
pub fn HierarchyGraphCanvas(
	#[prop(into)] graph: Signal<HierarchyGraph>,
	#[prop(default = 900.0)] width: f64,
	#[prop(default = 500.0)] height: f64,
) -> impl IntoView {
	let theme = use_context::<Theme>().unwrap_or_default();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<GraphCanvasState>>> = Rc::new(RefCell::new(None));

	let draw = {
		let state = state.clone();
		let theme = theme.clone();
		move || {
			let Some(canvas) = canvas_ref.get_untracked() else {
				return;
			};
			let canvas: HtmlCanvasElement = canvas.into();
			let Some(ctx) = context_2d(&canvas) else {
				return;
			};
			if let Some(ref s) = *state.borrow() {
				render::render(s, &ctx, &theme);
			}
		}
	};

	// Rebuild and refit whenever a new graph arrives.
	let (state_init, draw_init) = (state.clone(), draw.clone());
	Effect::new(move |_| {
		let data = graph.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);
		*state_init.borrow_mut() = Some(GraphCanvasState::new(data, width, height));
		draw_init();
	});

	let cursor_position = move |ev: &MouseEvent| -> Option<(f64, f64)> {
		let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?.into();
		let rect = canvas.get_bounding_client_rect();
		Some((
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		))
	};

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = cursor_position(&ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.pan.active = true;
			s.pan.start_x = x;
			s.pan.start_y = y;
			s.pan.transform_start_x = s.transform.x;
			s.pan.transform_start_y = s.transform.y;
		}
	};

	let (state_mm, draw_mm) = (state.clone(), draw.clone());
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = cursor_position(&ev) else {
			return;
		};
		let mut moved = false;
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if s.pan.active {
				s.transform.x = s.pan.transform_start_x + (x - s.pan.start_x);
				s.transform.y = s.pan.transform_start_y + (y - s.pan.start_y);
				moved = true;
			}
		}
		if moved {
			draw_mm();
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.pan.active = false;
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.pan.active = false;
		}
	};

	let (state_wh, draw_wh) = (state.clone(), draw.clone());
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = cursor_position(ev.as_ref()) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			let new_k = (s.transform.k * factor).clamp(0.1, 10.0);
			let ratio = new_k / s.transform.k;
			s.transform.x = x - (x - s.transform.x) * ratio;
			s.transform.y = y - (y - s.transform.y) * ratio;
			s.transform.k = new_k;
		}
		draw_wh();
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="hierarchy-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
