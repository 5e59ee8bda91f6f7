#![allow(non_snake_case)]

use std::{f64::consts::PI, time::Duration};
use dioxus::{logger::tracing::warn, prelude::*};
use web_sys::{window, wasm_bindgen::JsCast, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::utils::particles::{ParticleField, LINK_DISTANCE};

const CANVAS_ID: &str = "particle-canvas";
const FRAME: Duration = Duration::from_millis(16);

fn canvas_context() -> Option<(HtmlCanvasElement, CanvasRenderingContext2d)> {
  let document = window()?.document()?;
  let canvas = document.get_element_by_id(CANVAS_ID)?.dyn_into::<HtmlCanvasElement>().ok()?;
  let ctx = canvas.get_context("2d").ok()??.dyn_into::<CanvasRenderingContext2d>().ok()?;
  Some((canvas, ctx))
}

fn viewport_size() -> (f64, f64) {
  let Some(win) = window() else { return (0.0, 0.0) };
  let width = win.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
  let height = win.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
  (width, height)
}

fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField) {
  let (width, height) = field.size();
  let particles = field.particles();

  // translucent fill leaves short trails
  ctx.set_global_alpha(1.0);
  ctx.set_fill_style_str("rgba(0, 0, 0, 0.05)");
  ctx.fill_rect(0.0, 0.0, width, height);

  for p in particles {
    let projected = p.project();
    ctx.set_global_alpha(projected.alpha);
    ctx.set_fill_style_str(&p.color());
    ctx.begin_path();
    if ctx.arc(projected.x, projected.y, projected.radius, 0.0, PI * 2.0).is_ok() {
      ctx.fill();
    }
  }

  ctx.set_line_width(0.5);
  for link in field.links(LINK_DISTANCE) {
    let (from, to) = (&particles[link.from], &particles[link.to]);
    let (a, b) = (from.project(), to.project());
    ctx.set_global_alpha(link.alpha);
    ctx.set_stroke_style_str(&from.color());
    ctx.begin_path();
    ctx.move_to(a.x, a.y);
    ctx.line_to(b.x, b.y);
    ctx.stroke();
  }
  ctx.set_global_alpha(1.0);
}

async fn animate() {
  let Some((canvas, ctx)) = canvas_context() else {
    warn!("no {} canvas found, skipping particle background", CANVAS_ID);
    return;
  };

  let (width, height) = viewport_size();
  let mut field = ParticleField::new(width, height, js_sys::Date::now() as u64);

  loop {
    let (width, height) = viewport_size();
    if (width, height) != field.size() {
      field.resize(width, height);
    }
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    field.step();
    draw(&ctx, &field);
    async_std::task::sleep(FRAME).await;
  }
}

#[component]
pub fn ParticleBackground() -> Element {
  rsx! {
    canvas {
      id: CANVAS_ID,
      class: "particle-canvas",
      // the task belongs to this component and stops when it unmounts
      onmounted: move |_evt| {
        spawn(animate());
      }
    }
  }
}
