// Demo scene drawn in logical space
use web_sys::CanvasRenderingContext2d;

use interactive_canvas::error::Result;
use interactive_canvas::util::format_transform;
use interactive_canvas::{Matrix, TrackedSurface};

const GRID_STEP: f64 = 50.0;
const MAX_GRID_LINES: f64 = 2000.0;
// Device positions that stay fixed on screen whatever the view.
const CONTROL_POINTS: [(f64, f64); 4] = [(200.0, 200.0), (180.0, 200.0), (300.0, 300.0), (320.0, 300.0)];

pub fn draw_scene(surface: &mut TrackedSurface<CanvasRenderingContext2d>) -> Result<()> {
    draw_grid(surface);

    let zoom = surface.get_transform().determinant().abs().sqrt().max(f64::EPSILON);
    surface.with_surface(|ctx| -> Result<()> {
        ctx.set_fill_style_str("#e5534b");
        ctx.begin_path();
        ctx.arc(250.0, 250.0, 40.0, 0.0, std::f64::consts::PI * 2.0)?;
        ctx.fill();

        // Marker size is divided by the zoom so it keeps a constant on-screen size.
        ctx.set_fill_style_str("#58a6ff");
        let r = 4.0 / zoom;
        for (x, y) in CONTROL_POINTS {
            let p = surface.transformed_point(x, y);
            ctx.fill_rect(p.x - r, p.y - r, r * 2.0, r * 2.0);
        }
        Ok(())
    })?;

    draw_label(surface)
}

fn draw_grid(surface: &TrackedSurface<CanvasRenderingContext2d>) {
    let r = surface.visible_rect();
    if !(r.min.is_finite() && r.max.is_finite()) || r.width().max(r.height()) / GRID_STEP > MAX_GRID_LINES {
        return;
    }
    let line_width = (1.0 / surface.get_transform().determinant().abs().sqrt()).max(0.001);
    surface.with_surface(|ctx| {
        ctx.set_stroke_style_str("#30363d");
        ctx.set_line_width(line_width);
        ctx.begin_path();
        let mut x = (r.min.x / GRID_STEP).floor() * GRID_STEP;
        while x <= r.max.x {
            ctx.move_to(x, r.min.y);
            ctx.line_to(x, r.max.y);
            x += GRID_STEP;
        }
        let mut y = (r.min.y / GRID_STEP).floor() * GRID_STEP;
        while y <= r.max.y {
            ctx.move_to(r.min.x, y);
            ctx.line_to(r.max.x, y);
            y += GRID_STEP;
        }
        ctx.stroke();
    });
}

/// Current zoom and offset, in device space.
fn draw_label(surface: &mut TrackedSurface<CanvasRenderingContext2d>) -> Result<()> {
    let label = format_transform(&surface.get_transform());
    surface.save();
    let drawn = surface.set_transform(Matrix::IDENTITY).and_then(|()| {
        surface.with_surface(|ctx| {
            ctx.set_fill_style_str("#c9d1d9");
            ctx.set_font("14px monospace");
            ctx.fill_text(&label, 8.0, 18.0)?;
            Ok(())
        })
    });
    surface.restore();
    drawn
}
