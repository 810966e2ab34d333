//=========================================================================
// Shape Helpers
//=========================================================================
//
// Stateless drawing functions shared by entity skins and scene
// backgrounds. Each helper scopes its style changes with save/restore.
//
//=========================================================================

use std::f32::consts::PI;

use super::surface::{Color, DrawingSurface, LinearGradient};

/// Fills the whole `width` x `height` area with a top-to-bottom gradient.
pub fn draw_gradient_rect(
    surface: &mut dyn DrawingSurface,
    top: Color,
    bottom: Color,
    width: f32,
    height: f32,
) {
    surface.save();
    surface.set_fill_gradient(LinearGradient {
        from: (0.0, 0.0),
        to: (0.0, height),
        start_color: top,
        end_color: bottom,
    });
    surface.fill_rect(0.0, 0.0, width, height);
    surface.restore();
}

pub fn draw_filled_rect(
    surface: &mut dyn DrawingSurface,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    color: Color,
) {
    surface.save();
    surface.set_fill_color(color);
    surface.fill_rect(x, y, width, height);
    surface.restore();
}

pub fn draw_solid_triangle(
    surface: &mut dyn DrawingSurface,
    a: (f32, f32),
    b: (f32, f32),
    c: (f32, f32),
    color: Color,
) {
    surface.save();
    surface.set_fill_color(color);
    surface.begin_path();
    surface.move_to(a.0, a.1);
    surface.line_to(b.0, b.1);
    surface.line_to(c.0, c.1);
    surface.close_path();
    surface.fill();
    surface.restore();
}

pub fn draw_circle(
    surface: &mut dyn DrawingSurface,
    cx: f32,
    cy: f32,
    radius: f32,
    fill: Color,
    stroke: Color,
) {
    surface.save();
    surface.set_fill_color(fill);
    surface.set_stroke_color(stroke);
    surface.begin_path();
    surface.arc(cx, cy, radius, 0.0, 2.0 * PI);
    surface.fill();
    surface.stroke();
    surface.restore();
}

/// Fills a rectangle anchored at `(x, y)` and rotated by `degrees`.
pub fn draw_rotated_rect(
    surface: &mut dyn DrawingSurface,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    degrees: f32,
    color: Color,
) {
    surface.save();
    surface.translate(x, y);
    surface.rotate(degrees.to_radians());
    surface.set_fill_color(color);
    surface.fill_rect(0.0, 0.0, width, height);
    surface.restore();
}

/// Star burst with `spikes` points alternating between two radii.
pub fn draw_star(
    surface: &mut dyn DrawingSurface,
    cx: f32,
    cy: f32,
    spikes: u32,
    outer_radius: f32,
    inner_radius: f32,
) {
    if spikes == 0 {
        return;
    }

    let step = PI / spikes as f32;
    let mut angle = -PI / 2.0;

    surface.save();
    surface.begin_path();
    surface.move_to(cx, cy - outer_radius);
    for _ in 0..spikes {
        surface.line_to(cx + angle.cos() * outer_radius, cy + angle.sin() * outer_radius);
        angle += step;
        surface.line_to(cx + angle.cos() * inner_radius, cy + angle.sin() * inner_radius);
        angle += step;
    }
    surface.line_to(cx, cy - outer_radius);
    surface.close_path();
    surface.set_line_width(5.0);
    surface.set_stroke_color(Color::RED);
    surface.stroke();
    surface.set_fill_color(Color::hex(0xFFD700));
    surface.fill();
    surface.restore();
}

//=========================================================================
// Unit Tests
//=========================================================================
