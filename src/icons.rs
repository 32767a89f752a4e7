//! Stat icons drawn in the card header.
//!
//! Both icons are laid out in a `size` x `size` box whose bottom-left corner
//! is `(x, y)`.

use crate::pdf::{Canvas, Color};

const ICON_LINE_WIDTH: f32 = 1.0;

pub fn draw_heart(canvas: &mut Canvas, x: f32, y: f32, size: f32) {
    canvas.save_state();
    canvas.translate(x, y);
    canvas.set_line_width(ICON_LINE_WIDTH);
    canvas.set_fill_color(Color::RED);
    canvas.set_stroke_color(Color::RED);

    canvas.fill_stroke_circle(size * 0.3, size * 0.7, size * 0.2);
    canvas.fill_stroke_circle(size * 0.7, size * 0.7, size * 0.2);
    canvas.fill_stroke_polygon(&[
        (size * 0.1, size * 0.7),
        (size * 0.5, size * 0.1),
        (size * 0.9, size * 0.7),
    ]);

    canvas.restore_state();
}

pub fn draw_sword(canvas: &mut Canvas, x: f32, y: f32, size: f32) {
    canvas.save_state();
    canvas.translate(x, y);
    canvas.set_line_width(ICON_LINE_WIDTH);
    canvas.set_stroke_color(Color::BLACK);

    let blade_width = size * 0.15;
    let blade_height = size * 0.65;
    let blade_x = (size - blade_width) / 2.0;
    let blade_y = size * 0.25;
    canvas.set_fill_color(Color::SILVER);
    canvas.fill_stroke_rect(blade_x, blade_y, blade_width, blade_height);

    let tip_height = size * 0.1;
    canvas.fill_stroke_polygon(&[
        (size / 2.0, blade_y + blade_height + tip_height),
        (blade_x, blade_y + blade_height),
        (blade_x + blade_width, blade_y + blade_height),
    ]);

    // crossguard straddles the bottom of the blade
    let guard_width = size * 0.6;
    let guard_height = size * 0.05;
    let guard_x = (size - guard_width) / 2.0;
    let guard_y = blade_y - guard_height / 2.0;
    canvas.set_fill_color(Color::GRAY);
    canvas.fill_stroke_rect(guard_x, guard_y, guard_width, guard_height);

    let handle_height = size * 0.25;
    canvas.set_fill_color(Color::BLACK);
    canvas.fill_stroke_rect(blade_x, guard_y - handle_height, blade_width, handle_height);

    canvas.restore_state();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn count(canvas: &Canvas, operator: &str) -> usize {
        canvas
            .operations()
            .iter()
            .filter(|op| op.operator == operator)
            .count()
    }

    #[test]
    fn heart_is_two_circles_and_a_triangle() {
        let mut canvas = Canvas::new();
        draw_heart(&mut canvas, 10.0, 20.0, 12.0);
        assert_eq!(count(&canvas, "c"), 8);
        assert_eq!(count(&canvas, "l"), 2);
        assert_eq!(count(&canvas, "B"), 3);
        assert_eq!(canvas.operations().first().unwrap().operator, "q");
        assert_eq!(canvas.operations().last().unwrap().operator, "Q");
    }

    #[test]
    fn sword_has_blade_tip_guard_and_handle() {
        let mut canvas = Canvas::new();
        draw_sword(&mut canvas, 0.0, 0.0, 12.0);
        assert_eq!(count(&canvas, "re"), 3);
        assert_eq!(count(&canvas, "l"), 2);
        assert_eq!(count(&canvas, "B"), 4);
        assert_eq!(count(&canvas, "rg"), 3);
    }
}
