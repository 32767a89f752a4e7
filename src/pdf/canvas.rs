use lopdf::content::Operation;
use lopdf::{Object, StringFormat};

use crate::metrics::BuiltinFont;

/// Bézier control-point factor for quarter circles.
const KAPPA: f32 = 0.552_284_8;

/// RGB colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const SILVER: Color = Color::rgb(0.752_941, 0.752_941, 0.752_941);
    pub const GRAY: Color = Color::rgb(0.501_961, 0.501_961, 0.501_961);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    fn operands(self) -> Vec<Object> {
        vec![self.r.into(), self.g.into(), self.b.into()]
    }
}

/// Content stream of a single page.
#[derive(Debug, Default)]
pub struct Canvas {
    operations: Vec<Operation>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn into_operations(self) -> Vec<Operation> {
        self.operations
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.operations.push(Operation::new(operator, operands));
    }

    pub fn save_state(&mut self) {
        self.push("q", vec![]);
    }

    pub fn restore_state(&mut self) {
        self.push("Q", vec![]);
    }

    pub fn translate(&mut self, x: f32, y: f32) {
        self.transform([1.0, 0.0, 0.0, 1.0, x, y]);
    }

    pub fn transform(&mut self, matrix: [f32; 6]) {
        self.push("cm", matrix.iter().map(|v| (*v).into()).collect());
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        self.push("RG", color.operands());
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.push("rg", color.operands());
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.push("w", vec![width.into()]);
    }

    fn rect_path(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.push(
            "re",
            vec![x.into(), y.into(), width.into(), height.into()],
        );
    }

    /// Outline a rectangle with the current stroke colour.
    pub fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.rect_path(x, y, width, height);
        self.push("S", vec![]);
    }

    pub fn fill_stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.rect_path(x, y, width, height);
        self.push("B", vec![]);
    }

    /// Closed polygon, filled then stroked. Fewer than three points is a no-op.
    pub fn fill_stroke_polygon(&mut self, points: &[(f32, f32)]) {
        let [first, rest @ ..] = points else {
            return;
        };
        if rest.len() < 2 {
            return;
        }
        self.push("m", vec![first.0.into(), first.1.into()]);
        for (x, y) in rest {
            self.push("l", vec![(*x).into(), (*y).into()]);
        }
        self.push("h", vec![]);
        self.push("B", vec![]);
    }

    pub fn fill_stroke_circle(&mut self, cx: f32, cy: f32, radius: f32) {
        let k = radius * KAPPA;
        self.push("m", vec![(cx + radius).into(), cy.into()]);
        let arcs = [
            [cx + radius, cy + k, cx + k, cy + radius, cx, cy + radius],
            [cx - k, cy + radius, cx - radius, cy + k, cx - radius, cy],
            [cx - radius, cy - k, cx - k, cy - radius, cx, cy - radius],
            [cx + k, cy - radius, cx + radius, cy - k, cx + radius, cy],
        ];
        for arc in arcs {
            self.push("c", arc.iter().map(|v| (*v).into()).collect());
        }
        self.push("h", vec![]);
        self.push("B", vec![]);
    }

    /// Single-line text run with its baseline starting at `(x, y)`.
    pub fn draw_text(&mut self, font: BuiltinFont, size: f32, x: f32, y: f32, text: &str) {
        self.push("BT", vec![]);
        self.push(
            "Tf",
            vec![
                Object::Name(font.resource_name().as_bytes().to_vec()),
                size.into(),
            ],
        );
        self.push("Td", vec![x.into(), y.into()]);
        self.push(
            "Tj",
            vec![Object::String(win_ansi(text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }

    /// Paint an image XObject scaled into the given box.
    pub fn draw_image(&mut self, name: &str, x: f32, y: f32, width: f32, height: f32) {
        self.save_state();
        self.transform([width, 0.0, 0.0, height, x, y]);
        self.push("Do", vec![Object::Name(name.as_bytes().to_vec())]);
        self.restore_state();
    }
}

/// Encode text for a base-14 font using WinAnsiEncoding. Characters outside
/// the code page become `?`.
pub fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch as u32 {
            0x20..=0x7E | 0xA0..=0xFF => ch as u8,
            _ => match ch {
                '€' => 0x80,
                '‚' => 0x82,
                '…' => 0x85,
                '‘' => 0x91,
                '’' => 0x92,
                '“' => 0x93,
                '”' => 0x94,
                '•' => 0x95,
                '–' => 0x96,
                '—' => 0x97,
                '™' => 0x99,
                _ => b'?',
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn operators(canvas: &Canvas) -> Vec<&str> {
        canvas
            .operations()
            .iter()
            .map(|op| op.operator.as_str())
            .collect()
    }

    #[test]
    fn stroke_rect_emits_path_and_stroke() {
        let mut canvas = Canvas::new();
        canvas.stroke_rect(1.0, 2.0, 3.0, 4.0);
        assert_eq!(operators(&canvas), vec!["re", "S"]);
        assert_eq!(canvas.operations()[0].operands.len(), 4);
    }

    #[test]
    fn circle_is_four_curves() {
        let mut canvas = Canvas::new();
        canvas.fill_stroke_circle(5.0, 5.0, 2.0);
        assert_eq!(operators(&canvas), vec!["m", "c", "c", "c", "c", "h", "B"]);
    }

    #[test]
    fn degenerate_polygon_draws_nothing() {
        let mut canvas = Canvas::new();
        canvas.fill_stroke_polygon(&[(0.0, 0.0), (1.0, 1.0)]);
        assert!(canvas.operations().is_empty());
        canvas.fill_stroke_polygon(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
        assert_eq!(operators(&canvas), vec!["m", "l", "l", "h", "B"]);
    }

    #[test]
    fn text_selects_font_resource() {
        let mut canvas = Canvas::new();
        canvas.draw_text(BuiltinFont::HelveticaBold, 10.0, 3.0, 4.0, "Goo");
        assert_eq!(operators(&canvas), vec!["BT", "Tf", "Td", "Tj", "ET"]);
        assert!(matches!(
            &canvas.operations()[1].operands[0],
            Object::Name(name) if name.as_slice() == b"F2"
        ));
    }

    #[test]
    fn win_ansi_maps_latin1_and_replaces_the_rest() {
        assert_eq!(win_ansi("Café"), b"Caf\xe9".to_vec());
        assert_eq!(win_ansi("a—b"), b"a\x97b".to_vec());
        assert_eq!(win_ansi("日"), b"?".to_vec());
    }
}
