//! Parallax offsets: a pure function of scroll position and pointer
//! position, recomputed by the wrapper component on every scroll and
//! pointer-move event.

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

/// How much the pointer contributes relative to scroll.
const POINTER_FACTOR_SCALE: f64 = 0.05;

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub fn translate3d(&self) -> String {
        format!("transform: translate3d({:.2}px, {:.2}px, 0);", self.x, self.y)
    }
}

/// Computes the wrapper's translation. The scroll term lands on the axis
/// implied by `direction` (sign flipped for down/right); the pointer term
/// is the distance from the viewport center, scaled down.
pub fn offset(
    direction: Direction,
    factor: f64,
    scroll_y: f64,
    pointer: (f64, f64),
    viewport: (f64, f64),
) -> Offset {
    let mut x = 0.0;
    let mut y = 0.0;

    match direction {
        Direction::Up => y = scroll_y * factor,
        Direction::Down => y = -scroll_y * factor,
        Direction::Left => x = scroll_y * factor,
        Direction::Right => x = -scroll_y * factor,
    }

    let pointer_factor = factor * POINTER_FACTOR_SCALE;
    x += (pointer.0 - viewport.0 / 2.0) * pointer_factor;
    y += (pointer.1 - viewport.1 / 2.0) * pointer_factor;

    Offset { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: (f64, f64) = (1280.0, 720.0);
    const CENTER: (f64, f64) = (640.0, 360.0);

    #[test]
    fn up_direction_moves_along_y_with_scroll() {
        let o = offset(Direction::Up, 0.1, 200.0, CENTER, VIEWPORT);
        assert_eq!((o.x, o.y), (0.0, 20.0));
    }

    #[test]
    fn down_direction_flips_the_sign() {
        let o = offset(Direction::Down, 0.1, 200.0, CENTER, VIEWPORT);
        assert_eq!((o.x, o.y), (0.0, -20.0));
    }

    #[test]
    fn left_and_right_move_along_x() {
        let left = offset(Direction::Left, 0.2, 100.0, CENTER, VIEWPORT);
        assert_eq!((left.x, left.y), (20.0, 0.0));
        let right = offset(Direction::Right, 0.2, 100.0, CENTER, VIEWPORT);
        assert_eq!((right.x, right.y), (-20.0, 0.0));
    }

    #[test]
    fn pointer_offset_from_center_adds_a_scaled_term() {
        let o = offset(Direction::Up, 0.1, 0.0, (740.0, 460.0), VIEWPORT);
        // (pointer - center) * factor * 0.05 = 100 * 0.005
        assert!((o.x - 0.5).abs() < 1e-9);
        assert!((o.y - 0.5).abs() < 1e-9);
    }

    #[test]
    fn offsets_are_pure_in_their_inputs() {
        let a = offset(Direction::Right, 0.3, 450.0, (10.0, 20.0), VIEWPORT);
        let b = offset(Direction::Right, 0.3, 450.0, (10.0, 20.0), VIEWPORT);
        assert_eq!(a, b);
    }

    #[test]
    fn translate3d_renders_both_axes() {
        let style = Offset { x: 1.5, y: -2.0 }.translate3d();
        assert_eq!(style, "transform: translate3d(1.50px, -2.00px, 0);");
    }
}
