//! Obstacle field setup.
//!
//! The sweep never learns how the mask was populated; it only reads opacity
//! back through the frame. Anything that stamps [`OBSTACLE_COLOR`] pixels
//! works as a scene source.

use rand::Rng;

use crate::render::{Frame, OBSTACLE_COLOR};

/// Axis-aligned obstacle rectangle in surface coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

/// Scatter random box walls over the surface, 20 to 70 px per side.
pub fn scatter_obstacles(count: usize, max_x: u32, max_y: u32) -> Vec<Rect> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| Rect {
            x: rng.gen_range(0..max_x) as i32,
            y: rng.gen_range(0..max_y) as i32,
            w: rng.gen_range(20..70),
            h: rng.gen_range(20..70),
        })
        .collect()
}

/// Stamp the obstacle field into the frame.
pub fn draw_obstacles(frame: &mut Frame, obstacles: &[Rect]) {
    for r in obstacles {
        frame.fill_rect(r.x, r.y, r.w, r.h, OBSTACLE_COLOR);
    }
}
