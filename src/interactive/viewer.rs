//! Interactive shadow viewer - mouse controls the viewer position in real-time

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use crate::occlusion::{AngleTable, OcclusionBuffer, sweep};
use crate::render::{Frame, LIT_COLOR, present_clipped};
use crate::scene::{Rect, draw_obstacles, scatter_obstacles};

/// Configuration for the interactive viewer
#[derive(Clone)]
pub struct ViewerConfig {
    /// Surface size in pixels (width x height)
    pub surface_size: (usize, usize),
    /// Sweep window side; must be odd
    pub window_side: usize,
    /// Angle resolution of the occlusion buffer
    pub buckets: usize,
    /// Number of scattered box walls
    pub obstacle_count: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            surface_size: (800, 600),
            window_side: 1201,
            buckets: 512,
            obstacle_count: 50,
        }
    }
}

/// Interactive viewer: the pointer drags the light over an obstacle field
/// and the shadow sweep reruns every frame.
pub struct ShadowViewer {
    config: ViewerConfig,
    table: AngleTable,
    occlusion: OcclusionBuffer,
    obstacles: Vec<Rect>,
    frame: Frame,
    window: Window,
    buffer: Vec<u32>,
    last_stamp: Option<(i32, i32)>,
}

impl ShadowViewer {
    /// Create a new interactive viewer with the given configuration
    pub fn new(config: ViewerConfig) -> Result<Self, String> {
        let (surface_w, surface_h) = config.surface_size;

        let window = Window::new(
            "Pixel Shadow Mapping - Interactive Viewer (ESC to exit)",
            surface_w,
            surface_h,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| e.to_string())?;

        let table = AngleTable::new(config.window_side, config.buckets);
        let occlusion = OcclusionBuffer::new(config.buckets);
        let obstacles = scatter_obstacles(config.obstacle_count, surface_w as u32, surface_h as u32);
        log::info!(
            "scattered {} obstacles over a {}x{} surface",
            obstacles.len(),
            surface_w,
            surface_h
        );

        Ok(Self {
            config,
            table,
            occlusion,
            obstacles,
            frame: Frame::new(surface_w, surface_h),
            window,
            buffer: vec![0u32; surface_w * surface_h],
            last_stamp: None,
        })
    }

    /// Run the interactive viewer loop
    pub fn run(&mut self) -> Result<(), String> {
        let (surface_w, surface_h) = self.config.surface_size;
        // Presentation clip matches half the sweep window, so every visible
        // pixel was classified by the sweep.
        let clip = (self.config.window_side / 2) as u32;

        self.window.set_target_fps(60);

        println!("=== Interactive Shadow Viewer ===");
        println!("Controls:");
        println!("  Mouse      - Move viewer/light");
        println!("  Left Click - Stamp an obstacle");
        println!("  Right Click- Clear all obstacles");
        println!("  R          - Rescatter obstacles");
        println!("  C          - Clear obstacles");
        println!("  ESC        - Exit");
        println!();

        while self.window.is_open() && !self.window.is_key_down(Key::Escape) {
            if self.window.is_key_pressed(Key::R, KeyRepeat::No) {
                self.obstacles =
                    scatter_obstacles(self.config.obstacle_count, surface_w as u32, surface_h as u32);
                log::debug!("rescattered {} obstacles", self.obstacles.len());
            }
            if self.window.is_key_pressed(Key::C, KeyRepeat::No) {
                self.obstacles.clear();
                println!("Obstacles cleared");
            }

            if let Some((mx, my)) = self.window.get_mouse_pos(MouseMode::Discard) {
                let (viewer_x, viewer_y) = (mx as i32, my as i32);

                if self.window.get_mouse_down(MouseButton::Left) {
                    // One stamp per press-and-hold position
                    if self.last_stamp != Some((viewer_x, viewer_y)) {
                        self.obstacles.push(Rect {
                            x: viewer_x - 15,
                            y: viewer_y - 15,
                            w: 30,
                            h: 30,
                        });
                        self.last_stamp = Some((viewer_x, viewer_y));
                    }
                } else {
                    self.last_stamp = None;
                }

                if self.window.get_mouse_down(MouseButton::Right) {
                    self.obstacles.clear();
                }

                self.frame.clear(LIT_COLOR);
                draw_obstacles(&mut self.frame, &self.obstacles);
                sweep(
                    &self.table,
                    &mut self.occlusion,
                    &mut self.frame,
                    viewer_x,
                    viewer_y,
                );
                present_clipped(&self.frame, &mut self.buffer, viewer_x, viewer_y, clip, clip);
            }

            self.window
                .update_with_buffer(&self.buffer, surface_w, surface_h)
                .map_err(|e| e.to_string())?;
        }

        Ok(())
    }
}
