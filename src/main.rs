mod interactive;
mod occlusion;
mod render;
mod scene;


// Re-export public API
pub use interactive::{ShadowViewer, ViewerConfig};
pub use occlusion::{AngleTable, DIRECTIONS, OcclusionBuffer, spiral, sweep};
pub use render::{
    BACKDROP_COLOR, Frame, LIT_COLOR, OBSTACLE_COLOR, SHADOW_COLOR, classification_to_string,
    present_clipped, save_ppm,
};
pub use scene::{Rect, draw_obstacles, scatter_obstacles};

fn main() {
    env_logger::init();

    // Check for command line arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "--interactive" {
        run_interactive();
    } else if args.len() > 1 && args[1] == "--benchmark" {
        run_benchmark();
    } else {
        println!("Pixel Shadow Mapping Test");
        println!("Run with --interactive for minifb viewer");
        println!("Run with --benchmark to test performance");
    }
}

fn run_benchmark() {
    use rayon::prelude::*;
    use std::time::Instant;

    println!("=== Shadow Sweep Benchmark ===\n");

    // Test parameters
    let sides = [201usize, 401, 801];
    let buckets = 512;
    let iterations = 20;
    let (surface_w, surface_h) = (800usize, 600usize);

    let obstacles = scatter_obstacles(50, surface_w as u32, surface_h as u32);
    let (viewer_x, viewer_y) = (surface_w as i32 / 2, surface_h as i32 / 2);

    for side in sides {
        println!("Sweep window: {}x{}, {} angle buckets", side, side, buckets);
        println!("-----------------------");

        let table = AngleTable::new(side, buckets);
        let mut occlusion = OcclusionBuffer::new(buckets);
        let mut frame = Frame::new(surface_w, surface_h);

        let start = Instant::now();
        for _ in 0..iterations {
            frame.clear(LIT_COLOR);
            draw_obstacles(&mut frame, &obstacles);
            sweep(&table, &mut occlusion, &mut frame, viewer_x, viewer_y);
        }
        let elapsed = start.elapsed();
        let avg_ms = elapsed.as_secs_f64() * 1000.0 / iterations as f64;

        println!("  Full redraw + sweep: {:.3} ms/iter", avg_ms);
        println!("  Estimated max FPS:   {:.1}", 1000.0 / avg_ms);
        println!();
    }

    // Multi-viewer batch: one shared table, an independent sweep per viewer
    println!("=== 4-Viewer Batch ===");
    println!("(Shared angle table; each sweep owns its occlusion buffer and frame)\n");

    let side = 401;
    let table = AngleTable::new(side, buckets);
    let mut base = Frame::new(surface_w, surface_h);
    draw_obstacles(&mut base, &obstacles);
    let viewers = [(300, 250), (500, 250), (300, 350), (500, 350)];

    // Sequential
    let start = Instant::now();
    for _ in 0..iterations {
        let _frames: Vec<Frame> = viewers
            .iter()
            .map(|&(vx, vy)| {
                let mut frame = base.clone();
                let mut occlusion = OcclusionBuffer::new(buckets);
                sweep(&table, &mut occlusion, &mut frame, vx, vy);
                frame
            })
            .collect();
    }
    let elapsed_sequential = start.elapsed();
    let avg_sequential_ms = elapsed_sequential.as_secs_f64() * 1000.0 / iterations as f64;

    // Parallel with rayon
    let start = Instant::now();
    for _ in 0..iterations {
        let _frames: Vec<Frame> = viewers
            .par_iter()
            .map(|&(vx, vy)| {
                let mut frame = base.clone();
                let mut occlusion = OcclusionBuffer::new(buckets);
                sweep(&table, &mut occlusion, &mut frame, vx, vy);
                frame
            })
            .collect();
    }
    let elapsed_parallel = start.elapsed();
    let avg_parallel_ms = elapsed_parallel.as_secs_f64() * 1000.0 / iterations as f64;

    let speedup = avg_sequential_ms / avg_parallel_ms;

    println!("Sweep window: {}x{}, 4 viewers", side, side);
    println!("-----------------------");
    println!("  Sequential:       {:.3} ms/iter", avg_sequential_ms);
    println!("  Parallel (rayon): {:.3} ms/iter", avg_parallel_ms);
    println!("  Speedup: {:.2}x", speedup);
    println!();

    let fps_sequential = 1000.0 / avg_sequential_ms;
    let fps_parallel = 1000.0 / avg_parallel_ms;
    println!("Estimated max FPS (shadows only):");
    println!("  Sequential: {:.1} FPS", fps_sequential);
    println!("  Parallel:   {:.1} FPS", fps_parallel);
}

fn run_interactive() {
    let config = ViewerConfig::default();

    match ShadowViewer::new(config) {
        Ok(mut viewer) => {
            if let Err(e) = viewer.run() {
                eprintln!("Error: {}", e);
            }
        }
        Err(e) => {
            eprintln!("Failed to create viewer: {}", e);
        }
    }
}
