//=========================================================================
// Pointer Bridge — Demo
//
// Minimal rendering core: a scrolling checkerboard whose offset follows
// drained pointer movement. Click the window to capture the pointer,
// press Escape (or switch focus) to release it.
//
// Run with `RUST_LOG=debug` to see capture lifecycle logs.
//
//=========================================================================

use pointer_bridge::prelude::*;

//=== Checkerboard ========================================================

#[derive(Default)]
struct Checkerboard {
    offset: (f64, f64),
}

impl RenderCore for Checkerboard {
    fn render_frame(&mut self, frame: &mut Frame<'_>) {
        const TILE: i64 = 32;

        let movement = frame.drain_movement();
        self.offset.0 += movement.dx;
        self.offset.1 += movement.dy;

        let width = frame.width() as usize;
        let (ox, oy) = (self.offset.0 as i64, self.offset.1 as i64);

        for (y, row) in frame.pixels_mut().chunks_exact_mut(width).enumerate() {
            let ty = (y as i64 + oy).div_euclid(TILE);
            for (x, pixel) in row.iter_mut().enumerate() {
                let tx = (x as i64 + ox).div_euclid(TILE);
                *pixel = if (tx + ty).rem_euclid(2) == 0 { 0x00_20_20_20 } else { 0x00_D0_D0_D0 };
            }
        }
    }
}

//=== Entry Point =========================================================

fn main() {
    env_logger::init();

    let result = BridgeBuilder::new()
        .with_title("Pointer Bridge Demo")
        .build()
        .run(Checkerboard::default());

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
