//! Headless demo - steps the physics core with scripted input and logs
//! what happens. Run with RUST_LOG=debug for per-contact detail.

use brickfall_core::{FrameInput, GameConfig, World};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut world = match World::new(GameConfig::default()) {
        Ok(world) => world,
        Err(err) => {
            log::error!("configuration rejected: {err}");
            std::process::exit(1);
        }
    };

    let mut contacts_total = 0usize;
    for frame in 0..3600u64 {
        // Sweep the paddle back and forth so the ball gets bounced around
        let input = FrameInput {
            left_held: (frame / 120) % 2 == 0,
            right_held: (frame / 120) % 2 == 1,
        };
        contacts_total += world.update(input).len();

        if !world.ball.active {
            log::info!("ball lost at frame {frame}");
            break;
        }
        if !world.blocks_remaining() {
            log::info!("field cleared at frame {frame}");
            break;
        }
    }

    log::info!(
        "done after {} frames, {} contacts, {} destructible blocks left",
        world.frame(),
        contacts_total,
        world.blocks.remaining_destructible()
    );
}
