//! Cap the loop at 60 ticks per second.

use alien_invasion::Scene;

fn main() {
    alien_invasion::run(Scene::capped_frame_rate());
}
