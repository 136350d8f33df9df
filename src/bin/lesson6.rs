//! Move the ship with the arrow keys.

use alien_invasion::Scene;

fn main() {
    alien_invasion::run(Scene::movement());
}
