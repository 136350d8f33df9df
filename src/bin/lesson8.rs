//! Scale the ship up and keep it inside the window.

use alien_invasion::Scene;

fn main() {
    alien_invasion::run(Scene::scaling());
}
