//! Load a ship image and park it near the bottom of the window.

use alien_invasion::Scene;

fn main() {
    alien_invasion::run(Scene::loading_image());
}
