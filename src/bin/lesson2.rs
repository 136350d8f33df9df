//! Fill the window with a single background colour.

use alien_invasion::Scene;

fn main() {
    alien_invasion::run(Scene::background_color());
}
