//! Draw a rectangle, a circle and a line.

use alien_invasion::Scene;

fn main() {
    alien_invasion::run(Scene::drawing_shapes());
}
