// Unit square out of two indexed triangles, flat-color shaded.

use pollster::block_on;
use wgpu_hello_world::{run, scene};

fn main() {
    if let Err(err) = block_on(run(scene::QUAD)) {
        println!("{err}");
        std::process::exit(-1);
    }
}
