// Same triangle drawn through an index buffer, flat-color shaded.

use pollster::block_on;
use wgpu_hello_world::{run, scene};

fn main() {
    if let Err(err) = block_on(run(scene::TRIANGLE_INDEXED)) {
        println!("{err}");
        std::process::exit(-1);
    }
}
