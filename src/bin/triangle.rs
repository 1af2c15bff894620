// Plain triangle, no index buffer, default white output.

use pollster::block_on;
use wgpu_hello_world::{run, scene};

fn main() {
    if let Err(err) = block_on(run(scene::TRIANGLE)) {
        println!("{err}");
        std::process::exit(-1);
    }
}
