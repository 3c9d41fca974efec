use anyhow::Result;

use fetchbuild_builder::entrypoint;

fn main() -> Result<()> {
    entrypoint()
}
