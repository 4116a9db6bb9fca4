use anyhow::Result;

fn main() -> Result<()> {
    colorsort::cli::run()
}
