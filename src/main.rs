use anyhow::Result;

fn main() -> Result<()> {
    clipfind::cli::run()
}
