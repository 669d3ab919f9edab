use miette::Result;

/// Main entry point for the depviz CLI tool
fn main() -> Result<()> {
    miette::set_panic_hook();

    depviz::run()
}
