//! Build script for collecting information about the build via the `built` crate.
fn main() {
    built::write_built_file().expect("Failed to acquire build-time information");
}
