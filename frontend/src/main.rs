//! Entry point for the WASM application

pub fn main() {
    publish_frontend::run();
}
