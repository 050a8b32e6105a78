//! Entry point for the WASM application

pub fn main() {
    campus_assistant::start();
}
