/// Binary entrypoint for the `reachout` executable.
///
/// Keeps the binary thin: all the logic lives in the `reachout_lib` crate so
/// unit tests can import library functions directly.
fn main() {
    reachout_lib::run();
}
