mod app;
mod boot;

fn main() {
    console_error_panic_hook::set_once();
    // Logger init fails only on double-init; logging is best-effort.
    let _ = console_log::init_with_level(log::Level::Info);

    if let Err(err) = boot::boot() {
        panic!("startup failed: {err}");
    }
}
