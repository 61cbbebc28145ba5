use std::env;
use std::ffi::OsString;
use tracing::error;

fn main() {
    greeter_bridge::logging::init();

    let args: Vec<OsString> = env::args_os().collect();
    if let Err(err) = greeter_bridge::run(&args) {
        error!(%err, "failed to write greeting");
    }
}
