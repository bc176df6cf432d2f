fn main() {
    println!("cargo::rustc-check-cfg=cfg(checked_preconditions)");

    let forced_on = std::env::var("CARGO_FEATURE_CHECKED").is_ok();
    let forced_off = std::env::var("CARGO_FEATURE_UNCHECKED").is_ok();
    let debug_assertions = std::env::var("CARGO_CFG_DEBUG_ASSERTIONS").is_ok();

    if forced_on || (debug_assertions && !forced_off) {
        println!("cargo::rustc-cfg=checked_preconditions");
    }
}
