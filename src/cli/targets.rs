pub fn cmd_targets() {
    for target in julia_wasm::available_targets() {
        println!("{}", target);
    }
}
